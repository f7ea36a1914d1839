//! Regression harness for six-axis robot motion programs: drives an
//! external path-simulation engine through a narrow call interface and
//! verifies that each program step returns the expected error
//! classification (wrist/shoulder singularity, kinematic path limits,
//! axis flip, unreachable targets, invalid arc moves).
//!
//! The engine itself — the kinematics solver, singularity detection and
//! the time-stepped trajectory simulator — is an external collaborator
//! behind the [`simulator::PathSimulator`] trait. This crate contributes
//! the parts around it:
//!
//! - A declarative [`program::Program`] / [`program::Step`] fixture
//!   model: ordered motion instructions with move type, six-axis target,
//!   blending radius, speed and acceleration caps, and the expected
//!   [`flags::PathErrorFlags`] classification pinned per engine version.
//! - [`sampling::Sampling`] strategies (time, distance or angle based),
//!   because the engine's error detection accuracy depends on step
//!   granularity: coarser steps replace the true kinematic mask with an
//!   "inaccurate" classification.
//! - The [`harness::Verifier`] that loads a cell once, submits each
//!   program and compares every returned mask against the expectation
//!   with exact equality.
//! - The [`scenarios`] regression suite with the historically-observed
//!   edge cases, and a [`scripted::ScriptedSimulator`] replay oracle for
//!   exercising the harness without a live engine.
//!
//! # Examples
//!
//! - **main.rs**: runs the whole regression suite against a scripted
//!   oracle and prints the per-step verdicts.

pub mod flags;
pub mod program;
pub mod sampling;

pub mod cell;

#[cfg(feature = "allow_filesystem")]
pub mod cell_error;
#[cfg(feature = "allow_filesystem")]
pub mod cell_from_file;

pub mod simulator;

pub mod scripted;

pub mod harness;

pub mod scenarios;

#[cfg(test)]
#[cfg(feature = "allow_filesystem")]
mod tests;
