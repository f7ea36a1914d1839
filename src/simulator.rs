//! The call seam to the external path-simulation engine.
//!
//! The engine itself (kinematics, singularity detection, time-stepped
//! trajectory simulation) is an external collaborator. This crate only
//! depends on the call contract expressed by [`PathSimulator`]: submit a
//! robot cell, a program and a sampling configuration, receive one error
//! classification per step. Error classifications are data in the
//! returned report; `Err` is reserved for transport-level failures such
//! as an unreachable engine or a violated call contract.

use crate::cell::RobotCell;
use crate::flags::PathErrorFlags;
use crate::program::Program;
use crate::sampling::Sampling;
use anyhow::Result;

/// Classification the engine returned for one step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub label: String,
    pub flags: PathErrorFlags,
}

/// Per-step classifications for one simulated program, in step order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimulationReport {
    pub outcomes: Vec<StepOutcome>,
}

impl SimulationReport {
    /// Flags the engine returned for the step with the given label.
    pub fn flags_for(&self, label: &str) -> Option<PathErrorFlags> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.label == label)
            .map(|outcome| outcome.flags)
    }

    /// Aggregate classification: the union of all per-step flags.
    pub fn aggregate(&self) -> PathErrorFlags {
        self.outcomes
            .iter()
            .fold(PathErrorFlags::NO_ERROR, |acc, outcome| {
                acc | outcome.flags
            })
    }
}

/// Narrow interface of the external simulation engine.
///
/// Implementations make one blocking call per program. The harness never
/// retries: if the engine's behavior differs between versions, the
/// fixture expectations are updated, not the call.
pub trait PathSimulator {
    fn simulate(
        &self,
        cell: &RobotCell,
        program: &Program,
        sampling: &Sampling,
    ) -> Result<SimulationReport>;
}
