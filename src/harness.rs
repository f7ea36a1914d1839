//! Execution harness: submits programs to a path simulator and verifies
//! the returned error classification of every step.
//!
//! The harness holds no mutable state across programs: the cell is
//! read-only, each verification is one blocking call into the simulator,
//! and a mismatch in one program cannot affect the next. Mismatches are
//! reported, never retried.

use std::fmt;

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};

use crate::cell::RobotCell;
use crate::flags::PathErrorFlags;
use crate::program::{MoveType, Program};
use crate::sampling::Sampling;
use crate::simulator::PathSimulator;

/// Expected vs returned classification for one step. The comparison is
/// exact mask equality; a superset or subset of the expected flags is a
/// mismatch.
#[derive(Debug, Clone, PartialEq)]
pub struct StepVerdict {
    pub label: String,
    pub expected: PathErrorFlags,
    pub actual: PathErrorFlags,
}

impl StepVerdict {
    pub fn matched(&self) -> bool {
        self.expected == self.actual
    }
}

/// Outcome of verifying one program under one sampling configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationReport {
    pub program: String,
    /// Sampling label of the run, embedded for human-readable reporting.
    pub sampling: String,
    pub verdicts: Vec<StepVerdict>,
}

impl VerificationReport {
    pub fn passed(&self) -> bool {
        self.verdicts.iter().all(StepVerdict::matched)
    }

    pub fn mismatches(&self) -> Vec<&StepVerdict> {
        self.verdicts
            .iter()
            .filter(|verdict| !verdict.matched())
            .collect()
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            formatter,
            "{} [{}]: {}",
            self.program,
            self.sampling,
            if self.passed() { "PASS" } else { "FAIL" }
        )?;
        for verdict in &self.verdicts {
            if verdict.matched() {
                writeln!(formatter, "  {:>10}  {:?}", verdict.label, verdict.actual)?;
            } else {
                writeln!(
                    formatter,
                    "  {:>10}  expected {:?}, returned {:?}",
                    verdict.label, verdict.expected, verdict.actual
                )?;
            }
        }
        Ok(())
    }
}

/// Drives programs through a [`PathSimulator`] under one sampling
/// configuration and compares per-step classifications against the
/// expectations pinned in the fixtures.
pub struct Verifier<'a> {
    cell: &'a RobotCell,
    simulator: &'a dyn PathSimulator,
    sampling: Sampling,
}

impl<'a> Verifier<'a> {
    pub fn new(
        cell: &'a RobotCell,
        simulator: &'a dyn PathSimulator,
        sampling: Sampling,
    ) -> Verifier<'a> {
        Verifier {
            cell,
            simulator,
            sampling,
        }
    }

    pub fn sampling(&self) -> &Sampling {
        &self.sampling
    }

    /// Submit the program and compare the returned classification of
    /// every step against its expectation.
    ///
    /// `Err` means the run could not produce verdicts at all: the
    /// simulator call failed, the program violates the call contract
    /// (auxiliary point on a non-arc move, TCP index outside the cell),
    /// or the engine returned a report of the wrong length. A mismatch
    /// between expected and returned flags is NOT an `Err`; it is
    /// reported through [`VerificationReport::passed`].
    pub fn verify(&self, program: &Program) -> Result<VerificationReport> {
        self.check_submittable(program)?;

        let report = self
            .simulator
            .simulate(self.cell, program, &self.sampling)
            .with_context(|| format!("Path simulation failed for program [{}]", program.name()))?;

        if report.outcomes.len() != program.len() {
            bail!(
                "Engine returned {} outcomes for the {} steps of program [{}]",
                report.outcomes.len(),
                program.len(),
                program.name()
            );
        }

        let sampling = self.sampling.label();
        let mut verdicts = Vec::with_capacity(program.len());
        for (step, outcome) in program.steps().iter().zip(report.outcomes) {
            let verdict = StepVerdict {
                label: step.label.clone(),
                expected: step.expect.flags,
                actual: outcome.flags,
            };
            if verdict.matched() {
                debug!(
                    "{} / {} [{}]: {:?}",
                    program.name(),
                    step.label,
                    sampling,
                    verdict.actual
                );
            } else {
                warn!(
                    "{} / {} [{}]: expected {:?}, returned {:?}",
                    program.name(),
                    step.label,
                    sampling,
                    verdict.expected,
                    verdict.actual
                );
            }
            verdicts.push(verdict);
        }

        Ok(VerificationReport {
            program: program.name().to_string(),
            sampling,
            verdicts,
        })
    }

    // The same authoring mistakes the engine would reject at submission;
    // caught here so a scripted run and a live run fail identically.
    fn check_submittable(&self, program: &Program) -> Result<()> {
        for step in program.steps() {
            let arc = step.move_type == MoveType::Arc;
            if arc && step.arc_via.is_none() {
                bail!(
                    "Program [{}] step [{}]: arc move without auxiliary point",
                    program.name(),
                    step.label
                );
            }
            if !arc && step.arc_via.is_some() {
                bail!(
                    "Program [{}] step [{}]: auxiliary point on a non-arc move",
                    program.name(),
                    step.label
                );
            }
            if self.cell.tool(step.tcp).is_none() {
                bail!(
                    "Program [{}] step [{}]: TCP index {} outside the {} tools of cell [{}]",
                    program.name(),
                    step.label,
                    step.tcp,
                    self.cell.tools.len(),
                    self.cell.robot
                );
            }
        }
        Ok(())
    }
}
