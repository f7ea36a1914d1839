//! Scripted stand-in for the external engine.
//!
//! Replays recorded per-step classifications keyed by program name,
//! sampling label and step label. Used by this crate's own tests and the
//! demo binary, and useful wherever harness mechanics must be exercised
//! without a live engine connection. Because recordings are keyed by the
//! sampling label, the same step can replay different classifications
//! under different step sizes, reproducing the granularity sensitivity
//! of the real engine.

use std::collections::HashMap;

use anyhow::{Result, bail};

use crate::cell::RobotCell;
use crate::flags::PathErrorFlags;
use crate::program::{MoveType, Program};
use crate::sampling::Sampling;
use crate::simulator::{PathSimulator, SimulationReport, StepOutcome};

/// (program name, sampling label, step label)
type ResponseKey = (String, String, String);

/// Replay oracle implementing [`PathSimulator`]. Steps without a
/// recording replay as `NO_ERROR`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSimulator {
    responses: HashMap<ResponseKey, PathErrorFlags>,
}

impl ScriptedSimulator {
    pub fn new() -> ScriptedSimulator {
        ScriptedSimulator::default()
    }

    /// Record the classification to replay for one step of one program
    /// under the given sampling.
    pub fn record(
        &mut self,
        program: &str,
        sampling: &Sampling,
        step: &str,
        flags: PathErrorFlags,
    ) {
        self.record_label(program, &sampling.label(), step, flags);
    }

    fn record_label(
        &mut self,
        program: &str,
        sampling_label: &str,
        step: &str,
        flags: PathErrorFlags,
    ) {
        self.responses.insert(
            (
                program.to_string(),
                sampling_label.to_string(),
                step.to_string(),
            ),
            flags,
        );
    }

    /// An oracle that replays exactly what the given programs expect
    /// under the given sampling. Convenient as the all-green baseline for
    /// harness demos and mismatch tests.
    pub fn agreeing_with<'a, I>(programs: I, sampling: &Sampling) -> ScriptedSimulator
    where
        I: IntoIterator<Item = &'a Program>,
    {
        let mut simulator = ScriptedSimulator::new();
        for program in programs {
            for step in program.steps() {
                simulator.record(program.name(), sampling, &step.label, step.expect.flags);
            }
        }
        simulator
    }

    fn replay(&self, program: &str, sampling_label: &str, step: &str) -> PathErrorFlags {
        self.responses
            .get(&(
                program.to_string(),
                sampling_label.to_string(),
                step.to_string(),
            ))
            .copied()
            .unwrap_or(PathErrorFlags::NO_ERROR)
    }
}

impl PathSimulator for ScriptedSimulator {
    /// Replays recorded flags after checking the parts of the call
    /// contract the real engine rejects at submission time.
    fn simulate(
        &self,
        cell: &RobotCell,
        program: &Program,
        sampling: &Sampling,
    ) -> Result<SimulationReport> {
        for step in program.steps() {
            match step.move_type {
                MoveType::Arc => {
                    if step.arc_via.is_none() {
                        bail!(
                            "program [{}] step [{}]: arc move without auxiliary point",
                            program.name(),
                            step.label
                        );
                    }
                }
                MoveType::Joint | MoveType::Frame => {
                    if step.arc_via.is_some() {
                        bail!(
                            "program [{}] step [{}]: auxiliary point on a non-arc move",
                            program.name(),
                            step.label
                        );
                    }
                }
            }
            if cell.tool(step.tcp).is_none() {
                bail!(
                    "program [{}] step [{}]: TCP index {} outside the {} tools of cell [{}]",
                    program.name(),
                    step.label,
                    step.tcp,
                    cell.tools.len(),
                    cell.robot
                );
            }
        }

        let sampling_label = sampling.label();
        let outcomes = program
            .steps()
            .iter()
            .map(|step| StepOutcome {
                label: step.label.clone(),
                flags: self.replay(program.name(), &sampling_label, &step.label),
            })
            .collect();
        Ok(SimulationReport { outcomes })
    }
}

#[cfg(feature = "allow_filesystem")]
mod from_file {
    use std::collections::HashMap;
    use std::path::Path;

    use anyhow::{Context, Result, bail};
    use serde::Deserialize;

    use super::ScriptedSimulator;
    use crate::flags::PathErrorFlags;

    #[derive(Debug, Deserialize)]
    struct RecordingYaml {
        program: String,
        sampling: String,
        #[serde(default)]
        steps: HashMap<String, Vec<String>>,
    }

    #[derive(Debug, Deserialize)]
    struct Root {
        recordings: Vec<RecordingYaml>,
    }

    impl ScriptedSimulator {
        /// Load recorded classifications from YAML:
        /// ```yaml
        /// recordings:
        ///   - program: WristSingularityNearLimits
        ///     sampling: TimeBased(4_0000ms)
        ///     steps:
        ///       F2: [KINEMATIC, PATH_SINGULARITY, WRIST_SINGULARITY]
        /// ```
        /// The `sampling` field is the label produced by
        /// [`crate::sampling::Sampling::label`]. Unlisted steps replay
        /// as `NO_ERROR`.
        pub fn from_yaml_file(file_path: impl AsRef<Path>) -> Result<ScriptedSimulator> {
            let p = file_path.as_ref();
            let contents = std::fs::read_to_string(p)
                .with_context(|| format!("Failed to read recording file: {}", p.display()))?;

            let root: Root = serde_saphyr::from_str(&contents)
                .map_err(|e| anyhow::anyhow!("{}", e))
                .with_context(|| format!("Failed to parse recording file: {}", p.display()))?;

            let mut simulator = ScriptedSimulator::new();
            for recording in root.recordings {
                for (step, names) in &recording.steps {
                    let mut flags = PathErrorFlags::NO_ERROR;
                    for name in names {
                        match PathErrorFlags::by_name(name) {
                            Some(flag) => flags |= flag,
                            None => bail!(
                                "Recording for program [{}] step [{}]: unknown flag [{}]",
                                recording.program,
                                step,
                                name
                            ),
                        }
                    }
                    simulator.record_label(&recording.program, &recording.sampling, step, flags);
                }
            }
            Ok(simulator)
        }
    }
}
