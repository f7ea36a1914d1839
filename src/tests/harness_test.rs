#[cfg(test)]
mod tests {
    use anyhow::Result;

    use crate::cell::RobotCell;
    use crate::flags::PathErrorFlags;
    use crate::harness::Verifier;
    use crate::program::{Program, Step};
    use crate::sampling::Sampling;
    use crate::scenarios;
    use crate::scripted::ScriptedSimulator;
    use crate::simulator::{PathSimulator, SimulationReport, StepOutcome};

    const CELL_FILE: &str = "src/tests/data/cell_two_tcp.yaml";
    const RECORDING_FILE: &str = "src/tests/data/recording_engine_v52.yaml";

    fn load_cell() -> RobotCell {
        RobotCell::from_yaml_file(CELL_FILE).expect("Failed to load the cell descriptor")
    }

    fn load_engine() -> ScriptedSimulator {
        ScriptedSimulator::from_yaml_file(RECORDING_FILE).expect("Failed to load the recording")
    }

    #[test]
    fn test_regression_suite_green_under_default_sampling() {
        let cell = load_cell();
        let engine = load_engine();
        let verifier = Verifier::new(&cell, &engine, Sampling::time_based());

        for program in scenarios::regression_suite() {
            let report = verifier.verify(&program).expect("simulation call succeeds");
            assert!(
                report.passed(),
                "program [{}] did not pass:\n{}",
                program.name(),
                report
            );
        }
    }

    #[test]
    fn test_wrist_singularity_near_limits_reports_combined_mask() {
        let cell = load_cell();
        let engine = load_engine();
        let verifier = Verifier::new(&cell, &engine, Sampling::time_based());

        let program = scenarios::wrist_singularity_near_limits();
        let report = verifier.verify(&program).expect("simulation call succeeds");

        assert_eq!(report.verdicts[0].actual, PathErrorFlags::NO_ERROR);
        assert_eq!(
            report.verdicts[1].actual,
            PathErrorFlags::KINEMATIC
                | PathErrorFlags::PATH_SINGULARITY
                | PathErrorFlags::WRIST_SINGULARITY
        );
        assert!(report.passed());
    }

    #[test]
    fn test_invalid_arc_move_reports_at_arc_step() {
        let cell = load_cell();
        let engine = load_engine();
        let verifier = Verifier::new(&cell, &engine, Sampling::time_based());

        let report = verifier
            .verify(&scenarios::invalid_arc_move())
            .expect("simulation call succeeds");

        assert_eq!(report.verdicts[0].actual, PathErrorFlags::NO_ERROR);
        assert_eq!(report.verdicts[1].actual, PathErrorFlags::NO_ERROR);
        assert_eq!(report.verdicts[2].actual, PathErrorFlags::INVALID_ARC_MOVE);
        assert!(report.passed());
    }

    #[test]
    fn test_fast_long_move_is_clean_on_every_step() {
        let cell = load_cell();
        let engine = load_engine();
        let verifier = Verifier::new(&cell, &engine, Sampling::time_based());

        let report = verifier
            .verify(&scenarios::fast_long_move())
            .expect("simulation call succeeds");

        assert!(report.passed());
        for verdict in &report.verdicts {
            assert_eq!(
                verdict.actual,
                PathErrorFlags::NO_ERROR,
                "step [{}] must not report an error",
                verdict.label
            );
        }
    }

    /// Changing only the sampling step changes the classification of the
    /// same program, and does so reproducibly.
    #[test]
    fn test_granularity_sensitivity_is_reproducible() {
        let cell = load_cell();
        let engine = load_engine();
        let program = scenarios::wrist_singularity_blended();
        let coarse = Sampling::time_based();
        let fine = Sampling::TimeBased { step_ms: 1.0 };

        let true_mask = PathErrorFlags::KINEMATIC
            | PathErrorFlags::PATH_SINGULARITY
            | PathErrorFlags::WRIST_SINGULARITY;

        for _ in 0..3 {
            let coarse_report = engine
                .simulate(&cell, &program, &coarse)
                .expect("simulation call succeeds");
            let fine_report = engine
                .simulate(&cell, &program, &fine)
                .expect("simulation call succeeds");

            assert_eq!(
                coarse_report.flags_for("3"),
                Some(PathErrorFlags::INACCURATE_DUE_TO_LARGE_AXIS_MOVE)
            );
            assert_eq!(fine_report.flags_for("3"), Some(true_mask));
        }

        // The fine-grained run resolves exactly the mask the fixture
        // records as the superseded classification.
        let superseded = program.steps()[2]
            .expect
            .superseded
            .expect("history is recorded");
        assert_eq!(superseded.flags, true_mask);

        // Under the fine step the pinned (coarse) expectation no longer
        // holds, which is a mismatch, not a transport error.
        let verifier = Verifier::new(&cell, &engine, fine);
        let report = verifier.verify(&program).expect("simulation call succeeds");
        assert!(!report.passed());
        assert_eq!(report.mismatches()[0].label, "3");
        assert_eq!(report.mismatches()[0].actual, true_mask);
    }

    #[test]
    fn test_mismatch_is_reported_and_does_not_affect_next_program() {
        let cell = load_cell();
        let sampling = Sampling::time_based();
        let programs = scenarios::regression_suite();
        let mut engine = ScriptedSimulator::agreeing_with(&programs, &sampling);
        // Corrupt one step of one program.
        engine.record("FastLongMove", &sampling, "F3", PathErrorFlags::COLLISION);

        let verifier = Verifier::new(&cell, &engine, sampling);

        let failing = verifier
            .verify(&scenarios::fast_long_move())
            .expect("simulation call succeeds");
        assert!(!failing.passed());
        let mismatches = failing.mismatches();
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].label, "F3");
        assert_eq!(mismatches[0].expected, PathErrorFlags::NO_ERROR);
        assert_eq!(mismatches[0].actual, PathErrorFlags::COLLISION);

        // The next program is unaffected by the previous failure.
        let passing = verifier
            .verify(&scenarios::invalid_arc_move())
            .expect("simulation call succeeds");
        assert!(passing.passed());
    }

    #[test]
    fn test_report_display_names_the_flags() {
        let cell = load_cell();
        let engine = load_engine();
        let verifier = Verifier::new(&cell, &engine, Sampling::time_based());

        let report = verifier
            .verify(&scenarios::wrist_singularity_near_limits())
            .expect("simulation call succeeds");
        let rendered = format!("{}", report);

        assert!(rendered.contains("WristSingularityNearLimits"));
        assert!(rendered.contains("TimeBased(4_0000ms)"));
        assert!(rendered.contains("KINEMATIC | PATH_SINGULARITY | WRIST_SINGULARITY"));
        assert!(rendered.contains("PASS"));
    }

    struct TruncatingSimulator;

    impl PathSimulator for TruncatingSimulator {
        fn simulate(
            &self,
            _cell: &RobotCell,
            program: &Program,
            _sampling: &Sampling,
        ) -> Result<SimulationReport> {
            // One outcome regardless of the program length.
            Ok(SimulationReport {
                outcomes: vec![StepOutcome {
                    label: program.steps()[0].label.clone(),
                    flags: PathErrorFlags::NO_ERROR,
                }],
            })
        }
    }

    #[test]
    fn test_wrong_report_length_is_a_transport_error() {
        let cell = load_cell();
        let engine = TruncatingSimulator;
        let verifier = Verifier::new(&cell, &engine, Sampling::time_based());

        let result = verifier.verify(&scenarios::fast_long_move());
        assert!(result.is_err());
    }

    #[test]
    fn test_auxiliary_point_on_frame_move_is_rejected() {
        let cell = load_cell();
        let engine = load_engine();
        let verifier = Verifier::new(&cell, &engine, Sampling::time_based());

        let mut broken = Step::frame("F1", 0, [0.0; 6]);
        broken.arc_via = Some([0.0; 6]);
        let program = Program::new("BrokenAux", vec![broken]);

        assert!(verifier.verify(&program).is_err());
    }

    #[test]
    fn test_tcp_outside_the_cell_is_rejected() {
        let cell = load_cell();
        let engine = load_engine();
        let verifier = Verifier::new(&cell, &engine, Sampling::time_based());

        let program = Program::new("BadTool", vec![Step::joint("J1", 5, [0.0; 6])]);
        assert!(verifier.verify(&program).is_err());
    }
}
