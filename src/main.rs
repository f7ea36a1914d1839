use rs_motion_verify::cell::{RobotCell, Tool};
use rs_motion_verify::harness::Verifier;
use rs_motion_verify::sampling::Sampling;
use rs_motion_verify::scenarios;
use rs_motion_verify::scripted::ScriptedSimulator;

/// Usage example: run the regression suite against a scripted oracle
/// that replays the pinned expectations. With a live engine, replace the
/// oracle by an implementation of PathSimulator talking to it.
fn main() {
    let cell = RobotCell::new(
        "Generic6Axis",
        vec![
            Tool {
                name: "TCP_1".to_string(),
                tcp: [0.0, 0.0, 200.0, 0.0, 0.0, 0.0],
            },
            Tool {
                name: "TCP_2".to_string(),
                tcp: [0.0, 0.0, 260.0, 0.0, 45.0, 0.0],
            },
        ],
    );

    let sampling = Sampling::time_based();
    println!(
        "Regression suite, expected masks pinned to engine v{}",
        scenarios::PINNED_ENGINE
    );
    let programs = scenarios::regression_suite();
    let oracle = ScriptedSimulator::agreeing_with(&programs, &sampling);
    let verifier = Verifier::new(&cell, &oracle, sampling);

    let mut failed = 0;
    for program in &programs {
        match verifier.verify(program) {
            Ok(report) => {
                if !report.passed() {
                    failed += 1;
                }
                println!("{}", report);
            }
            Err(e) => {
                failed += 1;
                println!("{} could not be verified: {}", program.name(), e);
            }
        }
    }

    if failed == 0 {
        println!("All {} programs verified", programs.len());
    } else {
        println!("{} of {} programs failed", failed, programs.len());
    }
}
