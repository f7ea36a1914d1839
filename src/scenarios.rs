//! Regression scenarios: one builder per historically-observed edge case
//! in the engine's kinematic error reporting.
//!
//! Every builder is a pure function returning the same [`Program`] value
//! on every call. The numeric targets are not derivable; they encode
//! robot configurations that once triggered (or must not trigger) a
//! specific classification and were captured from engine sessions.
//!
//! Expected masks are pinned to engine v5.2 under the default time-based
//! sampling step. Where a release changed the classification, the
//! previous mask and the last version reporting it are retained on the
//! step (see [`crate::program::Superseded`]): a coarser time step makes
//! v5.2 report "inaccurate due to large axis move" on paths where
//! earlier versions reported the full singularity mask.

use crate::flags::PathErrorFlags;
use crate::program::{Program, Step};

/// Engine version the expected masks are pinned to.
pub const PINNED_ENGINE: &str = "5.2";

/// Last engine version that reported the superseded masks.
const SUPERSEDED_ENGINE: &str = "5.1.2";

/// Wrist singularity crossed between blended frame targets. Feasible
/// path; at the default time step the engine cannot resolve the flags
/// and classifies the third step as inaccurate instead. Up to v5.1.2
/// the full singularity mask was reported here.
pub fn wrist_singularity_blended() -> Program {
    let j1 = [84.042754, -57.261200, 115.707342, 78.814999, -83.206905, 59.112086];
    let f2 = [267.800000, -697.899998, 489.200000, -0.000000, -0.000000, -97.106527];
    let f3 = [267.800000, -886.682410, 541.603649, 45.000000, 0.000000, 180.000000];
    let f4 = [267.800000, -900.824545, 555.745785, 45.000000, 0.000000, 180.000000];
    Program::new(
        "WristSingularityBlended",
        vec![
            Step::joint("1", 0, j1).blending(10.0),
            Step::frame("2", 0, f2).blending(10.0),
            Step::frame("3", 0, f3).blending(10.0).expect_superseded(
                PathErrorFlags::INACCURATE_DUE_TO_LARGE_AXIS_MOVE,
                PathErrorFlags::KINEMATIC
                    | PathErrorFlags::PATH_SINGULARITY
                    | PathErrorFlags::WRIST_SINGULARITY,
                SUPERSEDED_ENGINE,
            ),
            Step::frame("4", 0, f4),
        ],
    )
}

/// Joint move followed by one blended frame move passing near the
/// kinematic limits; the frame step reports the combined wrist
/// singularity mask.
pub fn wrist_singularity_near_limits() -> Program {
    let j1 = [58.871249, -78.599411, 143.944527, 173.481676, 65.485694, -87.285718];
    let f2 = [247.580323, -793.574636, 574.200001, 0.000000, -0.000000, -154.799784];
    Program::new(
        "WristSingularityNearLimits",
        vec![
            Step::joint("J1", 0, j1),
            Step::frame("F2", 0, f2).blending(1.0).expect(
                PathErrorFlags::KINEMATIC
                    | PathErrorFlags::PATH_SINGULARITY
                    | PathErrorFlags::WRIST_SINGULARITY,
            ),
        ],
    )
}

/// Exact 180 degree orientation flip between two frame targets. The
/// orientation must flip exactly; otherwise blending adjusts the path.
/// The default flip tolerance is 0.5 degrees of rotation, so a 179.5
/// degree rotation is allowed at most. Near 180 degrees but outside the
/// tolerance the engine may report a kinematic error instead.
pub fn flip_axis_180deg() -> Program {
    let j1 = [62.800000, -58.000000, 114.300000, -31.700000, -60.300000, 107.000000];
    let f2 = [247.718647, -776.118962, 544.157022, 0.0, 0.0, -180.0];
    let f3 = [147.718647, -776.118962, 544.157022, 0.0, 180.0, -180.0];
    Program::new(
        "FlipAxis180",
        vec![
            Step::joint("J1", 0, j1),
            Step::frame("F2", 0, f2).blending(1.0),
            Step::frame("F3", 0, f3)
                .blending(1.0)
                .expect(PathErrorFlags::PATH_FLIP_AXIS),
        ],
    )
}

/// Too large an axis movement in a short time around a tight corner,
/// crossing the smooth-kinematic tolerance on the last step.
pub fn kinematic_path_limit_tight_corner() -> Program {
    let j1 = [86.567590, -60.878784, 114.472076, -92.763651, 87.963609, -126.357581];
    let f2 = [247.500000, -869.864902, 574.200001, 0.000001, 0.000000, -90.000000];
    let f3 = [247.500000, -869.864902, 554.200001, 0.000001, 0.000000, -90.000000];
    let f4 = [247.500000, -874.864902, 554.200001, 0.000001, 0.000000, -90.000000];
    let f5 = [247.500000, -874.864902, 545.600001, 0.000001, 0.000000, -90.000000];
    let f6 = [117.866636, -874.864929, 545.599975, 0.000001, -6.810226, -55.597047];
    Program::new(
        "KinematicPathLimitCorner",
        vec![
            Step::joint("J1", 0, j1),
            Step::frame("F2", 0, f2).blending(1.0),
            Step::frame("F3", 0, f3).blending(1.0),
            Step::frame("F4", 0, f4).blending(1.0),
            Step::frame("F5", 0, f5).blending(1.0),
            Step::frame("F6", 0, f6)
                .blending(1.0)
                .expect(PathErrorFlags::KINEMATIC),
        ],
    )
}

/// Direction reversal with a large orientation change mid-program. The
/// path is feasible; at the default time step v5.2 classifies the fourth
/// step as inaccurate. Up to v5.1.2 a kinematic error was reported.
pub fn kinematic_path_limit_reversal() -> Program {
    let j1 = [-121.731234, -105.839164, 118.925433, 44.376981, 49.562618, 133.063482];
    let f2 = [-305.479377, 506.206249, 561.080615, -179.352790, -74.861742, -134.816977];
    let f3 = [-280.574677, 506.130142, 567.817833, -179.352790, -74.861742, -134.816977];
    let f4 = [-277.584253, 506.915648, 544.586082, 179.947088, -75.021714, -45.217495];
    let f5 = [-302.700873, 506.909442, 537.866308, 179.947088, -75.021714, -45.217495];
    let f6 = [-300.434263, 506.661885, 567.779535, 179.947088, -75.021714, -45.217495];
    Program::new(
        "KinematicPathLimitReversal",
        vec![
            Step::joint("J1", 0, j1),
            Step::frame("F2", 0, f2).blending(1.0),
            Step::frame("F3", 0, f3).blending(1.0),
            Step::frame("F4", 0, f4).blending(1.0).expect_superseded(
                PathErrorFlags::INACCURATE_DUE_TO_LARGE_AXIS_MOVE,
                PathErrorFlags::KINEMATIC,
                SUPERSEDED_ENGINE,
            ),
            Step::frame("F5", 0, f5).blending(1.0),
            Step::frame("F6", 0, f6).blending(1.0),
        ],
    )
}

/// The robot moves too close to the front/back singularity: the wrist
/// center approaches axis 1.
pub fn shoulder_singularity_wrist_near_axis1() -> Program {
    let j1 = [106.000000, -52.000000, -79.000000, -81.000000, 58.000000, -47.000000];
    let f2 = [681.000000, -417.900000, 1063.200000, -0.000000, -77.000000, 180.000000];
    Program::new(
        "ShoulderSingularity",
        vec![
            Step::joint("J1", 0, j1),
            Step::frame("F2", 0, f2).blending(1.0).expect(
                PathErrorFlags::PATH_SINGULARITY
                    | PathErrorFlags::PATH_NEAR_SINGULARITY
                    | PathErrorFlags::SHOULDER_SINGULARITY,
            ),
        ],
    )
}

/// Large but feasible Cartesian sweep at high speed and acceleration
/// caps. Every step must classify as no-error: the harness must not
/// false-positive on fast long moves even though time-based reporting
/// gets less accurate at this speed.
pub fn fast_long_move() -> Program {
    let j1 = [86.567590, -60.878784, 114.472076, 87.236349, -87.963609, -306.357582];
    let f2 = [650.0, -650.0, 550.0, 0.000001, 0.000000, -90.000000];
    let f3 = [650.0, 650.0, 550.0, 0.000001, 0.000000, -90.000000];
    Program::new(
        "FastLongMove",
        vec![
            Step::joint("J1", 0, j1).limits(8000.0, 8000.0),
            Step::frame("F2", 0, f2).blending(1.0).limits(8000.0, 8000.0),
            Step::frame("F3", 0, f3)
                .blending(1.0)
                .limits(8000.0, 8000.0)
                .expect(PathErrorFlags::NO_ERROR),
        ],
    )
}

/// Long mixed program passing near the wrist singularity. Only the last
/// joint move carries a pinned expectation; earlier steps historically
/// reported the singularity mask (up to v5.1.2) but are now classified
/// as clean at the default time step, with the inaccuracy reported at
/// the end of the program.
pub fn wrist_singularity_long_program() -> Program {
    let j1 = [-124.420433, -100.220908, 123.962337, 23.242314, 63.944991, 137.508752];
    let f2 = [-278.518943, 436.007618, 547.030830, 179.789916, -74.994562, -47.567604];
    let f3 = [-303.439195, 435.983125, 540.350978, 179.789916, -74.994562, -47.567604];
    let f4 = [-301.172585, 435.735568, 570.264206, 179.789916, -74.994562, -47.567604];
    let f5 = [-231.253202, 513.686454, 655.467183, 179.789916, -74.994562, -118.578163];
    let j6 = [-116.562035, -101.182577, 117.673968, 29.901480, 56.537640, 144.298732];
    let j7 = [-69.323892, -117.000000, 116.917103, 3.454614, 34.862541, -15.159028];
    let j8 = [69.928026, -109.590561, 148.647412, -21.437124, -0.098633, -8.370814];
    Program::new(
        "WristSingularityLong",
        vec![
            Step::joint("J1", 0, j1).blending(10.0),
            Step::frame("F2", 0, f2).blending(1.0),
            Step::frame("F3", 0, f3),
            Step::frame("F4", 0, f4).blending(1.0),
            Step::frame("F5", 0, f5).blending(1.0),
            Step::joint("J6", 0, j6).blending(10.0),
            Step::joint("J7", 0, j7).blending(10.0),
            Step::joint("J8", 0, j8).blending(10.0).expect_superseded(
                PathErrorFlags::INACCURATE_DUE_TO_LARGE_AXIS_MOVE,
                PathErrorFlags::PATH_SINGULARITY
                    | PathErrorFlags::PATH_NEAR_SINGULARITY
                    | PathErrorFlags::WRIST_SINGULARITY,
                SUPERSEDED_ENGINE,
            ),
        ],
    )
}

/// One target of a long program cannot be reached; the step labeled
/// "StepId 65" reports the path limit. Step labels keep the identifiers
/// of the originating program so the report reads like the source.
pub fn unreachable_target() -> Program {
    let j1 = [-121.962375, -102.168116, 105.538444, 18.089514, 86.239362, 148.055458];
    let f2 = [-307.346432, 439.570058, 576.803381, -179.352794, -74.861742, -99.294176];
    let f3 = [-282.441732, 439.493952, 583.540599, -179.352794, -74.861742, -99.294176];
    let f4 = [-267.103305, 434.010573, 516.128581, 179.777317, -74.944947, -33.895889];
    let f5 = [-292.017764, 433.984527, 509.427158, 179.777317, -74.944947, -33.895889];
    let f6 = [-289.751154, 433.736971, 539.340385, 179.777317, -74.944947, -33.895889];
    let f7 = [-239.806166, 432.381194, 699.351823, 179.777317, -74.944947, -33.895889];
    let j8 = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
    let j9 = [79.238350, -54.625500, 102.860318, -115.621424, 68.885526, -126.911760];
    let f10 = [312.309807, -910.024549, 574.500010, -0.000000, 0.000000, -111.978180];
    Program::new(
        "UnreachableTarget",
        vec![
            Step::joint("StepId 61", 0, j1).blending(10.0),
            Step::frame("StepId 58", 0, f2),
            Step::frame("StepId 62", 0, f3).blending(10.0),
            Step::frame("StepId 63", 0, f4).blending(10.0),
            Step::frame("StepId 60", 0, f5),
            Step::frame("StepId 64", 0, f6).blending(10.0),
            Step::frame("StepId 65", 0, f7)
                .blending(10.0)
                .expect(PathErrorFlags::PATH_LIMIT),
            Step::joint("StepId 66", 0, j8).blending(10.0),
            Step::joint("StepId 81", 0, j9).blending(10.0),
            Step::frame("StepId 83", 0, f10).blending(1.0),
        ],
    )
}

/// Arc move whose auxiliary point repeats the pose of the previous frame
/// move, so the three arc points do not define an arc. This program used
/// to crash the path simulation before the invalid-arc classification
/// existed.
pub fn invalid_arc_move() -> Program {
    let j1 = [85.313866, -54.353057, 109.847412, 90.670697, -90.461034, 55.497054];
    let f1 = [252.127218, -530.131963, 529.199999, -84.500000, -0.000001, -0.000000];
    let f2 = [384.041242, -453.856457, 529.200000, -84.500000, -0.000001, -0.000000];
    Program::new(
        "InvalidArcMove",
        vec![
            Step::joint("J1", 0, j1),
            Step::frame("F1", 0, f1),
            Step::arc("F2", 0, f2, f1).expect(PathErrorFlags::INVALID_ARC_MOVE),
        ],
    )
}

/// The whole regression suite in a fixed order.
pub fn regression_suite() -> Vec<Program> {
    vec![
        wrist_singularity_blended(),
        wrist_singularity_near_limits(),
        flip_axis_180deg(),
        kinematic_path_limit_tight_corner(),
        kinematic_path_limit_reversal(),
        shoulder_singularity_wrist_near_axis1(),
        fast_long_move(),
        wrist_singularity_long_program(),
        unreachable_target(),
        invalid_arc_move(),
    ]
}
