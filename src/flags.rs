//! Error classification returned by the simulation engine for a motion step.
//!
//! The engine reports why (or how) a simulated step is infeasible or
//! imprecise as a combinable set of flags. These are domain outcomes of
//! the simulation, not software errors: a step that crosses a wrist
//! singularity *returns* `WRIST_SINGULARITY`, it does not fail.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Per-step error classification of the path simulation.
    ///
    /// The numeric values match the constants the engine exposes through
    /// its scripting interface, so a recorded mask can be compared against
    /// the engine output without translation. Masks are compared with
    /// exact equality, never as subset or superset.
    #[derive(Clone, Copy, PartialEq, Eq, Default)]
    pub struct PathErrorFlags: u32 {
        /// The movement is feasible and was simulated accurately.
        const NO_ERROR = 0x0;

        /// One or more points is not reachable, or the joint movement
        /// between two consecutive samples is too large.
        const KINEMATIC = 0x1;

        /// The path reaches the limit of one or more joint axes.
        const PATH_LIMIT = 0x2;

        /// The path crosses a singularity point.
        const PATH_SINGULARITY = 0x4;

        /// The path passes too close to a singularity.
        const PATH_NEAR_SINGULARITY = 0x8;

        /// The movement requires an exact 180 degree rotation around
        /// a unique axis, which the orientation interpolator rejects.
        const PATH_FLIP_AXIS = 0x10;

        /// Collision detected along the path.
        const COLLISION = 0x20;

        /// Wrist singularity: joint 5 too close to 0 degrees.
        const WRIST_SINGULARITY = 0x40;

        /// Elbow singularity: joint 3 fully extended.
        const ELBOW_SINGULARITY = 0x80;

        /// Shoulder singularity: the wrist center too close to axis 1.
        const SHOULDER_SINGULARITY = 0x100;

        /// A target is not reachable or missing.
        const PATH_INVALID_TARGET = 0x1000;

        /// A circular movement does not define a valid arc (points
        /// coincide or lie on one line).
        const INVALID_ARC_MOVE = 0x4000;

        /// The result is inaccurate: the sampling step is too coarse for
        /// the commanded axis movement, so the true classification could
        /// not be resolved.
        const INACCURATE_DUE_TO_LARGE_AXIS_MOVE = 0x80_0000;
    }
}

const FLAG_MAP: &[(PathErrorFlags, &str)] = &[
    (PathErrorFlags::KINEMATIC, "KINEMATIC"),
    (PathErrorFlags::PATH_LIMIT, "PATH_LIMIT"),
    (PathErrorFlags::PATH_SINGULARITY, "PATH_SINGULARITY"),
    (PathErrorFlags::PATH_NEAR_SINGULARITY, "PATH_NEAR_SINGULARITY"),
    (PathErrorFlags::PATH_FLIP_AXIS, "PATH_FLIP_AXIS"),
    (PathErrorFlags::COLLISION, "COLLISION"),
    (PathErrorFlags::WRIST_SINGULARITY, "WRIST_SINGULARITY"),
    (PathErrorFlags::ELBOW_SINGULARITY, "ELBOW_SINGULARITY"),
    (PathErrorFlags::SHOULDER_SINGULARITY, "SHOULDER_SINGULARITY"),
    (PathErrorFlags::PATH_INVALID_TARGET, "PATH_INVALID_TARGET"),
    (PathErrorFlags::INVALID_ARC_MOVE, "INVALID_ARC_MOVE"),
    (
        PathErrorFlags::INACCURATE_DUE_TO_LARGE_AXIS_MOVE,
        "INACCURATE_DUE_TO_LARGE_AXIS_MOVE",
    ),
];

fn flag_representation(flags: &PathErrorFlags) -> String {
    if flags.is_empty() {
        return "NO_ERROR".to_string();
    }
    FLAG_MAP
        .iter()
        .filter(|(flag, _)| flags.contains(*flag))
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join(" | ")
}

impl PathErrorFlags {
    /// Parse one flag by the name used in recordings ("WRIST_SINGULARITY" etc).
    pub fn by_name(name: &str) -> Option<PathErrorFlags> {
        if name == "NO_ERROR" {
            return Some(PathErrorFlags::NO_ERROR);
        }
        FLAG_MAP
            .iter()
            .find(|(_, flag_name)| *flag_name == name)
            .map(|(flag, _)| *flag)
    }
}

impl fmt::Debug for PathErrorFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", flag_representation(self))
    }
}

#[cfg(test)]
mod tests {
    use super::PathErrorFlags;

    #[test]
    fn test_representation() {
        let flags = PathErrorFlags::KINEMATIC
            | PathErrorFlags::PATH_SINGULARITY
            | PathErrorFlags::WRIST_SINGULARITY;
        assert_eq!(
            format!("{:?}", flags),
            "KINEMATIC | PATH_SINGULARITY | WRIST_SINGULARITY"
        );
        assert_eq!(format!("{:?}", PathErrorFlags::NO_ERROR), "NO_ERROR");
    }

    #[test]
    fn test_exact_equality_is_not_subset() {
        let expected = PathErrorFlags::PATH_SINGULARITY | PathErrorFlags::WRIST_SINGULARITY;
        let superset = expected | PathErrorFlags::KINEMATIC;
        assert!(superset.contains(expected));
        assert_ne!(expected, superset);
        assert_ne!(PathErrorFlags::PATH_SINGULARITY, expected);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(
            PathErrorFlags::by_name("SHOULDER_SINGULARITY"),
            Some(PathErrorFlags::SHOULDER_SINGULARITY)
        );
        assert_eq!(
            PathErrorFlags::by_name("NO_ERROR"),
            Some(PathErrorFlags::NO_ERROR)
        );
        assert_eq!(PathErrorFlags::by_name("NOT_A_FLAG"), None);
    }
}
