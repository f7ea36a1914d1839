//! Motion program fixture model: ordered steps with targets, blending,
//! speed limits and the expected simulation outcome.
//!
//! A [`Program`] is a declarative value. It is built once from literal
//! targets, is immutable afterwards and is consumed by the harness; two
//! calls of the same builder produce equal values.

use crate::flags::PathErrorFlags;
use nalgebra::{Isometry3, Translation3, UnitQuaternion};

/// Six ordered axis values. Joint angles in degrees for joint moves,
/// pose components [x, y, z, rx, ry, rz] (mm and degrees) for Cartesian
/// moves. The fixed arity is deliberate: a target with any other number
/// of components is an authoring bug, not a runtime condition.
pub type Target = [f64; 6];

/// How the robot is instructed to reach the target of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveType {
    /// Joint-space move, target interpreted as joint angles in degrees.
    Joint,
    /// Linear Cartesian move, target interpreted as a pose.
    Frame,
    /// Circular Cartesian move through an auxiliary point.
    Arc,
}

/// A classification that an older engine release used to report for the
/// same step. Kept as documentation-grade fixture metadata so the history
/// of the pinned oracle value is not lost when the engine changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Superseded {
    pub flags: PathErrorFlags,
    /// Last engine version that reported this classification.
    pub engine: &'static str,
}

/// The expected simulation outcome of a step.
///
/// The value is pinned per engine version, never derived: when the engine
/// changes classification between releases, the fixture is updated and the
/// previous mask is retained in `superseded`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Expectation {
    pub flags: PathErrorFlags,
    pub superseded: Option<Superseded>,
}

/// One instructed motion of a program.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Identifying label, unique within the program (not globally).
    pub label: String,
    pub move_type: MoveType,
    /// Index of the tool center point among the tools of the cell.
    pub tcp: usize,
    pub target: Target,
    /// Blending radius in mm, 0 = stop exactly at the target.
    pub blending_mm: f64,
    /// Speed cap in mm/s, 0 = engine default.
    pub speed: f64,
    /// Acceleration cap in mm/s², 0 = engine default.
    pub accel: f64,
    pub expect: Expectation,
    /// Intermediate arc point, present exactly on arc moves.
    pub arc_via: Option<Target>,
}

impl Step {
    fn with_move(label: &str, move_type: MoveType, tcp: usize, target: Target) -> Step {
        Step {
            label: label.to_string(),
            move_type,
            tcp,
            target,
            blending_mm: 0.0,
            speed: 0.0,
            accel: 0.0,
            expect: Expectation::default(),
            arc_via: None,
        }
    }

    /// Joint move to the given joint angles (degrees).
    pub fn joint(label: &str, tcp: usize, target: Target) -> Step {
        Step::with_move(label, MoveType::Joint, tcp, target)
    }

    /// Linear Cartesian move to the given pose.
    pub fn frame(label: &str, tcp: usize, target: Target) -> Step {
        Step::with_move(label, MoveType::Frame, tcp, target)
    }

    /// Circular Cartesian move to `target` through the auxiliary point `via`.
    pub fn arc(label: &str, tcp: usize, target: Target, via: Target) -> Step {
        let mut step = Step::with_move(label, MoveType::Arc, tcp, target);
        step.arc_via = Some(via);
        step
    }

    /// Round the corner at this target with the given radius instead of
    /// stopping exactly there.
    pub fn blending(mut self, radius_mm: f64) -> Step {
        self.blending_mm = radius_mm;
        self
    }

    /// Cap speed (mm/s) and acceleration (mm/s²). Zero keeps the engine default.
    pub fn limits(mut self, speed: f64, accel: f64) -> Step {
        self.speed = speed;
        self.accel = accel;
        self
    }

    /// Pin the expected classification for this step.
    pub fn expect(mut self, flags: PathErrorFlags) -> Step {
        self.expect = Expectation {
            flags,
            superseded: None,
        };
        self
    }

    /// Pin the expected classification together with the mask an older
    /// engine used to report (`engine` names the last version that did).
    pub fn expect_superseded(
        mut self,
        flags: PathErrorFlags,
        old_flags: PathErrorFlags,
        engine: &'static str,
    ) -> Step {
        self.expect = Expectation {
            flags,
            superseded: Some(Superseded {
                flags: old_flags,
                engine,
            }),
        };
        self
    }

    /// The Cartesian pose of the target for frame and arc moves.
    /// Translation stays in mm; rx, ry, rz are interpreted as intrinsic
    /// x-y-z Euler rotations in degrees. Joint moves have no pose.
    pub fn pose(&self) -> Option<Isometry3<f64>> {
        match self.move_type {
            MoveType::Joint => None,
            MoveType::Frame | MoveType::Arc => Some(target_to_pose(&self.target)),
        }
    }
}

fn target_to_pose(target: &Target) -> Isometry3<f64> {
    let translation = Translation3::new(target[0], target[1], target[2]);
    let rotation = UnitQuaternion::from_euler_angles(
        target[3].to_radians(),
        target[4].to_radians(),
        target[5].to_radians(),
    );
    Isometry3::from_parts(translation, rotation)
}

/// A named, ordered sequence of steps. Sequence order is execution order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    name: String,
    steps: Vec<Step>,
}

impl Program {
    /// Panics on an empty step list or duplicate step labels; both are
    /// fixture-authoring bugs rather than runtime conditions.
    pub fn new(name: &str, steps: Vec<Step>) -> Program {
        assert!(!steps.is_empty(), "program [{}] has no steps", name);
        for (i, step) in steps.iter().enumerate() {
            let duplicate = steps[..i].iter().any(|s| s.label == step.label);
            assert!(
                !duplicate,
                "program [{}] repeats step label [{}]",
                name, step.label
            );
        }
        Program {
            name: name.to_string(),
            steps,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
