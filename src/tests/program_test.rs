#[cfg(test)]
mod tests {
    use crate::flags::PathErrorFlags;
    use crate::program::{Expectation, MoveType, Program, Step};

    #[test]
    fn test_step_defaults() {
        let step = Step::joint("J1", 0, [10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
        assert_eq!(step.move_type, MoveType::Joint);
        assert_eq!(step.blending_mm, 0.0);
        assert_eq!(step.speed, 0.0);
        assert_eq!(step.accel, 0.0);
        assert_eq!(step.expect, Expectation::default());
        assert_eq!(step.expect.flags, PathErrorFlags::NO_ERROR);
        assert!(step.expect.superseded.is_none());
        assert!(step.arc_via.is_none());
    }

    #[test]
    fn test_modifiers_chain() {
        let step = Step::frame("F2", 1, [650.0, -650.0, 550.0, 0.0, 0.0, -90.0])
            .blending(1.0)
            .limits(8000.0, 8000.0)
            .expect(PathErrorFlags::KINEMATIC);
        assert_eq!(step.tcp, 1);
        assert_eq!(step.blending_mm, 1.0);
        assert_eq!(step.speed, 8000.0);
        assert_eq!(step.accel, 8000.0);
        assert_eq!(step.expect.flags, PathErrorFlags::KINEMATIC);
    }

    #[test]
    fn test_arc_carries_auxiliary_point() {
        let via = [252.127218, -530.131963, 529.199999, -84.5, 0.0, 0.0];
        let step = Step::arc("F2", 0, [384.041242, -453.856457, 529.2, -84.5, 0.0, 0.0], via);
        assert_eq!(step.move_type, MoveType::Arc);
        assert_eq!(step.arc_via, Some(via));
    }

    #[test]
    fn test_frame_pose_conversion() {
        let f2 = [247.580323, -793.574636, 574.200001, 0.0, 0.0, -154.799784];
        let pose = Step::frame("F2", 0, f2).pose().expect("frame move has a pose");

        let translation = pose.translation.vector;
        assert!((translation.x - 247.580323).abs() < 1e-9);
        assert!((translation.y + 793.574636).abs() < 1e-9);
        assert!((translation.z - 574.200001).abs() < 1e-9);

        // Rotation about a single axis, so the total angle is just rz.
        let angle = pose.rotation.angle().to_degrees();
        assert!((angle - 154.799784).abs() < 1e-6, "angle was {}", angle);
    }

    #[test]
    fn test_joint_move_has_no_pose() {
        let step = Step::joint("J1", 0, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!(step.pose().is_none());
    }

    #[test]
    fn test_steps_compare_by_value() {
        let make = || {
            Step::frame("F2", 0, [247.5, -869.864902, 574.200001, 0.000001, 0.0, -90.0])
                .blending(1.0)
                .expect(PathErrorFlags::KINEMATIC)
        };
        assert_eq!(make(), make());
        assert_ne!(make(), make().blending(2.0));
    }

    #[test]
    fn test_program_preserves_step_order() {
        let program = Program::new(
            "Order",
            vec![
                Step::joint("J1", 0, [0.0; 6]),
                Step::frame("F2", 0, [0.0; 6]),
                Step::frame("F3", 0, [0.0; 6]),
            ],
        );
        let labels: Vec<&str> = program.steps().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["J1", "F2", "F3"]);
        assert_eq!(program.len(), 3);
    }

    #[test]
    #[should_panic(expected = "has no steps")]
    fn test_empty_program_rejected() {
        let _ = Program::new("Empty", vec![]);
    }

    #[test]
    #[should_panic(expected = "repeats step label")]
    fn test_duplicate_step_labels_rejected() {
        let _ = Program::new(
            "Duplicate",
            vec![
                Step::joint("J1", 0, [0.0; 6]),
                Step::frame("J1", 0, [0.0; 6]),
            ],
        );
    }
}
