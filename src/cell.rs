//! Robot cell: the robot and its configured tools.
//!
//! The cell is external state from the harness point of view. It is
//! loaded once, treated as read-only by every verification afterwards,
//! and passed by reference into the simulation call. Steps select a tool
//! by index into the cell's tool list.

use crate::program::Target;

/// A tool mounted on the robot flange.
#[derive(Debug, Clone, PartialEq)]
pub struct Tool {
    pub name: String,
    /// Tool center point relative to the flange, [x, y, z, rx, ry, rz]
    /// in mm and degrees.
    pub tcp: Target,
}

/// The robot and the tools the engine is expected to expose for it.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotCell {
    pub robot: String,
    pub tools: Vec<Tool>,
}

impl RobotCell {
    pub fn new(robot: &str, tools: Vec<Tool>) -> RobotCell {
        RobotCell {
            robot: robot.to_string(),
            tools,
        }
    }

    pub fn tool(&self, index: usize) -> Option<&Tool> {
        self.tools.get(index)
    }
}
