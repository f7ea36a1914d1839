//! Loading the robot cell descriptor from a YAML file (optional)

use std::path::Path;

use serde::Deserialize;

use crate::cell::{RobotCell, Tool};
use crate::cell_error::CellError;
use crate::program::Target;

#[derive(Deserialize)]
struct ToolYaml {
    name: String,
    tcp: Vec<f64>,
}

#[derive(Deserialize)]
struct Root {
    robot: String,
    #[serde(default)]
    tools: Vec<ToolYaml>,
}

impl RobotCell {
    /// Read the cell descriptor from a YAML file. A descriptor like this
    /// is supported:
    /// ```yaml
    /// robot: Generic6Axis
    /// tools:
    ///   - name: TCP_1
    ///     tcp: [0.0, 0.0, 200.0, 0.0, 0.0, 0.0]
    ///   - name: TCP_2
    ///     tcp: [0.0, 0.0, 260.0, 0.0, 45.0, 0.0]
    /// ```
    /// The engine's own native cell file format is opaque to this crate;
    /// the descriptor only names the robot and the tools the engine is
    /// expected to expose for it.
    pub fn from_yaml_file(file_path: impl AsRef<Path>) -> Result<RobotCell, CellError> {
        let contents = std::fs::read_to_string(file_path)?;
        RobotCell::from_yaml(&contents)
    }

    /// Parse the cell descriptor from a YAML string.
    pub fn from_yaml(source: &str) -> Result<RobotCell, CellError> {
        let root: Root =
            serde_saphyr::from_str(source).map_err(|e| CellError::ParseError(e.to_string()))?;

        if root.tools.is_empty() {
            return Err(CellError::NoTools(root.robot));
        }

        let mut tools = Vec::with_capacity(root.tools.len());
        for tool in root.tools {
            let tcp: Target =
                tool.tcp
                    .as_slice()
                    .try_into()
                    .map_err(|_| CellError::InvalidTcpLength {
                        tool: tool.name.clone(),
                        expected: 6,
                        found: tool.tcp.len(),
                    })?;
            tools.push(Tool {
                name: tool.name,
                tcp,
            });
        }

        Ok(RobotCell {
            robot: root.robot,
            tools,
        })
    }
}
