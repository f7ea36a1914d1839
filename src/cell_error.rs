//! Error handling for the robot cell loader

use std::io;

/// Failures while reading a cell descriptor file.
#[derive(Debug)]
pub enum CellError {
    IoError(io::Error),
    ParseError(String),
    NoTools(String),
    InvalidTcpLength {
        tool: String,
        expected: usize,
        found: usize,
    },
}

impl std::fmt::Display for CellError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            CellError::IoError(ref err) => write!(f, "IO Error: {}", err),
            CellError::ParseError(ref msg) => write!(f, "Parse Error: {}", msg),
            CellError::NoTools(ref robot) => {
                write!(f, "Cell for robot [{}] defines no tools", robot)
            }
            CellError::InvalidTcpLength {
                ref tool,
                expected,
                found,
            } => write!(
                f,
                "Tool [{}]: invalid TCP length, expected {}, found {}",
                tool, expected, found
            ),
        }
    }
}

impl std::error::Error for CellError {}

impl From<io::Error> for CellError {
    fn from(err: io::Error) -> Self {
        CellError::IoError(err)
    }
}
