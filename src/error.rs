//! Error types for script parsing and report output.
//!
//! Only malformed script syntax and I/O failures are errors. Physically
//! impossible actions (off-grid placement, blocked moves, commands before
//! placement) are ignored by the robot and never surface here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RobotError {
    #[error("Wrong args count given to PLACE command! (expected {expected}, given {given})")]
    WrongArgumentCount { expected: usize, given: usize },

    #[error(
        "Wrong direction given to PLACE command! (expected one of NORTH, SOUTH, EAST, WEST; given '{given}')"
    )]
    InvalidDirection { given: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for robot operations.
pub type RobotResult<T> = Result<T, RobotError>;
