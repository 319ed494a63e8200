//! # grid-robot
//!
//! A toy robot that lives on a square grid (5×5 by default).
//!
//! The robot understands five commands: `PLACE x,y,DIRECTION`, `MOVE`, `LEFT`,
//! `RIGHT` and `REPORT`. It can be driven through direct method calls on
//! [`Robot`] or by feeding it a script, one command per line, which is parsed
//! into [`Command`]s before anything runs.
//!
//! Commands that would put the robot off the grid, or that arrive before it
//! has been placed, are ignored. A malformed `PLACE` line in a script is an
//! error ([`RobotError`]).
//!
//! ```
//! use grid_robot::{Robot, RobotConfig};
//!
//! let mut robot = Robot::with_output(RobotConfig::default(), Vec::new());
//! robot.run_script("PLACE 0,0,NORTH\nMOVE\nREPORT").unwrap();
//! assert_eq!(String::from_utf8(robot.into_output()).unwrap(), "0,1,NORTH\n");
//! ```

pub mod error;
pub mod interpreter;
pub mod parser;
pub mod model;

pub use error::*;
pub use interpreter::*;
pub use parser::*;
pub use model::*;
