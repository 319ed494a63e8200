//! The robot state machine and its command executor.
//!
//! The entry point is [`Robot`]. Configure it with a [`RobotConfig`], then
//! either call the direct operations ([`Robot::place`], [`Robot::move_forward`],
//! [`Robot::left`], [`Robot::right`], [`Robot::report`]) or hand a textual
//! script to [`Robot::run_script`].
//!
//! Physically impossible actions are ignored rather than reported as errors:
//! a placement off the grid, a move over the edge, and any command issued
//! before the robot has been placed all leave the state untouched.

use crate::error::RobotResult;
use crate::model::{Command, IntoDirection, Placement};
use crate::parser::{parse_lines, parse_script};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Stdout, Write};

/// Configuration for a robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotConfig {
    /// Side length of the square grid. Valid coordinates are `0..grid_size`.
    pub grid_size: u32,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self { grid_size: 5 }
    }
}

impl RobotConfig {
    /// Creates a config for a `grid_size` × `grid_size` grid.
    pub fn new(grid_size: u32) -> Self {
        Self { grid_size }
    }

    /// Whether `cell` lies on the grid.
    pub fn contains(&self, cell: IVec2) -> bool {
        let n = i64::from(self.grid_size);
        let on_axis = |v: i32| (0..n).contains(&i64::from(v));
        on_axis(cell.x) && on_axis(cell.y)
    }
}

/// A toy robot on a square grid.
///
/// Starts unplaced. Once a valid placement has been made the robot stays on
/// the grid for its whole lifetime. Reports are written as single lines to
/// the output sink `W`, standard output by default.
pub struct Robot<W: Write = Stdout> {
    config: RobotConfig,
    state: Option<Placement>,
    output: W,
}

impl Default for Robot<Stdout> {
    fn default() -> Self {
        Self::new(RobotConfig::default())
    }
}

impl Robot<Stdout> {
    /// Creates an unplaced robot that reports to standard output.
    pub fn new(config: RobotConfig) -> Self {
        Self::with_output(config, io::stdout())
    }
}

impl<W: Write> Robot<W> {
    /// Creates an unplaced robot that reports to `output`.
    pub fn with_output(config: RobotConfig, output: W) -> Self {
        Self {
            config,
            state: None,
            output,
        }
    }

    /// The configuration this robot was built with.
    pub fn config(&self) -> &RobotConfig {
        &self.config
    }

    /// Current placement, or `None` while unplaced.
    pub fn state(&self) -> Option<Placement> {
        self.state
    }

    /// Whether a valid `PLACE` has happened yet.
    pub fn is_placed(&self) -> bool {
        self.state.is_some()
    }

    /// The report sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the robot, returning the report sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Puts the robot at `(x, y)` facing `direction`.
    ///
    /// Silently ignored when the cell is off the grid or `direction` does not
    /// name a heading; the previous state (placed or not) is kept.
    pub fn place(&mut self, x: i32, y: i32, direction: impl IntoDirection) {
        let Some(direction) = direction.into_direction() else {
            tracing::debug!(x, y, "placement ignored: unknown direction");
            return;
        };
        let placement = Placement::new(x, y, direction);
        if !self.config.contains(placement.position) {
            tracing::debug!(%placement, "placement ignored: off the grid");
            return;
        }
        tracing::trace!(%placement, "placed");
        self.state = Some(placement);
    }

    /// Steps one cell forward unless that would leave the grid.
    pub fn move_forward(&mut self) {
        let Some(placement) = self.state.as_mut() else {
            tracing::debug!("move ignored: robot not placed");
            return;
        };
        let target = placement.ahead();
        if !self.config.contains(target) {
            tracing::debug!(%placement, "move blocked by grid edge");
            return;
        }
        placement.position = target;
        tracing::trace!(%placement, "moved");
    }

    /// Turns a quarter turn counter-clockwise.
    pub fn left(&mut self) {
        match self.state.as_mut() {
            Some(placement) => placement.turn_left(),
            None => tracing::debug!("left ignored: robot not placed"),
        }
    }

    /// Turns a quarter turn clockwise.
    pub fn right(&mut self) {
        match self.state.as_mut() {
            Some(placement) => placement.turn_right(),
            None => tracing::debug!("right ignored: robot not placed"),
        }
    }

    /// Writes `x,y,DIRECTION` as one line to the output sink.
    ///
    /// Writes nothing while unplaced. Only a failing sink returns an error.
    pub fn report(&mut self) -> RobotResult<()> {
        let Some(placement) = self.state else {
            tracing::debug!("report ignored: robot not placed");
            return Ok(());
        };
        writeln!(self.output, "{placement}")?;
        Ok(())
    }

    /// Dispatches a single command to the matching operation.
    pub fn apply(&mut self, command: Command) -> RobotResult<()> {
        tracing::trace!(?command, "apply");
        match command {
            Command::Place { x, y, direction } => self.place(x, y, direction),
            Command::Move => self.move_forward(),
            Command::Left => self.left(),
            Command::Right => self.right(),
            Command::Report => self.report()?,
        }
        Ok(())
    }

    /// Runs parsed commands in order.
    ///
    /// `PLACE` always runs; every other command is skipped while the robot is
    /// unplaced.
    pub fn execute(&mut self, commands: &[Command]) -> RobotResult<()> {
        for &command in commands {
            if !self.is_placed() && !matches!(command, Command::Place { .. }) {
                tracing::trace!(?command, "skipped before placement");
                continue;
            }
            self.apply(command)?;
        }
        Ok(())
    }

    /// Parses `script` and runs it.
    ///
    /// An empty script does nothing. A malformed `PLACE` line fails the call
    /// before any command has been executed.
    pub fn run_script(&mut self, script: &str) -> RobotResult<()> {
        if script.is_empty() {
            return Ok(());
        }
        let commands = parse_script(script)?;
        self.execute(&commands)
    }

    /// Like [`run_script`](Self::run_script), reading the script from `reader`.
    ///
    /// The whole input is read and parsed before anything runs.
    pub fn run_reader<R: BufRead>(&mut self, reader: R) -> RobotResult<()> {
        let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
        let commands = parse_lines(&lines)?;
        self.execute(&commands)
    }
}
