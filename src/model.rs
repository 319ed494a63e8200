//! Robot heading, placement, and the command vocabulary.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four compass headings.
///
/// Headings are cyclically ordered `North -> East -> South -> West -> North`.
/// Turning right advances one step in that order, turning left retreats one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All headings in clockwise order, starting at `North`.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The heading one quarter turn clockwise.
    pub fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// The heading one quarter turn counter-clockwise.
    pub fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Unit grid step taken when moving forward with this heading.
    ///
    /// `y` grows to the north, `x` grows to the east.
    pub fn step(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::East => IVec2::X,
            Self::South => IVec2::NEG_Y,
            Self::West => IVec2::NEG_X,
        }
    }

    /// Canonical lower-case token (`"north"`, `"east"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        })
    }
}

/// Returned when a token does not name one of the four headings.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown direction '{0}'")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    /// Case-insensitive; surrounding whitespace is not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDirection(s.to_string()))
    }
}

/// Anything that may name a heading.
///
/// Used by [`Robot::place`](crate::Robot::place) so that direct calls can pass
/// either a typed [`Direction`] or a raw token. A token that names no heading
/// yields `None`, which the robot treats as a rejected placement.
pub trait IntoDirection {
    fn into_direction(self) -> Option<Direction>;
}

impl IntoDirection for Direction {
    fn into_direction(self) -> Option<Direction> {
        Some(self)
    }
}

impl IntoDirection for &str {
    fn into_direction(self) -> Option<Direction> {
        self.parse().ok()
    }
}

impl IntoDirection for String {
    fn into_direction(self) -> Option<Direction> {
        self.as_str().parse().ok()
    }
}

/// The state of a robot that has been placed on the grid.
///
/// There is no partially placed robot: an unplaced robot has no `Placement`
/// at all (see [`Robot::state`](crate::Robot::state)).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Grid cell currently occupied.
    pub position: IVec2,

    /// Current heading.
    pub direction: Direction,
}

impl Placement {
    /// A placement at `(x, y)` facing `direction`. Not checked against any grid.
    pub fn new(x: i32, y: i32, direction: Direction) -> Self {
        Self {
            position: IVec2::new(x, y),
            direction,
        }
    }

    /// Column, growing eastwards.
    pub fn x(&self) -> i32 {
        self.position.x
    }

    /// Row, growing northwards.
    pub fn y(&self) -> i32 {
        self.position.y
    }

    /// The cell one step ahead. May lie outside the grid.
    pub fn ahead(&self) -> IVec2 {
        self.position + self.direction.step()
    }

    /// Rotates a quarter turn clockwise.
    pub fn turn_right(&mut self) {
        self.direction = self.direction.right();
    }

    /// Rotates a quarter turn counter-clockwise.
    pub fn turn_left(&mut self) {
        self.direction = self.direction.left();
    }
}

impl From<Placement> for (i32, i32, Direction) {
    fn from(p: Placement) -> Self {
        (p.position.x, p.position.y, p.direction)
    }
}

/// Report line format: `x,y,DIRECTION`.
impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.position.x, self.position.y, self.direction)
    }
}

/// Commands the robot understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Put the robot on the grid (`PLACE x,y,DIRECTION`).
    Place { x: i32, y: i32, direction: Direction },
    /// Step one cell forward (`MOVE`).
    Move,
    /// Quarter turn counter-clockwise (`LEFT`).
    Left,
    /// Quarter turn clockwise (`RIGHT`).
    Right,
    /// Write the current state to the output sink (`REPORT`).
    Report,
}

impl Command {
    /// The keyword tag of this command.
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Place { .. } => CommandKind::Place,
            Self::Move => CommandKind::Move,
            Self::Left => CommandKind::Left,
            Self::Right => CommandKind::Right,
            Self::Report => CommandKind::Report,
        }
    }
}

/// A command keyword without its arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    Place,
    Move,
    Left,
    Right,
    Report,
}

impl CommandKind {
    /// Every keyword, in script documentation order.
    pub const ALL: [CommandKind; 5] = [
        CommandKind::Place,
        CommandKind::Move,
        CommandKind::Left,
        CommandKind::Right,
        CommandKind::Report,
    ];

    /// Upper-case script keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Place => "PLACE",
            Self::Move => "MOVE",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Report => "REPORT",
        }
    }

    /// Case-insensitive keyword lookup. Unknown keywords yield `None`.
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.keyword().eq_ignore_ascii_case(word))
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
