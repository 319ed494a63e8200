//! Turns a textual script into a list of [`Command`]s.
//!
//! One command per line. Keywords are case-insensitive. Lines with an unknown
//! keyword, and blank lines, are dropped without error. A `PLACE` line is the
//! only one whose arguments are checked: it must carry exactly three
//! comma-separated fields and the third must name a heading.
//!
//! ```
//! use grid_robot::{parse_script, Command, Direction};
//!
//! let commands = parse_script("PLACE 1,2,EAST\nJUMP\nmove").unwrap();
//! assert_eq!(
//!     commands,
//!     vec![
//!         Command::Place { x: 1, y: 2, direction: Direction::East },
//!         Command::Move,
//!     ]
//! );
//! ```

use crate::error::{RobotError, RobotResult};
use crate::model::{Command, CommandKind, Direction};

const PLACE_ARG_COUNT: usize = 3;

/// Parses a whole script. See [`parse_lines`].
pub fn parse_script(script: &str) -> RobotResult<Vec<Command>> {
    parse_lines(script.lines())
}

/// Parses every line in order.
///
/// The whole input is parsed before anything is returned, so a malformed
/// `PLACE` anywhere fails the entire batch.
pub fn parse_lines<I, S>(lines: I) -> RobotResult<Vec<Command>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut commands = Vec::new();
    for line in lines {
        if let Some(command) = parse_line(line.as_ref())? {
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Parses a single line.
///
/// Returns `Ok(None)` for blank lines and unknown keywords.
pub fn parse_line(line: &str) -> RobotResult<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (keyword, args) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, Some(rest.trim_start())),
        None => (line, None),
    };

    let Some(kind) = CommandKind::from_keyword(keyword) else {
        tracing::debug!(keyword, "dropping unknown command");
        return Ok(None);
    };

    let command = match kind {
        CommandKind::Place => parse_place_args(args)?,
        // Trailing text after argument-less commands is ignored.
        CommandKind::Move => Command::Move,
        CommandKind::Left => Command::Left,
        CommandKind::Right => Command::Right,
        CommandKind::Report => Command::Report,
    };
    Ok(Some(command))
}

fn parse_place_args(args: Option<&str>) -> RobotResult<Command> {
    let fields: Vec<&str> = match args {
        Some(args) => args.split(',').map(str::trim).collect(),
        None => Vec::new(),
    };

    if fields.len() != PLACE_ARG_COUNT {
        return Err(RobotError::WrongArgumentCount {
            expected: PLACE_ARG_COUNT,
            given: fields.len(),
        });
    }

    let direction: Direction = fields[2]
        .parse()
        .map_err(|_| RobotError::InvalidDirection {
            given: fields[2].to_string(),
        })?;

    Ok(Command::Place {
        x: lenient_int(fields[0]),
        y: lenient_int(fields[1]),
        direction,
    })
}

/// Reads the leading integer of `s`, defaulting to 0.
///
/// Accepts optional leading whitespace and sign followed by decimal digits and
/// ignores whatever follows. Input without leading digits yields 0. Values
/// outside the `i32` range saturate.
fn lenient_int(s: &str) -> i32 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    if negative {
        value = -value;
    }
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
