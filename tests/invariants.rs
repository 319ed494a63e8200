// tests/invariants.rs
use grid_robot::{Command, CommandKind, Direction, Placement, Robot, RobotConfig};

/// Small deterministic generator so the run is reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u32) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) % u64::from(bound)) as u32
    }
}

fn on_grid(p: &Placement, n: i32) -> bool {
    (0..n).contains(&p.x()) && (0..n).contains(&p.y())
}

#[test]
fn test_survives_random_commands() {
    let n = 5;
    let mut rng = Lcg(0x5eed);
    let mut robot = Robot::with_output(RobotConfig::new(n as u32), Vec::new());
    robot.place(0, 0, Direction::North);

    let mut reports = 0;
    for _ in 0..1000 {
        let kind = CommandKind::ALL[rng.next(5) as usize];
        let command = match kind {
            // Range deliberately wider than the grid.
            CommandKind::Place => Command::Place {
                x: rng.next(7) as i32 - 1,
                y: rng.next(7) as i32 - 1,
                direction: Direction::ALL[rng.next(4) as usize],
            },
            CommandKind::Move => Command::Move,
            CommandKind::Left => Command::Left,
            CommandKind::Right => Command::Right,
            CommandKind::Report => Command::Report,
        };
        if command == Command::Report {
            reports += 1;
        }

        let before = robot.state();
        robot.apply(command).unwrap();
        let after = robot.state().expect("robot stays placed");
        assert!(on_grid(&after, n), "{after} left the grid");

        if let Command::Place { x, y, direction } = command {
            let candidate = Placement::new(x, y, direction);
            let expected = if on_grid(&candidate, n) {
                candidate
            } else {
                before.unwrap()
            };
            assert_eq!(after, expected);
        }
    }

    let out = String::from_utf8(robot.into_output()).unwrap();
    assert_eq!(out.lines().count(), reports);
}

#[test]
fn test_rotation_is_cyclic() {
    for d in Direction::ALL {
        assert_eq!(d.right().left(), d);
        assert_eq!(d.right().right().right().right(), d);
        assert_eq!(d.left().left().left().left(), d);
        assert_eq!(d.right().right(), d.left().left());
    }
    assert_eq!(Direction::North.right(), Direction::East);
    assert_eq!(Direction::North.left(), Direction::West);
}

#[test]
fn test_direction_tokens() {
    assert_eq!("north".parse::<Direction>(), Ok(Direction::North));
    assert_eq!("SOUTH".parse::<Direction>(), Ok(Direction::South));
    assert_eq!("eAsT".parse::<Direction>(), Ok(Direction::East));
    assert!("up".parse::<Direction>().is_err());
    assert!(" west".parse::<Direction>().is_err());
    assert_eq!(
        "up".parse::<Direction>().unwrap_err().to_string(),
        "unknown direction 'up'"
    );
    assert_eq!(Direction::West.to_string(), "WEST");
    assert_eq!(Direction::West.as_str(), "west");
}

#[test]
fn test_command_kind_keywords() {
    assert_eq!(CommandKind::from_keyword("place"), Some(CommandKind::Place));
    assert_eq!(CommandKind::from_keyword("Report"), Some(CommandKind::Report));
    assert_eq!(CommandKind::from_keyword("jump"), None);
    assert_eq!(Command::Left.kind(), CommandKind::Left);
    assert_eq!(
        Command::Place {
            x: 0,
            y: 0,
            direction: Direction::North
        }
        .kind()
        .to_string(),
        "PLACE"
    );
}

#[test]
fn test_placement_serializes() {
    let placement = Placement::new(1, 2, Direction::West);
    let json = serde_json::to_value(placement).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "position": [1, 2], "direction": "WEST" })
    );

    let back: Placement = serde_json::from_value(json).unwrap();
    assert_eq!(back, placement);
}
