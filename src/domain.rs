//! Mars rover domain: planets, positions, orientations and commands.
//!
//! Everything here is pure. The rover's transition function is
//! [`RoverState::execute`]; the program module wraps it in apps.

use std::fmt;

use serde::Serialize;

use crate::error::InvalidCommand;

/// A planet is a `width` by `height` grid that wraps around on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Planet {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

/// A cell on the planet grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    /// Column, growing eastwards.
    pub x: u32,
    /// Row, growing northwards.
    pub y: u32,
}

/// The direction the rover faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    /// Facing `y + 1`.
    North,
    /// Facing `x + 1`.
    East,
    /// Facing `y - 1`.
    South,
    /// Facing `x - 1`.
    West,
}

impl Orientation {
    /// Rotate a quarter turn counter-clockwise.
    pub fn turn_left(self) -> Self {
        match self {
            Orientation::North => Orientation::West,
            Orientation::West => Orientation::South,
            Orientation::South => Orientation::East,
            Orientation::East => Orientation::North,
        }
    }

    /// Rotate a quarter turn clockwise.
    pub fn turn_right(self) -> Self {
        match self {
            Orientation::North => Orientation::East,
            Orientation::East => Orientation::South,
            Orientation::South => Orientation::West,
            Orientation::West => Orientation::North,
        }
    }

    /// Face the opposite way.
    pub fn reverse(self) -> Self {
        match self {
            Orientation::North => Orientation::South,
            Orientation::East => Orientation::West,
            Orientation::South => Orientation::North,
            Orientation::West => Orientation::East,
        }
    }

    /// Unit step `(dx, dy)` taken when moving in this direction.
    fn delta(self) -> (i64, i64) {
        match self {
            Orientation::North => (0, 1),
            Orientation::East => (1, 0),
            Orientation::South => (0, -1),
            Orientation::West => (-1, 0),
        }
    }

    /// Parse the one-letter form used in configuration files.
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "N" => Some(Orientation::North),
            "E" => Some(Orientation::East),
            "S" => Some(Orientation::South),
            "W" => Some(Orientation::West),
            _ => None,
        }
    }

    /// The one-letter form used in configuration files.
    pub fn letter(self) -> char {
        match self {
            Orientation::North => 'N',
            Orientation::East => 'E',
            Orientation::South => 'S',
            Orientation::West => 'W',
        }
    }
}

/// A single rover instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Command {
    /// `F`: step forward.
    MoveForward,
    /// `B`: turn around and step.
    MoveBackward,
    /// `L`: turn left and step.
    TurnLeft,
    /// `R`: turn right and step.
    TurnRight,
}

impl Command {
    /// Parse a single command letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'F' => Some(Command::MoveForward),
            'B' => Some(Command::MoveBackward),
            'L' => Some(Command::TurnLeft),
            'R' => Some(Command::TurnRight),
            _ => None,
        }
    }
}

/// Parse a line of command letters such as `FFLRB`.
///
/// Surrounding whitespace is ignored. A blank line, or any character other
/// than `F`, `B`, `L` and `R`, rejects the whole line.
pub fn parse_commands(line: &str) -> Result<Vec<Command>, InvalidCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InvalidCommand(trimmed.to_string()));
    }

    trimmed
        .chars()
        .map(Command::from_letter)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| InvalidCommand(trimmed.to_string()))
}

/// Where the rover is and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoverState {
    /// Current cell.
    pub position: Position,
    /// Current heading.
    pub orientation: Orientation,
}

impl RoverState {
    /// Create a rover state.
    pub fn new(x: u32, y: u32, orientation: Orientation) -> Self {
        RoverState {
            position: Position { x, y },
            orientation,
        }
    }

    /// Apply one command on `planet`.
    ///
    /// The command picks the new heading, then the rover steps one cell that
    /// way. Stepping off an edge wraps around to the opposite edge.
    ///
    /// `TurnRight` while facing South ends facing West. Earlier versions of
    /// the kata left the rover facing East after that step.
    pub fn execute(self, command: Command, planet: Planet) -> RoverState {
        let orientation = match command {
            Command::MoveForward => self.orientation,
            Command::MoveBackward => self.orientation.reverse(),
            Command::TurnLeft => self.orientation.turn_left(),
            Command::TurnRight => self.orientation.turn_right(),
        };
        let (dx, dy) = orientation.delta();

        RoverState {
            position: Position {
                x: wrap(self.position.x, dx, planet.width),
                y: wrap(self.position.y, dy, planet.height),
            },
            orientation,
        }
    }
}

/// `(value + delta) mod size`, always in `0..size`.
fn wrap(value: u32, delta: i64, size: u32) -> u32 {
    let wrapped = (i64::from(value) + delta).rem_euclid(i64::from(size.max(1)));
    // In 0..size, so it fits.
    wrapped as u32
}

impl fmt::Display for RoverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{}:{}",
            self.position.x,
            self.position.y,
            self.orientation.letter()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PLANET: Planet = Planet {
        width: 5,
        height: 4,
    };

    #[test]
    fn test_turn_left_from_north_wraps_west() {
        let state = RoverState::new(0, 0, Orientation::North);
        assert_eq!(
            state.execute(Command::TurnLeft, PLANET),
            RoverState::new(4, 0, Orientation::West)
        );
    }

    #[test]
    fn test_turn_left_from_east_wraps_north() {
        let state = RoverState::new(0, 3, Orientation::East);
        assert_eq!(
            state.execute(Command::TurnLeft, PLANET),
            RoverState::new(0, 0, Orientation::North)
        );
    }

    #[test]
    fn test_turn_right_from_south_faces_west() {
        let state = RoverState::new(2, 2, Orientation::South);
        assert_eq!(
            state.execute(Command::TurnRight, PLANET),
            RoverState::new(1, 2, Orientation::West)
        );
    }

    #[test]
    fn test_move_forward_keeps_heading() {
        let state = RoverState::new(1, 1, Orientation::East);
        assert_eq!(
            state.execute(Command::MoveForward, PLANET),
            RoverState::new(2, 1, Orientation::East)
        );
    }

    #[test]
    fn test_move_backward_reverses_heading() {
        let state = RoverState::new(1, 0, Orientation::North);
        assert_eq!(
            state.execute(Command::MoveBackward, PLANET),
            RoverState::new(1, 3, Orientation::South)
        );
    }

    #[test]
    fn test_display_matches_config_format() {
        assert_eq!(RoverState::new(3, 1, Orientation::West).to_string(), "3,1:W");
    }

    #[test]
    fn test_parse_commands_accepts_letter_runs() {
        assert_eq!(
            parse_commands(" FLRB\n"),
            Ok(vec![
                Command::MoveForward,
                Command::TurnLeft,
                Command::TurnRight,
                Command::MoveBackward,
            ])
        );
    }

    #[test]
    fn test_parse_commands_rejects_unknown_letters() {
        assert_eq!(parse_commands("FX"), Err(InvalidCommand("FX".to_string())));
        assert_eq!(parse_commands("f"), Err(InvalidCommand("f".to_string())));
        assert_eq!(parse_commands("   "), Err(InvalidCommand(String::new())));
    }

    fn arb_orientation() -> impl Strategy<Value = Orientation> {
        prop_oneof![
            Just(Orientation::North),
            Just(Orientation::East),
            Just(Orientation::South),
            Just(Orientation::West),
        ]
    }

    fn arb_command() -> impl Strategy<Value = Command> {
        prop_oneof![
            Just(Command::MoveForward),
            Just(Command::MoveBackward),
            Just(Command::TurnLeft),
            Just(Command::TurnRight),
        ]
    }

    proptest! {
        #[test]
        fn prop_rover_stays_on_planet(
            width in 1u32..50,
            height in 1u32..50,
            x in 0u32..50,
            y in 0u32..50,
            orientation in arb_orientation(),
            commands in prop::collection::vec(arb_command(), 0..40),
        ) {
            let planet = Planet { width, height };
            let mut state = RoverState::new(x % width, y % height, orientation);
            for command in commands {
                state = state.execute(command, planet);
                prop_assert!(state.position.x < width);
                prop_assert!(state.position.y < height);
            }
        }

        #[test]
        fn prop_four_turns_restore_heading(orientation in arb_orientation()) {
            let turned = (0..4).fold(orientation, |o, _| o.turn_left());
            prop_assert_eq!(turned, orientation);
            prop_assert_eq!(orientation.turn_left().turn_right(), orientation);
        }

        #[test]
        fn prop_forward_then_backward_returns_to_start(
            x in 0u32..5,
            y in 0u32..4,
            orientation in arb_orientation(),
        ) {
            let start = RoverState::new(x, y, orientation);
            let back = start
                .execute(Command::MoveForward, PLANET)
                .execute(Command::MoveBackward, PLANET);
            prop_assert_eq!(back.position, start.position);
            prop_assert_eq!(back.orientation, orientation.reverse());
        }
    }
}
