//! Configuration parsers.
//!
//! Both formats are single lines; surrounding whitespace (such as the
//! trailing newline of a config file) is ignored.
//!
//! - planet: `<width>x<height>`, e.g. `5x4`
//! - rover: `<x>,<y>:<orientation>`, e.g. `0,0:N`

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{Orientation, Planet, RoverState};
use crate::error::{InvalidInitialStateConfig, InvalidPlanetConfig};

static PLANET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)x(\d+)$").expect("Invalid regex pattern"));
static ROVER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+),(\d+):(N|S|E|W)$").expect("Invalid regex pattern"));

/// Parse a planet size.
///
/// Dimensions must be positive and fit in a `u32`.
pub fn parse_planet(spec: &str) -> Result<Planet, InvalidPlanetConfig> {
    let invalid = || InvalidPlanetConfig {
        spec: spec.to_string(),
    };

    let captures = PLANET_PATTERN.captures(spec.trim()).ok_or_else(invalid)?;
    let width: u32 = captures[1].parse().map_err(|_| invalid())?;
    let height: u32 = captures[2].parse().map_err(|_| invalid())?;

    if width == 0 || height == 0 {
        return Err(invalid());
    }

    Ok(Planet { width, height })
}

/// Parse the rover's starting position and heading.
pub fn parse_initial_state(spec: &str) -> Result<RoverState, InvalidInitialStateConfig> {
    let invalid = || InvalidInitialStateConfig {
        spec: spec.to_string(),
    };

    let captures = ROVER_PATTERN.captures(spec.trim()).ok_or_else(invalid)?;
    let x: u32 = captures[1].parse().map_err(|_| invalid())?;
    let y: u32 = captures[2].parse().map_err(|_| invalid())?;
    let orientation = Orientation::from_letter(&captures[3]).ok_or_else(invalid)?;

    Ok(RoverState::new(x, y, orientation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_planet() {
        assert_eq!(
            parse_planet("5x4\n"),
            Ok(Planet {
                width: 5,
                height: 4
            })
        );
    }

    #[test]
    fn test_parse_planet_rejects_bad_input() {
        for spec in ["5y4", "5x", "x4", "-5x4", "5 x 4", "0x4", "5x0", "99999999999x1", ""] {
            assert_eq!(
                parse_planet(spec),
                Err(InvalidPlanetConfig {
                    spec: spec.to_string()
                }),
                "{spec:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_initial_state() {
        assert_eq!(
            parse_initial_state(" 2,3:E\n"),
            Ok(RoverState::new(2, 3, Orientation::East))
        );
        assert_eq!(
            parse_initial_state("0,0:N"),
            Ok(RoverState::new(0, 0, Orientation::North))
        );
    }

    #[test]
    fn test_parse_initial_state_rejects_bad_input() {
        for spec in ["0,0", "0,0:Q", "0;0:N", "a,0:N", "0,0:n", "99999999999,0:N"] {
            assert_eq!(
                parse_initial_state(spec),
                Err(InvalidInitialStateConfig {
                    spec: spec.to_string()
                }),
                "{spec:?} should be rejected"
            );
        }
    }
}
