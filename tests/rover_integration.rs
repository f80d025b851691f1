//! End-to-end runs of the rover program against in-memory and on-disk
//! configuration.

use std::fs;

use rover_app::config::ConfigPaths;
use rover_app::prelude::*;
use rover_app::program::rover_main;
use rover_app::testing::MemoryFs;
use tempfile::TempDir;

fn memory_config(rover: &str, planet: &str) -> MemoryFs {
    MemoryFs::new()
        .with_file("cfg/rover.txt", rover)
        .with_file("cfg/planet.txt", planet)
}

/// Runs the program, reporting failures by their user-facing message.
async fn drive(fs: MemoryFs, commands: Option<&str>) -> Result<RoverState, String> {
    rover_main(ConfigPaths::in_dir("cfg"), commands.map(str::to_string))
        .provide(Fs::new(fs))
        .unsafe_run()
        .await
        .map_err(|e| e.user_message())
}

#[tokio::test]
async fn test_drives_around_the_planet() {
    let result = drive(memory_config("0,0:N", "5x4"), Some("RBBLBRF")).await;

    assert_eq!(result, Ok(RoverState::new(4, 0, Orientation::West)));
}

#[tokio::test]
async fn test_wraps_across_every_edge() {
    let fs = memory_config("0,0:S", "3x3");

    let down = drive(fs.clone(), Some("F")).await.map(|s| s.to_string());
    assert_eq!(down, Ok("0,2:S".to_string()));

    let left = drive(fs, Some("R")).await.map(|s| s.to_string());
    assert_eq!(left, Ok("2,0:W".to_string()));
}

#[tokio::test]
async fn test_commands_from_console() {
    let fs = memory_config("1,1:E", "4x4").with_console_lines(["  FFL  "]);

    let result = drive(fs, None).await;

    assert_eq!(result, Ok(RoverState::new(3, 2, Orientation::North)));
}

#[tokio::test]
async fn test_empty_console_fails() {
    let result = drive(memory_config("0,0:N", "5x4"), None).await;

    assert_eq!(result, Err("Bad input".to_string()));
}

#[tokio::test]
async fn test_invalid_configuration_messages() {
    let bad_planet = drive(memory_config("0,0:N", "5by4"), Some("F")).await;
    assert_eq!(bad_planet, Err("Invalid planet".to_string()));

    let bad_rover = drive(memory_config("0,0:Q", "5x4"), Some("F")).await;
    assert_eq!(bad_rover, Err("Invalid rover state".to_string()));

    let missing = drive(MemoryFs::new(), Some("F")).await;
    assert_eq!(missing, Err("Bad file".to_string()));
}

#[tokio::test]
async fn test_invalid_command_is_reported() {
    let result = drive(memory_config("0,0:N", "5x4"), Some("FFX")).await;

    assert_eq!(result, Err("Invalid command FFX".to_string()));
}

#[tokio::test]
async fn test_same_program_runs_twice() {
    let app = rover_main(ConfigPaths::in_dir("cfg"), Some("FF".to_string()))
        .provide(Fs::new(memory_config("0,0:N", "5x4")));

    let first = app.execute(&()).await.map_err(|e| e.user_message());
    let second = app.execute(&()).await.map_err(|e| e.user_message());

    assert_eq!(first, Ok(RoverState::new(0, 2, Orientation::North)));
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_live_filesystem() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("rover.txt"), "2,2:W\n").unwrap();
    fs::write(dir.path().join("planet.txt"), "6x6\n").unwrap();

    let result = rover_main(ConfigPaths::in_dir(dir.path()), Some("FFF".to_string()))
        .provide(Fs::live())
        .unsafe_run()
        .await
        .map_err(|e| e.user_message());

    assert_eq!(result, Ok(RoverState::new(5, 2, Orientation::West)));
}
