//! Command-line configuration and logging setup for the `rover` binary.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Drive a Mars rover around a wrapping planet.
#[derive(Debug, Parser)]
#[command(name = "rover", version)]
#[command(about = "Drive a Mars rover around a wrapping planet", long_about = None)]
pub struct Cli {
    /// Directory holding rover.txt and planet.txt
    #[arg(long, default_value = "config")]
    pub config_dir: PathBuf,

    /// Rover start file (default: <config-dir>/rover.txt)
    #[arg(long)]
    pub rover: Option<PathBuf>,

    /// Planet size file (default: <config-dir>/planet.txt)
    #[arg(long)]
    pub planet: Option<PathBuf>,

    /// Command letters to run, e.g. FFLB (prompts on the console when absent)
    #[arg(short, long)]
    pub commands: Option<String>,

    /// Print the final rover state as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolve the configuration file locations.
    pub fn config_paths(&self) -> ConfigPaths {
        let defaults = ConfigPaths::in_dir(&self.config_dir);
        ConfigPaths {
            rover: self.rover.clone().unwrap_or(defaults.rover),
            planet: self.planet.clone().unwrap_or(defaults.planet),
        }
    }
}

/// Where the rover program reads its configuration from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// File holding the rover's start, e.g. `0,0:N`.
    pub rover: PathBuf,
    /// File holding the planet size, e.g. `5x4`.
    pub planet: PathBuf,
}

impl ConfigPaths {
    /// The standard file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        ConfigPaths {
            rover: dir.join("rover.txt"),
            planet: dir.join("planet.txt"),
        }
    }
}

/// Log filter for a `-v` count.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the `-v` count when set.
pub fn init_logging(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 2)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["rover"]);
        assert_eq!(cli.config_paths(), ConfigPaths::in_dir("config"));
        assert_eq!(cli.commands, None);
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "rover",
            "--config-dir",
            "conf",
            "--planet",
            "mars.txt",
            "-c",
            "FFL",
            "--json",
            "-vv",
        ]);
        assert_eq!(
            cli.config_paths(),
            ConfigPaths {
                rover: PathBuf::from("conf/rover.txt"),
                planet: PathBuf::from("mars.txt"),
            }
        );
        assert_eq!(cli.commands.as_deref(), Some("FFL"));
        assert!(cli.json);
        assert_eq!(log_level(cli.verbose), "trace");
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
