//! The rover program: services, transitions and the composition of the
//! whole run.
//!
//! The program needs three capabilities:
//!
//! - [`ProgramConfig`]: the planet and where the rover starts
//! - [`ProgramState`]: the rover's current state
//! - [`Fs`]: where configuration and commands come from
//!
//! [`rover_main`] supplies the first two itself, building the config from
//! files with [`live_program_config`] and the state from the config with
//! [`initial_state`]. Only `Fs` is left for the caller.

use tracing::debug;

use crate::app::{access, access_m, for_each, succeed, try_sync, App, AppExt, BoxedApp, Has};
use crate::config::ConfigPaths;
use crate::domain::{parse_commands, Command, Planet, RoverState};
use crate::error::{InvalidInitialStateConfig, InvalidPlanetConfig, ReadFileError, RoverError};
use crate::fs::{read_file, read_line_from_console, Fs};
use crate::parser::{parse_initial_state, parse_planet};
use crate::state_ref::{make_state_ref, StateRef};

/// The planet and the rover's starting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramConfig {
    /// The planet the rover drives on.
    pub planet: Planet,
    /// Where the rover starts.
    pub initial_state: RoverState,
}

/// The rover's current state.
#[derive(Debug, Clone)]
pub struct ProgramState {
    rover: StateRef<RoverState>,
}

impl ProgramState {
    /// Read the rover state.
    pub fn rover_state<E, R>(&self) -> impl App<Output = RoverState, Error = E, Env = R>
    where
        E: Send,
        R: Clone + Send + Sync,
    {
        self.rover.get()
    }

    /// Replace the rover state, yielding the new state.
    pub fn set_rover_state<E, R>(
        &self,
        next: RoverState,
    ) -> impl App<Output = RoverState, Error = E, Env = R>
    where
        E: Send,
        R: Clone + Send + Sync,
    {
        self.rover.set(next)
    }
}

/// The planet from the config.
pub fn get_planet<R, I, E>() -> impl App<Output = Planet, Error = E, Env = R>
where
    R: Has<ProgramConfig, I> + Clone + Send + Sync,
    E: Send,
{
    access(|config: &ProgramConfig| config.planet)
}

/// The starting state from the config.
pub fn get_initial_state<R, I, E>() -> impl App<Output = RoverState, Error = E, Env = R>
where
    R: Has<ProgramConfig, I> + Clone + Send + Sync,
    E: Send,
{
    access(|config: &ProgramConfig| config.initial_state)
}

/// The rover's current state.
pub fn get_rover_state<R, I, E>() -> impl App<Output = RoverState, Error = E, Env = R>
where
    R: Has<ProgramState, I> + Clone + Send + Sync,
    E: Send,
{
    access_m(|state: &ProgramState| state.rover_state())
}

/// Replace the rover's current state.
pub fn set_rover_state<R, I, E>(next: RoverState) -> impl App<Output = RoverState, Error = E, Env = R>
where
    R: Has<ProgramState, I> + Clone + Send + Sync,
    E: Send,
{
    access_m(move |state: &ProgramState| state.set_rover_state(next))
}

/// Apply one command to the rover.
pub fn process<R, I1, I2, E>(command: Command) -> impl App<Output = (), Error = E, Env = R>
where
    R: Has<ProgramConfig, I1> + Has<ProgramState, I2> + Clone + Send + Sync,
    E: Send,
{
    get_planet()
        .zip(get_rover_state())
        .map(move |(planet, from)| (from, from.execute(command, planet)))
        .chain(move |(from, to)| {
            set_rover_state(to).map(move |_| {
                debug!(?command, %from, %to, "rover moved");
            })
        })
}

/// Apply each command in order, then yield where the rover ended up.
pub fn move_rover<R, I1, I2, E>(
    commands: Vec<Command>,
) -> impl App<Output = RoverState, Error = E, Env = R>
where
    R: Has<ProgramConfig, I1> + Has<ProgramState, I2> + Clone + Send + Sync,
    E: Send,
{
    let span = tracing::debug_span!("move_rover", commands = commands.len());
    for_each(commands, process)
        .chain(|_| get_rover_state())
        .instrument(span)
}

/// Build the rover's state, starting where the config says.
///
/// Each run builds a new state cell.
pub fn initial_state<R, I, E>() -> impl App<Output = ProgramState, Error = E, Env = R>
where
    R: Has<ProgramConfig, I> + Clone + Send + Sync,
    E: Send,
{
    get_initial_state()
        .chain(make_state_ref)
        .map(|rover| ProgramState { rover })
}

/// Read and parse the rover file, then the planet file.
pub fn live_program_config<R, I, E>(
    paths: ConfigPaths,
) -> impl App<Output = ProgramConfig, Error = E, Env = R>
where
    R: Has<Fs, I> + Clone + Send + Sync,
    E: From<ReadFileError> + From<InvalidInitialStateConfig> + From<InvalidPlanetConfig> + Send,
{
    let read_rover = read_file(paths.rover)
        .chain(|text| try_sync(move || parse_initial_state(&text), E::from));
    let read_planet = read_file(paths.planet)
        .chain(|text| try_sync(move || parse_planet(&text), E::from));

    read_rover.zip_with(read_planet, |initial_state, planet| {
        debug!(%initial_state, ?planet, "loaded program config");
        ProgramConfig {
            planet,
            initial_state,
        }
    })
}

type MainEnv = ((((), Fs), ProgramConfig), ProgramState);

/// The whole rover program.
///
/// Reads the configuration, reads one line of commands (from `commands`
/// when given, otherwise from the console), drives the rover, and yields its
/// final state.
pub fn rover_main(
    paths: ConfigPaths,
    commands: Option<String>,
) -> impl App<Output = RoverState, Error = RoverError, Env = ((), Fs)> {
    let command_line: BoxedApp<String, RoverError, MainEnv> = match commands {
        Some(line) => succeed(line).boxed(),
        None => read_line_from_console().boxed(),
    };

    command_line
        .chain(|line| try_sync(move || parse_commands(&line), RoverError::from))
        .chain(move_rover)
        .provide_m(initial_state())
        .provide_m(live_program_config(paths))
}
