//! # Rover App
//!
//! Typed, lazy, environment-aware effects, and a Mars rover that drives on
//! them.
//!
//! ## The Core
//!
//! An [`App`](app::App) is a *plan*: a value describing an asynchronous
//! computation that needs an environment, and that settles to either a
//! success or a typed error. Plans are built by composition and do nothing
//! until they are run; the composition root supplies every capability the
//! plan needs and runs it once.
//!
//! ```rust
//! use rover_app::app::prelude::*;
//! use rover_app::counter::{live_counter_state, program};
//!
//! # tokio_test::block_on(async {
//! // Four increments and a decrement against a counter from the environment
//! let app = program().provide_m(live_counter_state());
//!
//! let result: Result<i64, Infallible> = app.unsafe_run().await;
//! assert_eq!(result, Ok(3));
//! # });
//! ```
//!
//! ## The Rover
//!
//! The rover program reads a planet size and a starting position from
//! configuration files, reads a line of commands, and drives the rover
//! across a planet that wraps around at the edges. See [`program`] for how
//! its services are layered and [`program::rover_main`] for the whole run.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod app;
pub mod config;
pub mod counter;
pub mod domain;
pub mod error;
pub mod fs;
pub mod parser;
pub mod program;
pub mod state_ref;
pub mod testing;

// Re-exports
pub use app::{App, AppExt, BoxedApp, Has, UnsafeRun};
pub use error::RoverError;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::prelude::*;
    pub use crate::domain::{Command, Orientation, Planet, Position, RoverState};
    pub use crate::error::RoverError;
    pub use crate::fs::Fs;
    pub use crate::state_ref::{make_state_ref, StateRef};
}
