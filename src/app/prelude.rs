//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used traits, constructors and types from
//! the app module, so a single `use` statement gets you started.
//!
//! ```rust
//! use rover_app::app::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let app = succeed::<_, String, ()>(42)
//!     .map(|x| x * 2)
//!     .chain(|x| succeed(x + 1));
//!
//! assert_eq!(app.unsafe_run().await, Ok(85));
//! # });
//! ```
//!
//! # What's Included
//!
//! - **Core traits**: [`App`], [`AppExt`], [`UnsafeRun`], [`Has`]
//! - **Constructors**: [`succeed`], [`fail`], [`sync`], [`try_sync`],
//!   [`from_async`], [`try_async`], [`access`], [`access_m`], ...
//! - **Aggregates**: [`tuple`], [`tuple_par`], [`for_each`], [`sequence`],
//!   [`sequence_par`]
//! - **Boxing**: [`BoxedApp`]
//! - [`Infallible`], the error type of apps that cannot fail

pub use std::convert::Infallible;

// Traits
pub use crate::app::env::{Has, Here, Itself, There};
pub use crate::app::ext::{unsafe_run, AppExt, UnsafeRun};
pub use crate::app::trait_def::App;

// Boxed app
pub use crate::app::boxed::{BoxFuture, BoxedApp};

// Combinator types, for signatures that need to name them
pub use crate::app::combinators::Resolver;

// Constructors
pub use crate::app::constructors::{
    access, access_m, callback, fail, for_each, from_async, from_result, sequence, sequence_par,
    succeed, sync, try_async, try_sync,
};
pub use crate::app::tuple::{tuple, tuple_par};

// Do-notation
pub use crate::app_do;
