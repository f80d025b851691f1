//! Typed, lazy, environment-aware effects.
//!
//! An [`App`] is a plan for an asynchronous computation that needs an
//! environment of type `Env` and settles to either an `Output` or an
//! `Error`. Plans are values: building one performs no side effects, and
//! the same plan can be run any number of times.
//!
//! # Building Plans
//!
//! ```rust,ignore
//! use rover_app::app::prelude::*;
//!
//! // Lift values and side effects
//! let answer = succeed::<_, String, ()>(42);
//! let now = sync::<_, String, (), _>(std::time::Instant::now);
//!
//! // Compose
//! let app = answer
//!     .map(|x| x + 1)
//!     .chain(|x| if x > 40 { succeed(x).boxed() } else { fail("too small".into()).boxed() });
//! ```
//!
//! # Environments
//!
//! Apps ask for capabilities with [`Has`] and are supplied layer by layer
//! with [`provide`](AppExt::provide) and [`provide_m`](AppExt::provide_m):
//!
//! ```rust,ignore
//! fn program<R, I>() -> impl App<Output = i64, Error = Infallible, Env = R>
//! where
//!     R: Has<CounterState, I> + Clone + Send + Sync,
//! {
//!     increment().chain(|_| count())
//! }
//!
//! let app = program().provide_m(live_counter_state());   // Env = ()
//! assert_eq!(app.unsafe_run().await, Ok(1));
//! ```
//!
//! # Boxing
//!
//! Combinators return concrete types and allocate nothing. Use
//! [`boxed`](AppExt::boxed) for recursion, for collections of different
//! plans, and for match arms returning different plans.
//!
//! # Failure
//!
//! The `Error` channel carries *checked* failures: anything produced by
//! [`fail`], [`try_sync`], [`try_async`] or a settled [`Resolver`].
//! Panics inside [`sync`], [`from_async`] or [`access`] are *unchecked*:
//! they are not caught and unwind through whoever polls the run.

pub mod boxed;
pub mod combinators;
pub mod constructors;
pub mod do_notation;
pub mod env;
pub mod ext;
pub mod prelude;
pub mod provide;
pub mod tracing;
pub mod tuple;
mod trait_def;

// Re-export core trait
pub use trait_def::App;

// Re-export extension traits
pub use ext::{unsafe_run, AppExt, Pair, UnsafeRun};

// Re-export environment lookup
pub use env::{Has, Here, Itself, There};

// Re-export boxed types
pub use boxed::{BoxFuture, BoxedApp};

// Re-export all combinator types
pub use combinators::{
    Access, AccessM, Bind, Callback, CatchAll, Chain, ErrInto, Fail, ForEach, FromAsync,
    FromResult, Map, MapErr, Resolver, Sequence, SequencePar, Succeed, Suspend, Tap, TryAsync,
    TrySuspend, ZipWith,
};

// Re-export environment combinators
pub use provide::{Local, Provide, ProvideM};

// Re-export tracing
pub use self::tracing::Instrument;

// Re-export aggregates
pub use tuple::{tuple, tuple_par, AppTuple, Tuple, TuplePar};

// Re-export constructors
pub use constructors::{
    access, access_m, callback, fail, for_each, from_async, from_result, sequence, sequence_par,
    succeed, sync, try_async, try_sync,
};
