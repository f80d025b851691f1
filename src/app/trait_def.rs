//! App trait definition - the core abstraction for lazy, environment-aware effects.
//!
//! An `App` is a *plan*: a pure, immutable description of work that needs an
//! environment of type `Env`, and that eventually settles to either an
//! `Output` or an `Error`. Nothing happens until the plan is run.
//!
//! # Two Stages
//!
//! - **Plan**: building an app (via constructors and combinators) performs no
//!   side effects.
//! - **Run**: [`App::run`] supplies the environment and returns a future; the
//!   side effects happen while that future is polled.
//!
//! `run` borrows the plan, so the same plan can be run again. Every run
//! re-executes every side effect; nothing is memoized.
//!
//! # Environment Cloning
//!
//! The `Env` type requires `Clone` so that [`provide`](crate::app::AppExt::provide)
//! can layer fragments on top of it and boxing can erase it. Environments are
//! usually small records of `Arc`-backed services, so cloning is cheap:
//!
//! ```rust,ignore
//! #[derive(Clone)]
//! struct Fs {
//!     backend: Arc<dyn FileSystem>,
//! }
//! ```

use std::future::Future;

/// The core App trait - a deferred, environment-dependent, possibly-failing
/// asynchronous computation.
///
/// Combinators return concrete types implementing this trait (zero-cost);
/// use [`boxed`](crate::app::AppExt::boxed) when type erasure is needed.
///
/// # Type Parameters
///
/// * `Output` - The success type produced by this app
/// * `Error` - The error type that may be produced
/// * `Env` - The environment required to run this app
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// fn planet<R, I, E>() -> impl App<Output = Planet, Error = E, Env = R>
/// where
///     R: Has<ProgramConfig, I> + Clone + Send + Sync,
///     E: Send,
/// {
///     access(|config: &ProgramConfig| config.planet)
/// }
/// ```
pub trait App: Sized + Send + Sync {
    /// The success type produced by this app.
    type Output: Send;

    /// The error type that may be produced.
    type Error: Send;

    /// The environment type required to run this app.
    type Env: Clone + Send + Sync;

    /// Run this app with the given environment.
    ///
    /// The returned future performs the work when polled and resolves to
    /// `Ok(output)` on success or `Err(error)` on failure, never both.
    fn run(&self, env: &Self::Env)
        -> impl Future<Output = Result<Self::Output, Self::Error>> + Send;
}
