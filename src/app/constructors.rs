//! Constructor functions for creating apps.
//!
//! These functions provide ergonomic ways to create apps without directly
//! constructing the combinator types.
//!
//! # Checked and Unchecked Failure
//!
//! [`sync`], [`from_async`], [`access`] and [`callback`] assume the code they
//! wrap cannot fail. If it panics anyway, the panic is not converted into the
//! typed error channel; it unwinds through whoever polls the run. Wrap
//! fallible code with [`try_sync`] or [`try_async`], which route the failure
//! into the error channel through an explicit `on_error` mapping.

use std::future::Future;

use crate::app::combinators::{
    Access, AccessM, Callback, Fail, ForEach, FromAsync, FromResult, Resolver, Sequence,
    SequencePar, Succeed, Suspend, TryAsync, TrySuspend,
};
use crate::app::env::Has;
use crate::app::trait_def::App;

/// Create an app that succeeds with the given value.
///
/// The app ignores its environment and cannot fail; the error type is left
/// generic so it fits any error channel.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// let app = succeed::<_, String, ()>(42);
/// assert_eq!(app.unsafe_run().await, Ok(42));
/// ```
pub fn succeed<A, E, R>(value: A) -> Succeed<A, E, R>
where
    A: Clone + Send + Sync,
    E: Send,
    R: Clone + Send + Sync,
{
    Succeed::new(value)
}

/// Create an app that fails with the given error.
///
/// The app ignores its environment and cannot succeed; the output type is
/// left generic so it fits anywhere.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// let app = fail::<i32, _, ()>("error".to_string());
/// assert_eq!(app.unsafe_run().await, Err("error".to_string()));
/// ```
pub fn fail<A, E, R>(error: E) -> Fail<A, E, R>
where
    A: Send,
    E: Clone + Send + Sync,
    R: Clone + Send + Sync,
{
    Fail::new(error)
}

/// Create an app from a ready `Result`.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// let app = from_result::<_, String, ()>(Ok(42));
/// assert_eq!(app.unsafe_run().await, Ok(42));
/// ```
pub fn from_result<A, E, R>(result: Result<A, E>) -> FromResult<A, E, R>
where
    A: Clone + Send + Sync,
    E: Clone + Send + Sync,
    R: Clone + Send + Sync,
{
    FromResult::new(result)
}

/// Create an app from a synchronous thunk that cannot fail.
///
/// The thunk is called on each run. See the module docs for what happens if
/// it panics.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// let app = sync::<_, String, (), _>(|| 1 + 1);
/// assert_eq!(app.unsafe_run().await, Ok(2));
/// ```
pub fn sync<A, E, R, F>(f: F) -> Suspend<F, E, R>
where
    F: Fn() -> A + Send + Sync,
    A: Send,
    E: Send,
    R: Clone + Send + Sync,
{
    Suspend::new(f)
}

/// Create an app from an async function whose future cannot fail.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// let app = from_async::<_, String, (), _, _>(|| async { 42 });
/// assert_eq!(app.unsafe_run().await, Ok(42));
/// ```
pub fn from_async<A, E, R, F, Fut>(f: F) -> FromAsync<F, E, R>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = A> + Send,
    A: Send,
    E: Send,
    R: Clone + Send + Sync,
{
    FromAsync::new(f)
}

/// Create an app from a fallible synchronous thunk.
///
/// An `Err(x)` from the thunk becomes the typed failure `on_error(x)`.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// let app = try_sync::<_, _, _, (), _, _>(|| "7".parse::<u8>(), |e| e.to_string());
/// assert_eq!(app.unsafe_run().await, Ok(7));
/// ```
pub fn try_sync<A, X, E, R, F, G>(f: F, on_error: G) -> TrySuspend<F, G, R>
where
    F: Fn() -> Result<A, X> + Send + Sync,
    G: Fn(X) -> E + Send + Sync,
    A: Send,
    E: Send,
    R: Clone + Send + Sync,
{
    TrySuspend::new(f, on_error)
}

/// Create an app from a fallible async function.
///
/// An `Err(x)` from the future becomes the typed failure `on_error(x)`.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// let app = try_async(
///     || tokio::fs::read_to_string("config/planet.txt"),
///     |e| e.to_string(),
/// );
/// ```
pub fn try_async<A, X, E, R, F, G, Fut>(f: F, on_error: G) -> TryAsync<F, G, R>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<A, X>> + Send,
    G: Fn(X) -> E + Send + Sync,
    A: Send,
    E: Send,
    R: Clone + Send + Sync,
{
    TryAsync::new(f, on_error)
}

/// Create an app settled through a one-shot [`Resolver`].
///
/// `register` is called on each run with a fresh resolver. See
/// [`Callback`] for what happens if the resolver is dropped unsettled.
pub fn callback<F, A, E, R>(register: F) -> Callback<F, A, E, R>
where
    F: Fn(Resolver<A, E>) + Send + Sync,
    A: Send,
    E: Send,
    R: Clone + Send + Sync,
{
    Callback::new(register)
}

/// Read a capability from the environment and project a value out of it.
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
pub fn access<S, I, E, R, A, F>(f: F) -> Access<F, S, I, E, R>
where
    F: Fn(&S) -> A + Send + Sync,
    A: Send,
    E: Send,
    R: Has<S, I> + Clone + Send + Sync,
{
    Access::new(f)
}

/// Read a capability from the environment, build an app from it, and run
/// that app against the same environment.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// fn count<R, I, E>() -> impl App<Output = i64, Error = E, Env = R>
/// where
///     R: Has<CounterState, I> + Clone + Send + Sync,
///     E: Send,
/// {
///     access_m(|counter: &CounterState| counter.count::<E, R>())
/// }
/// ```
pub fn access_m<S, I, R, N, F>(f: F) -> AccessM<F, S, I, R>
where
    F: Fn(&S) -> N + Send + Sync,
    N: App<Env = R>,
    R: Has<S, I> + Clone + Send + Sync,
{
    AccessM::new(f)
}

/// Run the app built for each item, in order, collecting the outputs.
///
/// Stops at the first failure; apps for later items are never built.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// let app = for_each(vec![1, 2, 3], |x| succeed::<_, String, ()>(x * 2));
/// assert_eq!(app.unsafe_run().await, Ok(vec![2, 4, 6]));
/// ```
pub fn for_each<T, N, F>(items: Vec<T>, f: F) -> ForEach<T, F>
where
    T: Clone + Send + Sync,
    F: Fn(T) -> N + Send + Sync,
    N: App,
{
    ForEach { items, f }
}

/// Run a list of apps sequentially, stopping at the first failure.
///
/// The homogeneous counterpart of [`tuple`](crate::app::tuple); box the
/// apps when their types differ.
pub fn sequence<A: App>(apps: Vec<A>) -> Sequence<A> {
    Sequence { apps }
}

/// Run a list of apps concurrently, reporting the first failure in list
/// order once all of them have settled.
///
/// The homogeneous counterpart of [`tuple_par`](crate::app::tuple_par).
pub fn sequence_par<A: App>(apps: Vec<A>) -> SequencePar<A> {
    SequencePar { apps }
}
