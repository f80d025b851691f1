//! FromAsync and TryAsync - apps from futures.

use std::future::Future;
use std::marker::PhantomData;

use crate::app::trait_def::App;

/// App from an async function that cannot fail.
///
/// The function is called once per run and its future awaited. A panic while
/// producing or polling the future is not caught; use [`TryAsync`] when the
/// future can fail.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// let app = from_async::<_, String, (), _, _>(|| async { 42 });
/// assert_eq!(app.unsafe_run().await, Ok(42));
/// ```
pub struct FromAsync<F, E, R> {
    f: F,
    _phantom: PhantomData<fn() -> (E, R)>,
}

impl<F, E, R> std::fmt::Debug for FromAsync<F, E, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromAsync")
            .field("f", &"<function>")
            .finish()
    }
}

impl<F, E, R> FromAsync<F, E, R> {
    /// Create a new FromAsync app.
    pub fn new(f: F) -> Self {
        FromAsync {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<F, Fut, A, E, R> App for FromAsync<F, E, R>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = A> + Send,
    A: Send,
    E: Send,
    R: Clone + Send + Sync,
{
    type Output = A;
    type Error = E;
    type Env = R;

    async fn run(&self, _env: &R) -> Result<A, E> {
        Ok((self.f)().await)
    }
}

/// App from a fallible async function.
///
/// The future's error is converted into the typed error channel with
/// `on_error`.
pub struct TryAsync<F, G, R> {
    f: F,
    on_error: G,
    _phantom: PhantomData<fn() -> R>,
}

impl<F, G, R> std::fmt::Debug for TryAsync<F, G, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryAsync")
            .field("f", &"<function>")
            .field("on_error", &"<function>")
            .finish()
    }
}

impl<F, G, R> TryAsync<F, G, R> {
    /// Create a new TryAsync app.
    pub fn new(f: F, on_error: G) -> Self {
        TryAsync {
            f,
            on_error,
            _phantom: PhantomData,
        }
    }
}

impl<F, G, Fut, A, X, E, R> App for TryAsync<F, G, R>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<A, X>> + Send,
    G: Fn(X) -> E + Send + Sync,
    A: Send,
    E: Send,
    R: Clone + Send + Sync,
{
    type Output = A;
    type Error = E;
    type Env = R;

    async fn run(&self, _env: &R) -> Result<A, E> {
        (self.f)().await.map_err(&self.on_error)
    }
}
