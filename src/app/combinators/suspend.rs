//! Suspend and TrySuspend - apps from synchronous thunks.

use std::marker::PhantomData;

use crate::app::trait_def::App;

/// App from a synchronous thunk that cannot fail.
///
/// The thunk is called once per run. A panic inside the thunk is *not*
/// converted into the error channel; it unwinds through whoever is polling
/// the run. Use [`TrySuspend`] for thunks that can fail.
pub struct Suspend<F, E, R> {
    f: F,
    _phantom: PhantomData<fn() -> (E, R)>,
}

impl<F, E, R> std::fmt::Debug for Suspend<F, E, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Suspend")
            .field("f", &"<function>")
            .finish()
    }
}

impl<F, E, R> Suspend<F, E, R> {
    /// Create a new Suspend app.
    pub fn new(f: F) -> Self {
        Suspend {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<F, A, E, R> App for Suspend<F, E, R>
where
    F: Fn() -> A + Send + Sync,
    A: Send,
    E: Send,
    R: Clone + Send + Sync,
{
    type Output = A;
    type Error = E;
    type Env = R;

    async fn run(&self, _env: &R) -> Result<A, E> {
        Ok((self.f)())
    }
}

/// App from a fallible synchronous thunk.
///
/// The thunk's error is converted into the typed error channel with
/// `on_error`.
pub struct TrySuspend<F, G, R> {
    f: F,
    on_error: G,
    _phantom: PhantomData<fn() -> R>,
}

impl<F, G, R> std::fmt::Debug for TrySuspend<F, G, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrySuspend")
            .field("f", &"<function>")
            .field("on_error", &"<function>")
            .finish()
    }
}

impl<F, G, R> TrySuspend<F, G, R> {
    /// Create a new TrySuspend app.
    pub fn new(f: F, on_error: G) -> Self {
        TrySuspend {
            f,
            on_error,
            _phantom: PhantomData,
        }
    }
}

impl<F, G, A, X, E, R> App for TrySuspend<F, G, R>
where
    F: Fn() -> Result<A, X> + Send + Sync,
    G: Fn(X) -> E + Send + Sync,
    A: Send,
    E: Send,
    R: Clone + Send + Sync,
{
    type Output = A;
    type Error = E;
    type Env = R;

    async fn run(&self, _env: &R) -> Result<A, E> {
        (self.f)().map_err(&self.on_error)
    }
}
