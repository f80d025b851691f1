//! Callback - apps settled through a one-shot resolver.

use std::marker::PhantomData;

use futures::channel::oneshot;

use crate::app::trait_def::App;

/// One-shot handle that settles a [`Callback`] app.
///
/// Consumed by whichever of [`resolve`](Resolver::resolve),
/// [`succeed`](Resolver::succeed) or [`fail`](Resolver::fail) is called first.
#[derive(Debug)]
pub struct Resolver<A, E> {
    tx: oneshot::Sender<Result<A, E>>,
}

impl<A, E> Resolver<A, E> {
    /// Settle with a ready outcome.
    pub fn resolve(self, outcome: Result<A, E>) {
        // The receiving run was dropped; nobody is waiting for the outcome.
        let _ = self.tx.send(outcome);
    }

    /// Settle with a success value.
    pub fn succeed(self, value: A) {
        self.resolve(Ok(value));
    }

    /// Settle with a failure.
    pub fn fail(self, error: E) {
        self.resolve(Err(error));
    }
}

/// App whose outcome is delivered by a registration function.
///
/// On each run, `register` is called with a fresh [`Resolver`]; the run
/// completes when the resolver is settled, possibly from another thread.
///
/// # Panics
///
/// Polling the run panics if the resolver is dropped without being settled.
/// Like a panicking [`sync`](crate::app::sync) thunk, this is outside the
/// typed error channel.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// let app = callback::<_, u32, String, ()>(|resolver| {
///     std::thread::spawn(move || resolver.succeed(7));
/// });
/// assert_eq!(app.unsafe_run().await, Ok(7));
/// ```
pub struct Callback<F, A, E, R> {
    register: F,
    _phantom: PhantomData<fn() -> (A, E, R)>,
}

impl<F, A, E, R> std::fmt::Debug for Callback<F, A, E, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callback")
            .field("register", &"<function>")
            .finish()
    }
}

impl<F, A, E, R> Callback<F, A, E, R> {
    /// Create a new Callback app.
    pub fn new(register: F) -> Self {
        Callback {
            register,
            _phantom: PhantomData,
        }
    }
}

impl<F, A, E, R> App for Callback<F, A, E, R>
where
    F: Fn(Resolver<A, E>) + Send + Sync,
    A: Send,
    E: Send,
    R: Clone + Send + Sync,
{
    type Output = A;
    type Error = E;
    type Env = R;

    async fn run(&self, _env: &R) -> Result<A, E> {
        let (tx, rx) = oneshot::channel();
        (self.register)(Resolver { tx });
        match rx.await {
            Ok(outcome) => outcome,
            Err(oneshot::Canceled) => panic!("callback resolver dropped without settling"),
        }
    }
}
