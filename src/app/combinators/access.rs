//! Access and AccessM - reading capabilities from the environment.

use std::marker::PhantomData;

use crate::app::env::Has;
use crate::app::trait_def::App;

/// Project a value out of a capability in the environment.
///
/// Environment access never fails; a panic in the projection is unchecked.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// #[derive(Clone)]
/// struct Config { width: u32 }
///
/// let app = access::<_, _, String, _, _, _>(|config: &Config| config.width * 2);
/// assert_eq!(app.execute(&Config { width: 21 }).await, Ok(42));
/// ```
pub struct Access<F, S, I, E, R> {
    f: F,
    _phantom: PhantomData<fn() -> (S, I, E, R)>,
}

impl<F, S, I, E, R> std::fmt::Debug for Access<F, S, I, E, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Access")
            .field("f", &"<function>")
            .finish()
    }
}

impl<F, S, I, E, R> Access<F, S, I, E, R> {
    /// Create a new Access app.
    pub fn new(f: F) -> Self {
        Access {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<F, S, I, A, E, R> App for Access<F, S, I, E, R>
where
    F: Fn(&S) -> A + Send + Sync,
    A: Send,
    E: Send,
    R: Has<S, I> + Clone + Send + Sync,
{
    type Output = A;
    type Error = E;
    type Env = R;

    async fn run(&self, env: &R) -> Result<A, E> {
        Ok((self.f)(Has::<S, I>::get(env)))
    }
}

/// Build an app from a capability in the environment, then run it.
///
/// Used for services whose operations are themselves apps: the service is
/// looked up, asked for the app, and the app runs against the same
/// environment.
pub struct AccessM<F, S, I, R> {
    f: F,
    _phantom: PhantomData<fn() -> (S, I, R)>,
}

impl<F, S, I, R> std::fmt::Debug for AccessM<F, S, I, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessM")
            .field("f", &"<function>")
            .finish()
    }
}

impl<F, S, I, R> AccessM<F, S, I, R> {
    /// Create a new AccessM app.
    pub fn new(f: F) -> Self {
        AccessM {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<F, S, I, R, N> App for AccessM<F, S, I, R>
where
    F: Fn(&S) -> N + Send + Sync,
    N: App<Env = R>,
    R: Has<S, I> + Clone + Send + Sync,
{
    type Output = N::Output;
    type Error = N::Error;
    type Env = R;

    async fn run(&self, env: &R) -> Result<N::Output, N::Error> {
        (self.f)(Has::<S, I>::get(env)).run(env).await
    }
}
