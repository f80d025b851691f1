//! MapErr and ErrInto combinators - transform the error channel.

use std::marker::PhantomData;

use crate::app::trait_def::App;

/// MapErr combinator - transforms the error value.
///
/// Useful for converting error types so that apps with different error
/// channels can be chained.
pub struct MapErr<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for MapErr<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapErr")
            .field("inner", &"<app>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, E2> App for MapErr<Inner, F>
where
    Inner: App,
    F: Fn(Inner::Error) -> E2 + Send + Sync,
    E2: Send,
{
    type Output = Inner::Output;
    type Error = E2;
    type Env = Inner::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, E2> {
        self.inner.run(env).await.map_err(&self.f)
    }
}

/// ErrInto combinator - widens the error into a larger error type via `Into`.
///
/// This is how an app joins an error union: `ReadFileError` becomes
/// `RoverError::ReadFile` without spelling out the conversion.
pub struct ErrInto<Inner, E2> {
    pub(crate) inner: Inner,
    pub(crate) _phantom: PhantomData<fn() -> E2>,
}

impl<Inner, E2> std::fmt::Debug for ErrInto<Inner, E2> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrInto")
            .field("inner", &"<app>")
            .finish()
    }
}

impl<Inner, E2> App for ErrInto<Inner, E2>
where
    Inner: App,
    Inner::Error: Into<E2>,
    E2: Send,
{
    type Output = Inner::Output;
    type Error = E2;
    type Env = Inner::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, E2> {
        self.inner.run(env).await.map_err(Into::into)
    }
}
