//! CatchAll combinator - recovers from errors.

use crate::app::trait_def::App;

/// CatchAll combinator - recovers from errors.
///
/// If the inner app succeeds, the value passes through unchanged. If it
/// fails, the handler is called with the error to produce a replacement app,
/// whose error type becomes the error type of the whole. Recovering with an
/// app that cannot fail eliminates the original error from the type.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// let app = fail::<i32, _, ()>("x")
///     .catch_all(|_| succeed::<_, Infallible, ()>(42));
/// assert_eq!(app.unsafe_run().await, Ok(42));
/// ```
pub struct CatchAll<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for CatchAll<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatchAll")
            .field("inner", &"<app>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, N> App for CatchAll<Inner, F>
where
    Inner: App,
    N: App<Output = Inner::Output, Env = Inner::Env>,
    F: Fn(Inner::Error) -> N + Send + Sync,
{
    type Output = Inner::Output;
    type Error = N::Error;
    type Env = Inner::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        match self.inner.run(env).await {
            Ok(value) => Ok(value),
            Err(e) => (self.f)(e).run(env).await,
        }
    }
}
