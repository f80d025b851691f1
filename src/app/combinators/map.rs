//! Map combinator - transforms the success value of an app.

use crate::app::trait_def::App;

/// Map combinator - transforms the success value.
///
/// Failures pass through untouched and `f` is not called.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// let app = succeed::<_, String, ()>(21).map(|x| x * 2);
/// assert_eq!(app.unsafe_run().await, Ok(42));
/// ```
pub struct Map<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for Map<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("inner", &"<app>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, B> App for Map<Inner, F>
where
    Inner: App,
    F: Fn(Inner::Output) -> B + Send + Sync,
    B: Send,
{
    type Output = B;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(&self, env: &Self::Env) -> Result<B, Self::Error> {
        let value = self.inner.run(env).await?;
        Ok((self.f)(value))
    }
}
