//! Bind combinator - do-style binding that keeps every intermediate value.

use crate::app::trait_def::App;

/// Runs the inner app, then the app built from a borrow of its value, and
/// yields both values as a pair.
///
/// Repeated binds accumulate a nested record of everything computed so far,
/// which later steps can destructure:
///
/// ```rust,ignore
/// get_planet()
///     .bind(|_| get_rover_state())
///     .map(|(planet, state)| state.execute(command, planet))
/// ```
#[derive(Debug)]
pub struct Bind<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F, N> App for Bind<Inner, F>
where
    Inner: App,
    F: Fn(&Inner::Output) -> N + Send + Sync,
    N: App<Error = Inner::Error, Env = Inner::Env>,
{
    type Output = (Inner::Output, N::Output);
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let first = self.inner.run(env).await?;
        let second = (self.f)(&first).run(env).await?;
        Ok((first, second))
    }
}
