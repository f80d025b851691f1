//! Tap combinator - run a follow-up app for its effect, keep the original value.

use crate::app::trait_def::App;

/// An app that runs a follow-up and then re-yields the original value.
///
/// Whatever the follow-up produces is discarded, but its failure is not: a
/// failing follow-up fails the whole tap.
#[derive(Debug)]
pub struct Tap<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F, N> App for Tap<Inner, F>
where
    Inner: App,
    F: Fn(&Inner::Output) -> N + Send + Sync,
    N: App<Error = Inner::Error, Env = Inner::Env>,
{
    type Output = Inner::Output;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let value = self.inner.run(env).await?;
        (self.f)(&value).run(env).await?;
        Ok(value)
    }
}
