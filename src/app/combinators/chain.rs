//! Chain combinator - sequences dependent apps.

use crate::app::trait_def::App;

/// Chain combinator - the monadic bind.
///
/// Runs the inner app to completion first. On failure the error is returned
/// as-is and `f` is never called; on success `f` builds the next app, which
/// runs against the same environment.
///
/// The chained app must have the same error type. Use `map_err` or
/// `err_into` to line the channels up before chaining:
///
/// ```rust,ignore
/// read_file(path)                          // Error = ReadFileError
///     .err_into::<RoverError>()            // Error = RoverError
///     .chain(|text| parse(text))           // Error = RoverError
/// ```
pub struct Chain<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for Chain<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("inner", &"<app>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, N> App for Chain<Inner, F>
where
    Inner: App,
    N: App<Error = Inner::Error, Env = Inner::Env>,
    F: Fn(Inner::Output) -> N + Send + Sync,
{
    type Output = N::Output;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let value = self.inner.run(env).await?;
        (self.f)(value).run(env).await
    }
}
