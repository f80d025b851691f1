//! ZipWith combinator - combines two apps with a function.

use crate::app::trait_def::App;

/// Combines two apps with a function.
///
/// The apps run sequentially: `second` starts only after `first` has fully
/// succeeded, so the first failure in program order wins.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// let app = succeed::<_, String, ()>(2).zip_with(succeed(3), |a, b| a * b);
/// assert_eq!(app.unsafe_run().await, Ok(6));
/// ```
#[derive(Debug)]
pub struct ZipWith<A1, A2, F> {
    pub(crate) first: A1,
    pub(crate) second: A2,
    pub(crate) f: F,
}

impl<A1, A2, F> ZipWith<A1, A2, F> {
    /// Create a new ZipWith combinator.
    pub fn new(first: A1, second: A2, f: F) -> Self {
        ZipWith { first, second, f }
    }
}

impl<A1, A2, F, C> App for ZipWith<A1, A2, F>
where
    A1: App,
    A2: App<Error = A1::Error, Env = A1::Env>,
    F: Fn(A1::Output, A2::Output) -> C + Send + Sync,
    C: Send,
{
    type Output = C;
    type Error = A1::Error;
    type Env = A1::Env;

    async fn run(&self, env: &Self::Env) -> Result<C, Self::Error> {
        let first_result = self.first.run(env).await?;
        let second_result = self.second.run(env).await?;
        Ok((self.f)(first_result, second_result))
    }
}
