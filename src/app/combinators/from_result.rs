//! FromResult - lifts a ready `Result` into an app.

use std::marker::PhantomData;

use crate::app::trait_def::App;

/// A ready `Result` wrapped as an App.
#[derive(Debug, Clone)]
pub struct FromResult<A, E, R> {
    result: Result<A, E>,
    _phantom: PhantomData<fn() -> R>,
}

impl<A, E, R> FromResult<A, E, R> {
    /// Create a new FromResult app.
    pub fn new(result: Result<A, E>) -> Self {
        FromResult {
            result,
            _phantom: PhantomData,
        }
    }
}

impl<A, E, R> App for FromResult<A, E, R>
where
    A: Clone + Send + Sync,
    E: Clone + Send + Sync,
    R: Clone + Send + Sync,
{
    type Output = A;
    type Error = E;
    type Env = R;

    async fn run(&self, _env: &R) -> Result<A, E> {
        self.result.clone()
    }
}
