//! Succeed - wraps a value as an app with no side effects.

use std::marker::PhantomData;

use crate::app::trait_def::App;

/// A success value wrapped as an App.
///
/// The value is cloned on every run so the plan stays re-runnable.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// let app = succeed::<_, String, ()>(42);
/// assert_eq!(app.unsafe_run().await, Ok(42));
/// ```
#[derive(Debug, Clone)]
pub struct Succeed<A, E, R> {
    value: A,
    _phantom: PhantomData<fn() -> (E, R)>,
}

impl<A, E, R> Succeed<A, E, R> {
    /// Create a new Succeed app from a value.
    pub fn new(value: A) -> Self {
        Succeed {
            value,
            _phantom: PhantomData,
        }
    }
}

impl<A, E, R> App for Succeed<A, E, R>
where
    A: Clone + Send + Sync,
    E: Send,
    R: Clone + Send + Sync,
{
    type Output = A;
    type Error = E;
    type Env = R;

    async fn run(&self, _env: &R) -> Result<A, E> {
        Ok(self.value.clone())
    }
}
