//! Fail - represents a failed computation.

use std::marker::PhantomData;

use crate::app::trait_def::App;

/// A failure value wrapped as an App.
///
/// The error is cloned on every run so the plan stays re-runnable.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// let app = fail::<i32, _, ()>("boom".to_string());
/// assert_eq!(app.unsafe_run().await, Err("boom".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct Fail<A, E, R> {
    error: E,
    _phantom: PhantomData<fn() -> (A, R)>,
}

impl<A, E, R> Fail<A, E, R> {
    /// Create a new Fail app from an error.
    pub fn new(error: E) -> Self {
        Fail {
            error,
            _phantom: PhantomData,
        }
    }
}

impl<A, E, R> App for Fail<A, E, R>
where
    A: Send,
    E: Clone + Send + Sync,
    R: Clone + Send + Sync,
{
    type Output = A;
    type Error = E;
    type Env = R;

    async fn run(&self, _env: &R) -> Result<A, E> {
        Err(self.error.clone())
    }
}
