//! BoxedApp - type-erased app for opt-in boxing.
//!
//! Use `BoxedApp` when you need to:
//! - Store different app types in a collection
//! - Return different apps from match arms
//! - Create recursive app functions
//!
//! A `BoxedApp` is reference counted, so cloning it shares the same plan.

use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;

use crate::app::trait_def::App;

/// A boxed future that is `Send`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

// Object-safe view of `App`, so plans can live behind `dyn`.
trait ErasedApp<A, E, R>: Send + Sync {
    fn run_erased<'a>(&'a self, env: &'a R) -> BoxFuture<'a, Result<A, E>>;
}

impl<T: App> ErasedApp<T::Output, T::Error, T::Env> for T {
    fn run_erased<'a>(&'a self, env: &'a T::Env) -> BoxFuture<'a, Result<T::Output, T::Error>> {
        Box::pin(self.run(env))
    }
}

/// A type-erased app.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// // Different plans in one Vec
/// let apps: Vec<BoxedApp<i32, String, ()>> = vec![
///     succeed(1).boxed(),
///     succeed(2).map(|x| x * 2).boxed(),
/// ];
///
/// // Recursive plan
/// fn countdown(n: i32) -> BoxedApp<i32, String, ()> {
///     if n <= 0 {
///         succeed(0).boxed()
///     } else {
///         succeed(n)
///             .chain(move |x| countdown(x - 1).map(move |sum| x + sum))
///             .boxed()
///     }
/// }
/// ```
pub struct BoxedApp<A, E, R> {
    inner: Arc<dyn ErasedApp<A, E, R>>,
    _phantom: PhantomData<fn() -> R>,
}

impl<A, E, R> Clone for BoxedApp<A, E, R> {
    fn clone(&self) -> Self {
        BoxedApp {
            inner: Arc::clone(&self.inner),
            _phantom: PhantomData,
        }
    }
}

impl<A, E, R> std::fmt::Debug for BoxedApp<A, E, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxedApp")
            .field("inner", &"<app>")
            .finish()
    }
}

impl<A, E, R> BoxedApp<A, E, R>
where
    A: Send + 'static,
    E: Send + 'static,
    R: Clone + Send + Sync + 'static,
{
    /// Create a boxed app from any app.
    pub fn new<T>(app: T) -> Self
    where
        T: App<Output = A, Error = E, Env = R> + 'static,
    {
        BoxedApp {
            inner: Arc::new(app),
            _phantom: PhantomData,
        }
    }
}

impl<A, E, R> App for BoxedApp<A, E, R>
where
    A: Send,
    E: Send,
    R: Clone + Send + Sync,
{
    type Output = A;
    type Error = E;
    type Env = R;

    async fn run(&self, env: &R) -> Result<A, E> {
        self.inner.run_erased(env).await
    }
}
