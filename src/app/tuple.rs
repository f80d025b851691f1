//! Heterogeneous aggregates - run a tuple of apps and collect a tuple of outputs.
//!
//! - [`tuple`] runs the apps strictly in order and stops at the first failure
//! - [`tuple_par`] starts all of them at once and reports the first failure
//!   in list order
//!
//! Tuples of two to eight apps are supported. Every app must share the error
//! and environment types of the first one.

use std::future::Future;

use crate::app::trait_def::App;

/// A tuple of apps that can be run as one.
///
/// Implemented for tuples of two to eight apps sharing an error and an
/// environment type. You don't need to implement this trait yourself.
pub trait AppTuple: Send + Sync {
    /// The tuple of outputs.
    type Output: Send;

    /// The shared error type.
    type Error: Send;

    /// The shared environment type.
    type Env: Clone + Send + Sync;

    /// Run each app after the previous one succeeded.
    fn run_in_order(
        &self,
        env: &Self::Env,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send;

    /// Start every app, wait for all of them, then pick the first failure in
    /// tuple order.
    fn run_concurrently(
        &self,
        env: &Self::Env,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send;
}

macro_rules! impl_app_tuple {
    ($first:ident $first_app:ident $(, $rest:ident $rest_app:ident)+) => {
        impl<$first, $($rest),+> AppTuple for ($first, $($rest),+)
        where
            $first: App,
            $($rest: App<Error = $first::Error, Env = $first::Env>,)+
        {
            type Output = ($first::Output, $($rest::Output),+);
            type Error = $first::Error;
            type Env = $first::Env;

            async fn run_in_order(
                &self,
                env: &Self::Env,
            ) -> Result<Self::Output, Self::Error> {
                let ($first_app, $($rest_app),+) = self;
                Ok(($first_app.run(env).await?, $($rest_app.run(env).await?),+))
            }

            async fn run_concurrently(
                &self,
                env: &Self::Env,
            ) -> Result<Self::Output, Self::Error> {
                let ($first_app, $($rest_app),+) = self;
                let ($first_app, $($rest_app),+) =
                    futures::join!($first_app.run(env), $($rest_app.run(env)),+);
                Ok(($first_app?, $($rest_app?),+))
            }
        }
    };
}

impl_app_tuple!(A1 a1, A2 a2);
impl_app_tuple!(A1 a1, A2 a2, A3 a3);
impl_app_tuple!(A1 a1, A2 a2, A3 a3, A4 a4);
impl_app_tuple!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
impl_app_tuple!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
impl_app_tuple!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7);
impl_app_tuple!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8);

/// Sequential aggregate created by [`tuple`].
#[derive(Debug)]
pub struct Tuple<T> {
    apps: T,
}

impl<T: AppTuple> App for Tuple<T> {
    type Output = T::Output;
    type Error = T::Error;
    type Env = T::Env;

    fn run(
        &self,
        env: &Self::Env,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send {
        self.apps.run_in_order(env)
    }
}

/// Concurrent aggregate created by [`tuple_par`].
#[derive(Debug)]
pub struct TuplePar<T> {
    apps: T,
}

impl<T: AppTuple> App for TuplePar<T> {
    type Output = T::Output;
    type Error = T::Error;
    type Env = T::Env;

    fn run(
        &self,
        env: &Self::Env,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send {
        self.apps.run_concurrently(env)
    }
}

/// Run a tuple of apps sequentially, collecting a tuple of outputs.
///
/// Each app starts only after the previous one has fully succeeded. On the
/// first failure in tuple order the remaining apps are never started and
/// that failure is returned.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// let app = tuple((
///     succeed::<_, String, ()>(1),
///     succeed("two"),
///     succeed(3.0),
/// ));
/// assert_eq!(app.unsafe_run().await, Ok((1, "two", 3.0)));
/// ```
pub fn tuple<T: AppTuple>(apps: T) -> Tuple<T> {
    Tuple { apps }
}

/// Run a tuple of apps concurrently, collecting a tuple of outputs.
///
/// Every app is started (in tuple order) without waiting for the others, and
/// every app runs to completion, so all side effects happen even if a
/// sibling fails. The reported failure is the first one in tuple order, not
/// the first one to settle.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// let app = tuple_par((fetch_planet(), fetch_rover()));
/// let (planet, rover) = app.unsafe_run().await?;
/// ```
pub fn tuple_par<T: AppTuple>(apps: T) -> TuplePar<T> {
    TuplePar { apps }
}
