//! Extension trait providing combinator methods for all apps.
//!
//! The `AppExt` trait is automatically implemented for all types that
//! implement `App`. It provides ergonomic combinator methods like `map`,
//! `chain`, `catch_all`, `provide` and `boxed`.

use std::future::Future;
use std::marker::PhantomData;

use crate::app::boxed::BoxedApp;
use crate::app::combinators::{Bind, CatchAll, Chain, ErrInto, Map, MapErr, Tap, ZipWith};
use crate::app::provide::{Local, Provide, ProvideM};
use crate::app::tracing::Instrument;
use crate::app::trait_def::App;

/// Pairing function used by [`AppExt::zip`].
pub type Pair<A, B> = fn(A, B) -> (A, B);

/// Extension trait providing combinator methods for all apps.
///
/// This trait is automatically implemented for all types that implement `App`.
/// You don't need to implement this trait yourself.
///
/// Every method consumes the plan and returns a new, bigger plan; nothing
/// runs until the result is run.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// let app = succeed::<_, String, ()>(21)
///     .map(|x| x * 2)
///     .chain(|x| succeed(x + 1))
///     .map_err(|e| format!("Error: {}", e));
///
/// assert_eq!(app.unsafe_run().await, Ok(43));
/// ```
pub trait AppExt: App {
    /// Transform the success value.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let app = succeed::<_, String, ()>(21).map(|x| x * 2);
    /// assert_eq!(app.unsafe_run().await, Ok(42));
    /// ```
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> B + Send + Sync,
        B: Send,
    {
        Map { inner: self, f }
    }

    /// Transform the error value.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let app = fail::<i32, _, ()>("error")
    ///     .map_err(|e| format!("wrapped: {}", e));
    /// assert_eq!(app.unsafe_run().await, Err("wrapped: error".to_string()));
    /// ```
    fn map_err<E2, F>(self, f: F) -> MapErr<Self, F>
    where
        F: Fn(Self::Error) -> E2 + Send + Sync,
        E2: Send,
    {
        MapErr { inner: self, f }
    }

    /// Widen the error into a larger error type through `Into`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let app = read_file(path).err_into::<RoverError>();
    /// ```
    fn err_into<E2>(self) -> ErrInto<Self, E2>
    where
        Self::Error: Into<E2>,
        E2: Send,
    {
        ErrInto {
            inner: self,
            _phantom: PhantomData,
        }
    }

    /// Chain a dependent app.
    ///
    /// If this app succeeds, apply the function to produce the next app.
    /// If this app fails, the error is propagated and `f` is never called.
    ///
    /// The chained app must have the same error and environment types.
    fn chain<N, F>(self, f: F) -> Chain<Self, F>
    where
        N: App<Error = Self::Error, Env = Self::Env>,
        F: Fn(Self::Output) -> N + Send + Sync,
    {
        Chain { inner: self, f }
    }

    /// Run a follow-up app for its effect, keeping this app's value.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let app = get_rover_state()
    ///     .tap(|state| log_line(format!("rover at {}", state)));
    /// ```
    fn tap<N, F>(self, f: F) -> Tap<Self, F>
    where
        N: App<Error = Self::Error, Env = Self::Env>,
        F: Fn(&Self::Output) -> N + Send + Sync,
    {
        Tap { inner: self, f }
    }

    /// Run a dependent app and keep both values as a pair.
    fn bind<N, F>(self, f: F) -> Bind<Self, F>
    where
        N: App<Error = Self::Error, Env = Self::Env>,
        F: Fn(&Self::Output) -> N + Send + Sync,
    {
        Bind { inner: self, f }
    }

    /// Recover from a failure with a replacement app.
    ///
    /// The handler's error type becomes the error type of the result.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let app = fail::<i32, _, ()>("x")
    ///     .catch_all(|_| succeed::<_, Infallible, ()>(42));
    /// assert_eq!(app.unsafe_run().await, Ok(42));
    /// ```
    fn catch_all<N, F>(self, f: F) -> CatchAll<Self, F>
    where
        N: App<Output = Self::Output, Env = Self::Env>,
        F: Fn(Self::Error) -> N + Send + Sync,
    {
        CatchAll { inner: self, f }
    }

    /// Run this app and then `other`, returning both results as a pair.
    ///
    /// Both apps run sequentially; use [`tuple_par`](crate::app::tuple_par)
    /// for concurrent execution.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let app = get_planet().zip(get_rover_state());
    /// let (planet, state) = app.execute(&env).await?;
    /// ```
    fn zip<A2>(self, other: A2) -> ZipWith<Self, A2, Pair<Self::Output, A2::Output>>
    where
        A2: App<Error = Self::Error, Env = Self::Env>,
    {
        ZipWith::new(self, other, |a, b| (a, b))
    }

    /// Run this app and then `other`, combining both results with `f`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let app = succeed::<_, String, ()>(2).zip_with(succeed(3), |a, b| a * b);
    /// assert_eq!(app.unsafe_run().await, Ok(6));
    /// ```
    fn zip_with<A2, C, F>(self, other: A2, f: F) -> ZipWith<Self, A2, F>
    where
        A2: App<Error = Self::Error, Env = Self::Env>,
        F: Fn(Self::Output, A2::Output) -> C + Send + Sync,
        C: Send,
    {
        ZipWith::new(self, other, f)
    }

    /// Supply the outermost environment fragment.
    ///
    /// An app needing `(Rest, Frag)` becomes an app needing `Rest`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let app = rover_main(paths, commands)   // Env = ((), Fs)
    ///     .provide(Fs::live());               // Env = ()
    /// let final_state = app.unsafe_run().await?;
    /// ```
    fn provide<Rest, Frag>(self, fragment: Frag) -> Provide<Self, Frag>
    where
        Self: App<Env = (Rest, Frag)>,
        Rest: Clone + Send + Sync,
        Frag: Clone + Send + Sync,
    {
        Provide {
            inner: self,
            fragment,
        }
    }

    /// Supply the outermost environment fragment by running `provider`.
    ///
    /// The provider runs against the remaining environment on every run; its
    /// failure fails the whole app.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let app = program()                     // Env = ((), CounterState)
    ///     .provide_m(live_counter_state());   // Env = ()
    /// ```
    fn provide_m<Prov, Rest, Frag, E>(self, provider: Prov) -> ProvideM<Self, Prov>
    where
        Prov: App<Output = Frag, Error = E, Env = Rest>,
        Frag: Clone + Sync,
        Self: App<Env = (Rest, Frag), Error = E>,
    {
        ProvideM {
            inner: self,
            provider,
        }
    }

    /// Run this app against an environment derived from an outer one.
    fn local<R2, F>(self, f: F) -> Local<Self, F, R2>
    where
        F: Fn(&R2) -> Self::Env + Send + Sync,
        R2: Clone + Send + Sync,
    {
        Local {
            inner: self,
            f,
            _phantom: PhantomData,
        }
    }

    /// Wrap every run of this app in a tracing span.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let app = move_rover(commands)
    ///     .instrument(tracing::debug_span!("move_rover", count = commands.len()));
    /// ```
    fn instrument(self, span: tracing::Span) -> Instrument<Self> {
        Instrument { inner: self, span }
    }

    /// Erase the concrete type of this app.
    ///
    /// Needed for recursion, for storing different plans in one collection,
    /// and for returning different plans from match arms.
    fn boxed(self) -> BoxedApp<Self::Output, Self::Error, Self::Env>
    where
        Self: 'static,
        Self::Output: 'static,
        Self::Error: 'static,
        Self::Env: 'static,
    {
        BoxedApp::new(self)
    }

    /// Run this app against an explicit environment.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let result = succeed::<_, String, ()>(42).execute(&()).await;
    /// assert_eq!(result, Ok(42));
    /// ```
    fn execute(
        &self,
        env: &Self::Env,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send {
        self.run(env)
    }
}

impl<T: App> AppExt for T {}

/// Run an app whose environment has been fully supplied.
///
/// Implemented for every app with `Env = ()`. Running consumes the plan;
/// keep a clone (or use [`AppExt::execute`]) to run it again.
pub trait UnsafeRun: App<Env = ()> {
    /// Run the app and await its outcome.
    ///
    /// The outcome is the `Result` itself: a typed failure is returned as
    /// `Err`, never raised. Panics from unchecked code propagate.
    fn unsafe_run(self) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send {
        async move { self.run(&()).await }
    }
}

impl<T: App<Env = ()>> UnsafeRun for T {}

/// Free-function form of [`UnsafeRun::unsafe_run`].
pub fn unsafe_run<T>(app: T) -> impl Future<Output = Result<T::Output, T::Error>> + Send
where
    T: App<Env = ()>,
{
    app.unsafe_run()
}
