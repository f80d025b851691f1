//! Environment combinators - supplying and reshaping the environment.
//!
//! - `Provide` - supply one fragment statically
//! - `ProvideM` - build a fragment by running another app first
//! - `Local` - run against an environment derived from the outer one
//!
//! `Provide` and `ProvideM` peel the outermost layer off the environment an
//! app needs: an app needing `(Rest, Fragment)` becomes an app needing only
//! `Rest`. Once every layer is supplied the app needs `()` and can be run
//! with [`unsafe_run`](crate::app::UnsafeRun::unsafe_run).

use std::marker::PhantomData;

use crate::app::trait_def::App;

/// An app with one environment fragment supplied.
///
/// On each run the fragment is cloned and layered on top of whatever
/// environment the caller provides.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// let app = access::<_, _, String, _, _, _>(|n: &i32| n + 1).provide(41);
/// assert_eq!(app.unsafe_run().await, Ok(42));
/// ```
pub struct Provide<Inner, Frag> {
    pub(crate) inner: Inner,
    pub(crate) fragment: Frag,
}

impl<Inner, Frag> std::fmt::Debug for Provide<Inner, Frag> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provide")
            .field("inner", &"<app>")
            .field("fragment", &"<environment>")
            .finish()
    }
}

impl<Inner, Frag, Rest> App for Provide<Inner, Frag>
where
    Inner: App<Env = (Rest, Frag)>,
    Frag: Clone + Send + Sync,
    Rest: Clone + Send + Sync,
{
    type Output = Inner::Output;
    type Error = Inner::Error;
    type Env = Rest;

    async fn run(&self, env: &Rest) -> Result<Self::Output, Self::Error> {
        let layered = (env.clone(), self.fragment.clone());
        self.inner.run(&layered).await
    }
}

/// An app whose outermost environment fragment is produced by another app.
///
/// The provider runs first, against the remaining environment; if it fails,
/// its error is returned and the inner app never runs. Otherwise the
/// produced fragment is layered on top and the inner app runs against it.
/// The provider runs again on every run, so stateful fragments (such as a
/// fresh state cell) are never shared between runs.
pub struct ProvideM<Inner, Prov> {
    pub(crate) inner: Inner,
    pub(crate) provider: Prov,
}

impl<Inner, Prov> std::fmt::Debug for ProvideM<Inner, Prov> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvideM")
            .field("inner", &"<app>")
            .field("provider", &"<app>")
            .finish()
    }
}

impl<Inner, Prov> App for ProvideM<Inner, Prov>
where
    Prov: App,
    Prov::Output: Clone + Sync,
    Inner: App<Env = (Prov::Env, Prov::Output), Error = Prov::Error>,
{
    type Output = Inner::Output;
    type Error = Inner::Error;
    type Env = Prov::Env;

    async fn run(&self, env: &Prov::Env) -> Result<Self::Output, Self::Error> {
        let fragment = self.provider.run(env).await?;
        let layered = (env.clone(), fragment);
        self.inner.run(&layered).await
    }
}

/// Run an app with a modified environment.
///
/// The transformation function converts from the outer environment to the
/// environment required by the inner app.
///
/// # Example
///
/// ```rust,ignore
/// use rover_app::app::prelude::*;
///
/// #[derive(Clone)]
/// struct Outer { multiplier: i32 }
///
/// let inner = access::<_, _, String, _, _, _>(|n: &i32| *n);
/// let app = inner.local(|outer: &Outer| 21 * outer.multiplier);
///
/// assert_eq!(app.execute(&Outer { multiplier: 2 }).await, Ok(42));
/// ```
pub struct Local<Inner, F, R2> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
    pub(crate) _phantom: PhantomData<fn() -> R2>,
}

impl<Inner, F, R2> std::fmt::Debug for Local<Inner, F, R2> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Local")
            .field("inner", &"<app>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, R2> App for Local<Inner, F, R2>
where
    Inner: App,
    F: Fn(&R2) -> Inner::Env + Send + Sync,
    R2: Clone + Send + Sync,
{
    type Output = Inner::Output;
    type Error = Inner::Error;
    type Env = R2;

    async fn run(&self, env: &R2) -> Result<Self::Output, Self::Error> {
        let inner_env = (self.f)(env);
        self.inner.run(&inner_env).await
    }
}
