//! Traversal combinators - run a homogeneous list of apps.
//!
//! - `ForEach` - build one app per item and run them in order
//! - `Sequence` - run a list of apps in order, stopping at the first failure
//! - `SequencePar` - start every app at once, report the first failure in list order

use crate::app::trait_def::App;

/// Runs the app built for each item, one after another.
///
/// Yields the collected outputs in item order. The first failure stops the
/// traversal; apps for later items are never built.
#[derive(Debug)]
pub struct ForEach<T, F> {
    pub(crate) items: Vec<T>,
    pub(crate) f: F,
}

impl<T, F, N> App for ForEach<T, F>
where
    T: Clone + Send + Sync,
    F: Fn(T) -> N + Send + Sync,
    N: App,
{
    type Output = Vec<N::Output>;
    type Error = N::Error;
    type Env = N::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let mut outputs = Vec::with_capacity(self.items.len());
        for item in &self.items {
            outputs.push((self.f)(item.clone()).run(env).await?);
        }
        Ok(outputs)
    }
}

/// Runs a list of apps sequentially.
///
/// Each app starts only after the previous one succeeded. On the first
/// failure the remaining apps are never started.
#[derive(Debug)]
pub struct Sequence<A> {
    pub(crate) apps: Vec<A>,
}

impl<A: App> App for Sequence<A> {
    type Output = Vec<A::Output>;
    type Error = A::Error;
    type Env = A::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let mut outputs = Vec::with_capacity(self.apps.len());
        for app in &self.apps {
            outputs.push(app.run(env).await?);
        }
        Ok(outputs)
    }
}

/// Runs a list of apps concurrently.
///
/// Every app is started, and every app runs to completion, even when a
/// sibling fails. Once all have settled the outcomes are scanned in list
/// order: the first failure found is reported, regardless of which app
/// settled first.
#[derive(Debug)]
pub struct SequencePar<A> {
    pub(crate) apps: Vec<A>,
}

impl<A: App> App for SequencePar<A> {
    type Output = Vec<A::Output>;
    type Error = A::Error;
    type Env = A::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let outcomes = futures::future::join_all(self.apps.iter().map(|app| app.run(env))).await;
        outcomes.into_iter().collect()
    }
}
