//! Tracing support for apps.
//!
//! Provides the `Instrument` combinator used by
//! [`AppExt::instrument`](crate::app::AppExt::instrument).

use crate::app::trait_def::App;

/// An app whose every run is wrapped in a tracing span.
///
/// The span is entered each time the run future is polled and exited when it
/// yields, following the standard `tracing::Instrument` pattern.
#[derive(Debug)]
pub struct Instrument<A> {
    pub(crate) inner: A,
    pub(crate) span: tracing::Span,
}

impl<A> App for Instrument<A>
where
    A: App,
{
    type Output = A::Output;
    type Error = A::Error;
    type Env = A::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        use tracing::Instrument as _;
        self.inner.run(env).instrument(self.span.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use crate::app::prelude::*;

    #[tokio::test]
    async fn test_instrument_returns_value() {
        let app = succeed::<_, String, ()>(42).instrument(tracing::info_span!("test_span"));
        assert_eq!(app.unsafe_run().await, Ok(42));
    }

    #[tokio::test]
    async fn test_error_in_span_propagates() {
        let app = fail::<i32, _, ()>("oops".to_string()).instrument(tracing::info_span!("failing"));
        assert_eq!(app.unsafe_run().await, Err("oops".to_string()));
    }

    #[tokio::test]
    async fn test_composition_with_instrument() {
        let app = succeed::<_, String, ()>(5)
            .instrument(tracing::debug_span!("step1"))
            .map(|x| x * 2)
            .instrument(tracing::debug_span!("step2"))
            .chain(|x| succeed(x + 10).instrument(tracing::debug_span!("step3")));

        assert_eq!(app.unsafe_run().await, Ok(20));
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn test_events_inside_span_are_recorded() {
        let app = sync::<_, String, (), _>(|| tracing::info!("inside the plan"))
            .instrument(tracing::info_span!("plan_span"));

        assert_eq!(app.unsafe_run().await, Ok(()));
        assert!(logs_contain("inside the plan"));
        assert!(logs_contain("plan_span"));
    }
}
