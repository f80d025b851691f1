//! A counter service built on [`StateRef`].
//!
//! The smallest program that exercises the whole environment story: the
//! service lives in the environment, accessors find it with `access_m`, and
//! `provide_m` builds a fresh one for every run.

use crate::app::{access_m, App, AppExt, Has};
use crate::state_ref::{make_state_ref, StateRef};

/// Counter service.
#[derive(Debug, Clone)]
pub struct CounterState {
    cell: StateRef<i64>,
}

impl CounterState {
    /// Add one, yielding the new count.
    pub fn increment<E, R>(&self) -> impl App<Output = i64, Error = E, Env = R>
    where
        E: Send,
        R: Clone + Send + Sync,
    {
        self.cell.update(|n| n + 1)
    }

    /// Subtract one, yielding the new count.
    pub fn decrement<E, R>(&self) -> impl App<Output = i64, Error = E, Env = R>
    where
        E: Send,
        R: Clone + Send + Sync,
    {
        self.cell.update(|n| n - 1)
    }

    /// Read the count.
    pub fn count<E, R>(&self) -> impl App<Output = i64, Error = E, Env = R>
    where
        E: Send,
        R: Clone + Send + Sync,
    {
        self.cell.get()
    }
}

/// Build a counter service starting at zero.
pub fn live_counter_state<E, R>() -> impl App<Output = CounterState, Error = E, Env = R>
where
    E: Send,
    R: Clone + Send + Sync,
{
    make_state_ref(0).map(|cell| CounterState { cell })
}

/// Increment the counter found in the environment.
pub fn increment<R, I, E>() -> impl App<Output = i64, Error = E, Env = R>
where
    R: Has<CounterState, I> + Clone + Send + Sync,
    E: Send,
{
    access_m(|counter: &CounterState| counter.increment())
}

/// Decrement the counter found in the environment.
pub fn decrement<R, I, E>() -> impl App<Output = i64, Error = E, Env = R>
where
    R: Has<CounterState, I> + Clone + Send + Sync,
    E: Send,
{
    access_m(|counter: &CounterState| counter.decrement())
}

/// Read the counter found in the environment.
pub fn count<R, I, E>() -> impl App<Output = i64, Error = E, Env = R>
where
    R: Has<CounterState, I> + Clone + Send + Sync,
    E: Send,
{
    access_m(|counter: &CounterState| counter.count())
}

/// Four increments and a decrement, then read the count.
pub fn program<R, I, E>() -> impl App<Output = i64, Error = E, Env = R>
where
    R: Has<CounterState, I> + Clone + Send + Sync,
    E: Send,
{
    increment()
        .chain(|_| increment())
        .chain(|_| increment())
        .chain(|_| increment())
        .chain(|_| decrement())
        .chain(|_| count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::prelude::*;

    #[tokio::test]
    async fn test_program_counts_to_three() {
        let app = program().provide_m(live_counter_state());
        let result: Result<i64, Infallible> = app.unsafe_run().await;
        assert_eq!(result, Ok(3));
    }

    #[tokio::test]
    async fn test_each_run_gets_a_fresh_counter() {
        let app = program().provide_m(live_counter_state::<Infallible, ()>());
        assert_eq!(app.execute(&()).await, Ok(3));
        assert_eq!(app.execute(&()).await, Ok(3));
    }

    #[tokio::test]
    async fn test_provided_counter_is_shared_within_a_run() {
        let app = increment()
            .chain(|_| increment())
            .provide_m(live_counter_state::<Infallible, ()>());
        assert_eq!(app.unsafe_run().await, Ok(2));
    }

    #[tokio::test]
    async fn test_decrement_goes_negative() {
        let app = decrement()
            .chain(|_| decrement())
            .provide_m(live_counter_state::<Infallible, ()>());
        assert_eq!(app.unsafe_run().await, Ok(-2));
    }
}
