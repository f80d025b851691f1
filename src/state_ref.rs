//! A shared mutable cell whose operations are apps.
//!
//! [`make_state_ref`] allocates a fresh cell on each run, so a program that
//! builds its state with [`provide_m`](crate::app::AppExt::provide_m) gets a
//! new cell every time it runs.
//!
//! ```rust,ignore
//! use rover_app::app::prelude::*;
//! use rover_app::state_ref::make_state_ref;
//!
//! let app = make_state_ref::<_, Infallible, ()>(1)
//!     .chain(|cell| cell.update(|n| n * 10).chain(move |_| cell.get()));
//! assert_eq!(app.unsafe_run().await, Ok(10));
//! ```
//!
//! Every operation completes without suspending, and the lock is never held
//! across an await point. Sequence operations with `chain` when their order
//! matters; running them under `tuple_par` interleaves them arbitrarily.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::trace;

use crate::app::{sync, App};

/// A shared mutable cell.
///
/// Clones share the same cell.
#[derive(Debug)]
pub struct StateRef<S> {
    cell: Arc<Mutex<S>>,
}

impl<S> Clone for StateRef<S> {
    fn clone(&self) -> Self {
        StateRef {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<S> StateRef<S>
where
    S: Clone + Send + Sync,
{
    fn new(initial: S) -> Self {
        StateRef {
            cell: Arc::new(Mutex::new(initial)),
        }
    }

    // A panic inside an update leaves the previous value in place, so a
    // poisoned lock still guards a consistent value.
    fn lock(&self) -> MutexGuard<'_, S> {
        self.cell.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read the current value.
    pub fn get<E, R>(&self) -> impl App<Output = S, Error = E, Env = R>
    where
        E: Send,
        R: Clone + Send + Sync,
    {
        let cell = self.clone();
        sync(move || cell.lock().clone())
    }

    /// Overwrite the value, yielding the new value.
    pub fn set<E, R>(&self, value: S) -> impl App<Output = S, Error = E, Env = R>
    where
        E: Send,
        R: Clone + Send + Sync,
    {
        let cell = self.clone();
        sync(move || {
            trace!("state cell set");
            let mut current = cell.lock();
            *current = value.clone();
            current.clone()
        })
    }

    /// Replace the value with `f(current)`, yielding the new value.
    pub fn update<E, R, F>(&self, f: F) -> impl App<Output = S, Error = E, Env = R>
    where
        F: Fn(&S) -> S + Send + Sync,
        E: Send,
        R: Clone + Send + Sync,
    {
        let cell = self.clone();
        sync(move || {
            trace!("state cell updated");
            let mut current = cell.lock();
            *current = f(&current);
            current.clone()
        })
    }

    /// Replace the value with the first half of `f(current)`, yielding the
    /// second half.
    pub fn modify<A, E, R, F>(&self, f: F) -> impl App<Output = A, Error = E, Env = R>
    where
        F: Fn(&S) -> (S, A) + Send + Sync,
        A: Send,
        E: Send,
        R: Clone + Send + Sync,
    {
        let cell = self.clone();
        sync(move || {
            trace!("state cell modified");
            let mut current = cell.lock();
            let (next, result) = f(&current);
            *current = next;
            result
        })
    }
}

/// Allocate a new cell holding `initial`.
///
/// Nothing is allocated until the app runs, and each run allocates a new,
/// independent cell.
pub fn make_state_ref<S, E, R>(initial: S) -> impl App<Output = StateRef<S>, Error = E, Env = R>
where
    S: Clone + Send + Sync,
    E: Send,
    R: Clone + Send + Sync,
{
    sync(move || StateRef::new(initial.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::prelude::*;

    fn cell(initial: i32) -> StateRef<i32> {
        StateRef::new(initial)
    }

    #[tokio::test]
    async fn test_get_returns_current_value() {
        let state = cell(5);
        assert_eq!(state.get::<Infallible, ()>().unsafe_run().await, Ok(5));
    }

    #[tokio::test]
    async fn test_set_returns_new_value() {
        let state = cell(5);
        assert_eq!(state.set::<Infallible, ()>(9).unsafe_run().await, Ok(9));
        assert_eq!(state.get::<Infallible, ()>().unsafe_run().await, Ok(9));
    }

    #[tokio::test]
    async fn test_update_returns_new_value() {
        let state = cell(5);
        let app = state.update::<Infallible, (), _>(|n| n * 2);
        assert_eq!(app.execute(&()).await, Ok(10));
        assert_eq!(app.execute(&()).await, Ok(20));
    }

    #[tokio::test]
    async fn test_modify_yields_auxiliary_result() {
        let state = cell(5);
        let app = state.modify::<_, Infallible, (), _>(|n| (n + 1, format!("was {n}")));
        assert_eq!(app.unsafe_run().await, Ok("was 5".to_string()));
        assert_eq!(state.get::<Infallible, ()>().unsafe_run().await, Ok(6));
    }

    #[tokio::test]
    async fn test_clones_share_the_cell() {
        let state = cell(0);
        let other = state.clone();
        other.set::<Infallible, ()>(3).unsafe_run().await.unwrap();
        assert_eq!(state.get::<Infallible, ()>().unsafe_run().await, Ok(3));
    }

    #[tokio::test]
    async fn test_make_state_ref_allocates_per_run() {
        let make = make_state_ref::<_, Infallible, ()>(0);

        let first = make.execute(&()).await.unwrap();
        first.set::<Infallible, ()>(42).unsafe_run().await.unwrap();

        let second = make.execute(&()).await.unwrap();
        assert_eq!(second.get::<Infallible, ()>().unsafe_run().await, Ok(0));
    }

    #[tokio::test]
    async fn test_operations_in_a_chain() {
        let app = make_state_ref::<_, Infallible, ()>(1)
            .chain(|state| {
                let read = state.clone();
                state.update(|n| n * 10).chain(move |_| read.get())
            });
        assert_eq!(app.unsafe_run().await, Ok(10));
    }
}
