//! Capability lookup in layered environments.
//!
//! Environments are built by layering fragments on top of the empty
//! environment `()`:
//!
//! ```text
//! ()                              // nothing provided
//! ((), Fs)                        // Fs provided
//! (((), Fs), ProgramConfig)       // then ProgramConfig on top
//! ```
//!
//! An app that needs a capability does not name the whole environment; it
//! asks for `R: Has<T, I>`. The index `I` is inferred by the compiler and
//! records where in the layers `T` lives, so the lookup is resolved entirely
//! at compile time.
//!
//! Any type also "has" itself, so a plain struct can serve as an environment
//! without layering:
//!
//! ```rust
//! use rover_app::app::env::Has;
//!
//! #[derive(Clone)]
//! struct Config {
//!     retries: u32,
//! }
//!
//! fn retries<R: Has<Config, I>, I>(env: &R) -> u32 {
//!     Has::<Config, I>::get(env).retries
//! }
//!
//! let layered = ((), Config { retries: 3 });
//! assert_eq!(retries(&layered), 3);
//! assert_eq!(retries(&Config { retries: 5 }), 5);
//! ```
//!
//! # Duplicate Fragments
//!
//! The layer closest to the app (the one provided first in a pipeline) is
//! found first. If two layers hold the same type, inference cannot choose
//! and the index must be spelled out (`Here`, `There<Here>`, ...).

use std::marker::PhantomData;

/// Access to a capability of type `T` held somewhere in an environment.
pub trait Has<T, I> {
    /// Borrow the capability.
    fn get(&self) -> &T;
}

/// Index: the environment is the capability itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Itself;

/// Index: the capability is the outermost layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Here;

/// Index: the capability lives further down, at index `I` of the rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct There<I>(PhantomData<I>);

impl<T> Has<T, Itself> for T {
    fn get(&self) -> &T {
        self
    }
}

impl<Rest, T> Has<T, Here> for (Rest, T) {
    fn get(&self) -> &T {
        &self.1
    }
}

impl<Rest, Head, T, I> Has<T, There<I>> for (Rest, Head)
where
    Rest: Has<T, I>,
{
    fn get(&self) -> &T {
        Has::<T, I>::get(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Planet(u32);

    #[derive(Debug, Clone, PartialEq)]
    struct Name(&'static str);

    fn planet<R: Has<Planet, I>, I>(env: &R) -> &Planet {
        Has::<Planet, I>::get(env)
    }

    fn name<R: Has<Name, I>, I>(env: &R) -> &Name {
        Has::<Name, I>::get(env)
    }

    #[test]
    fn test_outermost_layer_is_found() {
        let env = ((), Planet(4));
        assert_eq!(planet(&env), &Planet(4));
    }

    #[test]
    fn test_deeper_layers_are_found() {
        let env = (((), Planet(4)), Name("curiosity"));
        assert_eq!(planet(&env), &Planet(4));
        assert_eq!(name(&env), &Name("curiosity"));
    }

    #[test]
    fn test_plain_value_has_itself() {
        assert_eq!(name(&Name("spirit")), &Name("spirit"));
    }

    #[test]
    fn test_explicit_index_picks_between_duplicates() {
        let env = (((), Planet(1)), Planet(2));
        assert_eq!(Has::<Planet, Here>::get(&env), &Planet(2));
        assert_eq!(Has::<Planet, There<Here>>::get(&env), &Planet(1));
    }
}
