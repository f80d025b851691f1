//! Testing utilities for apps and the rover program.
//!
//! - [`MockEnv`] builds layered environments by hand
//! - [`MemoryFs`] is an in-memory [`FileSystem`] with scripted console input
//! - [`assert_succeeds!`](crate::assert_succeeds) and
//!   [`assert_fails!`](crate::assert_fails) check the outcome of a run
//!
//! # Examples
//!
//! ```rust
//! use rover_app::app::prelude::*;
//! use rover_app::testing::MockEnv;
//!
//! #[derive(Clone)]
//! struct Config {
//!     retries: u32,
//! }
//!
//! let env = MockEnv::new().with(|| Config { retries: 3 }).build();
//!
//! let app = access::<_, _, String, _, _, _>(|config: &Config| config.retries * 2);
//! let result = tokio_test::block_on(app.execute(&env));
//! assert_eq!(result, Ok(6));
//! ```

use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::app::BoxFuture;
use crate::fs::FileSystem;

/// Builder for creating test environments.
///
/// Each call to `with()` layers a new capability on top, producing the same
/// right-nested shape that [`provide`](crate::app::AppExt::provide) builds.
///
/// # Example
///
/// ```rust
/// use rover_app::testing::MockEnv;
///
/// struct Config {
///     debug: bool,
/// }
///
/// struct Database {
///     url: String,
/// }
///
/// let env = MockEnv::new()
///     .with(|| Config { debug: true })
///     .with(|| Database { url: "test://localhost".to_string() })
///     .build();
///
/// // env is now (((), Config), Database)
/// let ((_, config), db) = env;
/// assert_eq!(config.debug, true);
/// assert_eq!(db.url, "test://localhost");
/// ```
#[derive(Debug)]
pub struct MockEnv<Env> {
    env: Env,
}

impl MockEnv<()> {
    /// Create a new empty mock environment.
    pub fn new() -> Self {
        Self { env: () }
    }
}

impl Default for MockEnv<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Env> MockEnv<Env> {
    /// Layer a new capability on top of the environment.
    ///
    /// The capability is created by calling the provided function.
    pub fn with<F, T>(self, f: F) -> MockEnv<(Env, T)>
    where
        F: FnOnce() -> T,
    {
        MockEnv {
            env: (self.env, f()),
        }
    }

    /// Build the final environment.
    pub fn build(self) -> Env {
        self.env
    }
}

/// An in-memory file system.
///
/// Files are looked up by exact path. Console reads pop scripted lines in
/// order; once they run out, reads fail with `UnexpectedEof`. Clones share
/// the console script.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: HashMap<PathBuf, String>,
    console: Arc<Mutex<VecDeque<String>>>,
}

impl MemoryFs {
    /// Create an empty file system with no console input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file.
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    /// Queue console lines, read back in order.
    pub fn with_console_lines<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.console
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(lines.into_iter().map(Into::into));
        self
    }
}

impl FileSystem for MemoryFs {
    fn read_file(&self, path: &Path) -> BoxFuture<'static, io::Result<String>> {
        let outcome = self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        });
        Box::pin(async move { outcome })
    }

    fn read_line(&self) -> BoxFuture<'static, io::Result<String>> {
        let next = self
            .console
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        let outcome = next.ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no more console input")
        });
        Box::pin(async move { outcome })
    }
}

/// Assert that a run succeeded, yielding the success value.
///
/// # Example
///
/// ```rust
/// use rover_app::assert_succeeds;
///
/// let outcome: Result<i32, String> = Ok(42);
/// assert_eq!(assert_succeeds!(outcome), 42);
/// ```
#[macro_export]
macro_rules! assert_succeeds {
    ($outcome:expr) => {
        match $outcome {
            Ok(value) => value,
            Err(e) => panic!("Expected success, got failure: {:?}", e),
        }
    };
}

/// Assert that a run failed, yielding the error.
///
/// # Example
///
/// ```rust
/// use rover_app::assert_fails;
///
/// let outcome: Result<i32, String> = Err("boom".to_string());
/// assert_eq!(assert_fails!(outcome), "boom");
/// ```
#[macro_export]
macro_rules! assert_fails {
    ($outcome:expr) => {
        match $outcome {
            Ok(value) => panic!("Expected failure, got success: {:?}", value),
            Err(e) => e,
        }
    };
}
