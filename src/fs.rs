//! File-system and console capability.
//!
//! Programs never touch the disk or stdin directly; they ask the
//! environment for an [`Fs`] and go through [`read_file`] and
//! [`read_line_from_console`]. The composition root provides
//! [`Fs::live`]; tests provide [`MemoryFs`](crate::testing::MemoryFs).

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;
use tracing::debug;

use crate::app::{access_m, try_async, App, BoxFuture, Has};
use crate::error::{ReadConsoleError, ReadFileError};

/// Backend for [`Fs`].
pub trait FileSystem: Send + Sync {
    /// Read a whole file as UTF-8.
    fn read_file(&self, path: &Path) -> BoxFuture<'static, io::Result<String>>;

    /// Prompt for and read one line from the console, without its line ending.
    fn read_line(&self) -> BoxFuture<'static, io::Result<String>>;
}

type Console = Box<dyn AsyncBufRead + Send + Unpin>;

/// The real file system and terminal, via tokio.
///
/// Console lines come from one buffered reader shared by every clone, so
/// input typed ahead of a prompt is kept for the next read.
#[derive(Clone)]
pub struct LiveFs {
    console: Arc<Mutex<Console>>,
}

impl LiveFs {
    /// Read files from disk and console lines from stdin.
    pub fn new() -> Self {
        Self::with_console(BufReader::new(tokio::io::stdin()))
    }

    /// Read files from disk and console lines from `console`.
    pub fn with_console(console: impl AsyncBufRead + Send + Unpin + 'static) -> Self {
        LiveFs {
            console: Arc::new(Mutex::new(Box::new(console))),
        }
    }
}

impl Default for LiveFs {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LiveFs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveFs").finish_non_exhaustive()
    }
}

impl FileSystem for LiveFs {
    fn read_file(&self, path: &Path) -> BoxFuture<'static, io::Result<String>> {
        let path = path.to_path_buf();
        Box::pin(async move {
            debug!(path = %path.display(), "reading file");
            tokio::fs::read_to_string(&path).await
        })
    }

    fn read_line(&self) -> BoxFuture<'static, io::Result<String>> {
        let console = Arc::clone(&self.console);
        Box::pin(async move {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(b"> ").await?;
            stdout.flush().await?;

            let mut line = String::new();
            let read = console.lock().await.read_line(&mut line).await?;
            if read == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "console closed before a line was entered",
                ));
            }
            Ok(line.trim_end_matches(['\r', '\n']).to_string())
        })
    }
}

/// File-system capability held in the environment.
#[derive(Clone)]
pub struct Fs {
    backend: Arc<dyn FileSystem>,
}

impl std::fmt::Debug for Fs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fs")
            .field("backend", &"<file system>")
            .finish()
    }
}

impl Fs {
    /// Wrap a backend.
    pub fn new(backend: impl FileSystem + 'static) -> Self {
        Fs {
            backend: Arc::new(backend),
        }
    }

    /// The real file system and terminal.
    pub fn live() -> Self {
        Fs::new(LiveFs::new())
    }

    /// Read a whole file.
    pub fn read_file<E, R>(&self, path: PathBuf) -> impl App<Output = String, Error = E, Env = R>
    where
        E: From<ReadFileError> + Send,
        R: Clone + Send + Sync,
    {
        let backend = Arc::clone(&self.backend);
        let failed_path = path.clone();
        try_async(
            move || backend.read_file(&path),
            move |e| E::from(ReadFileError::new(failed_path.clone(), e)),
        )
    }

    /// Prompt for and read one line from the console.
    pub fn read_line<E, R>(&self) -> impl App<Output = String, Error = E, Env = R>
    where
        E: From<ReadConsoleError> + Send,
        R: Clone + Send + Sync,
    {
        let backend = Arc::clone(&self.backend);
        try_async(move || backend.read_line(), |e| E::from(ReadConsoleError::new(e)))
    }
}

/// Read a whole file through the [`Fs`] in the environment.
pub fn read_file<R, I, E>(path: PathBuf) -> impl App<Output = String, Error = E, Env = R>
where
    R: Has<Fs, I> + Clone + Send + Sync,
    E: From<ReadFileError> + Send,
{
    access_m(move |fs: &Fs| fs.read_file(path.clone()))
}

/// Read one console line through the [`Fs`] in the environment.
pub fn read_line_from_console<R, I, E>() -> impl App<Output = String, Error = E, Env = R>
where
    R: Has<Fs, I> + Clone + Send + Sync,
    E: From<ReadConsoleError> + Send,
{
    access_m(|fs: &Fs| fs.read_line())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::prelude::*;
    use crate::error::RoverError;
    use crate::testing::MemoryFs;
    use std::io::Write;

    #[tokio::test]
    async fn test_live_fs_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "5x4").unwrap();

        let app = read_file::<_, _, ReadFileError>(file.path().to_path_buf()).provide(Fs::live());
        assert_eq!(app.unsafe_run().await.unwrap(), "5x4\n");
    }

    #[tokio::test]
    async fn test_live_fs_missing_file_is_typed_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let app = read_file::<_, _, RoverError>(path.clone()).provide(Fs::live());
        match app.unsafe_run().await {
            Err(RoverError::ReadFile(error)) => {
                assert_eq!(error.path, path);
                assert_eq!(error.source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected ReadFile error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_live_fs_keeps_buffered_console_input() {
        let fs = Fs::new(LiveFs::with_console(&b"FF\r\nL\n"[..]));

        let two_lines = read_line_from_console::<_, _, ReadConsoleError>()
            .zip(read_line_from_console())
            .provide(fs.clone());
        let (first, second) = two_lines.unsafe_run().await.unwrap();
        assert_eq!(first, "FF");
        assert_eq!(second, "L");

        let drained = read_line_from_console::<_, _, ReadConsoleError>().provide(fs);
        let error = drained.unsafe_run().await.unwrap_err();
        assert_eq!(error.source.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[tokio::test]
    async fn test_memory_fs_serves_files_and_lines() {
        let fs = MemoryFs::new()
            .with_file("config/planet.txt", "5x4")
            .with_console_lines(["F", "L"]);

        let app = read_file::<_, _, RoverError>("config/planet.txt".into())
            .zip(read_line_from_console())
            .zip(read_line_from_console())
            .provide(Fs::new(fs));

        let ((planet, first), second) = app.unsafe_run().await.unwrap();
        assert_eq!(planet, "5x4");
        assert_eq!(first, "F");
        assert_eq!(second, "L");
    }

    #[tokio::test]
    async fn test_exhausted_console_is_typed_failure() {
        let app = read_line_from_console::<_, _, ReadConsoleError>().provide(Fs::new(MemoryFs::new()));
        let error = app.unsafe_run().await.unwrap_err();
        assert_eq!(error.source.kind(), io::ErrorKind::UnexpectedEof);
    }
}
