//! Line-oriented trace file writer with size-based rotation.
//!
//! When the trace file grows past its size limit it is shifted into numbered
//! backups (`orderdeck-otlp.json.1` is the newest) and a fresh file is started.
//! At most [`MAX_BACKUP_FILES`] backups are kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default size limit before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// The file is opened lazily on the first write, so construction never fails.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    state: Mutex<WriterState>,
}

#[derive(Default)]
struct WriterState {
    file: Option<File>,
    /// Bytes in the current file, known once it has been opened.
    written: u64,
}

impl FileWriter {
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limit(file_path, MAX_FILE_SIZE_BYTES)
    }

    /// Creates a writer that rotates once the file exceeds `max_bytes`.
    pub const fn with_limit(file_path: PathBuf, max_bytes: u64) -> Self {
        Self {
            file_path,
            max_bytes,
            state: Mutex::new(WriterState {
                file: None,
                written: 0,
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Appends `line` and a newline, rotating first if the file is over its limit.
    ///
    /// # Errors
    ///
    /// Returns an error if rotation, opening, or writing fails, or if the lock
    /// was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace writer lock poisoned: {e}")))?;

        if state.file.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            state.written = file.metadata()?.len();
            state.file = Some(file);
        }

        if state.written > self.max_bytes {
            state.file = None;
            rotate(&self.file_path)?;
            state.file = Some(File::create(&self.file_path)?);
            state.written = 0;
        }

        let Some(file) = state.file.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file unavailable"));
        };

        writeln!(file, "{line}")?;
        file.flush()?;
        state.written += line.len() as u64 + 1;

        Ok(())
    }
}

/// Path of the `n`th backup of `path` (`<path>.<n>`).
fn backup_path(path: &Path, n: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{n}"));
    PathBuf::from(name)
}

/// Shifts `<path>.1..` up by one, dropping the oldest, and moves `path` to `<path>.1`.
fn rotate(path: &Path) -> io::Result<()> {
    let oldest = backup_path(path, MAX_BACKUP_FILES);
    if oldest.exists() {
        fs::remove_file(&oldest)?;
    }

    for n in (1..MAX_BACKUP_FILES).rev() {
        let from = backup_path(path, n);
        if from.exists() {
            fs::rename(&from, backup_path(path, n + 1))?;
        }
    }

    if path.exists() {
        fs::rename(path, backup_path(path, 1))?;
    }
    Ok(())
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}
