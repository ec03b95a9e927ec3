// SEA tools - util/rotating_file.rs
//
// Size-rotated log file sink.
//
// Layout on disk: the active file `<name>` plus numbered backups
// `<name>.1` (newest) through `<name>.N` (oldest). Footprint is bounded by
// (N + 1) * max_bytes. Rotation happens synchronously inside the write that
// would overflow the active file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing_subscriber::fmt::MakeWriter;

/// An append-only file that rolls over to numbered backups once it would
/// grow past `max_bytes`.
#[derive(Debug)]
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backup_count: usize,
    /// `None` only between closing the full file and opening its successor.
    file: Option<File>,
    size: u64,
}

impl RotatingFile {
    /// Open (or create) the active file in append mode.
    ///
    /// The current size is taken from the existing file so that a restarted
    /// process keeps rotating at the same boundary.
    pub fn open(
        path: impl Into<PathBuf>,
        max_bytes: u64,
        backup_count: usize,
    ) -> io::Result<Self> {
        let path = path.into();
        let file = open_append(&path)?;
        let size = file.metadata()?.len();
        Ok(Self {
            path,
            max_bytes,
            backup_count,
            file: Some(file),
            size,
        })
    }

    /// Path of the active file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bytes currently held by the active file.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Path of backup number `index` (1 is the most recent).
    pub fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    /// A record is never split across files, and an empty file always takes
    /// the record even when it alone is larger than `max_bytes`.
    fn should_rotate(&self, pending: usize) -> bool {
        self.max_bytes > 0 && self.size > 0 && self.size + pending as u64 > self.max_bytes
    }

    /// Retire the active file and start a fresh, empty one.
    ///
    /// With `backup_count == 0` the active file is simply truncated.
    pub fn rotate(&mut self) -> io::Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush()?;
        }

        if self.backup_count == 0 {
            self.file = Some(open_truncate(&self.path)?);
            self.size = 0;
            return Ok(());
        }

        // Shift `.N-1` -> `.N` down to `.1` -> `.2`; the old `.N` is dropped.
        for index in (1..self.backup_count).rev() {
            let src = self.backup_path(index);
            if src.exists() {
                let dst = self.backup_path(index + 1);
                remove_if_exists(&dst)?;
                fs::rename(&src, &dst)?;
            }
        }

        let newest = self.backup_path(1);
        remove_if_exists(&newest)?;
        if self.path.exists() {
            fs::rename(&self.path, &newest)?;
        }

        self.file = Some(open_append(&self.path)?);
        self.size = 0;
        Ok(())
    }

    fn active(&mut self) -> io::Result<&mut File> {
        // A failed rotation leaves no handle; reopen rather than drop records.
        if self.file.is_none() {
            let file = open_append(&self.path)?;
            self.size = file.metadata()?.len();
            self.file = Some(file);
        }
        match self.file.as_mut() {
            Some(file) => Ok(file),
            None => Err(io::Error::other("log file not open")),
        }
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.should_rotate(buf.len()) {
            self.rotate()?;
        }
        self.active()?.write_all(buf)?;
        self.size += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn open_truncate(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

// =============================================================================
// tracing-subscriber integration
// =============================================================================

/// Shareable handle that hands the rotating file to a `fmt` layer.
///
/// Every record is written while holding the lock, so the size check and the
/// rotation it may trigger are atomic with respect to other threads.
#[derive(Debug, Clone)]
pub struct RotatingFileWriter {
    inner: Arc<Mutex<RotatingFile>>,
}

impl RotatingFileWriter {
    pub fn new(file: RotatingFile) -> Self {
        Self {
            inner: Arc::new(Mutex::new(file)),
        }
    }

    /// Lock the underlying file. A poisoned lock is recovered: the file
    /// itself is still usable after a panic in another writer.
    pub fn lock(&self) -> MutexGuard<'_, RotatingFile> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Write guard handed out per record.
pub struct RotatingFileGuard<'a>(MutexGuard<'a, RotatingFile>);

impl Write for RotatingFileGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // The fmt layer discards writer errors, so report them here.
        self.0.write(buf).map_err(|e| {
            eprintln!(
                "Failed to write log record to '{}': {e}",
                self.0.path().display()
            );
            e
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

impl<'a> MakeWriter<'a> for RotatingFileWriter {
    type Writer = RotatingFileGuard<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        RotatingFileGuard(self.lock())
    }
}
