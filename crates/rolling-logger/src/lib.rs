//! Rolling Logger
//!
//! Size-rotated log files plus an in-memory ring of the most recent lines.
//! Installs a `tracing` fmt subscriber; records emitted through the `log`
//! facade are bridged into it.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

/// Rotate once the active file grows past this many bytes
pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;
/// Number of rotated files kept next to the active one
pub const DEFAULT_MAX_FILES: usize = 3;
/// Lines retained in memory for `recent_lines`
pub const DEFAULT_BUFFER_LINES: usize = 200;

static LOGGER: OnceLock<Arc<Mutex<RollingFile>>> = OnceLock::new();

/// Logger errors
#[derive(Debug)]
pub enum LoggerError {
    Io(io::Error),
    AlreadyInitialized,
    NotInitialized,
    Subscriber(String),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::Io(e) => write!(f, "Log file error: {}", e),
            LoggerError::AlreadyInitialized => write!(f, "Logger already initialized"),
            LoggerError::NotInitialized => write!(f, "Logger not initialized"),
            LoggerError::Subscriber(msg) => write!(f, "Failed to install subscriber: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {}

impl From<io::Error> for LoggerError {
    fn from(e: io::Error) -> Self {
        LoggerError::Io(e)
    }
}

/// Active log file with rotation and a ring buffer of recent lines
pub struct RollingFile {
    dir: PathBuf,
    app_name: String,
    file: File,
    written: u64,
    max_bytes: u64,
    max_files: usize,
    recent: VecDeque<String>,
    buffer_lines: usize,
    partial: String,
}

impl RollingFile {
    pub fn open(dir: &Path, app_name: &str) -> io::Result<Self> {
        Self::with_limits(dir, app_name, DEFAULT_MAX_BYTES, DEFAULT_MAX_FILES, DEFAULT_BUFFER_LINES)
    }

    pub fn with_limits(
        dir: &Path,
        app_name: &str,
        max_bytes: u64,
        max_files: usize,
        buffer_lines: usize,
    ) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = active_path(dir, app_name);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            dir: dir.to_path_buf(),
            app_name: app_name.to_string(),
            file,
            written,
            max_bytes,
            max_files,
            recent: VecDeque::with_capacity(buffer_lines),
            buffer_lines,
            partial: String::new(),
        })
    }

    /// Path of the file currently being written
    pub fn path(&self) -> PathBuf {
        active_path(&self.dir, &self.app_name)
    }

    pub fn recent(&self) -> Vec<String> {
        self.recent.iter().cloned().collect()
    }

    /// Shift `app.N.log` to `app.N+1.log`, dropping the oldest, then start fresh
    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.max_files == 0 {
            fs::remove_file(self.path()).or_else(ignore_missing)?;
        } else {
            let oldest = rotated_path(&self.dir, &self.app_name, self.max_files);
            fs::remove_file(&oldest).or_else(ignore_missing)?;

            for n in (1..self.max_files).rev() {
                let from = rotated_path(&self.dir, &self.app_name, n);
                if from.exists() {
                    fs::rename(&from, rotated_path(&self.dir, &self.app_name, n + 1))?;
                }
            }
            fs::rename(self.path(), rotated_path(&self.dir, &self.app_name, 1))?;
        }

        self.file = OpenOptions::new().create(true).append(true).open(self.path())?;
        self.written = 0;
        Ok(())
    }

    fn remember(&mut self, buf: &[u8]) {
        self.partial.push_str(&String::from_utf8_lossy(buf));
        while let Some(idx) = self.partial.find('\n') {
            let line: String = self.partial.drain(..=idx).collect();
            if self.recent.len() == self.buffer_lines {
                self.recent.pop_front();
            }
            if self.buffer_lines > 0 {
                self.recent.push_back(line.trim_end().to_string());
            }
        }
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(buf)?;
        self.written += buf.len() as u64;
        self.remember(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn active_path(dir: &Path, app_name: &str) -> PathBuf {
    dir.join(format!("{}.log", app_name))
}

fn rotated_path(dir: &Path, app_name: &str, n: usize) -> PathBuf {
    dir.join(format!("{}.{}.log", app_name, n))
}

fn ignore_missing(e: io::Error) -> io::Result<()> {
    if e.kind() == io::ErrorKind::NotFound {
        Ok(())
    } else {
        Err(e)
    }
}

/// Writer handed to the fmt layer; every event locks the shared file
struct SharedWriter(Arc<Mutex<RollingFile>>);

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.flush()
    }
}

/// Install the global subscriber writing to `log_dir/<app_name>.log`
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), LoggerError> {
    if LOGGER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let mut rolling = RollingFile::open(&log_dir, app_name)?;
    writeln!(
        rolling,
        "=== {} started {} ===",
        app_name,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
    )?;

    let shared = Arc::new(Mutex::new(rolling));
    LOGGER
        .set(shared.clone())
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    tracing_subscriber::fmt()
        .with_writer(move || SharedWriter(shared.clone()))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))?;

    log::debug!("log records bridged into {}", log_dir.display());
    Ok(())
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    if LOGGER.get().is_none() {
        return Err(LoggerError::NotInitialized);
    }
    tracing::info!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    if LOGGER.get().is_none() {
        return Err(LoggerError::NotInitialized);
    }
    tracing::error!("{}", msg);
    Ok(())
}

/// Most recent log lines, oldest first. Empty before `init_logger`.
pub fn recent_lines() -> Vec<String> {
    LOGGER
        .get()
        .and_then(|shared| shared.lock().ok().map(|file| file.recent()))
        .unwrap_or_default()
}
