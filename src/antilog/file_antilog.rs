use crate::{
    antilog::{Antilog, AntilogError, formatter},
    log::{LogEvent, LogLevel},
};

use std::{
    fs::{self, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    sync::mpsc::{self, TrySendError},
    thread,
};

use chrono::Local;

// -----------------------------------------------------------------------------
// COMPILE-TIME CONFIGURATION
// -----------------------------------------------------------------------------

/// Flush to disk every 100 lines if debugging (to see crashes near real-time).
#[cfg(feature = "log-debug")]
const FLUSH_BATCH_SIZE: u32 = 100;

/// Flush to disk every 1000 lines otherwise (to save I/O & CPU).
#[cfg(not(feature = "log-debug"))]
const FLUSH_BATCH_SIZE: u32 = 1_000;

/// Default capacity of the event queue between callers and the writer thread.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

// -----------------------------------------------------------------------------

/// Bounded, non-blocking antilog that writes to a per-process log file.
///
/// # Architecture
///
/// 1. **Producers**: dispatching threads call `perform_log`, which clones the
///    event into a bounded `mpsc` channel and returns immediately.
/// 2. **Consumer**: a dedicated `antilog-file-writer` thread formats each event,
///    writes it and flushes periodically.
/// 3. **Shutdown**: dropping the antilog closes the channel; the worker drains
///    what is queued, flushes and exits, and the drop joins it.
///
/// A full queue drops the event and reports [`AntilogError::QueueFull`].
pub struct FileAntilog {
    tx: Option<mpsc::SyncSender<LogEvent>>,
    thread: Option<thread::JoinHandle<()>>,
    file_path: PathBuf,
    min_level: LogLevel,
}

impl FileAntilog {
    /// Creates a `logs/` directory next to the executable and starts writing there.
    ///
    /// # Example Filename
    /// `target/debug/logs/myapp-20251102_023045-pid1234.log`
    #[must_use]
    pub fn start_default(app_name: Option<&str>, cap: usize) -> Self {
        let base = exe_dir_fallback_cwd().join("logs");
        Self::start_in_dir(base, app_name, cap)
    }

    /// Starts the writer in a specific directory.
    ///
    /// This function:
    /// 1. Creates the target directory if it is missing (`~` is expanded).
    /// 2. Generates a unique filename based on the timestamp and process ID (PID).
    /// 3. Spawns the background worker thread.
    ///
    /// # Arguments
    ///
    /// * `dir` - The directory where the log file will be created.
    /// * `app_name` - Optional prefix for the log filename.
    /// * `cap` - Capacity of the event queue (backpressure buffer, minimum 1).
    pub fn start_in_dir<D: AsRef<Path>>(dir: D, app_name: Option<&str>, cap: usize) -> Self {
        // Only UTF-8 paths can carry a `~`; anything else is used as given.
        let dir = dir.as_ref();
        let dir = dir.to_str().map_or_else(|| dir.to_path_buf(), expand_path);
        let _ = fs::create_dir_all(&dir);

        let ts = timestamp_for_filename();
        let pid = std::process::id();

        let fname = if let Some(name) = app_name {
            format!("{name}-{ts}-pid{pid}.log")
        } else {
            format!("{ts}-pid{pid}.log")
        };

        Self::start_at(dir.join(fname), cap)
    }

    /// Starts the writer on an exact file path (appending if it exists).
    pub fn start_at<P: Into<PathBuf>>(file_path: P, cap: usize) -> Self {
        let file_path = file_path.into();
        let (tx, rx) = mpsc::sync_channel::<LogEvent>(cap.max(1));
        let path_for_worker = file_path.clone();

        let thread = thread::Builder::new()
            .name("antilog-file-writer".into())
            .spawn(move || {
                let mut out = BufWriter::new(open_writer(&path_for_worker));
                let mut lines_written: u32 = 0;

                while let Ok(ev) = rx.recv() {
                    let _ = writeln!(&mut out, "{}", formatter::format_detailed(&ev, "app"));
                    lines_written = lines_written.wrapping_add(1);

                    // Flush periodically to ensure data persists on crash.
                    if lines_written.is_multiple_of(FLUSH_BATCH_SIZE) {
                        let _ = out.flush();
                    }
                }

                let _ = out.flush();
            })
            .ok();

        Self {
            tx: Some(tx),
            thread,
            file_path,
            min_level: LogLevel::Verbose,
        }
    }

    #[must_use]
    pub fn with_min_level(mut self, min_level: LogLevel) -> Self {
        self.min_level = min_level;
        self
    }

    /// Returns the path of the active log file.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl Antilog for FileAntilog {
    #[inline]
    fn is_enabled_for(&self, level: LogLevel, _tag: Option<&str>) -> bool {
        level >= self.min_level
    }

    /// Never blocks: a full queue drops the event.
    fn perform_log(&self, event: &LogEvent) -> Result<(), AntilogError> {
        let tx = self.tx.as_ref().ok_or(AntilogError::Closed)?;
        match tx.try_send(event.clone()) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(AntilogError::QueueFull),
            Err(TrySendError::Disconnected(_)) => Err(AntilogError::Closed),
        }
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

impl Drop for FileAntilog {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain and flush.
        drop(self.tx.take());
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

/// Try target file -> temp file -> sink (never panic).
fn open_writer(path: &Path) -> Box<dyn Write + Send> {
    if let Ok(f) = OpenOptions::new().create(true).append(true).open(path) {
        return Box::new(f);
    }
    let fallback = std::env::temp_dir().join("antilog-fallback.log");
    match OpenOptions::new().create(true).append(true).open(&fallback) {
        Ok(f) => Box::new(f),
        Err(_) => Box::new(io::sink()),
    }
}

/// Locates the directory of the executable (target/{debug,release}),
/// or falls back to the current working directory on error.
fn exe_dir_fallback_cwd() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Output Format: `YYYYMMDD_HHMMSS` (e.g., `20251102_023045`), local time.
fn timestamp_for_filename() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Expands tilde (`~`) in file paths to the user's home directory.
pub(crate) fn expand_path(path_str: &str) -> PathBuf {
    if path_str.starts_with('~') {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()
            .map(PathBuf::from);

        if let Some(mut home_path) = home {
            if path_str == "~" {
                return home_path;
            }
            if let Some(rest) = path_str
                .strip_prefix("~/")
                .or_else(|| path_str.strip_prefix("~\\"))
            {
                home_path.push(rest);
                return home_path;
            }
        }
    }
    PathBuf::from(path_str)
}
