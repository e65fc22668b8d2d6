//! Category-tagged daily log writer
//!
//! The writer re-derives paths and re-checks existence on every call; the
//! filesystem is the only store of state. The sequence per call is fixed:
//! console echo, directory check, file check, retention sweep, append.

use std::collections::HashMap;
use std::fmt::Display;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::Local;

use crate::config::Config;
use crate::notify::Notifier;

use super::{paths, retention};

/// Category used by [`LogWriter::info`]
pub const DEFAULT_CATEGORY: &str = "info";

/// Category used by [`LogWriter::log_error`]
pub const ERROR_CATEGORY: &str = "error";

/// Permission mode applied to log directories and files
#[cfg(unix)]
const LOG_MODE: u32 = 0o755;

/// Writes categorized log lines to per-category daily files
///
/// Holds only the injected application name, the alert channel, the logs root,
/// and a lock table; no cached knowledge of what exists on disk survives
/// between calls.
pub struct LogWriter {
    app_name: String,
    notifier: Arc<dyn Notifier>,
    root: PathBuf,
    /// One lock per daily file path; serializes the check-create-sweep-append
    /// sequence for threads sharing this writer.
    file_locks: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl LogWriter {
    /// Create a writer rooted at `<cwd>/data/logs`
    ///
    /// Fails if `app_name` is empty or the current directory cannot be
    /// resolved.
    pub fn new(app_name: impl Into<String>, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
        Self::with_root(app_name, notifier, cwd.join("data").join("logs"))
    }

    /// Create a writer with an explicit logs root
    pub fn with_root(
        app_name: impl Into<String>,
        notifier: Arc<dyn Notifier>,
        root: impl Into<PathBuf>,
    ) -> Result<Self> {
        let app_name = app_name.into();
        if app_name.is_empty() {
            anyhow::bail!("Application name must not be empty");
        }
        Ok(Self {
            app_name,
            notifier,
            root: root.into(),
            file_locks: Mutex::new(HashMap::new()),
        })
    }

    /// Create a writer from loaded configuration
    pub fn from_config(config: &Config, notifier: Arc<dyn Notifier>) -> Result<Self> {
        Self::new(config.app_name.clone(), notifier)
    }

    /// Root directory this writer logs under
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Log `message` under the default `info` category
    pub fn info(&self, message: &str) -> Result<bool> {
        self.log(message, DEFAULT_CATEGORY)
    }

    /// Append `message` to today's log file for `category`
    ///
    /// Returns `Ok(false)` without any side effect when `category` is empty.
    /// Otherwise echoes `[<CATEGORY>] <message>` to stdout, ensures the
    /// category directory and today's file exist (mode 0755, the file mode is
    /// reset on every call), prunes the same-day file from one year ago, and
    /// appends one `[YYYY-MM-DD HH:MM:SS] <message>` line. Filesystem errors
    /// propagate; nothing is retried.
    pub fn log(&self, message: &str, category: &str) -> Result<bool> {
        if category.is_empty() {
            return Ok(false);
        }

        // Console echo happens before any fallible filesystem step.
        println!("[{}] {}", category.to_uppercase(), message);

        let category = category.to_lowercase();
        let today = Local::now().date_naive();
        let file_path = paths::daily_log_path(&self.root, &category, today);

        let lock = self.file_lock(&file_path);
        let _guard = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        self.ensure_category_dir(&category)?;
        self.ensure_log_file(&file_path)?;
        retention::remove_previous_year_log(&self.root, &category, today)?;

        // The line timestamp is taken here, after the console echo; the two
        // may differ by the cost of the directory and retention work above.
        let line = format!(
            "[{}] {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            message
        );

        let mut file = OpenOptions::new()
            .append(true)
            .open(&file_path)
            .with_context(|| format!("Failed to open log file {}", file_path.display()))?;
        file.write_all(line.as_bytes())
            .with_context(|| format!("Failed to append to log file {}", file_path.display()))?;

        Ok(true)
    }

    /// Log an error and forward it to the operator alert channel
    ///
    /// The message is the error's `Display` rendering. The alert goes out
    /// regardless of whether the file write succeeded; a failing alert channel
    /// is downgraded to a `tracing` warning so it cannot mask the log outcome.
    /// A filesystem failure from the underlying write still propagates.
    pub fn log_error<E: Display>(&self, error: E) -> Result<()> {
        let message = error.to_string();

        let logged = self.log(&message, ERROR_CATEGORY);

        let alert = format!("[{}] {}", self.app_name, message);
        if let Err(e) = self.notifier.send(&alert) {
            tracing::warn!("Failed to deliver operator alert: {e}");
        }

        logged.map(|_| ())
    }

    fn file_lock(&self, path: &Path) -> Arc<Mutex<()>> {
        let mut locks = self
            .file_locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(locks.entry(path.to_path_buf()).or_default())
    }

    fn ensure_category_dir(&self, category: &str) -> Result<()> {
        let dir = paths::category_dir(&self.root, category);
        if !dir.is_dir() {
            // create_dir_all tolerates a concurrent creator winning the race.
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            set_mode(&dir)?;
        }
        Ok(())
    }

    fn ensure_log_file(&self, path: &Path) -> Result<()> {
        if !path.is_file() {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
        }
        // The mode is reset on every call, not only on creation.
        set_mode(path)?;
        Ok(())
    }
}

#[cfg(unix)]
fn set_mode(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(LOG_MODE))
        .with_context(|| format!("Failed to set permissions on {}", path.display()))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path) -> Result<()> {
    Ok(())
}
