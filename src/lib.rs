//! Daylog - per-category daily log files with operator alerting
//!
//! Writes timestamped log lines to one file per category and day under
//! `data/logs/`, creating directories and files lazily, pruning last year's
//! same-day file on every write, and forwarding error messages to an injected
//! alert channel.

pub mod config;
pub mod logging;
pub mod notify;

pub use config::Config;
pub use logging::LogWriter;
pub use notify::{Notifier, NotifyError, NullNotifier};
