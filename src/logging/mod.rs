//! Per-category daily log files
//!
//! One directory per category under the logs root, one file per category and
//! day, appended line by line and pruned exactly one year later.

mod paths;
mod retention;
mod writer;

pub use paths::{category_dir, daily_log_path, log_file_name, previous_year_log_path};
pub use retention::remove_previous_year_log;
pub use writer::{LogWriter, DEFAULT_CATEGORY, ERROR_CATEGORY};
