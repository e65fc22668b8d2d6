//! Path and file-name derivation for category directories and daily files

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};

/// Directory holding all log files for one category
pub fn category_dir(root: &Path, category: &str) -> PathBuf {
    root.join(category)
}

/// File name for a category's log on the given date: `<category>-<YYYY>-<MM>-<DD>.log`
pub fn log_file_name(category: &str, date: NaiveDate) -> String {
    format!(
        "{}-{:04}-{:02}-{:02}.log",
        category,
        date.year(),
        date.month(),
        date.day()
    )
}

/// Full path of the category's log file for the given date
pub fn daily_log_path(root: &Path, category: &str, date: NaiveDate) -> PathBuf {
    category_dir(root, category).join(log_file_name(category, date))
}

/// Full path of the category's log file one year before the given date
///
/// The name is built from the date's components with the year decremented, not
/// from calendar arithmetic: on Feb 29 this names a file that was never
/// written, and the retention sweep simply finds nothing.
pub fn previous_year_log_path(root: &Path, category: &str, date: NaiveDate) -> PathBuf {
    let name = format!(
        "{}-{:04}-{:02}-{:02}.log",
        category,
        date.year() - 1,
        date.month(),
        date.day()
    );
    category_dir(root, category).join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_log_file_name_zero_padded() {
        assert_eq!(log_file_name("info", date(2026, 3, 7)), "info-2026-03-07.log");
        assert_eq!(
            log_file_name("error", date(2026, 12, 31)),
            "error-2026-12-31.log"
        );
    }

    #[test]
    fn test_daily_log_path_layout() {
        let path = daily_log_path(Path::new("/srv/app/data/logs"), "info", date(2026, 8, 26));
        assert_eq!(
            path,
            Path::new("/srv/app/data/logs/info/info-2026-08-26.log")
        );
    }

    #[test]
    fn test_previous_year_keeps_month_and_day() {
        let path = previous_year_log_path(Path::new("/logs"), "error", date(2026, 8, 26));
        assert_eq!(path, Path::new("/logs/error/error-2025-08-26.log"));
    }

    #[test]
    fn test_previous_year_on_leap_day_names_nonexistent_date() {
        // 2024-02-29 minus one year is spelled 2023-02-29 even though that
        // date never happened; the sweep just finds no file.
        let path = previous_year_log_path(Path::new("/logs"), "info", date(2024, 2, 29));
        assert_eq!(path, Path::new("/logs/info/info-2023-02-29.log"));
    }
}
