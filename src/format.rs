//! Display Formatting
//!
//! Dates, progress and badge classes shared by cards and detail views.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::{Priority, ProjectStatus, TaskStatus};

/// Placeholder for missing values
pub const MISSING: &str = "—";

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// `Jan 5, 2024`; unparseable input is shown as-is
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => value.to_string(),
    }
}

pub fn format_optional_date(value: Option<&str>) -> String {
    value.map(format_date).unwrap_or_else(|| MISSING.to_string())
}

/// Rounded percentage, 0 when there is nothing to complete
pub fn progress_percentage(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

pub fn file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{} B", bytes)
    } else if b < KB * KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / (KB * KB))
    }
}

pub fn project_status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Active => "badge badge-blue",
        ProjectStatus::Completed => "badge badge-green",
        ProjectStatus::OnHold => "badge badge-yellow",
        ProjectStatus::Archived => "badge badge-gray",
    }
}

pub fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::Urgent => "badge badge-red",
        Priority::High => "badge badge-orange",
        Priority::Medium => "badge badge-yellow",
        Priority::Low => "badge badge-green",
    }
}

pub fn task_status_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "badge badge-gray",
        TaskStatus::InProgress => "badge badge-blue",
        TaskStatus::Completed => "badge badge-green",
        TaskStatus::Cancelled => "badge badge-red",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_accepts_backend_shapes() {
        assert_eq!(format_date("2024-01-05T10:30:00"), "Jan 5, 2024");
        assert_eq!(format_date("2024-01-05T10:30:00.123456"), "Jan 5, 2024");
        assert_eq!(format_date("2024-12-25"), "Dec 25, 2024");
        assert_eq!(format_date("2024-03-01T23:00:00Z"), "Mar 1, 2024");
        assert_eq!(format_date("soon"), "soon");
        assert_eq!(format_optional_date(None), MISSING);
    }

    #[test]
    fn test_progress_rounds_and_handles_zero() {
        assert_eq!(progress_percentage(0, 0), 0);
        assert_eq!(progress_percentage(1, 3), 33);
        assert_eq!(progress_percentage(2, 3), 67);
        assert_eq!(progress_percentage(4, 4), 100);
    }

    #[test]
    fn test_file_size_units() {
        assert_eq!(file_size(512), "512 B");
        assert_eq!(file_size(2048), "2.0 KB");
        assert_eq!(file_size(5 * 1024 * 1024), "5.0 MB");
    }
}
