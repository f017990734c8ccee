use crate::{
    api::{ApiError, AttendanceStatus, AttendanceSummary, CreateAttendance},
    utils::time::parse_input_date,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct AttendanceFormState {
    date: RwSignal<String>,
    status: RwSignal<AttendanceStatus>,
}

impl Default for AttendanceFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl AttendanceFormState {
    pub fn new() -> Self {
        Self {
            date: create_rw_signal(String::new()),
            status: create_rw_signal(AttendanceStatus::default()),
        }
    }

    pub fn date_signal(&self) -> RwSignal<String> {
        self.date
    }

    pub fn status_signal(&self) -> RwSignal<AttendanceStatus> {
        self.status
    }

    /// Select values arrive as strings; unknown ones are ignored.
    pub fn set_status_from_input(&self, value: &str) {
        if let Ok(status) = value.parse::<AttendanceStatus>() {
            self.status.set(status);
        }
    }

    pub fn to_request(&self) -> Result<CreateAttendance, ApiError> {
        let date = parse_input_date(&self.date.get_untracked())
            .ok_or_else(|| ApiError::validation("Please select a date"))?;
        Ok(CreateAttendance {
            date,
            status: self.status.get_untracked(),
        })
    }

    pub fn reset(&self) {
        self.date.set(String::new());
        self.status.set(AttendanceStatus::default());
    }
}

/// CSS class for a status badge, e.g. `status-present`.
pub fn status_badge_class(status: &str) -> String {
    format!("status-badge status-{}", status.to_lowercase())
}

/// Label/value pairs shown above the records table.
pub fn summary_stats(summary: &AttendanceSummary) -> [(&'static str, u32); 3] {
    [
        ("Present:", summary.total_present),
        ("Absent:", summary.total_absent),
        ("Total:", summary.total_records),
    ]
}
