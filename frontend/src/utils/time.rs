use chrono::NaiveDate;

/// How long the creation form keeps its success banner before handing back
/// to the shell.
pub const EMPLOYEE_CREATED_DELAY_MS: u32 = 1_500;

/// How long the attendance form keeps its success banner.
pub const ATTENDANCE_MARKED_DELAY_MS: u32 = 2_000;

/// Runs `f` once after `millis`, on the browser event loop.
pub fn after(millis: u32, f: impl FnOnce() + 'static) {
    gloo_timers::callback::Timeout::new(millis, f).forget();
}

/// Parses the value of an `<input type="date">`; blank or malformed input yields `None`.
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn format_record_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
