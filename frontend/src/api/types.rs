use chrono::NaiveDate;
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

/// Departments offered by the creation form. Stored employees keep the raw
/// string, so values outside this list still render and group as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    Hr,
    It,
    Finance,
    Sales,
    Operations,
    Marketing,
}

impl Department {
    pub const ALL: [Department; 6] = [
        Department::Hr,
        Department::It,
        Department::Finance,
        Department::Sales,
        Department::Operations,
        Department::Marketing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Department::Hr => "HR",
            Department::It => "IT",
            Department::Finance => "Finance",
            Department::Sales => "Sales",
            Department::Operations => "Operations",
            Department::Marketing => "Marketing",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
    Leave,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 3] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Leave,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Leave => "Leave",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = ApiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        AttendanceStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| ApiError::validation(format!("Unknown attendance status: {}", value)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAttendance {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub total_present: u32,
    pub total_absent: u32,
    pub total_records: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Creation endpoints answer either with the entity itself or with
/// `{"message": ..., "data": entity}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Created<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Created<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            Created::Wrapped { data } => data,
            Created::Bare(value) => value,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    /// Builds the error for a non-2xx response from its status and the
    /// `detail` field of the body, if any.
    pub fn from_status(status: u16, detail: Option<Value>) -> Self {
        let code = if status == 404 { "NOT_FOUND" } else { "SERVER_ERROR" };
        let error = detail
            .as_ref()
            .and_then(detail_message)
            .unwrap_or_else(|| format!("HTTP {}", status));
        Self {
            error,
            code: code.to_string(),
            details: detail,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code == "NOT_FOUND"
    }

    /// The server-provided detail when there is one, otherwise `fallback`.
    pub fn detail_or(&self, fallback: &str) -> String {
        self.details
            .as_ref()
            .and_then(detail_message)
            .unwrap_or_else(|| fallback.to_string())
    }
}

fn detail_message(detail: &Value) -> Option<String> {
    match detail {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str).or_else(|| item.as_str()))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
