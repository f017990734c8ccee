use crate::api::{ApiClient, ApiError, AttendanceRecord, AttendanceSummary, CreateAttendance};
use log::error;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Records and summary for one employee, fetched together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceOverview {
    pub records: Vec<AttendanceRecord>,
    pub summary: AttendanceSummary,
}

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl AttendanceRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_overview(&self, employee_id: i64) -> Result<AttendanceOverview, ApiError> {
        let (records, summary) = futures::try_join!(
            self.client.list_attendance(employee_id),
            self.client.get_attendance_summary(employee_id),
        )
        .map_err(|err| {
            error!("Error fetching attendance for employee {}: {}", employee_id, err);
            err
        })?;
        Ok(AttendanceOverview { records, summary })
    }

    pub async fn mark_attendance(
        &self,
        employee_id: i64,
        payload: CreateAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        self.client.create_attendance(employee_id, &payload).await
    }
}
