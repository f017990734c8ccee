use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, AttendanceRecord, AttendanceSummary, CreateAttendance, Created},
};

impl ApiClient {
    pub async fn list_attendance(&self, employee_id: i64) -> Result<Vec<AttendanceRecord>, ApiError> {
        let response = self
            .send(self.request(Method::GET, &format!("/employees/{}/attendance", employee_id)))
            .await?;
        Self::parse_json(response).await
    }

    pub async fn get_attendance_summary(
        &self,
        employee_id: i64,
    ) -> Result<AttendanceSummary, ApiError> {
        let response = self
            .send(self.request(
                Method::GET,
                &format!("/employees/{}/attendance/summary", employee_id),
            ))
            .await?;
        Self::parse_json(response).await
    }

    pub async fn create_attendance(
        &self,
        employee_id: i64,
        payload: &CreateAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        let response = self
            .send(
                self.request(Method::POST, &format!("/employees/{}/attendance", employee_id))
                    .json(payload),
            )
            .await?;
        let created: Created<AttendanceRecord> = Self::parse_json(response).await?;
        Ok(created.into_inner())
    }
}
