#![cfg(not(coverage))]

use super::test_support::mock::*;
use super::*;
use chrono::NaiveDate;
use serde_json::json;

fn employee_json(id: i64, employee_id: &str, full_name: &str, department: &str) -> serde_json::Value {
    json!({
        "id": id,
        "employee_id": employee_id,
        "full_name": full_name,
        "email": format!("{}@example.com", employee_id.to_lowercase()),
        "department": department
    })
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

#[tokio::test]
async fn list_employees_returns_backend_order() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(200).json_body(json!([
            employee_json(2, "EMP002", "Bo Lin", "IT"),
            employee_json(1, "EMP001", "Asha Rao", "IT"),
        ]));
    });

    let employees = api_client(&server).list_employees().await.unwrap();
    let ids: Vec<i64> = employees.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn every_request_carries_json_content_type() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(200).json_body(json!([]));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/employees/4");
        then.status(200).json_body(json!({ "message": "Employee deleted successfully" }));
    });

    let api = api_client(&server);
    api.list_employees().await.unwrap();
    api.delete_employee(4).await.unwrap();

    let received = server.received();
    assert_eq!(received.len(), 2);
    assert!(received
        .iter()
        .all(|req| req.content_type.as_deref() == Some("application/json")));
}

#[tokio::test]
async fn create_employee_posts_exactly_four_fields_and_unwraps_envelope() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/employees");
        then.status(200).json_body(json!({
            "message": "Employee created successfully",
            "data": employee_json(9, "EMP009", "Dee Moss", "Finance")
        }));
    });

    let payload = CreateEmployee {
        employee_id: "EMP009".into(),
        full_name: "Dee Moss".into(),
        email: "emp009@example.com".into(),
        department: "Finance".into(),
    };
    let created = api_client(&server).create_employee(&payload).await.unwrap();
    assert_eq!(created.id, 9);
    assert_eq!(created.department, "Finance");

    assert_eq!(server.hits(POST, "/api/employees"), 1);
    let body = server.received()[0].body.clone().unwrap();
    assert_eq!(
        body,
        json!({
            "employee_id": "EMP009",
            "full_name": "Dee Moss",
            "email": "emp009@example.com",
            "department": "Finance"
        })
    );
}

#[tokio::test]
async fn create_employee_surfaces_detail_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/employees");
        then.status(400)
            .json_body(json!({ "detail": "Employee with this ID or email already exists" }));
    });

    let payload = CreateEmployee {
        employee_id: "EMP001".into(),
        full_name: "Asha Rao".into(),
        email: "a@x.com".into(),
        department: "IT".into(),
    };
    let err = api_client(&server).create_employee(&payload).await.unwrap_err();
    assert_eq!(err.code, "SERVER_ERROR");
    assert_eq!(
        err.detail_or("Error adding employee"),
        "Employee with this ID or email already exists"
    );
}

#[tokio::test]
async fn delete_missing_employee_reports_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/api/employees/42");
        then.status(404).json_body(json!({ "detail": "Employee not found" }));
    });

    let err = api_client(&server).delete_employee(42).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.error, "Employee not found");
}

#[tokio::test]
async fn attendance_endpoints_round_trip() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/employees/3/attendance");
        then.status(200).json_body(json!([
            { "id": 11, "date": "2025-01-03", "status": "Absent" },
            { "id": 10, "date": "2025-01-02", "status": "Present" }
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/employees/3/attendance/summary");
        then.status(200).json_body(json!({
            "employee_id": "EMP003",
            "full_name": "Cy Park",
            "total_records": 2,
            "total_present": 1,
            "total_absent": 1
        }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/employees/3/attendance");
        then.status(200).json_body(json!({
            "message": "Attendance marked successfully",
            "data": { "id": 12, "date": "2025-01-04", "status": "Leave", "employee_id": 3 }
        }));
    });

    let api = api_client(&server);
    let records = api.list_attendance(3).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());

    let summary = api.get_attendance_summary(3).await.unwrap();
    assert_eq!(summary.total_records, 2);
    assert_eq!(summary.full_name.as_deref(), Some("Cy Park"));

    let created = api
        .create_attendance(
            3,
            &CreateAttendance {
                date: NaiveDate::from_ymd_opt(2025, 1, 4).unwrap(),
                status: AttendanceStatus::Leave,
            },
        )
        .await
        .unwrap();
    assert_eq!(created.id, 12);
    assert_eq!(created.employee_id, Some(3));

    let post = server
        .received()
        .into_iter()
        .find(|req| req.method == POST)
        .unwrap();
    assert_eq!(post.body, Some(json!({ "date": "2025-01-04", "status": "Leave" })));
}

#[tokio::test]
async fn duplicate_attendance_detail_is_preserved() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/employees/3/attendance");
        then.status(400)
            .json_body(json!({ "detail": "Attendance already marked for this date" }));
    });

    let err = api_client(&server)
        .create_attendance(
            3,
            &CreateAttendance {
                date: NaiveDate::from_ymd_opt(2025, 1, 4).unwrap(),
                status: AttendanceStatus::Present,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.error, "Attendance already marked for this date");
}

#[tokio::test]
async fn health_check_accepts_any_success() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/");
        then.status(200).json_body(json!({
            "message": "HRMS Lite API is running",
            "status": "ok",
            "version": "1.0.0"
        }));
    });

    assert!(api_client(&server).check_health().await.is_ok());
    assert_eq!(server.request_lines(), vec!["GET /api/".to_string()]);
}

#[tokio::test]
async fn unreachable_backend_is_a_request_failure() {
    let api = ApiClient::new_with_base_url("http://unreachable.invalid");
    let err = api.check_health().await.unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");

    let err = api.list_employees().await.unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
}

#[tokio::test]
async fn malformed_success_body_is_unknown_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(200).json_body(json!({ "unexpected": true }));
    });

    let err = api_client(&server).list_employees().await.unwrap_err();
    assert_eq!(err.code, "UNKNOWN");
}

#[test]
fn client_built_from_config_uses_its_base_url() {
    let config = crate::config::AppConfig::new("http://api.example.com/");
    let api = ApiClient::new(&config);
    assert_eq!(api.base_url(), "http://api.example.com");
    assert_eq!(api.endpoint("/employees"), "http://api.example.com/employees");
}
