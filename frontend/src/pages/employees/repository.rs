use crate::api::{ApiClient, ApiError, CreateEmployee, Employee};
use log::error;
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

/// Result of a delete: the delete error, if any, and the list as fetched afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    pub error: Option<ApiError>,
    pub refreshed: Result<Vec<Employee>, ApiError>,
}

impl EmployeesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await.map_err(|err| {
            error!("Error fetching employees: {}", err);
            err
        })
    }

    pub async fn create_employee(&self, payload: CreateEmployee) -> Result<Employee, ApiError> {
        self.client.create_employee(&payload).await
    }

    /// Deletes, then re-fetches the whole collection whatever the delete returned.
    pub async fn delete_and_refetch(&self, id: i64) -> DeleteOutcome {
        let error = self.client.delete_employee(id).await.err();
        let refreshed = self.fetch_employees().await;
        DeleteOutcome { error, refreshed }
    }
}
