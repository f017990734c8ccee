use super::utils::{department_breakdown, DepartmentCount};
use crate::api::{ApiClient, ApiError};
use log::error;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardData {
    pub total_employees: usize,
    pub departments: Vec<DepartmentCount>,
}

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_dashboard(&self) -> Result<DashboardData, ApiError> {
        let employees = self.client.list_employees().await.map_err(|err| {
            error!("Error loading dashboard data: {}", err);
            err
        })?;
        Ok(DashboardData {
            total_employees: employees.len(),
            departments: department_breakdown(&employees),
        })
    }
}
