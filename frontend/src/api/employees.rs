use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, CreateEmployee, Created, Employee},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let response = self.send(self.request(Method::GET, "/employees")).await?;
        Self::parse_json(response).await
    }

    pub async fn create_employee(&self, payload: &CreateEmployee) -> Result<Employee, ApiError> {
        let response = self
            .send(self.request(Method::POST, "/employees").json(payload))
            .await?;
        let created: Created<Employee> = Self::parse_json(response).await?;
        Ok(created.into_inner())
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .send(self.request(Method::DELETE, &format!("/employees/{}", id)))
            .await?;
        Self::ensure_success(response).await.map(|_| ())
    }
}
