use log::warn;
use reqwest::{header::CONTENT_TYPE, Client, Method, Request, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    api::types::{ApiError, ErrorBody},
    config::AppConfig,
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(&AppConfig::from_environment())
    }
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self::new_with_base_url(config.api_base_url())
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Every request goes out with a JSON content type.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.endpoint(path))
            .header(CONTENT_TYPE, "application/json")
    }

    /// Sends one request, once. Logs 404s and transport failures; the
    /// outcome is left to the caller.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;
        let url = request.url().to_string();

        match self.execute(request).await {
            Ok(response) => {
                if response.status() == StatusCode::NOT_FOUND {
                    warn!("[API] 404 - Endpoint not found: {}", url);
                }
                Ok(response)
            }
            Err(err) => {
                warn!(
                    "[API] Network error - Backend may be unreachable at: {} ({})",
                    self.base_url, err
                );
                Err(err)
            }
        }
    }

    #[cfg(not(all(test, not(target_arch = "wasm32"))))]
    async fn execute(&self, request: Request) -> Result<Response, ApiError> {
        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    async fn execute(&self, request: Request) -> Result<Response, ApiError> {
        let responder = find_mock(request.url().as_str()).ok_or_else(|| {
            ApiError::request_failed(format!("Request failed: no route to {}", request.url()))
        })?;
        responder.respond(&request)?.into_response()
    }

    pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    pub(crate) async fn ensure_success(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body: ErrorBody = response.json().await.unwrap_or_default();
        Err(ApiError::from_status(status.as_u16(), body.detail))
    }

    /// Liveness probe against the service root; any 2xx counts.
    pub async fn check_health(&self) -> Result<(), ApiError> {
        let response = self.send(self.request(Method::GET, "/")).await?;
        Self::ensure_success(response).await.map(|_| ())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_registry::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_registry::find_mock;
