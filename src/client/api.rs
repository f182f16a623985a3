//! Typed HTTP transport for the task endpoints.

use crate::{
    client::ClientError,
    config::{ClientConfig, RetryConfig},
    models::{
        CreateTaskRequest, ErrorResponse, LoginRequest, LoginResponse, Task, TaskId,
        UpdateTaskRequest,
    },
};
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;
use tokio_retry::{RetryIf, strategy::ExponentialBackoff};
use tracing::{debug, warn};
use url::Url;

/// One method per endpoint; no state beyond the connection pool
#[derive(Clone, Debug)]
pub struct TasksApi {
    http: Client,
    base_url: Url,
    retry: RetryConfig,
}

impl TasksApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()?;

        let mut base_url = Url::parse(&config.base_url)?;
        // Without a trailing slash, join() would replace the last path segment
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http,
            base_url,
            retry: config.retry.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    fn authorized(&self, builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.bearer_auth(token)
    }

    /// `POST /login`; a 401 is returned as [`ClientError::Rejected`]
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let response = self
            .http
            .post(self.endpoint("login")?)
            .json(&LoginRequest::new(username, password))
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(response.json().await?);
        }

        let status = response.status().as_u16();
        let message = response
            .json::<LoginResponse>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| "Login failed".to_string());
        Err(ClientError::Rejected { status, message })
    }

    /// `GET /items`, retried on transient failures
    pub async fn list(&self, token: &str) -> Result<Vec<Task>, ClientError> {
        let strategy = ExponentialBackoff::from_millis(self.retry.initial_delay_ms)
            .max_delay(Duration::from_millis(self.retry.max_delay_ms))
            .map(tokio_retry::strategy::jitter)
            .take(self.retry.max_attempts);

        RetryIf::start(
            strategy,
            || async move {
                let request = self.authorized(self.http.get(self.endpoint("items")?), token);
                let response = expect_success(request.send().await?).await?;
                Ok::<_, ClientError>(response.json::<Vec<Task>>().await?)
            },
            |err: &ClientError| {
                let retry = err.is_transient();
                if retry {
                    warn!(error = %err, "Task list fetch failed, retrying");
                }
                retry
            },
        )
        .await
    }

    /// `POST /items`
    pub async fn create(&self, token: &str, text: &str) -> Result<Task, ClientError> {
        let request = self
            .authorized(self.http.post(self.endpoint("items")?), token)
            .json(&CreateTaskRequest::new(text));
        let response = expect_success(request.send().await?).await?;
        Ok(response.json().await?)
    }

    /// `PUT /items/{id}`
    pub async fn update(
        &self,
        token: &str,
        id: TaskId,
        changes: &UpdateTaskRequest,
    ) -> Result<Task, ClientError> {
        let request = self
            .authorized(self.http.put(self.endpoint(&format!("items/{id}"))?), token)
            .json(changes);
        let response = expect_success(request.send().await?).await?;
        Ok(response.json().await?)
    }

    /// `DELETE /items/{id}`
    pub async fn delete(&self, token: &str, id: TaskId) -> Result<(), ClientError> {
        let request = self.authorized(self.http.delete(self.endpoint(&format!("items/{id}"))?), token);
        expect_success(request.send().await?).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into [`ClientError::Rejected`] with the server's message
async fn expect_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorResponse>()
        .await
        .map(|body| body.message)
        .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Request failed").to_string());

    debug!(status = status.as_u16(), message = %message, "Request rejected");
    Err(ClientError::Rejected {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_keeps_path_prefix() {
        let api = TasksApi::new(&ClientConfig::with_base_url("http://example.com/tasklist")).unwrap();
        assert_eq!(
            api.endpoint("items/3").unwrap().as_str(),
            "http://example.com/tasklist/items/3"
        );

        let api = TasksApi::new(&ClientConfig::with_base_url("http://localhost:4000")).unwrap();
        assert_eq!(api.endpoint("login").unwrap().as_str(), "http://localhost:4000/login");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = TasksApi::new(&ClientConfig::with_base_url("not a url"));
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }
}
