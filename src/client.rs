use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::{debug, error};
use url::Url;

use crate::error::{Result, TeamsError};
use crate::types::{Team, TeamFormData};

const RESOURCE_PATH: &str = "api/Teams";

/// HTTP client for the `/api/Teams` resource.
///
/// Every failure is logged here, at the boundary, with the server's payload
/// when it sent one. `list_all` then swallows the error; everything else
/// hands it back to the caller.
pub struct TeamsClient {
    http: Client,
    endpoint: String,
}

/// Error body shapes the server is known to send.
#[derive(Deserialize)]
struct ErrorPayload {
    message: Option<String>,
    title: Option<String>,
    error: Option<String>,
}

impl TeamsClient {
    pub fn new(base_url: &Url) -> Self {
        Self::with_http_client(base_url, Client::new())
    }

    pub fn with_http_client(base_url: &Url, http: Client) -> Self {
        Self {
            http,
            endpoint: format!("{}/{RESOURCE_PATH}", base_url.as_str().trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{id}", self.endpoint)
    }

    /// Fetch every team. Failures are logged and reported as an empty list.
    pub async fn list_all(&self) -> Vec<Team> {
        self.try_list_all().await.unwrap_or_default()
    }

    /// Fetch every team, returning the failure instead of masking it.
    pub async fn try_list_all(&self) -> Result<Vec<Team>> {
        self.fetch("list teams", self.http.get(&self.endpoint)).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Team> {
        self.fetch("get team", self.http.get(self.item_url(id))).await
    }

    pub async fn create(&self, data: &TeamFormData) -> Result<Team> {
        self.fetch("create team", self.http.post(&self.endpoint).json(data))
            .await
    }

    pub async fn update(&self, id: i64, data: &TeamFormData) -> Result<Team> {
        self.fetch("update team", self.http.put(self.item_url(id)).json(data))
            .await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.send(self.http.delete(self.item_url(id)))
            .await
            .map(|_| ())
            .inspect_err(|e| log_failure("delete team", e))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<T> {
        let result = match self.send(request).await {
            Ok(response) => response.json::<T>().await.map_err(TeamsError::from),
            Err(e) => Err(e),
        };
        result.inspect_err(|e| log_failure(operation, e))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        debug!(url = %response.url(), status = status.as_u16(), "teams api response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(TeamsError::Api {
            status: status.as_u16(),
            message: server_message(status.as_u16(), &body),
            body,
        })
    }
}

fn log_failure(operation: &'static str, err: &TeamsError) {
    match err {
        TeamsError::Api {
            status,
            message,
            body,
        } => {
            error!(operation, status, %message, payload = %body, "API error");
        }
        other => error!(operation, error = %other, "API error"),
    }
}

/// Pull a human-readable message out of an error response body.
fn server_message(status: u16, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ErrorPayload>(body) {
        if let Some(message) = payload.message.or(payload.title).or(payload.error) {
            return message;
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("Request failed with status code {status}")
    } else {
        trimmed.to_string()
    }
}
