use std::time::Duration;

use reqwest::{
    Client, Response,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue},
};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::{config::HubSpotConfig, error::AppError};

pub const TOKEN_PATH: &str = "/oauth/v1/token";
pub const CONTACTS_PATH: &str = "/crm/v3/objects/contacts";

/// Thin wrapper over the HubSpot REST API. Every call goes through
/// [`HubSpotClient::read`] so status handling is identical across endpoints.
#[derive(Clone)]
pub struct HubSpotClient {
    http: Client,
    base_url: String,
}

impl HubSpotClient {
    pub fn new(cfg: &HubSpotConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()?;
        Ok(Self {
            http,
            base_url: cfg.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn post_form<T>(&self, path: &str, form: &[(&str, &str)]) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        let response = self.http.post(self.url(path)).form(form).send().await?;
        Self::read(path, response).await
    }

    pub async fn post_json<T>(
        &self,
        path: &str,
        authorization: &HeaderValue,
        body: String,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.url(path))
            .header(AUTHORIZATION, authorization.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        Self::read(path, response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn read<T>(path: &str, response: Response) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        // text() honours the charset in Content-Type and falls back to UTF-8.
        let body = response.text().await?;
        if status.is_client_error() {
            warn!(path, status = status.as_u16(), "hubspot rejected request");
            Err(AppError::BadRequest(body))
        } else if status.is_server_error() {
            warn!(path, status = status.as_u16(), "hubspot server error");
            Err(AppError::UpstreamServerError(body))
        } else {
            Err(AppError::unexpected(format!(
                "hubspot answered {path} with unexpected status {status}"
            )))
        }
    }
}
