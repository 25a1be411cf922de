use axum::http::HeaderValue;

use crate::{
    config::HubSpotConfig,
    error::AppError,
    hubspot::{CONTACTS_PATH, HubSpotClient, TOKEN_PATH},
    models::{AuthenticationResponse, ContactProperties, CreateContactRequest, CreateContactResponse},
};

pub struct HubSpotService {
    client: HubSpotClient,
    cfg: HubSpotConfig,
}

impl HubSpotService {
    pub fn new(cfg: HubSpotConfig) -> anyhow::Result<Self> {
        let client = HubSpotClient::new(&cfg)?;
        Ok(Self { client, cfg })
    }

    pub fn authorization_url(&self) -> &str {
        &self.cfg.authorization_url
    }

    pub async fn exchange_code_for_token(
        &self,
        code: &str,
    ) -> Result<AuthenticationResponse, AppError> {
        let form = [
            ("grant_type", "authorization_code"),
            ("client_id", self.cfg.client_id.as_str()),
            ("client_secret", self.cfg.client_secret.as_str()),
            ("redirect_uri", self.cfg.redirect_url.as_str()),
            ("code", code),
        ];
        self.client.post_form(TOKEN_PATH, &form).await
    }

    /// Creates a contact with the caller's bearer token, forwarded untouched.
    pub async fn create_contact(
        &self,
        request: &CreateContactRequest,
        authorization: &HeaderValue,
    ) -> Result<CreateContactResponse, AppError> {
        let body = serde_json::to_string(&ContactProperties {
            properties: request,
        })
        .map_err(|err| {
            AppError::BadRequest(format!("Request body cannot be converted to JSON: {err}"))
        })?;
        self.client.post_json(CONTACTS_PATH, authorization, body).await
    }
}
