use axum::{
    Json,
    extract::{FromRequest, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use tracing::info;

use crate::{
    error::AppError,
    models::{
        AuthenticationResponse, AuthorizationUrlResponse, CreateContactRequest,
        ProcessContactNotification,
    },
    state::AppState,
};

pub const CREATE_CONTACT_LOCATION: &str = "/create-contact";

/// `Json` whose rejections are reported through [`AppError`].
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn authorization_url(State(state): State<AppState>) -> Json<AuthorizationUrlResponse> {
    Json(AuthorizationUrlResponse {
        url: state.hubspot.authorization_url().to_string(),
    })
}

pub async fn authenticate(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<AuthenticationResponse>, AppError> {
    let token = state.hubspot.exchange_code_for_token(&code).await?;
    Ok(Json(token))
}

pub async fn create_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(request): AppJson<CreateContactRequest>,
) -> Result<impl IntoResponse, AppError> {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AppError::unexpected("missing Authorization header"))?;

    let created = state.hubspot.create_contact(&request, authorization).await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, CREATE_CONTACT_LOCATION)],
        Json(created),
    ))
}

pub async fn process_contact(
    AppJson(notification): AppJson<ProcessContactNotification>,
) -> Json<ProcessContactNotification> {
    info!(
        "New Contact created [id={}] [subscriptionId={}] [appId={}]",
        notification.object_id, notification.subscription_id, notification.app_id
    );
    Json(notification)
}
