use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AuthorizationUrlResponse {
    pub url: String,
}

/// Token issued by HubSpot. Accepts both HubSpot's snake_case fields and the
/// camelCase shape this service responds with.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationResponse {
    #[serde(alias = "access_token")]
    pub access_token: String,
    #[serde(alias = "expires_in")]
    pub expires_in: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CreateContactRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
}

/// Body of HubSpot's object-creation call.
#[derive(Serialize)]
pub struct ContactProperties<'a> {
    pub properties: &'a CreateContactRequest,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactResponse {
    pub id: String,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessContactNotification {
    #[serde(deserialize_with = "null_as_zero")]
    pub object_id: i64,
    #[serde(deserialize_with = "null_as_zero")]
    pub subscription_id: i64,
    #[serde(deserialize_with = "null_as_zero")]
    pub app_id: i64,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorDetails {
    pub status: u16,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorDetails {
    pub fn now(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RateLimitFallback {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn authentication_response_reads_hubspot_token_payload() {
        let payload = json!({
            "token_type": "bearer",
            "refresh_token": "refresh",
            "access_token": "access",
            "expires_in": 1800
        });
        let parsed: AuthenticationResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(parsed.access_token, "access");
        assert_eq!(parsed.expires_in, 1800);

        let rendered = serde_json::to_value(&parsed).unwrap();
        assert_eq!(rendered, json!({ "accessToken": "access", "expiresIn": 1800 }));
    }

    #[test]
    fn inbound_dtos_ignore_unknown_fields() {
        let contact: CreateContactRequest = serde_json::from_value(json!({
            "email": "test@example.com",
            "lastname": "lastname",
            "firstname": "firstname",
            "phone": "555-0100"
        }))
        .unwrap();
        assert_eq!(contact.email.as_deref(), Some("test@example.com"));

        let notification: ProcessContactNotification = serde_json::from_value(json!({
            "objectId": 1,
            "subscriptionId": 2,
            "appId": 3,
            "eventId": 99,
            "propertyName": "email"
        }))
        .unwrap();
        assert_eq!(
            notification,
            ProcessContactNotification {
                object_id: 1,
                subscription_id: 2,
                app_id: 3
            }
        );
    }

    #[test]
    fn null_notification_ids_read_as_zero() {
        let notification: ProcessContactNotification = serde_json::from_value(json!({
            "objectId": null,
            "subscriptionId": 2
        }))
        .unwrap();
        assert_eq!(
            notification,
            ProcessContactNotification {
                object_id: 0,
                subscription_id: 2,
                app_id: 0
            }
        );
    }

    #[test]
    fn contact_properties_wraps_request() {
        let contact = CreateContactRequest {
            email: Some("test@example.com".into()),
            lastname: Some("lastname".into()),
            firstname: None,
        };
        let body = serde_json::to_value(ContactProperties { properties: &contact }).unwrap();
        assert_eq!(
            body,
            json!({ "properties": { "email": "test@example.com", "lastname": "lastname" } })
        );
    }

    #[test]
    fn error_details_uses_status_code_number() {
        let details = ErrorDetails::now(StatusCode::BAD_REQUEST, "nope");
        let body = serde_json::to_value(&details).unwrap();
        assert_eq!(body["status"], 400);
        assert_eq!(body["message"], "nope");
    }
}
