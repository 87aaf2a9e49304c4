use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Issued by `POST /token`. The backend also sends `token_type`, which
/// the client has no use for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
}

/// One persisted conversion, as returned by `GET /users/{id}/gold_records`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoldRecord {
    pub id: i64,
    pub currency: String,
    pub gold_price_per_gram: f64,
    pub amount_in_currency: f64,
    pub calculated_gold: f64,
}

/// Payload for `POST /calculate_gold/{user_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldRecordCreate {
    pub currency: String,
    pub gold_price_per_gram: f64,
    pub amount_in_currency: f64,
    pub calculated_gold: f64,
}

/// Spot quote relayed by the backend's `/gold_price` proxy: the feed's
/// USD price per troy ounce, shape unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotPriceResponse {
    pub gold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn auth(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "AUTH_ERROR".to_string(),
            details: None,
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "NOT_FOUND".to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn is_auth(&self) -> bool {
        self.code == "AUTH_ERROR"
    }
}
