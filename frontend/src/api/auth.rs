use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, MessageResponse, RegisterRequest, TokenResponse},
};
use crate::state::session;

/// Exact success text issued by `POST /register`; any other message means
/// the registration did not go through.
pub const REGISTER_SUCCESS_MESSAGE: &str = "User created successfully";

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

impl ApiClient {
    /// `POST /token` with a form-encoded body. On success both session
    /// halves are stored before the token is returned; on failure nothing
    /// is stored.
    pub async fn login(&self, request: LoginRequest) -> Result<TokenResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/token", base_url))
            .form(&request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::auth(INVALID_CREDENTIALS_MESSAGE));
        }
        if status.is_success() {
            // A success response without a usable token is still a failure.
            let token: TokenResponse = response
                .json()
                .await
                .map_err(|_| ApiError::unknown("Login failed"))?;
            session::set_session(&token.access_token, token.user_id)
                .map_err(|e| ApiError::unknown(e.to_string()))?;
            Ok(token)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// `POST /register`. The backend answers with a message body; only the
    /// documented success text counts as success.
    pub async fn register(&self, request: RegisterRequest) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/register", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            let message: MessageResponse = response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))?;
            if message.message == REGISTER_SUCCESS_MESSAGE {
                Ok(message)
            } else {
                Err(ApiError::validation("Registration failed"))
            }
        } else {
            Err(Self::error_from_response(response).await)
        }
    }
}
