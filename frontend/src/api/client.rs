use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::{api::types::ApiError, config, state::session};

/// Shared HTTP plumbing. Endpoint methods live in the per-domain modules
/// (`api::auth`, `api::gold`); this file owns base-url resolution, bearer
/// headers, and the common error folding.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    /// Tests point the client at a mock server; production resolves the
    /// base URL from runtime config.
    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) fn get_auth_headers(&self) -> Result<reqwest::header::HeaderMap, ApiError> {
        let mut headers = reqwest::header::HeaderMap::new();

        let token = session::token().ok_or_else(|| ApiError::auth("Not authenticated"))?;

        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|_| ApiError::auth("Invalid token format"))?,
        );

        Ok(headers)
    }

    /// A 401 from any authenticated call invalidates the stored session:
    /// both halves are cleared and the browser is sent back to the login
    /// page.
    pub(super) fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            session::clear_session();
            redirect_to_login_if_needed();
        }
    }

    /// Folds a non-success response into an `ApiError`. The backend
    /// reports failures as `{"detail": ...}`; that text (or a `message`
    /// field) becomes the user-visible error.
    pub(super) async fn error_from_response(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let fallback = format!("Request failed with status {}", status.as_u16());
        let auth_failure = status == StatusCode::UNAUTHORIZED;

        let error = match response.json::<Value>().await {
            Ok(body) => {
                let detail = body
                    .get("detail")
                    .and_then(Value::as_str)
                    .or_else(|| body.get("message").and_then(Value::as_str))
                    .or_else(|| body.get("error").and_then(Value::as_str))
                    .map(str::to_string);
                match detail {
                    Some(text) => ApiError {
                        error: text,
                        code: "REQUEST_FAILED".to_string(),
                        details: Some(body),
                    },
                    None => ApiError::request_failed(fallback),
                }
            }
            Err(_) => ApiError::request_failed(fallback),
        };

        if auth_failure {
            ApiError {
                code: "AUTH_ERROR".to_string(),
                ..error
            }
        } else {
            error
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn redirect_to_login_if_needed() {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if let Ok(pathname) = location.pathname() {
            if pathname == "/login" {
                return;
            }
        }
        let _ = location.set_href("/login");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn redirect_to_login_if_needed() {}
