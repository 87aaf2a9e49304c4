use super::{
    client::ApiClient,
    types::{ApiError, GoldRecord, GoldRecordCreate, SpotPriceResponse, UserResponse},
};

impl ApiClient {
    /// `GET /gold_price`: the backend's proxy for the metals feed,
    /// relaying the feed's per-ounce quote shape.
    pub async fn fetch_gold_price(&self) -> Result<SpotPriceResponse, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/gold_price", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// `GET /users/{id}`. A 404 means the stored user id no longer matches
    /// an account.
    pub async fn get_user(&self, user_id: i64) -> Result<UserResponse, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/users/{}", base_url, user_id))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::not_found("Logged-in user not found."));
        }
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// `GET /users/{id}/gold_records`, in the order the backend returns
    /// them.
    pub async fn get_gold_records(&self, user_id: i64) -> Result<Vec<GoldRecord>, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/users/{}/gold_records", base_url, user_id))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// `POST /calculate_gold/{user_id}` persists one conversion. The
    /// backend takes this without a bearer header.
    pub async fn save_gold_record(
        &self,
        user_id: i64,
        payload: &GoldRecordCreate,
    ) -> Result<GoldRecord, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/calculate_gold/{}", base_url, user_id))
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }
}
