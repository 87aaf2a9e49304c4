use crate::api::{ApiClient, ApiError, GoldRecord, UserResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct RecordsRepository {
    client: Rc<ApiClient>,
}

impl RecordsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_user(&self, user_id: i64) -> Result<UserResponse, ApiError> {
        self.client.get_user(user_id).await
    }

    pub async fn fetch_records(&self, user_id: i64) -> Result<Vec<GoldRecord>, ApiError> {
        self.client.get_gold_records(user_id).await
    }
}
