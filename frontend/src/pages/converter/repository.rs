use crate::api::{ApiClient, ApiError, GoldRecord, GoldRecordCreate, SpotPriceResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct ConverterRepository {
    client: Rc<ApiClient>,
}

impl ConverterRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_price(&self) -> Result<SpotPriceResponse, ApiError> {
        self.client.fetch_gold_price().await
    }

    pub async fn save_record(
        &self,
        user_id: i64,
        record: &GoldRecordCreate,
    ) -> Result<GoldRecord, ApiError> {
        self.client.save_gold_record(user_id, record).await
    }
}
