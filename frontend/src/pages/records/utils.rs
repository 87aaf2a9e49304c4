use crate::api::{GoldRecord, UserResponse};

/// One table row: the owning user's columns repeat on every record row.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordRow {
    pub record_id: i64,
    pub user_id: i64,
    pub username: String,
    pub gold_price_per_gram: f64,
    pub amount_in_currency: f64,
    pub calculated_gold: f64,
}

/// Pairs the user with their records, keeping the backend's order.
pub fn build_rows(user: &UserResponse, records: &[GoldRecord]) -> Vec<RecordRow> {
    records
        .iter()
        .map(|record| RecordRow {
            record_id: record.id,
            user_id: user.id,
            username: user.username.clone(),
            gold_price_per_gram: record.gold_price_per_gram,
            amount_in_currency: record.amount_in_currency,
            calculated_gold: record.calculated_gold,
        })
        .collect()
}
