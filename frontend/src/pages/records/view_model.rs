use super::repository::RecordsRepository;
use crate::{
    api::{ApiClient, ApiError, GoldRecord, UserResponse},
    state::session,
};
use leptos::*;
use std::rc::Rc;

pub const NOT_AUTHENTICATED_MESSAGE: &str = "User is not authenticated or user ID is missing.";

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RecordsPageData {
    pub user: UserResponse,
    pub records: Vec<GoldRecord>,
}

/// Loads everything the records page shows. Both session halves must be
/// present before a single request goes out; a partial session fails
/// immediately with no network traffic.
pub async fn load_records(repo: &RecordsRepository) -> Result<RecordsPageData, ApiError> {
    let Some(session) = session::session() else {
        return Err(ApiError::auth(NOT_AUTHENTICATED_MESSAGE));
    };
    let user = repo.fetch_user(session.user_id).await?;
    let records = repo.fetch_records(session.user_id).await?;
    Ok(RecordsPageData { user, records })
}

#[derive(Clone)]
pub struct RecordsViewModel {
    pub data_resource: Resource<(), Result<RecordsPageData, ApiError>>,
}

impl RecordsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = RecordsRepository::new_with_client(Rc::new(api));

        let data_resource = create_resource(
            || (),
            move |_| {
                let repo = repository.clone();
                async move { load_records(&repo).await }
            },
        );

        Self { data_resource }
    }
}

pub fn use_records_view_model() -> RecordsViewModel {
    match use_context::<RecordsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = RecordsViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;

    fn repository(server: &MockServer) -> RecordsRepository {
        RecordsRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    #[tokio::test]
    async fn missing_session_fails_before_any_request() {
        session::clear_session();
        let server = MockServer::start_async().await;
        let user_mock = server.mock(|when, then| {
            when.method(GET).path_contains("/api/users");
            then.status(200).json_body(serde_json::json!({}));
        });

        let err = load_records(&repository(&server)).await.unwrap_err();
        assert!(err.is_auth());
        assert_eq!(err.error, NOT_AUTHENTICATED_MESSAGE);
        user_mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn orphaned_token_is_not_enough() {
        session::clear_session();
        crate::utils::storage::set_item("token", "tok-lonely").unwrap();
        let server = MockServer::start_async().await;
        let user_mock = server.mock(|when, then| {
            when.method(GET).path_contains("/api/users");
            then.status(200).json_body(serde_json::json!({}));
        });

        let err = load_records(&repository(&server)).await.unwrap_err();
        assert_eq!(err.error, NOT_AUTHENTICATED_MESSAGE);
        user_mock.assert_hits_async(0).await;
        session::clear_session();
    }

    #[tokio::test]
    async fn loads_user_and_records_in_backend_order() {
        session::clear_session();
        session::set_session("tok-records", 7).unwrap();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/users/7")
                .header("authorization", "Bearer tok-records");
            then.status(200)
                .json_body(serde_json::json!({ "id": 7, "username": "alice" }));
        });
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/users/7/gold_records")
                .header("authorization", "Bearer tok-records");
            then.status(200).json_body(serde_json::json!([
                {
                    "id": 2,
                    "currency": "INR",
                    "gold_price_per_gram": 5000.0,
                    "amount_in_currency": 1000.0,
                    "calculated_gold": 0.2
                },
                {
                    "id": 1,
                    "currency": "INR",
                    "gold_price_per_gram": 4800.0,
                    "amount_in_currency": 240.0,
                    "calculated_gold": 0.05
                }
            ]));
        });

        let data = load_records(&repository(&server)).await.unwrap();
        assert_eq!(data.user.username, "alice");
        assert_eq!(
            data.records.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![2, 1]
        );
        session::clear_session();
    }

    #[tokio::test]
    async fn missing_user_reports_not_found() {
        session::clear_session();
        session::set_session("tok-gone", 9).unwrap();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/users/9");
            then.status(404)
                .json_body(serde_json::json!({ "detail": "User not found" }));
        });

        let err = load_records(&repository(&server)).await.unwrap_err();
        assert_eq!(err.error, "Logged-in user not found.");
        session::clear_session();
    }
}
