use crate::api::{
    ApiClient, ApiError, LoginRequest, MessageResponse, RegisterRequest, TokenResponse,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<TokenResponse, ApiError> {
        self.client.login(request).await
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<MessageResponse, ApiError> {
        self.client.register(request).await
    }
}
