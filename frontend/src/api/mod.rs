mod auth;
pub mod client;
mod gold;
pub mod types;

pub use auth::{INVALID_CREDENTIALS_MESSAGE, REGISTER_SUCCESS_MESSAGE};
pub use client::*;
pub use types::*;
