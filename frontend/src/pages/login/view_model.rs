use super::repository::LoginRepository;
use crate::api::{ApiClient, ApiError, LoginRequest, MessageResponse, RegisterRequest};
use crate::state::auth;
use leptos::*;
use std::rc::Rc;

pub const REGISTRATION_NOTICE: &str = "Registration successful. Please login.";

/// Which of the two forms the auth page is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

#[derive(Clone)]
pub struct LoginViewModel {
    pub mode: RwSignal<AuthMode>,
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub notice: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
    pub register_action: Action<RegisterRequest, Result<MessageResponse, ApiError>>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = LoginRepository::new_with_client(Rc::new(api));

    let mode = create_rw_signal(AuthMode::default());
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let notice = create_rw_signal(None::<String>);

    let login_action = auth::use_login_action();
    let register_action = create_action(move |request: &RegisterRequest| {
        let payload = request.clone();
        let repo = repository.clone();
        async move { repo.register(payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/converter");
                    }
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    // The register form hands off to the login form once the account
    // exists; the username stays filled so signing in is one step.
    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(_) => {
                    password.set(String::new());
                    error.set(None);
                    notice.set(Some(REGISTRATION_NOTICE.to_string()));
                    mode.set(AuthMode::Login);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        mode,
        username,
        password,
        error,
        notice,
        login_action,
        register_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn view_model_starts_on_the_login_form() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert_eq!(vm.mode.get(), AuthMode::Login);
            assert!(vm.username.get().is_empty());
            assert!(vm.password.get().is_empty());
            assert!(vm.error.get().is_none());
            assert!(vm.notice.get().is_none());
        });
    }
}
