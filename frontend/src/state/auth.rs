use crate::{
    api::{ApiClient, ApiError, LoginRequest},
    pages::login::repository as login_repository,
    state::session::{self, Session},
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.session.as_ref().map(|s| s.user_id)
    }
}

/// Seeds the signal from whatever the store holds right now. Presence is
/// all that is checked at load time; no validity round-trip is made.
fn create_auth_context() -> AuthContext {
    create_signal(AuthState {
        session: session::session(),
    })
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(create_auth_context)
}

pub async fn login_request(
    request: LoginRequest,
    repo: &login_repository::LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let token = repo.login(request).await?;
    set_auth_state.update(|state| {
        state.session = Some(Session {
            token: token.access_token,
            user_id: token.user_id,
        });
    });
    Ok(())
}

/// Clears the stored pair and the in-memory state. No network request is
/// made; the backend holds no server-side session.
pub fn logout(set_auth_state: WriteSignal<AuthState>) {
    session::clear_session();
    set_auth_state.update(|state| state.session = None);
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = login_repository::LoginRepository::new_with_client(std::rc::Rc::new(api));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), ()> {
    let (_auth, set_auth) = use_auth();

    create_action(move |(): &()| async move { logout(set_auth) })
}
