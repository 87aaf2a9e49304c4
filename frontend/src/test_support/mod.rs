#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::state::auth::AuthState;
    use crate::state::session::Session;
    use leptos::*;

    pub fn stored_session(user_id: i64) -> Session {
        Session {
            token: format!("tok-{user_id}"),
            user_id,
        }
    }

    /// Installs an auth context for component tests, bypassing the store.
    pub fn provide_auth(
        session: Option<Session>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState { session });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
