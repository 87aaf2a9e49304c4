use crate::state::auth::use_auth;
use leptos::*;

/// Gates a page on session presence. The stored pair is trusted as-is;
/// an invalid token surfaces later as a 401 on the first request, which
/// clears the session and sends the browser back to the login page.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let has_session = create_memo(move |_| auth.get().is_authenticated());
    create_effect(move |_| {
        if auth.get().is_authenticated() {
            return;
        }
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    });
    view! {
        <Show when=move || has_session.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

/// Inverse guard for the login page: an already-signed-in visitor is sent
/// straight to the converter.
#[component]
pub fn RedirectIfSession(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let has_session = create_memo(move |_| auth.get().is_authenticated());
    create_effect(move |_| {
        if !auth.get().is_authenticated() {
            return;
        }
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/converter");
        }
    });
    view! {
        <Show when=move || !has_session.get() fallback=|| ()>
            {children()}
        </Show>
    }
}
