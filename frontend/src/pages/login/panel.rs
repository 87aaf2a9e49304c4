use super::{
    components::form::CredentialsForm,
    utils,
    view_model::{use_login_view_model, AuthMode},
};
use crate::{
    api::{ApiError, LoginRequest, RegisterRequest},
    components::{error::InlineErrorMessage, layout::SuccessMessage},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let mode = vm.mode;
    let username = vm.username;
    let password = vm.password;
    let error = vm.error;
    let notice = vm.notice;
    let login_action = vm.login_action;
    let register_action = vm.register_action;

    let login_pending = login_action.pending();
    let register_pending = register_action.pending();

    let handle_login = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if login_pending.get_untracked() {
            return;
        }
        let uname = username.get_untracked();
        let pword = password.get_untracked();
        if let Err(msg) = utils::validate_credentials(&uname, &pword) {
            error.set(Some(ApiError::validation(msg)));
            return;
        }
        error.set(None);
        notice.set(None);
        login_action.dispatch(LoginRequest {
            username: uname,
            password: pword,
        });
    });

    let handle_register = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if register_pending.get_untracked() {
            return;
        }
        let uname = username.get_untracked();
        let pword = password.get_untracked();
        if let Err(msg) = utils::validate_credentials(&uname, &pword) {
            error.set(Some(ApiError::validation(msg)));
            return;
        }
        error.set(None);
        register_action.dispatch(RegisterRequest {
            username: uname,
            password: pword,
        });
    });

    let switch_to = move |target: AuthMode| {
        mode.set(target);
        error.set(None);
        notice.set(None);
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        {move || match mode.get() {
                            AuthMode::Login => "Sign in to Aurum",
                            AuthMode::Register => "Create your account",
                        }}
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Convert currency into grams of gold"
                    </p>
                </div>

                {move || notice.get().map(|msg| view! { <SuccessMessage message=msg /> })}
                <InlineErrorMessage error={error.into()} />

                <Show
                    when=move || mode.get() == AuthMode::Login
                    fallback=move || {
                        view! {
                            <CredentialsForm
                                username_id="regUsername"
                                password_id="regPassword"
                                submit_label="Register"
                                pending_label="Registering..."
                                username=username
                                password=password
                                pending=register_pending.into()
                                on_submit=handle_register
                            />
                            <div class="text-sm text-center">
                                <button
                                    type="button"
                                    class="font-medium text-link hover:text-link-hover"
                                    on:click=move |_| switch_to(AuthMode::Login)
                                >
                                    "Already have an account? Login"
                                </button>
                            </div>
                        }
                    }
                >
                    <CredentialsForm
                        username_id="username"
                        password_id="password"
                        submit_label="Login"
                        pending_label="Logging in..."
                        username=username
                        password=password
                        pending=login_pending.into()
                        on_submit=handle_login
                    />
                    <div class="text-sm text-center">
                        <button
                            type="button"
                            class="font-medium text-link hover:text-link-hover"
                            on:click=move |_| switch_to(AuthMode::Register)
                        >
                            "No account yet? Register"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
