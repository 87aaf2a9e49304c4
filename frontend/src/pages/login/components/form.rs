use leptos::{ev::SubmitEvent, *};

/// Username/password form shared by the login and register modes. The ids
/// differ per mode so autofill treats the two forms as distinct.
#[component]
pub fn CredentialsForm(
    username_id: &'static str,
    password_id: &'static str,
    submit_label: &'static str,
    pending_label: &'static str,
    username: RwSignal<String>,
    password: RwSignal<String>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
            <div class="rounded-md shadow-sm -space-y-px">
                <div>
                    <label for=username_id class="sr-only">"Username"</label>
                    <input
                        id=username_id
                        name="username"
                        type="text"
                        required
                        class="appearance-none rounded-none relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text rounded-t-md focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border focus:z-10 sm:text-sm"
                        placeholder="Username"
                        prop:value=username
                        on:input=move |ev| {
                            username.set(event_target_value(&ev));
                        }
                    />
                </div>
                <div>
                    <label for=password_id class="sr-only">"Password"</label>
                    <input
                        id=password_id
                        name="password"
                        type="password"
                        required
                        class="appearance-none rounded-none relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text rounded-b-md focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border focus:z-10 sm:text-sm"
                        placeholder="Password"
                        prop:value=password
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                        }
                    />
                </div>
            </div>

            <div>
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus disabled:opacity-50"
                >
                    {move || if pending.get() { pending_label } else { submit_label }}
                </button>
            </div>
        </form>
    }
}
