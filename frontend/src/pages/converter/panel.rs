use super::view_model::use_converter_view_model;
use crate::utils::format::format_inr;
use leptos::*;

#[component]
pub fn ConverterPanel() -> impl IntoView {
    let vm = use_converter_view_model();
    let quote = vm.quote;
    let price_error = vm.price_error;
    let amount = vm.amount;
    let result = vm.result;
    let on_convert = Callback::new(vm.handle_convert());

    view! {
        <div class="space-y-6">
            <div class="bg-surface-elevated shadow rounded-lg p-6">
                <h2 class="text-lg font-medium text-fg">"Live Gold Price"</h2>
                <div id="goldPrice" class="mt-2 text-2xl font-semibold text-fg">
                    {move || match (price_error.get(), quote.get()) {
                        (Some(err), _) => {
                            view! { <span class="text-status-error-text text-base">{err}</span> }
                                .into_view()
                        }
                        (None, Some(q)) => {
                            view! {
                                <span>{format!("{} INR / gram", format_inr(q.price_per_gram))}</span>
                                <span class="block text-xs font-normal text-fg-muted mt-1">
                                    {format!("Updated {}", q.fetched_at_label())}
                                </span>
                            }
                                .into_view()
                        }
                        (None, None) => {
                            view! { <span class="text-base text-fg-muted">"Fetching gold price..."</span> }
                                .into_view()
                        }
                    }}
                </div>
            </div>

            <div class="bg-surface-elevated shadow rounded-lg p-6">
                <h2 class="text-lg font-medium text-fg">"Convert INR to Gold"</h2>
                <form class="mt-4 flex gap-3" on:submit=move |ev| on_convert.call(ev)>
                    <label for="amount" class="sr-only">"Amount in INR"</label>
                    <input
                        id="amount"
                        name="amount"
                        type="number"
                        inputmode="decimal"
                        step="any"
                        class="flex-1 appearance-none rounded-md px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border sm:text-sm"
                        placeholder="Amount in INR"
                        prop:value=amount
                        on:input=move |ev| {
                            amount.set(event_target_value(&ev));
                        }
                    />
                    <button
                        type="submit"
                        class="inline-flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus"
                    >
                        "Convert"
                    </button>
                </form>
                <p id="goldAmount" class="mt-4 text-sm text-fg">
                    {move || result.get()}
                </p>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, stored_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn panel_renders_price_section_and_form() {
        let html = render_to_string(move || {
            provide_auth(Some(stored_session(1)));
            view! { <ConverterPanel /> }
        });
        assert!(html.contains("Live Gold Price"));
        assert!(html.contains("Fetching gold price..."));
        assert!(html.contains("amount"));
        assert!(html.contains("Convert"));
    }
}
