use super::{
    utils::{build_rows, RecordRow},
    view_model::use_records_view_model,
};
use crate::{
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    utils::format::{format_grams, format_inr},
};
use leptos::*;

#[component]
pub fn RecordsPanel() -> impl IntoView {
    let vm = use_records_view_model();
    let data_resource = vm.data_resource;

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <h2 class="text-lg font-medium text-fg">"My Gold Records"</h2>
            <div class="mt-4">
                {move || match data_resource.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Err(err)) => {
                        view! { <ErrorMessage message=err.to_string() /> }.into_view()
                    }
                    Some(Ok(data)) => {
                        let rows = build_rows(&data.user, &data.records);
                        if rows.is_empty() {
                            view! {
                                <EmptyState
                                    title="No conversions yet"
                                    description="Convert an amount on the converter page and it will show up here."
                                />
                            }
                                .into_view()
                        } else {
                            view! { <RecordsTable rows=rows /> }.into_view()
                        }
                    }
                }}
            </div>
        </div>
    }
}

#[component]
pub fn RecordsTable(rows: Vec<RecordRow>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table id="goldRecordsTable" class="min-w-full divide-y divide-border">
                <thead>
                    <tr>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"User ID"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Username"</th>
                        <th class="px-4 py-2 text-right text-xs font-medium text-fg-muted uppercase tracking-wider">"Price / gram"</th>
                        <th class="px-4 py-2 text-right text-xs font-medium text-fg-muted uppercase tracking-wider">"Amount"</th>
                        <th class="px-4 py-2 text-right text-xs font-medium text-fg-muted uppercase tracking-wider">"Gold (grams)"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <For
                        each=move || rows.clone()
                        key=|row| row.record_id
                        children=move |row| {
                            view! {
                                <tr>
                                    <td class="px-4 py-2 text-sm text-fg">{row.user_id}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{row.username.clone()}</td>
                                    <td class="px-4 py-2 text-sm text-fg text-right">{format_inr(row.gold_price_per_gram)}</td>
                                    <td class="px-4 py-2 text-sm text-fg text-right">{format_inr(row.amount_in_currency)}</td>
                                    <td class="px-4 py-2 text-sm text-fg text-right">{format_grams(row.calculated_gold)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn row(record_id: i64, amount: f64) -> RecordRow {
        RecordRow {
            record_id,
            user_id: 7,
            username: "alice".into(),
            gold_price_per_gram: 5000.0,
            amount_in_currency: amount,
            calculated_gold: amount / 5000.0,
        }
    }

    #[test]
    fn table_renders_rows_in_given_order_with_all_columns() {
        let html = render_to_string(move || {
            view! { <RecordsTable rows=vec![row(2, 1000.0), row(1, 250.0)] /> }
        });
        // A rupee figure renders twice per row (price and amount), so two
        // rows means four of them.
        assert_eq!(html.matches("₹").count(), 4);
        assert!(html.contains("alice"));
        assert!(html.contains("₹5000.00"));
        let first = html.find("₹1000.00").expect("first row amount");
        let second = html.find("₹250.00").expect("second row amount");
        assert!(first < second);
        assert!(html.contains("0.2000"));
        assert!(html.contains("0.0500"));
    }

    #[test]
    fn panel_shows_spinner_before_data_arrives() {
        let html = render_to_string(move || view! { <RecordsPanel /> });
        assert!(html.contains("animate-spin"));
    }
}
