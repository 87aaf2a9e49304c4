use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::RecordsPanel;

#[component]
pub fn RecordsPage() -> impl IntoView {
    view! { <RecordsPanel /> }
}
