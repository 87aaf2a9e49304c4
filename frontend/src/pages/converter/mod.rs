use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::ConverterPanel;

#[component]
pub fn ConverterPage() -> impl IntoView {
    view! { <ConverterPanel /> }
}
