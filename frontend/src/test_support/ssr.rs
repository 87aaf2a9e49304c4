use leptos::*;

/// Runs `f` inside a throwaway reactive runtime.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders a view to HTML on the host. Resource loading is suppressed so
/// components that fire requests on mount can still be snapshotted.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(move || view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}
