use wasm_bindgen_futures::spawn_local;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting Aurum frontend");

    // Resolve the API base URL before mounting so the first fetch does
    // not race the config load.
    spawn_local(async {
        aurum_frontend::config::init().await;
        log::info!("Runtime config initialized");
        aurum_frontend::mount_app();
    });
}
