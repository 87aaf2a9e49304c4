//! Key/value access to browser `localStorage`.
//!
//! Off wasm32 (host tests, server-side renders) the same API is backed by
//! a thread-local map, so flows that read or write the session can run
//! under `cargo test` without a browser.

#[cfg(target_arch = "wasm32")]
mod backend {
    use web_sys::{Storage, Window};

    fn window() -> Result<Window, String> {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }

    fn local_storage() -> Result<Storage, String> {
        window()?
            .local_storage()
            .map_err(|_| "No localStorage".to_string())?
            .ok_or_else(|| "No localStorage".to_string())
    }

    pub fn get_item(key: &str) -> Result<Option<String>, String> {
        local_storage()?
            .get_item(key)
            .map_err(|_| format!("Failed to read '{key}' from localStorage"))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| format!("Failed to write '{key}' to localStorage"))
    }

    pub fn remove_item(key: &str) -> Result<(), String> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| format!("Failed to remove '{key}' from localStorage"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Result<Option<String>, String> {
        STORE.with(|store| Ok(store.borrow().get(key).cloned()))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        STORE.with(|store| {
            store
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        })
    }

    pub fn remove_item(key: &str) -> Result<(), String> {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
            Ok(())
        })
    }
}

pub use backend::{get_item, remove_item, set_item};
