use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Fallback when neither a window global nor `./config.json` names the
/// backend.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::RuntimeConfig;

    fn read_global(global: &str, keys: [&str; 2]) -> Option<String> {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        for key in keys {
            if let Ok(val) = js_sys::Reflect::get(&obj, &key.into()) {
                if let Some(text) = val.as_string() {
                    return Some(text);
                }
            }
        }
        None
    }

    /// `window.__AURUM_ENV = { API_BASE_URL: "..." }` (env.js) takes
    /// precedence over `window.__AURUM_CONFIG = { api_base_url: "..." }`.
    pub fn snapshot() -> Option<String> {
        read_global("__AURUM_ENV", ["API_BASE_URL", "api_base_url"])
            .or_else(|| read_global("__AURUM_CONFIG", ["api_base_url", "API_BASE_URL"]))
    }

    /// Mirrors a fetched config back onto the window so later page loads
    /// can resolve without refetching.
    pub fn publish(cfg: &RuntimeConfig) {
        let url = match &cfg.api_base_url {
            Some(url) => url,
            None => return,
        };
        let w = match web_sys::window() {
            Some(win) => win,
            None => return,
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
        let _ = js_sys::Reflect::set(&w, &"__AURUM_CONFIG".into(), &obj);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod globals {
    use super::RuntimeConfig;

    pub fn snapshot() -> Option<String> {
        None
    }

    pub fn publish(_cfg: &RuntimeConfig) {}
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = globals::snapshot() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        globals::publish(&cfg);
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
