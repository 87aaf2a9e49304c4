/// Handle for a periodic callback.
///
/// The underlying browser interval is cancelled when the handle is
/// dropped, so a timer never outlives the view that started it. Off
/// wasm32 the handle is inert: server-side renders never tick.
pub struct RefreshTimer {
    #[cfg(target_arch = "wasm32")]
    _interval: gloo_timers::callback::Interval,
}

impl RefreshTimer {
    #[cfg(target_arch = "wasm32")]
    pub fn start<F>(interval_ms: u32, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Self {
            _interval: gloo_timers::callback::Interval::new(interval_ms, callback),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn start<F>(_interval_ms: u32, _callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Self {}
    }
}
