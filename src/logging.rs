//! Logging setup.
//!
//! Library code only emits `tracing` events. In the browser those reach the
//! devtools console through `tracing`'s `log` bridge and `console_log`;
//! natively a `tracing_subscriber` formatter prints them.

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

/// Install the process-wide logger. Safe to call more than once; later calls
/// keep the first logger.
pub fn init_logging() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("logger already installed: {e}").into());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        if tracing_subscriber::fmt().try_init().is_err() {
            tracing::debug!("tracing subscriber already installed");
        }
    }
}

/// Browser entry point. Pages build their `AppContext` after this runs.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    init_logging();
    tracing::info!("lovestory state ready");
}
