use dioxus::logger::tracing::warn;
#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::error;

/// Shows `message` in a blocking dialog. Outside the browser it is only logged.
pub fn blocking_notice(message: &str) {
    warn!("Notice: {message}");
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            error!("No window to show notice in");
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            error!("Failed to show notice: {err:?}");
        }
    }
}
