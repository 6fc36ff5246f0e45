use gloo::net::http::Request;
use shared::LogRequest;
use wasm_bindgen_futures::spawn_local;

const LOG_ENDPOINT: &str = "/api/logs";

/// Frontend logger. Messages go to the browser console and are forwarded to
/// the backend log sink without blocking the UI.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        gloo::console::debug!(format!("[{}] {}", component, message));
        Self::log("debug", message, Some(component.to_string()));
    }

    pub fn info_with_component(component: &str, message: &str) {
        gloo::console::log!(format!("[{}] {}", component, message));
        Self::log("info", message, Some(component.to_string()));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(format!("[{}] {}", component, message));
        Self::log("warn", message, Some(component.to_string()));
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(format!("[{}] {}", component, message));
        Self::log("error", message, Some(component.to_string()));
    }

    fn log(level: &str, message: &str, component: Option<String>) {
        let request = LogRequest {
            level: level.to_string(),
            message: message.to_string(),
            component,
        };

        spawn_local(async move {
            // The sink is best effort; a missing backend must not break the page
            if let Ok(req) = Request::post(LOG_ENDPOINT).json(&request) {
                let _ = req.send().await;
            }
        });
    }
}
