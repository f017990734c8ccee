use log::warn;

/// Shows a blocking browser alert. Outside the browser the message is only logged.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        match web_sys::window() {
            Some(window) => {
                if window.alert_with_message(message).is_err() {
                    warn!("alert could not be shown: {}", message);
                }
            }
            None => warn!("no window for alert: {}", message),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    warn!("alert: {}", message);
}
