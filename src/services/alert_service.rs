use crate::services::Alerts;

/// `window.alert()`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAlerts;

impl Alerts for BrowserAlerts {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(win) => {
                if let Err(e) = win.alert_with_message(message) {
                    log::error!("❌ [ALERT] No se pudo mostrar alerta: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [ALERT] Sin window, alerta descartada: {}", message),
        }
    }
}
