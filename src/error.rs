// ============================================================================
// ERRORS - Errores de servicios y del controlador
// ============================================================================

use wasm_bindgen::JsValue;

/// Error común de la app (servicios, config, controlador)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    /// Panic del contrato devuelto por el nodo
    #[error("Contract error: {0}")]
    Contract(String),

    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Montaje, render o listeners del DOM
    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("A submission is already in progress")]
    SubmitInProgress,

    #[error("Unconfigured environment '{0}'. Can be configured in src/config.rs.")]
    UnconfiguredEnvironment(String),
}

impl AppError {
    /// Convertir un error JS (promesa rechazada, excepción) en error de wallet
    pub fn from_js(context: &str, value: &JsValue) -> Self {
        AppError::Wallet(js_detail(context, value))
    }

    /// Fallo al montar/pintar la app o registrar listeners
    pub fn from_dom(context: &str, value: &JsValue) -> Self {
        AppError::Dom(js_detail(context, value))
    }
}

fn js_detail(context: &str, value: &JsValue) -> String {
    let detail = value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value));
    format!("{}: {}", context, detail)
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}
