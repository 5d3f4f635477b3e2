// ============================================================================
// NEAR FFI - Foreign Function Interface para near-api-js
// ============================================================================
// Solo wrappers para el global `nearApi` - Sin estado, sin lógica
// ============================================================================

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `nearApi.connect(config)` -> Promise<Near>
    #[wasm_bindgen(js_namespace = nearApi, js_name = connect)]
    pub fn near_connect(config: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(js_namespace = ["nearApi", "keyStores"])]
    #[derive(Clone, Debug)]
    pub type BrowserLocalStorageKeyStore;

    #[wasm_bindgen(constructor, js_namespace = ["nearApi", "keyStores"])]
    pub fn new() -> BrowserLocalStorageKeyStore;

    #[wasm_bindgen(js_namespace = nearApi)]
    #[derive(Clone, Debug)]
    pub type WalletConnection;

    /// `new nearApi.WalletConnection(near, appKeyPrefix)`
    #[wasm_bindgen(constructor, js_namespace = nearApi)]
    pub fn new(near: &JsValue, app_key_prefix: &JsValue) -> WalletConnection;

    #[wasm_bindgen(method, js_name = isSignedIn)]
    pub fn is_signed_in(this: &WalletConnection) -> bool;

    /// Vacío o undefined si no hay sesión
    #[wasm_bindgen(method, js_name = getAccountId)]
    pub fn get_account_id(this: &WalletConnection) -> Option<String>;

    /// Redirige a NEAR Wallet
    #[wasm_bindgen(method, js_name = requestSignIn)]
    pub fn request_sign_in(this: &WalletConnection, options: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(method, js_name = signOut)]
    pub fn sign_out(this: &WalletConnection);

    #[wasm_bindgen(method)]
    pub fn account(this: &WalletConnection) -> ConnectedWalletAccount;

    #[derive(Clone, Debug)]
    pub type ConnectedWalletAccount;

    /// `account.functionCall({ contractId, methodName, args })` -> Promise<FinalExecutionOutcome>
    #[wasm_bindgen(method, js_name = functionCall)]
    pub fn function_call(this: &ConnectedWalletAccount, options: &JsValue) -> js_sys::Promise;
}

/// Verificar que `window.nearApi` esté cargado antes de usar los bindings
pub fn near_api_loaded() -> bool {
    web_sys::window()
        .and_then(|win| js_sys::Reflect::get(&win, &JsValue::from_str("nearApi")).ok())
        .map(|api| !api.is_undefined() && !api.is_null())
        .unwrap_or(false)
}

/// Helper: serializar un struct a objeto JS plano.
/// `json_compatible` para que los mapas salgan como objetos y no como `Map`.
pub fn to_js_object<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}
