// ============================================================================
// WALLET SERVICE - Sesión NEAR Wallet (SessionProvider del navegador)
// ============================================================================

use async_trait::async_trait;
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::config::NearConfig;
use crate::error::AppError;
use crate::services::SessionProvider;
use crate::utils::near_ffi::{self, BrowserLocalStorageKeyStore, ConnectedWalletAccount, WalletConnection};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConnectOptions<'a> {
    network_id: &'a str,
    node_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    wallet_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    helper_url: Option<&'a str>,
    headers: serde_json::Map<String, serde_json::Value>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInOptions<'a> {
    contract_id: &'a str,
}

/// Sesión respaldada por `nearApi.WalletConnection`
#[derive(Clone)]
pub struct WalletSession {
    wallet: WalletConnection,
    contract_name: String,
    /// Clave de localStorage donde near-api-js guarda `{accountId, allKeys}`
    auth_key: String,
}

impl WalletSession {
    /// Conectar con la red configurada y abrir la WalletConnection
    pub async fn connect(config: &NearConfig) -> Result<Self, AppError> {
        if !near_ffi::near_api_loaded() {
            return Err(AppError::Wallet("nearApi is not loaded".to_string()));
        }

        let options = ConnectOptions {
            network_id: &config.network_id,
            node_url: &config.node_url,
            wallet_url: config.wallet_url.as_deref(),
            helper_url: config.helper_url.as_deref(),
            headers: serde_json::Map::new(),
        };
        let js_options = near_ffi::to_js_object(&options).map_err(|e| AppError::from_js("connect options", &e))?;

        let key_store = BrowserLocalStorageKeyStore::new();
        js_sys::Reflect::set(&js_options, &JsValue::from_str("keyStore"), &key_store)
            .map_err(|e| AppError::from_js("keyStore", &e))?;

        log::info!("🔌 [WALLET] Conectando a {} ({})", config.network_id, config.node_url);

        let near = JsFuture::from(near_ffi::near_connect(&js_options))
            .await
            .map_err(|e| AppError::from_js("nearApi.connect", &e))?;

        // Prefijo explícito = nombre del contrato, para conocer la clave de auth
        let wallet = WalletConnection::new(&near, &JsValue::from_str(&config.contract_name));

        Ok(Self {
            wallet,
            contract_name: config.contract_name.clone(),
            auth_key: auth_storage_key(&config.contract_name),
        })
    }

    /// La WalletConnection solo lee localStorage al construirse; un logout en
    /// otra pestaña borra la clave sin que ella se entere.
    fn auth_data_present(&self) -> bool {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(&self.auth_key).ok().flatten())
            .is_some()
    }

    /// Cuenta firmante para llamadas de cambio
    pub fn account(&self) -> ConnectedWalletAccount {
        self.wallet.account()
    }
}

#[async_trait(?Send)]
impl SessionProvider for WalletSession {
    fn is_signed_in(&self) -> bool {
        self.wallet.is_signed_in() && self.auth_data_present()
    }

    fn account_id(&self) -> Option<String> {
        self.wallet.get_account_id().filter(|id| !id.is_empty())
    }

    async fn request_sign_in(&self) -> Result<(), AppError> {
        log::info!("🔐 [WALLET] Solicitando login para contrato {}", self.contract_name);
        let options = near_ffi::to_js_object(&SignInOptions {
            contract_id: &self.contract_name,
        })
        .map_err(|e| AppError::from_js("sign-in options", &e))?;

        JsFuture::from(self.wallet.request_sign_in(&options))
            .await
            .map_err(|e| AppError::from_js("requestSignIn", &e))?;
        Ok(())
    }

    fn sign_out(&self) {
        log::info!("👋 [WALLET] Cerrando sesión");
        self.wallet.sign_out();
    }
}

pub fn auth_storage_key(app_key_prefix: &str) -> String {
    format!("{}_wallet_auth_key", app_key_prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_key_uses_contract_prefix() {
        assert_eq!(auth_storage_key("give-props.testnet"), "give-props.testnet_wallet_auth_key");
    }

    #[test]
    fn connect_options_skip_missing_urls() {
        let options = ConnectOptions {
            network_id: "local",
            node_url: "http://localhost:3030",
            wallet_url: None,
            helper_url: None,
            headers: serde_json::Map::new(),
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["networkId"], "local");
        assert_eq!(json["nodeUrl"], "http://localhost:3030");
        assert!(json.get("walletUrl").is_none());
        assert!(json.get("helperUrl").is_none());
    }
}
