// ============================================================================
// CONTRACT SERVICE - Proxy del contrato de props (RecordStore del navegador)
// ============================================================================
// View  -> JSON-RPC (sin firma)
// Change -> functionCall de la cuenta conectada en la wallet
// ============================================================================

use async_trait::async_trait;
use serde::Serialize;
use serde_json::json;
use wasm_bindgen_futures::JsFuture;

use crate::error::AppError;
use crate::models::{GivePropsArgs, PropRecord};
use crate::services::{RecordStore, RpcClient, WalletSession};
use crate::utils::near_ffi;
use crate::utils::{GET_RECENT_PROPS_METHOD, GIVE_PROPS_METHOD};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FunctionCallOptions<'a> {
    contract_id: &'a str,
    method_name: &'a str,
    args: &'a GivePropsArgs,
}

#[derive(Clone)]
pub struct NearContract {
    contract_id: String,
    rpc: RpcClient,
    wallet: WalletSession,
}

impl NearContract {
    pub fn new(contract_id: &str, rpc: RpcClient, wallet: WalletSession) -> Self {
        Self {
            contract_id: contract_id.to_string(),
            rpc,
            wallet,
        }
    }
}

#[async_trait(?Send)]
impl RecordStore for NearContract {
    async fn get_recent_props(&self) -> Result<Vec<PropRecord>, AppError> {
        let records: Vec<PropRecord> = self
            .rpc
            .call_view(&self.contract_id, GET_RECENT_PROPS_METHOD, &json!({}))
            .await?;
        log::info!("✅ [CONTRACT] {} props recientes", records.len());
        Ok(records)
    }

    async fn give_props(&self, args: GivePropsArgs) -> Result<(), AppError> {
        log::info!("🎁 [CONTRACT] giveProps -> {}", args.receiver);
        let options = near_ffi::to_js_object(&FunctionCallOptions {
            contract_id: &self.contract_id,
            method_name: GIVE_PROPS_METHOD,
            args: &args,
        })
        .map_err(|e| AppError::from_js("functionCall options", &e))?;

        JsFuture::from(self.wallet.account().function_call(&options))
            .await
            .map_err(|e| AppError::from_js(GIVE_PROPS_METHOD, &e))?;

        log::info!("✅ [CONTRACT] giveProps confirmado");
        Ok(())
    }
}
