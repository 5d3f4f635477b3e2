// ============================================================================
// RPC CLIENT - SOLO COMUNICACIÓN JSON-RPC con el nodo NEAR (Stateless)
// ============================================================================
// Métodos view del contrato: `query` + `call_function`, sin firma
// ============================================================================

use base64ct::{Base64, Encoding};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// Cliente JSON-RPC - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct RpcClient {
    node_url: String,
}

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: &'static str,
    method: &'static str,
    params: CallFunctionParams<'a>,
}

#[derive(Debug, Serialize)]
struct CallFunctionParams<'a> {
    request_type: &'static str,
    finality: &'static str,
    account_id: &'a str,
    method_name: &'a str,
    args_base64: String,
}

/// Envelope de respuesta del nodo
#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<CallResult>,
    #[serde(default)]
    pub error: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct CallResult {
    /// Bytes del valor devuelto (JSON del contrato)
    #[serde(default)]
    pub result: Option<Vec<u8>>,
    /// Panic del contrato (nodos antiguos lo devuelven aquí)
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub logs: Vec<String>,
}

impl RpcClient {
    pub fn new(node_url: &str) -> Self {
        Self {
            node_url: node_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn node_url(&self) -> &str {
        &self.node_url
    }

    /// Llamar un método view y deserializar su resultado
    pub async fn call_view<A, T>(&self, contract_id: &str, method: &str, args: &A) -> Result<T, AppError>
    where
        A: Serialize,
        T: DeserializeOwned,
    {
        let body = build_view_request(contract_id, method, args)?;

        log::debug!("📡 [RPC] {}.{}()", contract_id, method);

        let response = Request::post(&self.node_url)
            .json(&body)
            .map_err(|e| AppError::Parse(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(AppError::Network(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let envelope = response
            .json::<RpcResponse>()
            .await
            .map_err(|e| AppError::Parse(e.to_string()))?;

        decode_view_result(envelope)
    }
}

fn build_view_request<'a, A: Serialize>(
    contract_id: &'a str,
    method: &'a str,
    args: &A,
) -> Result<RpcRequest<'a>, AppError> {
    let args_json = serde_json::to_vec(args)?;
    Ok(RpcRequest {
        jsonrpc: "2.0",
        id: "dontcare",
        method: "query",
        params: CallFunctionParams {
            request_type: "call_function",
            finality: "optimistic",
            account_id: contract_id,
            method_name: method,
            args_base64: Base64::encode_string(&args_json),
        },
    })
}

/// Extraer el valor de un `call_function` o el error que haya devuelto el nodo
pub fn decode_view_result<T: DeserializeOwned>(envelope: RpcResponse) -> Result<T, AppError> {
    if let Some(error) = envelope.error {
        return Err(AppError::Rpc(rpc_error_message(&error)));
    }

    let call = envelope
        .result
        .ok_or_else(|| AppError::Rpc("Empty response from node".to_string()))?;

    for line in &call.logs {
        log::debug!("📜 [RPC] log: {}", line);
    }

    if let Some(panic) = call.error {
        return Err(AppError::Contract(panic));
    }

    let bytes = call
        .result
        .ok_or_else(|| AppError::Rpc("Missing call result".to_string()))?;

    Ok(serde_json::from_slice(&bytes)?)
}

fn rpc_error_message(error: &Value) -> String {
    // `data` trae el detalle (p.ej. el panic del contrato), `message` es genérico
    error
        .get("data")
        .and_then(Value::as_str)
        .or_else(|| error.get("message").and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| error.to_string())
}
