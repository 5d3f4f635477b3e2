// ============================================================================
// SERVICES - Colaboradores externos (wallet, contrato, diálogos)
// ============================================================================
// El ViewController solo conoce estos traits; las implementaciones del
// navegador viven en los submódulos.
// ============================================================================

pub mod alert_service;
pub mod contract_service;
pub mod rpc_client;
pub mod wallet_service;

pub use alert_service::BrowserAlerts;
pub use contract_service::NearContract;
pub use rpc_client::RpcClient;
pub use wallet_service::WalletSession;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{GivePropsArgs, PropRecord};

/// Estado de autenticación (solo lectura para la UI)
#[async_trait(?Send)]
pub trait SessionProvider {
    fn is_signed_in(&self) -> bool;

    fn account_id(&self) -> Option<String>;

    /// Flujo de login (normalmente redirige a la wallet)
    async fn request_sign_in(&self) -> Result<(), AppError>;

    fn sign_out(&self);
}

/// Proxy del contrato que guarda los props
#[async_trait(?Send)]
pub trait RecordStore {
    async fn get_recent_props(&self) -> Result<Vec<PropRecord>, AppError>;

    async fn give_props(&self, args: GivePropsArgs) -> Result<(), AppError>;
}

/// Diálogo bloqueante para el usuario
pub trait Alerts {
    fn alert(&self, message: &str);
}
