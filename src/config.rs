use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Contrato por defecto si no se define CONTRACT_NAME
pub const DEFAULT_CONTRACT_NAME: &str = "give-props.testnet";

/// Entorno por defecto si no se define NEAR_ENV
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Configuración de red NEAR para un entorno
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearConfig {
    pub network_id: String,
    pub node_url: String,
    pub contract_name: String,
    pub wallet_url: Option<String>,
    pub helper_url: Option<String>,
    pub explorer_url: Option<String>,
}

impl NearConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Result<Self, AppError> {
        let environment = option_env!("NEAR_ENV").unwrap_or(DEFAULT_ENVIRONMENT);
        let contract_name = option_env!("CONTRACT_NAME").unwrap_or(DEFAULT_CONTRACT_NAME);
        Self::for_environment(environment, contract_name)
    }

    /// Mapear nombre de entorno a endpoints de red
    pub fn for_environment(environment: &str, contract_name: &str) -> Result<Self, AppError> {
        let config = match environment {
            "production" | "mainnet" => Self::hosted("mainnet", contract_name),
            "development" | "testnet" => Self::hosted("testnet", contract_name),
            "betanet" => Self::hosted("betanet", contract_name),
            "local" => Self {
                network_id: "local".to_string(),
                node_url: "http://localhost:3030".to_string(),
                contract_name: contract_name.to_string(),
                wallet_url: Some("http://localhost:4000/wallet".to_string()),
                helper_url: None,
                explorer_url: None,
            },
            "test" | "ci" => Self::shared_test("shared-test", "https://rpc.ci-testnet.near.org", contract_name),
            "ci-betanet" => {
                Self::shared_test("shared-test-staging", "https://rpc.ci-betanet.near.org", contract_name)
            }
            other => return Err(AppError::UnconfiguredEnvironment(other.to_string())),
        };
        Ok(config)
    }

    fn hosted(network: &str, contract_name: &str) -> Self {
        Self {
            network_id: network.to_string(),
            node_url: format!("https://rpc.{}.near.org", network),
            contract_name: contract_name.to_string(),
            wallet_url: Some(format!("https://wallet.{}.near.org", network)),
            helper_url: Some(format!("https://helper.{}.near.org", network)),
            explorer_url: Some(format!("https://explorer.{}.near.org", network)),
        }
    }

    fn shared_test(network_id: &str, node_url: &str, contract_name: &str) -> Self {
        Self {
            network_id: network_id.to_string(),
            node_url: node_url.to_string(),
            contract_name: contract_name.to_string(),
            wallet_url: None,
            helper_url: None,
            explorer_url: None,
        }
    }
}
