use std::collections::HashMap;
use std::fs;

use ethers::types::Address;

use crate::infrastructure::contracts::artifacts::build_dir;
use crate::infrastructure::contracts::types::{ContractError, NativeCurrency, NetworkConfig};

/// Well-known first account of the local dev node (Anvil/Hardhat). Only ever
/// used as a fallback on chain 31337.
const LOCAL_DEV_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Name of the address file the deploy binary records.
pub const DEPLOYED_ADDRESSES_FILE: &str = "deployed_addresses.json";

/// Key the factory address is recorded under.
pub const FACTORY_CONTRACT_NAME: &str = "CampaignFactory";

/// Get the current network configuration from environment variables.
pub fn get_network_config() -> NetworkConfig {
    let chain_id = std::env::var("CHAIN_ID")
        .unwrap_or_else(|_| "31337".to_string())
        .parse::<u64>()
        .unwrap_or(31337);

    let rpc_url =
        std::env::var("RPC_URL").unwrap_or_else(|_| "http://localhost:8545".to_string());

    let explorer_url = std::env::var("EXPLORER_URL")
        .unwrap_or_else(|_| default_explorer_url(chain_id).to_string());

    NetworkConfig {
        chain_id,
        rpc_url,
        explorer_url,
        native_currency: NativeCurrency {
            name: "Ether".to_string(),
            symbol: "ETH".to_string(),
            decimals: 18,
        },
    }
}

fn default_explorer_url(chain_id: u64) -> &'static str {
    match chain_id {
        1 => "https://etherscan.io",
        11155111 => "https://sepolia.etherscan.io",
        // Local dev node has no explorer
        _ => "",
    }
}

/// Resolve the deployed factory address: explicit env var first, then the
/// address file written by the deploy binary.
pub fn get_factory_address() -> Result<Address, ContractError> {
    if let Ok(addr) = std::env::var("DEPLOYED_FACTORY_ADDRESS") {
        return addr
            .parse::<Address>()
            .map_err(|e| ContractError::InvalidAddress(format!("DEPLOYED_FACTORY_ADDRESS: {}", e)));
    }

    let path = build_dir().join(DEPLOYED_ADDRESSES_FILE);
    let content = fs::read_to_string(&path).map_err(|_| {
        ContractError::MissingConfig(format!(
            "DEPLOYED_FACTORY_ADDRESS not set and no {} found. Run deployment first.",
            path.display()
        ))
    })?;

    let addresses: HashMap<String, String> = serde_json::from_str(&content).map_err(|e| {
        ContractError::MissingConfig(format!("failed to parse {}: {}", path.display(), e))
    })?;

    addresses
        .get(FACTORY_CONTRACT_NAME)
        .ok_or_else(|| {
            ContractError::MissingConfig(format!(
                "no {} entry in {}",
                FACTORY_CONTRACT_NAME,
                path.display()
            ))
        })?
        .parse::<Address>()
        .map_err(|e| ContractError::InvalidAddress(format!("{}: {}", FACTORY_CONTRACT_NAME, e)))
}

/// Get the signing key for write operations, with a fallback for the local
/// dev chain only.
pub fn get_private_key() -> Result<String, ContractError> {
    match std::env::var("PRIVATE_KEY") {
        Ok(key) => Ok(key),
        Err(_) => {
            let chain_id = get_network_config().chain_id;
            if chain_id == 31337 {
                Ok(LOCAL_DEV_PRIVATE_KEY.to_string())
            } else {
                Err(ContractError::MissingConfig(format!(
                    "PRIVATE_KEY environment variable not set. Required for chain ID: {}",
                    chain_id
                )))
            }
        }
    }
}
