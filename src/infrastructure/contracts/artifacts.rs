use std::fs;
use std::path::PathBuf;

use ethers::abi::Abi;
use ethers::types::Bytes;
use serde_json::Value;

use crate::infrastructure::contracts::types::ContractError;

/// A compiled contract interface descriptor as written by the compile step:
/// the ABI, plus deployment bytecode for contracts that get deployed directly.
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub name: String,
    pub abi: Abi,
    pub bytecode: Option<Bytes>,
}

/// Directory the compile step writes artifacts into.
pub fn build_dir() -> PathBuf {
    std::env::var("CONTRACT_BUILD_DIR")
        .unwrap_or_else(|_| "build".to_string())
        .into()
}

pub fn load_factory_artifact() -> Result<ContractArtifact, ContractError> {
    load_artifact("CampaignFactory")
}

pub fn load_campaign_artifact() -> Result<ContractArtifact, ContractError> {
    load_artifact("Campaign")
}

fn load_artifact(name: &str) -> Result<ContractArtifact, ContractError> {
    let path = build_dir().join(format!("{}.json", name));
    let content = fs::read_to_string(&path).map_err(|e| {
        ContractError::ArtifactError(format!("failed to read {}: {}", path.display(), e))
    })?;

    let artifact: Value = serde_json::from_str(&content).map_err(|e| {
        ContractError::ArtifactError(format!("failed to parse {}: {}", path.display(), e))
    })?;

    let abi_value = artifact
        .get("abi")
        .ok_or_else(|| ContractError::ArtifactError(format!("{} has no abi section", name)))?;
    let abi: Abi = serde_json::from_value(abi_value.clone())
        .map_err(|e| ContractError::ArtifactError(format!("invalid abi in {}: {}", name, e)))?;

    let bytecode = artifact
        .get("evm")
        .and_then(|evm| evm.get("bytecode"))
        .and_then(|bytecode| bytecode.get("object"))
        .and_then(|object| object.as_str())
        .filter(|hex_str| !hex_str.is_empty())
        .map(parse_bytecode)
        .transpose()?;

    Ok(ContractArtifact {
        name: name.to_string(),
        abi,
        bytecode,
    })
}

fn parse_bytecode(hex_str: &str) -> Result<Bytes, ContractError> {
    let stripped = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    let bytes = hex::decode(stripped)
        .map_err(|e| ContractError::ArtifactError(format!("invalid bytecode hex: {}", e)))?;
    Ok(Bytes::from(bytes))
}
