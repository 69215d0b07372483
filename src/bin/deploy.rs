//! Deploys the campaign factory: submits its constructor transaction using
//! the credentials and endpoint from the environment, prints the deployed
//! address, and records it for the service to pick up.

use std::collections::HashMap;
use std::fs;
use std::sync::Arc;

use dotenvy::dotenv;
use ethers::{
    contract::ContractFactory,
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    utils::to_checksum,
};

use crowdfund_backend::infrastructure::contracts::artifacts::{build_dir, load_factory_artifact};
use crowdfund_backend::infrastructure::contracts::config::{
    DEPLOYED_ADDRESSES_FILE, FACTORY_CONTRACT_NAME,
};

const DEPLOY_GAS_LIMIT: u64 = 1_000_000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let rpc_url =
        std::env::var("RPC_URL").map_err(|_| "RPC_URL environment variable not set")?;
    let private_key = std::env::var("DEPLOYER_PRIVATE_KEY")
        .map_err(|_| "DEPLOYER_PRIVATE_KEY environment variable not set")?;

    let artifact = load_factory_artifact()?;
    let bytecode = artifact
        .bytecode
        .ok_or("factory artifact has no deployment bytecode; run the compile step first")?;

    let provider = Provider::<Http>::try_from(&rpc_url)?;
    let chain_id = provider.get_chainid().await?.as_u64();

    let wallet = private_key.parse::<LocalWallet>()?.with_chain_id(chain_id);
    println!(
        "Attempting to deploy from account {}",
        to_checksum(&wallet.address(), None)
    );

    let client = Arc::new(SignerMiddleware::new(provider, wallet));
    let factory = ContractFactory::new(artifact.abi, bytecode, client);

    let mut deployer = factory.deploy(())?;
    deployer.tx.set_gas(DEPLOY_GAS_LIMIT);

    let contract = deployer.send().await?;
    let address = to_checksum(&contract.address(), None);
    println!("Contract deployed to {}", address);

    // Record the address so the service and later runs can find it
    let dir = build_dir();
    fs::create_dir_all(&dir)?;

    let mut addresses = HashMap::new();
    addresses.insert(FACTORY_CONTRACT_NAME.to_string(), address);

    let path = dir.join(DEPLOYED_ADDRESSES_FILE);
    fs::write(&path, serde_json::to_string_pretty(&addresses)?)?;
    println!("Recorded deployment in {}", path.display());

    Ok(())
}
