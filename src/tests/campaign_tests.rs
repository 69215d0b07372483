use std::sync::Arc;

use ethers::{
    contract::ContractFactory,
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::Address,
    utils::{format_ether, parse_ether},
};

use crate::application::services::{CampaignService, ReadOnlyCampaignService};
use crate::domain::lifecycle::RequestState;
use crate::infrastructure::contracts::artifacts::load_factory_artifact;
use crate::infrastructure::contracts::client::ReadOnlyChainClient;
use crate::infrastructure::contracts::config::get_private_key;
use crate::infrastructure::contracts::types::{NativeCurrency, NetworkConfig};

/// Well-known second account of the local dev node, used as a request
/// recipient so balance changes are observable.
pub const RECIPIENT: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

/// Test configuration and setup
pub struct TestConfig {
    pub rpc_url: String,
    pub private_key: String,
    pub chain_id: u64,
}

impl TestConfig {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let rpc_url =
            std::env::var("RPC_URL").unwrap_or_else(|_| "http://localhost:8545".to_string());
        let chain_id = std::env::var("CHAIN_ID")
            .unwrap_or_else(|_| "31337".to_string())
            .parse::<u64>()?;
        let private_key = get_private_key()?;

        Ok(Self {
            rpc_url,
            private_key,
            chain_id,
        })
    }

    pub fn network(&self) -> NetworkConfig {
        NetworkConfig {
            chain_id: self.chain_id,
            rpc_url: self.rpc_url.clone(),
            explorer_url: "".to_string(),
            native_currency: NativeCurrency {
                name: "Ether".to_string(),
                symbol: "ETH".to_string(),
                decimals: 18,
            },
        }
    }
}

/// A freshly deployed factory plus one created campaign, mirroring the
/// fixture every scenario below starts from.
pub struct TestHarness {
    pub config: TestConfig,
    pub factory_address: Address,
    pub campaign: String,
    pub service: CampaignService,
    pub reader: ReadOnlyCampaignService,
}

/// Deploy a fresh factory and create one campaign with the given minimum
/// contribution (in wei).
pub async fn setup_campaign(minimum: &str) -> Result<TestHarness, Box<dyn std::error::Error>> {
    let config = TestConfig::from_env()?;

    let artifact = load_factory_artifact()?;
    let bytecode = artifact
        .bytecode
        .ok_or("factory artifact has no deployment bytecode; run the compile step first")?;

    let provider = Provider::<Http>::try_from(&config.rpc_url)?;
    let wallet = config
        .private_key
        .parse::<LocalWallet>()?
        .with_chain_id(config.chain_id);
    let client = Arc::new(SignerMiddleware::new(provider, wallet));

    let factory = ContractFactory::new(artifact.abi, bytecode, client);
    let deployed = factory.deploy(())?.send().await?;
    let factory_address = deployed.address();

    let service =
        CampaignService::new(config.network(), factory_address, config.private_key.clone()).await?;
    let reader = ReadOnlyCampaignService::new(config.network(), factory_address)?;

    service.create_campaign(minimum).await?;

    let campaigns = reader.deployed_campaigns().await?;
    let campaign = campaigns
        .first()
        .ok_or("factory reports no deployed campaigns")?
        .clone();

    Ok(TestHarness {
        config,
        factory_address,
        campaign,
        service,
        reader,
    })
}

/// Both the factory and a created campaign have non-empty addresses.
pub async fn test_deploys_factory_and_campaign() -> Result<(), Box<dyn std::error::Error>> {
    println!("Testing factory and campaign deployment...");

    let harness = setup_campaign("100").await?;

    assert_ne!(harness.factory_address, Address::zero());
    assert_ne!(harness.campaign.parse::<Address>()?, Address::zero());

    println!("   Factory: {:?}", harness.factory_address);
    println!("   Campaign: {}", harness.campaign);
    Ok(())
}

/// The account that creates a campaign is recorded as its manager.
pub async fn test_marks_caller_as_manager() -> Result<(), Box<dyn std::error::Error>> {
    println!("Testing manager assignment...");

    let harness = setup_campaign("100").await?;
    let summary = harness.reader.campaign_summary(&harness.campaign).await?;

    assert_eq!(summary.manager, harness.service.sender_address());

    println!("   Manager: {}", summary.manager);
    Ok(())
}

/// A contribution at or above the minimum records the sender as an approver.
pub async fn test_contribution_marks_approver() -> Result<(), Box<dyn std::error::Error>> {
    println!("Testing contribution above the minimum...");

    let harness = setup_campaign("100").await?;
    harness.service.contribute(&harness.campaign, "200").await?;

    let read_client =
        ReadOnlyChainClient::new(harness.config.rpc_url.clone(), harness.factory_address)?;
    let campaign = harness.campaign.parse::<Address>()?;
    let sender = harness.service.sender_address().parse::<Address>()?;

    assert!(read_client.is_approver(campaign, sender).await?);

    let summary = harness.reader.campaign_summary(&harness.campaign).await?;
    assert_eq!(summary.approvers_count, 1);

    println!("   Approver recorded, balance: {} wei", summary.balance);
    Ok(())
}

/// A contribution below the minimum is rejected by the contract.
pub async fn test_requires_minimum_contribution() -> Result<(), Box<dyn std::error::Error>> {
    println!("Testing contribution below the minimum...");

    let harness = setup_campaign("100").await?;
    let result = harness.service.contribute(&harness.campaign, "99").await;

    assert!(result.is_err(), "Below-minimum contribution must revert");

    println!("   Rejected as expected: {}", result.unwrap_err());
    Ok(())
}

/// A manager-submitted request is retrievable afterward with matching fields
/// at the expected index.
pub async fn test_manager_can_create_request() -> Result<(), Box<dyn std::error::Error>> {
    println!("Testing spending request creation...");

    let harness = setup_campaign("100").await?;
    harness
        .service
        .create_request(&harness.campaign, "Buy batteries".to_string(), "0", RECIPIENT)
        .await?;

    let listing = harness.reader.spending_requests(&harness.campaign).await?;
    assert_eq!(listing.request_count, 1);

    let view = &listing.requests[0];
    assert_eq!(view.request.index, 0);
    assert_eq!(view.request.description, "Buy batteries");
    assert_eq!(view.request.value, "0");
    assert_eq!(view.request.recipient, RECIPIENT);
    assert_eq!(view.request.approval_count, 0);
    assert!(!view.request.complete);

    println!("   Request 0: {}", view.request.description);
    Ok(())
}

/// End to end: contribute 10 ether, request 5 ether, approve, finalize; the
/// recipient's balance increases by 5 ether and the completion flag is set.
pub async fn test_request_flow_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    println!("Testing full request lifecycle...");

    let harness = setup_campaign("100").await?;
    let provider = Provider::<Http>::try_from(&harness.config.rpc_url)?;
    let recipient = RECIPIENT.parse::<Address>()?;

    harness
        .service
        .contribute(&harness.campaign, &parse_ether(10u64)?.to_string())
        .await?;

    harness
        .service
        .create_request(
            &harness.campaign,
            "Equipment purchase".to_string(),
            &parse_ether(5u64)?.to_string(),
            RECIPIENT,
        )
        .await?;

    let balance_before = provider.get_balance(recipient, None).await?;

    harness.service.approve_request(&harness.campaign, 0).await?;
    harness.service.finalize_request(&harness.campaign, 0).await?;

    let balance_after = provider.get_balance(recipient, None).await?;
    assert_eq!(
        balance_after - balance_before,
        parse_ether(5u64)?,
        "Recipient should receive exactly the requested value"
    );

    let listing = harness.reader.spending_requests(&harness.campaign).await?;
    let view = &listing.requests[0];
    assert!(view.request.complete);
    assert_eq!(view.state, RequestState::Finalized);

    println!(
        "   Recipient gained {} ETH",
        format_ether(balance_after - balance_before)
    );
    Ok(())
}

/// Re-approving or re-finalizing an already finalized request must fail.
pub async fn test_finalized_request_is_terminal() -> Result<(), Box<dyn std::error::Error>> {
    println!("Testing finalized request is terminal...");

    let harness = setup_campaign("100").await?;

    harness
        .service
        .contribute(&harness.campaign, &parse_ether(10u64)?.to_string())
        .await?;
    harness
        .service
        .create_request(
            &harness.campaign,
            "Equipment purchase".to_string(),
            &parse_ether(5u64)?.to_string(),
            RECIPIENT,
        )
        .await?;
    harness.service.approve_request(&harness.campaign, 0).await?;
    harness.service.finalize_request(&harness.campaign, 0).await?;

    let refinalize = harness.service.finalize_request(&harness.campaign, 0).await;
    assert!(refinalize.is_err(), "Re-finalizing must fail");

    let reapprove = harness.service.approve_request(&harness.campaign, 0).await;
    assert!(reapprove.is_err(), "Approving a finalized request must fail");

    println!("   Both rejected: {}", refinalize.unwrap_err());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lifecycle::request_state;
    use crate::domain::models::{SpendingRequest, SpendingRequestView};

    #[test]
    fn test_config_defaults() {
        let config = TestConfig::from_env().expect("default config should resolve");
        assert!(!config.rpc_url.is_empty());
        assert!(!config.private_key.is_empty());
    }

    #[test]
    fn test_request_view_serialization_flattens_fields() {
        let request = SpendingRequest {
            index: 0,
            description: "Buy batteries".to_string(),
            value: "500".to_string(),
            recipient: RECIPIENT.to_string(),
            approval_count: 3,
            complete: false,
        };
        let state = request_state(request.complete, request.approval_count, 4);
        let view = SpendingRequestView { request, state };

        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["description"], "Buy batteries");
        assert_eq!(value["state"], "quorum_reached");
    }
}
