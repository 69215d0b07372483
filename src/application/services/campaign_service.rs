use ethers::types::{Address, U256};
use ethers::utils::to_checksum;

use crate::domain::lifecycle;
use crate::domain::models::{CampaignSummary, RequestListing, SpendingRequest, SpendingRequestView};
use crate::infrastructure::contracts::client::{ChainClient, ReadOnlyChainClient};
use crate::infrastructure::contracts::config::get_private_key;
use crate::infrastructure::contracts::types::{ContractError, NetworkConfig, TransactionOutcome};

/// Service layer for state-changing campaign operations. Performs advisory
/// lifecycle preflight before submitting; the contract stays authoritative.
pub struct CampaignService {
    client: ChainClient,
}

/// Service layer for the read calls the pages are rendered from.
pub struct ReadOnlyCampaignService {
    client: ReadOnlyChainClient,
}

impl CampaignService {
    pub async fn new(
        network: NetworkConfig,
        factory_address: Address,
        private_key: String,
    ) -> Result<Self, ContractError> {
        let client = ChainClient::new(
            network.rpc_url.clone(),
            private_key,
            network,
            factory_address,
        )
        .await?;
        Ok(Self { client })
    }

    /// Create a service with the configured signing key.
    pub async fn new_with_auto_private_key(
        network: NetworkConfig,
        factory_address: Address,
    ) -> Result<Self, ContractError> {
        let private_key = get_private_key()?;
        Self::new(network, factory_address, private_key).await
    }

    pub fn sender_address(&self) -> String {
        to_checksum(&self.client.sender(), None)
    }

    pub async fn create_campaign(
        &self,
        minimum_contribution: &str,
    ) -> Result<TransactionOutcome, ContractError> {
        let minimum = parse_wei(minimum_contribution)?;
        self.client.create_campaign(minimum).await
    }

    pub async fn contribute(
        &self,
        campaign: &str,
        amount: &str,
    ) -> Result<TransactionOutcome, ContractError> {
        let campaign = parse_address(campaign)?;
        let amount = parse_wei(amount)?;
        self.client.contribute(campaign, amount).await
    }

    pub async fn create_request(
        &self,
        campaign: &str,
        description: String,
        value: &str,
        recipient: &str,
    ) -> Result<TransactionOutcome, ContractError> {
        let campaign = parse_address(campaign)?;
        let value = parse_wei(value)?;
        let recipient = parse_address(recipient)?;
        self.client
            .create_request(campaign, description, value, recipient)
            .await
    }

    pub async fn approve_request(
        &self,
        campaign: &str,
        index: u64,
    ) -> Result<TransactionOutcome, ContractError> {
        let campaign = parse_address(campaign)?;
        let request = self.checked_request(campaign, index).await?;
        if request.complete {
            return Err(ContractError::AlreadyFinalized { index });
        }
        self.client.approve_request(campaign, index).await
    }

    pub async fn finalize_request(
        &self,
        campaign: &str,
        index: u64,
    ) -> Result<TransactionOutcome, ContractError> {
        let campaign = parse_address(campaign)?;
        let request = self.checked_request(campaign, index).await?;
        if request.complete {
            return Err(ContractError::AlreadyFinalized { index });
        }

        let approvers_count = self.client.approvers_count(campaign).await?;
        if !lifecycle::quorum_reached(request.approval_count, approvers_count) {
            return Err(ContractError::QuorumNotReached {
                approvals: request.approval_count,
                approvers: approvers_count,
            });
        }

        self.client.finalize_request(campaign, index).await
    }

    async fn checked_request(
        &self,
        campaign: Address,
        index: u64,
    ) -> Result<SpendingRequest, ContractError> {
        let count = self.client.request_count(campaign).await?;
        if index >= count {
            return Err(ContractError::RequestNotFound { index });
        }
        self.client.spending_request(campaign, index).await
    }
}

impl ReadOnlyCampaignService {
    pub fn new(network: NetworkConfig, factory_address: Address) -> Result<Self, ContractError> {
        let client = ReadOnlyChainClient::new(network.rpc_url.clone(), factory_address)?;
        Ok(Self { client })
    }

    /// Campaign-list page data.
    pub async fn deployed_campaigns(&self) -> Result<Vec<String>, ContractError> {
        let addresses = self.client.deployed_campaigns().await?;
        Ok(addresses
            .iter()
            .map(|address| to_checksum(address, None))
            .collect())
    }

    /// Campaign-detail page data.
    pub async fn campaign_summary(&self, campaign: &str) -> Result<CampaignSummary, ContractError> {
        let campaign = parse_address(campaign)?;
        self.client.campaign_summary(campaign).await
    }

    /// Request-list page data, with the derived lifecycle state per request.
    pub async fn spending_requests(&self, campaign: &str) -> Result<RequestListing, ContractError> {
        let address = parse_address(campaign)?;

        let requests = self.client.spending_requests(address).await?;
        let approvers_count = self.client.approvers_count(address).await?;

        let requests: Vec<SpendingRequestView> = requests
            .into_iter()
            .map(|request| {
                let state = lifecycle::request_state(
                    request.complete,
                    request.approval_count,
                    approvers_count,
                );
                SpendingRequestView { request, state }
            })
            .collect();

        Ok(RequestListing {
            campaign: to_checksum(&address, None),
            request_count: requests.len() as u64,
            requests,
            approvers_count,
        })
    }

    pub async fn is_connected(&self) -> bool {
        self.client.is_connected().await
    }
}

fn parse_address(address: &str) -> Result<Address, ContractError> {
    address
        .parse::<Address>()
        .map_err(|e| ContractError::InvalidAddress(format!("{}: {}", address, e)))
}

fn parse_wei(amount: &str) -> Result<U256, ContractError> {
    U256::from_dec_str(amount).map_err(|e| ContractError::InvalidAmount(format!("{}: {}", amount, e)))
}
