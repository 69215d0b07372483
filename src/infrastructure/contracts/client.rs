use std::sync::Arc;

use ethers::{
    abi::Abi,
    contract::{Contract, ContractCall},
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::{Address, U256},
    utils::to_checksum,
};
use tracing::{error, info};

use crate::domain::models::{CampaignSummary, SpendingRequest};
use crate::infrastructure::contracts::artifacts::{load_campaign_artifact, load_factory_artifact};
use crate::infrastructure::contracts::types::{ContractError, NetworkConfig, TransactionOutcome};

pub type SignerClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Raw getSummary() return: (minimum contribution, balance, request count,
/// approver count, manager)
type SummaryTuple = (U256, U256, U256, U256, Address);

/// Raw requests(index) return: (description, value, recipient, complete,
/// approval count)
type RequestTuple = (String, U256, Address, bool, U256);

/// The deployed contract spells it this way; keep the wire name verbatim.
const FINALIZE_METHOD: &str = "finaliseRequest";

/// Signing chain client used for state-changing calls.
#[derive(Clone)]
pub struct ChainClient {
    client: Arc<SignerClient>,
    network: NetworkConfig,
    sender: Address,
    factory: Contract<SignerClient>,
    campaign_abi: Abi,
}

/// Provider-only chain client used by read routes during page data fetch.
#[derive(Clone)]
pub struct ReadOnlyChainClient {
    provider: Arc<Provider<Http>>,
    factory: Contract<Provider<Http>>,
    campaign_abi: Abi,
}

impl ChainClient {
    pub async fn new(
        rpc_url: String,
        private_key: String,
        network: NetworkConfig,
        factory_address: Address,
    ) -> Result<Self, ContractError> {
        let provider = Provider::<Http>::try_from(&rpc_url)
            .map_err(|e| ContractError::RpcError(e.to_string()))?;

        let wallet = private_key
            .parse::<LocalWallet>()
            .map_err(|e| ContractError::MissingConfig(format!("invalid private key: {}", e)))?
            .with_chain_id(network.chain_id);
        let sender = wallet.address();

        let client = Arc::new(SignerMiddleware::new(provider, wallet));

        let factory_artifact = load_factory_artifact()?;
        let campaign_artifact = load_campaign_artifact()?;

        let factory = Contract::new(factory_address, factory_artifact.abi, client.clone());

        Ok(Self {
            client,
            network,
            sender,
            factory,
            campaign_abi: campaign_artifact.abi,
        })
    }

    /// Typed handle to a deployed campaign at the given address.
    pub fn campaign(&self, address: Address) -> Contract<SignerClient> {
        Contract::new(address, self.campaign_abi.clone(), self.client.clone())
    }

    pub fn sender(&self) -> Address {
        self.sender
    }

    // ============ WRITE OPERATIONS ============

    /// Create a new campaign through the factory.
    pub async fn create_campaign(
        &self,
        minimum_contribution: U256,
    ) -> Result<TransactionOutcome, ContractError> {
        let call = self
            .factory
            .method::<_, ()>("createCampaign", minimum_contribution)
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?;
        self.submit(call, "createCampaign").await
    }

    /// Contribute `amount` wei to a campaign.
    pub async fn contribute(
        &self,
        campaign: Address,
        amount: U256,
    ) -> Result<TransactionOutcome, ContractError> {
        let call = self
            .campaign(campaign)
            .method::<_, ()>("contribute", ())
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?
            .value(amount);
        self.submit(call, "contribute").await
    }

    /// Propose a spending request on a campaign.
    pub async fn create_request(
        &self,
        campaign: Address,
        description: String,
        value: U256,
        recipient: Address,
    ) -> Result<TransactionOutcome, ContractError> {
        let call = self
            .campaign(campaign)
            .method::<_, ()>("createRequest", (description, value, recipient))
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?;
        self.submit(call, "createRequest").await
    }

    /// Cast an approval vote on a spending request.
    pub async fn approve_request(
        &self,
        campaign: Address,
        index: u64,
    ) -> Result<TransactionOutcome, ContractError> {
        let call = self
            .campaign(campaign)
            .method::<_, ()>("approveRequest", U256::from(index))
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?;
        self.submit(call, "approveRequest").await
    }

    /// Finalize a spending request, transferring its value to the recipient.
    pub async fn finalize_request(
        &self,
        campaign: Address,
        index: u64,
    ) -> Result<TransactionOutcome, ContractError> {
        let call = self
            .campaign(campaign)
            .method::<_, ()>(FINALIZE_METHOD, U256::from(index))
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?;
        self.submit(call, FINALIZE_METHOD).await
    }

    // ============ PREFLIGHT READS ============

    pub async fn spending_request(
        &self,
        campaign: Address,
        index: u64,
    ) -> Result<SpendingRequest, ContractError> {
        let raw: RequestTuple = self
            .campaign(campaign)
            .method::<_, RequestTuple>("requests", U256::from(index))
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?
            .call()
            .await
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?;
        Ok(request_from_tuple(index, raw))
    }

    pub async fn request_count(&self, campaign: Address) -> Result<u64, ContractError> {
        let count: U256 = self
            .campaign(campaign)
            .method::<_, U256>("getRequestsCount", ())
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?
            .call()
            .await
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?;
        Ok(clamp_u64(count))
    }

    pub async fn approvers_count(&self, campaign: Address) -> Result<u64, ContractError> {
        let count: U256 = self
            .campaign(campaign)
            .method::<_, U256>("approversCount", ())
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?
            .call()
            .await
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?;
        Ok(clamp_u64(count))
    }

    // ============ TRANSACTION SUBMISSION ============

    /// Single submission path for every state-changing call: send, await the
    /// receipt, treat a missing receipt or status 0 as failure, and return the
    /// outcome with an explorer link when the network has one.
    async fn submit(
        &self,
        call: ContractCall<SignerClient, ()>,
        operation: &str,
    ) -> Result<TransactionOutcome, ContractError> {
        info!(operation, "submitting transaction");

        let pending_tx = call
            .send()
            .await
            .map_err(|e| ContractError::TransactionError(e.to_string()))?;

        let receipt = pending_tx
            .await
            .map_err(|e| ContractError::TransactionError(e.to_string()))?
            .ok_or_else(|| ContractError::TransactionError("no transaction receipt".to_string()))?;

        if let Some(status) = receipt.status {
            if status == 0.into() {
                error!(operation, tx = ?receipt.transaction_hash, "transaction reverted");
                return Err(ContractError::TransactionError(format!(
                    "{} reverted on-chain",
                    operation
                )));
            }
        }

        let transaction_hash = format!("{:?}", receipt.transaction_hash);
        info!(operation, tx = %transaction_hash, "transaction confirmed");

        Ok(TransactionOutcome {
            explorer_url: self.network.explorer_tx_url(&transaction_hash),
            transaction_hash,
            block_number: receipt.block_number.unwrap_or_default().as_u64(),
        })
    }
}

impl ReadOnlyChainClient {
    pub fn new(rpc_url: String, factory_address: Address) -> Result<Self, ContractError> {
        let provider = Provider::<Http>::try_from(&rpc_url)
            .map_err(|e| ContractError::RpcError(e.to_string()))?;
        let provider = Arc::new(provider);

        let factory_artifact = load_factory_artifact()?;
        let campaign_artifact = load_campaign_artifact()?;

        let factory = Contract::new(factory_address, factory_artifact.abi, provider.clone());

        Ok(Self {
            provider,
            factory,
            campaign_abi: campaign_artifact.abi,
        })
    }

    /// Typed handle to a deployed campaign at the given address.
    pub fn campaign(&self, address: Address) -> Contract<Provider<Http>> {
        Contract::new(address, self.campaign_abi.clone(), self.provider.clone())
    }

    /// All campaign addresses the factory has deployed.
    pub async fn deployed_campaigns(&self) -> Result<Vec<Address>, ContractError> {
        self.factory
            .method::<_, Vec<Address>>("getDeployedCampaigns", ())
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?
            .call()
            .await
            .map_err(|e| ContractError::ContractCallError(e.to_string()))
    }

    /// Current on-chain summary snapshot of a campaign.
    pub async fn campaign_summary(
        &self,
        campaign: Address,
    ) -> Result<CampaignSummary, ContractError> {
        let raw: SummaryTuple = self
            .campaign(campaign)
            .method::<_, SummaryTuple>("getSummary", ())
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?
            .call()
            .await
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?;

        let (minimum_contribution, balance, request_count, approvers_count, manager) = raw;
        Ok(CampaignSummary {
            address: to_checksum(&campaign, None),
            minimum_contribution: minimum_contribution.to_string(),
            balance: balance.to_string(),
            request_count: clamp_u64(request_count),
            approvers_count: clamp_u64(approvers_count),
            manager: to_checksum(&manager, None),
        })
    }

    pub async fn request_count(&self, campaign: Address) -> Result<u64, ContractError> {
        let count: U256 = self
            .campaign(campaign)
            .method::<_, U256>("getRequestsCount", ())
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?
            .call()
            .await
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?;
        Ok(clamp_u64(count))
    }

    pub async fn approvers_count(&self, campaign: Address) -> Result<u64, ContractError> {
        let count: U256 = self
            .campaign(campaign)
            .method::<_, U256>("approversCount", ())
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?
            .call()
            .await
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?;
        Ok(clamp_u64(count))
    }

    /// Fetch every spending request as an unordered parallel batch of
    /// independent reads, one call per index.
    pub async fn spending_requests(
        &self,
        campaign: Address,
    ) -> Result<Vec<SpendingRequest>, ContractError> {
        let count = self.request_count(campaign).await?;
        let handle = self.campaign(campaign);
        let handle = &handle;

        let fetches = (0..count).map(|index| async move {
            let raw: RequestTuple = handle
                .method::<_, RequestTuple>("requests", U256::from(index))
                .map_err(|e| ContractError::ContractCallError(e.to_string()))?
                .call()
                .await
                .map_err(|e| ContractError::ContractCallError(e.to_string()))?;
            Ok::<_, ContractError>(request_from_tuple(index, raw))
        });

        futures::future::try_join_all(fetches).await
    }

    /// Whether an account has contributed at least the minimum.
    pub async fn is_approver(
        &self,
        campaign: Address,
        account: Address,
    ) -> Result<bool, ContractError> {
        self.campaign(campaign)
            .method::<_, bool>("approvers", account)
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?
            .call()
            .await
            .map_err(|e| ContractError::ContractCallError(e.to_string()))
    }

    /// Whether the configured node is reachable.
    pub async fn is_connected(&self) -> bool {
        self.provider.get_block_number().await.is_ok()
    }
}

fn request_from_tuple(index: u64, raw: RequestTuple) -> SpendingRequest {
    let (description, value, recipient, complete, approval_count) = raw;
    SpendingRequest {
        index,
        description,
        value: value.to_string(),
        recipient: to_checksum(&recipient, None),
        approval_count: clamp_u64(approval_count),
        complete,
    }
}

fn clamp_u64(value: U256) -> u64 {
    if value > U256::from(u64::MAX) {
        u64::MAX
    } else {
        value.as_u64()
    }
}
