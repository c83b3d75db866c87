use crate::{
    adapter::ChainAdapter,
    backend::{BackendClient, ChainInfoOp},
    bindings::ContractBindings,
    error::AccountError,
    relayer::RelayOp,
    resolver::AddressResolver,
};
use aegis_contracts::{MultiSend, SmartWallet, WalletFactory};
use aegis_primitives::{
    constants::wallet::DEFAULT_INDEX, provider::create_http_providers, AccountContext,
    AccountState, ChainConfig, ChainId, UserOperation, Wallet,
};
use ethers::{
    providers::{Http, Middleware, Provider},
    types::{Address, U256},
};
use std::{collections::HashMap, sync::Arc};
use tracing::{info, trace};

/// Configuration of a [SmartAccount]
///
/// `providers` is index-aligned with `supported_chain_ids`: element `i` of
/// each sequence refers to the same chain.
#[derive(Clone, Debug)]
pub struct SmartAccountConfig<M: Middleware + 'static> {
    /// Owner signer of the account
    pub owner: Wallet,
    /// Supported chains, in configuration order
    pub supported_chain_ids: Vec<ChainId>,
    /// One signer-capable provider per supported chain
    pub providers: Vec<Arc<M>>,
    /// Default chain for queries that do not name one
    pub active_chain_id: ChainId,
    /// Base URL of the backend node service
    pub backend_url: String,
}

/// Chain bindings of an initialized account, committed atomically by `init`
struct ChainBindings<M: Middleware + 'static> {
    adapters: HashMap<ChainId, ChainAdapter<M>>,
    contracts: HashMap<ChainId, ContractBindings<M>>,
    contexts: HashMap<ChainId, AccountContext>,
    chain_configs: HashMap<ChainId, ChainConfig>,
    owner: Address,
    address: Address,
}

/// Multi-chain smart contract account
///
/// Holds one adapter and one set of contract bindings per supported chain and
/// answers address/state/context queries against the active chain unless a
/// specific chain is requested.
///
/// The account has exactly two lifecycle states: *constructed* (configuration
/// stored, no chain bindings) and *initialized* (all chain bindings present,
/// owner and counterfactual address cached). Every query other than
/// [init](SmartAccount::init) requires the *initialized* state. Adding chains
/// after initialization is not supported; build a new account instead.
pub struct SmartAccount<M: Middleware + 'static, C: ChainInfoOp> {
    config: SmartAccountConfig<M>,
    node_client: Arc<C>,
    relayer: Option<Arc<dyn RelayOp>>,
    resolver: AddressResolver,
    bindings: Option<ChainBindings<M>>,
}

impl<M: Middleware + 'static, C: ChainInfoOp> std::fmt::Debug for SmartAccount<M, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmartAccount").finish_non_exhaustive()
    }
}

impl<M: Middleware + 'static> SmartAccount<M, BackendClient> {
    /// Creates an account in the *constructed* state, talking to the backend
    /// node service named by the configuration
    pub fn new(config: SmartAccountConfig<M>) -> Self {
        let node_client = Arc::new(BackendClient::new(&config.backend_url));
        Self::with_node_client(config, node_client)
    }
}

impl SmartAccount<Provider<Http>, BackendClient> {
    /// Convenience constructor wiring HTTP providers from RPC endpoints,
    /// index-aligned with the supported chain ids
    pub async fn connect(
        owner: Wallet,
        supported_chain_ids: Vec<ChainId>,
        rpc_urls: &[String],
        active_chain_id: ChainId,
        backend_url: &str,
    ) -> eyre::Result<Self> {
        let providers =
            create_http_providers(rpc_urls).await?.into_iter().map(Arc::new).collect();
        Ok(Self::new(SmartAccountConfig {
            owner,
            supported_chain_ids,
            providers,
            active_chain_id,
            backend_url: backend_url.into(),
        }))
    }
}

impl<M: Middleware + 'static, C: ChainInfoOp> SmartAccount<M, C> {
    /// Creates an account in the *constructed* state with an explicit chain
    /// metadata client
    pub fn with_node_client(config: SmartAccountConfig<M>, node_client: Arc<C>) -> Self {
        Self { config, node_client, relayer: None, resolver: AddressResolver::new(), bindings: None }
    }

    /// Initializes all configured chains, in configuration order
    ///
    /// For every (chain id, provider) pair this builds a chain adapter and its
    /// contract bindings, then resolves and caches the owner address and the
    /// counterfactual wallet address (index 0, active chain). Initialization
    /// is all-or-nothing: any failure leaves the account *constructed* with
    /// zero bindings.
    pub async fn init(&mut self) -> Result<&mut Self, AccountError> {
        let config = &self.config;

        if config.providers.len() != config.supported_chain_ids.len() {
            return Err(AccountError::Initialization {
                inner: format!(
                    "{} providers configured for {} chains",
                    config.providers.len(),
                    config.supported_chain_ids.len()
                ),
            });
        }
        if !config.supported_chain_ids.contains(&config.active_chain_id) {
            return Err(AccountError::Initialization {
                inner: format!(
                    "active chain {} is not among the supported chains",
                    config.active_chain_id
                ),
            });
        }

        let chain_configs = self.node_client.get_chain_info().await.map_err(|e| {
            AccountError::Initialization { inner: format!("chain metadata lookup failed: {e}") }
        })?;

        let mut adapters = HashMap::new();
        let mut contracts = HashMap::new();
        let mut contexts = HashMap::new();
        let mut stored_configs = HashMap::new();

        for (chain_id, provider) in
            config.supported_chain_ids.iter().zip(config.providers.iter())
        {
            let chain_config =
                chain_configs.iter().find(|c| c.chain_id == *chain_id).ok_or_else(|| {
                    AccountError::Initialization {
                        inner: format!("chain {chain_id} missing from backend configuration"),
                    }
                })?;

            let provider_chain = provider.get_chainid().await.map_err(|e| {
                AccountError::Initialization {
                    inner: format!("provider for chain {chain_id} unavailable: {e}"),
                }
            })?;
            if provider_chain != U256::from(*chain_id) {
                return Err(AccountError::Initialization {
                    inner: format!(
                        "provider reports chain {provider_chain}, expected {chain_id}"
                    ),
                });
            }

            let adapter = ChainAdapter::new(*chain_id, provider.clone(), &config.owner);
            let bindings = ContractBindings::from_chain_config(&adapter, chain_config);

            contexts.insert(
                *chain_id,
                AccountContext {
                    entry_point_address: chain_config.entry_point,
                    fallback_handler_address: chain_config.fall_back_handler,
                },
            );
            contracts.insert(*chain_id, bindings);
            adapters.insert(*chain_id, adapter);
            stored_configs.insert(*chain_id, chain_config.clone());

            trace!("initialized bindings for chain {chain_id}");
        }

        let owner = adapters[&config.active_chain_id].signer_address();
        let address = self
            .resolver
            .resolve(
                &contracts[&config.active_chain_id].factory,
                config.active_chain_id,
                owner,
                DEFAULT_INDEX,
            )
            .await
            .map_err(|e| AccountError::Initialization {
                inner: format!("counterfactual address resolution failed: {e}"),
            })?;

        info!(
            "smart account initialized: owner {owner:?}, address {address:?}, {} chains",
            adapters.len()
        );

        self.bindings = Some(ChainBindings {
            adapters,
            contracts,
            contexts,
            chain_configs: stored_configs,
            owner,
            address,
        });
        Ok(self)
    }

    fn chain_bindings(&self) -> Result<&ChainBindings<M>, AccountError> {
        self.bindings.as_ref().ok_or(AccountError::NotInitialized)
    }

    fn chain_or_active(&self, chain_id: Option<ChainId>) -> ChainId {
        chain_id.unwrap_or(self.config.active_chain_id)
    }

    /// Default chain for queries that do not name one
    pub fn active_chain_id(&self) -> ChainId {
        self.config.active_chain_id
    }

    /// Owner (EOA) address, cached during initialization
    pub fn owner(&self) -> Result<Address, AccountError> {
        Ok(self.chain_bindings()?.owner)
    }

    /// Counterfactual wallet address on the active chain, cached during
    /// initialization
    pub fn address(&self) -> Result<Address, AccountError> {
        Ok(self.chain_bindings()?.address)
    }

    /// Adapter used for blockchain interactions on the given chain
    pub fn ethers_adapter(
        &self,
        chain_id: Option<ChainId>,
    ) -> Result<&ChainAdapter<M>, AccountError> {
        let chain_id = self.chain_or_active(chain_id);
        self.chain_bindings()?
            .adapters
            .get(&chain_id)
            .ok_or(AccountError::UnsupportedChain { chain_id })
    }

    fn contract_bindings(
        &self,
        chain_id: Option<ChainId>,
    ) -> Result<&ContractBindings<M>, AccountError> {
        let chain_id = self.chain_or_active(chain_id);
        self.chain_bindings()?
            .contracts
            .get(&chain_id)
            .ok_or(AccountError::UnsupportedChain { chain_id })
    }

    /// Wallet factory contract binding for the given chain
    pub fn factory(&self, chain_id: Option<ChainId>) -> Result<&WalletFactory<M>, AccountError> {
        Ok(&self.contract_bindings(chain_id)?.factory)
    }

    /// Base wallet contract binding for the given chain
    pub fn smart_account(
        &self,
        chain_id: Option<ChainId>,
    ) -> Result<&SmartWallet<M>, AccountError> {
        Ok(&self.contract_bindings(chain_id)?.wallet)
    }

    /// Multi-send contract binding for the given chain
    pub fn multi_send(&self, chain_id: Option<ChainId>) -> Result<&MultiSend<M>, AccountError> {
        Ok(&self.contract_bindings(chain_id)?.multi_send)
    }

    /// Counterfactual wallet address for (owner, index) on the given chain
    ///
    /// The address is invariant for a fixed factory, so resolved values are
    /// cached and safe to reuse indefinitely.
    pub async fn get_address(
        &self,
        index: u32,
        chain_id: Option<ChainId>,
    ) -> Result<Address, AccountError> {
        let chain_id = self.chain_or_active(chain_id);
        let owner = self.owner()?;
        let factory = self.factory(Some(chain_id))?;
        self.resolver.resolve(factory, chain_id, owner, index).await
    }

    /// Whether the wallet contract is deployed on the given chain
    ///
    /// Issues a fresh code-existence query on every call.
    pub async fn is_deployed(&self, chain_id: Option<ChainId>) -> Result<bool, AccountError> {
        let chain_id = self.chain_or_active(chain_id);
        let address = self.get_address(DEFAULT_INDEX, Some(chain_id)).await?;
        self.ethers_adapter(Some(chain_id))?.is_contract_deployed(address).await
    }

    /// Composes the cached address and owner with a fresh deployment check
    pub async fn get_smart_account_state(
        &self,
        chain_id: Option<ChainId>,
    ) -> Result<AccountState, AccountError> {
        let bindings = self.chain_bindings()?;
        Ok(AccountState {
            address: bindings.address,
            owner: bindings.owner,
            is_deployed: self.is_deployed(chain_id).await?,
        })
    }

    /// Chain configuration record the given chain was initialized from
    pub fn get_chain_config(
        &self,
        chain_id: Option<ChainId>,
    ) -> Result<&ChainConfig, AccountError> {
        let chain_id = self.chain_or_active(chain_id);
        self.chain_bindings()?
            .chain_configs
            .get(&chain_id)
            .ok_or(AccountError::UnsupportedChain { chain_id })
    }

    /// Static contract context of the given chain; no network call
    pub fn get_smart_account_context(
        &self,
        chain_id: Option<ChainId>,
    ) -> Result<AccountContext, AccountError> {
        let chain_id = self.chain_or_active(chain_id);
        self.chain_bindings()?
            .contexts
            .get(&chain_id)
            .copied()
            .ok_or(AccountError::UnsupportedChain { chain_id })
    }

    /// Assigns a transaction relayer to this account
    ///
    /// Passing `None` leaves the current relayer untouched; this is an
    /// explicit idempotence guard, not an error.
    pub fn set_relayer(&mut self, relayer: Option<Arc<dyn RelayOp>>) -> &mut Self {
        if let Some(relayer) = relayer {
            self.relayer = Some(relayer);
        }
        self
    }

    /// The currently assigned relayer, if any
    pub fn relayer(&self) -> Option<Arc<dyn RelayOp>> {
        self.relayer.clone()
    }

    /// Signs the user operation with the owner key over the chain's entry
    /// point
    pub async fn sign_user_operation(
        &self,
        uo: &UserOperation,
        chain_id: Option<ChainId>,
    ) -> Result<UserOperation, AccountError> {
        let chain_id = self.chain_or_active(chain_id);
        let context = self.get_smart_account_context(Some(chain_id))?;
        let adapter = self.ethers_adapter(Some(chain_id))?;
        adapter
            .signer()
            .sign_uo(uo, &context.entry_point_address, chain_id)
            .await
            .map_err(|e| AccountError::Signer { inner: e.to_string() })
    }
}
