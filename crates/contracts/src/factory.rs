use crate::{error::ContractsError, gen::WalletFactoryAPI};
use ethers::{
    providers::Middleware,
    types::{Address, U256},
};
use std::sync::Arc;

/// Wrapper around the wallet factory contract
///
/// The factory derives the counterfactual wallet address for an owner and
/// deploys the wallet proxy on first use. Address derivation is a read-only
/// call whose result depends only on (owner, index) and the factory's
/// deployment logic.
#[derive(Clone, Debug)]
pub struct WalletFactory<M: Middleware + 'static> {
    eth_client: Arc<M>,
    address: Address,
    api: WalletFactoryAPI<M>,
}

impl<M: Middleware + 'static> WalletFactory<M> {
    pub fn new(eth_client: Arc<M>, address: Address) -> Self {
        let api = WalletFactoryAPI::new(address, eth_client.clone());
        Self { eth_client, address, api }
    }

    pub fn api(&self) -> &WalletFactoryAPI<M> {
        &self.api
    }

    pub fn eth_client(&self) -> Arc<M> {
        self.eth_client.clone()
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Derives the counterfactual wallet address for (owner, index)
    pub async fn get_address_for_counterfactual_wallet(
        &self,
        owner: Address,
        index: u32,
    ) -> Result<Address, ContractsError> {
        self.api
            .get_address_for_counterfactual_wallet(owner, U256::from(index))
            .call()
            .await
            .map_err(ContractsError::from_contract_error)
    }

    /// Checks whether the factory has already deployed the given wallet
    pub async fn is_wallet_exist(&self, wallet: Address) -> Result<bool, ContractsError> {
        self.api
            .is_wallet_exist(wallet)
            .call()
            .await
            .map_err(ContractsError::from_contract_error)
    }
}
