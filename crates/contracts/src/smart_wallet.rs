use crate::{error::ContractsError, gen::SmartWalletAPI};
use ethers::{
    providers::Middleware,
    types::{Address, U256},
};
use std::sync::Arc;

/// Wrapper around the base wallet contract
#[derive(Clone, Debug)]
pub struct SmartWallet<M: Middleware + 'static> {
    eth_client: Arc<M>,
    address: Address,
    api: SmartWalletAPI<M>,
}

impl<M: Middleware + 'static> SmartWallet<M> {
    pub fn new(eth_client: Arc<M>, address: Address) -> Self {
        let api = SmartWalletAPI::new(address, eth_client.clone());
        Self { eth_client, address, api }
    }

    pub fn api(&self) -> &SmartWalletAPI<M> {
        &self.api
    }

    pub fn eth_client(&self) -> Arc<M> {
        self.eth_client.clone()
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Owner (EOA) of the wallet
    pub async fn get_owner(&self) -> Result<Address, ContractsError> {
        self.api.owner().call().await.map_err(ContractsError::from_contract_error)
    }

    /// Entry point the wallet currently trusts
    pub async fn get_entry_point(&self) -> Result<Address, ContractsError> {
        self.api.entry_point().call().await.map_err(ContractsError::from_contract_error)
    }

    /// Nonce of the wallet for the given batch
    pub async fn get_nonce(&self, batch_id: U256) -> Result<U256, ContractsError> {
        self.api.get_nonce(batch_id).call().await.map_err(ContractsError::from_contract_error)
    }
}
