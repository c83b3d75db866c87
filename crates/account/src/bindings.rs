use crate::adapter::ChainAdapter;
use aegis_contracts::{MultiSend, SmartWallet, WalletFactory};
use aegis_primitives::ChainConfig;
use ethers::providers::Middleware;

/// Per-chain handles to the wallet factory, base wallet, and multi-send
/// contracts
///
/// Derived deterministically from a chain adapter and the chain's
/// configuration record; recomputed only if the adapter is replaced.
#[derive(Clone, Debug)]
pub struct ContractBindings<M: Middleware + 'static> {
    pub factory: WalletFactory<M>,
    pub wallet: SmartWallet<M>,
    pub multi_send: MultiSend<M>,
}

impl<M: Middleware + 'static> ContractBindings<M> {
    pub fn from_chain_config(adapter: &ChainAdapter<M>, config: &ChainConfig) -> Self {
        let eth_client = adapter.eth_client();
        Self {
            factory: WalletFactory::new(eth_client.clone(), config.wallet_factory_address),
            wallet: SmartWallet::new(eth_client.clone(), config.wallet_address),
            multi_send: MultiSend::new(eth_client, config.multi_send_address),
        }
    }
}
