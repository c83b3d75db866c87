use crate::error::AccountError;
use aegis_contracts::WalletFactory;
use aegis_primitives::ChainId;
use ethers::{providers::Middleware, types::Address};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::trace;

/// Resolves counterfactual wallet addresses through the factory contract
///
/// The derivation is a read-only call whose result is identical for identical
/// (owner, index, factory bytecode), so resolved addresses are memoized per
/// (chain, owner, index) for the lifetime of the resolver. Redeploying a
/// factory with different derivation logic is a configuration change, not a
/// runtime event.
#[derive(Debug, Default)]
pub struct AddressResolver {
    cache: RwLock<HashMap<(ChainId, Address, u32), Address>>,
}

impl AddressResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the counterfactual address for (owner, index) on the chain,
    /// querying the factory on the first call and the cache afterwards
    pub async fn resolve<M: Middleware + 'static>(
        &self,
        factory: &WalletFactory<M>,
        chain_id: ChainId,
        owner: Address,
        index: u32,
    ) -> Result<Address, AccountError> {
        if let Some(address) = self.cache.read().get(&(chain_id, owner, index)) {
            return Ok(*address);
        }

        let address = factory.get_address_for_counterfactual_wallet(owner, index).await?;
        trace!("resolved counterfactual address {address:?} for owner {owner:?} index {index} on chain {chain_id}");

        self.cache.write().insert((chain_id, owner, index), address);
        Ok(address)
    }
}
