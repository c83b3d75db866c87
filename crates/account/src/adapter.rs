use crate::error::AccountError;
use aegis_primitives::{ChainId, Wallet};
use alloy_chains::Chain;
use ethers::{providers::Middleware, signers::Signer, types::Address};
use std::sync::Arc;

/// One blockchain connection plus the owner signer, bound to a single chain
///
/// Adapters are created during account initialization and never mutated
/// afterwards; replacing a chain's connection means building a new adapter.
#[derive(Clone, Debug)]
pub struct ChainAdapter<M: Middleware + 'static> {
    chain: Chain,
    eth_client: Arc<M>,
    signer: Wallet,
}

impl<M: Middleware + 'static> ChainAdapter<M> {
    /// Builds an adapter for the chain, rebinding the owner signer to the
    /// chain id
    pub fn new(chain_id: ChainId, eth_client: Arc<M>, owner: &Wallet) -> Self {
        let signer = Wallet { signer: owner.signer.clone().with_chain_id(chain_id) };
        Self { chain: Chain::from_id(chain_id), eth_client, signer }
    }

    pub fn chain(&self) -> Chain {
        self.chain
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain.id()
    }

    pub fn eth_client(&self) -> Arc<M> {
        self.eth_client.clone()
    }

    pub fn signer(&self) -> &Wallet {
        &self.signer
    }

    /// Address of the owner signer
    pub fn signer_address(&self) -> Address {
        self.signer.address()
    }

    /// Fresh code-existence check at the given address
    ///
    /// Returns true iff the chain reports non-empty bytecode. Deployment
    /// status can change between calls, so the result is never cached.
    pub async fn is_contract_deployed(&self, address: Address) -> Result<bool, AccountError> {
        let code = self
            .eth_client
            .get_code(address, None)
            .await
            .map_err(|e| AccountError::Provider { inner: e.to_string() })?;
        Ok(!code.is_empty())
    }
}
