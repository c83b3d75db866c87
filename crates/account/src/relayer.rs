use aegis_primitives::ChainId;
use async_trait::async_trait;
use ethers::types::{Address, Bytes, H256, U256};

/// A transaction handed off to an external relayer for broadcast
#[derive(Clone, Debug)]
pub struct RelayTransaction {
    /// Chain the transaction targets
    pub chain_id: ChainId,
    /// Recipient contract
    pub to: Address,
    /// Native token value
    pub value: U256,
    /// Encoded calldata
    pub data: Bytes,
}

/// A trait for handing signed transactions to a relayer network
///
/// The broadcast mechanics live entirely behind this seam; the account layer
/// only assigns and replaces the relayer reference.
#[async_trait]
pub trait RelayOp: Send + Sync + 'static {
    /// Relays the transaction and returns its hash
    async fn relay(&self, tx: RelayTransaction) -> eyre::Result<H256>;
}
