use aegis_contracts::ContractsError;
use aegis_primitives::ChainId;
use thiserror::Error;

/// Smart account errors
#[derive(Debug, Error)]
pub enum AccountError {
    /// Initialization failed; no chain bindings were committed
    #[error("initialization failed: {inner}")]
    Initialization {
        /// The inner error message
        inner: String,
    },

    /// Query issued before `init` completed
    #[error("account is not initialized")]
    NotInitialized,

    /// Query for a chain that was never initialized
    #[error("chain {chain_id} is not supported by this account")]
    UnsupportedChain {
        /// The requested chain id
        chain_id: ChainId,
    },

    /// Contract interaction error
    #[error(transparent)]
    Contract(#[from] ContractsError),

    /// Provider error
    #[error("provider error: {inner}")]
    Provider {
        /// The inner error message
        inner: String,
    },

    /// Signer error
    #[error("signer error: {inner}")]
    Signer {
        /// The inner error message
        inner: String,
    },
}
