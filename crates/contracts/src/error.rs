use ethers::{prelude::ContractError, providers::Middleware};
use thiserror::Error;

/// Contract interaction errors
#[derive(Debug, Error, Clone)]
pub enum ContractsError {
    /// Provider error
    #[error("provider error: {inner}")]
    Provider {
        /// The inner error message
        inner: String,
    },

    /// Data decoding error
    #[error("decode error: {inner}")]
    Decode {
        /// The inner error message
        inner: String,
    },

    /// Contract call reverted
    #[error("execution reverted: {inner}")]
    Revert {
        /// The revert data
        inner: String,
    },

    /// Any other error
    #[error("other error: {inner}")]
    Other {
        /// The inner error message
        inner: String,
    },
}

impl ContractsError {
    /// Maps an ethers contract error into the wrapper error
    ///
    /// The contracts consumed here expose plain view/call entry points, so
    /// unlike an entry point simulation there is no revert-as-result protocol
    /// to decode; reverts are surfaced as-is.
    pub fn from_contract_error<M: Middleware + 'static>(err: ContractError<M>) -> Self {
        match err {
            ContractError::DecodingError(e) => ContractsError::Decode { inner: e.to_string() },
            ContractError::DetokenizationError(e) => {
                ContractsError::Decode { inner: e.to_string() }
            }
            ContractError::MiddlewareError { e } => {
                ContractsError::Provider { inner: e.to_string() }
            }
            ContractError::ProviderError { e } => ContractsError::Provider { inner: e.to_string() },
            ContractError::Revert(data) => ContractsError::Revert { inner: data.to_string() },
            _ => ContractsError::Other { inner: err.to_string() },
        }
    }
}
