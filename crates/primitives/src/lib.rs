//! Smart contract account (ERC-4337) primitive types
//!
//! This crate contains the shared primitive types and helper functions of the Aegis SDK.

pub mod chain;
pub mod constants;
pub mod provider;
pub mod smart_account;
mod user_operation;
mod utils;
mod wallet;

pub use chain::{ChainConfig, ChainConfigResponse, ChainId};
pub use smart_account::{AccountContext, AccountState};
pub use user_operation::{
    NormalizeError, NormalizedUserOperation, UserOperation, UserOperationHash,
    UserOperationRequest,
};
pub use utils::as_checksum_addr;
pub use wallet::Wallet;
