//! Contract interfaces consumed by the smart account orchestration layer
//!
//! Typed wrappers around the wallet factory, the base wallet, and the
//! multi-send (batch call) contracts, built on ethers `abigen!` bindings.

mod error;
mod factory;
mod gen;
mod multi_send;
mod smart_wallet;

pub use error::ContractsError;
pub use factory::WalletFactory;
pub use gen::{
    ExecutionFailureFilter, ExecutionSuccessFilter, MultiSendAPI, SmartWalletAPI,
    WalletCreatedFilter, WalletFactoryAPI,
};
pub use multi_send::{encode_multi_send, MetaTransaction, MultiSend, Operation};
pub use smart_wallet::SmartWallet;
