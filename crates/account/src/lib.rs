//! Multi-chain smart contract account orchestration
//!
//! A [SmartAccount] owns one chain adapter and one set of contract bindings
//! per supported chain, derives the counterfactual wallet address for its
//! owner, and answers account state/context queries against an active chain.

mod account;
mod adapter;
mod backend;
mod bindings;
mod error;
mod relayer;
mod resolver;

pub use account::{SmartAccount, SmartAccountConfig};
pub use adapter::ChainAdapter;
pub use backend::{BackendClient, ChainInfoOp};
pub use bindings::ContractBindings;
pub use error::AccountError;
pub use relayer::{RelayOp, RelayTransaction};
pub use resolver::AddressResolver;
