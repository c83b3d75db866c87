//! Smart account state and context records

use crate::utils::as_checksum_addr;
use ethers::types::Address;
use serde::{Deserialize, Serialize};

/// State of a smart account on one chain
///
/// The address is the counterfactual wallet address; `is_deployed` is a live
/// on-chain fact queried at composition time, never cached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountState {
    /// Counterfactual address of the wallet
    #[serde(serialize_with = "as_checksum_addr")]
    pub address: Address,

    /// Address of the owner (EOA)
    #[serde(serialize_with = "as_checksum_addr")]
    pub owner: Address,

    /// Whether the wallet contract is deployed on the chain
    pub is_deployed: bool,
}

/// Static per-chain contract context of a smart account
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountContext {
    /// Address of the entry point contract
    #[serde(serialize_with = "as_checksum_addr")]
    pub entry_point_address: Address,

    /// Address of the fallback handler contract
    #[serde(serialize_with = "as_checksum_addr")]
    pub fallback_handler_address: Address,
}
