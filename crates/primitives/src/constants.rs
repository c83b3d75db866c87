//! Account abstraction (ERC-4337)-related constants

/// Entry point smart contract
pub mod entry_point {
    /// Address of the entry point smart contract
    pub const ADDRESS: &str = "0x5FF137D4b0FDCD49DcA30c7CF57E578a026d2789";
    /// Version of the entry point smart contract
    pub const VERSION: &str = "0.6.0";
}

/// Counterfactual wallet deployment
pub mod wallet {
    /// Default deployment index of the counterfactual wallet
    pub const DEFAULT_INDEX: u32 = 0;
}

/// Gas sponsorship (paymaster) service
pub mod sponsorship {
    /// JSON-RPC method of the sponsorship endpoint
    pub const METHOD: &str = "pm_sponsorUserOperation";
    /// Fixed request id sent with every sponsorship request
    pub const REQUEST_ID: u64 = 1234;
    /// JSON-RPC protocol version
    pub const JSONRPC_VERSION: &str = "2.0";
}

/// Backend node service
pub mod backend {
    /// Route of the chain configuration endpoint
    pub const CHAINS_ROUTE: &str = "/v1/chains/";
}
