//! Chain metadata types
//!
//! Chain configuration records are served by the backend node service and
//! describe, per supported network, where the wallet contracts live and which
//! endpoints to talk to.

use crate::utils::as_checksum_addr;
use ethers::types::Address;
use serde::{Deserialize, Serialize};

/// Identifier of a supported network
pub type ChainId = u64;

/// Chain configuration record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    /// Chain id of the network
    pub chain_id: ChainId,

    /// Human-readable network name
    pub name: String,

    /// Native token symbol
    pub symbol: String,

    /// Whether the network is a layer 2
    pub is_l2: bool,

    /// Whether the network is a mainnet (as opposed to a testnet)
    pub is_mainnet: bool,

    /// Address of the wallet factory contract
    #[serde(serialize_with = "as_checksum_addr")]
    pub wallet_factory_address: Address,

    /// Address of the multi-send (batch call) contract
    #[serde(serialize_with = "as_checksum_addr")]
    pub multi_send_address: Address,

    /// Address of the base wallet implementation contract
    #[serde(serialize_with = "as_checksum_addr")]
    pub wallet_address: Address,

    /// Address of the entry point contract
    #[serde(serialize_with = "as_checksum_addr")]
    pub entry_point: Address,

    /// Address of the fallback handler contract
    #[serde(rename = "fallBackHandler", serialize_with = "as_checksum_addr")]
    pub fall_back_handler: Address,

    /// URL of the relayer service for this network
    #[serde(rename = "relayerURL")]
    pub relayer_url: String,

    /// URL of the JSON-RPC provider for this network
    pub provider_url: String,
}

/// Response envelope of the backend chains endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChainConfigResponse {
    pub message: String,
    pub code: u16,
    pub data: Vec<ChainConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_config_wire_format() {
        let json = serde_json::json!({
            "message": "Success",
            "code": 200,
            "data": [{
                "chainId": 80001,
                "name": "Polygon Mumbai",
                "symbol": "MATIC",
                "isL2": true,
                "isMainnet": false,
                "walletFactoryAddress": "0x050bca32264195976Fe00BcA566B548413A9E658",
                "multiSendAddress": "0x2f65bed438a30827d408b7c6818ec5a22c022dd1",
                "walletAddress": "0xEa6eEf40eaa8a642022f1697d6ed2fFC0Ffe5DFB",
                "entryPoint": "0xF05217199F1C25604c67993F11a81461Bc97F3Ab",
                "fallBackHandler": "0xF05217199F1C25604c67993F11a81461Bc97F3Ab",
                "relayerURL": "https://relayer.example.org/api/v1/relay",
                "providerUrl": "https://polygon-mumbai.example.org/rpc"
            }]
        });

        let res: ChainConfigResponse = serde_json::from_value(json).unwrap();
        assert_eq!(res.code, 200);
        assert_eq!(res.data.len(), 1);

        let config = &res.data[0];
        assert_eq!(config.chain_id, 80001);
        assert!(!config.is_mainnet);
        assert_eq!(
            config.wallet_factory_address,
            "0x050bca32264195976Fe00BcA566B548413A9E658".parse().unwrap()
        );

        // the fallback handler keeps its legacy wire casing
        let ser = serde_json::to_value(config).unwrap();
        assert!(ser.get("fallBackHandler").is_some());
        assert!(ser.get("relayerURL").is_some());
    }
}
