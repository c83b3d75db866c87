use crate::gen::MultiSendAPI;
use ethers::{
    providers::Middleware,
    types::{Address, Bytes, U256},
};
use std::sync::Arc;

/// Call type of a batched meta transaction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Operation {
    Call = 0,
    DelegateCall = 1,
}

/// One transaction inside a multi-send batch
#[derive(Clone, Debug)]
pub struct MetaTransaction {
    pub operation: Operation,
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
}

/// Encodes a batch of meta transactions into the packed multi-send layout
///
/// Each transaction is encoded as
/// `operation (1 byte) ++ to (20 bytes) ++ value (32 bytes) ++ data length (32 bytes) ++ data`,
/// and the encodings are concatenated without padding.
pub fn encode_multi_send(txs: &[MetaTransaction]) -> Bytes {
    let mut encoded = Vec::new();
    for tx in txs {
        encoded.push(tx.operation as u8);
        encoded.extend_from_slice(tx.to.as_bytes());

        let mut value = [0u8; 32];
        tx.value.to_big_endian(&mut value);
        encoded.extend_from_slice(&value);

        let mut len = [0u8; 32];
        U256::from(tx.data.len()).to_big_endian(&mut len);
        encoded.extend_from_slice(&len);

        encoded.extend_from_slice(&tx.data);
    }
    encoded.into()
}

/// Wrapper around the multi-send (batch call) contract
#[derive(Clone, Debug)]
pub struct MultiSend<M: Middleware + 'static> {
    eth_client: Arc<M>,
    address: Address,
    api: MultiSendAPI<M>,
}

impl<M: Middleware + 'static> MultiSend<M> {
    pub fn new(eth_client: Arc<M>, address: Address) -> Self {
        let api = MultiSendAPI::new(address, eth_client.clone());
        Self { eth_client, address, api }
    }

    pub fn api(&self) -> &MultiSendAPI<M> {
        &self.api
    }

    pub fn eth_client(&self) -> Arc<M> {
        self.eth_client.clone()
    }

    pub fn address(&self) -> Address {
        self.address
    }
}
