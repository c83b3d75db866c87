//! User operation request (optional fields) and its normalized wire form

use super::UserOperation;
use crate::utils::as_checksum_addr;
use ethers::types::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User operation with all gas fields being optional
///
/// This is the shape in which callers hand over partially built operations,
/// before gas estimation and sponsorship have filled in the blanks.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOperationRequest {
    #[serde(default = "Address::zero", serialize_with = "as_checksum_addr")]
    pub sender: Address,
    #[serde(default)]
    pub nonce: U256,
    #[serde(default)]
    pub init_code: Bytes,
    #[serde(default)]
    pub call_data: Bytes,
    #[serde(default)]
    pub call_gas_limit: Option<U256>,
    #[serde(default)]
    pub verification_gas_limit: Option<U256>,
    #[serde(default)]
    pub pre_verification_gas: Option<U256>,
    #[serde(default)]
    pub max_fee_per_gas: Option<U256>,
    #[serde(default)]
    pub max_priority_fee_per_gas: Option<U256>,
    #[serde(default)]
    pub paymaster_and_data: Bytes,
    #[serde(default)]
    pub signature: Option<Bytes>,
}

/// Error when normalizing a user operation request
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// A numeric field does not fit into the fixed-width wire representation
    #[error("{field} value {value} does not fit into 64 bits")]
    Overflow {
        /// Wire name of the offending field
        field: &'static str,
        /// The oversized value
        value: U256,
    },
}

/// User operation in the canonical unsigned form expected by the sponsorship
/// service
///
/// All numeric fields are fixed-width; `signature` and `paymaster_and_data`
/// are always the empty byte string, since the sponsor signs over the
/// unsigned operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedUserOperation {
    #[serde(serialize_with = "as_checksum_addr")]
    pub sender: Address,
    pub nonce: u64,
    pub init_code: Bytes,
    pub call_data: Bytes,
    pub call_gas_limit: u64,
    pub verification_gas_limit: u64,
    pub pre_verification_gas: u64,
    pub max_fee_per_gas: u64,
    pub max_priority_fee_per_gas: u64,
    pub paymaster_and_data: Bytes,
    pub signature: Bytes,
}

fn to_u64(field: &'static str, value: U256) -> Result<u64, NormalizeError> {
    if value > U256::from(u64::MAX) {
        return Err(NormalizeError::Overflow { field, value });
    }
    Ok(value.as_u64())
}

impl UserOperationRequest {
    /// Normalizes the request into the canonical unsigned wire form
    ///
    /// Numeric fields are coerced to 64 bits, missing gas fields default to
    /// zero, and `signature`/`paymaster_and_data` are reset to `0x`
    /// unconditionally. Fails with [NormalizeError::Overflow] when a value
    /// does not fit; values are never truncated.
    pub fn normalize(&self) -> Result<NormalizedUserOperation, NormalizeError> {
        Ok(NormalizedUserOperation {
            sender: self.sender,
            nonce: to_u64("nonce", self.nonce)?,
            init_code: self.init_code.clone(),
            call_data: self.call_data.clone(),
            call_gas_limit: to_u64("callGasLimit", self.call_gas_limit.unwrap_or_default())?,
            verification_gas_limit: to_u64(
                "verificationGasLimit",
                self.verification_gas_limit.unwrap_or_default(),
            )?,
            pre_verification_gas: to_u64(
                "preVerificationGas",
                self.pre_verification_gas.unwrap_or_default(),
            )?,
            max_fee_per_gas: to_u64("maxFeePerGas", self.max_fee_per_gas.unwrap_or_default())?,
            max_priority_fee_per_gas: to_u64(
                "maxPriorityFeePerGas",
                self.max_priority_fee_per_gas.unwrap_or_default(),
            )?,
            paymaster_and_data: Bytes::default(),
            signature: Bytes::default(),
        })
    }
}

impl From<UserOperationRequest> for UserOperation {
    fn from(request: UserOperationRequest) -> Self {
        Self {
            sender: request.sender,
            nonce: request.nonce,
            init_code: request.init_code,
            call_data: request.call_data,
            call_gas_limit: request.call_gas_limit.unwrap_or_default(),
            verification_gas_limit: request.verification_gas_limit.unwrap_or_default(),
            pre_verification_gas: request.pre_verification_gas.unwrap_or_default(),
            max_fee_per_gas: request.max_fee_per_gas.unwrap_or_default(),
            max_priority_fee_per_gas: request.max_priority_fee_per_gas.unwrap_or_default(),
            paymaster_and_data: request.paymaster_and_data,
            signature: request.signature.unwrap_or_default(),
        }
    }
}

impl From<UserOperation> for UserOperationRequest {
    fn from(uo: UserOperation) -> Self {
        Self {
            sender: uo.sender,
            nonce: uo.nonce,
            init_code: uo.init_code,
            call_data: uo.call_data,
            call_gas_limit: Some(uo.call_gas_limit),
            verification_gas_limit: Some(uo.verification_gas_limit),
            pre_verification_gas: Some(uo.pre_verification_gas),
            max_fee_per_gas: Some(uo.max_fee_per_gas),
            max_priority_fee_per_gas: Some(uo.max_priority_fee_per_gas),
            paymaster_and_data: uo.paymaster_and_data,
            signature: Some(uo.signature),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_resets_signature_and_paymaster_data() {
        let request = UserOperationRequest {
            sender: "0x9c5754De1443984659E1b3a8d1931D83475ba29C".parse().unwrap(),
            nonce: 7.into(),
            call_gas_limit: Some(33_100.into()),
            verification_gas_limit: Some(100_000.into()),
            pre_verification_gas: Some(21_000.into()),
            max_fee_per_gas: Some(1_695_000_030_u64.into()),
            max_priority_fee_per_gas: Some(1_695_000_000.into()),
            paymaster_and_data: "0xdeadbeef".parse().unwrap(),
            signature: Some("0xc0ffee".parse().unwrap()),
            ..Default::default()
        };

        let normalized = request.normalize().unwrap();
        assert_eq!(normalized.signature, Bytes::default());
        assert_eq!(normalized.paymaster_and_data, Bytes::default());
        assert_eq!(normalized.nonce, 7);
        assert_eq!(normalized.call_gas_limit, 33_100);

        let json = serde_json::to_value(&normalized).unwrap();
        assert_eq!(json["signature"], "0x");
        assert_eq!(json["paymasterAndData"], "0x");
        assert_eq!(json["callGasLimit"], 33_100);
        assert_eq!(json["sender"], "0x9c5754De1443984659E1b3a8d1931D83475ba29C");
    }

    #[test]
    fn normalize_defaults_missing_gas_fields_to_zero() {
        let normalized = UserOperationRequest::default().normalize().unwrap();
        assert_eq!(normalized.call_gas_limit, 0);
        assert_eq!(normalized.verification_gas_limit, 0);
        assert_eq!(normalized.max_fee_per_gas, 0);
    }

    #[test]
    fn normalize_fails_loudly_on_overflow() {
        let request = UserOperationRequest {
            max_fee_per_gas: Some(U256::from(u64::MAX) + 1),
            ..Default::default()
        };

        let err = request.normalize().unwrap_err();
        assert!(matches!(err, NormalizeError::Overflow { field: "maxFeePerGas", .. }));
        assert!(err.to_string().contains("does not fit into 64 bits"));
    }
}
