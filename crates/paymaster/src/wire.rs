//! Wire types of the sponsorship endpoint

use aegis_primitives::constants::sponsorship;
use ethers::types::Bytes;
use serde::{Deserialize, Serialize};

/// JSON-RPC-style request envelope
#[derive(Clone, Debug, Serialize)]
pub struct Request<T> {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: T,
}

impl<T> Request<T> {
    /// Builds a `pm_sponsorUserOperation` request with the fixed id and
    /// protocol version
    pub fn sponsor_user_operation(params: T) -> Self {
        Self {
            jsonrpc: sponsorship::JSONRPC_VERSION.into(),
            id: sponsorship::REQUEST_ID,
            method: sponsorship::METHOD.into(),
            params,
        }
    }
}

/// Sponsorship payload of a successful response
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorData {
    /// Bytes to place in the operation's `paymasterAndData` field
    pub paymaster_and_data: Bytes,
}

/// Response body of the sponsorship endpoint
///
/// Every field is optional on the wire; [into_outcome](Self::into_outcome)
/// collapses the combinations into the two outcomes that matter.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorResponse {
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub data: Option<SponsorData>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// Classified outcome of one sponsorship exchange
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SponsorOutcome {
    /// The sponsor returned a paymaster payload
    Approved(Bytes),
    /// The sponsor declined, or the body carried no usable payload
    Declined {
        /// Remote error description, when the body carried one
        reason: Option<String>,
    },
}

impl SponsorResponse {
    /// The only success shape is status code 200 with a data payload;
    /// everything else is a decline
    pub fn into_outcome(self) -> SponsorOutcome {
        match (self.status_code, self.data) {
            (Some(200), Some(data)) => SponsorOutcome::Approved(data.paymaster_and_data),
            _ => SponsorOutcome::Declined { reason: self.error.map(render_reason) },
        }
    }
}

fn render_reason(reason: serde_json::Value) -> String {
    match reason {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_shape_yields_approval() {
        let res: SponsorResponse = serde_json::from_value(serde_json::json!({
            "statusCode": 200,
            "data": { "paymasterAndData": "0xabc123" }
        }))
        .unwrap();

        assert_eq!(
            res.into_outcome(),
            SponsorOutcome::Approved("0xabc123".parse().unwrap())
        );
    }

    #[test]
    fn missing_data_is_a_decline_even_with_status_200() {
        let res: SponsorResponse =
            serde_json::from_value(serde_json::json!({ "statusCode": 200 })).unwrap();
        assert_eq!(res.into_outcome(), SponsorOutcome::Declined { reason: None });
    }

    #[test]
    fn error_field_becomes_the_decline_reason() {
        let res: SponsorResponse = serde_json::from_value(serde_json::json!({
            "statusCode": 500,
            "error": "insufficient funds"
        }))
        .unwrap();

        assert_eq!(
            res.into_outcome(),
            SponsorOutcome::Declined { reason: Some("insufficient funds".into()) }
        );
    }

    #[test]
    fn structured_error_is_rendered() {
        let res: SponsorResponse = serde_json::from_value(serde_json::json!({
            "error": { "code": -32500, "message": "aa31 paymaster deposit too low" }
        }))
        .unwrap();

        match res.into_outcome() {
            SponsorOutcome::Declined { reason: Some(reason) } => {
                assert!(reason.contains("paymaster deposit too low"))
            }
            outcome => panic!("unexpected outcome: {outcome:?}"),
        }
    }
}
