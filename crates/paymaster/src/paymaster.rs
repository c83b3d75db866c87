use crate::{
    error::PaymasterError,
    wire::{Request, SponsorOutcome, SponsorResponse},
};
use aegis_primitives::{NormalizedUserOperation, UserOperationRequest};
use ethers::types::Bytes;
use tracing::{trace, warn};

/// Configuration of the sponsorship resolver; immutable after construction
#[derive(Clone, Debug)]
pub struct PaymasterConfig {
    /// URL of the sponsorship endpoint
    pub paymaster_url: String,
    /// Whether a failed sponsorship attempt aborts the flow instead of
    /// falling back to a self-paid operation
    pub strict_sponsorship_mode: bool,
}

impl PaymasterConfig {
    pub fn new(paymaster_url: &str, strict_sponsorship_mode: bool) -> Self {
        Self { paymaster_url: paymaster_url.into(), strict_sponsorship_mode }
    }
}

/// Resolution of one sponsorship request
///
/// The lenient-mode fallback is an expected outcome, not an error; callers
/// match on this instead of catching exceptions to detect it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sponsorship {
    /// The sponsor pays; attach the returned bytes to the operation
    Sponsored(Bytes),
    /// No sponsorship; the sender pays its own gas
    SelfFunded {
        /// Why sponsorship was not granted
        reason: String,
    },
}

impl Sponsorship {
    /// Bytes to place in the operation's `paymasterAndData` field
    ///
    /// Self-funded operations carry the empty byte string `0x`.
    pub fn paymaster_and_data(&self) -> Bytes {
        match self {
            Sponsorship::Sponsored(data) => data.clone(),
            Sponsorship::SelfFunded { .. } => Bytes::default(),
        }
    }

    pub fn is_sponsored(&self) -> bool {
        matches!(self, Sponsorship::Sponsored(_))
    }
}

/// Client of a verifying paymaster signing service
///
/// Stateless per call: one outbound request per invocation, no retries, no
/// deduplication; timeout behavior is left to the HTTP transport.
#[derive(Clone, Debug)]
pub struct VerifyingPaymaster {
    config: PaymasterConfig,
    http_client: reqwest::Client,
}

impl VerifyingPaymaster {
    pub fn new(config: PaymasterConfig) -> Self {
        Self { config, http_client: reqwest::Client::new() }
    }

    /// Resolves the `paymasterAndData` bytes for the user operation
    ///
    /// The operation is normalized first: numeric fields become fixed-width,
    /// and `signature`/`paymasterAndData` are reset to `0x` so the sponsor
    /// signs over the canonical unsigned operation. The normalized operation
    /// and the optional service parameters are then posted to the sponsorship
    /// endpoint.
    ///
    /// A response with status code 200 and a data payload yields
    /// [Sponsorship::Sponsored] with the returned bytes verbatim. Any other
    /// response, including transport failures, is downgraded to
    /// [Sponsorship::SelfFunded] in lenient mode and fails with
    /// [PaymasterError::Sponsorship] in strict mode.
    pub async fn get_paymaster_and_data(
        &self,
        uo: &UserOperationRequest,
        service_data: Option<serde_json::Value>,
    ) -> Result<Sponsorship, PaymasterError> {
        let uo = uo.normalize()?;

        trace!("requesting sponsorship for user operation of {:?}", uo.sender);

        match self.request_sponsorship(uo, service_data).await {
            SponsorOutcome::Approved(data) => {
                trace!("user operation sponsored, paymaster data: {data:?}");
                Ok(Sponsorship::Sponsored(data))
            }
            SponsorOutcome::Declined { reason } => self.fall_back(reason),
        }
    }

    async fn request_sponsorship(
        &self,
        uo: NormalizedUserOperation,
        service_data: Option<serde_json::Value>,
    ) -> SponsorOutcome {
        let request = Request::sponsor_user_operation((uo, service_data));

        let res = match self
            .http_client
            .post(&self.config.paymaster_url)
            .json(&request)
            .send()
            .await
        {
            Ok(res) => res,
            Err(e) => return SponsorOutcome::Declined { reason: Some(e.to_string()) },
        };

        match res.json::<SponsorResponse>().await {
            Ok(body) => body.into_outcome(),
            Err(e) => SponsorOutcome::Declined { reason: Some(e.to_string()) },
        }
    }

    fn fall_back(&self, reason: Option<String>) -> Result<Sponsorship, PaymasterError> {
        let reason = reason.unwrap_or_else(|| "reason unknown".into());

        if self.config.strict_sponsorship_mode {
            return Err(PaymasterError::Sponsorship { inner: reason });
        }

        warn!("sponsorship unavailable, user operation proceeds self-funded: {reason}");
        Ok(Sponsorship::SelfFunded { reason })
    }
}
