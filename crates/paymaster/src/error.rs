use aegis_primitives::NormalizeError;
use thiserror::Error;

/// Paymaster errors
#[derive(Debug, Error)]
pub enum PaymasterError {
    /// Strict-mode sponsorship failure
    ///
    /// The caller must abort the submission flow; sending the operation
    /// unsponsored would surprise the end user with a gas charge.
    #[error("error in verifying gas sponsorship: {inner}")]
    Sponsorship {
        /// The remote error description, or "reason unknown"
        inner: String,
    },

    /// The user operation could not be normalized
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}
