//! Gas sponsorship (paymaster) resolution for user operations
//!
//! Normalizes a partially filled user operation, asks a remote verifying
//! signer service for sponsorship data, and applies the strict/lenient
//! fallback policy that decides what ends up in `paymasterAndData`.

mod error;
mod paymaster;
mod wire;

pub use error::PaymasterError;
pub use paymaster::{PaymasterConfig, Sponsorship, VerifyingPaymaster};
pub use wire::{Request, SponsorData, SponsorOutcome, SponsorResponse};
