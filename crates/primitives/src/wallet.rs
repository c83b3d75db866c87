//! A `Wallet` wraps the owner's signing key and produces user operation signatures

use crate::{chain::ChainId, UserOperation};
use ethers::{
    prelude::{k256::ecdsa::SigningKey, rand},
    signers::{coins_bip39::English, MnemonicBuilder, Signer},
    types::Address,
};
use expanded_pathbuf::ExpandedPathBuf;
use std::fs;

const DERIVATION_PATH: &str = "m/44'/60'/0'/0/0";

/// Wrapper around the owner's ethers wallet
#[derive(Clone, Debug)]
pub struct Wallet {
    /// Signing key of the wallet
    pub signer: ethers::signers::Wallet<SigningKey>,
}

impl Wallet {
    /// Builds a `Wallet` from a randomly generated mnemonic phrase
    ///
    /// # Arguments
    /// * `path` - The path to the file where the mnemonic phrase will be written
    /// * `chain_id` - The chain id of the blockchain network to be used
    ///
    /// # Returns
    /// * `Self` - A new `Wallet` instance
    pub fn build_random(path: ExpandedPathBuf, chain_id: ChainId) -> eyre::Result<Self> {
        let mut rng = rand::thread_rng();

        fs::create_dir_all(&path)?;

        let wallet = MnemonicBuilder::<English>::default()
            .write_to(path.to_path_buf())
            .derivation_path(DERIVATION_PATH)?
            .build_random(&mut rng)?;

        Ok(Self { signer: wallet.with_chain_id(chain_id) })
    }

    /// Creates a new wallet from the given file containing the mnemonic phrase
    ///
    /// # Arguments
    /// * `path` - The path to the file where the mnemonic phrase is stored
    /// * `chain_id` - The chain id of the blockchain network to be used
    ///
    /// # Returns
    /// * `Self` - A new `Wallet` instance
    pub fn from_file(path: ExpandedPathBuf, chain_id: ChainId) -> eyre::Result<Self> {
        let wallet = MnemonicBuilder::<English>::default()
            .phrase(path.to_path_buf())
            .derivation_path(DERIVATION_PATH)?
            .build()?;

        Ok(Self { signer: wallet.with_chain_id(chain_id) })
    }

    /// Creates a new wallet from the given mnemonic phrase
    ///
    /// # Arguments
    /// * `phrase` - The mnemonic phrase
    /// * `chain_id` - The chain id of the blockchain network to be used
    ///
    /// # Returns
    /// * `Self` - A new `Wallet` instance
    pub fn from_phrase(phrase: &str, chain_id: ChainId) -> eyre::Result<Self> {
        let wallet = MnemonicBuilder::<English>::default()
            .phrase(phrase)
            .derivation_path(DERIVATION_PATH)?
            .build()?;

        Ok(Self { signer: wallet.with_chain_id(chain_id) })
    }

    /// Address of the owner key
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Signs the user operation
    ///
    /// # Arguments
    /// * `uo` - The [UserOperation](UserOperation) to be signed
    /// * `entry_point` - The entry point contract address
    /// * `chain_id` - The chain id of the blockchain network to be used
    ///
    /// # Returns
    /// * `UserOperation` - The signed [UserOperation](UserOperation)
    pub async fn sign_uo(
        &self,
        uo: &UserOperation,
        entry_point: &Address,
        chain_id: ChainId,
    ) -> eyre::Result<UserOperation> {
        let hash = uo.hash(entry_point, chain_id);
        let sig = self.signer.sign_message(hash.0.as_bytes()).await?;
        Ok(UserOperation { signature: sig.to_vec().into(), ..uo.clone() })
    }
}
