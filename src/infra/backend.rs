//! The per-asset chain backend capability set.

use async_trait::async_trait;

/// A categorized error from an asset backend.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The output does not exist, is already spent, or cannot be
    /// interpreted with the supplied redeem script.
    #[error("unknown or spent output")]
    UtxoNotFound,
    /// The pubkey/signature/script combination does not authorize spending
    /// the output.
    #[error("authorization rejected")]
    NotAuthorized,
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// Chain-specific operations for one asset. Calls may block on the asset
/// node's RPC; the caller's deadline propagates through them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Backend: Send + Sync {
    /// Whether the address is valid for receiving this asset.
    fn check_address(&self, address: &str) -> bool;

    /// Resolves an unspent output by outpoint and redeem script.
    async fn utxo(&self, txid: &[u8], vout: u32, redeem: &[u8])
    -> Result<Box<dyn Utxo>, Error>;
}

/// A resolved unspent output.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Utxo: Send + Sync {
    /// The output's current confirmation depth. May consult the asset
    /// node.
    async fn confirmations(&self) -> Result<u32, Error>;

    /// Verifies that the pubkeys and signatures authorize spending this
    /// output for the given message.
    fn auth(&self, pubkeys: &[Vec<u8>], sigs: &[Vec<u8>], msg: &[u8]) -> Result<(), Error>;

    /// The output value in atomic units.
    fn value(&self) -> u64;

    /// The size in bytes this output adds to a spending transaction.
    fn spend_size(&self) -> u32;
}
