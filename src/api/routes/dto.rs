//! Payload building blocks shared by the order routes.
//!
//! Binary fields travel as hexadecimal strings. Every payload also has a
//! canonical byte serialization, distinct from its JSON form, that the
//! client's request signature commits to: fields in declaration order,
//! integers big-endian, the signature field excluded.

use {
    crate::{
        domain::{
            account::{ACCOUNT_ID_SIZE, AccountId},
            order::Outpoint,
        },
        util::serialize,
    },
    serde::{Deserialize, Serialize},
    serde_with::serde_as,
};

/// The fields common to every order payload.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prefix {
    #[serde_as(as = "serialize::Hex")]
    pub account_id: [u8; ACCOUNT_ID_SIZE],
    pub base: u32,
    pub quote: u32,
    /// Order type code.
    pub order_type: u8,
    /// Client unix seconds.
    pub client_time: u64,
    /// Must be zero; the router stamps it at acceptance.
    #[serde(default)]
    pub server_time: u64,
}

impl Prefix {
    pub fn account_id(&self) -> AccountId {
        AccountId(self.account_id)
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(ACCOUNT_ID_SIZE + 25);
        buf.extend_from_slice(&self.account_id);
        buf.extend_from_slice(&self.base.to_be_bytes());
        buf.extend_from_slice(&self.quote.to_be_bytes());
        buf.push(self.order_type);
        buf.extend_from_slice(&self.client_time.to_be_bytes());
        buf.extend_from_slice(&self.server_time.to_be_bytes());
        buf
    }
}

/// The trade fields shared by the limit and market payloads.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// Side code.
    pub side: u8,
    pub quantity: u64,
    pub utxos: Vec<Utxo>,
    /// The receiving-asset address matches pay out to.
    pub address: String,
}

impl Trade {
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        for utxo in &self.utxos {
            buf.extend_from_slice(&utxo.serialize());
        }
        buf.push(self.side);
        buf.extend_from_slice(&self.quantity.to_be_bytes());
        buf.extend_from_slice(self.address.as_bytes());
        buf
    }
}

/// One funding output with its ownership proof: the pubkeys and, for each,
/// a signature over the output's serialization.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Utxo {
    #[serde_as(as = "serialize::Hex")]
    pub txid: Vec<u8>,
    pub vout: u32,
    /// Redeem script, where the output's script requires one.
    #[serde(default)]
    #[serde_as(as = "serialize::Hex")]
    pub redeem: Vec<u8>,
    #[serde_as(as = "Vec<serialize::Hex>")]
    pub pubkeys: Vec<Vec<u8>>,
    #[serde_as(as = "Vec<serialize::Hex>")]
    pub sigs: Vec<Vec<u8>>,
}

impl Utxo {
    pub fn outpoint(&self) -> Outpoint {
        Outpoint {
            txid: self.txid.clone(),
            vout: self.vout,
        }
    }

    /// The message the ownership signatures commit to.
    pub fn serialize(&self) -> Vec<u8> {
        self.outpoint().serialize()
    }
}
