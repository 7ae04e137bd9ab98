//! The order route surface: route names, the wire error taxonomy, and the
//! signed order receipt.

pub mod cancel;
pub mod dto;
pub mod limit;
pub mod market;

use {
    crate::util::serialize,
    serde::{Deserialize, Serialize},
    serde_with::serde_as,
};

/// Route name for limit order submission.
pub const LIMIT: &str = "limit";
/// Route name for market order submission.
pub const MARKET: &str = "market";
/// Route name for order cancellation.
pub const CANCEL: &str = "cancel";

/// A categorized order admission failure. Each kind carries a stable
/// numeric wire code that clients switch on; the admission checks run in a
/// fixed sequence, so which code a request draws is observable contract.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The payload could not be decoded.
    #[error("error decoding message: {0}")]
    Parse(serde_json::Error),
    /// A request or funding-output signature is missing or invalid.
    #[error("{0}")]
    Signature(String),
    /// A payload field is outside the market's or the route's rules.
    #[error("{0}")]
    OrderParameter(String),
    /// The asset pair does not name a registered market.
    #[error("unknown market {0}")]
    UnknownMarket(String),
    /// The client clock is outside the allowed offset window.
    #[error("{0}")]
    ClockRange(String),
    /// The order's funding outputs cannot back it.
    #[error("{0}")]
    Funding(String),
    /// A funding output's backend refused the ownership proof.
    #[error("{0}")]
    UtxoAuth(String),
}

impl Error {
    /// The wire code for this error kind.
    pub fn code(&self) -> u16 {
        match self {
            Self::Parse(_) => 1,
            Self::Signature(_) => 14,
            Self::OrderParameter(_) => 25,
            Self::UnknownMarket(_) => 26,
            Self::ClockRange(_) => 27,
            Self::Funding(_) => 28,
            Self::UtxoAuth(_) => 29,
        }
    }

    /// for instrumentization purposes
    pub fn format_variant(&self) -> &'static str {
        match self {
            Self::Parse(_) => "Parse",
            Self::Signature(_) => "Signature",
            Self::OrderParameter(_) => "OrderParameter",
            Self::UnknownMarket(_) => "UnknownMarket",
            Self::ClockRange(_) => "ClockRange",
            Self::Funding(_) => "Funding",
            Self::UtxoAuth(_) => "UtxoAuth",
        }
    }
}

/// The signed receipt for an accepted order.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResult {
    /// Server signature over the stamped request payload.
    #[serde_as(as = "serialize::Hex")]
    pub sig: Vec<u8>,
    /// The acceptance timestamp, unix seconds.
    pub server_time: u64,
    #[serde_as(as = "serialize::Hex")]
    pub order_id: Vec<u8>,
}
