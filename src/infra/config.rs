//! Order router configuration.

use {
    crate::{
        domain::asset::{AssetId, BackedAsset},
        infra::{auth::AuthManager, tunnel::MarketTunnel},
    },
    std::{collections::HashMap, sync::Arc},
};

/// One market to register: its asset pair and the tunnel to its epoch
/// queue.
pub struct Market {
    pub base: AssetId,
    pub quote: AssetId,
    pub tunnel: Arc<dyn MarketTunnel>,
}

/// The collaborators and parameters the router is constructed with.
/// Validated eagerly by [`crate::OrderRouter::new`]; everything is
/// read-only after construction.
pub struct Config {
    pub auth: Arc<dyn AuthManager>,
    /// Every supported asset, keyed by id. Every registered market's pair
    /// must resolve here.
    pub assets: HashMap<AssetId, BackedAsset>,
    pub markets: Vec<Market>,
    /// Multiplier on the base lot size that a market buy must fund at the
    /// current mid-gap rate. Must be finite and at least 1.
    pub market_buy_buffer: f64,
}
