//! Supported assets and the per-side role views over a market's asset pair.

use {
    crate::infra::backend,
    std::{
        fmt::{self, Debug, Display, Formatter},
        sync::Arc,
    },
};

/// Numeric asset identifier shared with clients.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AssetId(pub u32);

impl Display for AssetId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// The trading and funding parameters of a supported asset. All amounts are
/// in the asset's atomic units.
#[derive(Clone, Debug)]
pub struct Asset {
    pub id: AssetId,
    pub symbol: String,
    /// The atomic multiple for order quantities denominated in this asset.
    pub lot_size: u64,
    /// The atomic multiple for limit-order rates quoted in this asset.
    pub rate_step: u64,
    /// The fee rate in atoms per byte applied to funding transactions.
    pub fee_rate: u64,
    /// The size in bytes of the swap transaction this asset funds.
    pub swap_size: u64,
    /// The confirmation depth required before an output can fund an order.
    pub fund_conf: u32,
}

/// An asset together with the backend that answers address and output
/// queries for its chain.
#[derive(Clone)]
pub struct BackedAsset {
    pub asset: Asset,
    pub backend: Arc<dyn backend::Backend>,
}

impl Debug for BackedAsset {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("BackedAsset")
            .field("asset", &self.asset)
            .finish_non_exhaustive()
    }
}

/// The four roles a market's two assets play for one side of a trade. The
/// roles are produced together so funding and receiving are never rederived
/// from the side bit at the point of use.
#[derive(Clone, Debug)]
pub struct AssetSet {
    /// The asset the order is funded with.
    pub funding: BackedAsset,
    /// The asset the client receives on a match.
    pub receiving: BackedAsset,
    pub base: BackedAsset,
    pub quote: BackedAsset,
}

impl AssetSet {
    /// Labels a market's base and quote assets with their funding and
    /// receiving roles. A sell is funded by the base asset and receives the
    /// quote asset; a buy is the reverse.
    pub fn new(base: BackedAsset, quote: BackedAsset, sell: bool) -> Self {
        let (funding, receiving) = if sell {
            (base.clone(), quote.clone())
        } else {
            (quote.clone(), base.clone())
        };
        Self {
            funding,
            receiving,
            base,
            quote,
        }
    }
}
