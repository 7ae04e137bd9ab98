//! The order router: shared state for the route handlers, the response
//! signing protocol, and the prefix/trade validator.

mod validate;

pub use self::validate::Funding;
pub(crate) use self::validate::check_times;

use {
    crate::{
        api::{self, routes},
        domain::{
            account::AccountId,
            asset::{AssetId, AssetSet, BackedAsset},
            order::{Order, OrderId},
        },
        infra::{
            auth::{AuthManager, Signable, Stampable},
            config::Config,
            tunnel::{MarketTunnel, OrderRecord},
        },
    },
    anyhow::Context,
    std::{collections::HashMap, sync::Arc},
};

/// The widest allowed gap between the client's clock and the server's, in
/// seconds. Shared with clients.
pub const MAX_CLOCK_OFFSET_SECS: u64 = 10;

/// The canonical name of the market for an asset pair.
pub fn market_name(base: AssetId, quote: AssetId) -> String {
    format!("{base}_{quote}")
}

/// A registered market.
pub struct Market {
    pub(crate) base: AssetId,
    pub(crate) quote: AssetId,
    pub(crate) tunnel: Arc<dyn MarketTunnel>,
}

/// The authenticated order ingress. Handlers are invoked concurrently by
/// the auth manager's dispatch, one short-lived future per message; all
/// fields are read-only after construction.
pub struct OrderRouter {
    auth: Arc<dyn AuthManager>,
    assets: HashMap<AssetId, BackedAsset>,
    markets: HashMap<String, Market>,
    market_buy_buffer: f64,
}

impl OrderRouter {
    /// Validates the configuration and constructs the router. A market
    /// whose assets do not resolve in the asset map is configuration
    /// corruption, caught here so the per-request path never has to.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        anyhow::ensure!(
            config.market_buy_buffer.is_finite() && config.market_buy_buffer >= 1.0,
            "market buy buffer {} is not a finite value of at least 1",
            config.market_buy_buffer,
        );

        let mut markets = HashMap::new();
        for market in config.markets {
            let name = market_name(market.base, market.quote);
            anyhow::ensure!(
                market.base != market.quote,
                "market {name} pairs asset {} with itself",
                market.base,
            );
            for id in [market.base, market.quote] {
                config
                    .assets
                    .get(&id)
                    .with_context(|| format!("market {name} references unknown asset {id}"))?;
            }
            anyhow::ensure!(
                markets
                    .insert(
                        name.clone(),
                        Market {
                            base: market.base,
                            quote: market.quote,
                            tunnel: market.tunnel,
                        },
                    )
                    .is_none(),
                "market {name} registered twice",
            );
        }

        Ok(Self {
            auth: config.auth,
            assets: config.assets,
            markets,
            market_buy_buffer: config.market_buy_buffer,
        })
    }

    pub(crate) fn auth(&self) -> &dyn AuthManager {
        self.auth.as_ref()
    }

    pub(crate) fn market_buy_buffer(&self) -> f64 {
        self.market_buy_buffer
    }

    /// Resolves the market for an asset pair.
    pub(crate) fn market(&self, base: u32, quote: u32) -> Result<&Market, routes::Error> {
        let name = market_name(AssetId(base), AssetId(quote));
        self.markets
            .get(&name)
            .ok_or(routes::Error::UnknownMarket(name))
    }

    /// The four asset roles of a market for one side. Both assets were
    /// resolved against the asset map when the market was registered.
    pub(crate) fn asset_set(&self, market: &Market, sell: bool) -> AssetSet {
        let base = self
            .assets
            .get(&market.base)
            .expect("market base asset registered");
        let quote = self
            .assets
            .get(&market.quote)
            .expect("market quote asset registered");
        AssetSet::new(base.clone(), quote.clone(), sell)
    }

    /// Checks that the payload names the authenticated account and that
    /// the client's signature covers the payload serialization.
    pub(crate) fn authenticate(
        &self,
        user: &AccountId,
        account_id: AccountId,
        payload: &dyn Signable,
    ) -> Result<(), routes::Error> {
        if account_id != *user {
            return Err(routes::Error::OrderParameter(
                "order account does not match authenticated account".to_owned(),
            ));
        }
        self.auth
            .auth(user, &payload.serialize(), payload.sig())
            .map_err(|err| routes::Error::Signature(format!("order signature rejected: {err}")))
    }

    /// Hands the accepted order to the market's epoch queue, then stamps
    /// and signs the originating request and sends the order receipt. The
    /// tunnel owns the record from the submit call on.
    pub(crate) fn submit_order<P>(
        &self,
        tunnel: &dyn MarketTunnel,
        order: Order,
        payload: P,
        user: AccountId,
        msg_id: u64,
    ) where
        P: Stampable + Clone + 'static,
    {
        let order_id = order.id();
        let server_time = order.time();
        tunnel.submit_order_async(OrderRecord {
            order,
            request: Box::new(payload.clone()),
            msg_id,
        });
        self.respond(user, msg_id, payload, order_id, server_time);
    }

    /// The response half of acceptance. A response that cannot be built is
    /// dropped: the order is already in the epoch queue and the client
    /// retries on timeout.
    fn respond<P: Stampable>(
        &self,
        user: AccountId,
        msg_id: u64,
        mut payload: P,
        order_id: OrderId,
        server_time: u64,
    ) {
        payload.stamp(server_time);
        self.auth.sign(&mut payload);
        let result = routes::OrderResult {
            sig: payload.sig().to_vec(),
            server_time,
            order_id: order_id.0.to_vec(),
        };
        match serde_json::to_value(&result) {
            Ok(value) => self.auth.send(&user, api::Message::response(msg_id, value)),
            Err(err) => {
                tracing::warn!(%order_id, %err, "dropping undeliverable order receipt")
            }
        }
    }
}
