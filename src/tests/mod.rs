//! Order router end-to-end tests.
//!
//! Note that this is setup as a "unit test" in that it is part of the `src/`
//! directory. This is done intentionally as Cargo builds separate binaries for
//! each file in `tests/`, which makes `cargo test` slower.
//!
//! Each test wires a router to mock collaborators, registers the routes,
//! and drives JSON payloads through the mock dispatch the way the auth
//! manager's dispatch layer does in production.

mod mock;

use {
    crate::{
        api::{self, routes},
        domain::{
            account::AccountId,
            asset::{Asset, AssetId, BackedAsset},
            router::OrderRouter,
        },
        infra::{backend::Backend, config},
        util,
    },
    maplit::hashmap,
    serde_json::json,
    std::sync::Arc,
};

pub const BASE: u32 = 7;
pub const QUOTE: u32 = 3;
pub const USER: AccountId = AccountId([0x21; 32]);

pub fn base_asset() -> Asset {
    Asset {
        id: AssetId(BASE),
        symbol: "dcr".to_owned(),
        lot_size: 1_000_000,
        rate_step: 100,
        fee_rate: 10,
        swap_size: 200,
        fund_conf: 2,
    }
}

pub fn quote_asset() -> Asset {
    Asset {
        id: AssetId(QUOTE),
        symbol: "btc".to_owned(),
        lot_size: 500_000,
        rate_step: 2,
        fee_rate: 20,
        swap_size: 150,
        fund_conf: 1,
    }
}

/// A router wired to mock collaborators, with its routes registered.
pub struct Harness {
    pub auth: Arc<mock::Auth>,
    pub tunnel: Arc<mock::Tunnel>,
}

impl Harness {
    /// A harness over the default market with the given chain backends.
    pub fn new(base: Arc<dyn Backend>, quote: Arc<dyn Backend>) -> Self {
        Self::with_assets(
            BackedAsset {
                asset: base_asset(),
                backend: base,
            },
            BackedAsset {
                asset: quote_asset(),
                backend: quote,
            },
            1.25,
        )
    }

    pub fn with_assets(base: BackedAsset, quote: BackedAsset, market_buy_buffer: f64) -> Self {
        init_tracing();
        let auth = Arc::new(mock::Auth::default());
        let tunnel = Arc::new(mock::Tunnel::default());
        let router = Arc::new(
            OrderRouter::new(crate::Config {
                auth: auth.clone(),
                assets: hashmap! {
                    base.asset.id => base,
                    quote.asset.id => quote,
                },
                markets: vec![config::Market {
                    base: AssetId(BASE),
                    quote: AssetId(QUOTE),
                    tunnel: tunnel.clone(),
                }],
                market_buy_buffer,
            })
            .unwrap(),
        );
        api::register(&router);
        Self { auth, tunnel }
    }

    /// Sends a payload through the mock dispatch to the named route.
    pub async fn request(
        &self,
        route: &str,
        payload: serde_json::Value,
    ) -> Result<(), routes::Error> {
        self.auth
            .request(
                route,
                USER,
                api::Message {
                    id: 1,
                    route: route.to_owned(),
                    payload,
                },
            )
            .await
    }

    /// Asserts the payload is rejected with the given wire code and that
    /// the rejection had no side effect: nothing submitted, nothing sent.
    pub async fn assert_rejected(&self, route: &str, payload: serde_json::Value, code: u16) {
        let err = self.request(route, payload).await.unwrap_err();
        assert_eq!(err.code(), code, "unexpected rejection: {err}");
        assert!(self.tunnel.submitted().is_empty());
        assert!(self.auth.sent().is_empty());
    }
}

pub fn now() -> u64 {
    util::time::unix_now()
}

pub fn utxo_json(txid: &[u8], vout: u32) -> serde_json::Value {
    json!({
        "txid": hex::encode(txid),
        "vout": vout,
        "redeem": "",
        "pubkeys": [hex::encode([0x02; 33])],
        "sigs": [hex::encode([0x30; 71])],
    })
}

pub fn limit_payload(
    sell: bool,
    quantity: u64,
    rate: u64,
    utxos: Vec<serde_json::Value>,
) -> serde_json::Value {
    json!({
        "accountId": hex::encode(USER.0),
        "base": BASE,
        "quote": QUOTE,
        "orderType": 1,
        "clientTime": now(),
        "side": if sell { 2 } else { 1 },
        "quantity": quantity,
        "utxos": utxos,
        "address": "recv-address",
        "rate": rate,
        "tif": 1,
        "sig": "0b",
    })
}

pub fn market_payload(sell: bool, quantity: u64, utxos: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "accountId": hex::encode(USER.0),
        "base": BASE,
        "quote": QUOTE,
        "orderType": 2,
        "clientTime": now(),
        "side": if sell { 2 } else { 1 },
        "quantity": quantity,
        "utxos": utxos,
        "address": "recv-address",
        "sig": "0b",
    })
}

pub fn cancel_payload(target: &[u8]) -> serde_json::Value {
    json!({
        "accountId": hex::encode(USER.0),
        "base": BASE,
        "quote": QUOTE,
        "orderType": 3,
        "clientTime": now(),
        "target": hex::encode(target),
        "sig": "0b",
    })
}

/// Decodes the order receipt from an outbound message.
pub fn order_result(msg: &api::Message) -> routes::OrderResult {
    serde_json::from_value(msg.payload.clone()).unwrap()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
