//! The `market` route: admission of market orders.

pub mod dto;

use {
    crate::{
        api::{
            self,
            routes::{self, Error},
        },
        domain::{
            account::AccountId,
            asset::AssetId,
            funds,
            order::{self, MarketOrder, Order},
            router::OrderRouter,
        },
        infra::metrics,
        util::{conv, time},
    },
    std::sync::Arc,
};

/// Admits a market order. Market buys are denominated in the quote asset,
/// so the base lot-size check only applies to sells.
pub(crate) async fn handle(
    router: Arc<OrderRouter>,
    user: AccountId,
    msg: api::Message,
) -> Result<(), Error> {
    let payload: dto::Market = serde_json::from_value(msg.payload).map_err(Error::Parse)?;
    router.authenticate(&user, payload.prefix.account_id(), &payload)?;

    let market = router.market(payload.prefix.base, payload.prefix.quote)?;
    let side = order::Side::from_code(payload.trade.side)
        .ok_or_else(|| Error::OrderParameter(format!("invalid side {}", payload.trade.side)))?;
    let sell = side == order::Side::Sell;
    if payload.prefix.order_type != order::Type::Market.code() {
        return Err(Error::OrderParameter(format!(
            "order type {} is not a market order",
            payload.prefix.order_type,
        )));
    }

    let assets = router.asset_set(market, sell);
    let funding = router
        .validate_order(
            &user,
            market.tunnel.as_ref(),
            &assets,
            &payload.prefix,
            &payload.trade,
            sell,
        )
        .await?;

    let required = if sell {
        funds::required_funds(payload.trade.quantity, funding.spend_size, &assets.funding.asset)
    } else {
        // The mid gap prices the quote-denominated quantity in base
        // terms. It is a stale estimate, so a buy must fund at least a
        // buffered lot or it could fill less than one lot after
        // slippage.
        let mid_gap = market.tunnel.mid_gap();
        let required = conv::quote_to_base(mid_gap, payload.trade.quantity);
        let lot_with_buffer =
            (assets.base.asset.lot_size as f64 * router.market_buy_buffer()) as u64;
        if required < conv::quote_to_base(mid_gap, lot_with_buffer) {
            return Err(Error::Funding(
                "order quantity does not satisfy the market buy buffer".to_owned(),
            ));
        }
        required
    };
    if funding.value < required {
        return Err(Error::Funding(format!(
            "funding value {} is under the required {required}",
            funding.value,
        )));
    }

    let order = Order::Market(MarketOrder {
        prefix: order::Prefix {
            account_id: user,
            base: AssetId(payload.prefix.base),
            quote: AssetId(payload.prefix.quote),
            order_type: order::Type::Market,
            client_time: payload.prefix.client_time,
            server_time: time::unix_now(),
        },
        trade: order::Trade {
            outpoints: funding.outpoints,
            sell,
            quantity: payload.trade.quantity,
            address: payload.trade.address.clone(),
        },
    });
    router.submit_order(market.tunnel.as_ref(), order, payload, user, msg.id);
    metrics::submission(routes::MARKET);
    Ok(())
}
