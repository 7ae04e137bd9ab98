//! The `limit` route: admission of limit orders.

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
            order::{self, LimitOrder, Order},
            router::OrderRouter,
        },
        infra::metrics,
        util::{conv, time},
    },
    std::sync::Arc,
};

/// Admits a limit order: decode, authenticate, resolve the market and
/// side, validate the prefix and trade, check the rate and funding, then
/// submit to the epoch queue and send the signed receipt.
pub(crate) async fn handle(
    router: Arc<OrderRouter>,
    user: AccountId,
    msg: api::Message,
) -> Result<(), Error> {
    let payload: dto::Limit = serde_json::from_value(msg.payload).map_err(Error::Parse)?;
    router.authenticate(&user, payload.prefix.account_id(), &payload)?;

    let market = router.market(payload.prefix.base, payload.prefix.quote)?;
    let side = order::Side::from_code(payload.trade.side)
        .ok_or_else(|| Error::OrderParameter(format!("invalid side {}", payload.trade.side)))?;
    let sell = side == order::Side::Sell;
    if payload.prefix.order_type != order::Type::Limit.code() {
        return Err(Error::OrderParameter(format!(
            "order type {} is not a limit order",
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
            true,
        )
        .await?;

    if payload.rate == 0 {
        return Err(Error::OrderParameter("zero rate".to_owned()));
    }
    if payload.rate % assets.quote.asset.rate_step != 0 {
        return Err(Error::OrderParameter(format!(
            "rate {} is not a multiple of the rate step {}",
            payload.rate, assets.quote.asset.rate_step,
        )));
    }

    // A sell swaps away the base quantity itself; a buy swaps away its
    // quote-asset equivalent at the limit rate.
    let swap_val = if sell {
        payload.trade.quantity
    } else {
        conv::base_to_quote(payload.rate, payload.trade.quantity)
    };
    let required = funds::required_funds(swap_val, funding.spend_size, &assets.funding.asset);
    if funding.value < required {
        return Err(Error::Funding(format!(
            "funding value {} is under the required {required}",
            funding.value,
        )));
    }

    let tif = order::TimeInForce::from_code(payload.tif)
        .ok_or_else(|| Error::OrderParameter(format!("invalid time-in-force {}", payload.tif)))?;

    let order = Order::Limit(LimitOrder {
        prefix: order::Prefix {
            account_id: user,
            base: AssetId(payload.prefix.base),
            quote: AssetId(payload.prefix.quote),
            order_type: order::Type::Limit,
            client_time: payload.prefix.client_time,
            server_time: time::unix_now(),
        },
        trade: order::Trade {
            outpoints: funding.outpoints,
            sell,
            quantity: payload.trade.quantity,
            address: payload.trade.address.clone(),
        },
        rate: payload.rate,
        tif,
    });
    router.submit_order(market.tunnel.as_ref(), order, payload, user, msg.id);
    metrics::submission(routes::LIMIT);
    Ok(())
}
