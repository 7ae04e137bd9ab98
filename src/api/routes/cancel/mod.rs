//! The `cancel` route: admission of cancellations of standing limit
//! orders.

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
            order::{self, CancelOrder, Order},
            router::{OrderRouter, check_times},
        },
        infra::metrics,
        util::time,
    },
    std::sync::Arc,
};

/// Admits a cancellation. There is no trade section: the checks are the
/// target's length and cancelability, the payload's type tag, and the
/// prefix timestamps.
pub(crate) async fn handle(
    router: Arc<OrderRouter>,
    user: AccountId,
    msg: api::Message,
) -> Result<(), Error> {
    let payload: dto::Cancel = serde_json::from_value(msg.payload).map_err(Error::Parse)?;
    router.authenticate(&user, payload.prefix.account_id(), &payload)?;

    let market = router.market(payload.prefix.base, payload.prefix.quote)?;

    let target = <[u8; order::ORDER_ID_SIZE]>::try_from(payload.target.as_slice())
        .map(order::OrderId)
        .map_err(|_| {
            Error::OrderParameter(format!(
                "target order id is {} bytes, not {}",
                payload.target.len(),
                order::ORDER_ID_SIZE,
            ))
        })?;
    // Only a standing limit order in the epoch queue or on the book can be
    // cancelled.
    if !market.tunnel.cancelable(&target) {
        return Err(Error::OrderParameter("target order not known".to_owned()));
    }
    if payload.prefix.order_type != order::Type::Cancel.code() {
        return Err(Error::OrderParameter(format!(
            "order type {} is not a cancellation",
            payload.prefix.order_type,
        )));
    }
    check_times(&payload.prefix)?;

    let order = Order::Cancel(CancelOrder {
        prefix: order::Prefix {
            account_id: user,
            base: AssetId(payload.prefix.base),
            quote: AssetId(payload.prefix.quote),
            // Downstream consumers key cancellations by the market
            // order-type code.
            order_type: order::Type::Market,
            client_time: payload.prefix.client_time,
            server_time: time::unix_now(),
        },
        target,
    });
    router.submit_order(market.tunnel.as_ref(), order, payload, user, msg.id);
    metrics::submission(routes::CANCEL);
    Ok(())
}
