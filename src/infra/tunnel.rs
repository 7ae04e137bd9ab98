//! The market-side tunnel accepted orders are handed to.

use crate::{
    domain::{
        account::AccountId,
        order::{Order, OrderId, Outpoint},
    },
    infra::auth,
};

/// An accepted order en route to a market's epoch queue, together with the
/// originating request. The tunnel owns the record after
/// [`MarketTunnel::submit_order_async`]; the router keeps nothing beyond
/// what the response needs.
pub struct OrderRecord {
    pub order: Order,
    /// The payload of the originating request.
    pub request: Box<dyn auth::Stampable>,
    /// The id of the originating message.
    pub msg_id: u64,
}

/// One market's epoch queue, order book, and swap monitor, as seen from
/// the admission side. Predicates are answered from memory; only the
/// epoch queue takes ownership of anything.
pub trait MarketTunnel: Send + Sync {
    /// Hands an accepted order to the market's epoch queue. Non-blocking
    /// by contract; the router does not observe the queue's decision, so
    /// two racing orders funded by the same output can both pass admission
    /// and the queue resolves the conflict.
    fn submit_order_async(&self, record: OrderRecord);

    /// The midpoint between the best bid and best ask, in quote atoms per
    /// base atom.
    fn mid_gap(&self) -> u64;

    /// Whether the output already funds an order in the epoch queue, on
    /// the book, or tracked by the swap monitor.
    fn outpoint_locked(&self, outpoint: &Outpoint) -> bool;

    /// Whether the order is a standing limit order currently in the epoch
    /// queue or on the book.
    fn cancelable(&self, id: &OrderId) -> bool;

    /// Whether the transaction is tracked by the swap monitor for this
    /// user. Change from monitored swaps funds new orders without waiting
    /// for confirmation depth.
    fn tx_monitored(&self, user: &AccountId, txid: &[u8]) -> bool;
}
