//! The order router of a DEX server: the authenticated ingress that accepts
//! client-submitted trade intentions (limit orders, market orders,
//! cancellations), validates them against market, asset, funding, and
//! signature rules, and hands accepted orders to the appropriate market's
//! epoch queue.
//!
//! The router itself holds no per-order state. All interaction with the rest
//! of the server goes through three capability sets satisfied by production
//! implementations and test doubles alike: the authentication manager
//! ([`infra::auth::AuthManager`]), per-market tunnels to the epoch queues
//! ([`infra::tunnel::MarketTunnel`]), and per-asset chain backends
//! ([`infra::backend::Backend`]).

pub mod api;
pub mod domain;
pub mod infra;
pub mod util;

#[cfg(test)]
mod tests;

pub use crate::{domain::router::OrderRouter, infra::config::Config};
