//! The authentication manager capability set.
//!
//! The auth manager owns client connections: it verifies request signatures
//! against registered account keys, dispatches each inbound message to the
//! handler registered for its route, signs server responses, and sends
//! outbound messages. The router only registers handlers and consumes the
//! signing and sending capabilities.

use {
    crate::{api, domain::account::AccountId},
    futures::future::BoxFuture,
};

/// A message payload whose canonical byte serialization is committed to by
/// a signature. The serialization never includes the signature field
/// itself.
pub trait Signable: Send + Sync {
    /// The canonical serialization the signature commits to.
    fn serialize(&self) -> Vec<u8>;

    /// The attached signature.
    fn sig(&self) -> &[u8];

    /// Replaces the attached signature.
    fn set_sig(&mut self, sig: Vec<u8>);
}

/// A signable payload that the server timestamps at acceptance.
pub trait Stampable: Signable {
    /// Sets the server timestamp the response signature commits to.
    fn stamp(&mut self, server_time: u64);
}

/// A registered route handler. Invoked once per inbound message, with the
/// authenticated account; an error return is delivered to the client as
/// the reply to the originating message.
pub type Handler = Box<
    dyn Fn(AccountId, api::Message) -> BoxFuture<'static, Result<(), api::routes::Error>>
        + Send
        + Sync,
>;

/// Client signature verification failure.
#[derive(Debug, thiserror::Error)]
#[error("signature verification failed")]
pub struct VerifyError;

/// The authentication manager the router is constructed with.
pub trait AuthManager: Send + Sync {
    /// Registers the handler for a route name. One handler per route.
    fn route(&self, name: &'static str, handler: Handler);

    /// Verifies a detached client signature over `msg` for the user's
    /// registered key.
    fn auth(&self, user: &AccountId, msg: &[u8], sig: &[u8]) -> Result<(), VerifyError>;

    /// Fills the signable's signature field with a server signature over
    /// its serialization.
    fn sign(&self, signable: &mut dyn Signable);

    /// Enqueues an outbound message for the user. Non-blocking by
    /// contract.
    fn send(&self, user: &AccountId, msg: api::Message);
}
