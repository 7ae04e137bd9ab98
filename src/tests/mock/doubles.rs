//! Hand-rolled doubles for the stateful collaborators. Backends are mocked
//! with [`mockall`] instead; see the helpers in the parent module.

use {
    crate::{
        api,
        domain::{
            account::AccountId,
            order::{OrderId, Outpoint},
        },
        infra::{
            auth::{AuthManager, Handler, Signable, VerifyError},
            tunnel::{MarketTunnel, OrderRecord},
        },
    },
    std::{
        collections::{HashMap, HashSet},
        sync::{
            Mutex,
            atomic::{AtomicU64, Ordering},
        },
    },
};

/// The deterministic signature the mock auth manager attaches to server
/// responses.
pub const SERVER_SIG: &[u8] = b"server-response-signature";

/// An auth manager double: captures registered routes for direct dispatch,
/// records outbound messages, and fails verification for explicitly
/// rejected users.
#[derive(Default)]
pub struct Auth {
    routes: Mutex<HashMap<&'static str, Handler>>,
    sent: Mutex<Vec<(AccountId, api::Message)>>,
    rejected: Mutex<HashSet<AccountId>>,
}

impl Auth {
    /// Dispatches a message to the handler registered for the route, the
    /// way the production dispatch layer does.
    pub async fn request(
        &self,
        route: &str,
        user: AccountId,
        msg: api::Message,
    ) -> Result<(), crate::api::routes::Error> {
        let fut = {
            let routes = self.routes.lock().unwrap();
            let handler = routes.get(route).expect("route not registered");
            handler(user, msg)
        };
        fut.await
    }

    /// Marks the user's request signatures as invalid.
    pub fn reject_sigs(&self, user: AccountId) {
        self.rejected.lock().unwrap().insert(user);
    }

    /// Drains the outbound queue.
    pub fn sent(&self) -> Vec<(AccountId, api::Message)> {
        std::mem::take(&mut self.sent.lock().unwrap())
    }
}

impl AuthManager for Auth {
    fn route(&self, name: &'static str, handler: Handler) {
        self.routes.lock().unwrap().insert(name, handler);
    }

    fn auth(&self, user: &AccountId, _msg: &[u8], _sig: &[u8]) -> Result<(), VerifyError> {
        if self.rejected.lock().unwrap().contains(user) {
            return Err(VerifyError);
        }
        Ok(())
    }

    fn sign(&self, signable: &mut dyn Signable) {
        signable.set_sig(SERVER_SIG.to_vec());
    }

    fn send(&self, user: &AccountId, msg: api::Message) {
        self.sent.lock().unwrap().push((*user, msg));
    }
}

/// A market tunnel double with configurable predicate state and a log of
/// submitted records.
#[derive(Default)]
pub struct Tunnel {
    mid_gap: AtomicU64,
    locked: Mutex<HashSet<Outpoint>>,
    monitored: Mutex<HashSet<(AccountId, Vec<u8>)>>,
    cancelable: Mutex<HashSet<OrderId>>,
    submitted: Mutex<Vec<OrderRecord>>,
}

impl Tunnel {
    pub fn set_mid_gap(&self, rate: u64) {
        self.mid_gap.store(rate, Ordering::Relaxed);
    }

    pub fn lock_outpoint(&self, outpoint: Outpoint) {
        self.locked.lock().unwrap().insert(outpoint);
    }

    pub fn monitor_tx(&self, user: AccountId, txid: Vec<u8>) {
        self.monitored.lock().unwrap().insert((user, txid));
    }

    pub fn make_cancelable(&self, id: OrderId) {
        self.cancelable.lock().unwrap().insert(id);
    }

    /// Drains the submission log.
    pub fn submitted(&self) -> Vec<OrderRecord> {
        std::mem::take(&mut self.submitted.lock().unwrap())
    }
}

impl MarketTunnel for Tunnel {
    fn submit_order_async(&self, record: OrderRecord) {
        self.submitted.lock().unwrap().push(record);
    }

    fn mid_gap(&self) -> u64 {
        self.mid_gap.load(Ordering::Relaxed)
    }

    fn outpoint_locked(&self, outpoint: &Outpoint) -> bool {
        self.locked.lock().unwrap().contains(outpoint)
    }

    fn cancelable(&self, id: &OrderId) -> bool {
        self.cancelable.lock().unwrap().contains(id)
    }

    fn tx_monitored(&self, user: &AccountId, txid: &[u8]) -> bool {
        self.monitored
            .lock()
            .unwrap()
            .contains(&(*user, txid.to_vec()))
    }
}
