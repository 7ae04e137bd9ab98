//! Test doubles for the router's collaborators.

mod doubles;

pub use self::doubles::{Auth, SERVER_SIG, Tunnel};

use {
    crate::infra::backend::{MockBackend, MockUtxo},
    std::sync::Arc,
};

/// A backend whose every output resolves with the given value, spend size,
/// and confirmation depth, and which accepts any address and any ownership
/// proof.
pub fn backend(value: u64, spend_size: u32, confirmations: u32) -> Arc<MockBackend> {
    let mut backend = MockBackend::new();
    backend.expect_check_address().return_const(true);
    backend
        .expect_utxo()
        .returning(move |_, _, _| Ok(Box::new(utxo(value, spend_size, confirmations))));
    Arc::new(backend)
}

/// A resolved output double that accepts any ownership proof.
pub fn utxo(value: u64, spend_size: u32, confirmations: u32) -> MockUtxo {
    let mut utxo = MockUtxo::new();
    utxo.expect_confirmations()
        .returning(move || Ok(confirmations));
    utxo.expect_auth().returning(|_, _, _| Ok(()));
    utxo.expect_value().return_const(value);
    utxo.expect_spend_size().return_const(spend_size);
    utxo
}
