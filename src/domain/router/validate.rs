//! The admission checks shared by the order routes.

use crate::{
    api::routes::{self, dto},
    domain::{
        account::AccountId,
        asset::AssetSet,
        order::Outpoint,
        router::{MAX_CLOCK_OFFSET_SECS, OrderRouter},
    },
    infra::tunnel::MarketTunnel,
    util,
};

/// The verified funding backing a trade.
pub struct Funding {
    /// Total value of the accepted outputs, in funding-asset atoms.
    pub value: u64,
    /// Total size in bytes the outputs add to a spending transaction.
    pub spend_size: u32,
    /// The accepted outpoints, in payload order.
    pub outpoints: Vec<Outpoint>,
}

/// Checks the prefix timestamps: the server time is the router's to set,
/// and the client clock must sit inside the allowed offset window.
pub(crate) fn check_times(prefix: &dto::Prefix) -> Result<(), routes::Error> {
    if prefix.server_time != 0 {
        return Err(routes::Error::OrderParameter(
            "server time is not a client field".to_owned(),
        ));
    }
    let offset = util::time::unix_now().abs_diff(prefix.client_time);
    if offset >= MAX_CLOCK_OFFSET_SECS {
        return Err(routes::Error::ClockRange(format!(
            "client time is {offset} s from the server clock"
        )));
    }
    Ok(())
}

impl OrderRouter {
    /// Runs the admission checks shared by limit and market orders and
    /// totals the order's funding. Checks run in a fixed sequence and stop
    /// at the first failure; each step draws a distinct error code that
    /// clients switch on, so the sequence is part of the observable
    /// contract.
    ///
    /// Nothing is reserved here. Outputs are only observed to be unlocked;
    /// the epoch queue takes the actual lock on submission.
    pub(crate) async fn validate_order(
        &self,
        user: &AccountId,
        tunnel: &dyn MarketTunnel,
        assets: &AssetSet,
        prefix: &dto::Prefix,
        trade: &dto::Trade,
        check_lot: bool,
    ) -> Result<Funding, routes::Error> {
        check_times(prefix)?;

        if !assets.receiving.backend.check_address(&trade.address) {
            return Err(routes::Error::OrderParameter(format!(
                "address {} is not valid for asset {}",
                trade.address, assets.receiving.asset.symbol,
            )));
        }

        if trade.quantity == 0 {
            return Err(routes::Error::OrderParameter("zero quantity".to_owned()));
        }
        if check_lot && trade.quantity % assets.base.asset.lot_size != 0 {
            return Err(routes::Error::OrderParameter(format!(
                "quantity {} is not a multiple of the lot size {}",
                trade.quantity, assets.base.asset.lot_size,
            )));
        }

        if trade.utxos.is_empty() {
            return Err(routes::Error::Funding(
                "order specifies no funding utxos".to_owned(),
            ));
        }

        let funding_asset = &assets.funding.asset;
        let mut value = 0u64;
        let mut spend_size = 0u32;
        let mut outpoints = Vec::with_capacity(trade.utxos.len());
        for entry in &trade.utxos {
            let outpoint = entry.outpoint();
            if entry.sigs.is_empty() {
                return Err(routes::Error::Signature(format!(
                    "no ownership signatures for utxo {outpoint}"
                )));
            }
            if entry.pubkeys.len() != entry.sigs.len() {
                return Err(routes::Error::Signature(format!(
                    "utxo {outpoint} carries {} pubkeys for {} signatures",
                    entry.pubkeys.len(),
                    entry.sigs.len(),
                )));
            }
            if tunnel.outpoint_locked(&outpoint) {
                return Err(routes::Error::Funding(format!(
                    "utxo {outpoint} is locked"
                )));
            }
            let utxo = assets
                .funding
                .backend
                .utxo(&entry.txid, entry.vout, &entry.redeem)
                .await
                .map_err(|err| routes::Error::Funding(format!("no utxo {outpoint}: {err}")))?;
            let confirmations = utxo.confirmations().await.map_err(|err| {
                routes::Error::Funding(format!(
                    "confirmations unavailable for utxo {outpoint}: {err}"
                ))
            })?;
            // Change from swaps the dex itself monitors is spendable
            // before it reaches the funding depth.
            if confirmations < funding_asset.fund_conf && !tunnel.tx_monitored(user, &entry.txid)
            {
                return Err(routes::Error::Funding(format!(
                    "utxo {outpoint} has {confirmations} of {} required confirmations",
                    funding_asset.fund_conf,
                )));
            }
            utxo.auth(&entry.pubkeys, &entry.sigs, &entry.serialize())
                .map_err(|err| {
                    routes::Error::UtxoAuth(format!(
                        "utxo {outpoint} authorization rejected: {err}"
                    ))
                })?;

            value += utxo.value();
            spend_size += utxo.spend_size();
            outpoints.push(outpoint);
        }

        Ok(Funding {
            value,
            spend_size,
            outpoints,
        })
    }
}
