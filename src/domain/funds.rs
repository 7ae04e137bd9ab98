//! Minimum funding for a swap.

use crate::domain::asset::Asset;

/// Computes the minimum funding value for a swap of `swap_val` atoms spent
/// from inputs totalling `spend_size` bytes, priced with the funding asset's
/// parameters:
///
/// ```text
/// required = swap_val + floor(swap_val * swap_size * fee_rate / lot_size)
///          + spend_size * fee_rate
/// ```
///
/// The per-value fee rate is evaluated in floating point and the product
/// truncates toward zero. Both are part of the wire contract: clients
/// compute the same bound when choosing funding outputs.
pub fn required_funds(swap_val: u64, spend_size: u32, funding: &Asset) -> u64 {
    let rate = funding.swap_size as f64 * funding.fee_rate as f64 / funding.lot_size as f64;
    let fee_base = (swap_val as f64 * rate) as u64;
    let fee_input = u64::from(spend_size) * funding.fee_rate;
    swap_val + fee_base + fee_input
}
