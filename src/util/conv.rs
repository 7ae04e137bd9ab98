//! Conversion utilities.

/// Converts a base-asset quantity into its quote-asset counterpart at the
/// given rate, truncating toward zero.
///
/// The floating-point evaluation and the truncation direction are part of the
/// wire contract shared with the matching engine and clients.
pub fn base_to_quote(rate: u64, base: u64) -> u64 {
    (rate as f64 * base as f64) as u64
}

/// Converts a quote-asset quantity into its base-asset counterpart at the
/// given rate, truncating toward zero.
///
/// A zero rate converts to [`u64::MAX`] for any non-zero quantity, which no
/// funding check can satisfy.
pub fn quote_to_base(rate: u64, quote: u64) -> u64 {
    (quote as f64 / rate as f64) as u64
}
