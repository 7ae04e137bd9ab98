//! The domain objects representing accepted client orders.

use {
    crate::{
        domain::{
            account::{ACCOUNT_ID_SIZE, AccountId},
            asset::AssetId,
        },
        util,
    },
    sha2::{Digest, Sha256},
    std::fmt::{self, Debug, Display, Formatter},
};

/// The width in bytes of an order identifier.
pub const ORDER_ID_SIZE: usize = 32;

/// An order identifier: the SHA-256 digest of the order's canonical
/// serialization.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct OrderId(pub [u8; ORDER_ID_SIZE]);

impl Debug for OrderId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("OrderId")
            .field(&util::fmt::Hex(&self.0))
            .finish()
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(&util::fmt::Hex(&self.0), f)
    }
}

/// The order type. Codes are shared with clients.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Type {
    Limit = 1,
    Market = 2,
    Cancel = 3,
}

impl Type {
    /// The wire code for this order type.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// The trading side of an order. Codes are shared with clients.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    /// Buy the base asset with the quote asset.
    Buy = 1,
    /// Sell the base asset for the quote asset.
    Sell = 2,
}

impl Side {
    /// Decodes a wire side code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Buy),
            2 => Some(Self::Sell),
            _ => None,
        }
    }

    /// The wire code for this side.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// The time-in-force of a limit order. Codes are shared with clients.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimeInForce {
    /// Rest on the book if not filled in the current epoch.
    Standing = 1,
    /// Fill in the current epoch only.
    Immediate = 2,
}

impl TimeInForce {
    /// Decodes a wire time-in-force code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Standing),
            2 => Some(Self::Immediate),
            _ => None,
        }
    }

    /// The wire code for this time-in-force.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// The (txid, vout) pair identifying one unspent transaction output.
/// Identity is by value.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Outpoint {
    pub txid: Vec<u8>,
    pub vout: u32,
}

impl Outpoint {
    /// Canonical serialization: the txid bytes followed by the big-endian
    /// vout. This is the message the output's ownership signatures commit
    /// to.
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.txid.len() + 4);
        buf.extend_from_slice(&self.txid);
        buf.extend_from_slice(&self.vout.to_be_bytes());
        buf
    }
}

impl Debug for Outpoint {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("Outpoint")
            .field(&util::fmt::Hex(&self.txid))
            .field(&self.vout)
            .finish()
    }
}

impl Display for Outpoint {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:{}", util::fmt::Hex(&self.txid), self.vout)
    }
}

/// The fields common to all order types.
#[derive(Clone, Debug)]
pub struct Prefix {
    pub account_id: AccountId,
    pub base: AssetId,
    pub quote: AssetId,
    pub order_type: Type,
    /// Client-supplied unix seconds.
    pub client_time: u64,
    /// Unix seconds stamped by the router at acceptance.
    pub server_time: u64,
}

impl Prefix {
    /// Canonical serialization: account ‖ base ‖ quote ‖ type ‖ client time
    /// ‖ server time, integers big-endian.
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(ACCOUNT_ID_SIZE + 25);
        buf.extend_from_slice(&self.account_id.0);
        buf.extend_from_slice(&self.base.0.to_be_bytes());
        buf.extend_from_slice(&self.quote.0.to_be_bytes());
        buf.push(self.order_type.code());
        buf.extend_from_slice(&self.client_time.to_be_bytes());
        buf.extend_from_slice(&self.server_time.to_be_bytes());
        buf
    }
}

/// The trade fields shared by limit and market orders. The outpoints are
/// the validated funding outputs, in payload order.
#[derive(Clone, Debug)]
pub struct Trade {
    pub outpoints: Vec<Outpoint>,
    pub sell: bool,
    /// Order quantity in base-asset atoms, except for market buys, which
    /// are denominated in the quote asset.
    pub quantity: u64,
    /// The receiving-asset address matches are paid to.
    pub address: String,
}

impl Trade {
    fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        for outpoint in &self.outpoints {
            buf.extend_from_slice(&outpoint.serialize());
        }
        buf.push(self.side().code());
        buf.extend_from_slice(&self.quantity.to_be_bytes());
        buf.extend_from_slice(self.address.as_bytes());
        buf
    }

    pub fn side(&self) -> Side {
        if self.sell { Side::Sell } else { Side::Buy }
    }
}

/// A limit order: a trade at a rate no worse than `rate`.
#[derive(Clone, Debug)]
pub struct LimitOrder {
    pub prefix: Prefix,
    pub trade: Trade,
    /// Quote atoms per base atom, a multiple of the quote asset's rate
    /// step.
    pub rate: u64,
    pub tif: TimeInForce,
}

/// A market order: a trade at whatever rate the epoch match produces.
#[derive(Clone, Debug)]
pub struct MarketOrder {
    pub prefix: Prefix,
    pub trade: Trade,
}

/// A cancellation of a standing limit order.
#[derive(Clone, Debug)]
pub struct CancelOrder {
    pub prefix: Prefix,
    pub target: OrderId,
}

/// A client order accepted by the router.
#[derive(Clone, Debug)]
pub enum Order {
    Limit(LimitOrder),
    Market(MarketOrder),
    Cancel(CancelOrder),
}

impl Order {
    pub fn prefix(&self) -> &Prefix {
        match self {
            Self::Limit(order) => &order.prefix,
            Self::Market(order) => &order.prefix,
            Self::Cancel(order) => &order.prefix,
        }
    }

    /// The server timestamp stamped at acceptance.
    pub fn time(&self) -> u64 {
        self.prefix().server_time
    }

    /// Canonical serialization: the prefix followed by the type-specific
    /// fields, integers big-endian.
    pub fn serialize(&self) -> Vec<u8> {
        match self {
            Self::Limit(order) => {
                let mut buf = order.prefix.serialize();
                buf.extend_from_slice(&order.trade.serialize());
                buf.extend_from_slice(&order.rate.to_be_bytes());
                buf.push(order.tif.code());
                buf
            }
            Self::Market(order) => {
                let mut buf = order.prefix.serialize();
                buf.extend_from_slice(&order.trade.serialize());
                buf
            }
            Self::Cancel(order) => {
                let mut buf = order.prefix.serialize();
                buf.extend_from_slice(&order.target.0);
                buf
            }
        }
    }

    /// The order's identity: the SHA-256 digest of its canonical
    /// serialization.
    pub fn id(&self) -> OrderId {
        OrderId(Sha256::digest(self.serialize()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit() -> Order {
        Order::Limit(LimitOrder {
            prefix: Prefix {
                account_id: AccountId([0x0a; ACCOUNT_ID_SIZE]),
                base: AssetId(7),
                quote: AssetId(3),
                order_type: Type::Limit,
                client_time: 1_700_000_000,
                server_time: 1_700_000_001,
            },
            trade: Trade {
                outpoints: vec![Outpoint {
                    txid: vec![0x01; 32],
                    vout: 2,
                }],
                sell: true,
                quantity: 2_000_000,
                address: "addr".to_owned(),
            },
            rate: 50,
            tif: TimeInForce::Standing,
        })
    }

    #[test]
    fn id_is_stable_and_distinguishes_orders() {
        assert_eq!(limit().id(), limit().id());

        let mut other = limit();
        if let Order::Limit(order) = &mut other {
            order.rate += 1;
        }
        assert_ne!(limit().id(), other.id());
    }

    #[test]
    fn serialization_is_field_ordered() {
        let buf = limit().serialize();
        // account ‖ base ‖ quote ‖ type ‖ times, then the trade section,
        // then rate and time-in-force.
        assert_eq!(buf[..32], [0x0a; 32]);
        assert_eq!(buf[32..36], 7u32.to_be_bytes());
        assert_eq!(buf[36..40], 3u32.to_be_bytes());
        assert_eq!(buf[40], Type::Limit.code());
        let trade_start = 32 + 25;
        assert_eq!(buf[trade_start..trade_start + 32], [0x01; 32]);
        assert_eq!(buf[buf.len() - 1], TimeInForce::Standing.code());
    }

    #[test]
    fn wire_codes_round_trip() {
        for side in [Side::Buy, Side::Sell] {
            assert_eq!(Side::from_code(side.code()), Some(side));
        }
        for tif in [TimeInForce::Standing, TimeInForce::Immediate] {
            assert_eq!(TimeInForce::from_code(tif.code()), Some(tif));
        }
        assert_eq!(Side::from_code(0), None);
        assert_eq!(TimeInForce::from_code(3), None);
    }

    #[test]
    fn outpoint_displays_as_txid_vout() {
        let outpoint = Outpoint {
            txid: vec![0xab, 0xcd],
            vout: 1,
        };
        assert_eq!(outpoint.to_string(), "abcd:1");
        assert_eq!(outpoint.serialize(), vec![0xab, 0xcd, 0, 0, 0, 1]);
    }
}
