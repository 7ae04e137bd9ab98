//! Client account identity.

use {
    crate::util,
    std::fmt::{self, Debug, Display, Formatter},
};

/// The width in bytes of an account identifier.
pub const ACCOUNT_ID_SIZE: usize = 32;

/// An authenticated client identity. Equality is byte equality.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct AccountId(pub [u8; ACCOUNT_ID_SIZE]);

impl Debug for AccountId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("AccountId")
            .field(&util::fmt::Hex(&self.0))
            .finish()
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(&util::fmt::Hex(&self.0), f)
    }
}
