/*
[INPUT]:  Integer amounts from request arguments and API payloads
[OUTPUT]: Sats quantity type with explicit arithmetic
[POS]:    Data layer - currency unit shared by every amount field
[UPDATE]: When amount semantics or supported operations change
*/

use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// An amount in satoshis.
///
/// Serialized as a bare JSON integer. Differences may be negative. The
/// operators saturate at the `i64` bounds instead of overflowing; use
/// `checked_add`/`checked_sub` to detect that case.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Sats(pub i64);

impl Sats {
    pub const ZERO: Sats = Sats(0);

    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub const fn checked_add(self, rhs: Sats) -> Option<Sats> {
        match self.0.checked_add(rhs.0) {
            Some(value) => Some(Sats(value)),
            None => None,
        }
    }

    pub const fn checked_sub(self, rhs: Sats) -> Option<Sats> {
        match self.0.checked_sub(rhs.0) {
            Some(value) => Some(Sats(value)),
            None => None,
        }
    }
}

impl From<i64> for Sats {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Sats> for i64 {
    fn from(value: Sats) -> Self {
        value.0
    }
}

impl Add for Sats {
    type Output = Sats;

    fn add(self, rhs: Sats) -> Sats {
        Sats(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Sats {
    type Output = Sats;

    fn sub(self, rhs: Sats) -> Sats {
        Sats(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Sats {
    type Output = Sats;

    fn neg(self) -> Sats {
        Sats(self.0.saturating_neg())
    }
}

impl fmt::Display for Sats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sats", self.0)
    }
}
