//! Money amounts.
//!
//! Prices are kept as whole cents so that order totals add up exactly. On the wire a
//! `Betrag` is a decimal string with two fraction digits (`"19.99"`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Betrag(u64);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid amount: {0:?}")]
pub struct BetragParseError(String);

impl Betrag {
    pub const NULL: Betrag = Betrag(0);

    pub const fn from_cent(cent: u64) -> Self {
        Self(cent)
    }

    pub const fn cent(self) -> u64 {
        self.0
    }

    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Betrag) -> Option<Betrag> {
        self.0.checked_add(other.0).map(Betrag)
    }

    pub fn checked_mul(self, anzahl: u32) -> Option<Betrag> {
        self.0.checked_mul(u64::from(anzahl)).map(Betrag)
    }

    /// Sum of all amounts, `None` on overflow.
    pub fn summe(betraege: impl IntoIterator<Item = Betrag>) -> Option<Betrag> {
        betraege
            .into_iter()
            .try_fold(Betrag::NULL, |acc, b| acc.checked_add(b))
    }
}

impl fmt::Display for Betrag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Betrag {
    type Err = BetragParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || BetragParseError(s.to_string());
        let (ganz, bruch) = match s.trim().split_once('.') {
            Some((ganz, bruch)) => (ganz, bruch),
            None => (s.trim(), ""),
        };
        if ganz.is_empty()
            || bruch.len() > 2
            || !ganz.bytes().all(|b| b.is_ascii_digit())
            || !bruch.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(err());
        }
        let ganz: u64 = ganz.parse().map_err(|_| err())?;
        let bruch: u64 = match bruch.len() {
            0 => 0,
            1 => bruch.parse::<u64>().map_err(|_| err())? * 10,
            _ => bruch.parse().map_err(|_| err())?,
        };
        ganz.checked_mul(100)
            .and_then(|c| c.checked_add(bruch))
            .map(Betrag)
            .ok_or_else(err)
    }
}

impl Serialize for Betrag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Betrag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
