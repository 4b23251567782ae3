use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of guests an order is sized for, clamped to `1..=Headcount::MAX`.
///
/// Every constructor clamps, including deserialisation, so downstream arithmetic
/// (divisions, `ceil`) never sees zero or a negative count, and serving counts
/// derived from it stay well inside `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u32")]
pub struct Headcount(u32);

impl Headcount {
    pub const MIN: Headcount = Headcount(1);

    /// Largest event the engine will size.
    pub const MAX: Headcount = Headcount(100_000);

    /// Headcount a fresh session starts with.
    pub const DEFAULT: Headcount = Headcount(10);

    pub fn new(guests: i64) -> Self {
        Self(guests.clamp(1, i64::from(Self::MAX.0)) as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for Headcount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i64> for Headcount {
    fn from(guests: i64) -> Self {
        Self::new(guests)
    }
}

impl From<u32> for Headcount {
    fn from(guests: u32) -> Self {
        Self::new(i64::from(guests))
    }
}

impl From<Headcount> for u32 {
    fn from(h: Headcount) -> Self {
        h.0
    }
}

impl fmt::Display for Headcount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_one() {
        assert_eq!(Headcount::new(-5).get(), 1);
        assert_eq!(Headcount::new(0).get(), 1);
        assert_eq!(Headcount::new(1).get(), 1);
        assert_eq!(Headcount::new(50).get(), 50);
        assert_eq!(Headcount::from(0u32), Headcount::MIN);
    }

    #[test]
    fn clamps_to_max() {
        assert_eq!(Headcount::new(100_000), Headcount::MAX);
        assert_eq!(Headcount::new(3_000_000_000), Headcount::MAX);
        assert_eq!(Headcount::new(i64::MAX), Headcount::MAX);
        assert_eq!(Headcount::from(u32::MAX), Headcount::MAX);
        let h: Headcount = serde_json::from_str("9000000000").unwrap();
        assert_eq!(h, Headcount::MAX);
    }

    #[test]
    fn deserialize_clamps() {
        let h: Headcount = serde_json::from_str("-3").unwrap();
        assert_eq!(h, Headcount::MIN);
        let h: Headcount = serde_json::from_str("25").unwrap();
        assert_eq!(serde_json::to_string(&h).unwrap(), "25");
    }
}
