//! `RawEnum`: a closed set of cases, each with a fixed string.
//!
//! `One` and `Two` take their raw representation from the lowercased case
//! name; `Three` overrides it.

use strum::{EnumCount, IntoEnumIterator};

/// Three cases, each tied to one raw string.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumCount,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum RawEnum {
    One,
    Two,
    #[strum(serialize = "Hey, three")]
    Three,
}

impl RawEnum {
    /// Every case, in declaration order.
    pub const ALL: [RawEnum; RawEnum::COUNT] = [RawEnum::One, RawEnum::Two, RawEnum::Three];

    /// Iterate over every case, in declaration order.
    pub fn iter() -> RawEnumIter {
        <Self as IntoEnumIterator>::iter()
    }

    /// The fixed string for this case.
    #[inline]
    pub fn raw_representation(self) -> &'static str {
        <&'static str>::from(self)
    }

    /// The case whose raw representation is exactly `raw`, if any.
    pub fn from_raw(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    /// Whether the raw representation was assigned explicitly rather than
    /// derived from the case name.
    pub const fn has_explicit_raw(self) -> bool {
        match self {
            RawEnum::One | RawEnum::Two => false,
            RawEnum::Three => true,
        }
    }
}
