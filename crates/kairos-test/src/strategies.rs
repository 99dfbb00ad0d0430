//! Proptest strategies for eras
//!
//! All generated instants are integer-valued `f64`s so that translation and
//! sequencing arithmetic stays exact and laws can be checked with `==`.

use kairos_core::{Endpoint, Era, EraKind};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

/// Law checking configuration
#[derive(Clone, Debug)]
pub struct LawConfig {
    /// Cases per property
    pub cases: u32,
    /// Instants are drawn from `-coordinate_range..=coordinate_range`
    pub coordinate_range: i32,
}

impl Default for LawConfig {
    fn default() -> Self {
        LawConfig {
            cases: 256,
            coordinate_range: 100,
        }
    }
}

impl LawConfig {
    /// Few cases over a narrow range, so ties between endpoints are common
    pub fn light() -> Self {
        LawConfig {
            cases: 64,
            coordinate_range: 8,
        }
    }

    /// Many cases over a wide range
    pub fn heavy() -> Self {
        LawConfig {
            cases: 4096,
            coordinate_range: 1_000_000,
        }
    }

    /// Runner configuration for `proptest!`
    pub fn proptest(&self) -> ProptestConfig {
        ProptestConfig::with_cases(self.cases)
    }
}

/// Integer-valued instant
pub fn arb_time(range: i32) -> impl Strategy<Value = f64> {
    (-range..=range).prop_map(f64::from)
}

/// Integer-valued non-negative duration
pub fn arb_length(range: i32) -> impl Strategy<Value = f64> {
    (0..=range).prop_map(f64::from)
}

/// `Closed` or `Infinite`
pub fn arb_fixed_endpoint(range: i32) -> impl Strategy<Value = Endpoint<f64>> {
    prop_oneof![
        1 => Just(Endpoint::Infinite),
        4 => arb_time(range).prop_map(Endpoint::Closed),
    ]
}

/// Any endpoint kind
pub fn arb_endpoint(range: i32) -> impl Strategy<Value = Endpoint<f64>> {
    prop_oneof![
        1 => Just(Endpoint::Infinite),
        3 => arb_time(range).prop_map(Endpoint::Closed),
        3 => arb_time(range).prop_map(Endpoint::Open),
    ]
}

/// Fixed era, occasionally empty
pub fn arb_fixed_era(range: i32) -> impl Strategy<Value = Era<f64>> {
    prop_oneof![
        1 => Just(Era::empty(EraKind::Fixed)),
        6 => (arb_fixed_endpoint(range), arb_fixed_endpoint(range))
            .prop_filter_map("fixed endpoints", |(l, u)| Era::fixed(l, u).ok()),
    ]
}

/// Floating era of any shape
pub fn arb_floating_era(range: i32) -> impl Strategy<Value = Era<f64>> {
    prop_oneof![
        1 => Just(Era::empty(EraKind::Floating)),
        6 => (arb_endpoint(range), arb_endpoint(range))
            .prop_filter_map("well-formed floating era", |(l, u)| Era::floating(l, u).ok()),
    ]
}

/// Non-empty Floating era bounded on both ends, with the given end kinds
pub fn arb_finite_floating_era(
    range: i32,
    lower_open: bool,
    upper_open: bool,
) -> impl Strategy<Value = Era<f64>> {
    (arb_time(range), arb_length(range))
        .prop_filter("open instants need width", move |(_, len)| {
            !(lower_open && upper_open && *len == 0.0)
        })
        .prop_filter_map("well-formed floating era", move |(start, len)| {
            let lower = if lower_open {
                Endpoint::Open(start)
            } else {
                Endpoint::Closed(start)
            };
            let upper = if upper_open {
                Endpoint::Open(start + len)
            } else {
                Endpoint::Closed(start + len)
            };
            Era::floating(lower, upper).ok()
        })
}
