//! Kairos Test Harness - Law checking and scenario tooling
//!
//! This crate provides:
//! - Proptest strategies for endpoints and eras, sized by `LawConfig`
//! - A piecewise-constant `Timeline` builder for end-to-end scenarios
//! - Sampling probes that respect era bounds
//!
//! The law tests live in `tests/`, the benchmarks in `benches/`.

pub mod strategies;
pub mod timeline;

pub use strategies::*;
pub use timeline::*;
