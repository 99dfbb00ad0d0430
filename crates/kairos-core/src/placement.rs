//! Fixed/Floating placement
//!
//! `EraKind` is the runtime tag carried by every `Era`. The uninhabited
//! marker types `Fixed` and `Floating` carry the same information in the
//! type of an `Active`, so that parallel composition only exists on Fixed
//! values and sequential composition only on Floating ones.

/// Runtime placement tag of an era
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EraKind {
    /// Concretely placed, endpoints `Closed` or `Infinite`
    Fixed,
    /// Relocatable template, endpoints may be `Open`
    Floating,
}

mod sealed {
    pub trait Sealed {}
}

/// Type-level placement of an `Active`
pub trait Placement: sealed::Sealed + Send + Sync + 'static {
    const KIND: EraKind;
}

/// Marker for Fixed actives
#[derive(Debug)]
pub enum Fixed {}

/// Marker for Floating actives
#[derive(Debug)]
pub enum Floating {}

impl sealed::Sealed for Fixed {}
impl sealed::Sealed for Floating {}

impl Placement for Fixed {
    const KIND: EraKind = EraKind::Fixed;
}

impl Placement for Floating {
    const KIND: EraKind = EraKind::Floating;
}
