//! Eras - intervals of validity with exact boundary semantics
//!
//! An era is either `Empty` or an interval between two endpoints, tagged
//! Fixed or Floating:
//! - Fixed eras are placed; their endpoints are `Closed` or `Infinite`.
//!   Fixed eras intersect (parallel composition).
//! - Floating eras are templates; their endpoints may be `Open`. Floating
//!   eras sequence (end-to-end composition), where an `Open` end is fused
//!   with the neighbour's `Closed` end.
//!
//! INVARIANT: a non-empty era has `lower <= upper`. Any construction that
//! would break this yields `Empty` instead.

use std::fmt;

use crate::endpoint::{compatible, max_lower, min_upper};
use crate::{Duration, Endpoint, EndpointKind, EraKind, KairosError, KairosResult, Time};

/// Extent of an era, without its placement tag
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Extent<T> {
    Empty,
    Interval {
        lower: Endpoint<T>,
        upper: Endpoint<T>,
    },
}

/// An interval of time tagged Fixed or Floating
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Era<T> {
    kind: EraKind,
    extent: Extent<T>,
}

impl<T: Time> Era<T> {
    /// The bi-infinite Fixed era, identity of `intersect`
    pub fn all_time() -> Self {
        Era {
            kind: EraKind::Fixed,
            extent: Extent::Interval {
                lower: Endpoint::Infinite,
                upper: Endpoint::Infinite,
            },
        }
    }

    /// The empty era, annihilator of `intersect` and identity of `sequence`
    pub fn empty(kind: EraKind) -> Self {
        Era {
            kind,
            extent: Extent::Empty,
        }
    }

    /// Fixed era between two `Closed`/`Infinite` endpoints
    pub fn fixed(lower: Endpoint<T>, upper: Endpoint<T>) -> KairosResult<Self> {
        if !lower.kind().is_fixed_compatible() || !upper.kind().is_fixed_compatible() {
            tracing::debug!("Rejecting fixed era with open endpoint: {:?}, {:?}", lower, upper);
            return Err(KairosError::InvalidEraShape("fixed era with an open endpoint"));
        }
        Ok(Self::canonical(EraKind::Fixed, lower, upper))
    }

    /// Fixed era `[start, end]`
    pub fn closed(start: T, end: T) -> Self {
        Self::canonical(EraKind::Fixed, Endpoint::Closed(start), Endpoint::Closed(end))
    }

    /// Floating era between two endpoints of any kind
    pub fn floating(lower: Endpoint<T>, upper: Endpoint<T>) -> KairosResult<Self> {
        Self::canonical(EraKind::Floating, lower, upper).well_formed()
    }

    fn canonical(kind: EraKind, lower: Endpoint<T>, upper: Endpoint<T>) -> Self {
        let extent = match (lower.time(), upper.time()) {
            (Some(l), Some(u)) if l > u => Extent::Empty,
            _ => Extent::Interval { lower, upper },
        };
        Era { kind, extent }
    }

    /// Reject the zero-width doubly-open interval
    fn well_formed(self) -> KairosResult<Self> {
        if let Extent::Interval {
            lower: Endpoint::Open(l),
            upper: Endpoint::Open(u),
        } = self.extent
        {
            if l == u {
                tracing::debug!("Rejecting zero-width doubly-open era at {:?}", l);
                return Err(KairosError::InvalidEraShape("zero-width doubly-open era"));
            }
        }
        Ok(self)
    }

    fn expect_kind(&self, expected: EraKind) -> KairosResult<()> {
        if self.kind == expected {
            Ok(())
        } else {
            tracing::debug!("Era kind mismatch: expected {:?}, found {:?}", expected, self.kind);
            Err(KairosError::EraKindMismatch {
                expected,
                found: self.kind,
            })
        }
    }

    #[inline]
    pub fn kind(&self) -> EraKind {
        self.kind
    }

    #[inline]
    pub fn extent(&self) -> Extent<T> {
        self.extent
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self.extent, Extent::Empty)
    }

    /// Lower endpoint, `None` if empty
    #[inline]
    pub fn lower(&self) -> Option<Endpoint<T>> {
        match self.extent {
            Extent::Interval { lower, .. } => Some(lower),
            Extent::Empty => None,
        }
    }

    /// Upper endpoint, `None` if empty
    #[inline]
    pub fn upper(&self) -> Option<Endpoint<T>> {
        match self.extent {
            Extent::Interval { upper, .. } => Some(upper),
            Extent::Empty => None,
        }
    }

    /// Lower boundary instant, `None` if empty or unbounded below
    #[inline]
    pub fn start(&self) -> Option<T> {
        self.lower().and_then(|e| e.time())
    }

    /// Upper boundary instant, `None` if empty or unbounded above
    #[inline]
    pub fn end(&self) -> Option<T> {
        self.upper().and_then(|e| e.time())
    }

    /// Non-empty and bounded on both ends
    pub fn is_finite(&self) -> bool {
        self.start().is_some() && self.end().is_some()
    }

    /// Distance between the boundary instants of a finite era
    pub fn duration(&self) -> Option<T::Duration> {
        Some(self.end()?.since(self.start()?))
    }

    /// Whether `t` belongs to the era, honouring endpoint kinds
    pub fn contains(&self, t: T) -> bool {
        match self.extent {
            Extent::Interval { lower, upper } => lower.admits_from_below(t) && upper.admits_from_above(t),
            Extent::Empty => false,
        }
    }

    /// Intersection of two Fixed eras
    ///
    /// Commutative and associative. `Empty` annihilates, `all_time()` is
    /// the identity.
    pub fn intersect(&self, other: &Self) -> KairosResult<Self> {
        self.expect_kind(EraKind::Fixed)?;
        other.expect_kind(EraKind::Fixed)?;
        Ok(self.meet(other))
    }

    pub(crate) fn meet(&self, other: &Self) -> Self {
        match (self.extent, other.extent) {
            (
                Extent::Interval { lower: l1, upper: u1 },
                Extent::Interval { lower: l2, upper: u2 },
            ) => Self::canonical(self.kind, max_lower(l1, l2), min_upper(u1, u2)),
            _ => Self::empty(self.kind),
        }
    }

    /// Glue `next` after `self`
    ///
    /// `next` is translated so that its lower instant coincides with the
    /// upper instant of `self`, then both are fused at that instant. The
    /// join must be finite and exactly one side `Closed`. An empty operand
    /// contributes no extent and is dropped.
    pub fn sequence(&self, next: &Self) -> KairosResult<Self> {
        self.fuse(next).map(|(era, _)| era)
    }

    /// `sequence`, also returning the join instant and the offset applied
    /// to `next`; `None` when an operand was empty and nothing was joined
    pub(crate) fn fuse(&self, next: &Self) -> KairosResult<(Self, Option<(T, T::Duration)>)> {
        self.expect_kind(EraKind::Floating)?;
        next.expect_kind(EraKind::Floating)?;

        let (lower, upper) = match self.extent {
            Extent::Interval { lower, upper } => (lower, upper),
            Extent::Empty => return Ok((*next, None)),
        };
        let (next_lower, next_upper) = match next.extent {
            Extent::Interval { lower, upper } => (lower, upper),
            Extent::Empty => return Ok((*self, None)),
        };

        let (deadline, offset) = join_offset(upper, next_lower)?;
        let era = Self::canonical(EraKind::Floating, lower, next_upper.shift(offset)).well_formed()?;
        Ok((era, Some((deadline, offset))))
    }

    /// Translate both finite endpoints
    pub fn shift(&self, by: T::Duration) -> Self {
        let extent = match self.extent {
            Extent::Interval { lower, upper } => Extent::Interval {
                lower: lower.shift(by),
                upper: upper.shift(by),
            },
            Extent::Empty => Extent::Empty,
        };
        Era {
            kind: self.kind,
            extent,
        }
    }

    /// Exclude the upper instant of a Floating era
    ///
    /// Fails on an empty era: there is no instant to exclude, and a
    /// zero-width doubly-open era is not a valid result either.
    pub fn open_upper(&self) -> KairosResult<Self> {
        self.reshape(|lower, upper| (lower, upper.to_open()))
    }

    /// Exclude the lower instant of a Floating era
    pub fn open_lower(&self) -> KairosResult<Self> {
        self.reshape(|lower, upper| (lower.to_open(), upper))
    }

    fn reshape(
        &self,
        f: impl FnOnce(Endpoint<T>, Endpoint<T>) -> (Endpoint<T>, Endpoint<T>),
    ) -> KairosResult<Self> {
        self.expect_kind(EraKind::Floating)?;
        match self.extent {
            Extent::Interval { lower, upper } => {
                let (lower, upper) = f(lower, upper);
                Self::canonical(EraKind::Floating, lower, upper).well_formed()
            }
            Extent::Empty => {
                tracing::debug!("Rejecting attempt to open a bound of an empty era");
                Err(KairosError::InvalidEraShape("cannot open a bound of an empty era"))
            }
        }
    }

    /// Include the upper instant of a Floating era
    ///
    /// An empty era becomes the zero-width era `[origin, origin]`. Its
    /// absolute placement is immaterial since it is Floating.
    pub fn close_upper(&self) -> KairosResult<Self> {
        self.close_with(|lower, upper| (lower, upper.to_closed()))
    }

    /// Include the lower instant of a Floating era
    pub fn close_lower(&self) -> KairosResult<Self> {
        self.close_with(|lower, upper| (lower.to_closed(), upper))
    }

    fn close_with(
        &self,
        f: impl FnOnce(Endpoint<T>, Endpoint<T>) -> (Endpoint<T>, Endpoint<T>),
    ) -> KairosResult<Self> {
        self.expect_kind(EraKind::Floating)?;
        let (lower, upper) = match self.extent {
            Extent::Interval { lower, upper } => f(lower, upper),
            Extent::Empty => (Endpoint::Closed(T::origin()), Endpoint::Closed(T::origin())),
        };
        Ok(Self::canonical(EraKind::Floating, lower, upper))
    }

    /// Place a Floating era, which requires it to have no `Open` endpoint
    pub fn fix(&self) -> KairosResult<Self> {
        match self.extent {
            Extent::Interval { lower, upper } => Self::fixed(lower, upper),
            Extent::Empty => Ok(Self::empty(EraKind::Fixed)),
        }
    }

    /// Turn into a Floating template
    pub fn float(&self) -> Self {
        Era {
            kind: EraKind::Floating,
            extent: self.extent,
        }
    }

    /// Mirror a finite era around its midpoint
    ///
    /// The endpoint kinds swap ends: `[0, 5)` becomes `(0, 5]`.
    pub fn reverse(&self) -> KairosResult<Self> {
        match self.extent {
            Extent::Interval { lower, upper } => {
                let (Some(start), Some(end)) = (lower.time(), upper.time()) else {
                    return Err(KairosError::UnboundedEra);
                };
                Ok(Self::canonical(
                    self.kind,
                    with_kind(upper.kind(), start),
                    with_kind(lower.kind(), end),
                ))
            }
            Extent::Empty => Ok(*self),
        }
    }

    /// Scale the era about its lower instant
    ///
    /// An unbounded upper end stays unbounded.
    pub fn stretch(&self, factor: f64) -> KairosResult<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            tracing::debug!("Rejecting stretch factor {}", factor);
            return Err(KairosError::NonPositiveFactor(factor));
        }
        match self.extent {
            Extent::Interval { lower, upper } => {
                let Some(start) = lower.time() else {
                    return Err(KairosError::UnboundedEra);
                };
                let upper = match upper.time() {
                    Some(end) => with_kind(upper.kind(), start.offset(end.since(start).scale(factor))),
                    None => Endpoint::Infinite,
                };
                Self::canonical(self.kind, lower, upper).well_formed()
            }
            Extent::Empty => Ok(*self),
        }
    }
}

/// Join instant, and the offset that moves the next lower instant onto it
fn join_offset<T: Time>(
    upper: Endpoint<T>,
    next_lower: Endpoint<T>,
) -> KairosResult<(T, T::Duration)> {
    let (Some(deadline), Some(start)) = (upper.time(), next_lower.time()) else {
        tracing::debug!("Rejecting join at non-finite bounds: {:?}, {:?}", upper, next_lower);
        return Err(KairosError::NonFiniteJoin);
    };
    if !compatible(upper.kind(), next_lower.kind()) {
        tracing::debug!(
            "Rejecting join of incompatible kinds: {:?} then {:?}",
            upper.kind(),
            next_lower.kind()
        );
        return Err(KairosError::IncompatibleBoundaryKind {
            upper: upper.kind(),
            lower: next_lower.kind(),
        });
    }
    Ok((deadline, deadline.since(start)))
}

fn with_kind<T: Time>(kind: EndpointKind, t: T) -> Endpoint<T> {
    match kind {
        EndpointKind::Closed => Endpoint::Closed(t),
        EndpointKind::Open => Endpoint::Open(t),
        EndpointKind::Infinite => Endpoint::Infinite,
    }
}

impl<T: Time> Default for Era<T> {
    fn default() -> Self {
        Self::all_time()
    }
}

impl<T: fmt::Display> fmt::Display for Era<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.extent {
            Extent::Interval { lower, upper } => {
                lower.fmt_lower(f)?;
                write!(f, ", ")?;
                upper.fmt_upper(f)
            }
            Extent::Empty => write!(f, "empty"),
        }
    }
}
