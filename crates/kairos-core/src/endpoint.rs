//! Interval boundaries
//!
//! An `Endpoint` is one end of an era. Its kind decides whether the boundary
//! instant itself belongs to the era:
//! - `Closed(t)`: `t` is included
//! - `Open(t)`: `t` is excluded
//! - `Infinite`: unbounded, direction implied by position (lower/upper)

use std::fmt;

use crate::Time;

/// Boundary kind without the boundary value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    Closed,
    Open,
    Infinite,
}

impl EndpointKind {
    /// Whether the kind is allowed in a Fixed era
    #[inline]
    pub fn is_fixed_compatible(self) -> bool {
        self != EndpointKind::Open
    }
}

/// One boundary of an era
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Endpoint<T> {
    Closed(T),
    Open(T),
    Infinite,
}

impl<T: Time> Endpoint<T> {
    #[inline]
    pub fn kind(&self) -> EndpointKind {
        match self {
            Endpoint::Closed(_) => EndpointKind::Closed,
            Endpoint::Open(_) => EndpointKind::Open,
            Endpoint::Infinite => EndpointKind::Infinite,
        }
    }

    /// Boundary instant, `None` for `Infinite`
    #[inline]
    pub fn time(&self) -> Option<T> {
        match *self {
            Endpoint::Closed(t) | Endpoint::Open(t) => Some(t),
            Endpoint::Infinite => None,
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        !matches!(self, Endpoint::Infinite)
    }

    /// Same instant, excluded
    #[inline]
    pub fn to_open(self) -> Self {
        match self {
            Endpoint::Closed(t) | Endpoint::Open(t) => Endpoint::Open(t),
            Endpoint::Infinite => Endpoint::Infinite,
        }
    }

    /// Same instant, included
    ///
    /// At the era level only the kind changes. An `Active` closing a bound
    /// must also say what it samples to at the new instant, see
    /// `Active::close_upper`.
    #[inline]
    pub fn to_closed(self) -> Self {
        match self {
            Endpoint::Closed(t) | Endpoint::Open(t) => Endpoint::Closed(t),
            Endpoint::Infinite => Endpoint::Infinite,
        }
    }

    /// Translate a finite boundary
    #[inline]
    pub fn shift(self, by: T::Duration) -> Self {
        match self {
            Endpoint::Closed(t) => Endpoint::Closed(t.offset(by)),
            Endpoint::Open(t) => Endpoint::Open(t.offset(by)),
            Endpoint::Infinite => Endpoint::Infinite,
        }
    }

    /// Whether `t` lies on the inner side of this boundary used as a lower bound
    #[inline]
    pub fn admits_from_below(&self, t: T) -> bool {
        match *self {
            Endpoint::Closed(l) => t >= l,
            Endpoint::Open(l) => t > l,
            Endpoint::Infinite => true,
        }
    }

    /// Whether `t` lies on the inner side of this boundary used as an upper bound
    #[inline]
    pub fn admits_from_above(&self, t: T) -> bool {
        match *self {
            Endpoint::Closed(u) => t <= u,
            Endpoint::Open(u) => t < u,
            Endpoint::Infinite => true,
        }
    }
}

/// Later of two lower bounds
///
/// On a tie the result is `Open` if either side is `Open`: an instant
/// excluded by either bound stays excluded. `Infinite` is the identity.
pub fn max_lower<T: Time>(a: Endpoint<T>, b: Endpoint<T>) -> Endpoint<T> {
    tighter(a, b, |x, y| x > y)
}

/// Earlier of two upper bounds
///
/// Tie-breaks to `Open`, `Infinite` is the identity.
pub fn min_upper<T: Time>(a: Endpoint<T>, b: Endpoint<T>) -> Endpoint<T> {
    tighter(a, b, |x, y| x < y)
}

fn tighter<T: Time>(a: Endpoint<T>, b: Endpoint<T>, beats: impl Fn(T, T) -> bool) -> Endpoint<T> {
    let (ta, tb) = match (a.time(), b.time()) {
        (None, _) => return b,
        (_, None) => return a,
        (Some(ta), Some(tb)) => (ta, tb),
    };

    if beats(ta, tb) {
        a
    } else if beats(tb, ta) {
        b
    } else if a.kind() == EndpointKind::Open || b.kind() == EndpointKind::Open {
        Endpoint::Open(ta)
    } else {
        Endpoint::Closed(ta)
    }
}

/// Whether an upper bound can be glued to the following lower bound
///
/// Only `(Closed, Open)` and `(Open, Closed)` put the shared instant in
/// exactly one side. `Infinite` never joins.
#[inline]
pub fn compatible(right_of_first: EndpointKind, left_of_second: EndpointKind) -> bool {
    matches!(
        (right_of_first, left_of_second),
        (EndpointKind::Closed, EndpointKind::Open) | (EndpointKind::Open, EndpointKind::Closed)
    )
}

/// Pick the side that owns `now` around a join at `deadline`
///
/// `first` is the kind of the first side's upper bound. If it is `Closed`
/// the deadline belongs to the first side, otherwise to the second.
#[inline]
pub fn choose<T: Time, A>(first: EndpointKind, deadline: T, now: T, before: A, at_or_after: A) -> A {
    let first_owns = match first {
        EndpointKind::Closed => now <= deadline,
        _ => now < deadline,
    };
    if first_owns {
        before
    } else {
        at_or_after
    }
}

impl<T: fmt::Display> Endpoint<T> {
    /// Render as a lower bound, e.g. `[3` or `(-inf`
    pub fn fmt_lower(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Closed(t) => write!(f, "[{}", t),
            Endpoint::Open(t) => write!(f, "({}", t),
            Endpoint::Infinite => write!(f, "(-inf"),
        }
    }

    /// Render as an upper bound, e.g. `5]` or `+inf)`
    pub fn fmt_upper(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Closed(t) => write!(f, "{}]", t),
            Endpoint::Open(t) => write!(f, "{})", t),
            Endpoint::Infinite => write!(f, "+inf)"),
        }
    }
}
