//! Placement-erased actives
//!
//! `AnyActive` hides whether an active is Fixed or Floating so values of
//! different shapes can flow through one operator. Endpoint kinds are
//! inspected at runtime from the stored era.

use std::fmt;

use crate::{Active, Era, EraKind, Fixed, Floating, KairosError, KairosResult, Semigroup, Time};

/// An active whose placement is only known at runtime
pub enum AnyActive<T, V> {
    Fixed(Active<T, V, Fixed>),
    Floating(Active<T, V, Floating>),
}

impl<T: Time, V: 'static> AnyActive<T, V> {
    #[inline]
    pub fn kind(&self) -> EraKind {
        match self {
            AnyActive::Fixed(_) => EraKind::Fixed,
            AnyActive::Floating(_) => EraKind::Floating,
        }
    }

    #[inline]
    pub fn era(&self) -> &Era<T> {
        match self {
            AnyActive::Fixed(a) => a.era(),
            AnyActive::Floating(a) => a.era(),
        }
    }

    #[inline]
    pub fn sample_at(&self, t: T) -> V {
        match self {
            AnyActive::Fixed(a) => a.sample_at(t),
            AnyActive::Floating(a) => a.sample_at(t),
        }
    }

    pub fn try_sample(&self, t: T) -> Option<V> {
        match self {
            AnyActive::Fixed(a) => a.try_sample(t),
            AnyActive::Floating(a) => a.try_sample(t),
        }
    }

    pub fn shift(&self, by: T::Duration) -> Self {
        match self {
            AnyActive::Fixed(a) => AnyActive::Fixed(a.shift(by)),
            AnyActive::Floating(a) => AnyActive::Floating(a.shift(by)),
        }
    }

    pub fn map<W, G>(&self, g: G) -> AnyActive<T, W>
    where
        W: 'static,
        G: Fn(V) -> W + Send + Sync + 'static,
    {
        match self {
            AnyActive::Fixed(a) => AnyActive::Fixed(a.map(g)),
            AnyActive::Floating(a) => AnyActive::Floating(a.map(g)),
        }
    }

    /// The one combination operator
    ///
    /// Fixed with Fixed composes in parallel, Floating with Floating in
    /// sequence. Mixing placements is rejected.
    pub fn combine(&self, other: &Self) -> KairosResult<Self>
    where
        V: Semigroup,
    {
        match (self, other) {
            (AnyActive::Fixed(a), AnyActive::Fixed(b)) => Ok(AnyActive::Fixed(a.parallel(b))),
            (AnyActive::Floating(a), AnyActive::Floating(b)) => {
                Ok(AnyActive::Floating(a.sequential(b)?))
            }
            _ => {
                tracing::debug!(
                    "Rejecting combination of {:?} with {:?} active",
                    self.kind(),
                    other.kind()
                );
                Err(KairosError::EraKindMismatch {
                    expected: self.kind(),
                    found: other.kind(),
                })
            }
        }
    }

    /// Recover a Fixed active, placing a Floating one if it has no `Open` bound
    pub fn into_fixed(self) -> KairosResult<Active<T, V, Fixed>> {
        match self {
            AnyActive::Fixed(a) => Ok(a),
            AnyActive::Floating(a) => a.fix(),
        }
    }

    /// Recover a Floating active
    pub fn into_floating(self) -> Active<T, V, Floating> {
        match self {
            AnyActive::Fixed(a) => a.float(),
            AnyActive::Floating(a) => a,
        }
    }
}

impl<T: Copy, V> Clone for AnyActive<T, V> {
    fn clone(&self) -> Self {
        match self {
            AnyActive::Fixed(a) => AnyActive::Fixed(a.clone()),
            AnyActive::Floating(a) => AnyActive::Floating(a.clone()),
        }
    }
}

impl<T: fmt::Debug, V> fmt::Debug for AnyActive<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyActive::Fixed(a) => f.debug_tuple("Fixed").field(a).finish(),
            AnyActive::Floating(a) => f.debug_tuple("Floating").field(a).finish(),
        }
    }
}

impl<T, V> From<Active<T, V, Fixed>> for AnyActive<T, V> {
    fn from(a: Active<T, V, Fixed>) -> Self {
        AnyActive::Fixed(a)
    }
}

impl<T, V> From<Active<T, V, Floating>> for AnyActive<T, V> {
    fn from(a: Active<T, V, Floating>) -> Self {
        AnyActive::Floating(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Endpoint;

    fn word(w: &'static str, start: f64, end: f64) -> Active<f64, String> {
        Active::new(Era::closed(start, end), move |_| w.to_string()).unwrap()
    }

    #[test]
    fn test_fixed_combines_in_parallel() {
        let a: AnyActive<f64, String> = word("ab", 0.0, 4.0).into();
        let b: AnyActive<f64, String> = word("cd", 2.0, 6.0).into();
        let c = a.combine(&b).unwrap();
        assert_eq!(c.kind(), EraKind::Fixed);
        assert_eq!(c.era(), &Era::closed(2.0, 4.0));
        assert_eq!(c.sample_at(3.0), "abcd");
    }

    #[test]
    fn test_floating_combines_in_sequence() {
        let a: AnyActive<f64, String> = word("x", 0.0, 3.0).float().open_upper().unwrap().into();
        let b: AnyActive<f64, String> = word("y", 0.0, 2.0).float().into();
        let c = a.combine(&b).unwrap();
        assert_eq!(c.kind(), EraKind::Floating);
        assert_eq!(c.era().end(), Some(5.0));
        assert_eq!(c.sample_at(3.0), "y");
    }

    #[test]
    fn test_floating_join_errors_surface() {
        let a: AnyActive<f64, String> = word("x", 0.0, 3.0).float().into();
        let b = a.clone();
        assert!(matches!(
            a.combine(&b),
            Err(KairosError::IncompatibleBoundaryKind { .. })
        ));
    }

    #[test]
    fn test_mixed_placement_rejected() {
        let a: AnyActive<f64, String> = word("x", 0.0, 3.0).into();
        let b: AnyActive<f64, String> = word("y", 0.0, 3.0).float().into();
        assert_eq!(
            a.combine(&b).unwrap_err(),
            KairosError::EraKindMismatch {
                expected: EraKind::Fixed,
                found: EraKind::Floating
            }
        );
    }

    #[test]
    fn test_into_fixed() {
        let closed: AnyActive<f64, String> = word("x", 0.0, 1.0).float().into();
        assert_eq!(closed.into_fixed().unwrap().era(), &Era::closed(0.0, 1.0));

        let open: AnyActive<f64, String> = word("x", 0.0, 1.0).float().open_lower().unwrap().into();
        assert!(matches!(open.into_fixed(), Err(KairosError::InvalidEraShape(_))));
    }

    #[test]
    fn test_shift_and_map_keep_placement() {
        let a: AnyActive<f64, String> = word("x", 0.0, 1.0).float().into();
        let shifted = a.shift(2.0);
        assert_eq!(shifted.kind(), EraKind::Floating);
        assert_eq!(shifted.era().lower(), Some(Endpoint::Closed(2.0)));

        let lengths = shifted.map(|s| s.len());
        assert_eq!(lengths.try_sample(2.5), Some(1));
        assert_eq!(lengths.try_sample(0.5), None);
        assert_eq!(lengths.into_floating().kind(), EraKind::Floating);
    }
}
