//! Active values - time functions restricted to an era
//!
//! An `Active` pairs an era with a total sample function. The function is
//! only contractually meaningful inside the era (boundary instants included
//! per their endpoint kind); values sampled outside must not be relied on.
//!
//! The placement marker `K` decides which compositions exist:
//! - `Active<T, V, Fixed>`: `apply`, `zip_with`, `parallel` (era intersection)
//! - `Active<T, V, Floating>`: `sequential` (era sequencing), opening and
//!   closing of bounds
//!
//! Endpoint kinds are checked at runtime, and rejected combinations return a
//! `KairosError`.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::endpoint::choose;
use crate::{
    Duration, Endpoint, Era, EraKind, Fixed, Floating, KairosError, KairosResult, Monoid, Placement,
    Semigroup, Time,
};

type SampleFn<T, V> = Arc<dyn Fn(T) -> V + Send + Sync>;

/// A time-varying value with an era of validity
pub struct Active<T, V, K = Fixed> {
    era: Era<T>,
    sample: SampleFn<T, V>,
    placement: PhantomData<K>,
}

impl<T, V, K> Clone for Active<T, V, K>
where
    T: Copy,
{
    fn clone(&self) -> Self {
        Active {
            era: self.era,
            sample: Arc::clone(&self.sample),
            placement: PhantomData,
        }
    }
}

impl<T: fmt::Debug, V, K: Placement> fmt::Debug for Active<T, V, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Active")
            .field("placement", &K::KIND)
            .field("era", &self.era)
            .finish_non_exhaustive()
    }
}

impl<T: Time, V: 'static, K: Placement> Active<T, V, K> {
    /// Pair an era with a sample function
    ///
    /// The era's kind must match the placement `K`.
    pub fn new<F>(era: Era<T>, sample: F) -> KairosResult<Self>
    where
        F: Fn(T) -> V + Send + Sync + 'static,
    {
        if era.kind() != K::KIND {
            tracing::debug!("Rejecting {:?} era for a {:?} active", era.kind(), K::KIND);
            return Err(KairosError::EraKindMismatch {
                expected: K::KIND,
                found: era.kind(),
            });
        }
        Ok(Self::from_parts(era, Arc::new(sample)))
    }

    fn from_parts(era: Era<T>, sample: SampleFn<T, V>) -> Self {
        debug_assert_eq!(era.kind(), K::KIND);
        Active {
            era,
            sample,
            placement: PhantomData,
        }
    }

    #[inline]
    pub fn era(&self) -> &Era<T> {
        &self.era
    }

    #[inline]
    pub fn kind(&self) -> EraKind {
        K::KIND
    }

    /// Run the sample function
    ///
    /// Total, but only meaningful when `self.era().contains(t)`.
    #[inline]
    pub fn sample_at(&self, t: T) -> V {
        (self.sample)(t)
    }

    /// Sample only inside the era
    pub fn try_sample(&self, t: T) -> Option<V> {
        if self.era.contains(t) {
            Some(self.sample_at(t))
        } else {
            None
        }
    }

    /// Transform sampled values, keeping the era
    pub fn map<W, G>(&self, g: G) -> Active<T, W, K>
    where
        W: 'static,
        G: Fn(V) -> W + Send + Sync + 'static,
    {
        let sample = Arc::clone(&self.sample);
        Active::from_parts(self.era, Arc::new(move |t| g(sample(t))))
    }

    /// Translate in time: `shifted.sample_at(t) == self.sample_at(t - by)`
    pub fn shift(&self, by: T::Duration) -> Self {
        let sample = Arc::clone(&self.sample);
        Self::from_parts(self.era.shift(by), Arc::new(move |t: T| sample(t.offset(-by))))
    }

    /// Play a finite active backwards over the same era
    pub fn reverse(&self) -> KairosResult<Self> {
        let era = self.era.reverse()?;
        let (Some(start), Some(end)) = (self.era.start(), self.era.end()) else {
            return Ok(self.clone());
        };
        let sample = Arc::clone(&self.sample);
        Ok(Self::from_parts(
            era,
            Arc::new(move |t: T| sample(start.offset(end.since(t)))),
        ))
    }

    /// Slow down (`factor > 1`) or speed up (`factor < 1`) about the era start
    pub fn stretch(&self, factor: f64) -> KairosResult<Self> {
        let era = self.era.stretch(factor)?;
        let Some(start) = self.era.start() else {
            return Ok(self.clone());
        };
        let sample = Arc::clone(&self.sample);
        let inverse = 1.0 / factor;
        Ok(Self::from_parts(
            era,
            Arc::new(move |t: T| sample(start.offset(t.since(start).scale(inverse)))),
        ))
    }

    /// Constant value sampled at `t`, over the same era
    pub fn snapshot(&self, t: T) -> Self
    where
        V: Clone + Send + Sync,
    {
        let value = self.sample_at(t);
        Self::from_parts(self.era, Arc::new(move |_| value.clone()))
    }
}

impl<T: Time, V: 'static> Active<T, V, Fixed> {
    /// Constant value over all time
    pub fn pure(value: V) -> Self
    where
        V: Clone + Send + Sync,
    {
        Self::from_parts(Era::all_time(), Arc::new(move |_| value.clone()))
    }

    /// Sample function over all time
    pub fn from_fn<F>(sample: F) -> Self
    where
        F: Fn(T) -> V + Send + Sync + 'static,
    {
        Self::from_parts(Era::all_time(), Arc::new(sample))
    }

    /// Pointwise application of a time-varying function
    ///
    /// The result is valid on the intersection of both eras.
    pub fn apply<A, B>(&self, arg: &Active<T, A, Fixed>) -> Active<T, B, Fixed>
    where
        V: Fn(A) -> B,
        A: 'static,
        B: 'static,
    {
        let f = Arc::clone(&self.sample);
        let x = Arc::clone(&arg.sample);
        Active::from_parts(self.era.meet(&arg.era), Arc::new(move |t| f(t)(x(t))))
    }

    /// Pointwise combination with a binary function, on the intersection
    pub fn zip_with<A, W, G>(&self, other: &Active<T, A, Fixed>, g: G) -> Active<T, W, Fixed>
    where
        A: 'static,
        W: 'static,
        G: Fn(V, A) -> W + Send + Sync + 'static,
    {
        let a = Arc::clone(&self.sample);
        let b = Arc::clone(&other.sample);
        Active::from_parts(self.era.meet(&other.era), Arc::new(move |t| g(a(t), b(t))))
    }

    /// Parallel composition: combine values pointwise on the intersection
    ///
    /// Associative when `combine` is. `parallel_identity()` is the identity.
    pub fn parallel(&self, other: &Self) -> Self
    where
        V: Semigroup,
    {
        self.zip_with(other, |a, b| a.combine(&b))
    }

    /// Bi-infinite constant `V::empty()`
    pub fn parallel_identity() -> Self
    where
        V: Monoid + Clone + Send + Sync,
    {
        Self::pure(V::empty())
    }

    /// Parallel fold, starting from the identity
    pub fn stack<I>(actives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        V: Monoid + Clone + Send + Sync,
    {
        actives
            .into_iter()
            .fold(Self::parallel_identity(), |acc, a| acc.parallel(&a))
    }

    /// Turn into a Floating template for sequencing
    pub fn float(&self) -> Active<T, V, Floating> {
        Active::from_parts(self.era.float(), Arc::clone(&self.sample))
    }
}

impl<T: Time> Active<T, T, Fixed> {
    /// The identity time function over all time
    pub fn time() -> Self {
        Self::from_fn(|t| t)
    }

    /// The identity time function on `[start, end]`
    pub fn interval(start: T, end: T) -> Self {
        Self::from_parts(Era::closed(start, end), Arc::new(|t| t))
    }
}

impl<T: Time, V: 'static> Active<T, V, Floating> {
    /// Sequential composition: play `next` right after `self`
    ///
    /// `next` is translated to start where `self` ends. At the join instant
    /// the side whose bound is `Closed` supplies the value. An empty
    /// operand is dropped.
    pub fn sequential(&self, next: &Self) -> KairosResult<Self> {
        let (era, join) = self.era.fuse(&next.era)?;
        let (Some((deadline, offset)), Some(upper)) = (join, self.era.upper()) else {
            return Ok(if self.era.is_empty() {
                next.clone()
            } else {
                self.clone()
            });
        };
        tracing::trace!("Joining actives at {:?}", deadline);

        let first = Arc::clone(&self.sample);
        let second = next.shift(offset).sample;
        let kind = upper.kind();
        Ok(Self::from_parts(
            era,
            Arc::new(move |t| choose(kind, deadline, t, &first, &second)(t)),
        ))
    }

    /// Sequential fold of a non-empty run of actives
    pub fn movie<I>(first: Self, rest: I) -> KairosResult<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        rest.into_iter().try_fold(first, |acc, next| acc.sequential(&next))
    }

    /// Exclude the upper instant
    pub fn open_upper(&self) -> KairosResult<Self> {
        Ok(Self::from_parts(self.era.open_upper()?, Arc::clone(&self.sample)))
    }

    /// Exclude the lower instant
    pub fn open_lower(&self) -> KairosResult<Self> {
        Ok(Self::from_parts(self.era.open_lower()?, Arc::clone(&self.sample)))
    }

    /// Include the upper instant, sampling to `fill` there
    ///
    /// A bound that is already `Closed` or `Infinite` is left alone and
    /// `fill` is unused. Closing an empty active yields a zero-width active
    /// at the origin.
    pub fn close_upper(&self, fill: V) -> KairosResult<Self>
    where
        V: Clone + Send + Sync,
    {
        let era = self.era.close_upper()?;
        Ok(self.filled(era, self.era.upper(), fill))
    }

    /// Include the lower instant, sampling to `fill` there
    pub fn close_lower(&self, fill: V) -> KairosResult<Self>
    where
        V: Clone + Send + Sync,
    {
        let era = self.era.close_lower()?;
        Ok(self.filled(era, self.era.lower(), fill))
    }

    fn filled(&self, era: Era<T>, bound: Option<Endpoint<T>>, fill: V) -> Self
    where
        V: Clone + Send + Sync,
    {
        match bound {
            Some(Endpoint::Open(at)) => {
                let sample = Arc::clone(&self.sample);
                Self::from_parts(
                    era,
                    Arc::new(move |t| if t == at { fill.clone() } else { sample(t) }),
                )
            }
            Some(_) => Self::from_parts(era, Arc::clone(&self.sample)),
            None => Self::from_parts(era, Arc::new(move |_| fill.clone())),
        }
    }

    /// Place a Floating active; fails if a bound is still `Open`
    pub fn fix(&self) -> KairosResult<Active<T, V, Fixed>> {
        Ok(Active::from_parts(self.era.fix()?, Arc::clone(&self.sample)))
    }
}
