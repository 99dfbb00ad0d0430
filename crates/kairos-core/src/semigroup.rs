//! Associative value combination for parallel composition

use num_traits::Zero;

/// Values with an associative combining operation
pub trait Semigroup {
    fn combine(&self, other: &Self) -> Self;
}

/// Semigroup with an identity element
pub trait Monoid: Semigroup {
    fn empty() -> Self;
}

impl Semigroup for String {
    fn combine(&self, other: &Self) -> Self {
        let mut out = String::with_capacity(self.len() + other.len());
        out.push_str(self);
        out.push_str(other);
        out
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(&self, other: &Self) -> Self {
        let mut out = Vec::with_capacity(self.len() + other.len());
        out.extend_from_slice(self);
        out.extend_from_slice(other);
        out
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

/// `None` is the identity; two `Some` values combine their contents
impl<S: Semigroup + Clone> Semigroup for Option<S> {
    fn combine(&self, other: &Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.combine(b)),
            (Some(a), None) => Some(a.clone()),
            (None, b) => b.clone(),
        }
    }
}

impl<S: Semigroup + Clone> Monoid for Option<S> {
    fn empty() -> Self {
        None
    }
}

impl Semigroup for () {
    fn combine(&self, _other: &Self) -> Self {}
}

impl Monoid for () {
    fn empty() -> Self {}
}

/// Numbers combined by addition
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Sum<N>(pub N);

impl<N: Zero + Clone> Semigroup for Sum<N> {
    fn combine(&self, other: &Self) -> Self {
        Sum(self.0.clone() + other.0.clone())
    }
}

impl<N: Zero + Clone> Monoid for Sum<N> {
    fn empty() -> Self {
        Sum(N::zero())
    }
}
