//! Timeline scenarios - piecewise-constant actives built from segments
//!
//! Each segment holds one value for a length of time. Segments are glued
//! half-open: every segment but the last excludes its upper instant, so a
//! join instant always belongs to the later segment.

use kairos_core::{Active, Era, Floating, KairosError, KairosResult, Placement};

/// Builder for piecewise-constant Floating actives on `f64` time
#[derive(Clone, Debug, Default)]
pub struct Timeline<V> {
    segments: Vec<(V, f64)>,
}

impl<V: Clone + Send + Sync + 'static> Timeline<V> {
    pub fn new() -> Self {
        Timeline {
            segments: Vec::new(),
        }
    }

    /// Append a segment holding `value` for `length`
    ///
    /// `length` must be finite and non-negative; `build` rejects it otherwise.
    pub fn then(mut self, value: V, length: f64) -> Self {
        self.segments.push((value, length));
        self
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total length of all segments
    pub fn length(&self) -> f64 {
        self.segments.iter().map(|(_, len)| len).sum()
    }

    /// Glue the segments into one active starting at time zero
    ///
    /// Returns `None` for an empty timeline.
    pub fn build(&self) -> KairosResult<Option<Active<f64, V, Floating>>> {
        let last = self.segments.len().saturating_sub(1);
        let mut parts = Vec::with_capacity(self.segments.len());

        for (i, (value, length)) in self.segments.iter().enumerate() {
            if !length.is_finite() || *length < 0.0 {
                tracing::debug!("Rejecting timeline segment {} with length {}", i, length);
                return Err(KairosError::InvalidEraShape(
                    "timeline segment length must be finite and non-negative",
                ));
            }
            let value = value.clone();
            let part = Active::<f64, V, Floating>::new(Era::closed(0.0, *length).float(), move |_| {
                value.clone()
            })?;
            parts.push(if i == last { part } else { part.open_upper()? });
        }

        let mut parts = parts.into_iter();
        match parts.next() {
            Some(first) => Active::movie(first, parts).map(Some),
            None => Ok(None),
        }
    }
}

/// Sample at each instant, `None` where the instant is outside the era
pub fn probe<V, K>(active: &Active<f64, V, K>, times: &[f64]) -> Vec<Option<V>>
where
    V: 'static,
    K: Placement,
{
    times.iter().map(|&t| active.try_sample(t)).collect()
}
