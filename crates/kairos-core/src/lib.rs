//! Kairos Core - Active value algebra
//!
//! This crate defines time-varying values with exact interval semantics:
//! - Time contract (`Time`, `Duration`) over any ordered affine space
//! - Endpoints (Closed, Open, Infinite) and their tie-breaking rules
//! - Eras, Fixed or Floating, with intersection and sequencing
//! - Actives: parallel (pointwise) and sequential (end-to-end) composition
//! - `AnyActive`, a placement-erased wrapper with one combination operator
//!
//! ```rust
//! use kairos_core::{Active, Era};
//!
//! let x = Active::<f64, _>::new(Era::closed(0.0, 3.0), |_| "x").unwrap();
//! let y = Active::<f64, _>::new(Era::closed(0.0, 2.0), |_| "y").unwrap();
//!
//! let xy = x.float().open_upper().unwrap().sequential(&y.float()).unwrap();
//! assert_eq!(xy.sample_at(2.9), "x");
//! assert_eq!(xy.sample_at(3.0), "y");
//! assert_eq!(xy.era().end(), Some(5.0));
//! ```

pub mod time;
pub mod endpoint;
pub mod placement;
pub mod era;
pub mod semigroup;
pub mod active;
pub mod any;
pub mod error;

pub use time::*;
pub use endpoint::*;
pub use placement::*;
pub use era::*;
pub use semigroup::*;
pub use active::*;
pub use any::*;
pub use error::*;
