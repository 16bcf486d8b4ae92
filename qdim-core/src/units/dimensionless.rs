//! Dimensionless units.
//!
//! [`One`] is the coherent dimensionless unit: its quantities mix freely with bare numbers and display without a
//! symbol. [`Percent`] is `10⁻²`; it converts to and from `one` but does not mix with bare numbers, since the bare
//! number would not say which of the two it means.
//!
//! ```rust
//! use qdim_core::dimensionless::{One, Percent, Unitless};
//!
//! let ratio = Unitless::<f64>::new(50.0) / Unitless::<f64>::new(100.0);
//! assert_eq!(ratio.downcast::<One>().count(), 0.5);
//! assert_eq!(ratio.to::<Percent>().count(), 50.0);
//! assert!(ratio.downcast::<One>() + 1.0 == 1.5);
//! ```

use crate::{DimensionEntry, Dimensionless, Quantity, UnitEntry};
use qdim_derive::Unit;

pub(crate) const DIMENSION: DimensionEntry = DimensionEntry::of::<Dimensionless>();

include!(concat!(env!("OUT_DIR"), "/units/dimensionless.rs"));
