//! Speed units.
//!
//! Speed is `L·T⁻¹`. Dividing a length by a time gives `Per<L, T>`, whose ratio is the exact quotient of the operand
//! ratios: `Per<Kilometre, Hour>` has ratio `5/18`, the same as [`KilometrePerHour`].
//!
//! ```rust
//! use qdim_core::length::Kilometres;
//! use qdim_core::speed::{KilometrePerHour, MetrePerSecond};
//! use qdim_core::time::Hours;
//!
//! let v = (Kilometres::<f64>::new(36.0) / Hours::<f64>::new(1.0)).downcast::<KilometrePerHour>();
//! assert!((v.to::<MetrePerSecond>().count() - 10.0).abs() < 1e-12);
//! ```

use crate::{BaseDimension, Dimension, DimensionEntry, Exponents, Quantity, Unit, UnitEntry};
use qdim_derive::Unit;

/// Dimension tag for speed (`L·T⁻¹`).
pub enum Speed {}
impl Dimension for Speed {
    const EXPONENTS: Exponents =
        Exponents::from_pairs(&[(BaseDimension::Length, 1), (BaseDimension::Time, -1)]);
    const NAME: &'static str = "speed";
}

/// Marker trait for the named units of [`Speed`].
pub trait SpeedUnit: Unit<Dim = Speed> {}
impl<T: Unit<Dim = Speed>> SpeedUnit for T {}

pub(crate) const DIMENSION: DimensionEntry = DimensionEntry::of::<Speed>();

include!(concat!(env!("OUT_DIR"), "/units/speed.rs"));
