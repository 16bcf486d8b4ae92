//! Area units.
//!
//! Area is `L²`. Products of two lengths have the structural unit `Prod<A, B>`; they convert to the named units here
//! through [`Quantity::to`] or, when the ratio already matches, the zero-cost [`Quantity::downcast`].
//!
//! ```rust
//! use qdim_core::area::{Hectare, SquareMetre};
//! use qdim_core::length::Metres;
//!
//! let field = Metres::new(200.0_f64) * Metres::new(50.0_f64);
//! assert_eq!(field.downcast::<SquareMetre>().count(), 10_000.0);
//! assert_eq!(field.to::<Hectare>().count(), 1.0);
//! ```

use crate::{BaseDimension, Dimension, DimensionEntry, Exponents, Quantity, Unit, UnitEntry};
use qdim_derive::Unit;

/// Dimension tag for area (`L²`).
pub enum Area {}
impl Dimension for Area {
    const EXPONENTS: Exponents = Exponents::from_pairs(&[(BaseDimension::Length, 2)]);
    const NAME: &'static str = "area";
}

/// Marker trait for the named units of [`Area`].
///
/// Structural units such as `Prod<Metre, Metre>` have an equivalent but distinct dimension type and do not implement
/// it.
pub trait AreaUnit: Unit<Dim = Area> {}
impl<T: Unit<Dim = Area>> AreaUnit for T {}

pub(crate) const DIMENSION: DimensionEntry = DimensionEntry::of::<Area>();

include!(concat!(env!("OUT_DIR"), "/units/area.rs"));
