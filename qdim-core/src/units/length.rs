//! Length units.
//!
//! The coherent unit of this dimension is [`Metre`] (`Metre::RATIO == Ratio::ONE`). All other length units are
//! exact ratios to metres.
//!
//! This module provides:
//!
//! - **SI ladder**: nanometre to kilometre.
//! - **International units**: inch, foot, yard and statute mile, with their exact definitions (the international
//!   inch is exactly `0.0254 m`).
//! - **Astronomy**: the astronomical unit, exactly `149_597_870_700 m` (IAU 2012).
//!
//! ```rust
//! use qdim_core::length::{AstronomicalUnits, Kilometre};
//!
//! let au = AstronomicalUnits::<f64>::new(1.0);
//! let km = au.to::<Kilometre>();
//! assert!((km.count() - 149_597_870.7).abs() < 1e-6);
//! ```

use crate::{BaseDimension, Dimension, DimensionEntry, Exponents, Quantity, Unit, UnitEntry};
use qdim_derive::Unit;

/// Dimension tag for length.
pub enum Length {}
impl Dimension for Length {
    const EXPONENTS: Exponents = Exponents::base(BaseDimension::Length);
    const NAME: &'static str = "length";
}

/// Marker trait for any [`Unit`](crate::Unit) whose `Dim` is [`Length`].
///
/// Membership goes by the `Dim` type. A structural unit whose dimension is merely equivalent to length, such as
/// `Prod<MetrePerSecond, Hour>`, is not a `LengthUnit`; [`belongs_to`](crate::belongs_to) answers the structural
/// question, and [`Quantity::cast_dimension`] or [`Quantity::downcast`] move such a quantity into [`Length`].
pub trait LengthUnit: Unit<Dim = Length> {}
impl<T: Unit<Dim = Length>> LengthUnit for T {}

pub(crate) const DIMENSION: DimensionEntry = DimensionEntry::of::<Length>();

include!(concat!(env!("OUT_DIR"), "/units/length.rs"));
