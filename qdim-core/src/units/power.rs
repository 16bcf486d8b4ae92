//! Power units.
//!
//! Power is `M·L²·T⁻³`; one [`Watt`] is one joule per second.

use crate::{BaseDimension, Dimension, DimensionEntry, Exponents, Quantity, Unit, UnitEntry};
use qdim_derive::Unit;

/// Dimension tag for power (`M·L²·T⁻³`).
pub enum Power {}
impl Dimension for Power {
    const EXPONENTS: Exponents = Exponents::from_pairs(&[
        (BaseDimension::Mass, 1),
        (BaseDimension::Length, 2),
        (BaseDimension::Time, -3),
    ]);
    const NAME: &'static str = "power";
}

/// Marker trait for the named units of [`Power`].
pub trait PowerUnit: Unit<Dim = Power> {}
impl<T: Unit<Dim = Power>> PowerUnit for T {}

pub(crate) const DIMENSION: DimensionEntry = DimensionEntry::of::<Power>();

include!(concat!(env!("OUT_DIR"), "/units/power.rs"));
