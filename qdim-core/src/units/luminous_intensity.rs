//! Luminous intensity units.

use crate::{BaseDimension, Dimension, DimensionEntry, Exponents, Quantity, Unit, UnitEntry};
use qdim_derive::Unit;

/// Dimension tag for luminous intensity.
pub enum LuminousIntensity {}
impl Dimension for LuminousIntensity {
    const EXPONENTS: Exponents = Exponents::base(BaseDimension::LuminousIntensity);
    const NAME: &'static str = "luminous intensity";
}

/// Marker trait for any [`Unit`](crate::Unit) whose `Dim` is [`LuminousIntensity`].
pub trait LuminousIntensityUnit: Unit<Dim = LuminousIntensity> {}
impl<T: Unit<Dim = LuminousIntensity>> LuminousIntensityUnit for T {}

pub(crate) const DIMENSION: DimensionEntry = DimensionEntry::of::<LuminousIntensity>();

include!(concat!(env!("OUT_DIR"), "/units/luminous_intensity.rs"));
