//! Thermodynamic temperature units.
//!
//! Only the kelvin is provided. Scales with an offset (Celsius, Fahrenheit) need an origin, which plain quantities
//! do not model.

use crate::{BaseDimension, Dimension, DimensionEntry, Exponents, Quantity, Unit, UnitEntry};
use qdim_derive::Unit;

/// Dimension tag for thermodynamic temperature.
pub enum Temperature {}
impl Dimension for Temperature {
    const EXPONENTS: Exponents = Exponents::base(BaseDimension::Temperature);
    const NAME: &'static str = "temperature";
}

/// Marker trait for any [`Unit`](crate::Unit) whose `Dim` is [`Temperature`].
pub trait TemperatureUnit: Unit<Dim = Temperature> {}
impl<T: Unit<Dim = Temperature>> TemperatureUnit for T {}

pub(crate) const DIMENSION: DimensionEntry = DimensionEntry::of::<Temperature>();

include!(concat!(env!("OUT_DIR"), "/units/temperature.rs"));
