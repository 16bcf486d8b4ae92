//! Volume units.
//!
//! Volume is `L³`. The litre is exactly one cubic decimetre and the millilitre one cubic centimetre; registry lookups
//! of such shared structures return the unit listed first (`cm³` before `mL`, `L` before `dm³`).
//!
//! ```rust
//! use qdim_core::volume::{CubicCentimetres, Litres, Millilitres};
//!
//! let total = Litres::<i32>::new(2) + Millilitres::<i32>::new(2);
//! assert!(total == CubicCentimetres::<i32>::new(2002));
//! ```

use crate::{BaseDimension, Dimension, DimensionEntry, Exponents, Quantity, Unit, UnitEntry};
use qdim_derive::Unit;

/// Dimension tag for volume (`L³`).
pub enum Volume {}
impl Dimension for Volume {
    const EXPONENTS: Exponents = Exponents::from_pairs(&[(BaseDimension::Length, 3)]);
    const NAME: &'static str = "volume";
}

/// Marker trait for the named units of [`Volume`].
pub trait VolumeUnit: Unit<Dim = Volume> {}
impl<T: Unit<Dim = Volume>> VolumeUnit for T {}

pub(crate) const DIMENSION: DimensionEntry = DimensionEntry::of::<Volume>();

include!(concat!(env!("OUT_DIR"), "/units/volume.rs"));
