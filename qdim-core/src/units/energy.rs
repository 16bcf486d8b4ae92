//! Energy units.
//!
//! Energy is `M·L²·T⁻²`. The kilowatt hour is exactly `3.6 MJ`.
//!
//! ```rust
//! use qdim_core::energy::Kilojoule;
//! use qdim_core::power::Kilowatts;
//! use qdim_core::time::Hours;
//!
//! let used = Kilowatts::new(2.0_f64) * Hours::new(3.0_f64);
//! assert_eq!(used.resolved_unit().symbol(), Some("kWh"));
//! assert_eq!(used.to::<Kilojoule>().count(), 21_600.0);
//! ```

use crate::{BaseDimension, Dimension, DimensionEntry, Exponents, Quantity, Unit, UnitEntry};
use qdim_derive::Unit;

/// Dimension tag for energy (`M·L²·T⁻²`).
pub enum Energy {}
impl Dimension for Energy {
    const EXPONENTS: Exponents = Exponents::from_pairs(&[
        (BaseDimension::Mass, 1),
        (BaseDimension::Length, 2),
        (BaseDimension::Time, -2),
    ]);
    const NAME: &'static str = "energy";
}

/// Marker trait for the named units of [`Energy`].
pub trait EnergyUnit: Unit<Dim = Energy> {}
impl<T: Unit<Dim = Energy>> EnergyUnit for T {}

pub(crate) const DIMENSION: DimensionEntry = DimensionEntry::of::<Energy>();

include!(concat!(env!("OUT_DIR"), "/units/energy.rs"));
