//! Mass units.
//!
//! The coherent unit of this dimension is [`Kilogram`], the SI base unit, so grams carry the ratio `10^-3`. The
//! avoirdupois pound is exactly `0.45359237 kg`.
//!
//! ```rust
//! use qdim_core::mass::{Gram, Kilograms};
//!
//! assert_eq!(Kilograms::<i32>::new(2).to::<Gram>().count(), 2000);
//! ```

use crate::{BaseDimension, Dimension, DimensionEntry, Exponents, Quantity, Unit, UnitEntry};
use qdim_derive::Unit;

/// Dimension tag for mass.
pub enum Mass {}
impl Dimension for Mass {
    const EXPONENTS: Exponents = Exponents::base(BaseDimension::Mass);
    const NAME: &'static str = "mass";
}

/// Marker trait for any [`Unit`](crate::Unit) whose `Dim` is [`Mass`].
pub trait MassUnit: Unit<Dim = Mass> {}
impl<T: Unit<Dim = Mass>> MassUnit for T {}

pub(crate) const DIMENSION: DimensionEntry = DimensionEntry::of::<Mass>();

include!(concat!(env!("OUT_DIR"), "/units/mass.rs"));

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn kilogram_is_coherent() {
        assert!(Kilogram::RATIO.is_one());
        assert!(!Gram::RATIO.is_one());
    }

    #[test]
    fn conversions() {
        assert_eq!(Tonnes::<i32>::new(3).to::<Kilogram>().count(), 3000);
        assert_eq!(Grams::<i64>::new(5).to::<Milligram>().count(), 5000);
        assert_relative_eq!(Pounds::new(1.0_f64).to::<Kilogram>().count(), 0.45359237, max_relative = 1e-12);
    }

    #[test]
    fn mixed_units() {
        let total = Tonnes::<i32>::new(1) + Kilograms::<i32>::new(250);
        assert_eq!(total.count(), 1250);
        assert!(Grams::new(999.0_f64) < Kilograms::new(1.0_f64));
    }
}
