//! Force units.
//!
//! Force is `M·L·T⁻²`; one [`Newton`] is `1 kg·m·s⁻²`.

use crate::{BaseDimension, Dimension, DimensionEntry, Exponents, Quantity, Unit, UnitEntry};
use qdim_derive::Unit;

/// Dimension tag for force (`M·L·T⁻²`).
pub enum Force {}
impl Dimension for Force {
    const EXPONENTS: Exponents = Exponents::from_pairs(&[
        (BaseDimension::Mass, 1),
        (BaseDimension::Length, 1),
        (BaseDimension::Time, -2),
    ]);
    const NAME: &'static str = "force";
}

/// Marker trait for the named units of [`Force`].
pub trait ForceUnit: Unit<Dim = Force> {}
impl<T: Unit<Dim = Force>> ForceUnit for T {}

pub(crate) const DIMENSION: DimensionEntry = DimensionEntry::of::<Force>();

include!(concat!(env!("OUT_DIR"), "/units/force.rs"));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::Metres;
    use crate::mass::Kilograms;
    use crate::time::Seconds;

    #[test]
    fn mass_times_acceleration() {
        let acceleration = Metres::new(3.0_f64) / (Seconds::new(1.0_f64) * Seconds::new(1.0_f64));
        let f = (Kilograms::new(2.0_f64) * acceleration).downcast::<Newton>();
        assert_eq!(f.count(), 6.0);
    }

    #[test]
    fn kilonewtons() {
        let total = Kilonewtons::<i32>::new(2) + Newtons::<i32>::new(500);
        assert_eq!(total.count(), 2500);
        assert_eq!(total.to_string(), "2500 N");
    }
}
