//! Electric current units.

use crate::{BaseDimension, Dimension, DimensionEntry, Exponents, Quantity, Unit, UnitEntry};
use qdim_derive::Unit;

/// Dimension tag for electric current.
pub enum Current {}
impl Dimension for Current {
    const EXPONENTS: Exponents = Exponents::base(BaseDimension::Current);
    const NAME: &'static str = "current";
}

/// Marker trait for any [`Unit`](crate::Unit) whose `Dim` is [`Current`].
pub trait CurrentUnit: Unit<Dim = Current> {}
impl<T: Unit<Dim = Current>> CurrentUnit for T {}

pub(crate) const DIMENSION: DimensionEntry = DimensionEntry::of::<Current>();

include!(concat!(env!("OUT_DIR"), "/units/current.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milliamperes() {
        assert_eq!(Amperes::<i32>::new(2).to::<Milliampere>().count(), 2000);
        assert_eq!((Amperes::<i32>::new(1) - Milliamperes::<i32>::new(1)).count(), 999);
        assert_eq!(Amperes::new(0.5_f64).to_string(), "0.5 A");
    }
}
