//! Amount of substance units.

use crate::{BaseDimension, Dimension, DimensionEntry, Exponents, Quantity, Unit, UnitEntry};
use qdim_derive::Unit;

/// Dimension tag for amount of substance.
pub enum Amount {}
impl Dimension for Amount {
    const EXPONENTS: Exponents = Exponents::base(BaseDimension::Amount);
    const NAME: &'static str = "amount of substance";
}

/// Marker trait for any [`Unit`](crate::Unit) whose `Dim` is [`Amount`].
pub trait AmountUnit: Unit<Dim = Amount> {}
impl<T: Unit<Dim = Amount>> AmountUnit for T {}

pub(crate) const DIMENSION: DimensionEntry = DimensionEntry::of::<Amount>();

include!(concat!(env!("OUT_DIR"), "/units/amount.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mole() {
        assert_eq!(Mole::NAME, "mole");
        assert_eq!(Moles::<u8>::new(2).to_string(), "2 mol");
    }
}
