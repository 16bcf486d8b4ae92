//! Frequency units.
//!
//! Frequency is `T⁻¹`. Dividing a bare number by a time gives `Per<One, T>`; with seconds it relabels to
//! [`Hertz`], with other time units it resolves to a scaled hertz.
//!
//! ```rust
//! use qdim_core::frequency::Hertz;
//! use qdim_core::time::Seconds;
//!
//! let f = (1.0_f64 / Seconds::new(0.5_f64)).downcast::<Hertz>();
//! assert_eq!(f.count(), 2.0);
//! ```

use crate::{BaseDimension, Dimension, DimensionEntry, Exponents, Quantity, Unit, UnitEntry};
use qdim_derive::Unit;

/// Dimension tag for frequency (`T⁻¹`).
pub enum Frequency {}
impl Dimension for Frequency {
    const EXPONENTS: Exponents = Exponents::from_pairs(&[(BaseDimension::Time, -1)]);
    const NAME: &'static str = "frequency";
}

/// Marker trait for the named units of [`Frequency`].
pub trait FrequencyUnit: Unit<Dim = Frequency> {}
impl<T: Unit<Dim = Frequency>> FrequencyUnit for T {}

pub(crate) const DIMENSION: DimensionEntry = DimensionEntry::of::<Frequency>();

include!(concat!(env!("OUT_DIR"), "/units/frequency.rs"));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Minutes;
    use crate::Ratio;

    #[test]
    fn prefixes() {
        assert_eq!(KilohertzQuantity::<i32>::new(3).to::<Hertz>().count(), 3000);
        assert_eq!(MegahertzQuantity::<i64>::new(1).to::<Kilohertz>().count(), 1000);
    }

    #[test]
    fn per_minute_is_scaled_hertz() {
        let rate = 120.0_f64 / Minutes::new(1.0_f64);
        assert_eq!(rate.resolved_unit().ratio(), Ratio::new(1, 60));
        assert_eq!(rate.to::<Hertz>().count(), 2.0);
        assert_eq!(rate.to_string(), "120 [5/3×10^-2] Hz");
    }
}
