//! Time units.
//!
//! The coherent unit of this dimension is [`Second`]. Minutes, hours and days are exact multiples of it.
//!
//! ```rust
//! use qdim_core::time::{Hour, Minutes};
//!
//! let m = Minutes::<i32>::new(150);
//! assert_eq!(m.cast::<Hour>().count(), 2);
//! ```

use crate::{BaseDimension, Dimension, DimensionEntry, Exponents, Quantity, Unit, UnitEntry};
use qdim_derive::Unit;

/// Dimension tag for time.
pub enum Time {}
impl Dimension for Time {
    const EXPONENTS: Exponents = Exponents::base(BaseDimension::Time);
    const NAME: &'static str = "time";
}

/// Marker trait for any [`Unit`](crate::Unit) whose `Dim` is [`Time`].
pub trait TimeUnit: Unit<Dim = Time> {}
impl<T: Unit<Dim = Time>> TimeUnit for T {}

pub(crate) const DIMENSION: DimensionEntry = DimensionEntry::of::<Time>();

include!(concat!(env!("OUT_DIR"), "/units/time.rs"));
