//! Explicit conversions between quantities.
//!
//! Implicit conversions ([`Quantity::to`], [`From`], mixed-unit arithmetic) refuse anything that could truncate, and a
//! result that does not fit the representation is an overflow, exactly as for the primitive's own arithmetic. The
//! cast engine performs the same rescaling without either restriction: the count is multiplied by the conversion
//! factor `ratio(from) / ratio(to)` and narrowed into the target representation with its own `as` conversion.
//!
//! The factor is a compile-time [`Ratio`]. Which of its numerator, denominator and exponent are trivial selects one
//! of eight paths, so no multiplication or division by one is ever performed. Integral counts are rescaled in `i128`
//! and multiply before they divide, so that `1 min → s` never truncates to zero on the way. Floating-point counts are
//! rescaled in `f64` with the power of ten applied in one step.
//!
//! ```rust
//! use qdim_core::length::{Kilometre, Kilometres, Metres};
//! use qdim_core::quantity_cast;
//!
//! let m: Metres<i32> = quantity_cast(Kilometres::<i32>::new(2));
//! assert_eq!(m.count(), 2000);
//!
//! let km = Metres::<i32>::new(1500).cast::<Kilometre>();
//! assert_eq!(km.count(), 1);
//! ```

use crate::dimension::Dimension;
use crate::quantity::Quantity;
use crate::ratio::Ratio;
use crate::representation::Representation;
use crate::unit::{Check, CheckDimension, Coherent, Unit};
use core::marker::PhantomData;

/// Conversion factor between two units, with the flags selecting the rescaling path.
pub(crate) struct CastRatio<From, To>(PhantomData<(From, To)>);

impl<From: Unit, To: Unit> CastRatio<From, To> {
    pub(crate) const RATIO: Ratio = From::RATIO.div(To::RATIO);
    pub(crate) const NUM_IS_ONE: bool = Self::RATIO.num() == 1;
    pub(crate) const DEN_IS_ONE: bool = Self::RATIO.den() == 1;
    pub(crate) const EXP_IS_ZERO: bool = Self::RATIO.exp() == 0;
    pub(crate) const PATH: (bool, bool, bool) = (Self::NUM_IS_ONE, Self::DEN_IS_ONE, Self::EXP_IS_ZERO);
}

/// `10^exp` as an `f64`.
#[inline]
pub(crate) fn fpow10(exp: i32) -> f64 {
    #[cfg(feature = "std")]
    {
        10f64.powi(exp)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::pow(10.0, exp as f64)
    }
}

#[inline]
fn ipow10(exp: i32) -> i128 {
    10i128.pow(exp.unsigned_abs())
}

/// Rescales a count expressed in `From` into `To`, narrowing into `R2`.
///
/// No dimension or truncation checks happen here; callers perform the ones their contract requires.
#[inline]
pub(crate) fn rescale<From, To, R1, R2>(count: R1) -> R2
where
    From: Unit,
    To: Unit,
    R1: Representation,
    R2: Representation,
{
    let ratio = CastRatio::<From, To>::RATIO;
    let path = CastRatio::<From, To>::PATH;
    if R1::IS_FLOAT || R2::IS_FLOAT {
        R2::from_wide_float(rescale_float(count.to_wide_float(), ratio, path))
    } else {
        R2::from_wide_int(rescale_int(count.to_wide_int(), ratio, path))
    }
}

/// Rescales a count for an implicit conversion.
///
/// The arithmetic is that of [`rescale`], but an integral result outside `R2` is an overflow of the representation:
/// it panics when debug assertions are enabled and wraps otherwise, like `i32` multiplication does.
#[inline]
pub(crate) fn rescale_checked<From, To, R1, R2>(count: R1) -> R2
where
    From: Unit,
    To: Unit,
    R1: Representation,
    R2: Representation,
{
    if R1::IS_FLOAT || R2::IS_FLOAT {
        return rescale::<From, To, R1, R2>(count);
    }
    let wide = rescale_int(count.to_wide_int(), CastRatio::<From, To>::RATIO, CastRatio::<From, To>::PATH);
    match R2::checked_from_wide_int(wide) {
        Some(narrow) => narrow,
        None if cfg!(debug_assertions) => panic!("attempt to rescale with overflow"),
        None => R2::from_wide_int(wide),
    }
}

fn rescale_int(v: i128, ratio: Ratio, path: (bool, bool, bool)) -> i128 {
    let num = ratio.num() as i128;
    let den = ratio.den() as i128;
    let exp = ratio.exp();
    match path {
        (true, true, true) => v,
        (true, true, false) => {
            if exp > 0 {
                v * ipow10(exp)
            } else {
                v / ipow10(exp)
            }
        }
        (true, false, true) => v / den,
        (true, false, false) => {
            if exp > 0 {
                v * ipow10(exp) / den
            } else {
                v / (den * ipow10(exp))
            }
        }
        (false, true, true) => v * num,
        (false, true, false) => {
            if exp > 0 {
                v * num * ipow10(exp)
            } else {
                v * num / ipow10(exp)
            }
        }
        (false, false, true) => v * num / den,
        (false, false, false) => {
            if exp > 0 {
                v * num * ipow10(exp) / den
            } else {
                v * num / (den * ipow10(exp))
            }
        }
    }
}

fn rescale_float(v: f64, ratio: Ratio, path: (bool, bool, bool)) -> f64 {
    let num = ratio.num() as f64;
    let den = ratio.den() as f64;
    let exp = ratio.exp();
    let scale = |v: f64| {
        if exp > 0 {
            v * fpow10(exp)
        } else {
            v / fpow10(-exp)
        }
    };
    match path {
        (true, true, true) => v,
        (true, true, false) => scale(v),
        (true, false, true) => v / den,
        (true, false, false) => scale(v) / den,
        (false, true, true) => v * num,
        (false, true, false) => scale(v * num),
        (false, false, true) => v * num / den,
        (false, false, false) => scale(v * num) / den,
    }
}

/// Types the cast engine can produce: a unit and a representation around a count.
///
/// Implemented by [`Quantity`]; wrappers such as an origin-bearing point type implement it to reuse
/// [`quantity_cast`].
pub trait QuantityType: Copy {
    /// Unit of the stored count.
    type Unit: Unit;
    /// Representation of the stored count.
    type Rep: Representation;

    /// Wraps a raw count.
    fn from_raw(count: Self::Rep) -> Self;

    /// Returns the raw count.
    fn raw(&self) -> Self::Rep;
}

impl<U: Unit, R: Representation> QuantityType for Quantity<U, R> {
    type Unit = U;
    type Rep = R;

    #[inline]
    fn from_raw(count: R) -> Self {
        Quantity::new(count)
    }

    #[inline]
    fn raw(&self) -> R {
        self.count()
    }
}

/// Converts `q` to the quantity type `To`, truncating if necessary.
///
/// The source and target units must belong to equivalent dimensions; anything else fails to compile.
///
/// ```rust
/// use qdim_core::quantity_cast;
/// use qdim_core::time::{Minutes, Seconds};
///
/// let m: Minutes<i64> = quantity_cast(Seconds::<f64>::new(150.0));
/// assert_eq!(m.count(), 2);
/// ```
#[inline]
pub fn quantity_cast<To, U, R>(q: Quantity<U, R>) -> To
where
    To: QuantityType,
    U: Unit,
    R: Representation,
{
    let () = Check::<U, To::Unit, To::Rep>::SAME_DIMENSION;
    To::from_raw(rescale::<U, To::Unit, R, To::Rep>(q.count()))
}

impl<U: Unit, R: Representation> Quantity<U, R> {
    /// Casts to another unit of the same dimension, keeping the representation.
    ///
    /// ```rust
    /// use qdim_core::time::{Hour, Minutes};
    ///
    /// assert_eq!(Minutes::<i32>::new(150).cast::<Hour>().count(), 2);
    /// ```
    #[inline]
    pub fn cast<T: Unit>(self) -> Quantity<T, R> {
        quantity_cast(self)
    }

    /// Casts to another representation, keeping the unit.
    ///
    /// ```rust
    /// use qdim_core::length::Metres;
    ///
    /// assert_eq!(Metres::new(2.75_f64).cast_rep::<i32>().count(), 2);
    /// ```
    #[inline]
    pub fn cast_rep<R2: Representation>(self) -> Quantity<U, R2> {
        quantity_cast(self)
    }

    /// Casts to a fully specified quantity type.
    #[inline]
    pub fn cast_to<Q: QuantityType>(self) -> Q {
        quantity_cast(self)
    }

    /// Casts to the coherent unit of dimension `D`, which must be equivalent to this quantity's dimension.
    ///
    /// This is how a quantity of a structurally built dimension becomes a quantity of a named one (or back).
    ///
    /// ```rust
    /// use qdim_core::length::{Kilometres, Length};
    ///
    /// let m = Kilometres::new(1.5_f64).cast_dimension::<Length>();
    /// assert_eq!(m.count(), 1500.0);
    /// ```
    #[inline]
    pub fn cast_dimension<D: Dimension>(self) -> Quantity<Coherent<D>, R> {
        let () = CheckDimension::<U, D>::BELONGS;
        quantity_cast(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{BaseDimension, Exponents};
    use approx::assert_relative_eq;

    enum Length {}
    impl Dimension for Length {
        const EXPONENTS: Exponents = Exponents::base(BaseDimension::Length);
    }

    macro_rules! test_unit {
        ($name:ident, $ratio:expr) => {
            #[derive(Clone, Copy, Debug, PartialEq)]
            struct $name;
            impl Unit for $name {
                const RATIO: Ratio = $ratio;
                type Dim = Length;
                const SYMBOL: &'static str = stringify!($name);
            }
        };
    }

    test_unit!(M, Ratio::ONE);
    test_unit!(Km, Ratio::integer(1000));
    test_unit!(Mm, Ratio::new(1, 1000));
    test_unit!(Third, Ratio::new(1, 3));
    test_unit!(Yard, Ratio::with_exp(9144, 1, -4));
    test_unit!(Sixty, Ratio::integer(60));
    test_unit!(Seventh, Ratio::new(3, 7));
    test_unit!(KiloSeventh, Ratio::with_exp(3, 7, 3));

    fn int<F: Unit, T: Unit>(v: i64) -> i64 {
        rescale::<F, T, i64, i64>(v)
    }

    fn float<F: Unit, T: Unit>(v: f64) -> f64 {
        rescale::<F, T, f64, f64>(v)
    }

    fn checked<F: Unit, T: Unit>(v: i32) -> i32 {
        rescale_checked::<F, T, i32, i32>(v)
    }

    #[test]
    fn all_integral_paths() {
        assert_eq!(int::<M, M>(7), 7); // (1, 1, 0)
        assert_eq!(int::<Km, M>(2), 2000); // (1, 1, +)
        assert_eq!(int::<M, Km>(2500), 2); // (1, 1, -)
        assert_eq!(int::<M, Third>(5), 15); // (3, 1, 0)
        assert_eq!(int::<Third, M>(7), 2); // (1, 3, 0)
        assert_eq!(int::<Sixty, M>(2), 120); // (6, 1, +)
        assert_eq!(int::<M, Yard>(1000), 1093); // (125, 1143, +)
        assert_eq!(int::<Third, Km>(10_000), 3); // (1, 3, -)
        assert_eq!(int::<Seventh, M>(14), 6); // (3, 7, 0)
        assert_eq!(int::<KiloSeventh, M>(7), 3000); // (3, 7, +)
        assert_eq!(int::<M, Sixty>(125), 2); // (5, 3, -)
    }

    #[test]
    fn integral_multiplies_before_dividing() {
        // 5 · 3/7 = 2.14…; dividing first would give 0.
        assert_eq!(int::<Seventh, M>(5), 2);
        assert_eq!(int::<Mm, Third>(1500), 4);
    }

    #[test]
    fn float_paths() {
        assert_relative_eq!(float::<Km, M>(1.25), 1250.0);
        assert_relative_eq!(float::<Mm, M>(1.0), 0.001);
        assert_relative_eq!(float::<M, Yard>(0.9144), 1.0, max_relative = 1e-12);
        assert_relative_eq!(float::<Third, M>(1.0), 1.0 / 3.0);
        assert_relative_eq!(float::<M, Sixty>(90.0), 1.5);
    }

    #[test]
    fn mixed_representations_take_float_path() {
        assert_eq!(rescale::<Mm, M, f64, i32>(2500.0), 2);
        assert_eq!(rescale::<M, Mm, i32, f32>(3), 3000.0);
    }

    #[test]
    fn checked_rescale_agrees_within_range() {
        assert_eq!(checked::<Km, M>(2_000_000), 2_000_000_000);
        assert_eq!(checked::<Seventh, M>(-14), -6);
        assert_eq!(rescale_checked::<Mm, M, f64, i32>(2500.0), 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "attempt to rescale with overflow")]
    fn checked_rescale_overflow_panics() {
        checked::<Km, M>(3_000_000);
    }

    #[test]
    fn explicit_cast_wraps_like_as() {
        let m = Quantity::<Km, i32>::new(3_000_000).cast::<M>();
        assert_eq!(m.count(), 3_000_000_000_i64 as i32);
    }

    #[test]
    fn cast_ratio_flags() {
        assert!(CastRatio::<Km, M>::NUM_IS_ONE);
        assert!(CastRatio::<Km, M>::DEN_IS_ONE);
        assert!(!CastRatio::<Km, M>::EXP_IS_ZERO);
        assert!(!CastRatio::<M, Third>::NUM_IS_ONE);
    }

    #[test]
    fn quantity_cast_narrows() {
        let m: Quantity<M, u8> = quantity_cast(Quantity::<Km, f64>::new(0.2509));
        assert_eq!(m.count(), 250);
        let back = Quantity::<Mm, i64>::new(1_999).cast::<M>();
        assert_eq!(back.count(), 1);
    }

    #[test]
    fn cast_dimension_to_coherent() {
        let q = Quantity::<Km, i32>::new(3).cast_dimension::<Length>();
        assert_eq!(q.count(), 3000);
    }
}
