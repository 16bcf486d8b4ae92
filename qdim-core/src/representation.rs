//! Numeric representations of quantity counts.
//!
//! A [`Quantity`](crate::Quantity) stores its count in any primitive integer or floating-point type. This module
//! defines what the quantity needs from that type:
//!
//! - [`Representation`]: arithmetic (through `num-traits`), bounds, and a lossless bridge to the wide `i128` / `f64`
//!   types used by the cast engine.
//! - [`Promote`]: the common type of two representations, used as the result of mixed arithmetic.
//! - [`Widen`]: conversions that never truncate, the only ones performed implicitly.
//! - [`Integral`]: representations for which `%` is defined.

use core::fmt::Debug;
use num_traits::{Bounded, Num};

/// Numeric storage type of a quantity count.
pub trait Representation: Copy + PartialOrd + Debug + Num + Bounded + 'static {
    /// `true` for floating-point types.
    const IS_FLOAT: bool;

    /// Converts to `i128` (saturating for floating-point values).
    fn to_wide_int(self) -> i128;

    /// Narrows an `i128` with the type's own `as` conversion.
    fn from_wide_int(value: i128) -> Self;

    /// Converts an `i128` when the value is representable.
    fn checked_from_wide_int(value: i128) -> Option<Self>;

    /// Converts to `f64`.
    fn to_wide_float(self) -> f64;

    /// Narrows an `f64` with the type's own `as` conversion.
    fn from_wide_float(value: f64) -> Self;
}

/// Marker for integer representations; enables `%`.
pub trait Integral: Representation {}

/// Common representation of `Self` and `Rhs`.
///
/// Same-signedness integers promote to the wider one. Mixed signedness promotes to the signed type when it is strictly
/// wider, otherwise to the signed type twice as wide as the unsigned one (`i128` at most). Anything mixed with a float
/// becomes that float, and `f32` with `f64` becomes `f64`.
///
/// ```rust
/// use qdim_core::Promoted;
///
/// let x: Promoted<u32, i32> = -1i64;
/// let y: Promoted<i16, f32> = 0.5f32;
/// # let _ = (x, y);
/// ```
pub trait Promote<Rhs: Representation>: Representation {
    /// The common type.
    type Output: Representation;

    /// Converts the left operand.
    fn promote(self) -> <Self as Promote<Rhs>>::Output;

    /// Converts the right operand.
    fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

/// Shorthand for `<A as Promote<B>>::Output`.
pub type Promoted<A, B> = <A as Promote<B>>::Output;

/// Conversion from `Self` to `T` that never truncates.
///
/// Implemented for the identity, integer widening within one signedness, unsigned to any strictly wider signed type,
/// any integer to any float, and `f32` to `f64`. Floating point to integer and narrowing conversions are deliberately
/// missing; they go through [`Quantity::cast_rep`](crate::Quantity::cast_rep).
pub trait Widen<T: Representation>: Representation {
    /// Performs the conversion.
    fn widen(self) -> T;
}

macro_rules! impl_representation {
    (int: $($t:ty),*) => {$(
        impl Representation for $t {
            const IS_FLOAT: bool = false;
            #[inline]
            fn to_wide_int(self) -> i128 { self as i128 }
            #[inline]
            fn from_wide_int(value: i128) -> Self { value as $t }
            #[inline]
            fn checked_from_wide_int(value: i128) -> Option<Self> { num_traits::cast(value) }
            #[inline]
            fn to_wide_float(self) -> f64 { self as f64 }
            #[inline]
            fn from_wide_float(value: f64) -> Self { value as $t }
        }
        impl Integral for $t {}
    )*};
    (float: $($t:ty),*) => {$(
        impl Representation for $t {
            const IS_FLOAT: bool = true;
            #[inline]
            fn to_wide_int(self) -> i128 { self as i128 }
            #[inline]
            fn from_wide_int(value: i128) -> Self { value as $t }
            #[inline]
            fn checked_from_wide_int(value: i128) -> Option<Self> { num_traits::cast(value) }
            #[inline]
            fn to_wide_float(self) -> f64 { self as f64 }
            #[inline]
            fn from_wide_float(value: f64) -> Self { value as $t }
        }
    )*};
}

impl_representation!(int: i8, i16, i32, i64, i128, u8, u16, u32, u64);
impl_representation!(float: f32, f64);

macro_rules! impl_promote {
    (@row $lhs:ty; $($rhs:ty => $out:ty),+) => {$(
        impl Promote<$rhs> for $lhs {
            type Output = $out;
            #[inline]
            fn promote(self) -> $out { self as $out }
            #[inline]
            fn promote_rhs(rhs: $rhs) -> $out { rhs as $out }
        }
    )+};
    ($($lhs:ty: $($rhs:ty => $out:ty),+;)+) => {
        $( impl_promote!(@row $lhs; $($rhs => $out),+); )+
    };
}

impl_promote! {
    i8: i8 => i8, i16 => i16, i32 => i32, i64 => i64, i128 => i128, u8 => i16, u16 => i32, u32 => i64, u64 => i128, f32 => f32, f64 => f64;
    i16: i8 => i16, i16 => i16, i32 => i32, i64 => i64, i128 => i128, u8 => i16, u16 => i32, u32 => i64, u64 => i128, f32 => f32, f64 => f64;
    i32: i8 => i32, i16 => i32, i32 => i32, i64 => i64, i128 => i128, u8 => i32, u16 => i32, u32 => i64, u64 => i128, f32 => f32, f64 => f64;
    i64: i8 => i64, i16 => i64, i32 => i64, i64 => i64, i128 => i128, u8 => i64, u16 => i64, u32 => i64, u64 => i128, f32 => f32, f64 => f64;
    i128: i8 => i128, i16 => i128, i32 => i128, i64 => i128, i128 => i128, u8 => i128, u16 => i128, u32 => i128, u64 => i128, f32 => f32, f64 => f64;
    u8: i8 => i16, i16 => i16, i32 => i32, i64 => i64, i128 => i128, u8 => u8, u16 => u16, u32 => u32, u64 => u64, f32 => f32, f64 => f64;
    u16: i8 => i32, i16 => i32, i32 => i32, i64 => i64, i128 => i128, u8 => u16, u16 => u16, u32 => u32, u64 => u64, f32 => f32, f64 => f64;
    u32: i8 => i64, i16 => i64, i32 => i64, i64 => i64, i128 => i128, u8 => u32, u16 => u32, u32 => u32, u64 => u64, f32 => f32, f64 => f64;
    u64: i8 => i128, i16 => i128, i32 => i128, i64 => i128, i128 => i128, u8 => u64, u16 => u64, u32 => u64, u64 => u64, f32 => f32, f64 => f64;
    f32: i8 => f32, i16 => f32, i32 => f32, i64 => f32, i128 => f32, u8 => f32, u16 => f32, u32 => f32, u64 => f32, f32 => f32, f64 => f64;
    f64: i8 => f64, i16 => f64, i32 => f64, i64 => f64, i128 => f64, u8 => f64, u16 => f64, u32 => f64, u64 => f64, f32 => f64, f64 => f64;
}

macro_rules! impl_widen {
    (@row $from:ty; $($to:ty),+) => {$(
        impl Widen<$to> for $from {
            #[inline]
            fn widen(self) -> $to { self as $to }
        }
    )+};
    (identity: $($t:ty),+) => {$(
        impl Widen<$t> for $t {
            #[inline]
            fn widen(self) -> $t { self }
        }
    )+};
    ($($from:ty => $($to:ty),+;)+) => {
        $( impl_widen!(@row $from; $($to),+); )+
    };
}

impl_widen!(identity: i8, i16, i32, i64, i128, u8, u16, u32, u64, f32, f64);

impl_widen! {
    i8 => i16, i32, i64, i128, f32, f64;
    i16 => i32, i64, i128, f32, f64;
    i32 => i64, i128, f32, f64;
    i64 => i128, f32, f64;
    i128 => f32, f64;
    u8 => i16, i32, i64, i128, u16, u32, u64, f32, f64;
    u16 => i32, i64, i128, u32, u64, f32, f64;
    u32 => i64, i128, u64, f32, f64;
    u64 => i128, f32, f64;
    f32 => f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn promoted<A: Promote<B>, B: Representation>(a: A, b: B) -> (Promoted<A, B>, Promoted<A, B>) {
        (a.promote(), <A as Promote<B>>::promote_rhs(b))
    }

    #[test]
    fn same_signedness_picks_wider() {
        let (a, b): (i64, i64) = promoted(3i16, -4i64);
        assert_eq!((a, b), (3, -4));
        let (a, b): (u32, u32) = promoted(7u32, 1u8);
        assert_eq!((a, b), (7, 1));
    }

    #[test]
    fn mixed_signedness_keeps_both_ranges() {
        let (a, b): (i64, i64) = promoted(u32::MAX, -1i32);
        assert_eq!((a, b), (u32::MAX as i64, -1));
        let (a, b): (i128, i128) = promoted(-1i64, u64::MAX);
        assert_eq!((a, b), (-1, u64::MAX as i128));
        let (a, _): (i16, i16) = promoted(200u8, 0i8);
        assert_eq!(a, 200);
    }

    #[test]
    fn floats_absorb_integers() {
        let (a, b): (f32, f32) = promoted(2i32, 0.5f32);
        assert_eq!((a, b), (2.0, 0.5));
        let (a, b): (f64, f64) = promoted(0.25f32, 3.0f64);
        assert_eq!((a, b), (0.25, 3.0));
    }

    #[test]
    fn widen_preserves_value() {
        assert_eq!(Widen::<i64>::widen(-5i8), -5i64);
        assert_eq!(Widen::<i32>::widen(u16::MAX), 65_535i32);
        assert_eq!(Widen::<f64>::widen(0.1f32), 0.1f32 as f64);
        assert_eq!(Widen::<f64>::widen(7u64), 7.0);
    }

    #[test]
    fn wide_bridges() {
        assert_eq!((-3i8).to_wide_int(), -3);
        assert_eq!(u8::from_wide_int(300), 44);
        assert_eq!(i32::from_wide_float(2.9), 2);
        assert_eq!(f32::from_wide_int(5), 5.0);
        assert!(f64::IS_FLOAT && !u64::IS_FLOAT);
    }
}
