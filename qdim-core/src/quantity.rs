//! Quantity type and its implementations.

use crate::cast::rescale_checked;
use crate::dimension::Dimensionless;
use crate::registry::{self, Downcast};
use crate::representation::{Integral, Promote, Promoted, Representation, Widen};
use crate::unit::{Check, CheckUnit, Combine, Combined, Finer, Per, Pow, Prod, Unit};
use crate::units::dimensionless::One;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::*;
use num_traits::{Bounded, Signed};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A quantity with a specific unit and representation.
///
/// `Quantity<U, R>` wraps a count of type `R` (`f64` unless stated otherwise) together with phantom type information
/// about its unit `U`, and through it the unit's dimension `U::Dim`. Operations that mix dimensions incorrectly do not
/// compile; operations that mix units of one dimension rescale exactly.
///
/// # Examples
///
/// ```rust
/// use qdim_core::{Dimension, Exponents, BaseDimension, Quantity, Ratio, Unit};
///
/// pub enum Length {}
/// impl Dimension for Length {
///     const EXPONENTS: Exponents = Exponents::base(BaseDimension::Length);
/// }
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// pub enum Metre {}
/// impl Unit for Metre {
///     const RATIO: Ratio = Ratio::ONE;
///     type Dim = Length;
///     const SYMBOL: &'static str = "m";
/// }
/// qdim_core::impl_unit_relations!(Metre);
///
/// let x = Quantity::<Metre, i32>::new(5);
/// let y = Quantity::<Metre, i64>::new(3);
/// let sum = x + y;
/// assert_eq!(sum.count(), 8i64);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U: Unit, R: Representation = f64>(R, PhantomData<U>);

impl<U: Unit, R: Representation> Quantity<U, R> {
    /// Creates a new quantity with the given count.
    ///
    /// ```rust
    /// use qdim_core::length::Metres;
    /// let d = Metres::new(3.0_f64);
    /// assert_eq!(d.count(), 3.0);
    /// ```
    #[inline]
    pub const fn new(count: R) -> Self {
        Self(count, PhantomData)
    }

    /// Returns the raw count, expressed in `U`.
    #[inline]
    pub const fn count(&self) -> R {
        self.0
    }

    /// Creates a quantity from a count of any representation that widens into `R` without truncation.
    ///
    /// ```rust
    /// use qdim_core::length::Metres;
    /// let d = Metres::<f64>::from_count(3i32);
    /// assert_eq!(d.count(), 3.0);
    /// ```
    ///
    /// A truncating count is rejected:
    ///
    /// ```compile_fail
    /// use qdim_core::length::Metres;
    /// let d = Metres::<i32>::from_count(1.5f64);
    /// ```
    #[inline]
    pub fn from_count<T: Widen<R>>(count: T) -> Self {
        Self::new(count.widen())
    }

    /// The quantity whose count is the representation's zero.
    #[inline]
    pub fn zero() -> Self {
        Self::new(R::zero())
    }

    /// The quantity whose count is the representation's lowest value.
    #[inline]
    pub fn min_value() -> Self {
        Self::new(<R as Bounded>::min_value())
    }

    /// The quantity whose count is the representation's highest value.
    #[inline]
    pub fn max_value() -> Self {
        Self::new(<R as Bounded>::max_value())
    }

    /// Returns the smaller of two quantities of the same unit.
    ///
    /// ```rust
    /// use qdim_core::length::Metres;
    /// let a = Metres::new(3.0_f64);
    /// let b = Metres::new(5.0_f64);
    /// assert_eq!(a.min(b).count(), 3.0);
    /// ```
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other.0 < self.0 {
            other
        } else {
            self
        }
    }

    /// Returns the larger of two quantities of the same unit.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }

    /// Unary plus.
    #[inline]
    pub fn pos(self) -> Self {
        self
    }

    /// Adds one to the count and returns the new value (`++q`).
    #[inline]
    pub fn pre_increment(&mut self) -> Self {
        self.0 = self.0 + R::one();
        *self
    }

    /// Adds one to the count and returns the previous value (`q++`).
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.0 = self.0 + R::one();
        previous
    }

    /// Subtracts one from the count and returns the new value (`--q`).
    #[inline]
    pub fn pre_decrement(&mut self) -> Self {
        self.0 = self.0 - R::one();
        *self
    }

    /// Subtracts one from the count and returns the previous value (`q--`).
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.0 = self.0 - R::one();
        previous
    }

    /// Converts this quantity to another unit of an equivalent dimension.
    ///
    /// The conversion must not truncate: for integral representations the conversion factor has to be a whole
    /// number, otherwise the call fails to compile. Use [`cast`](Self::cast) to truncate on purpose.
    ///
    /// ```rust
    /// use qdim_core::length::{Kilometres, Metre};
    ///
    /// let m = Kilometres::<i32>::new(2).to::<Metre>();
    /// assert_eq!(m.count(), 2000);
    ///
    /// let km = Kilometres::new(1.25_f64);
    /// assert_eq!(km.to::<Metre>().count(), 1250.0);
    /// ```
    #[inline]
    pub fn to<T: Unit>(self) -> Quantity<T, R> {
        let () = Check::<U, T, R>::SAME_DIMENSION;
        let () = Check::<U, T, R>::LOSSLESS;
        Quantity::new(rescale_checked::<U, T, R, R>(self.0))
    }

    /// Changes the representation without truncation, keeping the unit.
    ///
    /// ```rust
    /// use qdim_core::length::Metres;
    /// let wide = Metres::<i16>::new(7).into_rep::<f64>();
    /// assert_eq!(wide.count(), 7.0);
    /// ```
    ///
    /// ```compile_fail
    /// use qdim_core::length::Metres;
    /// let narrow: Metres<i32> = Metres::<f64>::new(1.5).into_rep();
    /// ```
    #[inline]
    pub fn into_rep<R2: Representation>(self) -> Quantity<U, R2>
    where
        R: Widen<R2>,
    {
        Quantity::new(self.0.widen())
    }

    /// Converts both unit and representation; neither step may truncate.
    #[inline]
    pub fn convert<T: Unit, R2: Representation>(self) -> Quantity<T, R2>
    where
        R: Widen<R2>,
    {
        Quantity::new(__private::convert::<U, T, R, R2>(self.0))
    }

    /// Relabels a quantity whose unit is structurally identical to `T` (same dimension, same ratio).
    ///
    /// This is the typed half of the downcast: the count is untouched and a mismatch fails to compile.
    ///
    /// ```rust
    /// use qdim_core::length::Metres;
    /// use qdim_core::time::Seconds;
    /// use qdim_core::speed::MetrePerSecond;
    ///
    /// let v = (Metres::new(100.0_f64) / Seconds::new(20.0_f64)).downcast::<MetrePerSecond>();
    /// assert_eq!(v.count(), 5.0);
    /// ```
    #[inline]
    pub fn downcast<T: Unit>(self) -> Quantity<T, R> {
        let () = Check::<U, T, R>::SAME_UNIT;
        Quantity::new(self.0)
    }

    /// Looks up the registered unit matching this quantity's dimension and ratio.
    ///
    /// ```rust
    /// use qdim_core::length::Metres;
    ///
    /// let area = Metres::new(2.0_f64) * Metres::new(3.0_f64);
    /// assert_eq!(area.resolved_unit().symbol(), Some("m²"));
    /// ```
    #[inline]
    pub fn resolved_unit(&self) -> Downcast {
        registry::downcast_unit::<U>()
    }

    /// Raises the quantity to an integral power; negative powers take the reciprocal of the count.
    ///
    /// ```rust
    /// use qdim_core::length::Metres;
    /// let volume = Metres::<i32>::new(3).pow::<3>();
    /// assert_eq!(volume.count(), 27);
    /// ```
    #[inline]
    pub fn pow<const N: i8>(self) -> Quantity<Pow<U, N>, R> {
        let magnitude = num_traits::pow(self.0, N.unsigned_abs() as usize);
        if N < 0 {
            Quantity::new(R::one() / magnitude)
        } else {
            Quantity::new(magnitude)
        }
    }
}

impl<U: Unit, R: Representation + Signed> Quantity<U, R> {
    /// Returns the absolute value.
    ///
    /// ```rust
    /// use qdim_core::length::Metres;
    /// let a = Metres::<f64>::new(-10.0);
    /// assert_eq!(a.abs().count(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }
}

impl<U: Unit, R: Representation> Default for Quantity<U, R> {
    fn default() -> Self {
        Self::zero()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operators between quantities of one dimension
// ─────────────────────────────────────────────────────────────────────────────

impl<U1, U2, R1, R2> Add<Quantity<U2, R2>> for Quantity<U1, R1>
where
    U1: Combine<U2>,
    U2: Unit,
    R1: Promote<R2>,
    R2: Representation,
{
    type Output = Quantity<Combined<U1, U2>, Promoted<R1, R2>>;
    #[inline]
    fn add(self, rhs: Quantity<U2, R2>) -> Self::Output {
        let (a, b) = __private::common_counts::<U1, U2, Combined<U1, U2>, R1, R2>(self, rhs);
        Quantity::new(a + b)
    }
}

impl<U1, U2, R1, R2> Sub<Quantity<U2, R2>> for Quantity<U1, R1>
where
    U1: Combine<U2>,
    U2: Unit,
    R1: Promote<R2>,
    R2: Representation,
{
    type Output = Quantity<Combined<U1, U2>, Promoted<R1, R2>>;
    #[inline]
    fn sub(self, rhs: Quantity<U2, R2>) -> Self::Output {
        let (a, b) = __private::common_counts::<U1, U2, Combined<U1, U2>, R1, R2>(self, rhs);
        Quantity::new(a - b)
    }
}

impl<U1, U2, R1, R2> Rem<Quantity<U2, R2>> for Quantity<U1, R1>
where
    U1: Combine<U2>,
    U2: Unit,
    R1: Promote<R2>,
    R2: Representation,
    Promoted<R1, R2>: Integral,
{
    type Output = Quantity<Combined<U1, U2>, Promoted<R1, R2>>;
    #[inline]
    fn rem(self, rhs: Quantity<U2, R2>) -> Self::Output {
        let (a, b) = __private::common_counts::<U1, U2, Combined<U1, U2>, R1, R2>(self, rhs);
        Quantity::new(a % b)
    }
}

/// Compares both counts in the finer of the two units; the dimensions must be equivalent.
impl<U1: Unit, U2: Unit, R1: Promote<R2>, R2: Representation> PartialEq<Quantity<U2, R2>> for Quantity<U1, R1> {
    #[inline]
    fn eq(&self, other: &Quantity<U2, R2>) -> bool {
        let (a, b) = __private::common_counts::<U1, U2, Finer<U1, U2>, R1, R2>(*self, *other);
        a == b
    }
}

impl<U1: Unit, U2: Unit, R1: Promote<R2>, R2: Representation> PartialOrd<Quantity<U2, R2>> for Quantity<U1, R1> {
    #[inline]
    fn partial_cmp(&self, other: &Quantity<U2, R2>) -> Option<Ordering> {
        let (a, b) = __private::common_counts::<U1, U2, Finer<U1, U2>, R1, R2>(*self, *other);
        a.partial_cmp(&b)
    }
}

impl<U: Unit, R: Representation + Eq + Promote<R>> Eq for Quantity<U, R> {}

impl<U: Unit, R: Representation + Ord + Promote<R>> Ord for Quantity<U, R> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<U: Unit, R: Representation + Hash> Hash for Quantity<U, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// Rescales the right operand into the left operand's unit and representation, neither of which may truncate.
impl<U1: Unit, U2: Unit, R1: Representation, R2: Widen<R1>> AddAssign<Quantity<U2, R2>> for Quantity<U1, R1> {
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<U2, R2>) {
        self.0 = self.0 + __private::assign_count::<U1, U2, R1, R2>(rhs);
    }
}

impl<U1: Unit, U2: Unit, R1: Representation, R2: Widen<R1>> SubAssign<Quantity<U2, R2>> for Quantity<U1, R1> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<U2, R2>) {
        self.0 = self.0 - __private::assign_count::<U1, U2, R1, R2>(rhs);
    }
}

impl<U1: Unit, U2: Unit, R1: Integral, R2: Widen<R1>> RemAssign<Quantity<U2, R2>> for Quantity<U1, R1> {
    #[inline]
    fn rem_assign(&mut self, rhs: Quantity<U2, R2>) {
        self.0 = self.0 % __private::assign_count::<U1, U2, R1, R2>(rhs);
    }
}

impl<U: Unit, R: Representation + Neg<Output = R>> Neg for Quantity<U, R> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Products and quotients of arbitrary quantities
// ─────────────────────────────────────────────────────────────────────────────

impl<U1: Unit, U2: Unit, R1: Promote<R2>, R2: Representation> Mul<Quantity<U2, R2>> for Quantity<U1, R1> {
    type Output = Quantity<Prod<U1, U2>, Promoted<R1, R2>>;
    #[inline]
    fn mul(self, rhs: Quantity<U2, R2>) -> Self::Output {
        Quantity::new(self.0.promote() * R1::promote_rhs(rhs.0))
    }
}

impl<U1: Unit, U2: Unit, R1: Promote<R2>, R2: Representation> Div<Quantity<U2, R2>> for Quantity<U1, R1> {
    type Output = Quantity<Per<U1, U2>, Promoted<R1, R2>>;
    #[inline]
    fn div(self, rhs: Quantity<U2, R2>) -> Self::Output {
        Quantity::new(self.0.promote() / R1::promote_rhs(rhs.0))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scalar operators
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! impl_scalar_ops {
    ($($t:ty),* $(,)?) => {$(
        impl<U: Unit, R: Promote<$t>> Mul<$t> for Quantity<U, R> {
            type Output = Quantity<U, Promoted<R, $t>>;
            #[inline]
            fn mul(self, rhs: $t) -> Self::Output {
                Quantity::new(<R as Promote<$t>>::promote(self.0) * <R as Promote<$t>>::promote_rhs(rhs))
            }
        }

        impl<U: Unit, R: Representation> Mul<Quantity<U, R>> for $t
        where
            $t: Promote<R>,
        {
            type Output = Quantity<U, Promoted<$t, R>>;
            #[inline]
            fn mul(self, rhs: Quantity<U, R>) -> Self::Output {
                Quantity::new(<$t as Promote<R>>::promote(self) * <$t as Promote<R>>::promote_rhs(rhs.0))
            }
        }

        impl<U: Unit, R: Promote<$t>> Div<$t> for Quantity<U, R> {
            type Output = Quantity<U, Promoted<R, $t>>;
            #[inline]
            fn div(self, rhs: $t) -> Self::Output {
                Quantity::new(<R as Promote<$t>>::promote(self.0) / <R as Promote<$t>>::promote_rhs(rhs))
            }
        }

        impl<U: Unit, R: Representation> Div<Quantity<U, R>> for $t
        where
            $t: Promote<R>,
        {
            type Output = Quantity<Per<One, U>, Promoted<$t, R>>;
            #[inline]
            fn div(self, rhs: Quantity<U, R>) -> Self::Output {
                Quantity::new(<$t as Promote<R>>::promote(self) / <$t as Promote<R>>::promote_rhs(rhs.0))
            }
        }

        impl<U: Unit, R: Promote<$t>> Rem<$t> for Quantity<U, R>
        where
            Promoted<R, $t>: Integral,
        {
            type Output = Quantity<U, Promoted<R, $t>>;
            #[inline]
            fn rem(self, rhs: $t) -> Self::Output {
                Quantity::new(<R as Promote<$t>>::promote(self.0) % <R as Promote<$t>>::promote_rhs(rhs))
            }
        }

        impl<U: Unit, R: Representation> MulAssign<$t> for Quantity<U, R>
        where
            $t: Widen<R>,
        {
            #[inline]
            fn mul_assign(&mut self, rhs: $t) {
                self.0 = self.0 * <$t as Widen<R>>::widen(rhs);
            }
        }

        impl<U: Unit, R: Representation> DivAssign<$t> for Quantity<U, R>
        where
            $t: Widen<R>,
        {
            #[inline]
            fn div_assign(&mut self, rhs: $t) {
                self.0 = self.0 / <$t as Widen<R>>::widen(rhs);
            }
        }

        impl<U: Unit, R: Integral> RemAssign<$t> for Quantity<U, R>
        where
            $t: Widen<R>,
        {
            #[inline]
            fn rem_assign(&mut self, rhs: $t) {
                self.0 = self.0 % <$t as Widen<R>>::widen(rhs);
            }
        }

        impl<U: Unit<Dim = Dimensionless>> Add<Quantity<U, $t>> for $t {
            type Output = Quantity<U, $t>;
            #[inline]
            fn add(self, rhs: Quantity<U, $t>) -> Quantity<U, $t> {
                rhs + self
            }
        }

        impl<U: Unit<Dim = Dimensionless>> Sub<Quantity<U, $t>> for $t {
            type Output = Quantity<U, $t>;
            #[inline]
            fn sub(self, rhs: Quantity<U, $t>) -> Quantity<U, $t> {
                let () = CheckUnit::<U>::IS_ONE;
                Quantity::new(self - rhs.0)
            }
        }

        impl<U: Unit<Dim = Dimensionless>> PartialEq<Quantity<U, $t>> for $t {
            #[inline]
            fn eq(&self, other: &Quantity<U, $t>) -> bool {
                other == self
            }
        }

        impl<U: Unit<Dim = Dimensionless>> PartialOrd<Quantity<U, $t>> for $t {
            #[inline]
            fn partial_cmp(&self, other: &Quantity<U, $t>) -> Option<Ordering> {
                other.partial_cmp(self).map(Ordering::reverse)
            }
        }
    )*};
}

impl_scalar_ops!(i8, i16, i32, i64, i128, u8, u16, u32, u64, f32, f64);

// ─────────────────────────────────────────────────────────────────────────────
// Bare numbers
// ─────────────────────────────────────────────────────────────────────────────

// Bare numbers mix with dimensionless quantities in the unit `one` only, in the quantity's own representation. A
// count of another type goes through `Quantity::from_count` first.

impl<U: Unit<Dim = Dimensionless>, R: Representation> Add<R> for Quantity<U, R> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: R) -> Self {
        let () = CheckUnit::<U>::IS_ONE;
        Self::new(self.0 + rhs)
    }
}

impl<U: Unit<Dim = Dimensionless>, R: Representation> Sub<R> for Quantity<U, R> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: R) -> Self {
        let () = CheckUnit::<U>::IS_ONE;
        Self::new(self.0 - rhs)
    }
}

impl<U: Unit<Dim = Dimensionless>, R: Representation> PartialEq<R> for Quantity<U, R> {
    #[inline]
    fn eq(&self, other: &R) -> bool {
        let () = CheckUnit::<U>::IS_ONE;
        self.0 == *other
    }
}

impl<U: Unit<Dim = Dimensionless>, R: Representation> PartialOrd<R> for Quantity<U, R> {
    #[inline]
    fn partial_cmp(&self, other: &R) -> Option<Ordering> {
        let () = CheckUnit::<U>::IS_ONE;
        self.0.partial_cmp(other)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────────────

/// Formats the count followed by the unit symbol.
///
/// Units without a symbol (products, quotients and other structural units) are labelled through the downcast
/// registry: `m²` when a named unit matches, `[36×10^2] m` for a scaled coherent unit, `m·s` for an unnamed dimension.
/// Formatting options such as precision apply to the count.
impl<U: Unit, R: Representation + fmt::Display> fmt::Display for Quantity<U, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)?;
        if !U::SYMBOL.is_empty() {
            return write!(f, " {}", U::SYMBOL);
        }
        match registry::downcast_unit::<U>() {
            Downcast::Named(entry) if entry.symbol.is_empty() => Ok(()),
            resolved => write!(f, " {}", resolved),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit, R: Representation + Serialize> Serialize for Quantity<U, R> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit, R: Representation + Deserialize<'de>> Deserialize<'de> for Quantity<U, R> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let count = R::deserialize(deserializer)?;
        Ok(Quantity::new(count))
    }
}

/// Serde helper module for serializing quantities with unit information.
///
/// Use this with the `#[serde(with = "...")]` attribute to keep the unit label next to the count. Structural units
/// use their registry label (e.g. `"m²"` for `Prod<Metre, Metre>`).
///
/// # Examples
///
/// ```rust
/// use qdim_core::length::Metres;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Config {
///     #[serde(with = "qdim_core::serde_with_unit")]
///     max_distance: Metres,  // Serializes as {"value": 100.0, "unit": "m"}
///
///     min_distance: Metres,  // Serializes as 50.0 (default, compact)
/// }
/// ```
#[cfg(all(feature = "serde", feature = "std"))]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    fn unit_label<U: Unit>() -> String {
        if U::SYMBOL.is_empty() {
            registry::downcast_unit::<U>().to_string()
        } else {
            U::SYMBOL.to_string()
        }
    }

    /// Serializes a `Quantity<U, R>` as a struct with `value` and `unit` fields.
    ///
    /// # Example JSON Output
    /// ```json
    /// {"value": 42.5, "unit": "m"}
    /// ```
    pub fn serialize<U, R, S>(quantity: &Quantity<U, R>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        R: Representation + Serialize,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.count())?;
        state.serialize_field("unit", &unit_label::<U>())?;
        state.end()
    }

    /// Deserializes a `Quantity<U, R>` from a struct with `value` and optionally `unit` fields.
    ///
    /// A `unit` field, when present, must match the label `serialize` writes for `U`.
    pub fn deserialize<'de, U, R, D>(deserializer: D) -> Result<Quantity<U, R>, D::Error>
    where
        U: Unit,
        R: Representation + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U, R>(PhantomData<(U, R)>);

        impl<'de, U: Unit, R: Representation + Deserialize<'de>> Visitor<'de> for QuantityVisitor<U, R> {
            type Value = Quantity<U, R>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<U, R>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<R> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(found) = unit {
                    let expected = unit_label::<U>();
                    if found != expected {
                        return Err(de::Error::custom(format!(
                            "unit mismatch: expected '{}', found '{}'",
                            expected, found
                        )));
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct("Quantity", &["value", "unit"], QuantityVisitor(PhantomData))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers for the operators and the unit-relation macro
// ─────────────────────────────────────────────────────────────────────────────

/// Implementation details of the quantity operators and [`impl_unit_relations!`](crate::impl_unit_relations). Not
/// public API.
#[doc(hidden)]
pub mod __private {
    use super::*;

    /// Both counts rescaled into the common unit `C`, in the common representation.
    #[inline]
    pub fn common_counts<A, B, C, R1, R2>(
        lhs: Quantity<A, R1>,
        rhs: Quantity<B, R2>,
    ) -> (Promoted<R1, R2>, Promoted<R1, R2>)
    where
        A: Unit,
        B: Unit,
        C: Unit,
        R1: Promote<R2>,
        R2: Representation,
    {
        let () = Check::<A, C, Promoted<R1, R2>>::SAME_DIMENSION;
        let () = Check::<B, C, Promoted<R1, R2>>::SAME_DIMENSION;
        let () = Check::<A, C, Promoted<R1, R2>>::LOSSLESS;
        let () = Check::<B, C, Promoted<R1, R2>>::LOSSLESS;
        (
            rescale_checked::<A, C, _, _>(<R1 as Promote<R2>>::promote(lhs.0)),
            rescale_checked::<B, C, _, _>(<R1 as Promote<R2>>::promote_rhs(rhs.0)),
        )
    }

    /// The count of `rhs` expressed in `To`, for compound assignment into an `R1` count.
    #[inline]
    pub fn assign_count<To, From, R1, R2>(rhs: Quantity<From, R2>) -> R1
    where
        To: Unit,
        From: Unit,
        R1: Representation,
        R2: Widen<R1>,
    {
        let () = Check::<From, To, R1>::SAME_DIMENSION;
        let () = Check::<From, To, R1>::LOSSLESS;
        rescale_checked::<From, To, R1, R1>(rhs.0.widen())
    }

    /// Non-truncating conversion of a count between units and representations.
    #[inline]
    pub fn convert<From, To, R1, R2>(count: R1) -> R2
    where
        From: Unit,
        To: Unit,
        R1: Widen<R2>,
        R2: Representation,
    {
        let () = Check::<From, To, R2>::SAME_DIMENSION;
        let () = Check::<From, To, R2>::LOSSLESS;
        rescale_checked::<From, To, R2, R2>(count.widen())
    }
}
