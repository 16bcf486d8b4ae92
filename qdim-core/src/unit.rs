//! Unit types and traits.

use crate::dimension::{Dimension, DivDim, MulDim, PowDim};
use crate::ratio::Ratio;
use crate::representation::Representation;
use core::cmp::Ordering;
use core::fmt::{Debug, Formatter, Result};
use core::marker::PhantomData;

/// Trait implemented by every **unit** type.
///
/// * `RATIO` is the exact scale of this unit relative to the *coherent unit* of its dimension (the unit with ratio
///   one in the base-unit system). Example: metres are coherent (`Metre::RATIO == Ratio::ONE`), so kilometres use
///   `Kilometre::RATIO == Ratio::integer(1000)`.
///
/// * `SYMBOL` is the printable string (e.g. `"m"` or `"km"`); structural units leave it empty and are labelled
///   through the downcast registry instead.
///
/// * `Dim` ties the unit to its underlying [`Dimension`].
///
/// Two units of equivalent dimensions are *the same unit* when their ratios are equal, regardless of their types.
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types.
/// - `RATIO` must be non-zero.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Scale relative to the coherent unit of `Dim`.
    const RATIO: Ratio;

    /// Dimension to which this unit belongs.
    type Dim: Dimension;

    /// Printable symbol, shown by [`core::fmt::Display`].
    const SYMBOL: &'static str;

    /// Human-readable name; empty for structural units.
    const NAME: &'static str = "";
}

/// `true` when `U` belongs to dimension `D`, i.e. their exponents match.
pub const fn belongs_to<U: Unit, D: Dimension>() -> bool {
    <U::Dim as Dimension>::EXPONENTS.equivalent(&D::EXPONENTS)
}

/// `true` when `A` and `B` are the same unit: equivalent dimensions and equal ratios.
pub const fn same_unit<A: Unit, B: Unit>() -> bool {
    <A::Dim as Dimension>::EXPONENTS.equivalent(&<B::Dim as Dimension>::EXPONENTS) && A::RATIO.same(&B::RATIO)
}

// ─────────────────────────────────────────────────────────────────────────────
// Structural units
// ─────────────────────────────────────────────────────────────────────────────

/// Unit representing the product of two other units.
///
/// The ratio is the product of the operand ratios, relative to the coherent unit of [`MulDim`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prod<A: Unit, B: Unit>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit> Unit for Prod<A, B> {
    const RATIO: Ratio = A::RATIO.mul(B::RATIO);
    type Dim = MulDim<A::Dim, B::Dim>;
    const SYMBOL: &'static str = "";
}

/// Unit representing the division of two other units.
///
/// `Per<N, D>` corresponds to `N / D` and carries both the dimensional information and the exact scaling ratio
/// between the constituent units. It is generic over any numerator and denominator units, which allows implementing
/// arithmetic generically for all pairs without bespoke macros.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Per<N: Unit, D: Unit>(PhantomData<(N, D)>);

impl<N: Unit, D: Unit> Unit for Per<N, D> {
    const RATIO: Ratio = N::RATIO.div(D::RATIO);
    type Dim = DivDim<N::Dim, D::Dim>;
    const SYMBOL: &'static str = "";
}

/// Unit raised to an integral power, e.g. `Pow<Metre, 2>` for square metres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pow<U: Unit, const N: i8>(PhantomData<U>);

impl<U: Unit, const N: i8> Unit for Pow<U, N> {
    const RATIO: Ratio = U::RATIO.powi(N as i32);
    type Dim = PowDim<U::Dim, N>;
    const SYMBOL: &'static str = "";
}

/// `U` scaled by `NUM / DEN · 10^EXP`.
///
/// ```rust
/// use qdim_core::length::{Metre, Metres};
/// use qdim_core::{Quantity, Scaled};
///
/// // A furlong is 201.168 m.
/// type Furlong = Scaled<Metre, 201_168, 1, -3>;
/// let f = Quantity::<Furlong>::new(1.0);
/// assert!((f.to::<Metre>().count() - 201.168).abs() < 1e-12);
/// # let _: Metres = f.to();
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scaled<U: Unit, const NUM: i64, const DEN: i64 = 1, const EXP: i32 = 0>(PhantomData<U>);

impl<U: Unit, const NUM: i64, const DEN: i64, const EXP: i32> Unit for Scaled<U, NUM, DEN, EXP> {
    const RATIO: Ratio = U::RATIO.mul(Ratio::with_exp(NUM, DEN, EXP));
    type Dim = U::Dim;
    const SYMBOL: &'static str = "";
}

/// The coherent unit of an arbitrary dimension.
///
/// This is the placeholder unit produced when a quantity is cast to a dimension only (see
/// [`Quantity::cast_dimension`](crate::Quantity::cast_dimension)); the downcast registry resolves it to the named
/// coherent unit when one is declared.
pub struct Coherent<D: Dimension>(PhantomData<D>);

impl<D: Dimension> Clone for Coherent<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension> Copy for Coherent<D> {}

impl<D: Dimension> PartialEq for Coherent<D> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<D: Dimension> Debug for Coherent<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Coherent<{}>", D::EXPONENTS)
    }
}

impl<D: Dimension> Unit for Coherent<D> {
    const RATIO: Ratio = Ratio::ONE;
    type Dim = D;
    const SYMBOL: &'static str = "";
}

/// The finer of two units of one dimension: the ratio of whichever has the smaller one.
///
/// This is the result unit of `+`, `-` and `%` when an operand's unit is structural, so that a length built as
/// `m/s · h` adds to metres without losing precision. It takes the symbol of the finer operand, and the registry names
/// it when that operand has none.
///
/// ```rust
/// use qdim_core::length::{Metre, Metres};
/// use qdim_core::speed::MetresPerSecond;
/// use qdim_core::time::Hours;
/// use qdim_core::{Finer, Quantity};
///
/// let d = MetresPerSecond::<i32>::new(10) * Hours::<i32>::new(2) + Metres::<i32>::new(5);
/// assert_eq!(d.count(), 72_005);
/// assert_eq!(d.to_string(), "72005 m");
/// # let _: Quantity<Finer<_, Metre>, i32> = d;
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Finer<A: Unit, B: Unit>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit> Unit for Finer<A, B> {
    const RATIO: Ratio = A::RATIO.smaller(B::RATIO);
    type Dim = A::Dim;
    const SYMBOL: &'static str = match A::RATIO.cmp_value(&B::RATIO) {
        Ordering::Greater => B::SYMBOL,
        Ordering::Less | Ordering::Equal => A::SYMBOL,
    };
}

/// Result unit of `+`, `-` and `%` between quantities in `Self` and `Rhs`.
///
/// A unit combines with itself into itself. Units declared together through
/// [`impl_unit_relations!`](crate::impl_unit_relations) combine into the finer of the two, and any structural unit
/// combines with any other unit into [`Finer`]. Whether the two dimensions actually match is checked when the
/// operation is instantiated.
pub trait Combine<Rhs: Unit>: Unit {
    /// The common unit.
    type Output: Unit;
}

/// Shorthand for `<A as Combine<B>>::Output`.
pub type Combined<A, B> = <A as Combine<B>>::Output;

macro_rules! impl_structural_combine {
    (@one [$($lg:tt)*] $lhs:ty; [$($rg:tt)*] $rhs:ty) => {
        impl<$($lg)*, $($rg)*> Combine<$rhs> for $lhs {
            type Output = Finer<$lhs, $rhs>;
        }
    };
    (@row $lg:tt $lhs:ty; { $($rg:tt $rhs:ty),+ $(,)? }) => {
        $( impl_structural_combine!(@one $lg $lhs; $rg $rhs); )+
    };
    ($($lg:tt $lhs:ty),+ ; $rhs:tt) => {
        $( impl_structural_combine!(@row $lg $lhs; $rhs); )+
    };
}

impl_structural_combine! {
    [A1: Unit, B1: Unit] Prod<A1, B1>,
    [A1: Unit, B1: Unit] Per<A1, B1>,
    [A1: Unit, const N1: i8] Pow<A1, N1>,
    [A1: Unit, const P1: i64, const Q1: i64, const E1: i32] Scaled<A1, P1, Q1, E1>,
    [D1: Dimension] Coherent<D1>,
    [A1: Unit, B1: Unit] Finer<A1, B1>;
    {
        [A2: Unit, B2: Unit] Prod<A2, B2>,
        [A2: Unit, B2: Unit] Per<A2, B2>,
        [A2: Unit, const N2: i8] Pow<A2, N2>,
        [A2: Unit, const P2: i64, const Q2: i64, const E2: i32] Scaled<A2, P2, Q2, E2>,
        [D2: Dimension] Coherent<D2>,
        [A2: Unit, B2: Unit] Finer<A2, B2>,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-time checks
// ─────────────────────────────────────────────────────────────────────────────

/// Unit-pair checks evaluated when a generic operation is instantiated.
///
/// Referencing one of the constants (`let () = Check::<A, B, R>::LOSSLESS;`) turns a violated requirement into a
/// compile error at the call site that instantiated the operation.
pub(crate) struct Check<A, B, R>(PhantomData<(A, B, R)>);

impl<A: Unit, B: Unit, R: Representation> Check<A, B, R> {
    pub(crate) const SAME_DIMENSION: () = assert!(
        <A::Dim as Dimension>::EXPONENTS.equivalent(&<B::Dim as Dimension>::EXPONENTS),
        "units belong to different dimensions"
    );

    /// Rescaling an `R` count from `A` to `B` never truncates.
    pub(crate) const LOSSLESS: () = assert!(
        R::IS_FLOAT || A::RATIO.div(B::RATIO).is_integral(),
        "unit conversion would truncate an integral count; use an explicit cast"
    );

    pub(crate) const SAME_UNIT: () = assert!(same_unit::<A, B>(), "units are not structurally identical");
}

/// Single-unit checks.
pub(crate) struct CheckUnit<U>(PhantomData<U>);

impl<U: Unit> CheckUnit<U> {
    /// `U` is the dimensionless unit `one`.
    pub(crate) const IS_ONE: () = assert!(
        <U::Dim as Dimension>::EXPONENTS.is_dimensionless() && U::RATIO.is_one(),
        "only quantities in the unit `one` mix with bare numbers"
    );
}

/// Unit-in-dimension check.
pub(crate) struct CheckDimension<U, D>(PhantomData<(U, D)>);

impl<U: Unit, D: Dimension> CheckDimension<U, D> {
    pub(crate) const BELONGS: () = assert!(belongs_to::<U, D>(), "unit does not belong to the requested dimension");
}
