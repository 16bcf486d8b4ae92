//! Dimension types and traits.
//!
//! A physical dimension is a product of base-dimension powers, e.g. `L·T^-1` for speed. At the value level it is an
//! [`Exponents`] vector indexed by [`BaseDimension`]; at the type level it is a marker type implementing
//! [`Dimension`], whose `EXPONENTS` constant carries that vector.
//!
//! Because the vector is dense and ordered by base, two dimensions built in different orders compare equal:
//!
//! ```rust
//! use qdim_core::{BaseDimension as B, Exponents};
//!
//! let a = Exponents::from_pairs(&[(B::Length, 1), (B::Time, -1)]);
//! let b = Exponents::from_pairs(&[(B::Time, -1), (B::Length, 1)]);
//! assert!(a.equivalent(&b));
//! assert_eq!(a.to_string(), "L·T^-1");
//! ```

use core::fmt;
use core::marker::PhantomData;

/// Number of custom base-dimension slots after the seven SI bases.
pub const CUSTOM_BASES: usize = 4;

/// Total number of base dimensions tracked by [`Exponents`].
pub const BASE_DIMENSIONS: usize = 7 + CUSTOM_BASES;

/// The base dimensions, in canonical order.
///
/// `Custom(slot)` lets a unit system add its own independent bases, such as information or currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaseDimension {
    /// `L`
    Length,
    /// `M`
    Mass,
    /// `T`
    Time,
    /// `I`
    Current,
    /// `Θ`
    Temperature,
    /// `N`
    Amount,
    /// `J`
    LuminousIntensity,
    /// User-defined base.
    Custom(CustomBase),
}

/// One of the [`CUSTOM_BASES`] extension slots of [`BaseDimension`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CustomBase {
    /// `X0`
    X0,
    /// `X1`
    X1,
    /// `X2`
    X2,
    /// `X3`
    X3,
}

impl CustomBase {
    /// Slot number, below [`CUSTOM_BASES`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`index`](Self::index).
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::X0),
            1 => Some(Self::X1),
            2 => Some(Self::X2),
            3 => Some(Self::X3),
            _ => None,
        }
    }
}

impl BaseDimension {
    /// Position in the canonical ordering.
    pub const fn index(self) -> usize {
        match self {
            Self::Length => 0,
            Self::Mass => 1,
            Self::Time => 2,
            Self::Current => 3,
            Self::Temperature => 4,
            Self::Amount => 5,
            Self::LuminousIntensity => 6,
            Self::Custom(slot) => 7 + slot.index(),
        }
    }

    /// Inverse of [`index`](Self::index).
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Length),
            1 => Some(Self::Mass),
            2 => Some(Self::Time),
            3 => Some(Self::Current),
            4 => Some(Self::Temperature),
            5 => Some(Self::Amount),
            6 => Some(Self::LuminousIntensity),
            n => match CustomBase::from_index(n - 7) {
                Some(slot) => Some(Self::Custom(slot)),
                None => None,
            },
        }
    }

    /// Dimension symbol (`L`, `M`, `T`, …).
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Length => "L",
            Self::Mass => "M",
            Self::Time => "T",
            Self::Current => "I",
            Self::Temperature => "Θ",
            Self::Amount => "N",
            Self::LuminousIntensity => "J",
            Self::Custom(CustomBase::X0) => "X0",
            Self::Custom(CustomBase::X1) => "X1",
            Self::Custom(CustomBase::X2) => "X2",
            Self::Custom(CustomBase::X3) => "X3",
        }
    }

    /// Symbol of the coherent unit of the base in the SI system.
    pub const fn coherent_symbol(self) -> &'static str {
        match self {
            Self::Length => "m",
            Self::Mass => "kg",
            Self::Time => "s",
            Self::Current => "A",
            Self::Temperature => "K",
            Self::Amount => "mol",
            Self::LuminousIntensity => "cd",
            Self::Custom(CustomBase::X0) => "x0",
            Self::Custom(CustomBase::X1) => "x1",
            Self::Custom(CustomBase::X2) => "x2",
            Self::Custom(CustomBase::X3) => "x3",
        }
    }
}

/// One non-zero factor of a dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BaseExponent {
    /// The base dimension.
    pub base: BaseDimension,
    /// Its power, never zero.
    pub exponent: i8,
}

/// Exponent vector of a dimension.
///
/// Zero entries are absent factors, so the dimensionless dimension is the all-zero vector and the identity of
/// [`multiply`](Self::multiply).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Exponents {
    powers: [i8; BASE_DIMENSIONS],
}

impl Exponents {
    /// The dimensionless dimension.
    pub const DIMENSIONLESS: Self = Self {
        powers: [0; BASE_DIMENSIONS],
    };

    /// A single base to the first power.
    pub const fn base(base: BaseDimension) -> Self {
        let mut powers = [0; BASE_DIMENSIONS];
        powers[base.index()] = 1;
        Self { powers }
    }

    /// Builds a dimension from `(base, exponent)` pairs in any order; repeated bases add up.
    pub const fn from_pairs(pairs: &[(BaseDimension, i8)]) -> Self {
        let mut powers = [0i8; BASE_DIMENSIONS];
        let mut i = 0;
        while i < pairs.len() {
            let (base, exponent) = pairs[i];
            let slot = base.index();
            powers[slot] = add_exponents(powers[slot], exponent);
            i += 1;
        }
        Self { powers }
    }

    /// Power of `base` in this dimension (zero when absent).
    pub const fn exponent(&self, base: BaseDimension) -> i8 {
        self.powers[base.index()]
    }

    /// Product of two dimensions: exponents add, zero sums drop out.
    pub const fn multiply(&self, other: &Self) -> Self {
        let mut powers = [0i8; BASE_DIMENSIONS];
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            powers[i] = add_exponents(self.powers[i], other.powers[i]);
            i += 1;
        }
        Self { powers }
    }

    /// Quotient of two dimensions.
    pub const fn divide(&self, other: &Self) -> Self {
        self.multiply(&other.invert())
    }

    /// Negates every exponent.
    pub const fn invert(&self) -> Self {
        self.pow(-1)
    }

    /// Raises the dimension to an integral power.
    pub const fn pow(&self, n: i8) -> Self {
        let mut powers = [0i8; BASE_DIMENSIONS];
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            powers[i] = match self.powers[i].checked_mul(n) {
                Some(p) => p,
                None => panic!("dimension exponent overflow"),
            };
            i += 1;
        }
        Self { powers }
    }

    /// Structural equality, usable in const context.
    pub const fn equivalent(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            if self.powers[i] != other.powers[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    /// `true` for the empty product.
    pub const fn is_dimensionless(&self) -> bool {
        self.equivalent(&Self::DIMENSIONLESS)
    }

    /// Non-zero factors in canonical base order.
    pub fn iter(&self) -> impl Iterator<Item = BaseExponent> + '_ {
        self.powers
            .iter()
            .enumerate()
            .filter_map(|(index, &exponent)| {
                if exponent == 0 {
                    return None;
                }
                BaseDimension::from_index(index).map(|base| BaseExponent { base, exponent })
            })
    }

    /// Formats the dimension through its coherent SI symbols, e.g. `m·s^-1`.
    pub fn coherent_symbol(&self) -> CoherentSymbol {
        CoherentSymbol(*self)
    }

    fn write_with(
        &self,
        f: &mut fmt::Formatter<'_>,
        symbol: fn(BaseDimension) -> &'static str,
    ) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        for (i, factor) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("·")?;
            }
            f.write_str(symbol(factor.base))?;
            if factor.exponent != 1 {
                write!(f, "^{}", factor.exponent)?;
            }
        }
        Ok(())
    }
}

const fn add_exponents(a: i8, b: i8) -> i8 {
    match a.checked_add(b) {
        Some(sum) => sum,
        None => panic!("dimension exponent overflow"),
    }
}

impl fmt::Display for Exponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, BaseDimension::symbol)
    }
}

/// [`Display`](fmt::Display) adapter returned by [`Exponents::coherent_symbol`].
#[derive(Clone, Copy, Debug)]
pub struct CoherentSymbol(Exponents);

impl fmt::Display for CoherentSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_with(f, BaseDimension::coherent_symbol)
    }
}

/// Trait implemented by every **dimension** marker type.
///
/// Dimensions are usually modelled as empty enums:
///
/// ```rust
/// use qdim_core::{BaseDimension, CustomBase, Dimension, Exponents};
///
/// pub enum Information {}
/// impl Dimension for Information {
///     const EXPONENTS: Exponents = Exponents::base(BaseDimension::Custom(CustomBase::X0));
///     const NAME: &'static str = "information";
/// }
/// ```
///
/// Two marker types with the same `EXPONENTS` are the same physical dimension; every check in this crate compares
/// exponents, never type identity.
pub trait Dimension: 'static {
    /// Base-dimension exponents.
    const EXPONENTS: Exponents;

    /// Human-readable name; empty for structurally derived dimensions.
    const NAME: &'static str = "";
}

/// Dimension formed by multiplying two dimensions.
pub struct MulDim<A: Dimension, B: Dimension>(PhantomData<(A, B)>);
impl<A: Dimension, B: Dimension> Dimension for MulDim<A, B> {
    const EXPONENTS: Exponents = A::EXPONENTS.multiply(&B::EXPONENTS);
}

/// Dimension formed by dividing one [`Dimension`] by another.
///
/// This is used to model composite dimensions such as `Length/Time` for speeds.
pub struct DivDim<N: Dimension, D: Dimension>(PhantomData<(N, D)>);
impl<N: Dimension, D: Dimension> Dimension for DivDim<N, D> {
    const EXPONENTS: Exponents = N::EXPONENTS.divide(&D::EXPONENTS);
}

/// Dimension raised to an integral power.
pub struct PowDim<D: Dimension, const N: i8>(PhantomData<D>);
impl<D: Dimension, const N: i8> Dimension for PowDim<D, N> {
    const EXPONENTS: Exponents = D::EXPONENTS.pow(N);
}

/// Dimension for dimensionless quantities.
pub enum Dimensionless {}
impl Dimension for Dimensionless {
    const EXPONENTS: Exponents = Exponents::DIMENSIONLESS;
    const NAME: &'static str = "dimensionless";
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use BaseDimension as B;

    enum Length {}
    impl Dimension for Length {
        const EXPONENTS: Exponents = Exponents::base(B::Length);
    }
    enum Time {}
    impl Dimension for Time {
        const EXPONENTS: Exponents = Exponents::base(B::Time);
    }

    #[test]
    fn index_round_trips() {
        for i in 0..BASE_DIMENSIONS {
            let base = BaseDimension::from_index(i).unwrap();
            assert_eq!(base.index(), i);
        }
        assert_eq!(BaseDimension::from_index(BASE_DIMENSIONS), None);
    }

    #[test]
    fn multiply_drops_cancelled_bases() {
        let speed = Exponents::from_pairs(&[(B::Length, 1), (B::Time, -1)]);
        let time = Exponents::base(B::Time);
        let length = speed.multiply(&time);
        assert_eq!(length, Exponents::base(B::Length));
        assert_eq!(length.iter().count(), 1);
    }

    #[test]
    fn dimensionless_is_identity() {
        let force = Exponents::from_pairs(&[(B::Mass, 1), (B::Length, 1), (B::Time, -2)]);
        assert_eq!(force.multiply(&Exponents::DIMENSIONLESS), force);
        assert!(force.divide(&force).is_dimensionless());
    }

    #[test]
    fn from_pairs_sums_repeated_bases() {
        let area = Exponents::from_pairs(&[(B::Length, 1), (B::Length, 1)]);
        assert_eq!(area.exponent(B::Length), 2);
        assert!(Exponents::from_pairs(&[(B::Time, 1), (B::Time, -1)]).is_dimensionless());
    }

    #[test]
    fn invert_negates() {
        let accel = Exponents::from_pairs(&[(B::Length, 1), (B::Time, -2)]);
        let inv = accel.invert();
        assert_eq!(inv.exponent(B::Length), -1);
        assert_eq!(inv.exponent(B::Time), 2);
    }

    #[test]
    fn iter_yields_canonical_order() {
        let d = Exponents::from_pairs(&[(B::Time, -2), (B::Mass, 1), (B::Length, 2)]);
        let bases: Vec<_> = d.iter().map(|f| f.base).collect();
        assert_eq!(bases, vec![B::Length, B::Mass, B::Time]);
    }

    #[test]
    fn display() {
        let energy = Exponents::from_pairs(&[(B::Mass, 1), (B::Length, 2), (B::Time, -2)]);
        assert_eq!(energy.to_string(), "L^2·M·T^-2");
        assert_eq!(energy.coherent_symbol().to_string(), "m^2·kg·s^-2");
        assert_eq!(Exponents::DIMENSIONLESS.to_string(), "1");
    }

    #[test]
    fn structural_dimensions() {
        type Speed = DivDim<Length, Time>;
        type Distance = MulDim<Speed, Time>;
        assert!(<Distance as Dimension>::EXPONENTS.equivalent(&Length::EXPONENTS));
        assert_eq!(
            <PowDim<Length, 3> as Dimension>::EXPONENTS.exponent(B::Length),
            3
        );
        assert!(<DivDim<Length, Length> as Dimension>::EXPONENTS.is_dimensionless());
    }

    #[test]
    fn custom_bases_are_independent() {
        let bits = Exponents::base(B::Custom(CustomBase::X0));
        assert!(!bits.equivalent(&Exponents::base(B::Custom(CustomBase::X1))));
        assert_eq!(bits.to_string(), "X0");
    }

    #[test]
    fn every_base_has_its_own_slot() {
        for index in 0..BASE_DIMENSIONS {
            let base = BaseDimension::from_index(index).unwrap();
            assert_eq!(base.index(), index);
        }
        assert_eq!(BaseDimension::from_index(BASE_DIMENSIONS), None);
        assert_eq!(BaseDimension::Custom(CustomBase::X3).symbol(), "X3");
        assert_eq!(BaseDimension::Custom(CustomBase::X2).coherent_symbol(), "x2");
        assert_eq!(CustomBase::from_index(CUSTOM_BASES), None);
    }

    fn exponents() -> impl Strategy<Value = Exponents> {
        proptest::collection::vec((0usize..7, -3i8..=3), 0..6).prop_map(|pairs| {
            let pairs: Vec<_> = pairs
                .into_iter()
                .map(|(i, e)| (BaseDimension::from_index(i).unwrap(), e))
                .collect();
            Exponents::from_pairs(&pairs)
        })
    }

    proptest! {
        #[test]
        fn multiply_is_commutative(a in exponents(), b in exponents()) {
            prop_assert!(a.multiply(&b).equivalent(&b.multiply(&a)));
        }

        #[test]
        fn divide_undoes_multiply(a in exponents(), b in exponents()) {
            prop_assert_eq!(a.multiply(&b).divide(&b), a);
        }

        #[test]
        fn pair_order_is_irrelevant(pairs in proptest::collection::vec((0usize..7, -3i8..=3), 0..6)) {
            let forward: Vec<_> = pairs.iter().map(|&(i, e)| (BaseDimension::from_index(i).unwrap(), e)).collect();
            let mut backward = forward.clone();
            backward.reverse();
            prop_assert!(Exponents::from_pairs(&forward).equivalent(&Exponents::from_pairs(&backward)));
        }
    }
}
