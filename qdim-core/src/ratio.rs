//! Exact unit scale factors.
//!
//! A [`Ratio`] is the fraction `num / den` multiplied by `10^exp`. Every unit carries one, relative to the coherent
//! unit of its dimension, and every conversion factor between two units is the quotient of their ratios. All
//! arithmetic is integral (performed through `i128`) and `const`, so unit declarations such as "an hour is 3600
//! seconds" and "a kilometre is 1000 metres" combine without rounding.
//!
//! # Canonical form
//!
//! Every constructor normalizes its result:
//!
//! - the sign lives on the numerator and `den > 0`;
//! - the fraction is reduced to lowest terms;
//! - trailing factors of ten of the numerator and the denominator are folded into `exp`;
//! - remaining factors 2 and 5 of the denominator are moved into `exp` (the numerator absorbs the complementary 5 or
//!   2) as long as the numerator stays within `i64`.
//!
//! The result is unique per value, so the derived `PartialEq`, `Eq` and `Hash` compare values.
//!
//! ```rust
//! use qdim_core::Ratio;
//!
//! let hour = Ratio::integer(3600);
//! assert_eq!((hour.num(), hour.den(), hour.exp()), (36, 1, 2));
//! assert_eq!(Ratio::new(1, 60), Ratio::with_exp(1, 6, -1));
//! assert_eq!(hour.mul(Ratio::new(1, 3600)), Ratio::ONE);
//! ```

use core::cmp::Ordering;
use core::fmt;

/// Exact scale factor `num / den · 10^exp`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ratio {
    num: i64,
    den: i64,
    exp: i32,
}

impl Ratio {
    /// The multiplicative identity.
    pub const ONE: Self = Self {
        num: 1,
        den: 1,
        exp: 0,
    };

    /// The canonical zero ratio.
    pub const ZERO: Self = Self {
        num: 0,
        den: 1,
        exp: 0,
    };

    /// Builds `num / den`.
    ///
    /// # Panics
    ///
    /// Panics (a compile error in const context) if `den` is zero.
    #[inline]
    pub const fn new(num: i64, den: i64) -> Self {
        Self::with_exp(num, den, 0)
    }

    /// Builds `num / den · 10^exp`.
    ///
    /// # Panics
    ///
    /// Panics (a compile error in const context) if `den` is zero.
    #[inline]
    pub const fn with_exp(num: i64, den: i64, exp: i32) -> Self {
        Self::normalize(num as i128, den as i128, exp)
    }

    /// Builds the integral ratio `value`.
    #[inline]
    pub const fn integer(value: i64) -> Self {
        Self::with_exp(value, 1, 0)
    }

    /// Numerator of the normalized fraction.
    #[inline]
    pub const fn num(&self) -> i64 {
        self.num
    }

    /// Denominator of the normalized fraction (always positive).
    #[inline]
    pub const fn den(&self) -> i64 {
        self.den
    }

    /// Power-of-ten exponent.
    #[inline]
    pub const fn exp(&self) -> i32 {
        self.exp
    }

    /// Product of two ratios.
    #[inline]
    pub const fn mul(self, rhs: Self) -> Self {
        Self::normalize(
            self.num as i128 * rhs.num as i128,
            self.den as i128 * rhs.den as i128,
            self.exp + rhs.exp,
        )
    }

    /// Quotient of two ratios.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    pub const fn div(self, rhs: Self) -> Self {
        assert!(rhs.num != 0, "division by a zero ratio");
        Self::normalize(
            self.num as i128 * rhs.den as i128,
            self.den as i128 * rhs.num as i128,
            self.exp - rhs.exp,
        )
    }

    /// Reciprocal.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    #[inline]
    pub const fn inverse(self) -> Self {
        Self::ONE.div(self)
    }

    /// Integral power; negative powers invert.
    pub const fn powi(self, n: i32) -> Self {
        let base = if n < 0 { self.inverse() } else { self };
        let mut remaining = n.unsigned_abs();
        let mut acc = Self::ONE;
        while remaining > 0 {
            acc = acc.mul(base);
            remaining -= 1;
        }
        acc
    }

    /// `true` for the identity ratio.
    #[inline]
    pub const fn is_one(&self) -> bool {
        self.same(&Self::ONE)
    }

    /// `true` when the ratio is a whole number, i.e. scaling an integral count by it never truncates.
    #[inline]
    pub const fn is_integral(&self) -> bool {
        self.den == 1 && self.exp >= 0
    }

    /// Const equality.
    #[inline]
    pub const fn same(&self, other: &Self) -> bool {
        self.num == other.num && self.den == other.den && self.exp == other.exp
    }

    /// Exact ordering by value.
    pub const fn cmp_value(&self, other: &Self) -> Ordering {
        let lhs_sign = self.num.signum();
        let rhs_sign = other.num.signum();
        if lhs_sign != rhs_sign || lhs_sign == 0 {
            return cmp_i128(lhs_sign as i128, rhs_sign as i128);
        }

        // Same sign: compare num_a·den_b·10^ea against num_b·den_a·10^eb.
        let mut lhs = self.num as i128 * other.den as i128;
        let mut rhs = other.num as i128 * self.den as i128;
        let shift = self.exp as i64 - other.exp as i64;
        let mut steps = shift.unsigned_abs();
        while steps > 0 {
            let grown = if shift >= 0 { lhs.checked_mul(10) } else { rhs.checked_mul(10) };
            match grown {
                Some(v) if shift >= 0 => lhs = v,
                Some(v) => rhs = v,
                // Out of range: the scaled side dominates in magnitude.
                None if (shift >= 0) == (lhs_sign > 0) => return Ordering::Greater,
                None => return Ordering::Less,
            }
            steps -= 1;
        }
        cmp_i128(lhs, rhs)
    }

    /// The smaller of two ratios by value; `self` on a tie.
    #[inline]
    pub const fn smaller(self, other: Self) -> Self {
        match self.cmp_value(&other) {
            Ordering::Greater => other,
            Ordering::Less | Ordering::Equal => self,
        }
    }

    /// Nearest `f64` value.
    pub fn to_f64(&self) -> f64 {
        let fraction = self.num as f64 / self.den as f64;
        if self.exp >= 0 {
            fraction * crate::cast::fpow10(self.exp)
        } else {
            fraction / crate::cast::fpow10(-self.exp)
        }
    }

    const fn normalize(mut num: i128, mut den: i128, mut exp: i32) -> Self {
        assert!(den != 0, "ratio denominator must not be zero");
        if num == 0 {
            return Self::ZERO;
        }
        if den < 0 {
            num = -num;
            den = -den;
        }

        let g = gcd(num.unsigned_abs(), den as u128) as i128;
        num /= g;
        den /= g;

        while num % 10 == 0 {
            num /= 10;
            exp += 1;
        }
        while den % 10 == 0 {
            den /= 10;
            exp -= 1;
        }
        loop {
            if den % 2 == 0 && fits_i64(num.saturating_mul(5)) {
                num *= 5;
                den /= 2;
            } else if den % 5 == 0 && fits_i64(num.saturating_mul(2)) {
                num *= 2;
                den /= 5;
            } else {
                break;
            }
            exp -= 1;
        }

        assert!(
            fits_i64(num) && fits_i64(den),
            "ratio does not fit in 64-bit terms"
        );
        Self {
            num: num as i64,
            den: den as i64,
            exp,
        }
    }
}

const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

const fn cmp_i128(a: i128, b: i128) -> Ordering {
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

const fn fits_i64(value: i128) -> bool {
    value >= i64::MIN as i128 && value <= i64::MAX as i128
}

impl Default for Ratio {
    fn default() -> Self {
        Self::ONE
    }
}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other)
    }
}

/// Formats as `num`, `num/den`, with a `×10^exp` suffix when the exponent is non-zero.
impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.num)?;
        if self.den != 1 {
            write!(f, "/{}", self.den)?;
        }
        if self.exp != 0 {
            write!(f, "×10^{}", self.exp)?;
        }
        Ok(())
    }
}
