//! Core type system for compile-time dimensional analysis.
//!
//! `qdim-core` provides a zero-cost units model with exact unit ratios:
//!
//! - A *dimension* is a marker type implementing [`Dimension`], identified by its vector of base exponents
//!   ([`Exponents`]).
//! - A *unit* is a zero-sized marker type implementing [`Unit`]: a dimension plus an exact [`Ratio`] to the
//!   dimension's coherent unit.
//! - A value tagged with a unit is a [`Quantity<U, R>`], backed by any primitive number `R` (`f64` by default).
//! - Units combine structurally: `*` yields [`Prod`], `/` yields [`Per`], [`Quantity::pow`] yields [`Pow`], and the
//!   [`registry`] names the result (`m · m` is `m²`, `km / h` is `km/h`).
//!
//! Most users should depend on `qdim` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions: adding a length to a time does not compile.
//! - Exact conversions: ratios are rational numbers with a power of ten, so `km/h → m/s` is exactly `5/18`.
//! - Integer-safe conversions: implicit conversions that would truncate an integral count do not compile; explicit
//!   casts ([`Quantity::cast`], [`quantity_cast`]) truncate on purpose.
//! - Zero runtime overhead for unit tags (phantom types only).
//!
//! # What this crate does not try to solve
//!
//! - Affine quantities (points with an origin, such as temperatures in degrees Celsius).
//! - Runtime parsing of unit strings.
//! - Overflow detection: representation overflow behaves like the underlying primitive, implicit rescaling included.
//!
//! # Quick start
//!
//! Convert between predefined units:
//!
//! ```rust
//! use qdim_core::length::{Kilometres, Metre};
//!
//! let km = Kilometres::<f64>::new(1.25);
//! let m = km.to::<Metre>();
//! assert!((m.count() - 1250.0).abs() < 1e-12);
//! ```
//!
//! Compose derived units using `/`:
//!
//! ```rust
//! use qdim_core::length::Metres;
//! use qdim_core::speed::MetrePerSecond;
//! use qdim_core::time::Seconds;
//!
//! let d = Metres::<f64>::new(100.0);
//! let t = Seconds::<f64>::new(20.0);
//! let v = (d / t).downcast::<MetrePerSecond>();
//! assert!((v.count() - 5.0).abs() < 1e-12);
//! ```
//!
//! Mixing dimensions is rejected at compile time:
//!
//! ```compile_fail
//! use qdim_core::length::Metres;
//! use qdim_core::time::Seconds;
//!
//! let nonsense = Metres::new(1.0_f64) + Seconds::new(1.0_f64);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `qdim-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! qdim-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point powers of ten come from `libm` and registry lookups scan the unit tables
//! instead of indexing them.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support and the hash-indexed registry.
//! - `serde`: enables `serde` support for `Quantity<U, R>`; serialization is the raw count only. With `std` also
//!   enabled, [`serde_with_unit`] keeps the unit label alongside.
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its core operations. Misuse is a
//! compile error: trait bounds reject mismatched dimensions and truncating representations, and constant evaluation
//! rejects conversions whose ratio would truncate an integral count. At run time, arithmetic follows the
//! representation (integer overflow and division by zero behave as they do for the primitive, IEEE-754 rules apply
//! to floats). Implicit rescaling of integral counts panics on overflow when debug assertions are on.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod cast;
mod dimension;
mod macros;
mod quantity;
mod ratio;
mod representation;
mod unit;

pub mod registry;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use cast::{quantity_cast, QuantityType};
pub use dimension::{
    BaseDimension, BaseExponent, CoherentSymbol, CustomBase, Dimension, Dimensionless, DivDim, Exponents, MulDim, PowDim,
    BASE_DIMENSIONS, CUSTOM_BASES,
};
pub use quantity::Quantity;
pub use ratio::Ratio;
pub use registry::{DimensionEntry, Downcast, UnitEntry};
pub use representation::{Integral, Promote, Promoted, Representation, Widen};
pub use unit::{belongs_to, same_unit, Coherent, Combine, Combined, Finer, Per, Pow, Prod, Scaled, Unit};

#[doc(hidden)]
pub use quantity::__private;

#[cfg(all(feature = "serde", feature = "std"))]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
///
/// These are defined in `qdim-core` so they can implement cross-unit operators without running into Rust's orphan
/// rules.
pub mod units;

pub use units::amount;
pub use units::area;
pub use units::current;
pub use units::dimensionless;
pub use units::energy;
pub use units::force;
pub use units::frequency;
pub use units::length;
pub use units::luminous_intensity;
pub use units::mass;
pub use units::power;
pub use units::speed;
pub use units::temperature;
pub use units::time;
pub use units::volume;

pub use units::dimensionless::One;
