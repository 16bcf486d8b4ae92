//! Compile-time checked physical quantities with exact unit conversion.
//!
//! `qdim` is the user-facing crate in this workspace. It re-exports the full API from `qdim-core` plus the
//! predefined units (lengths, masses, times, volumes, speeds, energies, …) at the crate root.
//!
//! A value is always a `Quantity<U, R>`: `U` is a zero-sized unit type that carries its dimension and an exact scale
//! [`Ratio`] relative to the coherent unit, and `R` is the numeric representation (`f64` unless stated otherwise).
//! Dimension and unit bookkeeping happens entirely at compile time; at run time a quantity is just its count.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to seconds).
//! - Converts between units of one dimension exactly, using rational scale factors rather than floating-point ones.
//! - Refuses implicit conversions that could truncate, such as `f64 → i32` or `m → km` on integers; the explicit
//!   cast engine ([`quantity_cast`], [`Quantity::cast`]) performs them on request.
//! - Multiplies and divides quantities of any dimensions, naming the result through a registry of known units.
//! - Adds, subtracts and compares quantities of equivalent dimensions however their units were built, so `m · m`
//!   compares with `m²` and `m/s · h` adds to `m`.
//!
//! # What this crate does not try to solve
//!
//! - Affine quantities (temperatures in °C, positions relative to an origin).
//! - Overflow protection: integer counts overflow and divide by zero exactly as the representation does, and an
//!   implicit rescale that does not fit panics in debug builds.
//! - Parsing quantities from text.
//!
//! # Quick start
//!
//! ```rust
//! use qdim::{Kilometres, Metre, Metres};
//!
//! let d = Kilometres::new(1.5_f64) + Metres::new(250.0_f64);
//! assert_eq!(d.to::<Metre>().count(), 1750.0);
//! assert_eq!(d.to_string(), "1750 m");
//! ```
//!
//! Integer quantities compare and combine across units without leaving the integers:
//!
//! ```rust
//! use qdim::{Hours, Kilometres, Metres, MetresPerSecond};
//!
//! assert!(Metres::<i32>::new(1000) == Kilometres::<i32>::new(1));
//! assert_eq!((Metres::<i32>::new(7) % Metres::<i32>::new(2)).count(), 1);
//!
//! let d = MetresPerSecond::<i32>::new(10) * Hours::<i32>::new(2);
//! assert_eq!(d.count(), 20);
//! assert_eq!(d.to_string(), "20 [36×10^2] m");
//! ```
//!
//! # Incorrect usage (type errors)
//!
//! Adding quantities of different dimensions:
//!
//! ```compile_fail
//! use qdim::{Metres, Seconds};
//!
//! let _ = Metres::new(1.0_f64) + Seconds::new(1.0_f64);
//! ```
//!
//! Narrowing a floating-point quantity into an integer one without a cast:
//!
//! ```compile_fail
//! use qdim::Metres;
//!
//! let _l: Metres<i32> = Metres::<f64>::new(1.5).into_rep();
//! ```
//!
//! Taking the remainder of floating-point quantities:
//!
//! ```compile_fail
//! use qdim::Metres;
//!
//! let _ = Metres::new(7.0_f64) % Metres::new(2.0_f64);
//! ```
//!
//! Comparing a dimensioned quantity with a bare number:
//!
//! ```compile_fail
//! use qdim::Metres;
//!
//! let _ = Metres::new(5.0_f64) == 5.0;
//! ```
//!
//! # Incorrect usage (rejected when instantiated)
//!
//! Checks that depend on unit ratios are constants evaluated when the operation is instantiated, so `cargo build`
//! reports them and `cargo check` may not.
//!
//! Converting an integral count to a coarser unit:
//!
//! ```compile_fail
//! use qdim::{Kilometre, Metres};
//!
//! let _ = Metres::<i32>::new(1).to::<Kilometre>();
//! ```
//!
//! Adding a bare number to a dimensionless quantity that is not in the unit `one`:
//!
//! ```compile_fail
//! use qdim::Percentages;
//!
//! let _ = Percentages::<f64>::new(1.0) + 1.0_f64;
//! ```
//!
//! Relabelling a quantity as a unit with another dimension or ratio:
//!
//! ```compile_fail
//! use qdim::{Metre, Metres};
//!
//! let _ = (Metres::<f64>::new(1.0) * Metres::<f64>::new(1.0)).downcast::<Metre>();
//! ```
//!
//! Accumulating a finer unit into an integral count of a coarser one:
//!
//! ```compile_fail
//! use qdim::{Kilometres, Metres};
//!
//! let mut d = Kilometres::<i32>::new(1);
//! d += Metres::<i32>::new(1);
//! ```
//!
//! Adding integral counts whose units are not whole multiples of each other:
//!
//! ```compile_fail
//! use qdim::{Feet, Metres};
//!
//! let _ = Feet::<i32>::new(1) + Metres::<i32>::new(1);
//! ```
//!
//! Comparing quantities of different dimensions:
//!
//! ```compile_fail
//! use qdim::{Metres, Seconds};
//!
//! let _ = Metres::<f64>::new(1.0) == Seconds::<f64>::new(1.0);
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the crate root for convenience):
//!
//! - `qdim::length`, `qdim::mass`, `qdim::time`, `qdim::current`, `qdim::temperature`, `qdim::amount`,
//!   `qdim::luminous_intensity` (the SI base dimensions)
//! - `qdim::area`, `qdim::volume`, `qdim::speed`, `qdim::frequency`, `qdim::force`, `qdim::energy`, `qdim::power`
//! - `qdim::dimensionless` (`one` and percent)
//! - `qdim::registry` (runtime names for the units and dimensions above)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `qdim-core`, including the hashed registry index.
//! - `serde`: serializes a `Quantity` as its raw count; with `std`, `serde_with_unit` also records the unit symbol.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! qdim = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its core operations. Every dimension
//! or truncation mistake is rejected at compile time. What remains at run time is the representation's own
//! behaviour: integer overflow and division by zero panic or wrap as they would on the bare integer, and floating-point
//! counts follow IEEE-754. Rescaling a count into the finer unit of a sum, comparison or conversion is checked the same
//! way: with debug assertions it panics with `attempt to rescale with overflow`, otherwise it wraps. Only the explicit
//! casts (`cast_to`, `cast_rep`, `quantity_cast`) convert with `as` semantics.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use qdim_core::*;

/// Derive macro used by `qdim-core` to define unit marker types.
///
/// This macro expands in terms of `crate::Unit` and `crate::Ratio`, so it is intended for use inside `qdim-core`
/// (or crates exposing the same crate-root API). Most users should not need this.
pub use qdim_derive::Unit;

pub use qdim_core::units::amount;
pub use qdim_core::units::area;
pub use qdim_core::units::current;
pub use qdim_core::units::dimensionless;
pub use qdim_core::units::energy;
pub use qdim_core::units::force;
pub use qdim_core::units::frequency;
pub use qdim_core::units::length;
pub use qdim_core::units::luminous_intensity;
pub use qdim_core::units::mass;
pub use qdim_core::units::power;
pub use qdim_core::units::speed;
pub use qdim_core::units::temperature;
pub use qdim_core::units::time;
pub use qdim_core::units::volume;

pub use qdim_core::units::amount::*;
pub use qdim_core::units::area::*;
pub use qdim_core::units::current::*;
pub use qdim_core::units::dimensionless::*;
pub use qdim_core::units::energy::*;
pub use qdim_core::units::force::*;
pub use qdim_core::units::frequency::*;
pub use qdim_core::units::length::*;
pub use qdim_core::units::luminous_intensity::*;
pub use qdim_core::units::mass::*;
pub use qdim_core::units::power::*;
pub use qdim_core::units::speed::*;
pub use qdim_core::units::temperature::*;
pub use qdim_core::units::time::*;
pub use qdim_core::units::volume::*;
