//! Predefined unit modules grouped by dimension.
//!
//! `qdim-core` ships a set of built-in units so that conversions, cross-unit arithmetic and registry lookups work
//! out of the box without downstream crates having to fight Rust's orphan rules.
//!
//! The unit types themselves are generated at build time from `units.csv`; each module declares its dimension and
//! includes the generated code.
//!
//! ## Modules
//!
//! - Base dimensions: [`length`], [`mass`], [`time`], [`current`], [`temperature`], [`amount`],
//!   [`luminous_intensity`].
//! - Derived dimensions: [`area`], [`volume`], [`speed`], [`frequency`], [`force`], [`energy`], [`power`].
//! - [`dimensionless`]: the unit `one` and percent.

use crate::{DimensionEntry, UnitEntry};

pub mod amount;
pub mod area;
pub mod current;
pub mod dimensionless;
pub mod energy;
pub mod force;
pub mod frequency;
pub mod length;
pub mod luminous_intensity;
pub mod mass;
pub mod power;
pub mod speed;
pub mod temperature;
pub mod time;
pub mod volume;

/// Every declared dimension, in registry order.
pub(crate) const DIMENSIONS: &[DimensionEntry] = &[
    length::DIMENSION,
    mass::DIMENSION,
    time::DIMENSION,
    current::DIMENSION,
    temperature::DIMENSION,
    amount::DIMENSION,
    luminous_intensity::DIMENSION,
    area::DIMENSION,
    volume::DIMENSION,
    speed::DIMENSION,
    frequency::DIMENSION,
    force::DIMENSION,
    energy::DIMENSION,
    power::DIMENSION,
    dimensionless::DIMENSION,
];

/// Every declared unit table, in registry order.
pub(crate) const UNIT_TABLES: &[&[UnitEntry]] = &[
    length::UNITS,
    mass::UNITS,
    time::UNITS,
    current::UNITS,
    temperature::UNITS,
    amount::UNITS,
    luminous_intensity::UNITS,
    area::UNITS,
    volume::UNITS,
    speed::UNITS,
    frequency::UNITS,
    force::UNITS,
    energy::UNITS,
    power::UNITS,
    dimensionless::UNITS,
];
