//! Downcast registry: names for structurally computed units.
//!
//! Multiplying or dividing quantities produces structural units such as `Prod<Metre, Metre>` or
//! `Per<Kilometre, Hour>`. Those have no symbol of their own; the registry maps their structural key (dimension
//! exponents plus exact ratio) back to a declared unit (`m²`, `km/h`) when one exists.
//!
//! The tables are generated at build time from `units.csv` and are immutable. With the `std` feature they are indexed
//! into hash maps on first use; without it, lookups scan the tables linearly. Both are safe to use from any thread.
//!
//! When two declared units share a structural key (`mL` and `cm³`), the one listed first in the data table wins.
//!
//! ```rust
//! use qdim_core::registry::{downcast_unit, Downcast};
//! use qdim_core::length::Kilometre;
//! use qdim_core::time::Hour;
//! use qdim_core::Per;
//!
//! match downcast_unit::<Per<Kilometre, Hour>>() {
//!     Downcast::Named(entry) => assert_eq!(entry.symbol, "km/h"),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

use crate::dimension::{Dimension, Exponents};
use crate::ratio::Ratio;
use crate::unit::Unit;
use core::any::TypeId;
use core::fmt;

/// A declared unit, as stored in the registry.
#[derive(Clone, Copy, Debug)]
pub struct UnitEntry {
    /// Unit name, e.g. `"kilometre"`.
    pub name: &'static str,
    /// Unit symbol, e.g. `"km"`.
    pub symbol: &'static str,
    /// Dimension exponents.
    pub dimension: Exponents,
    /// Ratio to the coherent unit of the dimension.
    pub ratio: Ratio,
    type_id: fn() -> TypeId,
}

impl UnitEntry {
    /// Builds the entry describing `U`.
    pub const fn of<U: Unit>() -> Self {
        Self {
            name: U::NAME,
            symbol: U::SYMBOL,
            dimension: <U::Dim as Dimension>::EXPONENTS,
            ratio: U::RATIO,
            type_id: TypeId::of::<U>,
        }
    }

    /// `TypeId` of the declared unit type.
    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    /// `true` when this entry was built from `U`.
    pub fn is<U: Unit>(&self) -> bool {
        self.type_id() == TypeId::of::<U>()
    }
}

/// A declared dimension, as stored in the registry.
#[derive(Clone, Copy, Debug)]
pub struct DimensionEntry {
    /// Dimension name, e.g. `"speed"`.
    pub name: &'static str,
    /// Dimension exponents.
    pub exponents: Exponents,
    type_id: fn() -> TypeId,
}

impl DimensionEntry {
    /// Builds the entry describing `D`.
    pub const fn of<D: Dimension>() -> Self {
        Self {
            name: D::NAME,
            exponents: D::EXPONENTS,
            type_id: TypeId::of::<D>,
        }
    }

    /// `TypeId` of the declared dimension marker.
    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    /// `true` when this entry was built from `D`.
    pub fn is<D: Dimension>(&self) -> bool {
        self.type_id() == TypeId::of::<D>()
    }
}

/// Result of resolving a structural unit.
#[derive(Clone, Copy, Debug)]
pub enum Downcast {
    /// A declared unit with the same dimension and ratio.
    Named(&'static UnitEntry),
    /// No declared unit matches, but the dimension is declared: a scaled coherent unit of it.
    Scaled {
        /// The declared dimension.
        dimension: &'static DimensionEntry,
        /// Ratio to the dimension's coherent unit.
        ratio: Ratio,
    },
    /// Neither unit nor dimension is declared.
    Unknown {
        /// Dimension exponents.
        exponents: Exponents,
        /// Ratio to the coherent unit.
        ratio: Ratio,
    },
}

impl Downcast {
    /// The matched unit entry, if any.
    pub fn entry(&self) -> Option<&'static UnitEntry> {
        match self {
            Downcast::Named(entry) => Some(entry),
            _ => None,
        }
    }

    /// Symbol of the matched unit, if any.
    pub fn symbol(&self) -> Option<&'static str> {
        self.entry().map(|entry| entry.symbol)
    }

    /// Dimension exponents of the resolved unit.
    pub fn exponents(&self) -> Exponents {
        match self {
            Downcast::Named(entry) => entry.dimension,
            Downcast::Scaled { dimension, .. } => dimension.exponents,
            Downcast::Unknown { exponents, .. } => *exponents,
        }
    }

    /// Ratio of the resolved unit to the coherent unit.
    pub fn ratio(&self) -> Ratio {
        match self {
            Downcast::Named(entry) => entry.ratio,
            Downcast::Scaled { ratio, .. } | Downcast::Unknown { ratio, .. } => *ratio,
        }
    }

    /// `true` when a declared unit matched.
    pub fn is_named(&self) -> bool {
        matches!(self, Downcast::Named(_))
    }
}

/// Labels the resolved unit: the symbol when named, otherwise `[ratio] coherent`, where `coherent` is the symbol of
/// the dimension's coherent unit (or its SI composition such as `m·s`). A ratio of one omits the bracket.
impl fmt::Display for Downcast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Downcast::Named(entry) = self {
            return f.write_str(entry.symbol);
        }
        let ratio = self.ratio();
        let exponents = self.exponents();
        if !ratio.is_one() {
            write!(f, "[{}]", ratio)?;
        }
        match lookup_unit(exponents, Ratio::ONE) {
            Some(coherent) if coherent.symbol.is_empty() => Ok(()),
            Some(coherent) => {
                if !ratio.is_one() {
                    f.write_str(" ")?;
                }
                f.write_str(coherent.symbol)
            }
            None => {
                if !ratio.is_one() {
                    f.write_str(" ")?;
                }
                write!(f, "{}", exponents.coherent_symbol())
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tables and lookups
// ─────────────────────────────────────────────────────────────────────────────

/// All declared units, in data-table order.
pub fn units() -> impl Iterator<Item = &'static UnitEntry> {
    crate::units::UNIT_TABLES.iter().flat_map(|table| table.iter())
}

/// All declared dimensions.
pub fn dimensions() -> impl Iterator<Item = &'static DimensionEntry> {
    crate::units::DIMENSIONS.iter()
}

#[cfg(feature = "std")]
mod index {
    use super::{dimensions, units, DimensionEntry, UnitEntry};
    use crate::dimension::Exponents;
    use crate::ratio::Ratio;
    use once_cell::sync::Lazy;
    use std::collections::hash_map::Entry;
    use std::collections::HashMap;

    pub(super) static UNITS: Lazy<HashMap<(Exponents, Ratio), &'static UnitEntry>> = Lazy::new(|| {
        let mut map = HashMap::new();
        for unit in units() {
            match map.entry((unit.dimension, unit.ratio)) {
                Entry::Occupied(existing) => {
                    let kept: &&UnitEntry = existing.get();
                    log::trace!("unit '{}' has the same structure as '{}'; keeping '{}'", unit.name, kept.name, kept.name);
                }
                Entry::Vacant(slot) => {
                    slot.insert(unit);
                }
            }
        }
        log::debug!("unit registry indexed {} structural units", map.len());
        map
    });

    pub(super) static DIMENSIONS: Lazy<HashMap<Exponents, &'static DimensionEntry>> = Lazy::new(|| {
        let mut map = HashMap::new();
        for dimension in dimensions() {
            map.entry(dimension.exponents).or_insert(dimension);
        }
        log::debug!("unit registry indexed {} dimensions", map.len());
        map
    });
}

/// The declared unit with the given structural key.
pub fn lookup_unit(exponents: Exponents, ratio: Ratio) -> Option<&'static UnitEntry> {
    #[cfg(feature = "std")]
    {
        index::UNITS.get(&(exponents, ratio)).copied()
    }
    #[cfg(not(feature = "std"))]
    {
        units().find(|unit| unit.dimension.equivalent(&exponents) && unit.ratio.same(&ratio))
    }
}

/// The declared dimension with the given exponents.
pub fn lookup_dimension(exponents: Exponents) -> Option<&'static DimensionEntry> {
    #[cfg(feature = "std")]
    {
        index::DIMENSIONS.get(&exponents).copied()
    }
    #[cfg(not(feature = "std"))]
    {
        dimensions().find(|dimension| dimension.exponents.equivalent(&exponents))
    }
}

/// The declared unit with the given symbol.
pub fn find_symbol(symbol: &str) -> Option<&'static UnitEntry> {
    units().find(|unit| unit.symbol == symbol)
}

/// Resolves a structural key to a declared unit, a scaled coherent unit of a declared dimension, or neither.
pub fn downcast(exponents: Exponents, ratio: Ratio) -> Downcast {
    if let Some(entry) = lookup_unit(exponents, ratio) {
        return Downcast::Named(entry);
    }
    match lookup_dimension(exponents) {
        Some(dimension) => Downcast::Scaled { dimension, ratio },
        None => Downcast::Unknown { exponents, ratio },
    }
}

/// Resolves the unit `U`.
pub fn downcast_unit<U: Unit>() -> Downcast {
    downcast(<U::Dim as Dimension>::EXPONENTS, U::RATIO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::BaseDimension;
    use crate::units::{area, dimensionless, energy, force, length, speed, time, volume};
    use crate::{Per, Pow, Prod};

    #[test]
    fn products_resolve_to_named_units() {
        let square = downcast_unit::<Prod<length::Metre, length::Metre>>();
        assert!(square.entry().is_some_and(|e| e.is::<area::SquareMetre>()));
        assert_eq!(square.symbol(), Some("m²"));

        let joule = downcast_unit::<Prod<force::Newton, length::Metre>>();
        assert!(joule.entry().is_some_and(|e| e.is::<energy::Joule>()));

        let cube = downcast_unit::<Pow<length::Decimetre, 3>>();
        assert_eq!(cube.symbol(), Some("L"));
    }

    #[test]
    fn quotients_resolve_to_named_units() {
        let kmh = downcast_unit::<Per<length::Kilometre, time::Hour>>();
        assert!(kmh.entry().is_some_and(|e| e.is::<speed::KilometrePerHour>()));

        let ratio = downcast_unit::<Per<length::Metre, length::Metre>>();
        assert!(ratio.entry().is_some_and(|e| e.is::<dimensionless::One>()));
    }

    #[test]
    fn first_registration_wins() {
        let millilitre = downcast_unit::<Pow<length::Centimetre, 3>>();
        assert!(millilitre.entry().is_some_and(|e| e.is::<volume::CubicCentimetre>()));
    }

    #[test]
    fn scaled_coherent_unit_of_declared_dimension() {
        let per_minute = downcast_unit::<Per<dimensionless::One, time::Minute>>();
        match per_minute {
            Downcast::Scaled { dimension, ratio } => {
                assert_eq!(dimension.name, "frequency");
                assert_eq!(ratio, Ratio::new(1, 60));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(per_minute.to_string(), "[5/3×10^-2] Hz");
    }

    #[test]
    fn unknown_dimension_keeps_structure() {
        let resolved = downcast_unit::<Prod<length::Metre, time::Minute>>();
        match resolved {
            Downcast::Unknown { exponents, ratio } => {
                assert_eq!(exponents.exponent(BaseDimension::Length), 1);
                assert_eq!(exponents.exponent(BaseDimension::Time), 1);
                assert_eq!(ratio, Ratio::integer(60));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(resolved.to_string(), "[6×10^1] m·s");
        assert_eq!(downcast_unit::<Prod<length::Metre, time::Second>>().to_string(), "m·s");
    }

    #[test]
    fn symbol_lookup() {
        let km = find_symbol("km").map(|e| e.name);
        assert_eq!(km, Some("kilometre"));
        assert!(find_symbol("furlong").is_none());
    }

    #[test]
    fn every_unit_belongs_to_a_declared_dimension() {
        for unit in units() {
            assert!(
                lookup_dimension(unit.dimension).is_some(),
                "{} has no declared dimension",
                unit.name
            );
        }
    }

    #[test]
    fn dimensions_are_distinct() {
        let all: std::vec::Vec<_> = dimensions().collect();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert!(!a.exponents.equivalent(&b.exponents), "{} and {} collide", a.name, b.name);
            }
        }
    }
}
