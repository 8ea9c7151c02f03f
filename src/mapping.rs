//! The tracked-nutrient table and its per-variant name mappings.
//!
//! USDA FoodData Central ships the same conceptual nutrients under slightly
//! different names depending on the distribution: the standard tables call
//! alpha-linolenic acid `18:3 n-3 c,c,c (ALA)` while the Foundation Foods
//! tables prefix it with `PUFA`, and only Foundation Foods reports EPA/DHA.
//! Rather than maintaining one dictionary per distribution, a single
//! declarative table lists every tracked nutrient once with its canonical name
//! and its per-variant source name; [`NutrientMapping::for_variant`] projects
//! the table onto one distribution.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which USDA distribution the source tables come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceVariant {
    /// The general Food/Nutrient/FoodNutrient tables.
    Standard,
    /// The "Foundation Foods" subset, with its own nutrient naming.
    Foundational,
}

/// One tracked nutrient: the canonical output column name plus the name each
/// source variant uses for it. `None` means the variant does not report it.
#[derive(Debug, Clone, Copy)]
pub struct NutrientDef {
    /// Canonical column name in the output schema.
    pub canonical: &'static str,
    standard: Option<&'static str>,
    foundational: Option<&'static str>,
}

impl NutrientDef {
    /// The name this nutrient carries in the given source variant, if any.
    pub fn source_name(&self, variant: SourceVariant) -> Option<&'static str> {
        match variant {
            SourceVariant::Standard => self.standard,
            SourceVariant::Foundational => self.foundational,
        }
    }
}

const fn shared(canonical: &'static str, source: &'static str) -> NutrientDef {
    NutrientDef {
        canonical,
        standard: Some(source),
        foundational: Some(source),
    }
}

const fn per_variant(
    canonical: &'static str,
    standard: &'static str,
    foundational: &'static str,
) -> NutrientDef {
    NutrientDef {
        canonical,
        standard: Some(standard),
        foundational: Some(foundational),
    }
}

const fn foundational_only(canonical: &'static str, source: &'static str) -> NutrientDef {
    NutrientDef {
        canonical,
        standard: None,
        foundational: Some(source),
    }
}

/// Every nutrient the output schema tracks, in canonical column order.
///
/// The order here is the order of the nutrient columns in the final table:
/// essential minerals, essential amino acids, essential fatty acids, vitamins,
/// then choline.
pub const TRACKED_NUTRIENTS: [NutrientDef; 36] = [
    // Essential minerals
    shared("Potassium", "Potassium, K"),
    shared("Sodium", "Sodium, Na"),
    shared("Calcium", "Calcium, Ca"),
    shared("Phosphorus", "Phosphorus, P"),
    shared("Magnesium", "Magnesium, Mg"),
    shared("Iron", "Iron, Fe"),
    shared("Zinc", "Zinc, Zn"),
    shared("Manganese", "Manganese, Mn"),
    shared("Copper", "Copper, Cu"),
    shared("Selenium", "Selenium, Se"),
    // Essential amino acids (USDA uses the plain names, so canonical and
    // source coincide)
    shared("Histidine", "Histidine"),
    shared("Isoleucine", "Isoleucine"),
    shared("Leucine", "Leucine"),
    shared("Lysine", "Lysine"),
    shared("Methionine", "Methionine"),
    shared("Phenylalanine", "Phenylalanine"),
    shared("Threonine", "Threonine"),
    shared("Tryptophan", "Tryptophan"),
    shared("Valine", "Valine"),
    // Essential fatty acids; only Foundation Foods reports EPA/DHA
    per_variant(
        "Alpha-Linolenic Acid",
        "18:3 n-3 c,c,c (ALA)",
        "PUFA 18:3 n-3 c,c,c (ALA)",
    ),
    per_variant("Linoleic Acid", "18:2 n-6 c,c", "PUFA 18:2 n-6 c,c"),
    foundational_only("EPA", "PUFA 20:5 n-3 (EPA)"),
    foundational_only("DHA", "PUFA 22:6 n-3 (DHA)"),
    // Vitamins
    shared("Vitamin A", "Vitamin A, RAE"),
    shared("Vitamin B1", "Thiamin"),
    shared("Vitamin B2", "Riboflavin"),
    shared("Vitamin B3", "Niacin"),
    shared("Vitamin B5", "Pantothenic acid"),
    shared("Vitamin B6", "Vitamin B-6"),
    shared("Vitamin B9", "Folate, total"),
    shared("Vitamin B12", "Vitamin B-12"),
    shared("Vitamin C", "Vitamin C, total ascorbic acid"),
    shared("Vitamin D", "Vitamin D (D2 + D3)"),
    shared("Vitamin E", "Vitamin E (alpha-tocopherol)"),
    shared("Vitamin K", "Vitamin K (phylloquinone)"),
    shared("Choline", "Choline, total"),
];

/// Canonical nutrient column names in output order.
pub fn canonical_columns() -> impl Iterator<Item = &'static str> {
    TRACKED_NUTRIENTS.iter().map(|def| def.canonical)
}

/// An immutable canonical-name → source-name mapping for one source variant.
///
/// Entries keep canonical order. Built once at pipeline start; never mutated.
#[derive(Debug, Clone)]
pub struct NutrientMapping {
    variant: SourceVariant,
    entries: Vec<(&'static str, &'static str)>,
}

impl NutrientMapping {
    /// Project [`TRACKED_NUTRIENTS`] onto one source variant, skipping
    /// nutrients that variant does not report.
    pub fn for_variant(variant: SourceVariant) -> Self {
        let entries = TRACKED_NUTRIENTS
            .iter()
            .filter_map(|def| def.source_name(variant).map(|src| (def.canonical, src)))
            .collect();
        Self { variant, entries }
    }

    /// The variant this mapping was built for.
    pub fn variant(&self) -> SourceVariant {
        self.variant
    }

    /// Number of mapped nutrients.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no nutrients are mapped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(canonical, source)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// The set of source names to look up in the Nutrient table.
    pub fn source_names(&self) -> HashSet<&'static str> {
        self.entries.iter().map(|&(_, src)| src).collect()
    }

    /// Source → canonical map, for renaming pivoted columns back to the
    /// canonical schema.
    ///
    /// Fails with [`Error::MappingCollision`] if two canonical names share a
    /// source name; silently overwriting would collapse two output columns
    /// into one.
    pub fn inverse(&self) -> Result<HashMap<&'static str, &'static str>> {
        let mut inverse = HashMap::with_capacity(self.entries.len());
        for &(canonical, source) in &self.entries {
            if let Some(prev) = inverse.insert(source, canonical) {
                return Err(Error::MappingCollision {
                    first: prev.to_string(),
                    second: canonical.to_string(),
                    source_name: source.to_string(),
                });
            }
        }
        Ok(inverse)
    }

    /// Mapped source names absent from `available` (the names actually present
    /// in a loaded Nutrient table), in canonical order.
    ///
    /// Diagnostic only: a missing name means that nutrient's column will be
    /// empty after reindexing, not that the run fails.
    pub fn missing_from(&self, available: &HashSet<&str>) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|&&(_, src)| !available.contains(src))
            .map(|&(_, src)| src)
            .collect()
    }
}
