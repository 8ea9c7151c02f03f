//! Fetch-pipeline orchestration: mapping → load → filter → join → pivot →
//! (normalize) → write.
//!
//! Single-threaded, whole-table-in-memory batch. Every stage produces a new
//! value; nothing is mutated across stages. Any error aborts the run with no
//! partial output retry.

pub mod filter;
pub mod join;
pub mod pivot;

use std::collections::HashSet;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::ingest;
use crate::mapping::{NutrientMapping, SourceVariant};
use crate::normalize;
use crate::observe::PipelineObserver;
use crate::table::Table;

/// Run the full fetch pipeline for one source variant and write the wide
/// nutrient table to the configured output path.
///
/// For [`SourceVariant::Foundational`] the pivoted table is additionally
/// renamed and reindexed onto the canonical column schema; the standard
/// variant's output keeps the source nutrient names (align it later with
/// [`normalize::normalize_file`]).
///
/// The returned [`Table`] is the same data that was written.
pub fn run_fetch_pipeline(
    config: &PipelineConfig,
    variant: SourceVariant,
    observer: &dyn PipelineObserver,
) -> Result<Table> {
    let mapping = NutrientMapping::for_variant(variant);
    // Fail on a non-invertible mapping before any file is touched.
    let renames = mapping.inverse()?;

    let foods = ingest::load_foods_from_path(config.food_path(variant))?;
    observer.on_table_loaded("food", foods.len());
    let nutrients = ingest::load_nutrients_from_path(config.nutrient_path(variant))?;
    observer.on_table_loaded("nutrient", nutrients.len());
    let facts = ingest::load_facts_from_path(config.food_nutrient_path(variant))?;
    observer.on_table_loaded("food_nutrient", facts.len());

    let available: HashSet<&str> = nutrients.iter().map(|n| n.name.as_str()).collect();
    let missing = mapping.missing_from(&available);
    if !missing.is_empty() {
        observer.on_missing_nutrients(&missing);
    }

    let kept_nutrients = filter::restrict_nutrients(&nutrients, &mapping.source_names());
    let kept_ids: HashSet<i64> = kept_nutrients.iter().map(|n| n.id).collect();
    let kept_facts = filter::restrict_facts(&facts, &kept_ids);

    let joined = join::attach(&kept_facts, &kept_nutrients, &foods);
    if joined.dropped_unknown_food > 0 || joined.dropped_unknown_nutrient > 0 {
        observer.on_facts_dropped(joined.dropped_unknown_food, joined.dropped_unknown_nutrient);
    }

    let pivoted = pivot::pivot(&joined.rows);
    if pivoted.duplicate_cells > 0 {
        observer.on_duplicate_cells(pivoted.duplicate_cells);
    }

    let table = match variant {
        SourceVariant::Foundational => normalize::normalize(pivoted.table, &renames),
        SourceVariant::Standard => pivoted.table,
    };

    table.write_csv_to_path(&config.output_path)?;
    observer.on_output_written(&config.output_path, table.row_count());
    Ok(table)
}
