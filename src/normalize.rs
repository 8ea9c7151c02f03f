//! Renaming and reindexing wide tables onto the canonical column schema.
//!
//! Two callers: the tail of the Foundation Foods fetch pipeline, and the
//! standalone [`normalize_file`] pass for already-pivoted files produced with
//! source nutrient names. Both produce the same stable schema
//! (`fdc_id`, `description`, then every tracked nutrient in canonical order),
//! so outputs from different source variants line up column for column.

use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;
use crate::ingest::read_wide_table_from_path;
use crate::mapping::{canonical_columns, NutrientMapping, SourceVariant};
use crate::table::{Schema, Table, Value};

/// Rename columns through `renames` (source name → canonical name). Columns
/// not in the map keep their name, so already-canonical input passes through.
pub fn rename_columns(table: Table, renames: &HashMap<&str, &str>) -> Table {
    let schema = Schema::new(
        table
            .schema
            .columns()
            .map(|c| renames.get(c).copied().unwrap_or(c).to_string()),
    );
    Table::new(schema, table.rows)
}

/// Reindex to the canonical schema: `fdc_id`, `description`, then every
/// tracked nutrient in canonical order. Canonical columns missing from the
/// input are created null-filled; columns outside the schema are dropped.
pub fn reindex_canonical(table: Table) -> Table {
    let mut columns = vec!["fdc_id", "description"];
    columns.extend(canonical_columns());
    let schema = Schema::new(columns.iter().copied());

    // Target position -> source position, None for created columns.
    let source_idx: Vec<Option<usize>> = columns
        .iter()
        .map(|&name| table.schema.index_of(name))
        .collect();

    let rows = table
        .rows
        .iter()
        .map(|row| {
            source_idx
                .iter()
                .map(|idx| match idx {
                    Some(i) => row[*i].clone(),
                    None => Value::Null,
                })
                .collect()
        })
        .collect();

    Table::new(schema, rows)
}

/// Rename then reindex. Idempotent: a second pass over the output changes
/// nothing.
pub fn normalize(table: Table, renames: &HashMap<&str, &str>) -> Table {
    reindex_canonical(rename_columns(table, renames))
}

/// Standalone normalization pass: read an already-pivoted CSV whose columns
/// use `variant` source names, align it to the canonical schema, and write it
/// to `output`.
pub fn normalize_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    variant: SourceVariant,
) -> Result<Table> {
    let mapping = NutrientMapping::for_variant(variant);
    let renames = mapping.inverse()?;
    let table = normalize(read_wide_table_from_path(input)?, &renames);
    table.write_csv_to_path(output)?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide(columns: &[&str], row: Vec<Value>) -> Table {
        Table::new(Schema::new(columns.iter().copied()), vec![row])
    }

    #[test]
    fn rename_maps_source_names_and_passes_others_through() {
        let renames: HashMap<&str, &str> =
            [("Thiamin", "Vitamin B1")].into_iter().collect();
        let t = wide(
            &["fdc_id", "Thiamin"],
            vec![Value::Int(1), Value::Float(0.017)],
        );
        let out = rename_columns(t, &renames);
        let columns: Vec<&str> = out.schema.columns().collect();
        assert_eq!(columns, vec!["fdc_id", "Vitamin B1"]);
    }

    #[test]
    fn reindex_creates_missing_columns_null_filled_and_drops_extras() {
        let t = wide(
            &["fdc_id", "description", "Vitamin B1", "Energy"],
            vec![
                Value::Int(1),
                Value::Text("Apple".to_string()),
                Value::Float(0.017),
                Value::Float(52.0),
            ],
        );
        let out = reindex_canonical(t);

        assert_eq!(out.schema.len(), 2 + 36);
        assert_eq!(out.schema.index_of("Energy"), None);
        assert_eq!(out.cell(0, "Vitamin B1"), Some(&Value::Float(0.017)));
        assert_eq!(out.cell(0, "Potassium"), Some(&Value::Null));
        assert_eq!(out.cell(0, "fdc_id"), Some(&Value::Int(1)));
    }

    #[test]
    fn canonical_order_is_stable_across_variants() {
        let standard = NutrientMapping::for_variant(SourceVariant::Standard);
        let t = wide(
            &["fdc_id", "description", "Potassium, K"],
            vec![
                Value::Int(1),
                Value::Text("Apple".to_string()),
                Value::Float(150.0),
            ],
        );
        let out = normalize(t, &standard.inverse().unwrap());

        let columns: Vec<&str> = out.schema.columns().collect();
        assert_eq!(&columns[..3], &["fdc_id", "description", "Potassium"]);
        assert_eq!(*columns.last().unwrap(), "Choline");
        // EPA/DHA exist (empty) even though the standard variant never
        // reports them.
        assert_eq!(out.cell(0, "EPA"), Some(&Value::Null));
        assert_eq!(out.cell(0, "DHA"), Some(&Value::Null));
    }

    #[test]
    fn normalize_is_idempotent() {
        let foundational = NutrientMapping::for_variant(SourceVariant::Foundational);
        let renames = foundational.inverse().unwrap();
        let t = wide(
            &["fdc_id", "description", "PUFA 20:5 n-3 (EPA)"],
            vec![
                Value::Int(1),
                Value::Text("Salmon".to_string()),
                Value::Float(0.8),
            ],
        );
        let once = normalize(t, &renames);
        let twice = normalize(once.clone(), &renames);
        assert_eq!(once, twice);
    }
}
