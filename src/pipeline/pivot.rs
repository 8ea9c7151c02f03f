//! Long-to-wide reshaping of joined food-nutrient rows.
//!
//! The source file format does not promise a stable row order, so the wide
//! table is made deterministic here: output rows are sorted by
//! `(fdc_id, description)`, nutrient columns by name, and a duplicate
//! `(food, nutrient)` cell keeps the first occurrence in input row order
//! (which is fixed once the facts are loaded into a `Vec`).

use std::collections::{BTreeMap, BTreeSet};

use crate::model::LongRow;
use crate::table::{Schema, Table, Value};

/// The pivoted table plus a count of duplicate cells that were discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotOutcome {
    pub table: Table,
    /// Rows beyond the first for some `(fdc_id, nutrient)` pair. Diagnostic
    /// only; the first occurrence is already in the table.
    pub duplicate_cells: usize,
}

/// Pivot long-form rows into one row per `(fdc_id, description)` with one
/// column per distinct nutrient name observed in the input.
///
/// Only nutrients actually present in `rows` produce columns; aligning to the
/// full canonical schema is the normalizer's job. A food with no value for
/// some observed nutrient gets a null cell (unknown, not zero).
pub fn pivot(rows: &[LongRow]) -> PivotOutcome {
    let mut nutrient_names: BTreeSet<&str> = BTreeSet::new();
    for row in rows {
        nutrient_names.insert(row.nutrient.as_str());
    }

    // BTreeMap keys give the sorted output row order for free.
    let mut cells: BTreeMap<(i64, &str), BTreeMap<&str, Option<f64>>> = BTreeMap::new();
    let mut duplicate_cells = 0;
    for row in rows {
        let food = cells
            .entry((row.fdc_id, row.description.as_str()))
            .or_default();
        if food.contains_key(row.nutrient.as_str()) {
            duplicate_cells += 1;
        } else {
            food.insert(row.nutrient.as_str(), row.amount);
        }
    }

    let mut columns = vec!["fdc_id", "description"];
    columns.extend(nutrient_names.iter().copied());
    let schema = Schema::new(columns);

    let out_rows = cells
        .iter()
        .map(|(&(fdc_id, description), food)| {
            let mut row = Vec::with_capacity(schema.len());
            row.push(Value::Int(fdc_id));
            row.push(Value::Text(description.to_string()));
            for name in &nutrient_names {
                row.push(match food.get(name) {
                    Some(Some(amount)) => Value::Float(*amount),
                    _ => Value::Null,
                });
            }
            row
        })
        .collect();

    PivotOutcome {
        table: Table::new(schema, out_rows),
        duplicate_cells,
    }
}
