//! CSV ingestion for the three source tables and for already-pivoted files.
//!
//! Rules shared by all loaders:
//!
//! - Input must have a header row.
//! - Required columns are located by name, so column order can differ and
//!   extra source columns are ignored.
//! - Identifier columns must parse as integers; a malformed id is a fatal
//!   [`Error::ParseError`] naming the row and column.
//! - Amount cells that are empty or unparseable load as `None` so a long
//!   batch run is not aborted by one bad measurement.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{Food, FoodNutrientFact, Nutrient};
use crate::table::{Schema, Table, Value};

fn open_csv(path: impl AsRef<Path>) -> Result<csv::Reader<File>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(csv::ReaderBuilder::new().has_headers(true).from_reader(file))
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| Error::SchemaMismatch {
            message: format!(
                "missing required column '{name}'. headers={:?}",
                headers.iter().collect::<Vec<_>>()
            ),
        })
}

fn parse_id(row: usize, column: &str, raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|e| Error::ParseError {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message: e.to_string(),
    })
}

/// Lenient amount parsing: empty or malformed numeric text is missing data.
fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Load the Food table (`fdc_id`, `description`) from a CSV file.
pub fn load_foods_from_path(path: impl AsRef<Path>) -> Result<Vec<Food>> {
    load_foods(&mut open_csv(path)?)
}

/// Load the Food table from an existing CSV reader.
pub fn load_foods<R: Read>(rdr: &mut csv::Reader<R>) -> Result<Vec<Food>> {
    let headers = rdr.headers()?.clone();
    let id_idx = column_index(&headers, "fdc_id")?;
    let desc_idx = column_index(&headers, "description")?;

    let mut foods = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // 1-based row number for users; +1 again because the header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;
        foods.push(Food {
            fdc_id: parse_id(user_row, "fdc_id", record.get(id_idx).unwrap_or(""))?,
            description: record.get(desc_idx).unwrap_or("").trim().to_owned(),
        });
    }
    Ok(foods)
}

/// Load the Nutrient table (`id`, `name`) from a CSV file.
pub fn load_nutrients_from_path(path: impl AsRef<Path>) -> Result<Vec<Nutrient>> {
    load_nutrients(&mut open_csv(path)?)
}

/// Load the Nutrient table from an existing CSV reader.
pub fn load_nutrients<R: Read>(rdr: &mut csv::Reader<R>) -> Result<Vec<Nutrient>> {
    let headers = rdr.headers()?.clone();
    let id_idx = column_index(&headers, "id")?;
    let name_idx = column_index(&headers, "name")?;

    let mut nutrients = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        let user_row = row_idx0 + 2;
        let record = result?;
        nutrients.push(Nutrient {
            id: parse_id(user_row, "id", record.get(id_idx).unwrap_or(""))?,
            name: record.get(name_idx).unwrap_or("").trim().to_owned(),
        });
    }
    Ok(nutrients)
}

/// Load the FoodNutrient table (`fdc_id`, `nutrient_id`, `amount`) from a CSV
/// file. Rows keep file order; the pivot's duplicate policy depends on it.
pub fn load_facts_from_path(path: impl AsRef<Path>) -> Result<Vec<FoodNutrientFact>> {
    load_facts(&mut open_csv(path)?)
}

/// Load the FoodNutrient table from an existing CSV reader.
pub fn load_facts<R: Read>(rdr: &mut csv::Reader<R>) -> Result<Vec<FoodNutrientFact>> {
    let headers = rdr.headers()?.clone();
    let food_idx = column_index(&headers, "fdc_id")?;
    let nutrient_idx = column_index(&headers, "nutrient_id")?;
    let amount_idx = column_index(&headers, "amount")?;

    let mut facts = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        let user_row = row_idx0 + 2;
        let record = result?;
        facts.push(FoodNutrientFact {
            fdc_id: parse_id(user_row, "fdc_id", record.get(food_idx).unwrap_or(""))?,
            nutrient_id: parse_id(
                user_row,
                "nutrient_id",
                record.get(nutrient_idx).unwrap_or(""),
            )?,
            amount: parse_amount(record.get(amount_idx).unwrap_or("")),
        });
    }
    Ok(facts)
}

/// Read an already-pivoted wide CSV into a [`Table`] with a dynamic schema.
///
/// Cells are kept as raw text (empty → [`Value::Null`]) so numeric formatting
/// survives a rename/reorder pass byte for byte.
pub fn read_wide_table_from_path(path: impl AsRef<Path>) -> Result<Table> {
    read_wide_table(&mut open_csv(path)?)
}

/// Read an already-pivoted wide CSV from an existing reader.
pub fn read_wide_table<R: Read>(rdr: &mut csv::Reader<R>) -> Result<Table> {
    let headers = rdr.headers()?.clone();
    let schema = Schema::new(headers.iter());

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let mut row = Vec::with_capacity(schema.len());
        for i in 0..schema.len() {
            let raw = record.get(i).unwrap_or("");
            row.push(if raw.is_empty() {
                Value::Null
            } else {
                Value::Text(raw.to_owned())
            });
        }
        rows.push(row);
    }
    Ok(Table::new(schema, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(input: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(input.as_bytes())
    }

    #[test]
    fn load_foods_ignores_extra_columns_and_order() {
        let input = "data_type,description,fdc_id\nfoundation,Apple,1\nfoundation,Salt,2\n";
        let foods = load_foods(&mut reader(input)).unwrap();
        assert_eq!(
            foods,
            vec![
                Food {
                    fdc_id: 1,
                    description: "Apple".to_string()
                },
                Food {
                    fdc_id: 2,
                    description: "Salt".to_string()
                },
            ]
        );
    }

    #[test]
    fn load_foods_errors_on_missing_required_column() {
        let input = "fdc_id,data_type\n1,foundation\n";
        let err = load_foods(&mut reader(input)).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("schema mismatch"));
        assert!(msg.contains("missing required column 'description'"));
    }

    #[test]
    fn load_nutrients_errors_on_malformed_id() {
        let input = "id,name\nten,Thiamin\n";
        let err = load_nutrients(&mut reader(input)).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("row 2"));
        assert!(msg.contains("column 'id'"));
    }

    #[test]
    fn load_facts_treats_bad_amounts_as_missing() {
        let input = "fdc_id,nutrient_id,amount\n1,10,150.5\n1,11,\n1,12,n/a\n";
        let facts = load_facts(&mut reader(input)).unwrap();
        assert_eq!(facts[0].amount, Some(150.5));
        assert_eq!(facts[1].amount, None);
        assert_eq!(facts[2].amount, None);
    }

    #[test]
    fn load_facts_from_path_reports_missing_file() {
        let err = load_facts_from_path("no/such/FoodNutrient.csv").unwrap_err();
        assert!(err.to_string().contains("no/such/FoodNutrient.csv"));
    }

    #[test]
    fn read_wide_table_keeps_raw_text_and_nulls() {
        let input = "fdc_id,description,Thiamin\n1,Apple,0.017\n2,Salt,\n";
        let t = read_wide_table(&mut reader(input)).unwrap();
        assert_eq!(t.cell(0, "Thiamin"), Some(&Value::Text("0.017".to_string())));
        assert_eq!(t.cell(1, "Thiamin"), Some(&Value::Null));
    }
}
