//! In-memory wide-table representation and CSV serialization.
//!
//! The pivoted nutrient table is heterogeneous per column (integer ids, text
//! descriptions, float amounts) and its nutrient columns vary with the source
//! data, so it is modeled as an ordered list of named columns over untyped
//! [`Value`] cells rather than a typed record.

use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// A single cell in a [`Table`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/unknown. Serialized as an empty CSV field; never conflated
    /// with zero.
    Null,
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float.
    Float(f64),
    /// UTF-8 text.
    Text(String),
}

impl Value {
    /// True for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    fn to_csv_field(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Int(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::Text(s) => s.clone(),
        }
    }
}

/// Ordered column names describing a [`Table`]'s shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
}

impl Schema {
    /// Create a schema from column names, in order.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    /// Index of a column by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Row-major in-memory table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column names, in output order.
    pub schema: Schema,
    /// Rows; each row has exactly `schema.len()` cells.
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create a table from a schema and rows.
    ///
    /// # Panics
    ///
    /// Panics if any row's length differs from the schema column count.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        for row in &rows {
            assert!(
                row.len() == schema.len(),
                "row length {} does not match schema length {}",
                row.len(),
                schema.len()
            );
        }
        Self { schema, rows }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The cell at (`row`, column `name`), if both exist.
    pub fn cell(&self, row: usize, name: &str) -> Option<&Value> {
        let idx = self.schema.index_of(name)?;
        self.rows.get(row).and_then(|r| r.get(idx))
    }

    /// Serialize to CSV with a header row. Null cells become empty fields.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(self.schema.columns())?;
        for row in &self.rows {
            wtr.write_record(row.iter().map(Value::to_csv_field))?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Serialize to a CSV file at `path`, creating or truncating it.
    pub fn write_csv_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_csv(file)
    }
}
