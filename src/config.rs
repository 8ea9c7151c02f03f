//! Pipeline configuration.
//!
//! Input and output locations are configuration, not code: a config names the
//! directory holding the USDA CSV exports and the output path. Table file
//! names default to the USDA distribution names for the chosen variant
//! (`Food.csv` vs `FoundationalFood.csv`, etc.) and can be overridden for
//! exports that were renamed on disk.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::mapping::SourceVariant;

/// Locations of the three source tables and the output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory holding the source CSV tables.
    pub data_dir: PathBuf,
    /// Where the wide nutrient table is written.
    pub output_path: PathBuf,
    /// Override for the Food table file name.
    #[serde(default)]
    pub food_file: Option<String>,
    /// Override for the Nutrient table file name.
    #[serde(default)]
    pub nutrient_file: Option<String>,
    /// Override for the FoodNutrient table file name.
    #[serde(default)]
    pub food_nutrient_file: Option<String>,
}

impl PipelineConfig {
    /// Config with default (variant-derived) table file names.
    pub fn new(data_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            output_path: output_path.into(),
            food_file: None,
            nutrient_file: None,
            food_nutrient_file: None,
        }
    }

    /// Load a config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::OpenInput {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Path of the Food table for `variant`.
    pub fn food_path(&self, variant: SourceVariant) -> PathBuf {
        self.table_path(&self.food_file, variant, "Food.csv")
    }

    /// Path of the Nutrient table for `variant`.
    pub fn nutrient_path(&self, variant: SourceVariant) -> PathBuf {
        self.table_path(&self.nutrient_file, variant, "Nutrient.csv")
    }

    /// Path of the FoodNutrient table for `variant`.
    pub fn food_nutrient_path(&self, variant: SourceVariant) -> PathBuf {
        self.table_path(&self.food_nutrient_file, variant, "FoodNutrient.csv")
    }

    fn table_path(
        &self,
        override_name: &Option<String>,
        variant: SourceVariant,
        base_name: &str,
    ) -> PathBuf {
        let name = match override_name {
            Some(name) => name.clone(),
            None => match variant {
                SourceVariant::Standard => base_name.to_string(),
                SourceVariant::Foundational => format!("Foundational{base_name}"),
            },
        };
        self.data_dir.join(name)
    }
}
