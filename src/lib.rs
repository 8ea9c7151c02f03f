//! `nutrient-tables` turns raw USDA FoodData Central exports (the Food,
//! Nutrient, and FoodNutrient CSV tables) into a single wide CSV where each
//! row is a food and each column is one of the tracked nutrients.
//!
//! The pipeline is a plain batch transform: load the three relational tables
//! into memory, keep only the nutrients named by a fixed mapping table, join
//! facts to nutrient names and food descriptions, pivot long rows into one
//! row per food, and (for sources whose nutrient naming differs from the
//! canonical schema) rename and reindex the columns onto a fixed canonical
//! order. Two source variants are supported, the standard tables and the
//! "Foundation Foods" subset; both end up with the same column schema so
//! their outputs can be combined.
//!
//! ## Quick example: run a fetch pipeline
//!
//! ```no_run
//! use nutrient_tables::config::PipelineConfig;
//! use nutrient_tables::mapping::SourceVariant;
//! use nutrient_tables::observe::StdErrObserver;
//! use nutrient_tables::pipeline::run_fetch_pipeline;
//!
//! # fn main() -> nutrient_tables::Result<()> {
//! let config = PipelineConfig::new("data", "foundational_dataset.csv");
//! let table = run_fetch_pipeline(&config, SourceVariant::Foundational, &StdErrObserver)?;
//! println!("foods={}", table.row_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## In-memory stages
//!
//! Each stage is also usable on its own:
//!
//! ```rust
//! use std::collections::HashSet;
//!
//! use nutrient_tables::mapping::{NutrientMapping, SourceVariant};
//! use nutrient_tables::model::{Food, FoodNutrientFact, Nutrient};
//! use nutrient_tables::normalize::normalize;
//! use nutrient_tables::pipeline::{filter, join, pivot};
//! use nutrient_tables::table::Value;
//!
//! # fn main() -> nutrient_tables::Result<()> {
//! let mapping = NutrientMapping::for_variant(SourceVariant::Standard);
//! let foods = vec![Food { fdc_id: 1, description: "Apple".to_string() }];
//! let nutrients = vec![Nutrient { id: 10, name: "Potassium, K".to_string() }];
//! let facts = vec![FoodNutrientFact { fdc_id: 1, nutrient_id: 10, amount: Some(150.0) }];
//!
//! let kept_nutrients = filter::restrict_nutrients(&nutrients, &mapping.source_names());
//! let kept_ids: HashSet<i64> = kept_nutrients.iter().map(|n| n.id).collect();
//! let kept_facts = filter::restrict_facts(&facts, &kept_ids);
//! let joined = join::attach(&kept_facts, &kept_nutrients, &foods);
//! let wide = pivot::pivot(&joined.rows).table;
//! let aligned = normalize(wide, &mapping.inverse()?);
//!
//! assert_eq!(aligned.cell(0, "Potassium"), Some(&Value::Float(150.0)));
//! assert_eq!(aligned.cell(0, "Sodium"), Some(&Value::Null));
//! # Ok(())
//! # }
//! ```
//!
//! ## Standalone normalization
//!
//! An already-pivoted file whose columns still use source nutrient names can
//! be aligned to the canonical schema without re-running the fetch pipeline:
//!
//! ```no_run
//! use nutrient_tables::mapping::SourceVariant;
//! use nutrient_tables::normalize::normalize_file;
//!
//! # fn main() -> nutrient_tables::Result<()> {
//! normalize_file("dataset.csv", "arranged_dataset.csv", SourceVariant::Standard)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mapping`]: the tracked-nutrient table and per-variant name mappings
//! - [`ingest`]: CSV loaders for the three source tables and pivoted files
//! - [`pipeline`]: filter/join/pivot stages and the fetch orchestration
//! - [`normalize`]: rename + reindex onto the canonical column schema
//! - [`table`]: in-memory wide table and CSV writer
//! - [`config`]: input/output locations
//! - [`observe`]: data-quality diagnostics reporting
//! - [`error`]: the crate-wide error type

pub mod config;
pub mod error;
pub mod ingest;
pub mod mapping;
pub mod model;
pub mod normalize;
pub mod observe;
pub mod pipeline;
pub mod table;

pub use error::{Error, Result};
