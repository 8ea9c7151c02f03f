use std::path::PathBuf;

use nutrient_tables::config::PipelineConfig;
use nutrient_tables::mapping::SourceVariant;
use nutrient_tables::normalize::normalize_file;
use nutrient_tables::observe::NullObserver;
use nutrient_tables::pipeline::run_fetch_pipeline;
use nutrient_tables::table::Value;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "nutrient-tables-normalizer-{}-{}.csv",
        name,
        std::process::id()
    ))
}

#[test]
fn normalizes_a_standard_pipeline_output_file() {
    let pivoted = temp_path("pivoted");
    let arranged = temp_path("arranged");

    let config = PipelineConfig::new("tests/fixtures", &pivoted);
    run_fetch_pipeline(&config, SourceVariant::Standard, &NullObserver).unwrap();

    let table = normalize_file(&pivoted, &arranged, SourceVariant::Standard).unwrap();

    let columns: Vec<&str> = table.schema.columns().collect();
    assert_eq!(columns.len(), 2 + 36);
    assert_eq!(&columns[..3], &["fdc_id", "description", "Potassium"]);

    // Values pass through as raw text, byte for byte.
    assert_eq!(table.cell(0, "Potassium"), Some(&Value::Text("150".to_string())));
    assert_eq!(table.cell(0, "Sodium"), Some(&Value::Text("5".to_string())));
    // Canonical columns the source never reported exist and are empty.
    assert_eq!(table.cell(0, "EPA"), Some(&Value::Null));
    assert_eq!(table.cell(0, "Vitamin B12"), Some(&Value::Null));

    std::fs::remove_file(&pivoted).ok();
    std::fs::remove_file(&arranged).ok();
}

#[test]
fn normalizer_is_idempotent_on_its_own_output() {
    let pivoted = temp_path("idem-pivoted");
    let once = temp_path("idem-once");
    let twice = temp_path("idem-twice");

    let config = PipelineConfig::new("tests/fixtures", &pivoted);
    run_fetch_pipeline(&config, SourceVariant::Standard, &NullObserver).unwrap();

    normalize_file(&pivoted, &once, SourceVariant::Standard).unwrap();
    normalize_file(&once, &twice, SourceVariant::Standard).unwrap();

    let first = std::fs::read_to_string(&once).unwrap();
    let second = std::fs::read_to_string(&twice).unwrap();
    assert_eq!(first, second);

    std::fs::remove_file(&pivoted).ok();
    std::fs::remove_file(&once).ok();
    std::fs::remove_file(&twice).ok();
}

#[test]
fn end_to_end_single_food_matches_expected_row() {
    // Food {(1, Apple)}, nutrients Potassium/Sodium, two facts; after
    // normalization every other canonical cell is empty.
    let pivoted = temp_path("apple-pivoted");
    let arranged = temp_path("apple-arranged");

    let config = PipelineConfig::new("tests/fixtures", &pivoted);
    run_fetch_pipeline(&config, SourceVariant::Standard, &NullObserver).unwrap();
    let table = normalize_file(&pivoted, &arranged, SourceVariant::Standard).unwrap();

    let apple = 0;
    assert_eq!(table.cell(apple, "fdc_id"), Some(&Value::Text("1".to_string())));
    assert_eq!(
        table.cell(apple, "description"),
        Some(&Value::Text("Apple".to_string()))
    );
    let mut empty = 0;
    for column in table.schema.columns().skip(2) {
        match column {
            "Potassium" | "Sodium" => assert!(!table.cell(apple, column).unwrap().is_null()),
            _ => {
                assert!(table.cell(apple, column).unwrap().is_null());
                empty += 1;
            }
        }
    }
    assert_eq!(empty, 34);

    std::fs::remove_file(&pivoted).ok();
    std::fs::remove_file(&arranged).ok();
}
