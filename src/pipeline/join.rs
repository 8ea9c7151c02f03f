//! Equi-joins attaching nutrient names and food descriptions to facts.

use std::collections::HashMap;

use crate::model::{Food, FoodNutrientFact, LongRow, Nutrient};

/// Result of the two joins, plus counts of facts lost to inner-join semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinOutcome {
    /// Long-form rows, in input fact order. Every row has a nutrient name and
    /// a food description.
    pub rows: Vec<LongRow>,
    /// Facts referencing a `nutrient_id` with no matching nutrient row. Zero
    /// when the facts were filtered by exactly that id set.
    pub dropped_unknown_nutrient: usize,
    /// Facts referencing an `fdc_id` absent from the Food table. Dropping
    /// these is intentional data loss, reported as a diagnostic count.
    pub dropped_unknown_food: usize,
}

/// Fact ⨝ Nutrient on `nutrient_id`, then ⨝ Food on `fdc_id`. Both joins are
/// inner: unmatched facts are dropped and counted.
pub fn attach(facts: &[FoodNutrientFact], nutrients: &[Nutrient], foods: &[Food]) -> JoinOutcome {
    let names: HashMap<i64, &str> = nutrients.iter().map(|n| (n.id, n.name.as_str())).collect();
    let descriptions: HashMap<i64, &str> = foods
        .iter()
        .map(|f| (f.fdc_id, f.description.as_str()))
        .collect();

    let mut rows = Vec::with_capacity(facts.len());
    let mut dropped_unknown_nutrient = 0;
    let mut dropped_unknown_food = 0;
    for fact in facts {
        let Some(nutrient) = names.get(&fact.nutrient_id) else {
            dropped_unknown_nutrient += 1;
            continue;
        };
        let Some(description) = descriptions.get(&fact.fdc_id) else {
            dropped_unknown_food += 1;
            continue;
        };
        rows.push(LongRow {
            fdc_id: fact.fdc_id,
            description: (*description).to_string(),
            nutrient: (*nutrient).to_string(),
            amount: fact.amount,
        });
    }

    JoinOutcome {
        rows,
        dropped_unknown_nutrient,
        dropped_unknown_food,
    }
}
