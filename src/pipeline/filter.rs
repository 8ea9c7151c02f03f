//! Restriction of the relational tables to the tracked nutrients.

use std::collections::HashSet;

use crate::model::{FoodNutrientFact, Nutrient};

/// Keep only nutrient rows whose name is in `source_names`.
///
/// An empty set yields an empty table; downstream stages must cope, not fail.
pub fn restrict_nutrients(nutrients: &[Nutrient], source_names: &HashSet<&str>) -> Vec<Nutrient> {
    nutrients
        .iter()
        .filter(|n| source_names.contains(n.name.as_str()))
        .cloned()
        .collect()
}

/// Keep only facts whose `nutrient_id` is in `nutrient_ids` (the id set of the
/// filtered Nutrient table). Input row order is preserved.
pub fn restrict_facts(
    facts: &[FoodNutrientFact],
    nutrient_ids: &HashSet<i64>,
) -> Vec<FoodNutrientFact> {
    facts
        .iter()
        .filter(|f| nutrient_ids.contains(&f.nutrient_id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nutrients() -> Vec<Nutrient> {
        vec![
            Nutrient {
                id: 10,
                name: "Potassium, K".to_string(),
            },
            Nutrient {
                id: 11,
                name: "Sodium, Na".to_string(),
            },
            Nutrient {
                id: 12,
                name: "Energy".to_string(),
            },
        ]
    }

    fn facts() -> Vec<FoodNutrientFact> {
        vec![
            FoodNutrientFact {
                fdc_id: 1,
                nutrient_id: 10,
                amount: Some(150.0),
            },
            FoodNutrientFact {
                fdc_id: 1,
                nutrient_id: 12,
                amount: Some(52.0),
            },
            FoodNutrientFact {
                fdc_id: 2,
                nutrient_id: 11,
                amount: Some(38758.0),
            },
        ]
    }

    #[test]
    fn restricts_nutrients_by_name_membership() {
        let wanted: HashSet<&str> = ["Potassium, K", "Sodium, Na"].into_iter().collect();
        let kept = restrict_nutrients(&nutrients(), &wanted);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|n| n.name != "Energy"));
    }

    #[test]
    fn restricts_facts_by_filtered_nutrient_ids() {
        let ids: HashSet<i64> = [10, 11].into_iter().collect();
        let kept = restrict_facts(&facts(), &ids);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|f| f.nutrient_id != 12));
        // Input order preserved.
        assert_eq!(kept[0].nutrient_id, 10);
        assert_eq!(kept[1].nutrient_id, 11);
    }

    #[test]
    fn empty_name_set_yields_empty_tables() {
        let empty = HashSet::new();
        let kept = restrict_nutrients(&nutrients(), &empty);
        assert!(kept.is_empty());
        let ids = HashSet::new();
        assert!(restrict_facts(&facts(), &ids).is_empty());
    }
}
