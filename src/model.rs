//! Typed records for the three source tables and the joined long form.

/// One food item from the Food table.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    /// FoodData Central identifier.
    pub fdc_id: i64,
    /// Human-readable food description.
    pub description: String,
}

/// One nutrient definition from the Nutrient table.
#[derive(Debug, Clone, PartialEq)]
pub struct Nutrient {
    pub id: i64,
    /// Source-variant nutrient name (e.g. `Thiamin`).
    pub name: String,
}

/// One food-contains-nutrient fact from the FoodNutrient table.
///
/// `amount` is `None` when the source cell is empty or unparseable; absence
/// means "unknown", not zero.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodNutrientFact {
    pub fdc_id: i64,
    pub nutrient_id: i64,
    pub amount: Option<f64>,
}

/// Long-form row produced by joining facts to nutrient names and food
/// descriptions. Input to the pivot.
#[derive(Debug, Clone, PartialEq)]
pub struct LongRow {
    pub fdc_id: i64,
    pub description: String,
    /// Source-variant nutrient name attached by the nutrient join.
    pub nutrient: String,
    pub amount: Option<f64>,
}
