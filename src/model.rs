use serde::Serialize;
use std::time::Duration;

/// One recipe from the export, fully extracted.
///
/// Every list field is present-but-empty when the export carries no data for
/// it; absence of a property never produces an absent field.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Recipe {
    pub title: String,
    pub metadata: RecipeMetadata,
    pub nutrition: RecipeNutrition,
    pub photo_paths: Vec<String>,
    pub ingredient_lines: Vec<String>,
    pub instruction_lines: Vec<String>,
    pub notes_lines: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RecipeMetadata {
    /// Identifier from the export; used as the output filename stem.
    /// May legitimately be empty.
    pub uuid: String,
    pub favorited: bool,
    /// Star rating, 0 = unset.
    pub rating: i32,
    pub source: String,
    pub category_list: Vec<String>,
    pub course_list: Vec<String>,
    pub collection_list: Vec<String>,
    #[serde(rename = "yield")]
    pub yields: String,
    pub cook_time: Duration,
    pub prep_time: Duration,
}

/// Nutrition facts as free text, straight from the export. No parsing or
/// validation; empty string means the export had no value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecipeNutrition {
    pub serving: String,
    pub calories: String,
    pub total_fat: String,
    pub saturated_fat: String,
    pub sodium: String,
    pub total_carbohydrate: String,
    pub dietary_fiber: String,
    pub sugars: String,
    pub protein: String,
}
