//! Builds the [`Recipe`] model from one recipe fragment.
//!
//! Extraction never fails: a missing or malformed property leaves its field
//! at the documented default and the rest of the recipe is still built.

use std::time::Duration;

use log::debug;

use crate::duration::parse_iso_duration;
use crate::itemprop::RecipeNode;
use crate::model::{Recipe, RecipeMetadata, RecipeNutrition};

/// Prep time assumed when the export omits one or carries garbage.
const DEFAULT_PREP_TIME: Duration = Duration::from_secs(50);

impl RecipeNode<'_> {
    pub fn extract_metadata(&self) -> RecipeMetadata {
        RecipeMetadata {
            uuid: self.content_or("recipeId", ""),
            // the export writes Python-style booleans; only the exact
            // literal "True" counts
            favorited: self.content_or("recipeIsFavourite", "False") == "True",
            rating: self.content_or("recipeRating", "0").parse().unwrap_or(0),
            source: self.prop_text("recipeSource"),
            category_list: self.content_list("recipeCategory"),
            collection_list: self.content_list("recipeCollection"),
            course_list: self.courses(),
            yields: self.prop_text("recipeYield"),
            // prepTime values come whitespace-padded out of the export
            prep_time: parse_iso_duration(self.content_or("prepTime", "PT50S").trim())
                .unwrap_or(DEFAULT_PREP_TIME),
            cook_time: parse_iso_duration(&self.content_or("cookTime", "PT0S"))
                .unwrap_or(Duration::ZERO),
        }
    }

    pub fn extract_nutrition(&self) -> RecipeNutrition {
        RecipeNutrition {
            serving: self.content_or("recipeNutServingSize", ""),
            calories: self.content_or("recipeNutCalories", ""),
            total_fat: self.content_or("recipeNutTotalFat", ""),
            saturated_fat: self.content_or("recipeNutSaturatedFat", ""),
            sodium: self.content_or("recipeNutSodium", ""),
            total_carbohydrate: self.content_or("recipeNutTotalCarbohydrate", ""),
            dietary_fiber: self.content_or("recipeNutDietaryFiber", ""),
            sugars: self.content_or("recipeNutSugars", ""),
            protein: self.content_or("recipeNutProtein", ""),
        }
    }

    pub fn extract_recipe(&self) -> Recipe {
        let recipe = Recipe {
            title: self.prop_text("name"),
            metadata: self.extract_metadata(),
            nutrition: self.extract_nutrition(),
            photo_paths: self.photo_paths(),
            ingredient_lines: self.child_text_list("recipeIngredients"),
            instruction_lines: self.child_text_list("recipeDirections"),
            notes_lines: self.child_text_list("recipeNotes"),
        };

        debug!(
            "extracted '{}' ({}): {} ingredients, {} steps",
            recipe.title,
            recipe.metadata.uuid,
            recipe.ingredient_lines.len(),
            recipe.instruction_lines.len()
        );

        recipe
    }
}
