use std::time::Duration;

use recipekeeper_md::markdown::recipe_markdown;
use recipekeeper_md::{Recipe, RecipeMetadata};

#[test]
fn test_full_layout_is_byte_exact() {
    let recipe = Recipe {
        title: "Chicken Saag".to_string(),
        metadata: RecipeMetadata {
            uuid: "d1b0072f".to_string(),
            favorited: true,
            rating: 4,
            source: "Aunt B".to_string(),
            category_list: vec!["Curry".to_string()],
            course_list: vec!["Dinner".to_string()],
            collection_list: vec!["Favorites".to_string(), "Indian".to_string()],
            yields: "4 servings".to_string(),
            cook_time: Duration::from_secs(5_400),
            prep_time: Duration::from_secs(600),
        },
        ingredient_lines: vec!["1 lb chicken".to_string(), "2 cups spinach".to_string()],
        instruction_lines: vec!["Cook it.".to_string(), "Serve.".to_string()],
        notes_lines: vec!["Freezes well.".to_string()],
        ..Recipe::default()
    };

    let expected = "# Chicken Saag\n\
        \n\
        Rating: 4-star\n\
        Collections: Favorites, Indian\n\
        Course: Dinner\n\
        \n\
        Source: Aunt B\n\
        \n\
        Cook Time: 1h30m0s\n\
        Prep Time: 10m0s\n\
        \n\
        *Curry*\n\
        \n\
        **4 servings**\n\
        \n\
        ---\n\
        \n\
        - 1 lb chicken\n\
        - 2 cups spinach\n\
        \n\
        ---\n\
        \n\
        ### Instructions\n\
        \n\
        Cook it.\n\
        Serve.\n\
        \n\
        ### Notes\n\
        \n\
        Freezes well.\n";

    assert_eq!(recipe_markdown(&recipe), expected);
}

#[test]
fn test_skipped_sections_keep_their_blank_line_slots() {
    // rating 0, no collections/courses, no source: the header block and the
    // source block render nothing, but their separating blank lines remain
    let recipe = Recipe {
        title: "Tea".to_string(),
        metadata: RecipeMetadata {
            cook_time: Duration::from_secs(300),
            prep_time: Duration::from_secs(50),
            ..RecipeMetadata::default()
        },
        ingredient_lines: vec!["water".to_string()],
        instruction_lines: vec!["boil".to_string()],
        ..Recipe::default()
    };

    let expected = "# Tea\n\
        \n\
        \n\
        \n\
        Cook Time: 5m0s\n\
        Prep Time: 50s\n\
        \n\
        \n\
        \n\
        ---\n\
        \n\
        - water\n\
        \n\
        ---\n\
        \n\
        ### Instructions\n\
        \n\
        boil\n";

    assert_eq!(recipe_markdown(&recipe), expected);
}

#[test]
fn test_zero_durations_render_no_time_lines() {
    let recipe = Recipe {
        title: "Ice".to_string(),
        ..Recipe::default()
    };

    let rendered = recipe_markdown(&recipe);

    assert!(!rendered.contains("Cook Time:"));
    assert!(!rendered.contains("Prep Time:"));
    assert!(!rendered.contains("### Notes"));
    assert!(rendered.ends_with("### Instructions\n\n\n"));
}
