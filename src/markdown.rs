//! Deterministic Markdown layout for one recipe.
//!
//! The layout is fixed: sections render only when they have data, but the
//! blank line separating each conceptual block is emitted either way, so a
//! skipped block leaves its blank-line slot behind. Consumers diff these
//! files, so the output must stay byte-stable.

use std::time::Duration;

use crate::model::Recipe;

/// Render a recipe into the fixed Markdown layout.
pub fn recipe_markdown(recipe: &Recipe) -> String {
    let mut out = String::new();
    let meta = &recipe.metadata;

    out.push_str(&format!("# {}\n", recipe.title));

    out.push('\n');
    if meta.rating != 0 {
        out.push_str(&format!("Rating: {}-star\n", meta.rating));
    }
    if !meta.collection_list.is_empty() {
        out.push_str(&format!(
            "Collections: {}\n",
            meta.collection_list.join(", ")
        ));
    }
    if !meta.course_list.is_empty() {
        out.push_str(&format!("Course: {}\n", meta.course_list.join(", ")));
    }

    out.push('\n');
    if !meta.source.is_empty() {
        out.push_str(&format!("Source: {}\n", meta.source));
    }

    out.push('\n');
    if meta.cook_time > Duration::ZERO {
        out.push_str(&format!("Cook Time: {}\n", format_duration(meta.cook_time)));
    }
    if meta.prep_time > Duration::ZERO {
        out.push_str(&format!("Prep Time: {}\n", format_duration(meta.prep_time)));
    }

    out.push('\n');
    if !meta.category_list.is_empty() {
        out.push_str(&format!("*{}*\n", meta.category_list.join(", ")));
    }

    out.push('\n');
    if !meta.yields.is_empty() {
        out.push_str(&format!("**{}**\n", meta.yields));
    }

    out.push_str("\n---\n\n");

    for ingredient in &recipe.ingredient_lines {
        out.push_str(&format!("- {}\n", ingredient));
    }

    out.push_str("\n---\n\n");

    out.push_str("### Instructions\n\n");
    out.push_str(&recipe.instruction_lines.join("\n"));

    if !recipe.notes_lines.is_empty() {
        out.push_str("\n\n### Notes\n\n");
        out.push_str(&recipe.notes_lines.join("\n"));
    }

    out.push('\n');

    out
}

/// Short human-readable rendering of a time span: `1h30m0s`, `2m30s`, `50s`,
/// `1.5s`. Days roll into hours; sub-minute spans keep their fractional part.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs_f64();
    let hours = (total / 3600.0).floor();
    let minutes = ((total - hours * 3600.0) / 60.0).floor();
    let seconds = total - hours * 3600.0 - minutes * 60.0;

    let seconds_part = if seconds.fract() == 0.0 {
        format!("{}s", seconds as u64)
    } else {
        format!("{}s", seconds)
    };

    if hours > 0.0 {
        format!("{}h{}m{}", hours as u64, minutes as u64, seconds_part)
    } else if minutes > 0.0 {
        format!("{}m{}", minutes as u64, seconds_part)
    } else {
        seconds_part
    }
}
