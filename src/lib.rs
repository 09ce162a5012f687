pub mod config;
pub mod duration;
pub mod error;
pub mod extract;
pub mod fractions;
pub mod itemprop;
pub mod markdown;
pub mod model;

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error};
use scraper::{Html, Selector};

pub use crate::error::ExportError;
pub use crate::itemprop::RecipeNode;
pub use crate::model::{Recipe, RecipeMetadata, RecipeNutrition};

/// Totals for one conversion run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportSummary {
    pub written: usize,
    pub failed: usize,
}

/// Extract every recipe from an export document, in document order.
///
/// The export marks each recipe with a `div.recipe-details` container. A
/// document without containers simply yields an empty list.
pub fn parse_export(html: &str) -> Vec<Recipe> {
    let document = Html::parse_document(html);
    let containers = Selector::parse("div.recipe-details").unwrap();

    document
        .select(&containers)
        .map(|container| RecipeNode(container).extract_recipe())
        .collect()
}

/// Render one recipe and write it as `{uuid}.md` under `out_dir`.
///
/// An empty UUID produces a file named `.md`; the export guarantees IDs in
/// practice, so the degenerate name is accepted rather than special-cased.
pub fn write_recipe(recipe: &Recipe, out_dir: &Path) -> Result<PathBuf, ExportError> {
    let path = out_dir.join(format!("{}.md", recipe.metadata.uuid));
    fs::write(&path, markdown::recipe_markdown(recipe))?;
    Ok(path)
}

/// Convert a whole export file into per-recipe Markdown files.
///
/// A recipe that fails to write is logged and skipped; the rest of the batch
/// still runs. Only failing to read the export itself (or to create the
/// output directory) aborts the run.
pub fn convert_export(input: &Path, out_dir: &Path) -> Result<ExportSummary, ExportError> {
    let html = fs::read_to_string(input)?;
    fs::create_dir_all(out_dir)?;

    let mut summary = ExportSummary::default();

    for recipe in parse_export(&html) {
        match write_recipe(&recipe, out_dir) {
            Ok(path) => {
                debug!("wrote '{}' to {}", recipe.title, path.display());
                summary.written += 1;
            }
            Err(e) => {
                error!("skipping '{}': {}", recipe.title, e);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
