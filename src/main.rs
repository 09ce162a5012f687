use log::info;

use recipekeeper_md::config::ConverterConfig;
use recipekeeper_md::{convert_export, ExportError};

fn main() -> Result<(), ExportError> {
    env_logger::init();

    let config = ConverterConfig::load()?;
    let summary = convert_export(&config.input, &config.output_dir)?;

    info!(
        "converted {} recipes from {} into {} ({} failed)",
        summary.written,
        config.input.display(),
        config.output_dir.display(),
        summary.failed
    );

    Ok(())
}
