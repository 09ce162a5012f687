use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Converter configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ConverterConfig {
    /// Path of the Recipe Keeper HTML export to read
    #[serde(default = "default_input")]
    pub input: PathBuf,
    /// Directory the per-recipe Markdown files are written into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("./recipes.html")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./recipes")
}

impl ConverterConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPEKEEPER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPEKEEPER__OUTPUT_DIR
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RECIPEKEEPER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_input(), PathBuf::from("./recipes.html"));
        assert_eq!(default_output_dir(), PathBuf::from("./recipes"));
    }

    #[test]
    fn test_config_default() {
        let config = ConverterConfig::default();
        assert_eq!(config.input, PathBuf::from("./recipes.html"));
        assert_eq!(config.output_dir, PathBuf::from("./recipes"));
    }
}
