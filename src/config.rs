// ⚙️ Configuration - defaults, optional TOML file, environment overrides

use crate::error::Result;
use crate::logging::LoggingSettings;
use crate::schema::ValidatorOptions;
use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Looked up in the working directory (`xs2a-model.toml`)
pub const DEFAULT_FILE: &str = "xs2a-model";

/// `XS2A_MODEL__VALIDATION__STRICT_ENUMS=true`
pub const ENV_PREFIX: &str = "XS2A_MODEL";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub validation: ValidatorOptions,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Load from `path`, or from the optional default file when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_FILE).required(false),
        };
        Self::build(Config::builder().add_source(file))
    }

    /// Load from TOML text (environment overrides still apply).
    pub fn from_toml(text: &str) -> Result<Self> {
        Self::build(Config::builder().add_source(File::from_str(text, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!settings.validation.strict_enums);
    }

    #[test]
    fn test_toml_sections() {
        let settings = Settings::from_toml(
            r#"
            [validation]
            strict_enums = true

            [logging]
            filter = "xs2a_model=debug"
            json = true
            "#,
        )
        .unwrap();

        assert!(settings.validation.strict_enums);
        assert_eq!(settings.logging.filter, "xs2a_model=debug");
        assert!(settings.logging.json);
    }

    #[test]
    fn test_partial_section() {
        let settings = Settings::from_toml("[logging]\njson = true\n").unwrap();
        assert!(settings.logging.json);
        assert_eq!(settings.logging.filter, "warn");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = Settings::load(Some(Path::new("/nonexistent/xs2a-model.toml")));
        assert!(matches!(result, Err(crate::error::ModelError::Config(_))));
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        assert!(Settings::from_toml("[validation]\nstrict_enums = \"sometimes\"\n").is_err());
    }
}
