use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Name of the config file looked up in the working directory when no
/// `--config` flag is given.
pub const DEFAULT_CONFIG_FILE: &str = "solar.toml";

const DEFAULT_BACKEND: &str = "sqlite";
const DEFAULT_DATABASE: &str = "sqlite:solar.db?mode=rwc";

/// Optional settings from a TOML config file.
///
/// Every field may be omitted; command-line flags override file values,
/// which override the built-in defaults.
///
/// ```toml
/// backend = "sqlite"
/// database = "sqlite:solar.db?mode=rwc"
/// default_location = "Washington, DC"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub backend: Option<String>,
    pub database: Option<String>,
    pub default_location: Option<String>,
}

impl CliConfig {
    /// Loads configuration.
    ///
    /// With an explicit path the file must exist and parse. Without one,
    /// `solar.toml` is used if present, otherwise all fields stay unset.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file '{}'", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("invalid config file '{}'", path.display()))
    }

    /// Backend name after applying flag-over-file precedence.
    pub fn backend(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.backend.clone())
            .unwrap_or_else(|| DEFAULT_BACKEND.to_string())
    }

    /// Connection string after applying flag-over-file precedence.
    pub fn database(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string())
    }

    /// Location name after applying flag-over-file precedence, if any.
    pub fn location(&self, flag: Option<String>) -> Option<String> {
        flag.or_else(|| self.default_location.clone())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_full_config() {
        let config: CliConfig = toml::from_str(
            r#"
            backend = "sqlite"
            database = "sqlite:custom.db?mode=rwc"
            default_location = "Fairfax, VA"
            "#,
        )
        .unwrap();

        assert_eq!(config.backend.as_deref(), Some("sqlite"));
        assert_eq!(config.database.as_deref(), Some("sqlite:custom.db?mode=rwc"));
        assert_eq!(config.default_location.as_deref(), Some("Fairfax, VA"));
    }

    #[test]
    fn empty_config_leaves_fields_unset() {
        let config: CliConfig = toml::from_str("").unwrap();

        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<CliConfig, _> = toml::from_str("databse = \"typo\"");

        assert!(result.is_err());
    }

    #[test]
    fn flag_overrides_file_value() {
        let config = CliConfig {
            backend: Some("sqlite".to_string()),
            database: Some("sqlite:file.db".to_string()),
            default_location: Some("Fairfax, VA".to_string()),
        };

        assert_eq!(config.database(Some(":memory:".to_string())), ":memory:");
        assert_eq!(
            config.location(Some("McLean, VA".to_string())).as_deref(),
            Some("McLean, VA")
        );
    }

    #[test]
    fn file_value_overrides_default() {
        let config = CliConfig {
            backend: None,
            database: Some("sqlite:file.db".to_string()),
            default_location: None,
        };

        assert_eq!(config.backend(None), "sqlite");
        assert_eq!(config.database(None), "sqlite:file.db");
        assert_eq!(config.location(None), None);
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = CliConfig::default();

        assert_eq!(config.backend(None), "sqlite");
        assert_eq!(config.database(None), "sqlite:solar.db?mode=rwc");
    }
}
