use crate::error::{RefSieveError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Pattern-list configuration for reference filtering.
///
/// Each field is a space-separated list of wildcard patterns. Because an
/// empty list matches no name at all, the per-field default is the policy:
/// branch includes fall back to `"*"` (keep every branch), every other list
/// falls back to `""` (tags and change requests are dropped unless opted in).
///
/// Blank values are normalized to their defaults once, at construction; the
/// normalized configuration is immutable afterwards.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    #[serde(default = "default_includes")]
    pub includes: String,

    #[serde(default)]
    pub excludes: String,

    #[serde(default)]
    pub tag_includes: String,

    #[serde(default)]
    pub tag_excludes: String,

    #[serde(default)]
    pub pr_destination_includes: String,
}

/// Returns the default branch include list (keep every branch).
fn default_includes() -> String {
    "*".to_string()
}

impl FilterConfig {
    /// Create a configuration, replacing blank arguments with their defaults.
    pub fn new(
        includes: impl Into<String>,
        excludes: impl Into<String>,
        tag_includes: impl Into<String>,
        tag_excludes: impl Into<String>,
        pr_destination_includes: impl Into<String>,
    ) -> Self {
        FilterConfig {
            includes: default_if_blank(includes.into(), "*"),
            excludes: default_if_blank(excludes.into(), ""),
            tag_includes: default_if_blank(tag_includes.into(), ""),
            tag_excludes: default_if_blank(tag_excludes.into(), ""),
            pr_destination_includes: default_if_blank(pr_destination_includes.into(), ""),
        }
    }

    /// Re-apply blank-field normalization to deserialized values.
    fn normalized(self) -> Self {
        FilterConfig::new(
            self.includes,
            self.excludes,
            self.tag_includes,
            self.tag_excludes,
            self.pr_destination_includes,
        )
    }
}

fn default_if_blank(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig::new("", "", "", "", "")
    }
}

/// Loads filter configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `refsieve.toml` in current directory
/// 3. `.refsieve.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(FilterConfig)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<FilterConfig> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./refsieve.toml").exists() {
        fs::read_to_string("./refsieve.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".refsieve.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(FilterConfig::default());
        }
    } else {
        return Ok(FilterConfig::default());
    };

    let config: FilterConfig =
        toml::from_str(&config_str).map_err(|e| RefSieveError::config(e.to_string()))?;
    Ok(config.normalized())
}
