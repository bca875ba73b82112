//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rstree/rstree.toml`
//! 3. Environment variables: `RSTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Encoding, LayoutOptions};

/// Textual encoding of the export format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EncodingSettings {
    /// Depth marker; must be exactly one character.
    pub marker: String,
    /// Filler characters stripped after the marker run.
    pub fill: String,
    /// Case-insensitive leaf keywords.
    pub keywords: Vec<String>,
}

impl Default for EncodingSettings {
    fn default() -> Self {
        Self {
            marker: "|".into(),
            fill: "-".into(),
            keywords: vec!["class".into(), "clase".into()],
        }
    }
}

/// Spacing knobs for the layout engine, in logical units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutSettings {
    pub node_width: f64,
    pub wide_gap: f64,
    pub tight_gap: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        let options = LayoutOptions::default();
        Self {
            node_width: options.node_width,
            wide_gap: options.wide_gap,
            tight_gap: options.tight_gap,
        }
    }
}

/// Unified configuration for rstree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// File extension selected by directory scans (default: "txt")
    pub export_extension: String,
    /// Default directory for `scan` when none is given; `~` and `$VAR` expand
    pub default_dir: Option<String>,
    pub encoding: EncodingSettings,
    pub layout: LayoutSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            export_extension: "txt".into(),
            default_dir: None,
            encoding: EncodingSettings::default(),
            layout: LayoutSettings::default(),
        }
    }
}

/// Get the XDG config directory for rstree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rstree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rstree.toml"))
}

/// Expand environment variables in a path string.
///
/// Supports `$VAR`, `${VAR}`, and `~`. Unresolvable input is kept verbatim.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/rstree/rstree.toml`
    /// 3. Environment variables: `RSTREE_*` prefix (`__` as section separator)
    pub fn load() -> ApplicationResult<Self> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("export_extension", defaults.export_extension.clone())
            .map_err(config_err)?
            .set_default("encoding.marker", defaults.encoding.marker.clone())
            .map_err(config_err)?
            .set_default("encoding.fill", defaults.encoding.fill.clone())
            .map_err(config_err)?
            .set_default("encoding.keywords", defaults.encoding.keywords.clone())
            .map_err(config_err)?
            .set_default("layout.node_width", defaults.layout.node_width)
            .map_err(config_err)?
            .set_default("layout.wide_gap", defaults.layout.wide_gap)
            .map_err(config_err)?
            .set_default("layout.tight_gap", defaults.layout.tight_gap)
            .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("RSTREE")
                .separator("__")
                .list_separator(","),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Load settings from a specific TOML file on top of defaults.
    pub fn load_from(path: &Path) -> ApplicationResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
            message: format!("read {}: {}", path.display(), e),
        })?;
        toml::from_str(&content).map_err(|e| ApplicationError::Config {
            message: format!("parse {}: {}", path.display(), e),
        })
    }

    /// Validated domain encoding.
    pub fn encoding(&self) -> ApplicationResult<Encoding> {
        let mut chars = self.encoding.marker.chars();
        let marker = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(ApplicationError::Config {
                    message: format!(
                        "encoding.marker must be a single character, got {:?}",
                        self.encoding.marker
                    ),
                })
            }
        };
        if self.encoding.keywords.is_empty() {
            return Err(ApplicationError::Config {
                message: "encoding.keywords must not be empty".into(),
            });
        }
        Ok(Encoding {
            marker,
            fill: self.encoding.fill.chars().collect(),
            keywords: self.encoding.keywords.clone(),
        })
    }

    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            node_width: self.layout.node_width,
            wide_gap: self.layout.wide_gap,
            tight_gap: self.layout.tight_gap,
        }
    }

    /// Default scan directory with `~`/`$VAR` expanded.
    pub fn resolved_default_dir(&self) -> Option<PathBuf> {
        self.default_dir
            .as_ref()
            .map(|dir| PathBuf::from(expand_env_vars(dir)))
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# rstree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/rstree/rstree.toml
#   Env:    RSTREE_* environment variables (e.g. RSTREE_ENCODING__MARKER)

# File extension picked up by `rstree scan` (without the dot)
# export_extension = "txt"

# Default directory for `rstree scan` when none is given
# default_dir = "~/exports"

[encoding]
# Depth marker character counted to infer nesting
# marker = "|"

# Filler characters stripped after the marker run
# fill = "-"

# Case-insensitive tokens that mark a leaf line
# keywords = ["class", "clase"]

[layout]
# Box width and sibling gaps in logical units
# node_width = 192.0
# wide_gap = 48.0
# tight_gap = 24.0
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.export_extension, "txt");
        assert_eq!(settings.encoding.marker, "|");
        assert!(settings.default_dir.is_none());
    }

    #[test]
    fn given_default_settings_when_converting_then_domain_encoding_matches() {
        let encoding = Settings::default().encoding().expect("valid encoding");
        assert_eq!(encoding.marker, '|');
        assert_eq!(encoding.fill, vec!['-']);
        assert!(encoding.keywords.contains(&"class".to_string()));
    }

    #[test]
    fn given_multi_char_marker_when_converting_then_config_error() {
        let mut settings = Settings::default();
        settings.encoding.marker = "||".into();
        let result = settings.encoding();
        assert!(matches!(result, Err(ApplicationError::Config { .. })));
    }

    #[test]
    fn given_empty_keywords_when_converting_then_config_error() {
        let mut settings = Settings::default();
        settings.encoding.keywords.clear();
        assert!(settings.encoding().is_err());
    }

    #[test]
    fn given_tilde_in_default_dir_when_resolving_then_expands_to_home() {
        let mut settings = Settings::default();
        settings.default_dir = Some("~/exports".into());

        let resolved = settings.resolved_default_dir().expect("default dir");

        let home = std::env::var("HOME").expect("HOME should be set");
        assert!(
            resolved.to_string_lossy().starts_with(&home),
            "default_dir should expand to home: {}",
            resolved.display()
        );
    }

    #[test]
    fn given_template_when_parsing_then_valid_settings_toml() {
        let template = Settings::template();
        let parsed: Settings = toml::from_str(&template).expect("template must parse");
        assert_eq!(parsed, Settings::default());
    }
}
