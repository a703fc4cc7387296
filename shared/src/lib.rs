use serde::{Deserialize, Serialize};
use std::fmt;

pub mod roving;
pub mod text_sets;
pub mod units;
pub mod virtual_window;

pub use text_sets::{
    CatalogError, CategoryId, CategoryOption, TextElement, TextSet, TextSetCatalog, TextSetRow,
    category_label, pair_rows, row_at, row_count,
};
pub use units::{PAGE_HEIGHT, PAGE_RATIO, PAGE_WIDTH, PageUnits};
pub use virtual_window::{OVERSCAN_ROWS, ROW_GAP, TEXT_SET_SIZE, VirtualWindow, text_set_row_height};

// ===== CONFIG TYPES =====

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub app: AppSection,
    #[serde(default)]
    pub ui: UiSection,
}

// AppSection carries the config format version so stored configs can be migrated
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppSection {
    pub version: String,
}

impl AppSection {
    /// Current configuration format version
    pub const CURRENT_VERSION: &'static str = "1.1.0";

    /// Check if this config version is supported
    pub fn is_supported_version(&self) -> bool {
        matches!(self.version.as_str(), "1.0.0" | "1.1.0")
    }

    /// Check if this config needs migration to current version
    pub fn needs_migration(&self) -> bool {
        self.version != Self::CURRENT_VERSION
    }

    pub fn get_migration_strategy(&self) -> MigrationStrategy {
        match self.version.as_str() {
            "1.1.0" => MigrationStrategy::None,
            // 1.0.0 predates `[ui] show_tooltip_tails`; serde fills its default
            "1.0.0" => MigrationStrategy::Upgrade("1.0.0 -> 1.1.0".to_string()),
            _ => MigrationStrategy::Recreate,
        }
    }
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MigrationStrategy {
    None,            // No migration needed
    Upgrade(String), // Automatic upgrade with description
    Recreate,        // Unknown version, create new config
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UiSection {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_show_tooltip_tails")]
    pub show_tooltip_tails: bool,
}

fn default_show_tooltip_tails() -> bool {
    true
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            show_tooltip_tails: default_show_tooltip_tails(),
        }
    }
}

// ===== CONFIG ERRORS =====

#[derive(Debug)]
pub enum ConfigError {
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    UnsupportedVersion(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(error) => write!(f, "failed to parse config: {error}"),
            ConfigError::Serialize(error) => write!(f, "failed to serialize config: {error}"),
            ConfigError::UnsupportedVersion(version) => {
                write!(f, "unsupported config version '{version}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(error) => Some(error),
            ConfigError::Serialize(error) => Some(error),
            ConfigError::UnsupportedVersion(_) => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        ConfigError::Parse(error)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(error: toml::ser::Error) -> Self {
        ConfigError::Serialize(error)
    }
}

impl AppConfig {
    /// Parse a stored config. Older supported versions are upgraded to
    /// `AppSection::CURRENT_VERSION`; versions that need recreation are rejected.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = toml::from_str(content)?;
        match config.app.get_migration_strategy() {
            MigrationStrategy::None => Ok(config),
            MigrationStrategy::Upgrade(_) => {
                config.app.version = AppSection::CURRENT_VERSION.to_string();
                Ok(config)
            }
            MigrationStrategy::Recreate => Err(ConfigError::UnsupportedVersion(config.app.version)),
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
