//! Editor configuration, stored as TOML in `localStorage`.

use moonzoon_novyui::tokens::theme;
use shared::{AppConfig, ConfigError, Theme as SharedTheme};
use zoon::*;

use crate::debug_utils::debug_critical;

pub const CONFIG_STORAGE_KEY: &str = "text-sets-editor-config";

/// Parse stored config text. Missing text yields defaults; old versions are
/// upgraded by `AppConfig::from_toml`.
pub fn config_from_storage(stored: Option<&str>) -> Result<AppConfig, ConfigError> {
    match stored {
        Some(content) => AppConfig::from_toml(content),
        None => Ok(AppConfig::default()),
    }
}

pub fn to_novyui_theme(theme: SharedTheme) -> theme::Theme {
    match theme {
        SharedTheme::Light => theme::Theme::Light,
        SharedTheme::Dark => theme::Theme::Dark,
    }
}

pub fn from_novyui_theme(theme: theme::Theme) -> SharedTheme {
    match theme {
        theme::Theme::Light => SharedTheme::Light,
        theme::Theme::Dark => SharedTheme::Dark,
    }
}

#[derive(Clone, Default)]
pub struct EditorConfig {
    config: Mutable<AppConfig>,
}

impl EditorConfig {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Mutable::new(config),
        }
    }

    /// Load from `localStorage`, falling back to defaults on any problem.
    pub fn load() -> Self {
        let stored: Option<Result<String, _>> = local_storage().get(CONFIG_STORAGE_KEY);
        let stored = match stored {
            Some(Ok(content)) => Some(content),
            Some(Err(error)) => {
                zoon::eprintln!("CONFIG: stored config unreadable, using defaults: {:?}", error);
                None
            }
            None => {
                zoon::println!("CONFIG: no stored config, using defaults");
                None
            }
        };

        match config_from_storage(stored.as_deref()) {
            Ok(config) => Self::new(config),
            Err(error) => {
                zoon::eprintln!("CONFIG: {}, using defaults", error);
                Self::default()
            }
        }
    }

    pub fn show_tooltip_tails_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.config.signal_ref(|config| config.ui.show_tooltip_tails)
    }

    pub fn theme(&self) -> SharedTheme {
        self.config.lock_ref().ui.theme
    }

    /// Returns `false` when the theme was already active.
    pub fn set_theme(&self, theme: SharedTheme) -> bool {
        {
            let mut config = self.config.lock_mut();
            if config.ui.theme == theme {
                return false;
            }
            config.ui.theme = theme;
        }
        true
    }

    pub fn toggle_tooltip_tails(&self) {
        let mut config = self.config.lock_mut();
        config.ui.show_tooltip_tails = !config.ui.show_tooltip_tails;
    }

    pub fn save(&self) {
        let content = match self.config.lock_ref().to_toml() {
            Ok(content) => content,
            Err(error) => {
                zoon::eprintln!("CONFIG: {}", error);
                return;
            }
        };
        if let Err(error) = local_storage().insert(CONFIG_STORAGE_KEY, &content) {
            debug_critical(&format!("CONFIG: failed to save config: {error:?}"));
        }
    }

    /// Hand the stored theme to NovyUI and persist every later theme change.
    pub fn init_theme(&self) {
        let initial_theme = to_novyui_theme(self.theme());
        let config = self.clone();
        theme::init_theme(
            initial_theme,
            Some(Box::new(move |novyui_theme| {
                if config.set_theme(from_novyui_theme(novyui_theme)) {
                    config.save();
                }
            })),
        );
    }
}
