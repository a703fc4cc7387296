// Theme Management System
// The active theme lives in one global Mutable; persistence is delegated to
// the application through an optional hook.

use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

type ThemePersistenceFn = Option<Box<dyn Fn(Theme) + Send + Sync>>;

static THEME: Lazy<Mutable<Theme>> = Lazy::new(|| Mutable::new(Theme::Dark));

static PERSISTENCE: Lazy<Mutable<ThemePersistenceFn>> = Lazy::new(|| Mutable::new(None));

/// Initialize the theme and register the hook called on every `set_theme`.
pub fn init_theme(initial_theme: Theme, persistence: ThemePersistenceFn) {
    PERSISTENCE.set(persistence);
    THEME.set(initial_theme);
}

/// Current theme as a signal for reactive styles
pub fn theme() -> impl Signal<Item = Theme> {
    THEME.signal()
}

/// Set the theme and hand it to the persistence hook
pub fn set_theme(new_theme: Theme) {
    THEME.set_neq(new_theme);
    if let Some(persist) = PERSISTENCE.lock_ref().as_ref() {
        persist(new_theme);
    }
}

pub fn current_theme() -> Theme {
    THEME.get()
}

pub fn toggle_theme() {
    set_theme(current_theme().toggled());
}
