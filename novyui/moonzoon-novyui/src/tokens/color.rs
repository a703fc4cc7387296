// Color Token System
// Theme-reactive color signals, one light/dark pair per token

use super::theme::{theme, Theme};
use zoon::*;

fn themed(light: &'static str, dark: &'static str) -> impl Signal<Item = &'static str> {
    theme().map(move |t| match t {
        Theme::Light => light,
        Theme::Dark => dark,
    })
}

// Primary scale
pub fn primary_3() -> impl Signal<Item = &'static str> {
    themed("oklch(90% 0.05 250)", "oklch(30% 0.05 250)")
}

pub fn primary_6() -> impl Signal<Item = &'static str> {
    themed("oklch(65% 0.13 250)", "oklch(55% 0.13 250)")
}

pub fn primary_7() -> impl Signal<Item = &'static str> {
    themed("oklch(55% 0.16 250)", "oklch(65% 0.16 250)")
}

// Neutral scale
pub fn neutral_1() -> impl Signal<Item = &'static str> {
    themed("oklch(99% 0.025 255)", "oklch(12% 0.025 255)")
}

pub fn neutral_2() -> impl Signal<Item = &'static str> {
    themed("oklch(97% 0.025 255)", "oklch(15% 0.025 255)")
}

pub fn neutral_3() -> impl Signal<Item = &'static str> {
    themed("oklch(92% 0.045 255)", "oklch(30% 0.045 255)")
}

pub fn neutral_4() -> impl Signal<Item = &'static str> {
    themed("oklch(90% 0.025 255)", "oklch(22% 0.025 255)")
}

pub fn neutral_8() -> impl Signal<Item = &'static str> {
    themed("oklch(55% 0.025 255)", "oklch(58% 0.025 255)")
}

pub fn neutral_11() -> impl Signal<Item = &'static str> {
    themed("oklch(25% 0.025 255)", "oklch(85% 0.025 255)")
}

pub fn neutral_12() -> impl Signal<Item = &'static str> {
    themed("oklch(15% 0.025 255)", "oklch(95% 0.025 255)")
}

// Error scale
pub fn error_7() -> impl Signal<Item = &'static str> {
    themed("oklch(50% 0.21 30)", "oklch(70% 0.21 30)")
}

// Inverted surface used by floating labels (tooltips)
pub fn inverse_surface() -> impl Signal<Item = &'static str> {
    neutral_12()
}

pub fn inverse_text() -> impl Signal<Item = &'static str> {
    neutral_1()
}

pub fn transparent() -> &'static str {
    "transparent"
}
