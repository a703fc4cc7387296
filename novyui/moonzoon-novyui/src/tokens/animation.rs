// Animation Token System

use zoon::*;

pub const DURATION_FAST: u32 = 150;
pub const DURATION_NORMAL: u32 = 300;

pub fn transition_colors() -> impl Style<'static> {
    Transitions::new([
        Transition::property("background-color").duration(DURATION_FAST),
        Transition::property("border-color").duration(DURATION_FAST),
        Transition::property("color").duration(DURATION_FAST),
    ])
}

/// Fade used by elements that stay mounted while hidden.
pub fn transition_opacity() -> impl Style<'static> {
    Transitions::new([
        Transition::property("opacity").duration(DURATION_FAST),
    ])
}
