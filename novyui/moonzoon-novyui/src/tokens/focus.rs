// Focus Ring Token System

pub const FOCUS_RING_WIDTH: u32 = 2;
pub const FOCUS_RING_COLOR_PRIMARY: &str = "oklch(70% 0.15 250)";
pub const FOCUS_RING_SHADOW_PRIMARY: &str = "0 0 0 2px oklch(70% 0.15 250)";
