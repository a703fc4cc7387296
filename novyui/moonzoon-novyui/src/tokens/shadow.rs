// Shadow Token System

pub const SHADOW_SIZE_2: &str = "0 2px 8px"; // Medium elevation
pub const SHADOW_COLOR_BLACK_MEDIUM: &str = "rgba(0, 0, 0, 0.15)";

/// CSS `box-shadow` value for floating elements.
pub fn floating_shadow() -> String {
    format!("{SHADOW_SIZE_2} {SHADOW_COLOR_BLACK_MEDIUM}")
}
