// Opacity Token System

pub const OPACITY_NONE: &str = "0"; // Fully transparent
pub const OPACITY_OPAQUE: &str = "1"; // Fully opaque (default)
