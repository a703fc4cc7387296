// Spacing Token System

/// 0px spacing
pub const SPACING_0: u32 = 0;

/// 4px spacing
pub const SPACING_4: u32 = 4;

/// 6px spacing
pub const SPACING_6: u32 = 6;

/// 8px spacing, also the anchor-to-tooltip gap
pub const SPACING_8: u32 = 8;

/// 12px spacing
pub const SPACING_12: u32 = 12;

/// 16px spacing
pub const SPACING_16: u32 = 16;

/// 20px spacing
pub const SPACING_20: u32 = 20;
