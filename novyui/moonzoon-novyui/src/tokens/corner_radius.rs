// Corner Radius Token System

pub const CORNER_RADIUS_4: u32 = 4; // Buttons, tooltips
pub const CORNER_RADIUS_8: u32 = 8; // Previews, popovers
pub const CORNER_RADIUS_MAX: u32 = 9999; // Pills
