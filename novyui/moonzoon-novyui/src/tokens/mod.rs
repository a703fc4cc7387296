// Design Token System
// Colors are theme signals; sizes are plain constants in pixels

pub mod animation;
pub mod color;
pub mod corner_radius;
pub mod focus;
pub mod opacity;
pub mod shadow;
pub mod spacing;
pub mod theme;
pub mod typography;

pub use animation::*;
pub use color::*;
pub use corner_radius::*;
pub use focus::*;
pub use opacity::*;
pub use shadow::*;
pub use spacing::*;
pub use theme::*;
pub use typography::*;
