// Component Library

pub mod pill_group;
pub mod tooltip;

pub use pill_group::*;
pub use tooltip::*;
