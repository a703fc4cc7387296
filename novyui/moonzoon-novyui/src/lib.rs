//! # MoonZoon NovyUI Component Library
//!
//! Design tokens and components for the text sets editor.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use moonzoon_novyui::*;
//! use zoon::*;
//!
//! fn bold_button() -> impl Element {
//!     tooltip(Button::new().label("B"))
//!         .title("Bold")
//!         .shortcut("Ctrl+B")
//!         .placement(Placement::Top)
//!         .has_tail(true)
//!         .build()
//! }
//! ```
//!
//! ## Components
//!
//! - **Tooltip**: Hover/focus label with twelve placements and an optional tail
//! - **PillGroup**: Exclusive single-select pills with deselect on second press
//! - **DomListener**: Raw DOM listener guard removed on drop
//!
//! ## Design Tokens
//!
//! - **Colors**: Light/dark theme signals
//! - **Spacing**, **Typography**, **Corner Radius**, **Shadows**, **Focus**, **Animation**

pub mod components;
pub mod dom_listener;
pub mod tokens;

pub use components::*;
pub use dom_listener::DomListener;
pub use tokens::*;

pub use zoon;
