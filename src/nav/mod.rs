//! The nav module contains the smooth-scroll navigation behavior.

// region:    --- Modules

mod nav_scroller;

// -- Flatten
pub use nav_scroller::*;

// endregion: --- Modules
