//! The page module contains the host-facing handle traits.
//!
//! The host owns the actual document (a browser DOM, a native view tree, an in-memory
//! double); the crate only sees it through `PageDocument` and `ElementHandle`.

// region:    --- Modules

mod document;
mod element;

// -- Flatten
pub use document::*;
pub use element::*;

// endregion: --- Modules
