//! The `pagebind` crate binds two page behaviors to a host-provided document:
//! - `NavScroller` — smooth-scroll navigation links driven by a `data-target` attribute,
//! - `ResourceRequestWidget` — a guarded "request resource" button that posts a JSON payload
//!   to a backend endpoint and renders the returned status message.
//!
//! The crate never queries a real document. The host hands in `PageDocument` / `ElementHandle`
//! implementations at registration time, and routes click events to the returned components.
//! This keeps the behaviors testable with in-memory doubles and keeps the crate agnostic of
//! whatever renders the page.
//!
//! Registration happens once, at application startup, through [`attach_page_behaviors`].

// region:    --- Modules

mod error;
mod setup;

pub mod nav;
pub mod page;
pub mod webc;
pub mod widget;

pub use error::{Error, Result};
pub use setup::*;

// endregion: --- Modules
