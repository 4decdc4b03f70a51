//! The widget module contains the resource request widget and its supporting
//! constructs (payload types, timing options, backend seam).

// region:    --- Modules

mod request_backend;
mod request_types;
mod request_widget;
mod widget_options;

// -- Flatten
pub use request_backend::*;
pub use request_types::*;
pub use request_widget::*;
pub use widget_options::*;

// endregion: --- Modules
