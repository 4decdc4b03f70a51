//! The webc module contains the crate's web transport over `reqwest`.

// region:    --- Modules

mod endpoint;
mod error;
mod web_client;

// -- Flatten
pub use endpoint::*;
pub use error::{Error, Result};
pub use web_client::*;

// endregion: --- Modules
