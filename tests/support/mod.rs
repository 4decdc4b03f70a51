//! Support utilities for the tests.
//! Note: Must be imported in each test file.

#![allow(unused)] // For test support

// region:    --- Modules

mod mock_backend;
mod mock_page;

pub use mock_backend::*;
pub use mock_page::*;
pub use seeders::*;

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

// endregion: --- Modules
