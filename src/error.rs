//! Main Crate Error

use crate::webc;
use derive_more::From;
use serde_json::Value;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, From)]
pub enum Error {
	// -- Registration
	/// A required attach point is missing from the document.
	AttachPointNotFound { selector: &'static str },

	// -- Resource Request
	/// The backend response parsed as JSON but carried no `statusMessage` field.
	StatusMessageNotFound { body: Value },

	// -- Modules
	#[from]
	Webc(webc::Error),

	// -- Externals
	#[from]
	SerdeJson(serde_json::Error),

	// -- Custom (for backend implementations outside this crate)
	Custom(String),
}

/// Custom constructors
impl Error {
	pub fn custom(val: impl std::fmt::Display) -> Self {
		Self::Custom(val.to_string())
	}
}

impl From<&str> for Error {
	fn from(val: &str) -> Self {
		Self::Custom(val.to_string())
	}
}

impl From<String> for Error {
	fn from(val: String) -> Self {
		Self::Custom(val)
	}
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
