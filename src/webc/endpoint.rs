use std::sync::Arc;

/// The base URL of the backing service.
/// Designed to be efficiently clonable.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Endpoint {
	inner: Arc<str>,
}

/// Constructors
impl Endpoint {
	#[must_use]
	pub fn from_static(url: &'static str) -> Self {
		Self { inner: Arc::from(url) }
	}

	pub fn from_owned(url: impl Into<Arc<str>>) -> Self {
		Self { inner: url.into() }
	}
}

/// Getters
impl Endpoint {
	#[must_use]
	pub fn base_url(&self) -> &str {
		&self.inner
	}

	/// Join a path to the base URL without doubling or dropping the separator.
	#[must_use]
	pub fn join(&self, path: &str) -> String {
		let base = self.inner.trim_end_matches('/');
		let path = path.trim_start_matches('/');
		format!("{base}/{path}")
	}
}

// region:    --- Tests


// endregion: --- Tests
