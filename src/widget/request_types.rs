use serde::{Deserialize, Serialize};

/// The JSON payload posted to the resource endpoint.
/// Built fresh on each click-cycle and discarded once the request settles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRequest {
	pub resource_type: String,
	pub resource_item: String,
	pub resource_code: String,
}

/// Constructors
impl ResourceRequest {
	pub fn new(
		resource_type: impl Into<String>,
		resource_item: impl Into<String>,
		resource_code: impl Into<String>,
	) -> Self {
		Self {
			resource_type: resource_type.into(),
			resource_item: resource_item.into(),
			resource_code: resource_code.into(),
		}
	}
}

/// Validation
impl ResourceRequest {
	/// True when all three fields carry a non-empty value.
	#[must_use]
	pub fn is_complete(&self) -> bool {
		!self.resource_type.is_empty() && !self.resource_item.is_empty() && !self.resource_code.is_empty()
	}
}

// region:    --- Tests


// endregion: --- Tests
