use crate::page::ElementRef;
use std::sync::Arc;

/// Shared handle to the page document.
pub type DocumentRef = Arc<dyn PageDocument>;

/// Host-provided view over the page document.
///
/// Selector strings are opaque to this crate; the host's document decides what they
/// mean (CSS selectors in a browser host, plain keys in a test double).
pub trait PageDocument: Send + Sync {
	/// The first element matching the selector, or `None`.
	fn query(&self, selector: &str) -> Option<ElementRef>;

	/// All elements matching the selector, in document order.
	fn query_all(&self, selector: &str) -> Vec<ElementRef>;
}
