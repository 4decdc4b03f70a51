use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared handle to a single page element.
/// Cheap to clone; timer tasks hold clones across await points.
pub type ElementRef = Arc<dyn ElementHandle>;

/// How a requested scroll should be animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollBehavior {
	/// Animated, non-instantaneous scroll.
	Smooth,
	/// Jump directly to the destination.
	Instant,
}

/// Host-provided view over one element of the page document.
///
/// All methods are synchronous and must be safe to call from any task; the host is
/// responsible for marshaling onto its own UI thread if it has one.
pub trait ElementHandle: Send + Sync {
	/// The value of the given attribute, or `None` when the attribute is absent.
	fn attribute(&self, name: &str) -> Option<String>;

	/// Current value of an input element (empty string when the element holds none).
	fn input_value(&self) -> String;

	/// Replace the element's visible text content.
	fn set_text(&self, text: &str);

	// -- Markers (the class-list analog)

	fn has_marker(&self, marker: &str) -> bool;
	fn add_marker(&self, marker: &str);
	fn remove_marker(&self, marker: &str);

	/// Ask the host to bring this element into view.
	fn scroll_into_view(&self, behavior: ScrollBehavior);
}
