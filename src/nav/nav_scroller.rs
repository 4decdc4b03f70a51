use crate::page::{DocumentRef, ElementHandle, ElementRef, ScrollBehavior};

/// Selector of the clickable nav links (direct children of the nav-links container
/// that carry a target attribute).
pub const NAV_LINKS_SELECTOR: &str = ".nav-links > div[data-target]";

/// Attribute naming the scroll destination of a nav link.
pub const NAV_TARGET_ATTR: &str = "data-target";

/// Smooth-scroll navigation over the document's nav links.
///
/// A fire-and-forget UI affordance: no error signaling, no retry, no cancellation.
/// A link with no target attribute, or a target selector that matches nothing, is a
/// silent no-op.
pub struct NavScroller {
	document: DocumentRef,
	links: Vec<ElementRef>,
}

/// Constructors
impl NavScroller {
	/// Gather the nav links present in the document.
	/// Registration is the only side effect; the host routes clicks back through
	/// [`NavScroller::handle_click`].
	pub fn register(document: DocumentRef) -> Self {
		let links = document.query_all(NAV_LINKS_SELECTOR);
		tracing::debug!("nav scroller registered ({} links)", links.len());
		Self { document, links }
	}
}

/// Getters
impl NavScroller {
	/// The elements gathered at registration, in document order.
	#[must_use]
	pub fn links(&self) -> &[ElementRef] {
		&self.links
	}
}

/// Event handlers
impl NavScroller {
	/// Click handler for a single nav link.
	pub fn handle_click(&self, link: &dyn ElementHandle) {
		let Some(target) = link.attribute(NAV_TARGET_ATTR) else {
			return;
		};

		if let Some(destination) = self.document.query(&target) {
			destination.scroll_into_view(ScrollBehavior::Smooth);
		}
	}
}
