use crate::Result;
use crate::nav::NavScroller;
use crate::page::DocumentRef;
use crate::widget::{RequestBackend, ResourceRequestWidget, WidgetOptions};

/// The registered page behaviors, handed back to the host.
///
/// The host owns event delivery: it routes nav-link clicks to `nav.handle_click(..)`
/// and trigger clicks to `widget.handle_click()`.
pub struct PageBehaviors<B> {
	pub nav: NavScroller,
	pub widget: ResourceRequestWidget<B>,
}

/// One-shot registration of every page behavior against the given document.
///
/// Call once during application startup; handler registration is the only side
/// effect. Fails when the widget trigger attach point is missing from the document.
pub fn attach_page_behaviors<B>(
	document: DocumentRef,
	backend: B,
	options: WidgetOptions,
) -> Result<PageBehaviors<B>>
where
	B: RequestBackend,
{
	let nav = NavScroller::register(document.clone());
	let widget = ResourceRequestWidget::register(document, backend, options)?;

	Ok(PageBehaviors { nav, widget })
}
