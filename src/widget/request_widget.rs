use crate::page::{DocumentRef, ElementRef};
use crate::widget::{RequestBackend, ResourceRequest, WidgetOptions};
use crate::{Error, Result};
use tokio::task::JoinHandle;
use value_ext::JsonValueExt;

/// Marker carried by the trigger element while a click-cycle is in flight.
/// Doubles as the re-entry guard and the hook for the host's loading visuals.
pub const LOADING_MARKER: &str = "loading";

// -- Attach point selectors
pub const TRIGGER_SELECTOR: &str = "#request-resource";
pub const TYPE_FIELD_SELECTOR: &str = "#resource-type";
pub const ITEM_FIELD_SELECTOR: &str = "#resource-item";
pub const CODE_FIELD_SELECTOR: &str = "#resource-code";
pub const STATUS_SELECTOR: &str = "#resource-status";

/// The "request resource" widget.
///
/// One click-cycle: guard on the loading marker, read and validate the three fields,
/// mark the trigger as loading, post the payload, render the returned `statusMessage`,
/// and clear the loading state 5s after settlement. A 15s safety timer clears the
/// visual state if the request stalls; the request itself is never cancelled, and its
/// eventual response is still rendered.
///
/// Transport failures, non-JSON bodies, and a missing `statusMessage` surface as `Err`
/// from [`ResourceRequestWidget::handle_click`]; the status element is left untouched
/// and the settle cleanup still runs.
pub struct ResourceRequestWidget<B> {
	document: DocumentRef,
	trigger: ElementRef,
	backend: B,
	options: WidgetOptions,
}

/// Constructors
impl<B> ResourceRequestWidget<B>
where
	B: RequestBackend,
{
	/// Resolve the trigger element and register the widget.
	///
	/// Field and status elements are resolved per click, so a page that fills them in
	/// after startup still works.
	pub fn register(document: DocumentRef, backend: B, options: WidgetOptions) -> Result<Self> {
		let trigger = document.query(TRIGGER_SELECTOR).ok_or(Error::AttachPointNotFound {
			selector: TRIGGER_SELECTOR,
		})?;

		tracing::debug!("resource request widget registered");

		Ok(Self {
			document,
			trigger,
			backend,
			options,
		})
	}
}

/// Getters
impl<B> ResourceRequestWidget<B> {
	#[must_use]
	pub fn trigger(&self) -> &ElementRef {
		&self.trigger
	}

	#[must_use]
	pub fn options(&self) -> &WidgetOptions {
		&self.options
	}
}

/// Event handlers
impl<B> ResourceRequestWidget<B>
where
	B: RequestBackend,
{
	/// Click handler for the trigger element.
	pub async fn handle_click(&self) -> Result<()> {
		// -- Guard against re-entry while a cycle is in flight
		if self.trigger.has_marker(LOADING_MARKER) {
			return Ok(());
		}

		// -- Read the fields (incomplete input is a silent no-op, by contract)
		let Some(request) = self.read_request()? else {
			return Ok(());
		};

		// -- Enter the loading state
		self.trigger.add_marker(LOADING_MARKER);
		let safety_timer = self.spawn_safety_unstick();

		// -- Execute, then schedule the settle cleanup regardless of outcome
		let outcome = self.exec_request(&request).await;
		self.spawn_settle_cleanup(safety_timer);

		outcome
	}
}

/// Click-cycle steps
impl<B> ResourceRequestWidget<B>
where
	B: RequestBackend,
{
	/// Read the three field values; `None` when any is empty.
	fn read_request(&self) -> Result<Option<ResourceRequest>> {
		let request = ResourceRequest {
			resource_type: self.field_value(TYPE_FIELD_SELECTOR)?,
			resource_item: self.field_value(ITEM_FIELD_SELECTOR)?,
			resource_code: self.field_value(CODE_FIELD_SELECTOR)?,
		};

		Ok(request.is_complete().then_some(request))
	}

	fn field_value(&self, selector: &'static str) -> Result<String> {
		let field = self
			.document
			.query(selector)
			.ok_or(Error::AttachPointNotFound { selector })?;
		Ok(field.input_value())
	}

	/// Post the payload and render the returned status message.
	async fn exec_request(&self, request: &ResourceRequest) -> Result<()> {
		tracing::debug!(resource_type = %request.resource_type, "posting resource request");

		let response = self.backend.post_resource(request).await?;

		let mut body = response.body;
		let Ok(status_message) = body.x_take::<String>("statusMessage") else {
			return Err(Error::StatusMessageNotFound { body });
		};

		let status = self.document.query(STATUS_SELECTOR).ok_or(Error::AttachPointNotFound {
			selector: STATUS_SELECTOR,
		})?;
		status.set_text(&status_message);

		Ok(())
	}

	/// Clears the visual state if the cycle stalls. Never touches the request.
	fn spawn_safety_unstick(&self) -> JoinHandle<()> {
		let trigger = self.trigger.clone();
		let timeout = self.options.safety_unstick_timeout;

		tokio::spawn(async move {
			tokio::time::sleep(timeout).await;
			tracing::warn!("resource request unsettled after {timeout:?}, clearing the loading state");
			trigger.remove_marker(LOADING_MARKER);
		})
	}

	/// Settle cleanup: cancel the safety timer and clear the loading state, after the
	/// settle delay. Scheduled on every settlement, success or failure.
	fn spawn_settle_cleanup(&self, safety_timer: JoinHandle<()>) {
		let trigger = self.trigger.clone();
		let delay = self.options.settle_delay;

		tokio::spawn(async move {
			tokio::time::sleep(delay).await;
			safety_timer.abort();
			trigger.remove_marker(LOADING_MARKER);
		});
	}
}
