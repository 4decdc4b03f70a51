//! Scripted `RequestBackend` double: fixed outcome, optional delay, call capture.

use pagebind::webc::WebResponse;
use pagebind::widget::{RequestBackend, ResourceRequest};
use serde_json::Value;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub enum MockOutcome {
	Body(Value),
	TransportFail(String),
}

pub struct MockBackend {
	outcome: MockOutcome,
	delay: Duration,
	request_count: AtomicUsize,
	last_request: Mutex<Option<ResourceRequest>>,
}

/// Constructors
impl MockBackend {
	pub fn with_body(body: Value) -> Self {
		Self {
			outcome: MockOutcome::Body(body),
			delay: Duration::ZERO,
			request_count: AtomicUsize::new(0),
			last_request: Mutex::new(None),
		}
	}

	pub fn with_failure(message: &str) -> Self {
		Self {
			outcome: MockOutcome::TransportFail(message.to_string()),
			delay: Duration::ZERO,
			request_count: AtomicUsize::new(0),
			last_request: Mutex::new(None),
		}
	}

	pub fn with_delay(mut self, delay: Duration) -> Self {
		self.delay = delay;
		self
	}
}

/// Test accessors
impl MockBackend {
	pub fn request_count(&self) -> usize {
		self.request_count.load(Ordering::SeqCst)
	}

	pub fn last_request(&self) -> Option<ResourceRequest> {
		self.last_request.lock().unwrap().clone()
	}
}

impl RequestBackend for MockBackend {
	async fn post_resource(&self, request: &ResourceRequest) -> pagebind::Result<WebResponse> {
		self.request_count.fetch_add(1, Ordering::SeqCst);
		*self.last_request.lock().unwrap() = Some(request.clone());

		if !self.delay.is_zero() {
			tokio::time::sleep(self.delay).await;
		}

		match &self.outcome {
			MockOutcome::Body(body) => Ok(WebResponse::ok(body.clone())),
			MockOutcome::TransportFail(message) => Err(pagebind::Error::custom(message)),
		}
	}
}
