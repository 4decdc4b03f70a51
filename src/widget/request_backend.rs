use crate::Result;
use crate::webc::{Endpoint, WebClient, WebResponse};
use crate::widget::ResourceRequest;
use futures::Future;

/// Path of the resource endpoint, relative to the backend base URL.
pub const RESOURCE_ENDPOINT_PATH: &str = "/api/auth-resource";

/// Transport seam of the resource request widget.
///
/// The widget awaits the returned future inline while its timer tasks run beside it,
/// so the future must be `Send`. Test doubles implement this trait to script
/// responses, delays, and failures.
pub trait RequestBackend: Send + Sync {
	/// POST the payload and hand back the parsed response.
	fn post_resource(&self, request: &ResourceRequest) -> impl Future<Output = Result<WebResponse>> + Send;
}

/// Shared backends work as-is (the widget holds its backend by value).
impl<B: RequestBackend> RequestBackend for std::sync::Arc<B> {
	fn post_resource(&self, request: &ResourceRequest) -> impl Future<Output = Result<WebResponse>> + Send {
		(**self).post_resource(request)
	}
}

/// `RequestBackend` over the crate's web transport.
#[derive(Debug, Clone)]
pub struct ResourceBackend {
	web_client: WebClient,
	endpoint: Endpoint,
}

/// Constructors
impl ResourceBackend {
	#[must_use]
	pub fn new(endpoint: Endpoint) -> Self {
		Self {
			web_client: WebClient::default(),
			endpoint,
		}
	}

	/// Same backend, but over the given web client (shared connection pool, custom TLS).
	#[must_use]
	pub fn with_web_client(mut self, web_client: WebClient) -> Self {
		self.web_client = web_client;
		self
	}
}

/// Getters
impl ResourceBackend {
	#[must_use]
	pub fn endpoint(&self) -> &Endpoint {
		&self.endpoint
	}
}

impl RequestBackend for ResourceBackend {
	async fn post_resource(&self, request: &ResourceRequest) -> Result<WebResponse> {
		let url = self.endpoint.join(RESOURCE_ENDPOINT_PATH);
		let payload = serde_json::to_value(request)?;

		let response = self.web_client.do_post(&url, &payload).await?;

		Ok(response)
	}
}
