use crate::webc::{Error, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// Thin wrapper over a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct WebClient {
	reqwest_client: Client,
}

/// The parsed response of a `WebClient` call.
#[derive(Debug, Clone)]
pub struct WebResponse {
	pub status: StatusCode,
	pub body: Value,
}

/// Constructors
impl WebResponse {
	/// A `200 OK` response with the given body (mostly for test doubles, since the
	/// behaviors in this crate do not branch on the status code).
	#[must_use]
	pub fn ok(body: Value) -> Self {
		Self {
			status: StatusCode::OK,
			body,
		}
	}
}

/// Constructors
impl WebClient {
	#[must_use]
	pub fn from_reqwest_client(reqwest_client: Client) -> Self {
		Self { reqwest_client }
	}
}

/// Web methods
impl WebClient {
	/// POST a JSON payload to the given URL and parse the response body as JSON.
	///
	/// Note: The payload travels as a pre-serialized body with no explicit
	///       content-type header; the transport defaults apply.
	pub async fn do_post(&self, url: &str, payload: &Value) -> Result<WebResponse> {
		let reqwest_builder = self.reqwest_client.post(url).body(payload.to_string());

		let response = reqwest_builder.send().await?;
		let status = response.status();
		let content = response.text().await?;

		let body: Value = serde_json::from_str(&content).map_err(|_| Error::ResponseBodyNotJson {
			status,
			body: content,
		})?;

		Ok(WebResponse { status, body })
	}
}
