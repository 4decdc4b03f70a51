//! `WidgetOptions` carries the timing knobs of the resource request widget.
//! - The defaults preserve the page behavior (15s unstick, 5s settle),
//! - tests and embedding hosts can compress them.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetOptions {
	/// How long the loading marker may persist with no settlement before the safety
	/// timer clears it. The in-flight request itself is never cancelled.
	pub safety_unstick_timeout: Duration,

	/// Delay between request settlement and the loading marker being cleared, leaving
	/// any visual transition time to finish before the trigger is interactive again.
	pub settle_delay: Duration,
}

impl Default for WidgetOptions {
	fn default() -> Self {
		Self {
			safety_unstick_timeout: Duration::from_secs(15),
			settle_delay: Duration::from_secs(5),
		}
	}
}

/// Chainable Setters
impl WidgetOptions {
	#[must_use]
	pub fn with_safety_unstick_timeout(mut self, timeout: Duration) -> Self {
		self.safety_unstick_timeout = timeout;
		self
	}

	#[must_use]
	pub fn with_settle_delay(mut self, delay: Duration) -> Self {
		self.settle_delay = delay;
		self
	}
}
