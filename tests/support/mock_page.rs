//! In-memory doubles for the page handle traits.
//! Selectors are treated as plain keys; the document does no CSS matching.

use pagebind::page::{ElementHandle, ElementRef, PageDocument, ScrollBehavior};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// region:    --- MockElement

#[derive(Default)]
pub struct MockElement {
	attributes: Mutex<HashMap<String, String>>,
	input_value: Mutex<String>,
	text: Mutex<String>,
	markers: Mutex<HashSet<String>>,
	scroll_calls: AtomicUsize,
}

/// Constructors
impl MockElement {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn new_with_attribute(name: &str, value: &str) -> Arc<Self> {
		let element = Self::default();
		element.attributes.lock().unwrap().insert(name.to_string(), value.to_string());
		Arc::new(element)
	}

	pub fn new_with_value(value: &str) -> Arc<Self> {
		let element = Self::default();
		*element.input_value.lock().unwrap() = value.to_string();
		Arc::new(element)
	}
}

/// Test accessors
impl MockElement {
	pub fn set_input_value(&self, value: &str) {
		*self.input_value.lock().unwrap() = value.to_string();
	}

	pub fn text(&self) -> String {
		self.text.lock().unwrap().clone()
	}

	pub fn scroll_count(&self) -> usize {
		self.scroll_calls.load(Ordering::SeqCst)
	}
}

impl ElementHandle for MockElement {
	fn attribute(&self, name: &str) -> Option<String> {
		self.attributes.lock().unwrap().get(name).cloned()
	}

	fn input_value(&self) -> String {
		self.input_value.lock().unwrap().clone()
	}

	fn set_text(&self, text: &str) {
		*self.text.lock().unwrap() = text.to_string();
	}

	fn has_marker(&self, marker: &str) -> bool {
		self.markers.lock().unwrap().contains(marker)
	}

	fn add_marker(&self, marker: &str) {
		self.markers.lock().unwrap().insert(marker.to_string());
	}

	fn remove_marker(&self, marker: &str) {
		self.markers.lock().unwrap().remove(marker);
	}

	fn scroll_into_view(&self, _behavior: ScrollBehavior) {
		self.scroll_calls.fetch_add(1, Ordering::SeqCst);
	}
}

// endregion: --- MockElement

// region:    --- MockPage

#[derive(Default)]
pub struct MockPage {
	elements: Mutex<HashMap<String, Vec<Arc<MockElement>>>>,
}

impl MockPage {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn insert(&self, selector: &str, element: &Arc<MockElement>) {
		self.elements
			.lock()
			.unwrap()
			.entry(selector.to_string())
			.or_default()
			.push(element.clone());
	}
}

impl PageDocument for MockPage {
	fn query(&self, selector: &str) -> Option<ElementRef> {
		self.elements
			.lock()
			.unwrap()
			.get(selector)
			.and_then(|list| list.first())
			.map(|element| element.clone() as ElementRef)
	}

	fn query_all(&self, selector: &str) -> Vec<ElementRef> {
		self.elements
			.lock()
			.unwrap()
			.get(selector)
			.map(|list| list.iter().map(|element| element.clone() as ElementRef).collect())
			.unwrap_or_default()
	}
}

// endregion: --- MockPage
