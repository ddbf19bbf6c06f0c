//! Accumulator for Stimulus `data-*` attributes.
//!
//! [`StimulusAttributes`] collects controller, action, target, and raw
//! attribute registrations for one element, then renders them as an escaped
//! attribute string or as a key/value map. A builder is created empty,
//! mutated through registration calls, and rendered any number of times;
//! rendering never mutates state.

use std::fmt;

use indexmap::IndexMap;

use crate::escaping::escape_html_attr;
use crate::normalize::{normalize_controller_name, normalize_key_name};
use crate::value::AttributeValue;

/// Ordered map of binding keys to typed values (value and param bindings).
pub type ValueMap = IndexMap<String, AttributeValue>;
/// Ordered map of binding keys to CSS class names.
pub type ClassMap = IndexMap<String, String>;
/// Ordered map of outlet names to CSS selectors.
pub type OutletMap = IndexMap<String, String>;

/// One event-to-method binding inside the `data-action` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Action {
	controller_name: String,
	action_name: String,
	event_name: Option<String>,
}

impl Action {
	/// Render `ctrl#method` or `event->ctrl#method`.
	fn expression(&self, escaped: bool) -> String {
		let (controller, action) = if escaped {
			(
				escape_html_attr(&self.controller_name),
				escape_html_attr(&self.action_name),
			)
		} else {
			(self.controller_name.clone(), self.action_name.clone())
		};

		match &self.event_name {
			Some(event) if escaped => {
				format!("{}->{}#{}", escape_html_attr(event), controller, action)
			}
			Some(event) => format!("{}->{}#{}", event, controller, action),
			None => format!("{}#{}", controller, action),
		}
	}
}

/// Accumulates Stimulus bindings for a single element.
///
/// # Examples
///
/// ```
/// use reinhardt_stimulus::StimulusAttributes;
///
/// let mut attributes = StimulusAttributes::new();
/// attributes.add_controller("users", None, None, None);
/// attributes.add_action("users", "refresh", Some("click"), None);
/// attributes.add_target("users", Some("row"));
///
/// assert_eq!(
/// 	attributes.to_attribute_string(),
/// 	r#"data-controller="users" data-action="click->users#refresh" data-users-target="row""#
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct StimulusAttributes {
	controllers: Vec<String>,
	actions: Vec<Action>,
	targets: IndexMap<String, String>,
	attributes: IndexMap<String, String>,
}

impl StimulusAttributes {
	/// Create an empty accumulator.
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a controller together with its value, class, and outlet
	/// bindings.
	///
	/// The controller name is normalized and appended to `data-controller`;
	/// duplicates are preserved in registration order. Value entries holding
	/// [`AttributeValue::Null`] are skipped entirely, which is the supported
	/// way to conditionally omit a value binding. A later registration that
	/// produces the same attribute key overwrites the earlier value.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_stimulus::{StimulusAttributes, ValueMap};
	///
	/// let values = ValueMap::from([("myValue".to_string(), "scalar-value".into())]);
	///
	/// let mut attributes = StimulusAttributes::new();
	/// attributes.add_controller("my-controller", Some(&values), None, None);
	///
	/// assert_eq!(
	/// 	attributes.to_attribute_string(),
	/// 	r#"data-controller="my-controller" data-my-controller-my-value-value="scalar-value""#
	/// );
	/// ```
	pub fn add_controller(
		&mut self,
		controller_name: &str,
		values: Option<&ValueMap>,
		classes: Option<&ClassMap>,
		outlets: Option<&OutletMap>,
	) {
		let controller_name = normalize_controller_name(controller_name);

		if let Some(values) = values {
			for (key, value) in values {
				if value.is_null() {
					continue;
				}
				let key = normalize_key_name(key);
				self.attributes.insert(
					format!("data-{}-{}-value", controller_name, key),
					value.to_string(),
				);
			}
		}

		if let Some(classes) = classes {
			for (key, class_value) in classes {
				let key = normalize_key_name(key);
				self.attributes.insert(
					format!("data-{}-{}-class", controller_name, key),
					class_value.clone(),
				);
			}
		}

		if let Some(outlets) = outlets {
			for (outlet, selector) in outlets {
				// Outlet names follow controller naming, not key naming.
				let outlet = normalize_controller_name(outlet);
				self.attributes.insert(
					format!("data-{}-{}-outlet", controller_name, outlet),
					selector.clone(),
				);
			}
		}

		self.controllers.push(controller_name);
	}

	/// Register an action binding, optionally scoped to an event.
	///
	/// The action name is stored verbatim; it is expected to already be a
	/// valid method-style identifier. Parameters land as
	/// `data-<ctrl>-<key>-param` attributes with their keys normalized the
	/// same way value keys are.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_stimulus::StimulusAttributes;
	///
	/// let mut attributes = StimulusAttributes::new();
	/// attributes.add_action("my-controller", "onClick", None, None);
	///
	/// assert_eq!(
	/// 	attributes.to_attribute_string(),
	/// 	r##"data-action="my-controller#onClick""##
	/// );
	/// ```
	pub fn add_action(
		&mut self,
		controller_name: &str,
		action_name: &str,
		event_name: Option<&str>,
		parameters: Option<&ValueMap>,
	) {
		let controller_name = normalize_controller_name(controller_name);

		if let Some(parameters) = parameters {
			for (name, value) in parameters {
				let key = normalize_key_name(name);
				self.attributes.insert(
					format!("data-{}-{}-param", controller_name, key),
					value.to_string(),
				);
			}
		}

		self.actions.push(Action {
			controller_name,
			action_name: action_name.to_string(),
			event_name: event_name.map(str::to_string),
		});
	}

	/// Register target names for a controller.
	///
	/// Does nothing when `target_names` is `None`. The string is stored
	/// as-is (space-separated names); a later call for the same controller
	/// replaces the earlier one.
	pub fn add_target(&mut self, controller_name: &str, target_names: Option<&str>) {
		if let Some(target_names) = target_names {
			let controller_name = normalize_controller_name(controller_name);
			self.targets.insert(
				format!("data-{}-target", controller_name),
				target_names.to_string(),
			);
		}
	}

	/// Register an arbitrary attribute under a caller-supplied name.
	///
	/// The name is used verbatim; the value is escaped at render time like
	/// every other attribute value.
	pub fn add_attribute(&mut self, name: &str, value: &str) {
		self.attributes.insert(name.to_string(), value.to_string());
	}

	/// Render the accumulated state as an escaped, space-joined attribute
	/// string ready to splice inside an opening tag.
	///
	/// Order is fixed: `data-controller`, `data-action`, target attributes
	/// in insertion order, then remaining attributes in insertion order.
	/// Attribute values are escaped; attribute names are not, since they
	/// are constrained to a safe charset by construction.
	pub fn to_attribute_string(&self) -> String {
		let mut parts: Vec<String> = Vec::new();

		if !self.controllers.is_empty() {
			let controllers = self
				.controllers
				.iter()
				.map(|name| escape_html_attr(name))
				.collect::<Vec<_>>()
				.join(" ");
			parts.push(format!(r#"data-controller="{}""#, controllers));
		}

		if !self.actions.is_empty() {
			let actions = self
				.actions
				.iter()
				.map(|action| action.expression(true))
				.collect::<Vec<_>>()
				.join(" ");
			parts.push(format!(r#"data-action="{}""#, actions));
		}

		for (key, target_names) in &self.targets {
			// Each target name is escaped individually, then rejoined.
			let targets = target_names
				.split(' ')
				.map(escape_html_attr)
				.collect::<Vec<_>>()
				.join(" ");
			parts.push(format!(r#"{}="{}""#, key, targets));
		}

		for (key, value) in &self.attributes {
			parts.push(format!(r#"{}="{}""#, key, escape_html_attr(value)));
		}

		parts.join(" ")
	}

	/// Render the accumulated state as an unescaped key/value map.
	///
	/// `data-controller` and `data-action` are synthesized the same way as
	/// in [`to_attribute_string`](Self::to_attribute_string); targets and
	/// remaining attributes follow with raw values.
	pub fn to_map(&self) -> IndexMap<String, String> {
		let mut map = IndexMap::new();

		if !self.controllers.is_empty() {
			map.insert("data-controller".to_string(), self.controllers.join(" "));
		}

		if !self.actions.is_empty() {
			let actions = self
				.actions
				.iter()
				.map(|action| action.expression(false))
				.collect::<Vec<_>>()
				.join(" ");
			map.insert("data-action".to_string(), actions);
		}

		for (key, value) in &self.targets {
			map.insert(key.clone(), value.clone());
		}

		for (key, value) in &self.attributes {
			map.insert(key.clone(), value.clone());
		}

		map
	}

	/// Render the accumulated state as a key/value map with every value
	/// escaped.
	pub fn to_escaped_map(&self) -> IndexMap<String, String> {
		self.to_map()
			.into_iter()
			.map(|(key, value)| (key, escape_html_attr(&value)))
			.collect()
	}
}

impl fmt::Display for StimulusAttributes {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_attribute_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_builder_renders_empty_string() {
		let attributes = StimulusAttributes::new();
		assert_eq!(attributes.to_attribute_string(), "");
		assert!(attributes.to_map().is_empty());
	}

	#[test]
	fn test_duplicate_controllers_preserved() {
		let mut attributes = StimulusAttributes::new();
		attributes.add_controller("chart", None, None, None);
		attributes.add_controller("chart", None, None, None);
		assert_eq!(
			attributes.to_attribute_string(),
			r#"data-controller="chart chart""#
		);
	}

	#[test]
	fn test_target_last_write_wins() {
		let mut attributes = StimulusAttributes::new();
		attributes.add_target("list", Some("row"));
		attributes.add_target("list", Some("row header"));
		assert_eq!(
			attributes.to_attribute_string(),
			r#"data-list-target="row header""#
		);
	}

	#[test]
	fn test_display_matches_attribute_string() {
		let mut attributes = StimulusAttributes::new();
		attributes.add_controller("modal", None, None, None);
		assert_eq!(attributes.to_string(), attributes.to_attribute_string());
	}

	#[test]
	fn test_rendering_is_idempotent() {
		let mut attributes = StimulusAttributes::new();
		attributes.add_controller("modal", None, None, None);
		attributes.add_action("modal", "open", Some("click"), None);
		let first = attributes.to_attribute_string();
		let second = attributes.to_attribute_string();
		assert_eq!(first, second);
		assert_eq!(attributes.to_map(), attributes.to_map());
	}
}
