//! One-shot helpers for the three binding kinds.
//!
//! Each function builds a fresh [`StimulusAttributes`], performs exactly one
//! registration, and renders the escaped attribute string. They are the
//! Rust-side equivalents of the template functions and the recommended entry
//! points when only a single binding is needed.

use crate::attributes::{ClassMap, OutletMap, StimulusAttributes, ValueMap};

/// Render a `data-controller` attribute string with optional value, class,
/// and outlet bindings.
///
/// # Examples
///
/// ```
/// use reinhardt_stimulus::{ValueMap, stimulus_controller};
///
/// assert_eq!(
/// 	stimulus_controller("my-controller", None, None, None),
/// 	r#"data-controller="my-controller""#
/// );
///
/// let values = ValueMap::from([("myValue".to_string(), "scalar-value".into())]);
/// assert_eq!(
/// 	stimulus_controller("my-controller", Some(&values), None, None),
/// 	r#"data-controller="my-controller" data-my-controller-my-value-value="scalar-value""#
/// );
/// ```
pub fn stimulus_controller(
	controller_name: &str,
	values: Option<&ValueMap>,
	classes: Option<&ClassMap>,
	outlets: Option<&OutletMap>,
) -> String {
	let mut attributes = StimulusAttributes::new();
	attributes.add_controller(controller_name, values, classes, outlets);
	attributes.to_attribute_string()
}

/// Render a `data-action` attribute string with optional event name and
/// action parameters.
///
/// # Examples
///
/// ```
/// use reinhardt_stimulus::stimulus_action;
///
/// assert_eq!(
/// 	stimulus_action("my-controller", "onClick", None, None),
/// 	r#"data-action="my-controller#onClick""#
/// );
/// assert_eq!(
/// 	stimulus_action("my-controller", "onClick", Some("click"), None),
/// 	r#"data-action="click->my-controller#onClick""#
/// );
/// ```
pub fn stimulus_action(
	controller_name: &str,
	action_name: &str,
	event_name: Option<&str>,
	parameters: Option<&ValueMap>,
) -> String {
	let mut attributes = StimulusAttributes::new();
	attributes.add_action(controller_name, action_name, event_name, parameters);
	attributes.to_attribute_string()
}

/// Render a target attribute string (`data-<controller>-target`).
///
/// Returns an empty string when `target_names` is `None`.
///
/// # Examples
///
/// ```
/// use reinhardt_stimulus::stimulus_target;
///
/// assert_eq!(
/// 	stimulus_target("my-controller", Some("myTarget")),
/// 	r#"data-my-controller-target="myTarget""#
/// );
/// assert_eq!(stimulus_target("my-controller", None), "");
/// ```
pub fn stimulus_target(controller_name: &str, target_names: Option<&str>) -> String {
	let mut attributes = StimulusAttributes::new();
	attributes.add_target(controller_name, target_names);
	attributes.to_attribute_string()
}
