//! Tera template functions for Stimulus bindings.
//!
//! Registers `stimulus_controller`, `stimulus_action`, and `stimulus_target`
//! as Tera functions so templates can wire markup to controllers without
//! hand-assembling `data-*` attributes. The returned string is already
//! attribute-escaped; pipe it through `safe` in autoescaped templates.
//!
//! # Example
//!
//! ```tera
//! <div {{ stimulus_controller(controller="chart", values=chart_values) | safe }}>
//! 	<canvas {{ stimulus_target(controller="chart", targets="canvas") | safe }}></canvas>
//! </div>
//! ```

use std::collections::HashMap;

use tera::{Result as TeraResult, Tera, Value};

use crate::attributes::{ClassMap, ValueMap};
use crate::error::{StimulusError, StimulusResult};
use crate::shortcuts;
use crate::value::AttributeValue;

/// Register the three Stimulus functions on a Tera instance.
///
/// # Examples
///
/// ```
/// use tera::Tera;
///
/// let mut tera = Tera::default();
/// reinhardt_stimulus::register_functions(&mut tera);
/// ```
pub fn register_functions(tera: &mut Tera) {
	tera.register_function("stimulus_controller", stimulus_controller_function);
	tera.register_function("stimulus_action", stimulus_action_function);
	tera.register_function("stimulus_target", stimulus_target_function);
	tracing::debug!("registered stimulus template functions");
}

/// Tera function `stimulus_controller(controller=..., values=..., classes=..., outlets=...)`.
pub fn stimulus_controller_function(args: &HashMap<String, Value>) -> TeraResult<Value> {
	render_controller(args)
		.map(Value::String)
		.map_err(into_tera_error)
}

/// Tera function `stimulus_action(controller=..., action=..., event=..., parameters=...)`.
pub fn stimulus_action_function(args: &HashMap<String, Value>) -> TeraResult<Value> {
	render_action(args)
		.map(Value::String)
		.map_err(into_tera_error)
}

/// Tera function `stimulus_target(controller=..., targets=...)`.
pub fn stimulus_target_function(args: &HashMap<String, Value>) -> TeraResult<Value> {
	render_target(args)
		.map(Value::String)
		.map_err(into_tera_error)
}

fn render_controller(args: &HashMap<String, Value>) -> StimulusResult<String> {
	const FUNCTION: &str = "stimulus_controller";

	let controller = required_str(args, FUNCTION, "controller")?;
	let values = value_map(args, FUNCTION, "values")?;
	let classes = string_map(args, FUNCTION, "classes")?;
	let outlets = string_map(args, FUNCTION, "outlets")?;

	Ok(shortcuts::stimulus_controller(
		controller,
		values.as_ref(),
		classes.as_ref(),
		outlets.as_ref(),
	))
}

fn render_action(args: &HashMap<String, Value>) -> StimulusResult<String> {
	const FUNCTION: &str = "stimulus_action";

	let controller = required_str(args, FUNCTION, "controller")?;
	let action = required_str(args, FUNCTION, "action")?;
	let event = optional_str(args, FUNCTION, "event")?;
	let parameters = value_map(args, FUNCTION, "parameters")?;

	Ok(shortcuts::stimulus_action(
		controller,
		action,
		event,
		parameters.as_ref(),
	))
}

fn render_target(args: &HashMap<String, Value>) -> StimulusResult<String> {
	const FUNCTION: &str = "stimulus_target";

	let controller = required_str(args, FUNCTION, "controller")?;
	let targets = optional_str(args, FUNCTION, "targets")?;

	Ok(shortcuts::stimulus_target(controller, targets))
}

fn required_str<'a>(
	args: &'a HashMap<String, Value>,
	function: &'static str,
	argument: &'static str,
) -> StimulusResult<&'a str> {
	match args.get(argument) {
		Some(value) => value.as_str().ok_or(StimulusError::InvalidArgument {
			function,
			argument,
			expected: "a string",
		}),
		None => Err(StimulusError::MissingArgument { function, argument }),
	}
}

fn optional_str<'a>(
	args: &'a HashMap<String, Value>,
	function: &'static str,
	argument: &'static str,
) -> StimulusResult<Option<&'a str>> {
	match args.get(argument) {
		None | Some(Value::Null) => Ok(None),
		Some(value) => value
			.as_str()
			.map(Some)
			.ok_or(StimulusError::InvalidArgument {
				function,
				argument,
				expected: "a string",
			}),
	}
}

fn value_map(
	args: &HashMap<String, Value>,
	function: &'static str,
	argument: &'static str,
) -> StimulusResult<Option<ValueMap>> {
	match args.get(argument) {
		None | Some(Value::Null) => Ok(None),
		Some(Value::Object(entries)) => Ok(Some(
			entries
				.iter()
				.map(|(key, value)| (key.clone(), AttributeValue::from(value)))
				.collect(),
		)),
		Some(_) => Err(StimulusError::InvalidArgument {
			function,
			argument,
			expected: "an object",
		}),
	}
}

// `ClassMap` and `OutletMap` share a representation, so one conversion
// covers both the classes and outlets arguments.
fn string_map(
	args: &HashMap<String, Value>,
	function: &'static str,
	argument: &'static str,
) -> StimulusResult<Option<ClassMap>> {
	match args.get(argument) {
		None | Some(Value::Null) => Ok(None),
		Some(Value::Object(entries)) => entries
			.iter()
			.map(|(key, value)| {
				value
					.as_str()
					.map(|s| (key.clone(), s.to_string()))
					.ok_or(StimulusError::InvalidArgument {
						function,
						argument,
						expected: "an object of strings",
					})
			})
			.collect::<StimulusResult<ClassMap>>()
			.map(Some),
		Some(_) => Err(StimulusError::InvalidArgument {
			function,
			argument,
			expected: "an object of strings",
		}),
	}
}

fn into_tera_error(error: StimulusError) -> tera::Error {
	tera::Error::msg(error.to_string())
}
