//! Error types for the template-function surface.
//!
//! The core builder is total over its inputs and never fails; the only
//! failure path is a template call handing over arguments of the wrong
//! shape.

#[derive(Debug, thiserror::Error)]
pub enum StimulusError {
	#[error("{function} requires a '{argument}' argument")]
	MissingArgument {
		function: &'static str,
		argument: &'static str,
	},
	#[error("{function} expects '{argument}' to be {expected}")]
	InvalidArgument {
		function: &'static str,
		argument: &'static str,
		expected: &'static str,
	},
}

pub type StimulusResult<T> = Result<T, StimulusError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_messages() {
		let missing = StimulusError::MissingArgument {
			function: "stimulus_controller",
			argument: "controller",
		};
		assert_eq!(
			missing.to_string(),
			"stimulus_controller requires a 'controller' argument"
		);

		let invalid = StimulusError::InvalidArgument {
			function: "stimulus_action",
			argument: "parameters",
			expected: "an object",
		};
		assert_eq!(
			invalid.to_string(),
			"stimulus_action expects 'parameters' to be an object"
		);
	}
}
