//! Typed values for Stimulus value and parameter bindings.
//!
//! Binding values arrive from Rust call sites and from template contexts as
//! booleans, strings, numbers, or whole JSON documents. [`AttributeValue`]
//! covers that surface as a closed set of variants; the [`Display`]
//! implementation is the single dispatch point that coerces a variant into
//! the string written into the attribute.
//!
//! [`Display`]: std::fmt::Display

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A value attached to a `-value` or `-param` attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
	/// Absent value. Value bindings drop it entirely; parameters render it
	/// as `null`.
	Null,
	/// Rendered as the literal `true` / `false`, never `1` / `0`.
	Bool(bool),
	/// Rendered as its JSON encoding (`4` → `4`, `1.5` → `1.5`).
	Number(Number),
	/// Passed through unchanged.
	String(String),
	/// A value with an explicit string form, captured eagerly via
	/// [`AttributeValue::stringable`].
	Stringable(String),
	/// Arrays and objects, rendered as compact JSON.
	Composite(Value),
}

impl AttributeValue {
	/// Capture a value through its own string representation.
	///
	/// Takes precedence over every other coercion rule, so a wrapper type
	/// whose display form happens to read `true` stays exactly that string.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_stimulus::AttributeValue;
	///
	/// let port = AttributeValue::stringable(8080);
	/// assert_eq!(port.to_string(), "8080");
	/// ```
	pub fn stringable(value: impl fmt::Display) -> Self {
		AttributeValue::Stringable(value.to_string())
	}

	/// Returns `true` for [`AttributeValue::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, AttributeValue::Null)
	}
}

impl fmt::Display for AttributeValue {
	/// Coerce the value into its attribute string.
	///
	/// Dispatch order: explicit string form, then boolean, then plain
	/// string, then JSON encoding for numbers and composites. The order
	/// guarantees a string-wrapped boolean-like value is never re-coerced.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AttributeValue::Stringable(repr) => f.write_str(repr),
			AttributeValue::Bool(value) => f.write_str(if *value { "true" } else { "false" }),
			AttributeValue::String(value) => f.write_str(value),
			AttributeValue::Number(value) => write!(f, "{}", value),
			AttributeValue::Composite(value) => write!(f, "{}", value),
			AttributeValue::Null => f.write_str("null"),
		}
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> Self {
		AttributeValue::Bool(value)
	}
}

impl From<&str> for AttributeValue {
	fn from(value: &str) -> Self {
		AttributeValue::String(value.to_string())
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> Self {
		AttributeValue::String(value)
	}
}

impl From<i32> for AttributeValue {
	fn from(value: i32) -> Self {
		AttributeValue::Number(Number::from(value))
	}
}

impl From<i64> for AttributeValue {
	fn from(value: i64) -> Self {
		AttributeValue::Number(Number::from(value))
	}
}

impl From<u32> for AttributeValue {
	fn from(value: u32) -> Self {
		AttributeValue::Number(Number::from(value))
	}
}

impl From<u64> for AttributeValue {
	fn from(value: u64) -> Self {
		AttributeValue::Number(Number::from(value))
	}
}

impl From<f64> for AttributeValue {
	/// Non-finite floats have no JSON encoding and degrade to [`AttributeValue::Null`].
	fn from(value: f64) -> Self {
		match Number::from_f64(value) {
			Some(number) => AttributeValue::Number(number),
			None => AttributeValue::Null,
		}
	}
}

impl From<Number> for AttributeValue {
	fn from(value: Number) -> Self {
		AttributeValue::Number(value)
	}
}

impl From<Value> for AttributeValue {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => AttributeValue::Null,
			Value::Bool(b) => AttributeValue::Bool(b),
			Value::Number(n) => AttributeValue::Number(n),
			Value::String(s) => AttributeValue::String(s),
			composite => AttributeValue::Composite(composite),
		}
	}
}

impl From<&Value> for AttributeValue {
	fn from(value: &Value) -> Self {
		AttributeValue::from(value.clone())
	}
}

impl<T> From<Option<T>> for AttributeValue
where
	T: Into<AttributeValue>,
{
	fn from(value: Option<T>) -> Self {
		match value {
			Some(value) => value.into(),
			None => AttributeValue::Null,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_bool_renders_literal() {
		assert_eq!(AttributeValue::from(true).to_string(), "true");
		assert_eq!(AttributeValue::from(false).to_string(), "false");
	}

	#[test]
	fn test_string_passthrough() {
		assert_eq!(AttributeValue::from("scalar-value").to_string(), "scalar-value");
	}

	#[test]
	fn test_number_json_encoding() {
		assert_eq!(AttributeValue::from(4).to_string(), "4");
		assert_eq!(AttributeValue::from(1.5).to_string(), "1.5");
		assert_eq!(AttributeValue::from(-7i64).to_string(), "-7");
	}

	#[test]
	fn test_composite_compact_json() {
		assert_eq!(AttributeValue::from(json!([1, 2, 3])).to_string(), "[1,2,3]");
		assert_eq!(
			AttributeValue::from(json!({"name": "dropzone"})).to_string(),
			r#"{"name":"dropzone"}"#
		);
	}

	#[test]
	fn test_stringable_wins_over_boolean_shape() {
		struct Flag;
		impl fmt::Display for Flag {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str("true")
			}
		}
		let value = AttributeValue::stringable(Flag);
		assert_eq!(value, AttributeValue::Stringable("true".to_string()));
		assert_eq!(value.to_string(), "true");
	}

	#[test]
	fn test_json_value_dispatch() {
		assert!(AttributeValue::from(json!(null)).is_null());
		assert_eq!(AttributeValue::from(json!(true)), AttributeValue::Bool(true));
		assert_eq!(
			AttributeValue::from(json!("text")),
			AttributeValue::String("text".to_string())
		);
	}

	#[test]
	fn test_serializes_as_plain_json() {
		assert_eq!(serde_json::to_value(AttributeValue::Bool(true)).unwrap(), json!(true));
		assert_eq!(serde_json::to_value(AttributeValue::from(4)).unwrap(), json!(4));
		assert_eq!(
			serde_json::to_value(AttributeValue::from("text")).unwrap(),
			json!("text")
		);
	}

	#[test]
	fn test_option_conversion() {
		assert!(AttributeValue::from(None::<&str>).is_null());
		assert_eq!(
			AttributeValue::from(Some("x")),
			AttributeValue::String("x".to_string())
		);
	}
}
