//! Identifier normalization for attribute names.
//!
//! Controller identifiers may arrive as package-style paths
//! (`@acme/ux-dropzone/dropzone`); binding keys may arrive in camelCase
//! (`myValue`). Both must be flattened into the restricted charset that is
//! legal inside a `data-*` attribute name.

/// Normalize a controller identifier into a valid attribute-name fragment.
///
/// Every character outside `[A-Za-z0-9_-]` is replaced with `-`, then runs of
/// two or more `-` are collapsed into one. Any input is accepted; an empty
/// string normalizes to an empty string.
///
/// # Examples
///
/// ```
/// use reinhardt_stimulus::normalize_controller_name;
///
/// assert_eq!(normalize_controller_name("my-controller"), "my-controller");
/// assert_eq!(
/// 	normalize_controller_name("acme/ux-dropzone/dropzone"),
/// 	"acme-ux-dropzone-dropzone"
/// );
/// ```
pub fn normalize_controller_name(name: &str) -> String {
	let mut normalized = String::with_capacity(name.len());
	for ch in name.chars() {
		let mapped = if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
			ch
		} else {
			'-'
		};
		// Collapses runs in the same pass the replacement happens in.
		if mapped == '-' && normalized.ends_with('-') {
			continue;
		}
		normalized.push(mapped);
	}
	normalized
}

/// Normalize a binding key from camelCase into kebab-case.
///
/// A `-` is inserted before every ASCII uppercase letter and the letter is
/// lowercased (`myValue` → `my-value`). Already-hyphenated or lowercase keys
/// pass through unchanged. Applied to value, class, and param keys; outlet
/// names go through [`normalize_controller_name`] instead.
///
/// # Examples
///
/// ```
/// use reinhardt_stimulus::normalize_key_name;
///
/// assert_eq!(normalize_key_name("myValue"), "my-value");
/// assert_eq!(normalize_key_name("bool-param"), "bool-param");
/// ```
pub fn normalize_key_name(name: &str) -> String {
	let mut normalized = String::with_capacity(name.len());
	for ch in name.chars() {
		if ch.is_ascii_uppercase() {
			normalized.push('-');
			normalized.push(ch.to_ascii_lowercase());
		} else {
			normalized.push(ch);
		}
	}
	normalized
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_controller_name_passthrough() {
		assert_eq!(normalize_controller_name("my-controller"), "my-controller");
		assert_eq!(normalize_controller_name("chart_widget2"), "chart_widget2");
	}

	#[test]
	fn test_controller_name_replaces_illegal_characters() {
		assert_eq!(
			normalize_controller_name("@acme/ux-dropzone/dropzone"),
			"-acme-ux-dropzone-dropzone"
		);
		assert_eq!(normalize_controller_name("users.list"), "users-list");
	}

	#[test]
	fn test_controller_name_collapses_dash_runs() {
		assert_eq!(normalize_controller_name("a//b"), "a-b");
		assert_eq!(normalize_controller_name("a@@--//b"), "a-b");
		assert_eq!(normalize_controller_name("namespaced--other"), "namespaced-other");
	}

	#[test]
	fn test_controller_name_empty() {
		assert_eq!(normalize_controller_name(""), "");
	}

	#[test]
	fn test_key_name_camel_case() {
		assert_eq!(normalize_key_name("myValue"), "my-value");
		assert_eq!(normalize_key_name("boolParam"), "bool-param");
	}

	#[test]
	fn test_key_name_untouched() {
		assert_eq!(normalize_key_name("bool-param"), "bool-param");
		assert_eq!(normalize_key_name("loading"), "loading");
	}
}
