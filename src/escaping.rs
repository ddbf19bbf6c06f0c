//! HTML attribute-value escaping.
//!
//! Rendered attribute values are always spliced inside double-quote
//! delimiters, so both quote styles must be neutralized along with the usual
//! HTML metacharacters.

/// Escape a string for use as an HTML attribute value.
///
/// Escaped characters:
/// - `&` → `&amp;`
/// - `<` → `&lt;`
/// - `>` → `&gt;`
/// - `"` → `&quot;`
/// - `'` → `&#39;`
///
/// # Examples
///
/// ```
/// use reinhardt_stimulus::escape_html_attr;
///
/// assert_eq!(
/// 	escape_html_attr(r#"say "hi" & don't"#),
/// 	"say &quot;hi&quot; &amp; don&#39;t"
/// );
/// ```
pub fn escape_html_attr(input: &str) -> String {
	let mut output = String::with_capacity(input.len());
	for ch in input.chars() {
		match ch {
			'&' => output.push_str("&amp;"),
			'<' => output.push_str("&lt;"),
			'>' => output.push_str("&gt;"),
			'"' => output.push_str("&quot;"),
			'\'' => output.push_str("&#39;"),
			_ => output.push(ch),
		}
	}
	output
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_escape_html_attr() {
		assert_eq!(
			escape_html_attr("<script>alert('xss')</script>"),
			"&lt;script&gt;alert(&#39;xss&#39;)&lt;/script&gt;"
		);
	}

	#[test]
	fn test_escape_both_quote_styles() {
		let attr = r#"value" onload='alert(1)"#;
		let escaped = escape_html_attr(attr);
		assert!(!escaped.contains('"'));
		assert!(!escaped.contains('\''));
		assert!(escaped.contains("&quot;"));
		assert!(escaped.contains("&#39;"));
	}

	#[test]
	fn test_escape_ampersand_first() {
		// A pre-escaped entity is escaped again, not passed through.
		assert_eq!(escape_html_attr("&quot;"), "&amp;quot;");
	}

	#[test]
	fn test_escape_passthrough() {
		assert_eq!(escape_html_attr("my-controller"), "my-controller");
		assert_eq!(escape_html_attr(""), "");
	}
}
