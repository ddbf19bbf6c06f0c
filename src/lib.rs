//! # Reinhardt Stimulus
//!
//! Stimulus `data-*` attribute rendering for server-side templates.
//!
//! Markup is wired to client-side Stimulus controllers through a
//! controller/action/target/value attribute convention. This crate builds
//! those attributes on the server: it normalizes identifiers into the legal
//! attribute-name charset, coerces typed binding values into deterministic
//! strings, escapes everything for splicing inside double-quoted attribute
//! values, and renders the result as a string or a key/value map.
//!
//! ## Features
//!
//! - Controller registration with value, class, and outlet bindings
//! - Action bindings with optional event names and parameters
//! - Target bindings
//! - One-shot helpers: [`stimulus_controller`], [`stimulus_action`],
//!   [`stimulus_target`]
//! - Tera template functions (feature `templates`, on by default)
//!
//! ## Example
//!
//! ```
//! use reinhardt_stimulus::{StimulusAttributes, ValueMap};
//!
//! let values = ValueMap::from([("perPage".to_string(), 25.into())]);
//!
//! let mut attributes = StimulusAttributes::new();
//! attributes.add_controller("users-list", Some(&values), None, None);
//! attributes.add_action("users-list", "refresh", Some("click"), None);
//!
//! assert_eq!(
//! 	attributes.to_attribute_string(),
//! 	r#"data-controller="users-list" data-action="click->users-list#refresh" data-users-list-per-page-value="25""#
//! );
//! ```

pub mod attributes;
pub mod error;
pub mod escaping;
pub mod normalize;
pub mod shortcuts;
#[cfg(feature = "templates")]
pub mod template_functions;
pub mod value;

pub use attributes::{ClassMap, OutletMap, StimulusAttributes, ValueMap};
pub use error::{StimulusError, StimulusResult};
pub use escaping::escape_html_attr;
pub use normalize::{normalize_controller_name, normalize_key_name};
pub use shortcuts::{stimulus_action, stimulus_controller, stimulus_target};
#[cfg(feature = "templates")]
pub use template_functions::{
	register_functions, stimulus_action_function, stimulus_controller_function,
	stimulus_target_function,
};
pub use value::AttributeValue;
