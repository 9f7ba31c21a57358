//! A fluent builder for XPath query strings.
//!
//! [`XPathBuilder`] composes a query from small, reusable fragments (axis
//! steps, node tests, predicates, unions and groups) instead of a hand-written
//! string. It is a textual assembler only: it neither parses nor evaluates the
//! query it produces.
//!
//! ```
//! use fluent_xpath_builder::XPathBuilder;
//!
//! # fn main() -> Result<(), fluent_xpath_builder::XPathBuilderError> {
//! let mut xpath = XPathBuilder::new();
//! xpath.elements_descend("ul").elements("li").first_n(3)?.inner_text();
//! assert_eq!(xpath.to_string(), "//ul/li[position()<4]/text()");
//! # Ok(())
//! # }
//! ```

mod builder;
pub mod error;
pub mod fragment;
pub mod options;


pub use builder::XPathBuilder;
pub use error::{Result, XPathBuilderError};
pub use options::{BuilderOptions, StartsWithStyle};
