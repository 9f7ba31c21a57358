//! Build XPath queries programmatically.
//!
//! The query grammar lives in [`fluent_xpath_builder`]; this crate re-exports
//! it and adds loading of [`BuilderOptions`] from disk.
//!
//! ```
//! use fluent_xpath::prelude::*;
//!
//! let xpath: String = XPathBuilder::new()
//!     .all_child_elements()
//!     .elements("div")
//!     .where_attribute_equals("class", "button")
//!     .into();
//! assert_eq!(xpath, "/*/div[@class='button']");
//! ```

pub mod error;

pub use error::FluentXPathError;
pub use fluent_xpath_builder::{
    BuilderOptions, StartsWithStyle, XPathBuilder, XPathBuilderError, fragment,
};

use std::fs;
use std::path::Path;

/// Convenience imports for callers chaining builder operations.
pub mod prelude {
    pub use fluent_xpath_builder::{
        BuilderOptions, StartsWithStyle, XPathBuilder, XPathBuilderError,
    };
}

/// Reads [`BuilderOptions`] from a JSON file.
pub fn load_options(path: impl AsRef<Path>) -> Result<BuilderOptions, FluentXPathError> {
    let path = path.as_ref();
    log::debug!("Loading builder options from {}", path.display());
    let json = fs::read_to_string(path)?;
    let options = BuilderOptions::from_json(&json)?;
    log::debug!("Loaded builder options: {:?}", options);
    Ok(options)
}

/// Creates an empty builder configured from the JSON file at `path`.
pub fn builder_from_options_file(path: impl AsRef<Path>) -> Result<XPathBuilder, FluentXPathError> {
    Ok(XPathBuilder::with_options(load_options(path)?))
}
