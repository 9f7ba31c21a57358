// src/error.rs
use fluent_xpath_builder::XPathBuilderError;
use thiserror::Error;

/// Errors surfaced by the facade: builder validation plus option loading.
#[derive(Error, Debug)]
pub enum FluentXPathError {
    #[error("Builder error: {0}")]
    Builder(#[from] XPathBuilderError),

    #[error("Options JSON is invalid: {0}")]
    OptionsJson(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
