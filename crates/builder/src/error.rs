use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XPathBuilderError {
    #[error("Invalid argument for '{operation}': {value} (must be at least 1)")]
    InvalidArgument { operation: &'static str, value: i64 },
}

pub type Result<T> = std::result::Result<T, XPathBuilderError>;
