pub mod config;
pub mod error;
pub mod puzzle;
pub mod session;

// Re-export error types for convenience
pub use error::{DictionaryError, Error, Result, ValidationError};
