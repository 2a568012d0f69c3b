use miette::{Diagnostic, SourceSpan};
use std::io;
use thiserror::Error;

/// Primary error type for the Spel B application
#[derive(Error, Debug, Diagnostic)]
pub enum SpelbeeError {
    #[error("Environment configuration error: {0}")]
    #[diagnostic(code(spelbee::config_error))]
    Config(String),

    #[error("Dictionary error: {0}")]
    #[diagnostic(code(spelbee::dictionary_error))]
    Dictionary(#[from] DictionaryError),

    #[error("Validation error: {0}")]
    #[diagnostic(code(spelbee::validation_error))]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    #[diagnostic(code(spelbee::io_error))]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(spelbee::serialization_error))]
    Serialization(#[from] serde_json::Error),
}

/// Dictionary-specific errors
#[derive(Error, Debug, Diagnostic)]
pub enum DictionaryError {
    #[error("Failed to load dictionary file: {0}")]
    #[diagnostic(
        code(spelbee::dictionary::load_error),
        help("set DICTIONARY_FILE_PATH to a newline-delimited word list")
    )]
    LoadError(#[from] io::Error),

    #[error("Dictionary is empty")]
    #[diagnostic(code(spelbee::dictionary::empty))]
    EmptyDictionary,
}

/// Errors raised while turning user input into a puzzle
#[derive(Error, Debug, Diagnostic)]
pub enum ValidationError {
    #[error("Expected {expected} letters, found {found}")]
    #[diagnostic(code(spelbee::validation::letter_count))]
    LetterCount { expected: usize, found: usize },

    #[error("'{found}' is not a letter")]
    #[diagnostic(
        code(spelbee::validation::non_alphabetic),
        help("only the letters a-z are allowed")
    )]
    NonAlphabetic {
        #[source_code]
        input: String,

        #[label("not a letter")]
        span: SourceSpan,

        found: char,
    },
}

pub use SpelbeeError as Error;

/// Create a result type that uses our error type
pub type Result<T> = std::result::Result<T, Error>;
