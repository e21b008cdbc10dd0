use strum::EnumIs;
use thiserror::Error;

#[derive(Debug, Error, EnumIs)]
pub enum LambdaError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration file '{file}': {source}")]
    ConfigParseError {
        source: toml::de::Error,
        file: String,
    },

    /// The decode terminal did not come back untouched.
    #[error(
        "Value is not a well-formed numeral: the terminal marker was applied or replaced ({count} applications counted)"
    )]
    NotANumeral { count: usize },

    /// Neither marker was selected when decoding a boolean.
    #[error("Value is not a well-formed boolean: it selected neither of its two arguments")]
    NotABoolean,

    #[error("List walk exceeded the configured limit of {limit} nodes")]
    ListTooLong { limit: usize },

    #[error("Evaluation thread panicked: {0}")]
    EvaluationPanicked(String),
}

pub type LambdaResult<T> = Result<T, LambdaError>;
