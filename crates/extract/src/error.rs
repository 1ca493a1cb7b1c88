use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Invalid relation pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Relation pattern '{pattern}' must have exactly 2 capture groups, found {found}")]
    WrongCaptureCount { pattern: String, found: usize },

    #[error("Relation rule for pattern '{0}' has an empty predicate")]
    EmptyPredicate(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
