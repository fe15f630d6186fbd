use thiserror::Error;

use crate::domain::product::ProductId;

/// Failures while loading the product table.
///
/// Errors are clonable so that a memoized failure can be returned to every
/// caller of the cache.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RepositoryError {
    #[error("failed to read product table {path}: {message}")]
    Read { path: String, message: String },

    #[error("malformed product table: {0}")]
    Malformed(String),

    #[error("product table is missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("invalid product on line {line}: {message}")]
    ValidationError { line: u64, message: String },

    #[error("duplicate product id {0}")]
    DuplicateProduct(ProductId),
}

impl From<csv::Error> for RepositoryError {
    fn from(error: csv::Error) -> Self {
        RepositoryError::Malformed(error.to_string())
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
