use thiserror::Error;

/// Failures raised while loading a provider schema or generating bindings from it.
#[derive(Debug, Error)]
pub enum BindgenError {
    #[error("Io: {0}")]
    Io(#[from] std::io::Error),

    #[error("Json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("UnsupportedType: {0}")]
    UnsupportedType(String),

    #[error("MalformedType: {0}")]
    MalformedType(String),

    #[error("MissingProvider: {0}")]
    MissingProvider(String),

    #[error("DuplicateType: {0}")]
    DuplicateType(String),

    #[error("DuplicateField: {0}")]
    DuplicateField(String),
}

pub type Result<T, E = BindgenError> = std::result::Result<T, E>;

/// Raised when a record meant to hold one of several alternatives holds more than one.
#[derive(Debug, Error, PartialEq)]
pub enum OneOfError {
    #[error("Ambiguous: {record} sets {populated:?}, expected at most one")]
    Ambiguous {
        record: &'static str,
        populated: Vec<&'static str>,
    },
}
