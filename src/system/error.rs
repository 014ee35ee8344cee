use thiserror::Error;

/// A counter row that does not match the fixed record layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("row has {found} fields, need at least {needed}")]
    TooShort { needed: usize, found: usize },

    #[error("field {index} is not a counter: {value:?}")]
    InvalidField { index: usize, value: String },
}

#[derive(Debug, Error)]
pub enum StatError {
    #[error("failed to read {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("key {key:?} not found in {path}")]
    KeyNotFound { key: String, path: String },

    #[error("malformed row in {path}: {source}")]
    Row {
        path: String,
        #[source]
        source: RowError,
    },
}

/// Parse the counter at `index`, or explain why it is missing.
pub(crate) fn counter_at(fields: &[String], index: usize) -> Result<u64, RowError> {
    let value = fields.get(index).ok_or(RowError::TooShort {
        needed: index + 1,
        found: fields.len(),
    })?;
    value.parse().map_err(|_| RowError::InvalidField {
        index,
        value: value.clone(),
    })
}
