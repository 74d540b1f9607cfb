use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The mutation that referenced an id which is not in the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingOp {
    Update,
    Delete,
    View,
}

impl fmt::Display for MissingOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingOp::Update => write!(f, "update"),
            MissingOp::Delete => write!(f, "delete"),
            MissingOp::View => write!(f, "view"),
        }
    }
}

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Could not read journal {path}: {reason}")]
    StorageRead { path: PathBuf, reason: String },

    #[error("Could not write journal {path}: {reason}")]
    StorageWrite { path: PathBuf, reason: String },

    #[error("Invalid entry: {0}")]
    Validation(String),

    #[error("Cannot {op}: no entry with id {id}")]
    NotFound { op: MissingOp, id: String },

    #[error("An entry with id {0} already exists")]
    DuplicateId(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl JournalError {
    pub fn read(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        JournalError::StorageRead {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        JournalError::StorageWrite {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn not_found(op: MissingOp, id: impl Into<String>) -> Self {
        JournalError::NotFound { op, id: id.into() }
    }
}

pub type Result<T> = std::result::Result<T, JournalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_operation() {
        let err = JournalError::not_found(MissingOp::Update, "abc");
        assert_eq!(err.to_string(), "Cannot update: no entry with id abc");
    }

    #[test]
    fn read_error_carries_path() {
        let err = JournalError::read("/tmp/journal.yaml", "bad yaml");
        assert!(err.to_string().contains("/tmp/journal.yaml"));
        assert!(err.to_string().contains("bad yaml"));
    }
}
