use std::fmt;

/// Which storage call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOp {
    Get,
    Set,
    Remove,
}

impl fmt::Display for StorageOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageOp::Get => write!(f, "get"),
            StorageOp::Set => write!(f, "set"),
            StorageOp::Remove => write!(f, "remove"),
        }
    }
}

/// Failures of the device key/value store. Never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("storage {op} failed for `{key}`: {message}")]
    Operation {
        op: StorageOp,
        key: String,
        message: String,
    },
}

impl StorageError {
    pub fn operation(op: StorageOp, key: &str, message: impl Into<String>) -> Self {
        StorageError::Operation {
            op,
            key: key.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceParseError {
    #[error("unknown theme `{0}`")]
    Theme(String),
    #[error("unknown translation `{0}`")]
    Translation(String),
}

/// Why a share attempt ended without sharing or copying
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShareError {
    #[error("neither native share nor clipboard is available")]
    Unsupported,
    #[error("share was rejected: {0}")]
    Rejected(String),
}
