use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("telephony service not available: {0}")]
    NotAvailable(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("platform query failed: {0}")]
    QueryFailed(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
