#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The targeted entity does not exist. Raised by the services' existence
    /// pre-checks before any mutation is attempted.
    #[error("{0}")]
    NotFound(String),

    /// The input failed validation (unknown category, missing referenced
    /// ingredient, structural rejection by the store).
    #[error("{0}")]
    BadRequest(String),

    /// A domain invariant was violated (e.g. a stored category value that is
    /// no longer a member of the enumeration).
    #[error("Internal error: {0}")]
    Internal(String),

    /// The storage backend failed. Services propagate this unchanged.
    #[error("Storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CoreError {
    /// Wrap a backend error at the store boundary.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Box::new(err))
    }
}
