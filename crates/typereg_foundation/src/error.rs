//! Error types for the typereg system.
//!
//! Every error here is a contract violation on the caller's side: a lifecycle
//! call out of order, or a lookup for something that was never interned.
//! A property that simply does not exist is reported as `None`, not as an error.

use thiserror::Error;

/// Result alias used throughout typereg.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for typereg operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional description of the operation that failed.
    pub context: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates an already-initialized error.
    #[must_use]
    pub fn already_initialized() -> Self {
        Self::new(ErrorKind::AlreadyInitialized)
    }

    /// Creates a not-initialized error.
    #[must_use]
    pub fn not_initialized() -> Self {
        Self::new(ErrorKind::NotInitialized)
    }

    /// Creates an unknown type hash error.
    #[must_use]
    pub fn unknown_type_hash(hash: u32) -> Self {
        Self::new(ErrorKind::UnknownTypeHash(hash))
    }

    /// Creates an unknown component type error.
    #[must_use]
    pub fn unknown_component_type(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownComponentType(id.into()))
    }

    /// Creates an identifier-too-long error.
    #[must_use]
    pub fn identifier_too_long(id: impl Into<String>, max: usize) -> Self {
        let id = id.into();
        Self::new(ErrorKind::IdentifierTooLong {
            len: id.len(),
            id,
            max,
        })
    }

    /// Returns true if this error reports a lifecycle violation.
    #[must_use]
    pub fn is_lifecycle(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::AlreadyInitialized | ErrorKind::NotInitialized
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// `init` was called while the registry was already active.
    #[error("property registry already initialized")]
    AlreadyInitialized,

    /// An operation was called before `init` or after `shutdown`.
    #[error("property registry not initialized")]
    NotInitialized,

    /// No interned component type has this hash.
    #[error("unknown component type hash: {0:#010x}")]
    UnknownTypeHash(u32),

    /// The identifier was never interned.
    #[error("unknown component type: {0}")]
    UnknownComponentType(String),

    /// The identifier does not fit the namespace's identifier capacity.
    #[error("component type identifier too long: {id} ({len} bytes, max {max})")]
    IdentifierTooLong {
        /// The rejected identifier.
        id: String,
        /// Its length in bytes.
        len: usize,
        /// The namespace's capacity in bytes.
        max: usize,
    },

    /// A namespace snapshot is internally inconsistent.
    #[error("invalid namespace snapshot: {0}")]
    InvalidSnapshot(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
