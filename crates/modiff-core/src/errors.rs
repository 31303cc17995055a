use thiserror::Error;

/// Result type alias using ModiffError
pub type Result<T> = std::result::Result<T, ModiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in structured logs and
/// in tests. The front end picks the user-facing text from the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Malformed chat command (wrong argument count, non-integer revision)
    Usage,
    /// Upstream fetch failed or returned an error payload
    Remote,
    /// Reply channel rejected a message
    Delivery,
    /// Startup configuration is missing or invalid
    Config,
    Serialization,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Usage => "ERR_USAGE",
            ExErrorKind::Remote => "ERR_REMOTE",
            ExErrorKind::Delivery => "ERR_DELIVERY",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification for programmatic handling plus the context an
/// operator needs when reading the logs.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    revision: Option<u32>,
    message: String,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            revision: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add collection id context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    pub fn with_revision(mut self, revision: u32) -> Self {
        self.revision = Some(revision);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn revision(&self) -> Option<u32> {
        self.revision
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (collection: {})", entity_id)?;
        }
        if let Some(revision) = self.revision {
            write!(f, " (revision: {})", revision)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for modiff operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModiffError {
    /// The chat command could not be parsed; no fetch was attempted
    #[error("Invalid command: {reason}")]
    Usage { reason: String },

    /// Fetching a revision failed. `payload` is the upstream error body verbatim.
    #[error("Failed to fetch revision {revision} of collection {collection_id}: {payload}")]
    Remote {
        collection_id: String,
        revision: u32,
        payload: String,
    },

    /// A reply chunk could not be sent; `delivered` chunks already went out
    #[error("Delivery failed after {delivered} of {total} chunks: {message}")]
    Delivery {
        delivered: usize,
        total: usize,
        message: String,
    },

    #[error("Invalid configuration: {message}")]
    Config { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ModiffError {
    /// Canonical kind of this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            ModiffError::Usage { .. } => ExErrorKind::Usage,
            ModiffError::Remote { .. } => ExErrorKind::Remote,
            ModiffError::Delivery { .. } => ExErrorKind::Delivery,
            ModiffError::Config { .. } => ExErrorKind::Config,
            ModiffError::Serialization { .. } => ExErrorKind::Serialization,
            ModiffError::Internal { .. } => ExErrorKind::Internal,
        }
    }

    pub fn usage(reason: impl Into<String>) -> Self {
        ModiffError::Usage {
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        ModiffError::Config {
            message: message.into(),
        }
    }
}

impl From<ModiffError> for ExError {
    fn from(err: ModiffError) -> Self {
        match err {
            ModiffError::Usage { reason } => ExError::new(ExErrorKind::Usage)
                .with_op("parse_command")
                .with_message(reason),

            ModiffError::Remote {
                collection_id,
                revision,
                payload,
            } => ExError::new(ExErrorKind::Remote)
                .with_op("fetch_revision")
                .with_entity_id(collection_id)
                .with_revision(revision)
                .with_message(payload),

            ModiffError::Delivery {
                delivered,
                total,
                message,
            } => ExError::new(ExErrorKind::Delivery)
                .with_op("deliver")
                .with_message(format!("{} ({} of {} chunks sent)", message, delivered, total)),

            ModiffError::Config { message } => ExError::new(ExErrorKind::Config)
                .with_op("load_config")
                .with_message(message),

            ModiffError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            ModiffError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to ModiffError
impl From<serde_json::Error> for ModiffError {
    fn from(err: serde_json::Error) -> Self {
        ModiffError::Serialization {
            message: err.to_string(),
        }
    }
}
