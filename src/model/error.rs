use std::fmt;

/// Everything that can go wrong during a smoke run.
#[derive(Debug)]
pub enum SmokeError {
    /// Client or credential configuration could not be resolved.
    Configuration { message: String },
    /// The storage provider rejected or failed an operation.
    Remote { message: String },
    /// A download returned fewer or more bytes than the transport reported.
    Consistency { message: String },
}

impl fmt::Display for SmokeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmokeError::Configuration { message } => write!(f, "configuration error: {}", message),
            SmokeError::Remote { message } => write!(f, "remote error: {}", message),
            SmokeError::Consistency { message } => write!(f, "consistency error: {}", message),
        }
    }
}

impl std::error::Error for SmokeError {}
