use std::fmt::{Display, Formatter};

use thiserror::Error;

pub type DynError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type Result<T> = std::result::Result<T, DynError>;

/// Attach a human readable context string to an error.
pub trait Context<T> {
    fn with_ctx<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

#[derive(Debug)]
pub struct WithContextError {
    pub context: String,
    pub source: DynError,
}

impl Display for WithContextError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.context, self.source)
    }
}

impl std::error::Error for WithContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.source)
    }
}

impl<T, E> Context<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_ctx<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            Box::new(WithContextError {
                context: f(),
                source: e.into(),
            }) as DynError
        })
    }
}

/// Why fetching the user list failed.
///
/// The UI collapses every variant into a single "failed to load" banner;
/// the detail only goes to the log.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Endpoint is not an http(s) URL
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Network unreachable, DNS failure, connection reset...
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered outside the 2xx range
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// Body was not a JSON array of users
    #[error("malformed response body: {0}")]
    Parse(String),
}

impl LoadError {
    /// Whether the failure happened before any response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
