//! error handling stuff
use {miette::Diagnostic, thiserror::Error};

/// the broad category an error falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// the request never produced a usable response
    Network,
    /// the response body didn't match the expected shape
    Deserialization,
    /// the remote reported that the resource doesn't exist
    NotFound,
    /// anything else
    Other,
}

#[derive(Debug, Error, Diagnostic)]
/// An error
pub enum PostsError {
    /// a transport level failure
    #[error("network error: {0}")]
    #[diagnostic(
        code(postrs::network),
        help("check your connection and the configured base_url")
    )]
    Network(#[from] reqwest::Error),

    /// a body that couldn't be decoded
    #[error("failed to deserialize {what}: {source}")]
    #[diagnostic(code(postrs::deserialize))]
    Deserialize {
        /// what was being decoded
        what: String,
        /// the underlying json error
        #[source]
        source: serde_json::Error,
    },

    /// the requested post doesn't exist
    #[error("post {0} not found")]
    #[diagnostic(code(postrs::not_found))]
    NotFound(i64),

    /// a non-success status that isn't a plain not-found
    #[error("unexpected http status {status} from {url}")]
    #[diagnostic(code(postrs::status))]
    Status {
        /// the status code returned
        status: reqwest::StatusCode,
        /// the url that was requested
        url: String,
    },

    /// a malformed base url or endpoint
    #[error("invalid url: {0}")]
    #[diagnostic(code(postrs::url), help("base_url must be an absolute http(s) url"))]
    Url(#[from] url::ParseError),

    /// an IO error
    #[error("i/o error: {0}")]
    IO(#[from] std::io::Error),

    /// a custom error
    #[error("error: {0}")]
    Other(String),
}

impl PostsError {
    /// the category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::Network,
            Self::Deserialize { .. } => ErrorKind::Deserialization,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Status { .. } | Self::Url(_) | Self::IO(_) | Self::Other(_) => ErrorKind::Other,
        }
    }
}

impl From<String> for PostsError {
    fn from(value: String) -> Self {
        Self::Other(value)
    }
}

/// A result using [`PostsError`] as the `Err` variant
pub type Result<T, U = PostsError> = miette::Result<T, U>;

/// bail
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::error::PostsError::from(String::from($msg)))
    };

    ($err:expr $(,)?) => {
        return Err($crate::error::PostsError::from($err))
    };

    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::PostsError::from(format!($fmt, $($arg)*)))
    };
}
