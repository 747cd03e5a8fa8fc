use std::fmt;

#[derive(Debug)]
pub enum GlueError {
    /// The request never produced a usable response: connection failure,
    /// non-success status where one is required, or an undecodable body.
    NetworkOrDecode(String),
    /// The body decoded but the backend reported an `error` field.
    Application(String),
    /// The page has no element with the requested id.
    MissingRegion(String),
    Config(String),
}

impl GlueError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkOrDecode(message.into())
    }

    pub fn status(path: &str, status: u16) -> Self {
        Self::NetworkOrDecode(format!("GET {path} returned status {status}"))
    }
}

impl fmt::Display for GlueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetworkOrDecode(message) => write!(f, "network or decode failure: {message}"),
            Self::Application(message) => write!(f, "backend reported an error: {message}"),
            Self::MissingRegion(id) => write!(f, "no element with id '{id}' in the page"),
            Self::Config(message) => write!(f, "invalid configuration: {message}"),
        }
    }
}

impl std::error::Error for GlueError {}

impl From<reqwest::Error> for GlueError {
    fn from(err: reqwest::Error) -> Self {
        Self::NetworkOrDecode(err.to_string())
    }
}

impl From<serde_json::Error> for GlueError {
    fn from(err: serde_json::Error) -> Self {
        Self::NetworkOrDecode(err.to_string())
    }
}
