use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("no renderer registered for type '{0}'")]
    UnknownType(String),
    #[error("malformed card fragment: {0}")]
    Fragment(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("other rendering error: {0}")]
    Other(String),
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Other(s.to_string())
    }
}
