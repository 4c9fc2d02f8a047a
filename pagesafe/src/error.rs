use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("unknown page '{0}'")]
    UnknownPage(String),
    #[error("unknown element '{element}' on page '{page}'")]
    UnknownElement { page: String, element: String },
    #[error("page '{0}' already exists")]
    DuplicatePage(String),
    #[error("element '{element}' already exists on page '{page}'")]
    DuplicateElement { page: String, element: String },
    #[error("position {position} out of range for {len} pages")]
    PositionOutOfRange { position: usize, len: usize },
    #[error("invalid element '{id}': {reason}")]
    InvalidElement { id: String, reason: &'static str },
    #[error("invalid page geometry: {0}")]
    InvalidGeometry(&'static str),
    #[error("unsupported document version {0}")]
    UnsupportedVersion(u64),
    #[error("document limit exceeded: {0}")]
    LimitExceeded(&'static str),
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoryError {
    /// Stable machine-readable code, shared with the wasm result objects.
    pub fn code(&self) -> &'static str {
        match self {
            StoryError::UnknownPage(_) | StoryError::UnknownElement { .. } => "invalid_id",
            StoryError::DuplicatePage(_) | StoryError::DuplicateElement { .. } => "duplicate_id",
            StoryError::PositionOutOfRange { .. } => "out_of_range",
            StoryError::InvalidElement { .. } => "invalid_element",
            StoryError::InvalidGeometry(_) => "invalid_geometry",
            StoryError::UnsupportedVersion(_) => "unsupported_version",
            StoryError::LimitExceeded(_) => "limit_exceeded",
            StoryError::Json(_) => "invalid_json",
        }
    }
}
