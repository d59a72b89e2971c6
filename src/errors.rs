use http::StatusCode;

#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    BaseUrl(#[from] url::ParseError),
    #[error("base url cannot be a base: {0}")]
    CannotBeABase(String),
    #[error("base url must not carry a query or fragment: {0}")]
    QueryOrFragment(String),
    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

/// Any failed api call. Callers are expected to treat every variant as "request failed".
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("API request failed: {message}")]
    Status { status: StatusCode, message: String },
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("api returned: \"{0}\"")]
    Api(String),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Url(#[from] url::ParseError),
    #[error("{0}")]
    Query(#[from] serde_qs::Error),
    #[error("\"{0}\" is not a usable path segment")]
    PathSegment(String),
}

impl ApiError {
    /// Build the error for a non-success response, carrying the canonical status text
    pub fn from_status(status: StatusCode) -> Self {
        let message = status
            .canonical_reason()
            .map(str::to_owned)
            .unwrap_or_else(|| status.as_str().to_owned());

        Self::Status { status, message }
    }

    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    /// The http status, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request(e) => e.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_carries_reason_text() {
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "API request failed: Internal Server Error");
        assert!(err.is_status());
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn unknown_status_falls_back_to_code() {
        let status = StatusCode::from_u16(599).unwrap();
        let err = ApiError::from_status(status);
        assert_eq!(err.to_string(), "API request failed: 599");
    }
}
