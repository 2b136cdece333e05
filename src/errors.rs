use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Client-side form rejections. The display text is what the form shows.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill out all required fields.")]
    MissingRequiredFields,
    #[error("Price cannot be less than 0.")]
    NegativePrice,
    #[error("No identifier is left for a new record.")]
    IdentifiersExhausted,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
}

impl ApiError {
    pub fn http_status(&self) -> u16 {
        match self {
            ApiError::Status { status, .. } => *status,
            ApiError::NotFound(_) => 404,
            ApiError::Conflict(_) => 409,
            ApiError::Decode(_) => 400,
            ApiError::Network(_) => 502,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DashboardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("unknown record: {0}")]
    UnknownRecord(String),
    #[error("no form is open")]
    NoActiveForm,
    #[error("no delete is awaiting confirmation")]
    NoPendingDelete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(
            ValidationError::MissingRequiredFields.to_string(),
            "Please fill out all required fields."
        );
        assert_eq!(
            DashboardError::from(ValidationError::NegativePrice).to_string(),
            "Price cannot be less than 0."
        );
    }

    #[test]
    fn api_errors_map_to_status_codes() {
        assert_eq!(ApiError::NotFound("products/9".into()).http_status(), 404);
        assert_eq!(ApiError::Conflict("id 3".into()).http_status(), 409);
        let status = ApiError::Status {
            status: 503,
            body: "down".into(),
        };
        assert_eq!(status.http_status(), 503);
        assert_eq!(status.to_string(), "HTTP 503: down");
    }
}
