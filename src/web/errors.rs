use actix_web::{
    HttpResponse, ResponseError,
    error::BlockingError,
    http::{StatusCode, header::ContentType},
};
use thiserror::Error;

use crate::services::projects::ProjectError;

#[derive(Debug, Error)]
pub enum WebError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error("Worker pool is unavailable: {0}")]
    Blocking(#[from] BlockingError),
}

impl ResponseError for WebError {
    fn status_code(&self) -> StatusCode {
        match self {
            WebError::Project(ProjectError::NotFound(_)) => StatusCode::NOT_FOUND,
            WebError::Project(ProjectError::AlreadyExists(_)) => StatusCode::CONFLICT,
            WebError::Project(ProjectError::InvalidName { .. }) => StatusCode::BAD_REQUEST,
            WebError::Project(ProjectError::Storage(_)) | WebError::Blocking(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        HttpResponse::build(status)
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::storage::StorageError;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ProjectError::NotFound("a".into()), StatusCode::NOT_FOUND),
            (ProjectError::AlreadyExists("a".into()), StatusCode::CONFLICT),
            (
                ProjectError::Storage(StorageError::LoadFailed {
                    path: PathBuf::from("projects.json"),
                    source: std::io::Error::other("disk"),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(WebError::from(error).status_code(), expected);
        }
    }

    #[test]
    fn test_error_response_uses_status_code() {
        let response = WebError::from(ProjectError::NotFound("Apollo".into())).error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
