use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::admin::{
    AdminArtworkError, AdminCollectionError, AdminMediaError, AdminSectionError,
};
use crate::application::error::ErrorReport;
use crate::application::newsletter::NewsletterError;
use crate::application::repos::RepoError;

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorMessage,
}

pub mod codes {
    pub const NOT_FOUND: &str = "not_found";
    pub const DUPLICATE: &str = "duplicate";
    pub const INVALID_INPUT: &str = "invalid_input";
    pub const CONSTRAINT: &str = "constraint_violation";
    pub const ALREADY_SUBSCRIBED: &str = "already_subscribed";
    pub const INTEGRITY: &str = "integrity_error";
    pub const DB_TIMEOUT: &str = "db_timeout";
    pub const REPO: &str = "repo_error";
}

#[derive(Debug, Serialize)]
pub struct ApiErrorMessage {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: &'static str,
    hint: Option<String>,
}

impl ApiError {
    pub fn new(
        status: StatusCode,
        code: &'static str,
        message: &'static str,
        hint: Option<String>,
    ) -> Self {
        Self {
            status,
            code,
            message,
            hint,
        }
    }

    pub fn not_found(message: &'static str) -> Self {
        Self::new(StatusCode::NOT_FOUND, codes::NOT_FOUND, message, None)
    }

    pub fn constraint(field: &'static str) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            codes::CONSTRAINT,
            "Field failed validation",
            Some(field.to_string()),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let hint = self.hint.clone();
        let body = ApiErrorBody {
            error: ApiErrorMessage {
                code: self.code.to_string(),
                message: self.message.to_string(),
                hint: self.hint,
            },
        };
        let mut response = (self.status, Json(body)).into_response();
        // Drained by the response logging middleware.
        ErrorReport::from_message(
            "infra::http::api",
            self.status,
            format!("{}: {}", self.code, hint.as_deref().unwrap_or(self.message)),
        )
        .attach(&mut response);
        response
    }
}

pub fn repo_to_api(err: RepoError) -> ApiError {
    match err {
        RepoError::NotFound => ApiError::not_found("resource not found"),
        RepoError::Duplicate { constraint } => ApiError::new(
            StatusCode::CONFLICT,
            codes::DUPLICATE,
            "Duplicate record",
            Some(constraint),
        ),
        RepoError::InvalidInput { message } => ApiError::new(
            StatusCode::BAD_REQUEST,
            codes::INVALID_INPUT,
            "Invalid input",
            Some(message),
        ),
        RepoError::Integrity { message } => ApiError::new(
            StatusCode::CONFLICT,
            codes::INTEGRITY,
            "Integrity constraint violated",
            Some(message),
        ),
        RepoError::Timeout => ApiError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            codes::DB_TIMEOUT,
            "Database timeout",
            None,
        ),
        RepoError::Persistence(message) => ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            codes::REPO,
            "Persistence error",
            Some(message),
        ),
    }
}

pub fn artwork_to_api(err: AdminArtworkError) -> ApiError {
    match err {
        AdminArtworkError::ConstraintViolation(field) => ApiError::constraint(field),
        AdminArtworkError::Repo(err) => repo_to_api(err),
    }
}

pub fn collection_to_api(err: AdminCollectionError) -> ApiError {
    match err {
        AdminCollectionError::ConstraintViolation(field) => ApiError::constraint(field),
        AdminCollectionError::Repo(err) => repo_to_api(err),
    }
}

pub fn media_to_api(err: AdminMediaError) -> ApiError {
    match err {
        AdminMediaError::ConstraintViolation(field) => ApiError::constraint(field),
        AdminMediaError::Repo(err) => repo_to_api(err),
    }
}

pub fn section_to_api(err: AdminSectionError) -> ApiError {
    match err {
        AdminSectionError::ConstraintViolation(field) => ApiError::constraint(field),
        AdminSectionError::Repo(err) => repo_to_api(err),
    }
}

pub fn newsletter_to_api(err: NewsletterError) -> ApiError {
    match err {
        NewsletterError::ConstraintViolation(field) => ApiError::constraint(field),
        NewsletterError::AlreadySubscribed => ApiError::new(
            StatusCode::CONFLICT,
            codes::ALREADY_SUBSCRIBED,
            "Email is already subscribed",
            None,
        ),
        NewsletterError::Repo(err) => repo_to_api(err),
    }
}
