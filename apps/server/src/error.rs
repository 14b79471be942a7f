//! Crate-wide error type and its HTTP mapping

use axum::{
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

/// Entity name used in problem bodies and alert headers.
pub const ENTITY_NAME: &str = "consultorio";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Request rejected before touching the store. `error_key` is echoed to
    /// clients as `error.{error_key}`.
    #[error("{message}")]
    BadRequestAlert {
        message: String,
        entity_name: &'static str,
        error_key: &'static str,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// An extractor refused the request body; keeps the status it chose
    /// (413 over the body limit, 415 without a JSON content type, ...).
    #[error("{detail}")]
    Rejected { status: StatusCode, detail: String },

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Consultorio not found: {id}")]
    NotFound { id: i64 },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn bad_request_alert(message: impl Into<String>, error_key: &'static str) -> Self {
        Self::BadRequestAlert {
            message: message.into(),
            entity_name: ENTITY_NAME,
            error_key,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequestAlert { .. } | Self::InvalidRequest(_) | Self::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Rejected { status, .. } => *status,
            Self::Database(_) | Self::Migration(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::BadRequestAlert { .. } | Self::InvalidRequest(_) => "Bad Request",
            Self::Validation(_) => "Method argument not valid",
            Self::NotFound { .. } => "Not Found",
            Self::Rejected { status, .. } => status.canonical_reason().unwrap_or("Bad Request"),
            Self::Database(_) | Self::Migration(_) | Self::Internal(_) => {
                "Internal Server Error"
            }
        }
    }

    /// Problem body plus optional application error headers.
    ///
    /// Store failures are logged here and replaced by a generic detail so
    /// driver messages never reach clients.
    pub fn into_problem_response(self, application_name: &str) -> Response {
        let status = self.status_code();

        let (detail, message) = match &self {
            Self::Database(_) | Self::Migration(_) | Self::Internal(_) => {
                tracing::error!(error = %self, "Request failed with internal error");
                (
                    "An unexpected error occurred".to_string(),
                    "error.http.500".to_string(),
                )
            }
            Self::BadRequestAlert { error_key, .. } => {
                (self.to_string(), format!("error.{error_key}"))
            }
            Self::Validation(_) => (self.to_string(), "error.validation".to_string()),
            Self::NotFound { .. } => (self.to_string(), "error.http.404".to_string()),
            Self::InvalidRequest(_) => (self.to_string(), "error.http.400".to_string()),
            Self::Rejected { status, .. } => {
                (self.to_string(), format!("error.http.{}", status.as_u16()))
            }
        };

        let mut body = json!({
            "type": "about:blank",
            "title": self.title(),
            "status": status.as_u16(),
            "detail": detail,
            "message": message,
        });

        let mut alert: Option<(String, &'static str)> = None;
        if let Self::BadRequestAlert {
            entity_name,
            error_key,
            ..
        } = &self
        {
            body["entityName"] = json!(entity_name);
            body["errorKey"] = json!(error_key);
            alert = Some((format!("error.{error_key}"), *entity_name));
        }

        let mut response = (status, Json(body)).into_response();
        let headers = response.headers_mut();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );

        if let Some((error, params)) = alert {
            let error_name = format!("x-{}-error", application_name.to_ascii_lowercase());
            let params_name = format!("x-{}-params", application_name.to_ascii_lowercase());
            if let (Ok(error_name), Ok(params_name), Ok(error), Ok(params)) = (
                HeaderName::try_from(error_name),
                HeaderName::try_from(params_name),
                HeaderValue::try_from(error),
                HeaderValue::from_str(params),
            ) {
                headers.insert(error_name, error);
                headers.insert(params_name, params);
            }
        }

        response
    }
}
