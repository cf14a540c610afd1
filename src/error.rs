use axum::response::{IntoResponse, Redirect, Response};
use thiserror::Error;

use crate::students::{dto::BannerQuery, StoreError, ValidationError};

/// What the user was trying to do when persistence failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Add,
    Delete,
}

impl Action {
    fn failure_message(self) -> &'static str {
        match self {
            Action::List => "Error fetching students",
            Action::Add => "Error adding student",
            Action::Delete => "Error deleting student",
        }
    }
}

/// Every way a form submission can fail. Rendered as a redirect to the
/// listing page with an error banner; database detail stays in the logs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("student {0} not found")]
    NotFound(u64),
    #[error("{action:?} failed: {source}")]
    Persistence {
        action: Action,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    pub fn from_store(action: Action, err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => AppError::NotFound(id),
            StoreError::Database(source) => AppError::Persistence { action, source },
        }
    }

    /// Text safe to show in the banner.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(v) => v.to_string(),
            AppError::NotFound(_) => "Student not found".to_owned(),
            AppError::Persistence { action, .. } => action.failure_message().to_owned(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(e) => tracing::warn!(error = %e, "rejected submission"),
            AppError::NotFound(id) => tracing::warn!(student_id = id, "student not found"),
            AppError::Persistence { action, source } => {
                tracing::error!(?action, error = %source, "database operation failed")
            }
        }
        Redirect::to(&BannerQuery::error(self.user_message()).location()).into_response()
    }
}
