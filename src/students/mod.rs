pub mod dto;
pub mod handlers;
#[cfg(test)]
pub(crate) mod memory;
mod repo;
mod repo_types;
mod services;
mod view;

pub use repo::{MySqlStudentStore, StoreError, StudentStore};
pub use services::ValidationError;
pub use view::PageRenderer;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::student_routes()
}
