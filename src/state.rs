use std::sync::Arc;

use anyhow::Context;

use crate::config::AppConfig;
use crate::db;
use crate::students::{MySqlStudentStore, PageRenderer, StudentStore};

#[derive(Clone)]
pub struct AppState {
    pub students: Arc<dyn StudentStore>,
    pub pages: Arc<PageRenderer>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Connect, bootstrap the schema and wire the MySQL-backed store.
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let pool = db::connect(&config.db).await?;
        db::ensure_schema(&pool).await?;

        let students = Arc::new(MySqlStudentStore::new(pool)) as Arc<dyn StudentStore>;
        Self::from_parts(students, Arc::new(config))
    }

    pub fn from_parts(
        students: Arc<dyn StudentStore>,
        config: Arc<AppConfig>,
    ) -> anyhow::Result<Self> {
        let pages = PageRenderer::new(config.ui_style).context("load page template")?;
        Ok(Self {
            students,
            pages: Arc::new(pages),
            config,
        })
    }
}
