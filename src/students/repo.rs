use async_trait::async_trait;
use sqlx::MySqlPool;
use thiserror::Error;

use super::repo_types::{NewStudent, Student};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("student {0} not found")]
    NotFound(u64),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Persistence seam for the `students` table.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// All rows, newest first. Empty vec when the table is empty.
    async fn list_all(&self) -> Result<Vec<Student>, StoreError>;
    /// Insert one row and return its id. Input is assumed validated.
    async fn insert(&self, student: &NewStudent) -> Result<u64, StoreError>;
    /// Remove one row. `StoreError::NotFound` when nothing matched.
    async fn delete_by_id(&self, id: u64) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct MySqlStudentStore {
    db: MySqlPool,
}

impl MySqlStudentStore {
    pub fn new(db: MySqlPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentStore for MySqlStudentStore {
    async fn list_all(&self) -> Result<Vec<Student>, StoreError> {
        let rows = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, name, age, department, created_at
              FROM students
             ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn insert(&self, student: &NewStudent) -> Result<u64, StoreError> {
        let res = sqlx::query(
            r#"
            INSERT INTO students (name, age, department)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&student.name)
        .bind(student.age)
        .bind(&student.department)
        .execute(&self.db)
        .await?;
        Ok(res.last_insert_id())
    }

    async fn delete_by_id(&self, id: u64) -> Result<(), StoreError> {
        let res = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;
        if res.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
