//! In-process stores used by the router tests.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;
use time::{macros::datetime, Duration, OffsetDateTime};

use super::repo::{StoreError, StudentStore};
use super::repo_types::{NewStudent, Student};

#[derive(Default)]
struct Table {
    rows: Vec<Student>,
    last_id: u64,
}

/// Behaves like the `students` table; counts the statements it was asked to run.
#[derive(Default)]
pub struct MemoryStudentStore {
    table: Mutex<Table>,
    inserts: AtomicUsize,
    deletes: AtomicUsize,
    same_second: bool,
}

impl MemoryStudentStore {
    /// Stamps every row with one `created_at`, like inserts landing in the
    /// same second of a `TIMESTAMP` column.
    pub fn same_second() -> Self {
        Self {
            same_second: true,
            ..Self::default()
        }
    }

    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn list_all(&self) -> Result<Vec<Student>, StoreError> {
        let table = self.table.lock().unwrap();
        let mut rows = table.rows.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn insert(&self, student: &NewStudent) -> Result<u64, StoreError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        let mut table = self.table.lock().unwrap();
        table.last_id += 1;
        let id = table.last_id;
        let offset = if self.same_second { 0 } else { id as i64 };
        let created_at: OffsetDateTime =
            datetime!(2026-01-01 00:00 UTC) + Duration::seconds(offset);
        table.rows.push(Student {
            id,
            name: student.name.clone(),
            age: student.age,
            department: student.department.clone(),
            created_at,
        });
        Ok(id)
    }

    async fn delete_by_id(&self, id: u64) -> Result<(), StoreError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|s| s.id != id);
        if table.rows.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}

/// Every call fails as if the database went away.
pub struct BrokenStudentStore;

#[async_trait]
impl StudentStore for BrokenStudentStore {
    async fn list_all(&self) -> Result<Vec<Student>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn insert(&self, _student: &NewStudent) -> Result<u64, StoreError> {
        Err(StoreError::Database(sqlx::Error::Protocol(
            "Duplicate entry 'x' for key 'PRIMARY'".into(),
        )))
    }

    async fn delete_by_id(&self, _id: u64) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}
