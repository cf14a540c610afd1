use sqlx::FromRow;
use time::OffsetDateTime;

/// Student record in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Student {
    pub id: u64,                    // auto-increment, never reused
    pub name: String,
    pub age: i32,
    pub department: String,
    pub created_at: OffsetDateTime, // set by the database on insert
}

/// Validated input for a new row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub age: i32,
    pub department: String,
}
