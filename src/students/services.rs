use thiserror::Error;

use super::repo_types::NewStudent;

/// Options offered by the form's department picker. Not enforced server-side.
pub const DEPARTMENTS: [&str; 6] = [
    "Computer Science",
    "Engineering",
    "Business",
    "Medicine",
    "Arts",
    "Science",
];

/// Column width of `name` and `department`.
pub const MAX_TEXT_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill all fields correctly")]
    InvalidStudent,
    #[error("Invalid student ID")]
    InvalidId,
}

/// Trim and check a submitted student. Any rejection maps to the same message.
pub fn validate_new_student(
    name: &str,
    age: &str,
    department: &str,
) -> Result<NewStudent, ValidationError> {
    let name = name.trim();
    let department = department.trim();
    let age = age.trim().parse::<i32>().unwrap_or(0);

    if name.is_empty() || department.is_empty() || age <= 0 {
        return Err(ValidationError::InvalidStudent);
    }
    if name.chars().count() > MAX_TEXT_LEN || department.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::InvalidStudent);
    }

    Ok(NewStudent {
        name: name.to_owned(),
        age,
        department: department.to_owned(),
    })
}

/// Parse a row id coming from a query string or form field.
pub fn parse_student_id(raw: Option<&str>) -> Result<u64, ValidationError> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|id| *id > 0)
        .ok_or(ValidationError::InvalidId)
}
