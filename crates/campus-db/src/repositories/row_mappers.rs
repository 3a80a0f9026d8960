//! Row mapping helpers for `SQLite` queries.

use campus_core::{Course, RepositoryError, Student, normalize_student_ids};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT for students.
pub const STUDENT_SELECT: &str = "SELECT id, name FROM students";

/// Shared SELECT for courses with their memberships folded into one column.
///
/// Callers append filters and must finish with [`COURSE_GROUP_BY`].
pub const COURSE_SELECT: &str = "SELECT c.id, c.name, GROUP_CONCAT(cs.student_id) AS student_ids \
     FROM courses c LEFT JOIN course_students cs ON cs.course_id = c.id";

/// Closing clause for [`COURSE_SELECT`].
pub const COURSE_GROUP_BY: &str = " GROUP BY c.id, c.name ORDER BY c.id";

/// Map a sqlx error onto the port error type.
pub fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    match &e {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            RepositoryError::Constraint(db.message().to_string())
        }
        _ => RepositoryError::Storage(e.to_string()),
    }
}

/// Parse a database row into a Student.
pub fn row_to_student(row: &SqliteRow) -> Result<Student, RepositoryError> {
    Ok(Student {
        id: row.try_get("id").map_err(map_sqlx_error)?,
        name: row.try_get("name").map_err(map_sqlx_error)?,
    })
}

/// Parse a [`COURSE_SELECT`] row into a Course.
pub fn row_to_course(row: &SqliteRow) -> Result<Course, RepositoryError> {
    let student_ids: Option<String> = row.try_get("student_ids").map_err(map_sqlx_error)?;

    Ok(Course {
        id: row.try_get("id").map_err(map_sqlx_error)?,
        name: row.try_get("name").map_err(map_sqlx_error)?,
        students: parse_student_ids(student_ids.as_deref())?,
    })
}

/// Parse the comma-separated `GROUP_CONCAT` output. `NULL` means no members.
fn parse_student_ids(raw: Option<&str>) -> Result<Vec<i64>, RepositoryError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    let ids = raw
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<i64>()
                .map_err(|e| RepositoryError::Storage(format!("bad student id '{part}': {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(normalize_student_ids(&ids))
}
