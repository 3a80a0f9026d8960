//! `SQLite` implementation of the `CourseRepository` trait.
//!
//! A course spans two tables: the `courses` row and its `course_students`
//! membership rows. Every write touches both inside one transaction.

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

use campus_core::{Course, CourseFilter, CourseRepository, CourseUpdate, NewCourse, RepositoryError};

use super::row_mappers::{COURSE_GROUP_BY, COURSE_SELECT, map_sqlx_error, row_to_course};

/// `SQLite` implementation of the `CourseRepository` trait.
pub struct SqliteCourseRepository {
    pool: SqlitePool,
}

impl SqliteCourseRepository {
    /// Create a new `SQLite` course repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Replace the membership set of `course_id` with `student_ids`.
async fn replace_members(
    conn: &mut SqliteConnection,
    course_id: i64,
    student_ids: &[i64],
) -> Result<(), RepositoryError> {
    sqlx::query("DELETE FROM course_students WHERE course_id = ?")
        .bind(course_id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx_error)?;

    for student_id in student_ids {
        sqlx::query("INSERT OR IGNORE INTO course_students (course_id, student_id) VALUES (?, ?)")
            .bind(course_id)
            .bind(*student_id)
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx_error)?;
    }

    Ok(())
}

#[async_trait]
impl CourseRepository for SqliteCourseRepository {
    async fn list(&self, filter: &CourseFilter) -> Result<Vec<Course>, RepositoryError> {
        let mut query = QueryBuilder::<Sqlite>::new(COURSE_SELECT);
        let mut clause = " WHERE ";
        if let Some(id) = filter.id {
            query.push(clause).push("c.id = ").push_bind(id);
            clause = " AND ";
        }
        if let Some(name) = &filter.name {
            query.push(clause).push("c.name = ").push_bind(name.clone());
        }
        query.push(COURSE_GROUP_BY);

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_course).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Course, RepositoryError> {
        let row = sqlx::query(&format!("{COURSE_SELECT} WHERE c.id = ?{COURSE_GROUP_BY}"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Course with ID {id}")))?;

        row_to_course(&row)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM courses")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        u64::try_from(count).map_err(|e| RepositoryError::Storage(e.to_string()))
    }

    async fn insert(&self, course: &NewCourse) -> Result<Course, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let id = sqlx::query("INSERT INTO courses (name) VALUES (?)")
            .bind(&course.name)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?
            .last_insert_rowid();

        replace_members(&mut *tx, id, &course.students).await?;
        tx.commit().await.map_err(map_sqlx_error)?;

        self.get_by_id(id).await
    }

    async fn update(&self, id: i64, update: &CourseUpdate) -> Result<Course, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let exists = sqlx::query("SELECT 1 FROM courses WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx_error)?
            .is_some();
        if !exists {
            return Err(RepositoryError::NotFound(format!("Course with ID {id}")));
        }

        if let Some(name) = &update.name {
            sqlx::query("UPDATE courses SET name = ? WHERE id = ?")
                .bind(name)
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;
        }

        if let Some(students) = &update.students {
            replace_members(&mut *tx, id, students).await?;
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        self.get_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        sqlx::query("DELETE FROM course_students WHERE course_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        let result = sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Course with ID {id}")));
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }
}
