//! `SQLite` implementation of the `StudentRepository` trait.

use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use campus_core::{NewStudent, RepositoryError, Student, StudentFilter, StudentRepository, StudentUpdate};

use super::row_mappers::{STUDENT_SELECT, map_sqlx_error, row_to_student};

/// IDs bound per `IN (...)` lookup.
const LOOKUP_CHUNK_SIZE: usize = 500;

/// `SQLite` implementation of the `StudentRepository` trait.
pub struct SqliteStudentRepository {
    pool: SqlitePool,
}

impl SqliteStudentRepository {
    /// Create a new `SQLite` student repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for SqliteStudentRepository {
    async fn list(&self, filter: &StudentFilter) -> Result<Vec<Student>, RepositoryError> {
        let mut query = QueryBuilder::<Sqlite>::new(STUDENT_SELECT);
        let mut clause = " WHERE ";
        if let Some(id) = filter.id {
            query.push(clause).push("id = ").push_bind(id);
            clause = " AND ";
        }
        if let Some(name) = &filter.name {
            query.push(clause).push("name = ").push_bind(name.clone());
        }
        query.push(" ORDER BY id");

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_student).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Student, RepositoryError> {
        let row = sqlx::query(&format!("{STUDENT_SELECT} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Student with ID {id}")))?;

        row_to_student(&row)
    }

    async fn find_missing(&self, ids: &[i64]) -> Result<Vec<i64>, RepositoryError> {
        let mut existing = HashSet::with_capacity(ids.len());

        // One query per chunk keeps each statement under SQLite's bound-parameter limit
        for chunk in ids.chunks(LOOKUP_CHUNK_SIZE) {
            let mut query = QueryBuilder::<Sqlite>::new("SELECT id FROM students WHERE id IN (");
            let mut separated = query.separated(", ");
            for id in chunk {
                separated.push_bind(*id);
            }
            separated.push_unseparated(")");

            let found: Vec<i64> = query
                .build_query_scalar()
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;
            existing.extend(found);
        }

        Ok(ids
            .iter()
            .copied()
            .filter(|id| !existing.contains(id))
            .collect())
    }

    async fn insert(&self, student: &NewStudent) -> Result<Student, RepositoryError> {
        let id = sqlx::query("INSERT INTO students (name) VALUES (?)")
            .bind(&student.name)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .last_insert_rowid();

        Ok(Student {
            id,
            name: student.name.clone(),
        })
    }

    async fn update(&self, id: i64, update: &StudentUpdate) -> Result<Student, RepositoryError> {
        if let Some(name) = &update.name {
            let result = sqlx::query("UPDATE students SET name = ? WHERE id = ?")
                .bind(name)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

            if result.rows_affected() == 0 {
                return Err(RepositoryError::NotFound(format!("Student with ID {id}")));
            }
        }

        self.get_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        // Memberships first, so this works even without the FK cascade
        sqlx::query("DELETE FROM course_students WHERE student_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Student with ID {id}")));
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }
}
