//! `campus courses` handlers.

use anyhow::Result;

use campus_core::{CourseFilter, NewCourse};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{format_student_ids, print_separator, truncate_string};

/// List courses, optionally restricted to an exact name.
pub async fn list(ctx: &CliContext, name: Option<String>) -> Result<()> {
    let filter = CourseFilter { id: None, name };
    let courses = ctx
        .app()
        .courses()
        .list(&filter)
        .await
        .map_err(CliError::from)?;

    if courses.is_empty() {
        println!("No courses found.");
        return Ok(());
    }

    println!("{:<6} {:<40} {:<8}", "ID", "Name", "Students");
    print_separator(56);
    for course in &courses {
        println!(
            "{:<6} {:<40} {:<8}",
            course.id,
            truncate_string(&course.name, 40),
            course.students.len()
        );
    }
    println!();
    println!("{} course(s)", courses.len());
    Ok(())
}

/// Show one course with its member IDs.
pub async fn show(ctx: &CliContext, id: i64) -> Result<()> {
    let course = ctx.app().courses().get(id).await.map_err(CliError::from)?;

    println!("ID:       {}", course.id);
    println!("Name:     {}", course.name);
    println!("Students: {}", format_student_ids(&course.students));
    Ok(())
}

/// Add a course enrolling the given students.
pub async fn add(ctx: &CliContext, name: &str, students: Vec<i64>) -> Result<()> {
    let course = ctx
        .app()
        .courses()
        .create(NewCourse::new(name, students))
        .await
        .map_err(CliError::from)?;

    println!(
        "Added course {} ({}) with {} student(s)",
        course.id,
        course.name,
        course.students.len()
    );
    Ok(())
}

/// Remove a course.
pub async fn remove(ctx: &CliContext, id: i64) -> Result<()> {
    ctx.app()
        .courses()
        .delete(id)
        .await
        .map_err(CliError::from)?;

    println!("Removed course {id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::{CliConfig, bootstrap};
    use campus_core::NewStudent;

    async fn context(dir: &tempfile::TempDir) -> CliContext {
        bootstrap(CliConfig::new(dir.path().join("campus.db")))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_show_and_filter() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir).await;
        let a = ctx.app().students().create(NewStudent::new("A")).await.unwrap();
        let b = ctx.app().students().create(NewStudent::new("B")).await.unwrap();

        add(&ctx, "Python", vec![b.id, a.id, b.id]).await.unwrap();
        add(&ctx, "Rust", Vec::new()).await.unwrap();

        let filter = CourseFilter {
            id: None,
            name: Some("Python".to_string()),
        };
        let courses = ctx.app().courses().list(&filter).await.unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].students, vec![a.id, b.id]);

        list(&ctx, Some("Python".to_string())).await.unwrap();
        show(&ctx, courses[0].id).await.unwrap();
    }

    #[tokio::test]
    async fn test_add_with_unknown_student_fails() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir).await;

        let err = add(&ctx, "Python", vec![99]).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::Arguments(_))
        ));
        assert_eq!(ctx.app().courses().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_show_and_remove_missing() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir).await;

        assert!(show(&ctx, 1).await.is_err());
        assert!(remove(&ctx, 1).await.is_err());
    }

    #[tokio::test]
    async fn test_remove_course() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir).await;

        add(&ctx, "Python", Vec::new()).await.unwrap();
        let id = ctx.app().courses().list(&CourseFilter::default()).await.unwrap()[0].id;

        remove(&ctx, id).await.unwrap();
        assert_eq!(ctx.app().courses().count().await.unwrap(), 0);
    }
}
