//! `campus students` handlers.

use anyhow::Result;

use campus_core::{NewStudent, StudentFilter};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{print_separator, truncate_string};

/// List every student as a table.
pub async fn list(ctx: &CliContext) -> Result<()> {
    let students = ctx
        .app()
        .students()
        .list(&StudentFilter::default())
        .await
        .map_err(CliError::from)?;

    if students.is_empty() {
        println!("No students registered.");
        println!("Use 'campus students add <name>' to add one.");
        return Ok(());
    }

    println!("{:<6} {:<40}", "ID", "Name");
    print_separator(47);
    for student in &students {
        println!("{:<6} {:<40}", student.id, truncate_string(&student.name, 40));
    }
    println!();
    println!("{} student(s)", students.len());
    Ok(())
}

/// Add a student.
pub async fn add(ctx: &CliContext, name: &str) -> Result<()> {
    let student = ctx
        .app()
        .students()
        .create(NewStudent::new(name))
        .await
        .map_err(CliError::from)?;

    println!("Added student {} ({})", student.id, student.name);
    Ok(())
}

/// Remove a student. Their course memberships go with them.
pub async fn remove(ctx: &CliContext, id: i64) -> Result<()> {
    ctx.app()
        .students()
        .delete(id)
        .await
        .map_err(CliError::from)?;

    println!("Removed student {id}");
    Ok(())
}
