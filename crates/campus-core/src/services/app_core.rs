//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters (CLI, Web)
//! receive an `AppCore` instance and use it to access all functionality.

use crate::limits::CourseLimits;
use crate::ports::Repos;

use super::{CourseService, StudentService};

/// The core application facade.
///
/// `AppCore` provides access to all core services. It's constructed at the
/// adapter's composition root (main.rs or bootstrap.rs) with concrete
/// repository implementations.
///
/// # Example
///
/// ```ignore
/// let repos = CoreFactory::build_repos(pool);
/// let core = AppCore::new(repos, CourseLimits::unlimited());
///
/// let courses = core.courses().list(&CourseFilter::default()).await?;
/// ```
pub struct AppCore {
    students: StudentService,
    courses: CourseService,
}

impl AppCore {
    /// Create a new `AppCore` from repositories and course limits.
    pub fn new(repos: Repos, limits: CourseLimits) -> Self {
        Self {
            students: StudentService::new(repos.students.clone()),
            courses: CourseService::new(repos.courses, repos.students, limits),
        }
    }

    /// Access the student service.
    pub const fn students(&self) -> &StudentService {
        &self.students
    }

    /// Access the course service.
    pub const fn courses(&self) -> &CourseService {
        &self.courses
    }
}
