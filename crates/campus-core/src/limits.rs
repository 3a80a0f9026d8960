//! Tunable limits applied by the core services.

use serde::{Deserialize, Serialize};

/// Maximum length (in characters) of a student or course name.
pub const MAX_NAME_LEN: usize = 256;

/// Limits applied when courses are created or updated through `CourseService`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseLimits {
    /// Upper bound on enrolled students per course. `None` means unlimited.
    pub max_students_per_course: Option<usize>,
}

impl CourseLimits {
    /// No limits at all.
    pub const fn unlimited() -> Self {
        Self {
            max_students_per_course: None,
        }
    }

    /// Cap enrolment at `max` students per course.
    #[must_use]
    pub const fn with_max_students(mut self, max: usize) -> Self {
        self.max_students_per_course = Some(max);
        self
    }
}
