//! Input validation shared by the services.

use crate::limits::MAX_NAME_LEN;
use crate::ports::CoreError;

/// Validates a student or course name.
///
/// The name must contain at least one non-whitespace character and be at
/// most [`MAX_NAME_LEN`] characters long. The value itself is stored as given.
pub fn validate_name(field: &str, name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field}: This field may not be blank.")));
    }

    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "{field}: Ensure this field has no more than {MAX_NAME_LEN} characters (got {len})."
        )));
    }

    Ok(())
}
