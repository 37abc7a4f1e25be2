//! Status message types for operation feedback.

use std::fmt;

use crate::error::GuideError;

/// A one-line outcome message shown after an action.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl From<&GuideError> for OperationStatus {
    fn from(error: &GuideError) -> Self {
        Self::failure(error.to_string())
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Imported 3 notes");
        assert_eq!(success.to_string(), "Success: Imported 3 notes\n");

        let failure = OperationStatus::from(&GuideError::EmptyInput);
        assert_eq!(failure.to_string(), "Error: Note text cannot be empty\n");
    }
}
