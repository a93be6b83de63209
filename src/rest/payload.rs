//! Request body shared by the create and update routes of every generation.

use serde::Deserialize;

use crate::rest::error::ApiError;

/// Incoming task body: `{"task_title": …, "task_desc": …, "is_finished": …}`.
///
/// `is_finished` defaults to `false` when omitted. Missing title/description
/// fields are rejected by JSON deserialization before a handler runs; empty
/// ones are caught by [`TaskPayload::validate`].
#[derive(Debug, Clone, Deserialize)]
pub struct TaskPayload {
    pub task_title: String,
    pub task_desc: String,
    #[serde(default)]
    pub is_finished: bool,
}

impl TaskPayload {
    /// Structural validation: title and description must be non-empty.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.task_title.is_empty() {
            return Err(ApiError::Validation(
                "task_title must not be empty".to_string(),
            ));
        }
        if self.task_desc.is_empty() {
            return Err(ApiError::Validation(
                "task_desc must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str, desc: &str) -> TaskPayload {
        TaskPayload {
            task_title: title.to_string(),
            task_desc: desc.to_string(),
            is_finished: false,
        }
    }

    #[test]
    fn non_empty_fields_pass() {
        assert!(payload("a", "b").validate().is_ok());
    }

    #[test]
    fn empty_title_or_desc_is_rejected() {
        assert!(matches!(
            payload("", "b").validate(),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            payload("a", "").validate(),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn is_finished_defaults_to_false() {
        let p: TaskPayload =
            serde_json::from_str(r#"{"task_title":"a","task_desc":"b"}"#).unwrap();
        assert!(!p.is_finished);
    }
}
