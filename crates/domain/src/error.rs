//! Common error types used across the workspace.
//!
//! Widget rendering itself never fails: unknown statuses and variants degrade
//! to documented defaults. Errors only exist where values are *configured*.

/// Base error for the flowboard domain.
#[derive(Debug, thiserror::Error)]
pub enum FlowboardError {
    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// A value object was built with inputs that break its invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("animation duration must be greater than zero")]
    ZeroDuration,
    #[error("unknown easing curve: {0}")]
    UnknownEasing(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_flowboard_error() {
        let err: FlowboardError = ValidationError::ZeroDuration.into();
        assert!(matches!(
            err,
            FlowboardError::Validation(ValidationError::ZeroDuration)
        ));
    }

    #[test]
    fn should_name_unknown_easing_in_message() {
        let err = ValidationError::UnknownEasing("bounce".to_string());
        assert_eq!(err.to_string(), "unknown easing curve: bounce");
    }
}
