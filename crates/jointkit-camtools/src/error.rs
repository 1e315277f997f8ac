//! Error types for the CAM tool generators.
//!
//! Validation failures are values, never panics, and their `Display` text
//! doubles as the status message the host shows the user. No motion is ever
//! emitted once validation has failed.

use thiserror::Error;

/// Errors that can occur during CAM tool operations.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// Invalid parameters were provided to a CAM tool.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),
}

/// Errors related to CAM tool parameter validation.
#[derive(Error, Debug)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// Parameters are mutually incompatible.
    #[error("Incompatible parameters: {0}")]
    Incompatible(String),
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cam_tool_error_display() {
        let err = CamToolError::InvalidParameters("depth must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameters: depth must be positive");
    }

    #[test]
    fn test_parameter_error_display() {
        let err = ParameterError::OutOfRange {
            name: "stepover_percent".to_string(),
            value: 120.0,
            min: 0.0,
            max: 100.0,
        };
        assert_eq!(
            err.to_string(),
            "Parameter 'stepover_percent' out of range: 120 (valid: 0..100)"
        );

        let err = ParameterError::InvalidValue {
            name: "step_down".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for 'step_down': must be positive");
    }

    #[test]
    fn test_error_conversion() {
        let param_err = ParameterError::Incompatible("box wider than the joint".to_string());
        let cam_err: CamToolError = param_err.into();
        assert!(matches!(cam_err, CamToolError::Parameter(_)));
        assert_eq!(
            cam_err.to_string(),
            "Parameter error: Incompatible parameters: box wider than the joint"
        );
    }
}
