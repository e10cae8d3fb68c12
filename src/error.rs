#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// An enum to represent validation failures raised by the core.
///
/// Every failure is raised at the point of detection and propagates
/// unchanged through composing calls; none are retryable.
#[derive(thiserror::Error, Debug)]
pub enum GradeError {
    /// A negative grade was supplied for an evaluation.
    #[error("The grade must not be negative, got {got}.")]
    InvalidGrade {
        /// The offending grade value.
        got: f64,
    },
    /// An evaluation weight outside the `[0, 100]` percentage range.
    #[error("The weight must be between 0 and 100, got {got}.")]
    InvalidWeight {
        /// The offending weight value.
        got: f64,
    },
    /// The extra-points table was not a sequence of booleans.
    #[error("The extra-points table must be a sequence of booleans, got `{got}`.")]
    InvalidPolicyTable {
        /// The offending value, rendered as JSON.
        got: String,
    },
    /// An evaluation was added beyond the per-student maximum.
    #[error("No more than {max} evaluations can be recorded for a student.")]
    CapacityExceeded {
        /// The maximum number of evaluations allowed.
        max: usize,
    },
    /// A final grade was requested for a student with no evaluations.
    #[error("The student must have at least one evaluation.")]
    NoEvaluations,
    /// The evaluation weights sum to exactly zero.
    #[error("The total weight of the evaluations cannot be zero.")]
    ZeroTotalWeight,
}
