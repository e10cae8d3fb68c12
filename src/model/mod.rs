#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// A single graded item with a percentage weight.
pub mod evaluation;
/// A student's record of evaluations and attendance.
pub mod student;

pub use evaluation::Evaluation;
pub use student::Student;
