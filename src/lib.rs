//! # gradecalc
//!
//! A calculator for final academic grades: weighted evaluations, an
//! attendance penalty, and a per-year extra-points policy agreed by the
//! teaching staff.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Validation errors raised by the core
pub mod error;
/// For all things related to calculating and reporting final grades
pub mod grade;
/// Core value objects: evaluations and students
pub mod model;
/// Attendance and extra-points policies
pub mod policy;
/// The interactive prompt-driven grading session
pub mod shell;
