#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::GradeError,
    model::{Evaluation, Student},
    policy::ExtraPointsPolicy,
};

#[derive(Clone, Copy, Debug, Deserialize)]
/// A single grade/weight pair within a [`CalculationRequest`].
pub struct EvaluationInput {
    /// The grade received.
    pub grade:  f64,
    /// The percentage weight.
    pub weight: f64,
}

#[derive(Clone, Debug, Deserialize)]
/// A batch calculation request as decoded from a JSON file.
///
/// Decoding only checks the outer shape; grades, weights, capacity, and the
/// policy table shape are validated when the request is turned into core
/// objects, so the same [`GradeError`]s the constructors raise surface here
/// too.
pub struct CalculationRequest {
    /// The student identifier.
    pub student_id: String,
    /// Grade/weight pairs in recording order.
    pub evaluations: Vec<EvaluationInput>,
    /// Whether the student reached the minimum number of classes.
    #[serde(default)]
    pub has_reached_minimum_classes: bool,
    /// The per-year staff-agreement table; must be a sequence of booleans.
    pub extra_points_by_year: Value,
    /// The 0-based academic year to consult the policy for.
    #[serde(default)]
    pub academic_year: i64,
}

impl CalculationRequest {
    /// Parses a request from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Could not parse the calculation request")
    }

    /// Builds the student record described by the request.
    pub fn student(&self) -> Result<Student, GradeError> {
        let mut student = Student::new(self.student_id.clone());
        for input in &self.evaluations {
            student.add_evaluation(Evaluation::new(input.grade, input.weight)?)?;
        }
        student.set_attendance(self.has_reached_minimum_classes);

        Ok(student)
    }

    /// Builds the extra-points policy described by the request.
    pub fn extra_points_policy(&self) -> Result<ExtraPointsPolicy, GradeError> {
        ExtraPointsPolicy::from_value(&self.extra_points_by_year)
    }
}
