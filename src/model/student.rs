#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::{error::GradeError, model::Evaluation};

#[derive(Clone, Debug, Default)]
/// A struct representing a student's in-progress grade record: an ordered
/// list of evaluations plus the minimum-attendance flag.
pub struct Student {
    /// Opaque student identifier.
    student_id: String,
    /// Evaluations in insertion order, capped at
    /// [`Student::MAX_EVALUATIONS`].
    evaluations: Vec<Evaluation>,
    /// Whether the student reached the minimum number of classes.
    has_reached_minimum_classes: bool,
}

impl Student {
    /// The maximum number of evaluations a student may carry.
    pub const MAX_EVALUATIONS: usize = 10;

    /// Creates an empty record for `student_id`. The attendance flag starts
    /// out unset.
    pub fn new(student_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            evaluations: Vec::new(),
            has_reached_minimum_classes: false,
        }
    }

    /// Appends an evaluation, preserving insertion order. Fails once
    /// [`Student::MAX_EVALUATIONS`] evaluations are already recorded.
    pub fn add_evaluation(&mut self, evaluation: Evaluation) -> Result<(), GradeError> {
        if self.evaluations.len() >= Self::MAX_EVALUATIONS {
            return Err(GradeError::CapacityExceeded {
                max: Self::MAX_EVALUATIONS,
            });
        }
        self.evaluations.push(evaluation);

        Ok(())
    }

    /// Returns the recorded evaluations in insertion order.
    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }

    /// Sum of all evaluation weights; `0.0` when none are recorded. The sum
    /// may legitimately differ from 100, the calculator renormalizes.
    pub fn total_weight(&self) -> f64 {
        self.evaluations.iter().map(Evaluation::weight).sum()
    }

    /// Returns the student identifier.
    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// Records whether the student reached the minimum number of classes.
    /// May be called any time before a calculation.
    pub fn set_attendance(&mut self, met_minimum: bool) {
        self.has_reached_minimum_classes = met_minimum;
    }

    /// Whether the student reached the minimum number of classes.
    pub fn has_reached_minimum_classes(&self) -> bool {
        self.has_reached_minimum_classes
    }
}
