#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use tracing::debug;

use super::results::{CalculationDetails, EvaluationRow, GradeBreakdown};
use crate::{
    error::GradeError,
    model::{Evaluation, Student},
    policy::{AttendancePolicy, ExtraPointsPolicy},
};

/// Rounds to two decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Clone, Debug, Default)]
/// A struct that computes final grades from a student's evaluations, the
/// attendance policy, and the extra-points policy.
///
/// Both policies are held immutably, so one calculator may serve any number
/// of calculations for different students and years.
pub struct GradeCalculator {
    /// Policy deciding the attendance penalty.
    attendance_policy:   AttendancePolicy,
    /// Policy deciding the per-year bonus.
    extra_points_policy: ExtraPointsPolicy,
}

impl GradeCalculator {
    /// Creates a calculator from the two policies it consults.
    pub fn new(
        attendance_policy: AttendancePolicy,
        extra_points_policy: ExtraPointsPolicy,
    ) -> Self {
        Self {
            attendance_policy,
            extra_points_policy,
        }
    }

    /// Calculates the final grade for `student` in `academic_year`.
    ///
    /// The weighted average is renormalized to a 0-100 weight basis: a total
    /// weight other than 100 scales the average as if the weights summed to
    /// exactly 100. Only a total of exactly zero is rejected; there is no
    /// upper bound on the total. The final grade is floored at zero and has
    /// no upper cap. Identical inputs always produce identical output.
    pub fn calculate_final_grade(
        &self,
        student: &Student,
        academic_year: i64,
    ) -> Result<GradeBreakdown, GradeError> {
        if student.evaluations().is_empty() {
            return Err(GradeError::NoEvaluations);
        }

        let total_weight = student.total_weight();
        if total_weight == 0.0 {
            return Err(GradeError::ZeroTotalWeight);
        }

        let weighted_sum: f64 = student
            .evaluations()
            .iter()
            .map(Evaluation::weighted_grade)
            .sum();
        let weighted_average = weighted_sum / (total_weight / 100.0);

        let attendance_penalty = self
            .attendance_policy
            .penalty_for(student.has_reached_minimum_classes());
        let extra_points = self.extra_points_policy.bonus_for_year(academic_year);

        let final_grade = (weighted_average - attendance_penalty + extra_points).max(0.0);

        debug!(
            student_id = student.student_id(),
            weighted_average, attendance_penalty, extra_points, final_grade,
            "calculated final grade"
        );

        Ok(GradeBreakdown {
            weighted_average: round2(weighted_average),
            attendance_penalty: round2(attendance_penalty),
            extra_points: round2(extra_points),
            final_grade: round2(final_grade),
        })
    }

    /// Produces the full report for `student` in `academic_year`: the
    /// [`GradeBreakdown`] plus the per-evaluation audit trail. Failures from
    /// [`Self::calculate_final_grade`] propagate unchanged.
    pub fn calculation_details(
        &self,
        student: &Student,
        academic_year: i64,
    ) -> Result<CalculationDetails, GradeError> {
        let breakdown = self.calculate_final_grade(student, academic_year)?;

        let evaluations: Vec<EvaluationRow> = student
            .evaluations()
            .iter()
            .map(|evaluation| EvaluationRow {
                grade: evaluation.grade(),
                weight: evaluation.weight(),
                weighted_grade: round2(evaluation.weighted_grade()),
            })
            .collect();

        Ok(CalculationDetails::builder()
            .student_id(student.student_id())
            .number_of_evaluations(student.evaluations().len())
            .evaluations(evaluations)
            .total_weight(round2(student.total_weight()))
            .has_reached_minimum_classes(student.has_reached_minimum_classes())
            .extra_points_policy_active(self.extra_points_policy.is_active_for_year(academic_year))
            .breakdown(breakdown)
            .build())
    }
}
