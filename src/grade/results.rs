#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::{Deserialize, Serialize};
use tabled::Tabled;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
/// A struct holding the four headline numbers of a final-grade calculation,
/// each rounded to two decimal places.
pub struct GradeBreakdown {
    /// The weighted average, renormalized to a total weight of 100.
    pub weighted_average:   f64,
    /// Points deducted for missing the attendance minimum.
    pub attendance_penalty: f64,
    /// Extra points granted by the per-year policy.
    pub extra_points:       f64,
    /// The final grade, floored at zero.
    pub final_grade:        f64,
}

#[derive(Tabled, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
/// A struct representing one row of the per-evaluation breakdown in a
/// detailed report.
pub struct EvaluationRow {
    /// * `grade`: the grade received for the evaluation
    #[tabled(rename = "Grade")]
    pub grade:          f64,
    /// * `weight`: the percentage weight of the evaluation
    #[tabled(rename = "Weight %")]
    pub weight:         f64,
    /// * `weighted_grade`: the weighted contribution, rounded to 2 decimals
    #[tabled(rename = "Weighted")]
    pub weighted_grade: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
#[builder(doc)]
/// A struct holding the full calculation report: the headline numbers plus
/// everything needed to audit them.
pub struct CalculationDetails {
    /// * `student_id`: the student the calculation is for
    pub student_id:                  String,
    /// * `number_of_evaluations`: how many evaluations were recorded
    pub number_of_evaluations:       usize,
    /// * `evaluations`: per-evaluation breakdown in insertion order
    pub evaluations:                 Vec<EvaluationRow>,
    /// * `total_weight`: sum of the weights, rounded to 2 decimals
    pub total_weight:                f64,
    /// * `has_reached_minimum_classes`: the raw attendance flag
    pub has_reached_minimum_classes: bool,
    /// * `extra_points_policy_active`: whether the extra-points policy is
    ///   active for the queried year
    pub extra_points_policy_active:  bool,
    /// * `breakdown`: the headline numbers of the calculation
    #[serde(flatten)]
    pub breakdown:                   GradeBreakdown,
}
