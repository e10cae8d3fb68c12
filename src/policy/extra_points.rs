#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GradeError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
/// A struct representing the extra-points policy agreed collectively by the
/// teaching staff, one agreement flag per 0-based academic-year index.
///
/// Immutable once built; shared read-only across calculations for different
/// students and years.
pub struct ExtraPointsPolicy {
    /// One staff-agreement flag per academic year.
    all_years_teachers: Vec<bool>,
}

impl ExtraPointsPolicy {
    /// Bonus points granted for a year where the policy is active.
    pub const EXTRA_POINTS_AMOUNT: f64 = 1.0;

    /// Creates a policy from the per-year agreement table.
    pub fn new(all_years_teachers: Vec<bool>) -> Self {
        Self { all_years_teachers }
    }

    /// Builds a policy from a JSON value, rejecting anything that is not a
    /// sequence of booleans (a scalar passed by mistake, for example).
    pub fn from_value(value: &Value) -> Result<Self, GradeError> {
        let entries = value
            .as_array()
            .ok_or_else(|| GradeError::InvalidPolicyTable {
                got: value.to_string(),
            })?;

        let table = entries
            .iter()
            .map(|entry| {
                entry.as_bool().ok_or_else(|| GradeError::InvalidPolicyTable {
                    got: entry.to_string(),
                })
            })
            .collect::<Result<Vec<bool>, GradeError>>()?;

        Ok(Self::new(table))
    }

    /// Number of academic years the table covers.
    pub fn years(&self) -> usize {
        self.all_years_teachers.len()
    }

    /// Extra points for `academic_year`: [`Self::EXTRA_POINTS_AMOUNT`] when
    /// the policy is active for that year, `0.0` otherwise. An out-of-range
    /// index means no policy is configured for that year and yields `0.0`,
    /// it is not an error.
    pub fn bonus_for_year(&self, academic_year: i64) -> f64 {
        if self.is_active_for_year(academic_year) {
            Self::EXTRA_POINTS_AMOUNT
        } else {
            0.0
        }
    }

    /// Whether the policy is active for `academic_year`. Out-of-range
    /// indices, negative ones included, are inactive.
    pub fn is_active_for_year(&self, academic_year: i64) -> bool {
        usize::try_from(academic_year)
            .ok()
            .and_then(|year| self.all_years_teachers.get(year).copied())
            .unwrap_or(false)
    }
}
