#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

#[derive(Clone, Copy, Debug, Default)]
/// A struct representing the minimum-attendance policy: a fixed penalty is
/// deducted when a student did not reach the minimum number of classes.
///
/// The policy is stateless and may be shared across any number of
/// calculations.
pub struct AttendancePolicy;

impl AttendancePolicy {
    /// Points deducted when the attendance minimum is not met.
    pub const PENALTY_NO_ATTENDANCE: f64 = 2.0;

    /// Creates the policy.
    pub fn new() -> Self {
        Self
    }

    /// Returns the penalty for the given attendance state: `0.0` when the
    /// minimum was reached, [`Self::PENALTY_NO_ATTENDANCE`] otherwise.
    pub fn penalty_for(&self, has_reached_minimum_classes: bool) -> f64 {
        if has_reached_minimum_classes {
            0.0
        } else {
            Self::PENALTY_NO_ATTENDANCE
        }
    }

    /// Whether the given attendance state satisfies the policy. A
    /// pass-through of the flag itself.
    pub fn is_attendance_valid(&self, has_reached_minimum_classes: bool) -> bool {
        has_reached_minimum_classes
    }
}
