#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// The minimum-attendance penalty policy.
pub mod attendance;
/// The per-year extra-points policy.
pub mod extra_points;

pub use attendance::AttendancePolicy;
pub use extra_points::ExtraPointsPolicy;
