#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use itertools::Itertools;
use tabled::{
    Table,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};

use super::results::CalculationDetails;

/// Renders a yes/no answer for report output.
fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Renders the per-evaluation breakdown as a table, one row per evaluation
/// in insertion order.
fn evaluation_table(details: &CalculationDetails) -> String {
    Table::new(&details.evaluations)
        .with(Panel::header("Evaluations"))
        .with(Panel::footer(format!(
            "Total weight: {:.2}%",
            details.total_weight
        )))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(
            Modify::new(Rows::last())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern())
        .to_string()
}

/// Renders the full fixed-format report for a calculation: the student, the
/// per-evaluation table, the policy inputs, and the headline numbers.
pub fn render_details(details: &CalculationDetails) -> String {
    let lines = vec![
        format!("Student: {}", details.student_id),
        format!("Evaluations recorded: {}", details.number_of_evaluations),
        String::new(),
        evaluation_table(details),
        String::new(),
        format!(
            "Minimum attendance reached: {}",
            yes_no(details.has_reached_minimum_classes)
        ),
        format!(
            "Extra-points policy active: {}",
            yes_no(details.extra_points_policy_active)
        ),
        String::new(),
        format!("Weighted average:   {:.2}", details.breakdown.weighted_average),
        format!("Attendance penalty: {:.2}", details.breakdown.attendance_penalty),
        format!("Extra points:       {:.2}", details.breakdown.extra_points),
        String::new(),
        format!("FINAL GRADE: {:.2}", details.breakdown.final_grade),
    ];

    lines.iter().join("\n")
}
