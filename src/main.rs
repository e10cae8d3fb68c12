#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # gradecalc
//!
//! Command line front end for the final grade calculator. Run the
//! `interactive` command for a prompt-driven session, or point `grade` /
//! `report` at a JSON calculation request.

use std::io;

use anyhow::{Context, Result};
use bpaf::*;
use colored::Colorize;
use gradecalc::{
    grade::{CalculationRequest, GradeCalculator, render_details},
    policy::AttendancePolicy,
    shell::Shell,
};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Run the prompt-driven grading session
    Interactive,
    /// Calculate the headline numbers for a request file
    Grade(String, bool),
    /// Print the detailed calculation report for a request file
    Report(String, bool),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the request file path
    fn f() -> impl Parser<String> {
        positional("FILE").help("Path to a JSON calculation request")
    }

    /// parses the JSON output flag
    fn j() -> impl Parser<bool> {
        long("json").help("Emit the result as JSON").switch()
    }

    let interactive = pure(Cmd::Interactive)
        .to_options()
        .command("interactive")
        .help("Prompt for evaluations, attendance, and policies on the terminal");

    let grade = construct!(Cmd::Grade(f(), j()))
        .to_options()
        .command("grade")
        .help("Calculate the final grade for a JSON request");

    let report = construct!(Cmd::Report(f(), j()))
        .to_options()
        .command("report")
        .help("Print the detailed calculation report for a JSON request");

    let cmd = construct!([interactive, grade, report]);

    cmd.to_options().descr("Weighted final grade calculator").run()
}

/// Reads and parses a calculation request from `path`.
fn load_request(path: &str) -> Result<CalculationRequest> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read request file: {path}"))?;
    CalculationRequest::from_json(&json)
}

fn main() -> Result<()> {
    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    match options() {
        Cmd::Interactive => {
            let stdin = io::stdin();
            let mut shell = Shell::new(stdin.lock(), io::stdout());
            shell.run()?;
        }
        Cmd::Grade(file, json) => {
            let request = load_request(&file)?;
            let student = request.student()?;
            let calculator =
                GradeCalculator::new(AttendancePolicy::new(), request.extra_points_policy()?);
            let breakdown = calculator.calculate_final_grade(&student, request.academic_year)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else {
                println!("Weighted average:   {:.2}", breakdown.weighted_average);
                println!("Attendance penalty: {:.2}", breakdown.attendance_penalty);
                println!("Extra points:       {:.2}", breakdown.extra_points);
                println!(
                    "{}",
                    format!("Final grade: {:.2}", breakdown.final_grade).bold()
                );
            }
        }
        Cmd::Report(file, json) => {
            let request = load_request(&file)?;
            let student = request.student()?;
            let calculator =
                GradeCalculator::new(AttendancePolicy::new(), request.extra_points_policy()?);
            let details = calculator.calculation_details(&student, request.academic_year)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&details)?);
            } else {
                println!("{}", render_details(&details));
            }
        }
    };

    Ok(())
}
