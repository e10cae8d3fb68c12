#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use tracing::debug;

use crate::{
    grade::{GradeCalculator, render_details},
    model::{Evaluation, Student},
    policy::{AttendancePolicy, ExtraPointsPolicy},
};

/// Affirmative answers accepted by yes/no prompts.
const YES_ANSWERS: &[&str] = &["s", "si", "sí", "y", "yes"];
/// Negative answers accepted by yes/no prompts.
const NO_ANSWERS: &[&str] = &["n", "no"];

/// Interprets a yes/no answer, accepting the localized variants staff
/// actually type. Returns `None` for anything unrecognized.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    let answer = answer.trim().to_lowercase();
    if YES_ANSWERS.contains(&answer.as_str()) {
        Some(true)
    } else if NO_ANSWERS.contains(&answer.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// An interactive grading session over arbitrary input/output streams.
///
/// Generic over [`BufRead`]/[`Write`] so a session can run against a
/// terminal or against in-memory buffers.
pub struct Shell<R, W> {
    /// Where answers are read from.
    input:  R,
    /// Where prompts and the report are written to.
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a session reading answers from `input` and writing prompts
    /// to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs one full grading session: gathers the student, the policies,
    /// and the target year, then prints the detailed report or the
    /// validation error.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", "=".repeat(60))?;
        writeln!(self.output, "gradecalc - final grade calculation")?;
        writeln!(self.output, "{}", "=".repeat(60))?;
        writeln!(self.output)?;

        let student = self.prompt_student()?;
        writeln!(self.output)?;

        let extra_points_policy = self.prompt_extra_points_policy()?;
        let years = extra_points_policy.years();
        let academic_year = self.prompt_academic_year(years)?;

        debug!(
            student_id = student.student_id(),
            academic_year, "running interactive calculation"
        );

        let calculator = GradeCalculator::new(AttendancePolicy::new(), extra_points_policy);
        writeln!(self.output)?;
        match calculator.calculation_details(&student, academic_year) {
            Ok(details) => writeln!(self.output, "{}", render_details(&details))?,
            Err(e) => writeln!(self.output, "{} {e}", "Calculation failed:".red())?,
        }

        Ok(())
    }

    /// Writes `prompt`, then reads and trims one answer line.
    fn read_answer(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Could not read from the input stream")?;
        if read == 0 {
            bail!("Input stream closed before the session finished");
        }

        Ok(line.trim().to_string())
    }

    /// Prompts until the answer parses as a yes/no flag.
    fn prompt_yes_no(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let answer = self.read_answer(prompt)?;
            match parse_yes_no(&answer) {
                Some(flag) => return Ok(flag),
                None => writeln!(self.output, "Please answer 'y' or 'n'.")?,
            }
        }
    }

    /// Prompts until the answer parses as a count of at least 1, bounded by
    /// `max` when one applies.
    fn prompt_count(&mut self, prompt: &str, max: Option<usize>) -> Result<usize> {
        loop {
            let answer = self.read_answer(prompt)?;
            match answer.parse::<usize>() {
                Ok(0) => writeln!(self.output, "Please enter at least 1.")?,
                Ok(count) => match max {
                    Some(max) if count > max => {
                        writeln!(self.output, "No more than {max} can be recorded.")?;
                    }
                    _ => return Ok(count),
                },
                Err(_) => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
    }

    /// Prompts until the answer parses as a floating point number.
    fn prompt_f64(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let answer = self.read_answer(prompt)?;
            match answer.parse::<f64>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "  Please enter a valid number.")?,
            }
        }
    }

    /// Gathers the student: identifier, evaluations, and the attendance
    /// flag. Evaluations failing validation are re-prompted.
    fn prompt_student(&mut self) -> Result<Student> {
        let student_id = self.read_answer("Enter the student identifier: ")?;
        let mut student = Student::new(student_id);

        writeln!(
            self.output,
            "Maximum evaluations allowed: {}",
            Student::MAX_EVALUATIONS
        )?;
        let count = self.prompt_count(
            "How many evaluations would you like to record? ",
            Some(Student::MAX_EVALUATIONS),
        )?;

        for i in 1..=count {
            writeln!(self.output, "Evaluation {i}:")?;
            loop {
                let grade = self.prompt_f64("  Grade: ")?;
                let weight = self.prompt_f64("  Weight percentage (0-100): ")?;
                match Evaluation::new(grade, weight) {
                    Ok(evaluation) => {
                        student.add_evaluation(evaluation)?;
                        break;
                    }
                    Err(e) => writeln!(self.output, "  {} {e}", "Error:".red())?,
                }
            }
        }

        let met = self.prompt_yes_no("Did the student reach the minimum attendance? (y/n): ")?;
        student.set_attendance(met);

        Ok(student)
    }

    /// Gathers the per-year staff-agreement table for the extra-points
    /// policy.
    fn prompt_extra_points_policy(&mut self) -> Result<ExtraPointsPolicy> {
        writeln!(
            self.output,
            "Configure the extra-points policy per academic year."
        )?;
        let years = self.prompt_count("How many academic years would you like to configure? ", None)?;

        let mut all_years_teachers = Vec::with_capacity(years);
        for year in 1..=years {
            let agreed = self.prompt_yes_no(&format!(
                "  Academic year {year}: did the teaching staff agree? (y/n): "
            ))?;
            all_years_teachers.push(agreed);
        }

        Ok(ExtraPointsPolicy::new(all_years_teachers))
    }

    /// Asks which academic year to evaluate, 1-based on the terminal and
    /// converted to the 0-based index the policy uses.
    fn prompt_academic_year(&mut self, years: usize) -> Result<i64> {
        let year = self.prompt_count(
            &format!("Which academic year should be evaluated? (1-{years}): "),
            Some(years),
        )?;

        Ok(year as i64 - 1)
    }
}
