use gradecalc::{
    error::GradeError,
    grade::{CalculationRequest, GradeCalculator},
    policy::AttendancePolicy,
};

const REQUEST: &str = r#"{
    "student_id": "ST001",
    "evaluations": [
        {"grade": 15.0, "weight": 30.0},
        {"grade": 18.0, "weight": 40.0},
        {"grade": 16.0, "weight": 30.0}
    ],
    "has_reached_minimum_classes": true,
    "extra_points_by_year": [false],
    "academic_year": 0
}"#;

#[test]
fn full_request_round_trip() {
    let request = CalculationRequest::from_json(REQUEST).expect("parses");
    let student = request.student().expect("valid student");
    let policy = request.extra_points_policy().expect("valid policy");

    assert_eq!(student.student_id(), "ST001");
    assert_eq!(student.evaluations().len(), 3);
    assert!(student.has_reached_minimum_classes());
    assert_eq!(policy.years(), 1);

    let calc = GradeCalculator::new(AttendancePolicy::new(), policy);
    let breakdown = calc
        .calculate_final_grade(&student, request.academic_year)
        .expect("calculates");
    assert_eq!(breakdown.final_grade, 16.5);
}

#[test]
fn attendance_and_year_default_when_omitted() {
    let request = CalculationRequest::from_json(
        r#"{
            "student_id": "ST002",
            "evaluations": [{"grade": 14.0, "weight": 100.0}],
            "extra_points_by_year": [true]
        }"#,
    )
    .expect("parses");

    assert!(!request.has_reached_minimum_classes);
    assert_eq!(request.academic_year, 0);
}

#[test]
fn invalid_weight_surfaces_as_validation_error() {
    let request = CalculationRequest::from_json(
        r#"{
            "student_id": "ST003",
            "evaluations": [{"grade": 15.0, "weight": 150.0}],
            "extra_points_by_year": [false]
        }"#,
    )
    .expect("parses");

    let err = request.student().expect_err("invalid weight must fail");
    assert!(matches!(err, GradeError::InvalidWeight { .. }));
}

#[test]
fn scalar_policy_table_surfaces_as_validation_error() {
    let request = CalculationRequest::from_json(
        r#"{
            "student_id": "ST004",
            "evaluations": [{"grade": 15.0, "weight": 100.0}],
            "extra_points_by_year": true
        }"#,
    )
    .expect("parses");

    let err = request
        .extra_points_policy()
        .expect_err("scalar table must fail");
    assert!(matches!(err, GradeError::InvalidPolicyTable { .. }));
}

#[test]
fn over_capacity_request_surfaces_as_validation_error() {
    let evaluations = (0..11)
        .map(|_| r#"{"grade": 15.0, "weight": 5.0}"#)
        .collect::<Vec<_>>()
        .join(",");
    let json = format!(
        r#"{{
            "student_id": "ST005",
            "evaluations": [{evaluations}],
            "extra_points_by_year": [false]
        }}"#
    );

    let request = CalculationRequest::from_json(&json).expect("parses");
    let err = request.student().expect_err("eleven evaluations must fail");
    assert!(matches!(err, GradeError::CapacityExceeded { .. }));
}

#[test]
fn malformed_json_is_rejected_at_the_parse_boundary() {
    assert!(CalculationRequest::from_json("{not json").is_err());
}
