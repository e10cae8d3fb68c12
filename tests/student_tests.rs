use gradecalc::{
    error::GradeError,
    model::{Evaluation, Student},
};

#[test]
fn new_student_starts_empty_with_attendance_unset() {
    let student = Student::new("ST001");
    assert_eq!(student.student_id(), "ST001");
    assert!(student.evaluations().is_empty());
    assert!(!student.has_reached_minimum_classes());
}

#[test]
fn adds_evaluations_in_insertion_order() {
    let mut student = Student::new("ST002");
    student
        .add_evaluation(Evaluation::new(15.0, 30.0).expect("valid"))
        .expect("within capacity");
    student
        .add_evaluation(Evaluation::new(18.0, 40.0).expect("valid"))
        .expect("within capacity");

    assert_eq!(student.evaluations().len(), 2);
    assert_eq!(student.evaluations()[0].grade(), 15.0);
    assert_eq!(student.evaluations()[1].grade(), 18.0);
}

#[test]
fn tenth_evaluation_succeeds_and_eleventh_fails() {
    let mut student = Student::new("ST003");
    for _ in 0..Student::MAX_EVALUATIONS {
        student
            .add_evaluation(Evaluation::new(15.0, 10.0).expect("valid"))
            .expect("within capacity");
    }
    assert_eq!(student.evaluations().len(), Student::MAX_EVALUATIONS);

    let err = student
        .add_evaluation(Evaluation::new(15.0, 10.0).expect("valid"))
        .expect_err("eleventh evaluation must fail");
    assert!(matches!(
        err,
        GradeError::CapacityExceeded {
            max: Student::MAX_EVALUATIONS
        }
    ));
}

#[test]
fn total_weight_sums_all_evaluation_weights() {
    let mut student = Student::new("ST004");
    for (grade, weight) in [(15.0, 30.0), (18.0, 40.0), (16.0, 30.0)] {
        student
            .add_evaluation(Evaluation::new(grade, weight).expect("valid"))
            .expect("within capacity");
    }

    assert_eq!(student.total_weight(), 100.0);
}

#[test]
fn total_weight_is_zero_for_empty_record() {
    let student = Student::new("ST005");
    assert_eq!(student.total_weight(), 0.0);
}

#[test]
fn attendance_flag_is_settable_any_time() {
    let mut student = Student::new("ST006");

    student.set_attendance(true);
    assert!(student.has_reached_minimum_classes());

    student.set_attendance(false);
    assert!(!student.has_reached_minimum_classes());
}
