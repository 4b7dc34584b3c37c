use super::*;

#[test]
fn booting_and_running_are_running() {
    assert!(SubmissionStatus::Booting.is_running());
    assert!(SubmissionStatus::Running.is_running());
    assert!(!SubmissionStatus::Succeeded.is_running());
    assert!(!SubmissionStatus::NeverExecuted.is_running());
}

#[test]
fn terminal_states_exclude_unknown_and_never_executed() {
    assert!(SubmissionStatus::Succeeded.is_terminal());
    assert!(SubmissionStatus::Failed.is_terminal());
    assert!(SubmissionStatus::FailureOnSubmit.is_terminal());
    assert!(!SubmissionStatus::Unknown.is_terminal());
    assert!(!SubmissionStatus::Running.is_terminal());
    assert!(!SubmissionStatus::NeverExecuted.is_terminal());
}

#[test]
fn display_matches_screaming_snake_tag() {
    assert_eq!(SubmissionStatus::FailureOnSubmit.to_string(), "FAILURE_ON_SUBMIT");
}
