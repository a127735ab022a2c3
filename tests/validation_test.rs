//! Exit-code validation policy behavior

use commandeer::{CommandBuilder, Error, RawCommand, ValidationPolicy};

fn dummy() -> RawCommand {
    RawCommand::wrap(env!("CARGO_BIN_EXE_dummy")).with_hidden_output()
}

#[test]
fn a_non_zero_exit_fails_under_the_default_policy() {
    let cmd = dummy().with_arguments(["exit", "7"]).unwrap();

    match cmd.execute() {
        Err(Error::CommandFailed { exit_code, command }) => {
            assert_eq!(exit_code, 7);
            assert_eq!(*command, cmd.config().clone());
        }
        other => panic!("expected a command failure, got {other:?}"),
    }
}

#[test]
fn the_error_exposes_its_exit_code() {
    let cmd = dummy().with_arguments(["exit", "3"]).unwrap();
    let err = cmd.execute().unwrap_err();
    assert_eq!(err.exit_code(), Some(3));
}

#[test]
fn a_non_zero_exit_is_reported_as_success_without_validation() {
    let cmd = dummy()
        .with_arguments(["exit", "7"])
        .unwrap()
        .with_validation(ValidationPolicy::None);

    let result = cmd.execute().unwrap();
    assert_eq!(result.exit_code, 7);
    assert!(!result.is_success());
}

#[test]
fn a_zero_exit_passes_under_the_default_policy() {
    let cmd = dummy().with_arguments(["exit", "0"]).unwrap();
    let result = cmd.execute().unwrap();
    assert!(result.is_success());
}

#[test]
fn an_upstream_failure_surfaces_through_the_pipe() {
    let upstream = commandeer::BufferedCommand::wrap(env!("CARGO_BIN_EXE_dummy"))
        .with_arguments(["exit", "5"])
        .unwrap();
    let downstream = dummy().with_arguments(["echo", "stdin"]).unwrap();

    match (upstream | downstream).execute() {
        Err(Error::CommandFailed { exit_code, .. }) => assert_eq!(exit_code, 5),
        other => panic!("expected the upstream failure, got {other:?}"),
    }
}
