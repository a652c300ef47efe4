use alloc::string::ToString;

use super::StackError;

#[test]
fn empty_error_message() {
  assert_eq!(StackError::Empty.to_string(), "stack is empty");
}

#[test]
fn capacity_overflow_reports_requested_capacity() {
  let err = StackError::CapacityOverflow { requested: 42 };
  assert_eq!(err.to_string(), "unable to grow stack capacity to 42");
}

#[test]
fn errors_are_usable_as_core_error() {
  let err: &dyn core::error::Error = &StackError::Empty;
  assert!(err.source().is_none());
}
