//! # Capturing Test Case Unit Tests / 捕获式测试用例单元测试
//!
//! Each capture helper must record expected/actual before it decides the
//! outcome, so the values survive a failing assertion.
//!
//! 每个捕获辅助方法都必须在决定结果之前记录期望值/实际值，
//! 以便这些值在断言失败后仍得以保留。

mod common;

use anyhow::{Context, anyhow};
use capture_runner::{check, check_eq};
use capture_runner::core::{
    Fault, ResultRecord, Supplied, TestCase, TestCollection, TestStatus, Value, ValueKind,
};
use common::run_single;

fn case() -> TestCase {
    TestCase::new(ResultRecord::start("test_x", "X".to_string(), "MainTests"))
}

fn divide(a: i64, b: i64) -> anyhow::Result<i64> {
    if b == 0 {
        return Err(anyhow!("division by zero"));
    }
    Ok(a / b)
}

#[cfg(test)]
mod equality_tests {
    use super::*;

    #[test]
    fn test_equal_values_pass_and_are_captured() {
        let mut case = case();
        let result = case.assert_equal_and_capture(15, 15, None);

        assert!(result.is_ok());
        assert_eq!(case.record().expected.as_deref(), Some("15"));
        assert_eq!(case.record().actual.as_deref(), Some("15"));
    }

    #[test]
    fn test_mismatch_is_captured_before_failing() {
        let mut case = case();
        let result = case.assert_equal_and_capture(12, 15, Some("Add the numbers"));

        assert_eq!(result, Err(Fault::assertion("12 != 15")));
        assert_eq!(case.record().expected.as_deref(), Some("15"));
        assert_eq!(case.record().actual.as_deref(), Some("12"));
        assert_eq!(case.record().message.as_deref(), Some("Add the numbers"));
    }

    #[test]
    fn test_empty_message_does_not_overwrite() {
        let mut case = case();
        case.set_message("kept");
        let _ = case.assert_equal_and_capture("a", "a", Some(""));

        assert_eq!(case.record().message.as_deref(), Some("kept"));
    }
}

#[cfg(test)]
mod comparison_tests {
    use super::*;

    #[test]
    fn test_membership_helpers() {
        let mut case = case();
        assert!(case.assert_in_and_capture(&2, &[1, 2, 3], None).is_ok());
        assert_eq!(case.record().expected.as_deref(), Some("'2' in container"));
        assert_eq!(case.record().actual.as_deref(), Some("True"));

        let result = case.assert_not_in_and_capture(&2, &[1, 2, 3], None);
        assert!(result.unwrap_err().is_assertion());
        assert_eq!(case.record().actual.as_deref(), Some("False"));
    }

    #[test]
    fn test_contains_helper_quotes_text() {
        let mut case = case();
        let result = case.assert_contains_and_capture("Hello, Ada!", "Bob", None);

        assert!(result.is_err());
        assert_eq!(case.record().expected.as_deref(), Some("text containing 'Bob'"));
        assert_eq!(case.record().actual.as_deref(), Some("'Hello, Ada!'"));
    }

    #[test]
    fn test_ordering_helpers() {
        let mut case = case();
        assert!(case.assert_greater_and_capture(5, 3, None).is_ok());
        assert_eq!(case.record().expected.as_deref(), Some("value > 3"));
        assert!(case.assert_less_and_capture(5, 3, None).is_err());
        assert!(case.assert_greater_equal_and_capture(3, 3, None).is_ok());
        assert!(case.assert_less_equal_and_capture(4, 3, None).is_err());
        assert_eq!(case.record().expected.as_deref(), Some("value <= 3"));
        assert_eq!(case.record().actual.as_deref(), Some("4"));
    }

    #[test]
    fn test_instance_and_none_helpers() {
        let mut case = case();
        assert!(case
            .assert_is_instance_and_capture(&Value::from(1.5), ValueKind::Float, None)
            .is_ok());
        assert_eq!(case.record().expected.as_deref(), Some("instance of float"));
        assert_eq!(case.record().actual.as_deref(), Some("float"));

        assert!(case.assert_is_none_and_capture(Some(3), None).is_err());
        assert_eq!(case.record().expected.as_deref(), Some("None"));
        assert_eq!(case.record().actual.as_deref(), Some("3"));
    }
}

#[cfg(test)]
mod call_tests {
    use super::*;

    #[test]
    fn test_call_error_becomes_actual() {
        let mut case = case();
        let result = case.assert_call_and_capture(|| divide(1, 0), 0, None);

        assert_eq!(
            result,
            Err(Fault::assertion("Function call failed: division by zero"))
        );
        assert_eq!(case.record().actual.as_deref(), Some("Error: division by zero"));
    }

    #[test]
    fn test_call_reraises_assertions_verbatim() {
        let mut case = case();
        let result = case.assert_call_and_capture(
            || -> anyhow::Result<i64> { Err(Fault::assertion("inner check").into()) },
            1,
            None,
        );

        assert_eq!(result, Err(Fault::assertion("inner check")));
        assert!(case.record().actual.is_none());
    }

    #[test]
    fn test_call_error_keeps_its_root_cause() {
        let mut case = case();
        let result = case.assert_call_and_capture(
            || divide(1, 0).context("computing the ratio"),
            0,
            None,
        );

        assert!(result.unwrap_err().is_assertion());
        let actual = case.record().actual.clone().unwrap();
        assert!(actual.contains("computing the ratio"));
        assert!(actual.contains("division by zero"));
    }

    #[test]
    fn test_call_mismatch_message() {
        let mut case = case();
        let result = case.assert_call_and_capture(|| divide(9, 3), 4, None);

        assert_eq!(result, Err(Fault::assertion("Expected 4, but got 3")));
    }

    #[test]
    fn test_safe_call_never_propagates_producer_errors() {
        let mut case = case();
        let result = case.assert_safe_call_and_capture(Supplied::call(|| divide(1, 0)), 0, None);

        assert_eq!(
            result,
            Err(Fault::assertion(
                "Test execution failed: Runtime error: division by zero"
            ))
        );
        assert_eq!(case.record().expected.as_deref(), Some("0"));
        assert_eq!(
            case.record().actual.as_deref(),
            Some("Runtime error: division by zero")
        );
    }

    #[test]
    fn test_safe_call_catches_panics() {
        let mut case = case();
        let result = case.assert_safe_call_and_capture(
            Supplied::call(|| -> anyhow::Result<i64> { panic!("index out of range") }),
            0,
            None,
        );

        assert!(result.unwrap_err().is_assertion());
        assert_eq!(
            case.record().actual.as_deref(),
            Some("Runtime error: index out of range")
        );
    }

    #[test]
    fn test_safe_call_accepts_plain_values() {
        let mut case = case();
        assert!(case.assert_safe_call_and_capture(15, 15, None).is_ok());
        assert_eq!(case.record().actual.as_deref(), Some("15"));

        let result = case.assert_safe_call_and_capture(Supplied::from_result(divide(4, 2)), 2, None);
        assert!(result.is_ok());
    }

    #[test]
    fn test_safe_test_wrapper_reports_errors() {
        let mut case = case();
        let result = case.safe_test_wrapper(Supplied::from_result(divide(1, 0)), 5, None);

        assert_eq!(
            result,
            Err(Fault::assertion("Test failed with error: division by zero"))
        );
        assert_eq!(case.record().actual.as_deref(), Some("Error: division by zero"));
    }

    #[test]
    fn test_safe_test_wrapper_keeps_real_actual_on_mismatch() {
        let mut case = case();
        let result = case.safe_test_wrapper(12, 15, None);

        assert_eq!(result, Err(Fault::assertion("Expected 15, but got 12")));
        assert_eq!(case.record().actual.as_deref(), Some("12"));
    }
}

#[cfg(test)]
mod engine_tests {
    use super::*;

    #[test]
    fn test_partial_capture_survives_an_error() {
        let record = run_single(TestCollection::new("MainTests").test("test_partial", |case| {
            case.set_input(vec![1, 0]);
            case.set_expected_actual(1, "pending", None);
            Err(Fault::error("boom"))
        }));

        assert_eq!(record.status, TestStatus::Error);
        assert_eq!(record.input.as_deref(), Some("1\\n0"));
        assert_eq!(record.expected.as_deref(), Some("1"));
        assert_eq!(record.actual.as_deref(), Some("pending"));
        assert!(record.message.unwrap().contains("boom"));
    }

    #[test]
    fn test_assertion_panic_is_a_failure() {
        let record = run_single(TestCollection::new("MainTests").test("test_assert", |_| {
            assert_eq!(1 + 1, 3);
            Ok(())
        }));

        assert_eq!(record.status, TestStatus::Failed);
    }

    #[test]
    fn test_assertion_panic_with_message_is_a_failure() {
        let record = run_single(TestCollection::new("MainTests").test("test_assert", |_| {
            assert_eq!(2 + 2, 5, "sum mismatch");
            Ok(())
        }));

        assert_eq!(record.status, TestStatus::Failed);
        assert!(record.message.unwrap().contains("sum mismatch"));
    }

    #[test]
    fn test_messaged_plain_assert_is_an_error() {
        // A custom message replaces the `assertion failed` prefix, so the
        // panic reads like any other.
        let record = run_single(TestCollection::new("MainTests").test("test_assert", |_| {
            let total = 4;
            assert!(total == 5, "total should be 5");
            Ok(())
        }));

        assert_eq!(record.status, TestStatus::Error);
        assert!(record.message.unwrap().contains("total should be 5"));
    }

    #[test]
    fn test_check_macro_is_a_failure() {
        let record = run_single(TestCollection::new("MainTests").test("test_check", |_| {
            let total = 4;
            check!(total == 5, "total should be 5, got {}", total);
            Ok(())
        }));

        assert_eq!(record.status, TestStatus::Failed);
        assert!(record.message.unwrap().contains("total should be 5, got 4"));
    }

    #[test]
    fn test_check_macro_without_message_names_the_condition() {
        let record = run_single(TestCollection::new("MainTests").test("test_check", |_| {
            let total = 4;
            check!(total == 5);
            Ok(())
        }));

        assert_eq!(record.status, TestStatus::Failed);
        assert!(record
            .message
            .unwrap()
            .contains("assertion failed: total == 5"));
    }

    #[test]
    fn test_check_eq_macro_reports_both_sides() {
        let record = run_single(TestCollection::new("MainTests").test("test_check_eq", |_| {
            check_eq!(2 + 2, 5, "sum mismatch");
            Ok(())
        }));

        assert_eq!(record.status, TestStatus::Failed);
        assert!(record.message.unwrap().contains("4 != 5: sum mismatch"));
    }

    #[test]
    fn test_passing_check_lets_the_body_continue() {
        let record = run_single(TestCollection::new("MainTests").test("test_check", |case| {
            check!(1 + 1 == 2);
            check_eq!("a", "a");
            case.set_message("reached the end");
            Ok(())
        }));

        assert_eq!(record.status, TestStatus::Passed);
        assert_eq!(record.message.as_deref(), Some("reached the end"));
    }

    #[test]
    fn test_error_context_chain_is_kept() {
        let record = run_single(TestCollection::new("MainTests").test("test_settings", |_| {
            Err::<(), _>(anyhow!("file not found")).context("loading settings")?;
            Ok(())
        }));

        assert_eq!(record.status, TestStatus::Error);
        let message = record.message.unwrap();
        assert!(message.contains("loading settings"));
        assert!(message.contains("file not found"));
    }

    #[test]
    fn test_other_panic_is_an_error() {
        let record = run_single(TestCollection::new("MainTests").test("test_panic", |_| {
            let items: Vec<i32> = Vec::new();
            let _value = items[3];
            Ok(())
        }));

        assert_eq!(record.status, TestStatus::Error);
        assert!(record.message.unwrap().contains("index out of bounds"));
    }

    #[test]
    fn test_fail_uses_author_text() {
        let record = run_single(
            TestCollection::new("MainTests").test("test_fail", |case| case.fail("not implemented")),
        );

        assert_eq!(record.status, TestStatus::Failed);
        assert!(record.message.unwrap().contains("not implemented"));
    }

    #[test]
    fn test_description_and_message_override() {
        let record = run_single(TestCollection::new("MainTests").test("test_custom", |case| {
            case.set_description_and_message("Custom label", "Custom note");
            Ok(())
        }));

        assert_eq!(record.description, "Custom label");
        assert_eq!(record.message.as_deref(), Some("Custom note"));
        assert_eq!(record.status, TestStatus::Passed);
    }
}
