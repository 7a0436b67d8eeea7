//! # Demo Collections / 演示测试集合
//!
//! Collections shipped with the binary so the runner works out of the box.
//! `MainTests` exercises both authoring styles and passes; `ShowcaseTests`
//! produces records of every status.
//!
//! 随二进制文件提供的测试集合，使运行器开箱即用。
//! `MainTests` 演示两种编写风格且全部通过；`ShowcaseTests` 为每种状态各生成一条记录。

use anyhow::{Context, Result, anyhow};

use crate::check;
use crate::core::{
    CollectionRegistry, SafeTest, TestCollection, Value, ValueKind,
    registry::RegistryError,
};

/// The code under test.
pub mod calc {
    use anyhow::{Result, bail};

    pub fn add(a: i64, b: i64) -> i64 {
        a + b
    }

    pub fn greet(name: &str) -> String {
        format!("Hello, {name}!")
    }

    pub fn divide(a: f64, b: f64) -> Result<f64> {
        if b == 0.0 {
            bail!("division by zero");
        }
        Ok(a / b)
    }

    pub fn average(values: &[i64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<i64>() as f64 / values.len() as f64)
    }
}

/// Registers the demo collections.
pub fn registry() -> Result<CollectionRegistry, RegistryError> {
    CollectionRegistry::new()
        .with("MainTests", main_tests)?
        .with("ShowcaseTests", showcase_tests)
}

fn main_tests() -> Result<TestCollection> {
    let collection = TestCollection::new("MainTests")
        .test(
            "test_add_basic",
            SafeTest::equals(15)
                .message("add(10, 5) should return 15")
                .input(vec![10, 5])
                .wrap(|_| Ok(calc::add(10, 5).into())),
        )
        .test(
            "test_add_negative",
            SafeTest::less(0)
                .input(vec![-7, 2])
                .wrap(|_| Ok(calc::add(-7, 2).into())),
        )
        .documented_test(
            "test_greet",
            "Greeting includes the name",
            |case| {
                case.set_input("Ada");
                case.assert_contains_and_capture(
                    &calc::greet("Ada"),
                    "Ada",
                    Some("The greeting should mention who is greeted"),
                )
            },
        )
        .test("test_divide", |case| {
            case.set_input(vec![9.0, 3.0]);
            case.assert_call_and_capture(
                || calc::divide(9.0, 3.0).map(Value::from),
                Value::from(3.0),
                Some("9 / 3 should be 3.0"),
            )
        })
        .test("test_average_of_empty_list", |case| {
            case.set_input(Vec::<i64>::new());
            case.assert_is_none_and_capture(
                calc::average(&[]),
                Some("The average of nothing is None"),
            )
        })
        .test(
            "test_average_type",
            SafeTest::instance_of(ValueKind::Float)
                .input(vec![1, 2, 4])
                .wrap(|_| Ok(calc::average(&[1, 2, 4]).into())),
        );
    Ok(collection)
}

fn showcase_tests() -> Result<TestCollection> {
    let collection = TestCollection::new("ShowcaseTests")
        .test("test_add_passes", |case| {
            case.set_input(vec![2, 2]);
            case.assert_equal_and_capture(calc::add(2, 2), 4_i64, Some("2 + 2 is 4"))
        })
        .test("test_add_mismatch", |case| {
            case.set_input(vec![2, 2]);
            case.assert_equal_and_capture(
                calc::add(2, 2),
                5_i64,
                Some("Check how add combines its arguments"),
            )
        })
        .test(
            "test_divide_by_zero_wrapped",
            SafeTest::equals(Value::Float(0.0))
                .input(vec![1.0, 0.0])
                .wrap(|_| Ok(calc::divide(1.0, 0.0)?.into())),
        )
        .test("test_first_reading", |_| {
            let readings: Vec<i64> = Vec::new();
            let first = readings[0];
            assert!(first >= 0);
            Ok(())
        })
        .test("test_reading_in_range", |_| {
            let reading = calc::add(40, 70);
            check!(reading <= 100, "reading {} is above the sensor range", reading);
            Ok(())
        })
        .test("test_missing_config", |_| -> crate::core::CaseResult {
            load_settings()?;
            Ok(())
        });
    Ok(collection)
}

fn load_settings() -> Result<()> {
    Err(anyhow!("settings file not found")).context("loading grader settings")
}
