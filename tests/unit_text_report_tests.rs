//! # Report Rendering Unit Tests / 报告渲染单元测试
//!
//! The text report is parsed line by line by grading tools, so its exact
//! layout is asserted here together with the JSON document shape.
//!
//! 文本报告由评分工具逐行解析，因此这里断言其确切布局以及 JSON 文档结构。

use capture_runner::core::models::ResultRecord;
use capture_runner::reporting::{JsonReport, format_record, render_detailed, save_json};
use tempfile::tempdir;

fn passed_record() -> ResultRecord {
    let mut record = ResultRecord::start("test_add", "Add".to_string(), "MainTests");
    record.input = Some("10\\n5".to_string());
    record.expected = Some("15".to_string());
    record.actual = Some("15".to_string());
    record.message = Some("Should be 15".to_string());
    record.finish_passed();
    record
}

fn bare_failed_record() -> ResultRecord {
    let mut record = ResultRecord::start("test_sub", "Sub".to_string(), "MainTests");
    record.finish_failed("boom");
    record.message = None;
    record
}

#[test]
fn test_format_record_with_every_field() {
    assert_eq!(
        format_record(&passed_record()),
        "Name: test_add Input: 10\\n5 Expected: 15 Actual: 15 Message: Should be 15 Passed: True Description: Add"
    );
}

#[test]
fn test_format_record_omits_unset_input_and_message() {
    assert_eq!(
        format_record(&bare_failed_record()),
        "Name: test_sub Expected: N/A Actual: N/A Passed: False Description: Sub"
    );
}

#[test]
fn test_empty_strings_count_as_unset() {
    let mut record = bare_failed_record();
    record.input = Some(String::new());
    record.expected = Some(String::new());

    assert_eq!(
        format_record(&record),
        "Name: test_sub Expected: N/A Actual: N/A Passed: False Description: Sub"
    );
}

#[test]
fn test_render_detailed_frames_each_record() {
    let text = render_detailed(&[passed_record(), bare_failed_record()]);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.first(), Some(&"Starting Tests"));
    assert_eq!(lines.last(), Some(&"Ending Tests"));
    assert_eq!(lines.iter().filter(|l| **l == "new").count(), 2);
    assert_eq!(lines.len(), 6);
}

#[test]
fn test_render_detailed_without_records() {
    assert_eq!(render_detailed(&[]), "Starting Tests\nEnding Tests\n");
}

#[test]
fn test_json_report_shape() {
    let report = JsonReport::new("Grader", vec![passed_record(), bare_failed_record()]);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["framework"], "Grader");
    assert_eq!(json["total_tests"], 2);
    assert_eq!(json["tests"].as_array().unwrap().len(), 2);
    assert_eq!(json["tests"][0]["status"], "PASSED");
    assert_eq!(json["tests"][1]["status"], "FAILED");
    assert!(json["tests"][1]["message"].is_null());
    assert_eq!(report.passed_count(), 1);
}

#[test]
fn test_save_json_creates_parent_directories() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("nested/dir/results.json");
    let report = JsonReport::new("Grader", vec![passed_record()]);

    save_json(&report, &path).unwrap();

    let saved: JsonReport = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved, report);
}
