//! Derives a human-readable description from a test method name.
//! 从测试方法名派生人类可读的描述。

/// Converts a test method name into a sentence-cased description.
///
/// A leading `test_` (or else `test`) prefix is stripped, underscores become
/// spaces and camelCase humps are split, with only the first letter of the
/// result capitalized.
///
/// 将测试方法名转换为句首大写的描述。
/// 去除开头的 `test_`（否则为 `test`）前缀，下划线变为空格，
/// 驼峰形式被拆分，结果仅首字母大写。
///
/// ```
/// use capture_runner::core::description::describe;
///
/// assert_eq!(describe("test_add_two_numbers"), "Add two numbers");
/// assert_eq!(describe("testAddTwo"), "Add two");
/// ```
pub fn describe(method_name: &str) -> String {
    let name = method_name
        .strip_prefix("test_")
        .or_else(|| method_name.strip_prefix("test"))
        .unwrap_or(method_name);

    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            out.push(' ');
        } else if c.is_uppercase() && i > 0 && chars[i - 1].is_lowercase() {
            out.push(' ');
            out.extend(c.to_lowercase());
        } else if i == 0 {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}
