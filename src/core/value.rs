//! # Value Module / 值模块
//!
//! Test bodies written in the declarative style return a [`Value`], a small
//! dynamically typed value domain. Wrappers compare values by equality,
//! ordering, substring containment, type and nullity, and every value can be
//! rendered to the string form that ends up in the reports.
//!
//! 声明式风格的测试体返回 [`Value`]，这是一个小型的动态类型值域。
//! 包装器按相等、排序、子串包含、类型和空值对值进行比较，
//! 每个值都可以渲染为报告中使用的字符串形式。

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A dynamically typed value produced by a test body.
/// 测试体产生的动态类型值。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Dict(BTreeMap<String, Value>),
}

/// The runtime type of a [`Value`], used by instance-of checks.
/// [`Value`] 的运行时类型，用于实例类型检查。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    NoneType,
    Bool,
    Int,
    Float,
    Str,
    List,
    Dict,
}

impl ValueKind {
    /// The type name as it appears in reports (e.g. `int`, `str`).
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::NoneType => "NoneType",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Str => "str",
            ValueKind::List => "list",
            ValueKind::Dict => "dict",
        }
    }

    /// Checks whether `value` is an instance of this kind.
    /// Booleans are integers, so `Bool` values also match `Int`.
    ///
    /// 检查 `value` 是否为此类型的实例。
    /// 布尔值也属于整数，因此 `Bool` 值同样匹配 `Int`。
    pub fn matches(&self, value: &Value) -> bool {
        let kind = value.kind();
        kind == *self || (*self == ValueKind::Int && kind == ValueKind::Bool)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raised when two values cannot be ordered against each other.
/// 当两个值无法相互比较顺序时返回。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{op}' not supported between instances of '{left}' and '{right}'")]
pub struct UnorderableError {
    pub op: &'static str,
    pub left: &'static str,
    pub right: &'static str,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::None => ValueKind::NoneType,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::List(_) => ValueKind::List,
            Value::Dict(_) => ValueKind::Dict,
        }
    }

    /// The type name of this value, e.g. `int` for `Value::Int(3)`.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    fn as_number(&self) -> Option<Number> {
        match self {
            Value::Bool(b) => Some(Number::Int(i64::from(*b))),
            Value::Int(i) => Some(Number::Int(*i)),
            Value::Float(x) => Some(Number::Float(*x)),
            _ => None,
        }
    }

    /// Orders two values, failing with the operator name when the types are
    /// not comparable. Numbers compare numerically, strings and lists
    /// lexicographically.
    ///
    /// 比较两个值的顺序；类型不可比较时返回带运算符名称的错误。
    /// 数字按数值比较，字符串和列表按字典序比较。
    pub fn try_cmp(&self, other: &Value, op: &'static str) -> Result<Ordering, UnorderableError> {
        let unorderable = || UnorderableError {
            op,
            left: self.type_name(),
            right: other.type_name(),
        };

        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(a.cmp(b)),
            (Value::Str(a), Value::Str(b)) => Ok(a.cmp(b)),
            (Value::List(a), Value::List(b)) => {
                for (x, y) in a.iter().zip(b.iter()) {
                    if x != y {
                        return x.try_cmp(y, op);
                    }
                }
                Ok(a.len().cmp(&b.len()))
            }
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a.compare(b).ok_or_else(unorderable),
                _ => Err(unorderable()),
            },
        }
    }

    /// The quoted form used for values nested inside lists and dicts.
    /// 嵌套在列表和字典中的值所使用的带引号形式。
    pub fn repr(&self) -> String {
        match self {
            Value::Str(s) => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
            other => other.to_string(),
        }
    }

    /// Converts to a `serde_json::Value` for compact serialization.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::None => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Float(x) => serde_json::Number::from_f64(*x)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Str(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => serde_json::Value::Array(items.iter().map(Value::to_json).collect()),
            Value::Dict(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
        }
    }
}

/// A numeric operand. Integers stay integers so large values are never
/// rounded through `f64` before comparing.
#[derive(Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// `None` only when a NaN is involved.
    fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
            (Number::Int(a), Number::Float(b)) => cmp_int_float(a, b),
            (Number::Float(a), Number::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

/// Exact comparison of an integer with a float.
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    // 2^63, the first float past i64::MAX.
    const BOUND: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return None;
    }
    if f >= BOUND {
        return Some(Ordering::Less);
    }
    if f < -BOUND {
        return Some(Ordering::Greater);
    }
    let whole = f.trunc();
    // In range, so the cast is exact.
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => whole.partial_cmp(&f),
        unequal => Some(unequal),
    }
}

fn format_float(x: f64) -> String {
    if x.is_nan() {
        "nan".to_string()
    } else if x.is_infinite() {
        if x > 0.0 { "inf".to_string() } else { "-inf".to_string() }
    } else if x.fract() == 0.0 && x.abs() < 1e16 {
        format!("{x:.1}")
    } else {
        x.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => f.write_str(&format_float(*x)),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                let inner: Vec<String> = items.iter().map(Value::repr).collect();
                write!(f, "[{}]", inner.join(", "))
            }
            Value::Dict(map) => {
                let inner: Vec<String> = map
                    .iter()
                    .map(|(k, v)| format!("{}: {}", Value::Str(k.clone()).repr(), v.repr()))
                    .collect();
                write!(f, "{{{}}}", inner.join(", "))
            }
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Dict(a), Value::Dict(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a.compare(b) == Some(Ordering::Equal),
                _ => false,
            },
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(i: $t) -> Self {
                Value::Int(i as i64)
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32, isize);

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(x as f64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Str(c.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::None)
    }
}

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(map: BTreeMap<K, V>) -> Self {
        Value::Dict(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::None
    }
}

/// Renders the data driving a test the way it is shown in the `Input:` field.
///
/// Lists are joined with the two-character `\n` escape so a multi-line stdin
/// sample stays on a single report line; dicts become compact JSON; anything
/// else uses its string form.
///
/// 以 `Input:` 字段中显示的方式渲染驱动测试的数据。
/// 列表使用两个字符的 `\n` 转义连接，使多行标准输入样本保持在一行报告中；
/// 字典变为紧凑 JSON；其他值使用其字符串形式。
pub fn render_input(value: &Value) -> String {
    match value {
        Value::List(items) => items
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join("\\n"),
        Value::Dict(_) => serde_json::to_string(&value.to_json()).unwrap_or_else(|_| value.to_string()),
        other => other.to_string(),
    }
}
