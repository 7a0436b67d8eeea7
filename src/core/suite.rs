//! # Suite Module / 测试套件模块
//!
//! A [`TestCollection`] is a named group of test methods, the unit that is run
//! by name. [`Suite::load`] plays the role of a test loader: it keeps only the
//! methods whose names start with `test` and orders them by name so the
//! report order is deterministic.
//!
//! [`TestCollection`] 是一组具名的测试方法，是按名称运行的单位。
//! [`Suite::load`] 扮演测试加载器的角色：只保留名称以 `test` 开头的方法，
//! 并按名称排序，使报告顺序确定。

use std::fmt;

use crate::core::case::TestCase;
use crate::core::outcome::CaseResult;

/// A test body: receives the capture context, reports through [`CaseResult`].
pub type TestBody = Box<dyn Fn(&mut TestCase) -> CaseResult>;

/// A single test method of a collection.
/// 测试集合中的单个测试方法。
pub struct TestMethod {
    pub name: String,
    /// Documentation string, used as the description when present.
    /// 文档字符串，存在时用作描述。
    pub doc: Option<String>,
    pub body: TestBody,
}

impl fmt::Debug for TestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestMethod")
            .field("name", &self.name)
            .field("doc", &self.doc)
            .finish_non_exhaustive()
    }
}

/// A named collection of test methods.
/// 具名的测试方法集合。
#[derive(Debug)]
pub struct TestCollection {
    name: String,
    methods: Vec<TestMethod>,
}

impl TestCollection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// Adds a test method without a documentation string.
    pub fn test<F>(self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut TestCase) -> CaseResult + 'static,
    {
        self.push(name.into(), None, Box::new(body))
    }

    /// Adds a test method whose documentation string becomes its description.
    pub fn documented_test<F>(self, name: impl Into<String>, doc: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut TestCase) -> CaseResult + 'static,
    {
        self.push(name.into(), Some(doc.into()), Box::new(body))
    }

    fn push(mut self, name: String, doc: Option<String>, body: TestBody) -> Self {
        self.methods.push(TestMethod { name, doc, body });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn methods(&self) -> &[TestMethod] {
        &self.methods
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

/// The runnable, ordered set of tests built from a collection.
/// 由测试集合构建的、有序的可运行测试集。
#[derive(Debug)]
pub struct Suite {
    class_name: String,
    tests: Vec<TestMethod>,
}

impl Suite {
    /// Loads every `test*` method of `collection`, sorted by name.
    /// 加载 `collection` 中所有 `test*` 方法，并按名称排序。
    pub fn load(collection: TestCollection) -> Self {
        let TestCollection { name, methods } = collection;
        let mut tests: Vec<TestMethod> = methods
            .into_iter()
            .filter(|m| m.name.starts_with("test"))
            .collect();
        // Sort by name for deterministic execution order
        tests.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            class_name: name,
            tests,
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn tests(&self) -> &[TestMethod] {
        &self.tests
    }

    pub fn count_test_cases(&self) -> usize {
        self.tests.len()
    }
}
