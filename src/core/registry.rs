//! # Collection Registry Module / 测试集合注册表模块
//!
//! Maps collection names to factories that build them. The registry is
//! populated once at startup and consulted by the orchestrator to run a
//! collection by name.
//!
//! 将测试集合名称映射到构建它们的工厂函数。注册表在启动时填充一次，
//! 编排器通过它按名称运行测试集合。

use std::collections::BTreeMap;

use anyhow::Result;
use thiserror::Error;

use crate::core::suite::TestCollection;

/// Builds a collection. Fails when the collection cannot be loaded.
pub type CollectionFactory = fn() -> Result<TestCollection>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("a test collection named '{0}' is already registered")]
    Duplicate(String),
}

#[derive(Debug, Default, Clone)]
pub struct CollectionRegistry {
    factories: BTreeMap<String, CollectionFactory>,
}

impl CollectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `factory` under `name`. Names are unique.
    /// 以 `name` 注册 `factory`。名称必须唯一。
    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: CollectionFactory,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }
        self.factories.insert(name, factory);
        Ok(())
    }

    /// Chainable form of [`register`](Self::register) for startup code.
    pub fn with(mut self, name: impl Into<String>, factory: CollectionFactory) -> Result<Self, RegistryError> {
        self.register(name, factory)?;
        Ok(self)
    }

    /// Looks up the factory registered under `name`.
    pub fn resolve(&self, name: &str) -> Option<CollectionFactory> {
        self.factories.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
