//! ContainerFactory - コンテナ実装の Factory Pattern 実装

use crate::containers::{BTreeMapContainer, HashMapContainer, LifecycleContainer};
use crate::core::error::{BenchResult, BenchmarkError};
use crate::core::traits::ContainerAbstraction;

pub struct ContainerFactory;

impl ContainerFactory {
    pub fn new() -> Self {
        Self
    }

    /// 名前からコンテナ抽象を作成する (大文字小文字は区別しない)
    pub fn create(&self, name: &str) -> BenchResult<Box<dyn ContainerAbstraction>> {
        match Self::normalize(name).as_str() {
            "hashmap" => Ok(Box::new(LifecycleContainer::new(HashMapContainer::new()))),
            "btreemap" => Ok(Box::new(LifecycleContainer::new(BTreeMapContainer::new()))),
            other => Err(BenchmarkError::invalid_argument(format!(
                "未サポートのコンテナ実装: {other}. 利用可能: {}",
                self.available_implementations().join(", ")
            ))),
        }
    }

    pub fn available_implementations(&self) -> Vec<String> {
        vec!["hashmap".to_string(), "btreemap".to_string()]
    }

    pub fn get_description(&self, implementation: &str) -> Option<String> {
        match Self::normalize(implementation).as_str() {
            "hashmap" => Some("HashMapベースのレジストリ (ハッシュ探索)".to_string()),
            "btreemap" => Some("BTreeMapベースのレジストリ (順序木探索)".to_string()),
            _ => None,
        }
    }

    fn normalize(name: &str) -> String {
        name.trim().to_lowercase()
    }
}

impl Default for ContainerFactory {
    fn default() -> Self {
        Self::new()
    }
}
