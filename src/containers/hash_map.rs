//! HashMapベースのDIコンテナ実装 (ハッシュ探索戦略)

use super::{ContainerBackend, Registration};
use crate::core::error::{ContainerError, ContainerResult};
use crate::core::types::{SharedInstance, TypeHandle};
use std::any::TypeId;
use std::collections::HashMap;

/// 実行時型IDをキーとするハッシュレジストリ
pub struct HashMapContainer {
    // initialize 前は None
    registrations: Option<HashMap<TypeId, Registration>>,
}

impl HashMapContainer {
    pub fn new() -> Self {
        Self {
            registrations: None,
        }
    }
}

impl Default for HashMapContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerBackend for HashMapContainer {
    fn name(&self) -> &'static str {
        "hashmap"
    }

    fn initialize(&mut self) -> ContainerResult<()> {
        self.registrations = Some(HashMap::new());
        Ok(())
    }

    fn register(
        &mut self,
        service: &TypeHandle,
        registration: Registration,
    ) -> ContainerResult<()> {
        let registrations = self
            .registrations
            .as_mut()
            .ok_or(ContainerError::NotCreated)?;
        registrations.insert(service.id(), registration);
        Ok(())
    }

    fn resolve(&mut self, service: &TypeHandle) -> ContainerResult<SharedInstance> {
        let registrations = self
            .registrations
            .as_mut()
            .ok_or(ContainerError::NotCreated)?;
        let registration = registrations
            .get_mut(&service.id())
            .ok_or_else(|| ContainerError::not_registered(service.name()))?;
        Ok(registration.resolve())
    }
}
