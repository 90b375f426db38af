//! BTreeMapベースのDIコンテナ実装 (順序木探索戦略)

use super::{ContainerBackend, Registration};
use crate::core::error::{ContainerError, ContainerResult};
use crate::core::types::{SharedInstance, TypeHandle};
use std::any::TypeId;
use std::collections::BTreeMap;

/// 実行時型IDをキーとする順序木レジストリ
pub struct BTreeMapContainer {
    // initialize 前は None
    registrations: Option<BTreeMap<TypeId, Registration>>,
}

impl BTreeMapContainer {
    pub fn new() -> Self {
        Self {
            registrations: None,
        }
    }
}

impl Default for BTreeMapContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerBackend for BTreeMapContainer {
    fn name(&self) -> &'static str {
        "btreemap"
    }

    fn initialize(&mut self) -> ContainerResult<()> {
        self.registrations = Some(BTreeMap::new());
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::Lifetime;
    use crate::typegen::{DynamicModuleBuilder, TypePairGenerator};
    use std::sync::Arc;

    fn compiled_pairs(count: usize) -> Vec<crate::core::types::CompiledTypePair> {
        let specs = TypePairGenerator::new().generate(count).unwrap();
        DynamicModuleBuilder::new().build(&specs).unwrap()
    }

    #[test]
    fn test_register_and_resolve_many() {
        let pairs = compiled_pairs(32);
        let mut backend = BTreeMapContainer::new();
        assert_eq!(backend.name(), "btreemap");
        backend.initialize().unwrap();

        for pair in &pairs {
            let registration = Registration::from_constructor(
                Lifetime::Transient,
                pair.implementation().constructor().unwrap(),
            );
            backend.register(pair.interface(), registration).unwrap();
        }

        for (position, pair) in pairs.iter().enumerate() {
            let instance = backend.resolve(pair.interface()).unwrap();
            assert_eq!(
                pair.implementation().value_of(instance.as_ref()),
                Some((position + 1) as i32)
            );
        }
    }

    #[test]
    fn test_singleton_registration_is_cached() {
        let pairs = compiled_pairs(1);
        let pair = &pairs[0];
        let mut backend = BTreeMapContainer::new();
        backend.initialize().unwrap();

        let registration = Registration::from_constructor(
            Lifetime::Singleton,
            pair.implementation().constructor().unwrap(),
        );
        backend.register(pair.interface(), registration).unwrap();

        let first = backend.resolve(pair.interface()).unwrap();
        let second = backend.resolve(pair.interface()).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_resolve_unregistered_type_fails() {
        let pairs = compiled_pairs(1);
        let mut backend = BTreeMapContainer::new();
        backend.initialize().unwrap();

        let result = backend.resolve(pairs[0].implementation());

        assert!(matches!(
            result,
            Err(ContainerError::NotRegistered { .. })
        ));
    }
}
