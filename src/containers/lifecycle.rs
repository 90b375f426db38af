//! ライフサイクルラッパー - 作成前提条件の一括強制
//!
//! どのバックエンドに対しても「作成前の操作は拒否」「二重作成は拒否」を
//! 1箇所で強制する。前提条件フラグは継承ではなく明示的な状態フィールド。

use super::{ContainerBackend, Lifetime, Registration};
use crate::core::error::{ContainerError, ContainerResult};
use crate::core::traits::ContainerAbstraction;
use crate::core::types::{SharedInstance, TypeHandle};

/// バックエンドをコンテナ抽象へ引き上げるラッパー
pub struct LifecycleContainer<B: ContainerBackend> {
    backend: B,
    created: bool,
}

impl<B: ContainerBackend> LifecycleContainer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            created: false,
        }
    }

    /// 診断用のバックエンド名
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    fn ensure_created(&self) -> ContainerResult<()> {
        if self.created {
            Ok(())
        } else {
            Err(ContainerError::NotCreated)
        }
    }

    fn registration_for(
        implementation: &TypeHandle,
        lifetime: Lifetime,
    ) -> ContainerResult<Registration> {
        let constructor = implementation
            .constructor()
            .ok_or_else(|| ContainerError::not_constructible(implementation.name()))?;
        Ok(Registration::from_constructor(lifetime, constructor))
    }
}

impl<B: ContainerBackend> ContainerAbstraction for LifecycleContainer<B> {
    fn create_container(&mut self) -> ContainerResult<()> {
        // 既に作成済みでないことを確認
        if self.created {
            return Err(ContainerError::AlreadyCreated);
        }

        self.backend.initialize()?;
        self.created = true;
        Ok(())
    }

    fn register_transient(&mut self, implementation: &TypeHandle) -> ContainerResult<()> {
        self.ensure_created()?;
        let registration = Self::registration_for(implementation, Lifetime::Transient)?;
        self.backend.register(implementation, registration)
    }

    fn register_transient_as(
        &mut self,
        interface: &TypeHandle,
        implementation: &TypeHandle,
    ) -> ContainerResult<()> {
        self.ensure_created()?;
        let registration = Self::registration_for(implementation, Lifetime::Transient)?;
        self.backend.register(interface, registration)
    }

    fn register_singleton(&mut self, implementation: &TypeHandle) -> ContainerResult<()> {
        self.ensure_created()?;
        let registration = Self::registration_for(implementation, Lifetime::Singleton)?;
        self.backend.register(implementation, registration)
    }

    fn register_singleton_as(
        &mut self,
        interface: &TypeHandle,
        implementation: &TypeHandle,
    ) -> ContainerResult<()> {
        self.ensure_created()?;
        let registration = Self::registration_for(implementation, Lifetime::Singleton)?;
        self.backend.register(interface, registration)
    }

    fn register_instance(
        &mut self,
        implementation: &TypeHandle,
        instance: Option<SharedInstance>,
    ) -> ContainerResult<()> {
        // 引数の検証は作成状態の確認より先に行う
        let instance = instance.ok_or(ContainerError::MissingInstance)?;
        self.ensure_created()?;
        self.backend
            .register(implementation, Registration::from_instance(instance))
    }

    fn register_instance_as(
        &mut self,
        interface: &TypeHandle,
        _implementation: &TypeHandle,
        instance: Option<SharedInstance>,
    ) -> ContainerResult<()> {
        let instance = instance.ok_or(ContainerError::MissingInstance)?;
        self.ensure_created()?;
        self.backend
            .register(interface, Registration::from_instance(instance))
    }

    fn get_instance(&mut self, service: &TypeHandle) -> ContainerResult<SharedInstance> {
        self.ensure_created()?;
        self.backend.resolve(service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::HashMapContainer;
    use crate::typegen::{DynamicModuleBuilder, TypePairGenerator};
    use std::sync::Arc;

    fn created_container() -> LifecycleContainer<HashMapContainer> {
        let mut container = LifecycleContainer::new(HashMapContainer::new());
        container.create_container().unwrap();
        container
    }

    fn compiled_pair(index: usize) -> crate::core::types::CompiledTypePair {
        let specs = TypePairGenerator::new().generate(index).unwrap();
        let mut pairs = DynamicModuleBuilder::new().build(&specs).unwrap();
        pairs.remove(index - 1)
    }

    #[test]
    fn test_create_container_twice_fails() {
        let mut container = created_container();

        let result = container.create_container();

        assert_eq!(result, Err(ContainerError::AlreadyCreated));
    }

    #[test]
    fn test_every_operation_requires_creation() {
        let mut container = LifecycleContainer::new(HashMapContainer::new());
        let pair = compiled_pair(1);

        assert_eq!(
            container.register_transient(pair.implementation()),
            Err(ContainerError::NotCreated)
        );
        assert_eq!(
            container.register_transient_as(pair.interface(), pair.implementation()),
            Err(ContainerError::NotCreated)
        );
        assert_eq!(
            container.register_singleton(pair.implementation()),
            Err(ContainerError::NotCreated)
        );
        assert_eq!(
            container.register_singleton_as(pair.interface(), pair.implementation()),
            Err(ContainerError::NotCreated)
        );
        assert_eq!(
            container.register_instance(
                pair.implementation(),
                Some(pair.implementation().construct().unwrap())
            ),
            Err(ContainerError::NotCreated)
        );
        assert!(matches!(
            container.get_instance(pair.interface()),
            Err(ContainerError::NotCreated)
        ));
    }

    #[test]
    fn test_transient_round_trip_has_distinct_instances() {
        let mut container = created_container();
        let pair = compiled_pair(3);

        container
            .register_transient_as(pair.interface(), pair.implementation())
            .unwrap();

        let first = container.get_instance(pair.interface()).unwrap();
        let second = container.get_instance(pair.interface()).unwrap();

        // 値は等しいが参照は異なる
        assert_eq!(pair.implementation().value_of(first.as_ref()), Some(3));
        assert_eq!(pair.implementation().value_of(second.as_ref()), Some(3));
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_singleton_round_trip_shares_one_instance() {
        let mut container = created_container();
        let pair = compiled_pair(2);

        container
            .register_singleton_as(pair.interface(), pair.implementation())
            .unwrap();

        let first = container.get_instance(pair.interface()).unwrap();
        let second = container.get_instance(pair.interface()).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(pair.implementation().value_of(first.as_ref()), Some(2));
    }

    #[test]
    fn test_register_by_implementation_resolves_by_implementation() {
        let mut container = created_container();
        let pair = compiled_pair(4);

        container.register_transient(pair.implementation()).unwrap();

        let instance = container.get_instance(pair.implementation()).unwrap();
        assert_eq!(pair.implementation().value_of(instance.as_ref()), Some(4));

        // インターフェース側には登録されていない
        assert!(matches!(
            container.get_instance(pair.interface()),
            Err(ContainerError::NotRegistered { .. })
        ));
    }

    #[test]
    fn test_register_instance_requires_an_instance() {
        let mut container = created_container();
        let pair = compiled_pair(1);

        assert_eq!(
            container.register_instance(pair.implementation(), None),
            Err(ContainerError::MissingInstance)
        );
        assert_eq!(
            container.register_instance_as(pair.interface(), pair.implementation(), None),
            Err(ContainerError::MissingInstance)
        );
    }

    #[test]
    fn test_missing_instance_is_reported_before_creation_check() {
        let mut container = LifecycleContainer::new(HashMapContainer::new());
        let pair = compiled_pair(1);

        // 未作成のコンテナでも、先に引数の不在が報告される
        assert_eq!(
            container.register_instance(pair.implementation(), None),
            Err(ContainerError::MissingInstance)
        );
    }

    #[test]
    fn test_interface_handle_is_not_registrable_as_implementation() {
        let mut container = created_container();
        let pair = compiled_pair(1);

        let result = container.register_transient(pair.interface());

        assert!(matches!(
            result,
            Err(ContainerError::NotConstructible { .. })
        ));
    }
}
