// コンテナレイヤー - ベンチマーク対象となる具象DIコンテナ実装
// 具象実装は ContainerBackend を実装し、LifecycleContainer がライフサイクル前提条件を一括で強制する

pub mod btree_map;
pub mod hash_map;
pub mod lifecycle;

// 公開API
pub use btree_map::BTreeMapContainer;
pub use hash_map::HashMapContainer;
pub use lifecycle::LifecycleContainer;

use crate::core::error::ContainerResult;
use crate::core::types::{InstanceConstructor, SharedInstance, TypeHandle};

/// 登録のライフタイムポリシー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// 解決のたびに新しいインスタンスを生成
    Transient,
    /// 全ての解決で単一のインスタンスを共有
    Singleton,
}

/// 登録済みサービスの生成手段
#[derive(Clone)]
enum Provider {
    Constructor(InstanceConstructor),
    Instance(SharedInstance),
}

/// バックエンドが保持する1件の登録情報
pub struct Registration {
    lifetime: Lifetime,
    provider: Provider,
    // singleton初回解決後のキャッシュ
    cached: Option<SharedInstance>,
}

impl Registration {
    /// コンストラクタ由来の登録を作成
    pub fn from_constructor(lifetime: Lifetime, constructor: InstanceConstructor) -> Self {
        Self {
            lifetime,
            provider: Provider::Constructor(constructor),
            cached: None,
        }
    }

    /// 構築済みインスタンス由来の登録を作成 (実質singleton)
    pub fn from_instance(instance: SharedInstance) -> Self {
        Self {
            lifetime: Lifetime::Singleton,
            provider: Provider::Instance(instance),
            cached: None,
        }
    }

    /// 登録のライフタイムポリシー
    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    /// 登録からインスタンスを1つ解決する
    pub(crate) fn resolve(&mut self) -> SharedInstance {
        match (&self.provider, self.lifetime) {
            (Provider::Instance(instance), _) => instance.clone(),
            (Provider::Constructor(constructor), Lifetime::Transient) => constructor(),
            (Provider::Constructor(constructor), Lifetime::Singleton) => {
                if let Some(cached) = &self.cached {
                    cached.clone()
                } else {
                    let instance = constructor();
                    self.cached = Some(instance.clone());
                    instance
                }
            }
        }
    }
}

/// 具象DIコンテナが実装する機能インターフェース
///
/// ライフサイクル前提条件 (作成済みかどうか) はここでは扱わない。
/// それは `LifecycleContainer` が全バックエンドに対して一度だけ強制する。
pub trait ContainerBackend {
    /// 診断用のバックエンド名
    fn name(&self) -> &'static str;

    /// 内部レジストリを構築する
    fn initialize(&mut self) -> ContainerResult<()>;

    /// サービス型に対する登録を追加する (再登録は上書き)
    fn register(&mut self, service: &TypeHandle, registration: Registration)
        -> ContainerResult<()>;

    /// サービス型のインスタンスを解決する
    fn resolve(&mut self, service: &TypeHandle) -> ContainerResult<SharedInstance>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn counter_constructor() -> SharedInstance {
        Arc::new(11i32)
    }

    #[test]
    fn test_transient_registration_resolves_fresh_instances() {
        let mut registration =
            Registration::from_constructor(Lifetime::Transient, counter_constructor);

        let a = registration.resolve();
        let b = registration.resolve();

        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_singleton_registration_caches_first_instance() {
        let mut registration =
            Registration::from_constructor(Lifetime::Singleton, counter_constructor);

        let a = registration.resolve();
        let b = registration.resolve();

        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_instance_registration_returns_the_prebuilt_instance() {
        let prebuilt: SharedInstance = Arc::new(5i32);
        let mut registration = Registration::from_instance(prebuilt.clone());

        let resolved = registration.resolve();

        assert!(Arc::ptr_eq(&prebuilt, &resolved));
        assert_eq!(registration.lifetime(), Lifetime::Singleton);
    }
}
