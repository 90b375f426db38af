// コンテナ抽象のトレイト定義
// 全ての抽象化インターフェースを定義

use super::error::ContainerResult;
use super::types::{SharedInstance, TypeHandle};
use mockall::automock;

/// 生成された実装型が公開する単一の読み取り専用整数アクセサ
pub trait ServiceValue: Send + Sync {
    /// この型の定数値を取得
    fn value(&self) -> i32;
}

/// DIコンテナの抽象化トレイト
///
/// ジェネリックな登録/解決操作を、実行時型情報 (`TypeHandle`) を
/// 明示的な引数として受け取る具象メソッドとして公開する。
/// 各メソッドはジェネリック操作の1バリアント (名前 + 型パラメータ数) に対応する。
#[automock]
pub trait ContainerAbstraction {
    /// コンテナを作成する
    ///
    /// 2回目以降の呼び出しは `ContainerError::AlreadyCreated` で失敗する
    fn create_container(&mut self) -> ContainerResult<()>;

    /// 実装型をtransientライフタイムで登録する (型パラメータ数 1)
    fn register_transient(&mut self, implementation: &TypeHandle) -> ContainerResult<()>;

    /// 実装型をインターフェース型に対してtransientライフタイムで登録する (型パラメータ数 2)
    fn register_transient_as(
        &mut self,
        interface: &TypeHandle,
        implementation: &TypeHandle,
    ) -> ContainerResult<()>;

    /// 実装型をsingletonライフタイムで登録する (型パラメータ数 1)
    fn register_singleton(&mut self, implementation: &TypeHandle) -> ContainerResult<()>;

    /// 実装型をインターフェース型に対してsingletonライフタイムで登録する (型パラメータ数 2)
    fn register_singleton_as(
        &mut self,
        interface: &TypeHandle,
        implementation: &TypeHandle,
    ) -> ContainerResult<()>;

    /// 構築済みインスタンスを登録する (型パラメータ数 1)
    ///
    /// インスタンスが `None` の場合は `ContainerError::MissingInstance` で失敗する
    fn register_instance(
        &mut self,
        implementation: &TypeHandle,
        instance: Option<SharedInstance>,
    ) -> ContainerResult<()>;

    /// 構築済みインスタンスをインターフェース型に対して登録する (型パラメータ数 2)
    fn register_instance_as(
        &mut self,
        interface: &TypeHandle,
        implementation: &TypeHandle,
        instance: Option<SharedInstance>,
    ) -> ContainerResult<()>;

    /// サービス型のインスタンスを解決して返す (型パラメータ数 1)
    fn get_instance(&mut self, service: &TypeHandle) -> ContainerResult<SharedInstance>;
}

// ContainerAbstraction for Box<dyn ContainerAbstraction>
impl ContainerAbstraction for Box<dyn ContainerAbstraction> {
    fn create_container(&mut self) -> ContainerResult<()> {
        self.as_mut().create_container()
    }

    fn register_transient(&mut self, implementation: &TypeHandle) -> ContainerResult<()> {
        self.as_mut().register_transient(implementation)
    }

    fn register_transient_as(
        &mut self,
        interface: &TypeHandle,
        implementation: &TypeHandle,
    ) -> ContainerResult<()> {
        self.as_mut().register_transient_as(interface, implementation)
    }

    fn register_singleton(&mut self, implementation: &TypeHandle) -> ContainerResult<()> {
        self.as_mut().register_singleton(implementation)
    }

    fn register_singleton_as(
        &mut self,
        interface: &TypeHandle,
        implementation: &TypeHandle,
    ) -> ContainerResult<()> {
        self.as_mut().register_singleton_as(interface, implementation)
    }

    fn register_instance(
        &mut self,
        implementation: &TypeHandle,
        instance: Option<SharedInstance>,
    ) -> ContainerResult<()> {
        self.as_mut().register_instance(implementation, instance)
    }

    fn register_instance_as(
        &mut self,
        interface: &TypeHandle,
        implementation: &TypeHandle,
        instance: Option<SharedInstance>,
    ) -> ContainerResult<()> {
        self.as_mut()
            .register_instance_as(interface, implementation, instance)
    }

    fn get_instance(&mut self, service: &TypeHandle) -> ContainerResult<SharedInstance> {
        self.as_mut().get_instance(service)
    }
}
