//! 束縛済み操作の呼び出し
//!
//! どの具象型が束縛されていても一様にコンテナ抽象へディスパッチする。
//! コンテナ側の失敗は `ContainerOperation` にラップして伝播し、
//! 握りつぶしもリトライも行わない。

use crate::core::error::{BenchResult, BenchmarkError, ContainerResult};
use crate::core::traits::ContainerAbstraction;
use crate::core::types::SharedInstance;
use crate::dispatch::operation::BoundOperation;

/// 束縛済み操作をコンテナに対して呼び出す
///
/// 登録系の操作は `None` を、取得系の操作は解決されたインスタンスを返す
pub fn invoke(
    operation: &BoundOperation,
    container: &mut dyn ContainerAbstraction,
) -> BenchResult<Option<SharedInstance>> {
    invoke_with(operation, container, None)
}

/// 追加引数 (構築済みインスタンス) 付きで束縛済み操作を呼び出す
///
/// 引数はインスタンス登録系の操作でのみ使用され、それ以外では無視される
pub fn invoke_with(
    operation: &BoundOperation,
    container: &mut dyn ContainerAbstraction,
    argument: Option<SharedInstance>,
) -> BenchResult<Option<SharedInstance>> {
    let outcome: ContainerResult<Option<SharedInstance>> = match operation {
        BoundOperation::RegisterTransientByImplementation { implementation } => {
            container.register_transient(implementation).map(|()| None)
        }
        BoundOperation::RegisterTransientByInterface {
            interface,
            implementation,
        } => container
            .register_transient_as(interface, implementation)
            .map(|()| None),
        BoundOperation::RegisterSingletonByImplementation { implementation } => {
            container.register_singleton(implementation).map(|()| None)
        }
        BoundOperation::RegisterSingletonByInterface {
            interface,
            implementation,
        } => container
            .register_singleton_as(interface, implementation)
            .map(|()| None),
        BoundOperation::RegisterInstanceByImplementation { implementation } => container
            .register_instance(implementation, argument)
            .map(|()| None),
        BoundOperation::RegisterInstanceByInterface {
            interface,
            implementation,
        } => container
            .register_instance_as(interface, implementation, argument)
            .map(|()| None),
        BoundOperation::GetInstance { service } => container.get_instance(service).map(Some),
    };

    outcome.map_err(|source| {
        BenchmarkError::container_operation(operation.operation_name(), source)
    })
}
