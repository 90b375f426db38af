// ディスパッチレイヤー - ジェネリック操作の解決・バインド・呼び出し
// 操作は名前と型パラメータ数で引き当て、具象型ハンドルを束縛してから一様に呼び出す

pub mod invoker;
pub mod operation;

// 公開API
pub use invoker::{invoke, invoke_with};
pub use operation::{
    bind, resolve_operation, BoundOperation, GenericOperation, GenericOperationHandle,
    OperationDescriptor,
};
