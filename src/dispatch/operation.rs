//! ジェネリック操作の解決とバインド
//!
//! コンテナ抽象は同名で型パラメータ数だけが異なるオーバーロードを公開するため、
//! 操作の引き当ては (名前, 型パラメータ数) の完全一致で行う。
//! バインドは純粋な置換であり、それ自体は何も呼び出さない。

use crate::core::error::{BenchResult, BenchmarkError};
use crate::core::types::TypeHandle;

/// 呼び出したい操作の形状 (名前 + 型パラメータ数)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDescriptor {
    pub name: String,
    pub type_arity: usize,
}

impl OperationDescriptor {
    pub fn new(name: impl Into<String>, type_arity: usize) -> Self {
        Self {
            name: name.into(),
            type_arity,
        }
    }
}

/// コンテナ抽象が公開するジェネリック操作の閉じた集合
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenericOperation {
    RegisterTransientByImplementation,
    RegisterTransientByInterface,
    RegisterSingletonByImplementation,
    RegisterSingletonByInterface,
    RegisterInstanceByImplementation,
    RegisterInstanceByInterface,
    GetInstance,
}

/// 操作テーブル - (名前, 型パラメータ数) からバリアントへの対応
const OPERATION_TABLE: [(&str, usize, GenericOperation); 7] = [
    (
        "register_transient",
        1,
        GenericOperation::RegisterTransientByImplementation,
    ),
    (
        "register_transient",
        2,
        GenericOperation::RegisterTransientByInterface,
    ),
    (
        "register_singleton",
        1,
        GenericOperation::RegisterSingletonByImplementation,
    ),
    (
        "register_singleton",
        2,
        GenericOperation::RegisterSingletonByInterface,
    ),
    (
        "register_instance",
        1,
        GenericOperation::RegisterInstanceByImplementation,
    ),
    (
        "register_instance",
        2,
        GenericOperation::RegisterInstanceByInterface,
    ),
    ("get_instance", 1, GenericOperation::GetInstance),
];

/// 解決済みのジェネリック操作ハンドル
///
/// まだ具象型には束縛されていない。計測ループの外で一度だけ解決しておき、
/// ループ内ではペアごとのバインドと呼び出しだけを行う使い方を想定している。
#[derive(Debug, Clone)]
pub struct GenericOperationHandle {
    operation: GenericOperation,
    name: &'static str,
    type_arity: usize,
}

impl GenericOperationHandle {
    pub fn operation(&self) -> GenericOperation {
        self.operation
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_arity(&self) -> usize {
        self.type_arity
    }
}

/// 操作記述子をジェネリック操作ハンドルへ解決する
///
/// 一致が0件または複数件の場合は `AmbiguousOrMissingOperation` で失敗する
pub fn resolve_operation(descriptor: &OperationDescriptor) -> BenchResult<GenericOperationHandle> {
    let mut resolved = None;
    let mut matches = 0;

    for (name, type_arity, operation) in OPERATION_TABLE {
        if name == descriptor.name && type_arity == descriptor.type_arity {
            matches += 1;
            resolved = Some(GenericOperationHandle {
                operation,
                name,
                type_arity,
            });
        }
    }

    match (matches, resolved) {
        (1, Some(handle)) => Ok(handle),
        _ => Err(BenchmarkError::operation_lookup(
            &descriptor.name,
            descriptor.type_arity,
            matches,
        )),
    }
}

/// 具象型に束縛された、直接呼び出し可能な操作
///
/// バリアントごとに必要な型ハンドルだけを保持するため、
/// 呼び出し側で引数の有無を検査し直す必要がない
#[derive(Debug, Clone)]
pub enum BoundOperation {
    RegisterTransientByImplementation { implementation: TypeHandle },
    RegisterTransientByInterface {
        interface: TypeHandle,
        implementation: TypeHandle,
    },
    RegisterSingletonByImplementation { implementation: TypeHandle },
    RegisterSingletonByInterface {
        interface: TypeHandle,
        implementation: TypeHandle,
    },
    RegisterInstanceByImplementation { implementation: TypeHandle },
    RegisterInstanceByInterface {
        interface: TypeHandle,
        implementation: TypeHandle,
    },
    GetInstance { service: TypeHandle },
}

impl BoundOperation {
    /// 診断用の操作名
    pub fn operation_name(&self) -> &'static str {
        match self {
            Self::RegisterTransientByImplementation { .. }
            | Self::RegisterTransientByInterface { .. } => "register_transient",
            Self::RegisterSingletonByImplementation { .. }
            | Self::RegisterSingletonByInterface { .. } => "register_singleton",
            Self::RegisterInstanceByImplementation { .. }
            | Self::RegisterInstanceByInterface { .. } => "register_instance",
            Self::GetInstance { .. } => "get_instance",
        }
    }
}

/// ジェネリック操作ハンドルに具象型ハンドルを束縛する
///
/// 型引数の数はハンドルの型パラメータ数と完全に一致しなければならない。
/// 型パラメータ数2の操作では [インターフェース, 実装] の順で渡す。
pub fn bind(
    handle: &GenericOperationHandle,
    type_arguments: &[&TypeHandle],
) -> BenchResult<BoundOperation> {
    if type_arguments.len() != handle.type_arity() {
        return Err(BenchmarkError::invalid_argument(format!(
            "操作 {} には型引数が {} 個必要ですが {} 個指定されました",
            handle.name(),
            handle.type_arity(),
            type_arguments.len()
        )));
    }

    let bound = match (handle.operation(), type_arguments) {
        (GenericOperation::RegisterTransientByImplementation, [implementation]) => {
            BoundOperation::RegisterTransientByImplementation {
                implementation: (*implementation).clone(),
            }
        }
        (GenericOperation::RegisterTransientByInterface, [interface, implementation]) => {
            BoundOperation::RegisterTransientByInterface {
                interface: (*interface).clone(),
                implementation: (*implementation).clone(),
            }
        }
        (GenericOperation::RegisterSingletonByImplementation, [implementation]) => {
            BoundOperation::RegisterSingletonByImplementation {
                implementation: (*implementation).clone(),
            }
        }
        (GenericOperation::RegisterSingletonByInterface, [interface, implementation]) => {
            BoundOperation::RegisterSingletonByInterface {
                interface: (*interface).clone(),
                implementation: (*implementation).clone(),
            }
        }
        (GenericOperation::RegisterInstanceByImplementation, [implementation]) => {
            BoundOperation::RegisterInstanceByImplementation {
                implementation: (*implementation).clone(),
            }
        }
        (GenericOperation::RegisterInstanceByInterface, [interface, implementation]) => {
            BoundOperation::RegisterInstanceByInterface {
                interface: (*interface).clone(),
                implementation: (*implementation).clone(),
            }
        }
        (GenericOperation::GetInstance, [service]) => BoundOperation::GetInstance {
            service: (*service).clone(),
        },
        _ => {
            return Err(BenchmarkError::invalid_argument(format!(
                "操作 {} の型引数の形が不正です",
                handle.name()
            )))
        }
    };

    Ok(bound)
}
