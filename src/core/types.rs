// ベンチマークに関連するデータ型定義

use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// コンテナに流通する型消去済みインスタンス
pub type SharedInstance = Arc<dyn Any + Send + Sync>;

/// 引数なしコンストラクタ
pub type InstanceConstructor = fn() -> SharedInstance;

/// 型消去済みインスタンスから Value アクセサを読み出す関数
///
/// 対象の具象型と一致しない場合は `None` を返す
pub type ValueAccessor = fn(&(dyn Any + Send + Sync)) -> Option<i32>;

/// コンパイル済みモジュールから取り出した実行時型ハンドル
///
/// インターフェースハンドルはコンストラクタを持たない。
/// 実装ハンドルはコンストラクタと Value アクセサの両方を持つ。
#[derive(Clone)]
pub struct TypeHandle {
    id: TypeId,
    name: Arc<str>,
    constructor: Option<InstanceConstructor>,
    value_accessor: Option<ValueAccessor>,
}

impl TypeHandle {
    /// インターフェース型のハンドルを作成
    pub(crate) fn interface(id: TypeId, name: impl Into<Arc<str>>) -> Self {
        Self {
            id,
            name: name.into(),
            constructor: None,
            value_accessor: None,
        }
    }

    /// 実装型のハンドルを作成
    pub(crate) fn implementation(
        id: TypeId,
        name: impl Into<Arc<str>>,
        constructor: InstanceConstructor,
        value_accessor: ValueAccessor,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            constructor: Some(constructor),
            value_accessor: Some(value_accessor),
        }
    }

    /// 実行時型ID
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// 診断用の型名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// この型がインスタンスを構築可能かどうか
    pub fn is_constructible(&self) -> bool {
        self.constructor.is_some()
    }

    /// コンストラクタを取得
    pub fn constructor(&self) -> Option<InstanceConstructor> {
        self.constructor
    }

    /// 新しいインスタンスを構築
    pub fn construct(&self) -> Option<SharedInstance> {
        self.constructor.map(|constructor| constructor())
    }

    /// 型消去済みインスタンスからこの型の Value を読み出す
    pub fn value_of(&self, instance: &(dyn Any + Send + Sync)) -> Option<i32> {
        self.value_accessor.and_then(|accessor| accessor(instance))
    }
}

impl fmt::Debug for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeHandle")
            .field("name", &self.name)
            .field("id", &self.id)
            .field("constructible", &self.is_constructible())
            .finish()
    }
}

impl PartialEq for TypeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeHandle {}

/// コンパイル前の型ペア定義
///
/// 生成器が作り、モジュールビルダーが直接消費する一時データ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypePairSpec {
    /// 1始まりの識別番号
    pub index: usize,
    /// インターフェース型の名前
    pub interface_name: String,
    /// 実装型の名前
    pub implementation_name: String,
    /// 実装型の Value アクセサが返す定数 (= index)
    pub value: i32,
}

/// コンパイル済みのインターフェース/実装ハンドルのペア
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTypePair {
    interface: TypeHandle,
    implementation: TypeHandle,
}

impl CompiledTypePair {
    pub(crate) fn new(interface: TypeHandle, implementation: TypeHandle) -> Self {
        Self {
            interface,
            implementation,
        }
    }

    /// インターフェース型のハンドル
    pub fn interface(&self) -> &TypeHandle {
        &self.interface
    }

    /// 実装型のハンドル
    pub fn implementation(&self) -> &TypeHandle {
        &self.implementation
    }

    /// インターフェース型の名前
    pub fn interface_name(&self) -> &str {
        self.interface.name()
    }

    /// 実装型の名前
    pub fn implementation_name(&self) -> &str {
        self.implementation.name()
    }
}

impl fmt::Display for CompiledTypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CompiledTypePair {{ interface = \"{}\", implementation = \"{}\" }}",
            self.interface_name(),
            self.implementation_name()
        )
    }
}

/// ベンチマーク結果
///
/// 両フェーズが中断なく完走した場合にのみ構築される
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// 生成した型ペアの数
    pub number_of_types_created: usize,
    /// transient登録フェーズの所要時間 (インターフェース経由)
    pub time_to_register_transient_by_interface: Duration,
    /// インスタンス取得フェーズの所要時間
    pub time_to_get_instances: Duration,
}

impl BenchmarkResult {
    pub fn new(
        number_of_types_created: usize,
        time_to_register_transient_by_interface: Duration,
        time_to_get_instances: Duration,
    ) -> Self {
        Self {
            number_of_types_created,
            time_to_register_transient_by_interface,
            time_to_get_instances,
        }
    }
}
