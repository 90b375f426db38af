//! 事前宣言されたconstジェネリック構造バリアントのプール
//!
//! 実行時コンパイラを持たないため、インターフェース/実装のバリアントを
//! ビルド時にマクロ展開で打ち出し、実行時にインデックスで引き当てる。
//! 各バリアントは本物の別個の型であり、`TypeId` も互いに異なる。

use crate::core::traits::ServiceValue;
use crate::core::types::{InstanceConstructor, SharedInstance, ValueAccessor};
use seq_macro::seq;
use std::any::TypeId;
use std::sync::{Arc, OnceLock};

/// プールが保持するバリアント数の上限
///
/// 制約: `build_pool` 内の `seq!` の範囲リテラルと一致させること
pub const POOL_CAPACITY: usize = 2048;

/// インターフェース型のマーカー
///
/// 登録キーとしての `TypeId` を提供するためだけに存在し、構築されることはない
pub struct BenchInterface<const N: usize>;

/// インターフェースを実装するサービス型
///
/// Value アクセサは識別番号 N をそのまま返す
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BenchImpl<const N: usize>;

impl<const N: usize> BenchImpl<N> {
    /// 引数なしコンストラクタ
    pub const fn new() -> Self {
        Self
    }
}

impl<const N: usize> ServiceValue for BenchImpl<N> {
    fn value(&self) -> i32 {
        N as i32
    }
}

/// プールの1エントリ - 1つの型ペアに対応する実行時情報
pub(crate) struct PoolEntry {
    pub index: usize,
    pub interface_id: TypeId,
    pub implementation_id: TypeId,
    pub construct: InstanceConstructor,
    pub value_of: ValueAccessor,
}

fn pool_entry<const N: usize>() -> PoolEntry {
    PoolEntry {
        index: N,
        interface_id: TypeId::of::<BenchInterface<N>>(),
        implementation_id: TypeId::of::<BenchImpl<N>>(),
        construct: || Arc::new(BenchImpl::<N>::new()) as SharedInstance,
        value_of: |instance| instance.downcast_ref::<BenchImpl<N>>().map(|s| s.value()),
    }
}

static POOL: OnceLock<Vec<PoolEntry>> = OnceLock::new();

/// プール全体をインデックス順 (1始まり) で取得
pub(crate) fn pool() -> &'static [PoolEntry] {
    POOL.get_or_init(build_pool).as_slice()
}

fn build_pool() -> Vec<PoolEntry> {
    let mut entries = Vec::with_capacity(POOL_CAPACITY);
    seq!(N in 1..=2048 {
        entries.push(pool_entry::<N>());
    });
    entries
}
