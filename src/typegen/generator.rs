//! 型ペア生成器 - コンパイル前の型ペア定義を合成する
//!
//! 副作用を持たない純粋なデータ生成段階。名前は1始まりのインデックスから
//! 決定的に導出されるため、コンパイル後の名前引きが一意に定まる。

use crate::core::error::{BenchResult, BenchmarkError};
use crate::core::types::TypePairSpec;

/// インデックスからインターフェース型の正準名を導出
pub fn interface_type_name(index: usize) -> String {
    format!("BenchInterface_{index:05}")
}

/// インデックスから実装型の正準名を導出
pub fn implementation_type_name(index: usize) -> String {
    format!("BenchImpl_{index:05}")
}

/// 型ペア定義の生成器
pub struct TypePairGenerator;

impl TypePairGenerator {
    pub fn new() -> Self {
        Self
    }

    /// 指定した数の型ペア定義を生成する
    ///
    /// 返される列は長さがちょうど `count` で、インターフェース名と実装名は
    /// それぞれ実行内で一意。各定義の Value 定数は識別番号と等しい。
    pub fn generate(&self, count: usize) -> BenchResult<Vec<TypePairSpec>> {
        if count == 0 {
            return Err(BenchmarkError::invalid_argument(
                "生成する型ペア数は1以上である必要があります",
            ));
        }

        let specs = (1..=count)
            .map(|index| TypePairSpec {
                index,
                interface_name: interface_type_name(index),
                implementation_name: implementation_type_name(index),
                value: index as i32,
            })
            .collect();

        Ok(specs)
    }
}

impl Default for TypePairGenerator {
    fn default() -> Self {
        Self::new()
    }
}
