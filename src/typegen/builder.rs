//! 動的モジュールビルダー - 型ペア定義をまとめてコンパイルし実行時ハンドルへ解決する
//!
//! 全定義を1回のバッチでコンパイル/ロードする。定義ごとに個別ロードしないのは、
//! 固定オーバーヘッドを償却するためと、ロード済みユニットを後から拡張できないため。
//! 診断は全件収集してからまとめて報告する (警告もエラーとして扱う)。

use crate::core::error::{BenchResult, BenchmarkError};
use crate::core::types::{CompiledTypePair, TypeHandle, TypePairSpec};
use crate::typegen::generator::{implementation_type_name, interface_type_name};
use crate::typegen::pool::{pool, POOL_CAPACITY};
use std::collections::HashMap;

/// 型ペア定義をコンパイル済みハンドルへ変換するビルダー
pub struct DynamicModuleBuilder;

impl DynamicModuleBuilder {
    pub fn new() -> Self {
        Self
    }

    /// 定義列をコンパイルし、同じ長さ・同じ順序のハンドル列へ解決する
    pub fn build(&self, specs: &[TypePairSpec]) -> BenchResult<Vec<CompiledTypePair>> {
        // 1. コンパイルパス: 全定義を検証し、診断を集約してから失敗させる
        let diagnostics = Self::compile_diagnostics(specs);
        if !diagnostics.is_empty() {
            return Err(BenchmarkError::compilation(diagnostics.join("\n")));
        }

        // 2. ロード: バッチが要求する範囲のエクスポート型テーブルを構築
        let highest_index = specs.iter().map(|spec| spec.index).max().unwrap_or(0);
        let exported_types = Self::load_exported_types(highest_index);

        // 3. 解決: 各定義の名前をエクスポート型テーブルから完全一致で引き当てる
        specs
            .iter()
            .map(|spec| {
                let interface = Self::resolve_exported_type(&exported_types, &spec.interface_name)?;
                let implementation =
                    Self::resolve_exported_type(&exported_types, &spec.implementation_name)?;
                Ok(CompiledTypePair::new(interface, implementation))
            })
            .collect()
    }

    fn compile_diagnostics(specs: &[TypePairSpec]) -> Vec<String> {
        let mut diagnostics = Vec::new();

        for spec in specs {
            if spec.index == 0 {
                diagnostics.push(format!(
                    "定義 \"{}\": 識別番号 0 は不正です (1始まり)",
                    spec.implementation_name
                ));
                continue;
            }

            if spec.index > POOL_CAPACITY {
                diagnostics.push(format!(
                    "定義 \"{}\": 識別番号 {} が型プール容量 {} を超えています",
                    spec.implementation_name, spec.index, POOL_CAPACITY
                ));
            }

            if spec.value != spec.index as i32 {
                diagnostics.push(format!(
                    "定義 \"{}\": Value 定数 {} が識別番号 {} と一致しません",
                    spec.implementation_name, spec.value, spec.index
                ));
            }
        }

        diagnostics
    }

    /// ロード済みユニットのエクスポート型テーブルを型名で引けるように構築
    fn load_exported_types(highest_index: usize) -> HashMap<String, TypeHandle> {
        let mut exported = HashMap::with_capacity(highest_index * 2);

        for entry in &pool()[..highest_index] {
            let interface_name = interface_type_name(entry.index);
            let implementation_name = implementation_type_name(entry.index);

            exported.insert(
                interface_name.clone(),
                TypeHandle::interface(entry.interface_id, interface_name),
            );
            exported.insert(
                implementation_name.clone(),
                TypeHandle::implementation(
                    entry.implementation_id,
                    implementation_name,
                    entry.construct,
                    entry.value_of,
                ),
            );
        }

        exported
    }

    fn resolve_exported_type(
        exported_types: &HashMap<String, TypeHandle>,
        type_name: &str,
    ) -> BenchResult<TypeHandle> {
        exported_types
            .get(type_name)
            .cloned()
            .ok_or_else(|| BenchmarkError::type_resolution(type_name))
    }
}

impl Default for DynamicModuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
