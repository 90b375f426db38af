// 型生成レイヤー - ベンチマーク対象となる型ペアの合成とロード
// 純粋なデータ段階 (TypePairSpec) とコンパイル/ロード段階 (CompiledTypePair) の2段パイプライン

pub mod builder;
pub mod generator;
pub mod pool;

// 公開API
pub use builder::DynamicModuleBuilder;
pub use generator::{implementation_type_name, interface_type_name, TypePairGenerator};
pub use pool::{BenchImpl, BenchInterface, POOL_CAPACITY};
