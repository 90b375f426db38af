pub mod benchmarks;
pub mod cli;
pub mod containers;
pub mod core;
pub mod dispatch;
pub mod factories;
pub mod typegen;

use crate::benchmarks::ContainerBenchmarker;
use crate::core::error::BenchResult;
use crate::core::traits::ContainerAbstraction;
use crate::core::types::BenchmarkResult;

// ライブラリとしての主要API
// 供給されたコンテナ抽象に対して、型ペアの生成からインスタンス取得の計測までを一括で実行する
pub fn benchmark_container(
    container: &mut dyn ContainerAbstraction,
    pair_count: usize,
) -> BenchResult<BenchmarkResult> {
    let mut benchmarker = ContainerBenchmarker::new();
    benchmarker.run(container, pair_count)
}
