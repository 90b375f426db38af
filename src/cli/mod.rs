// CLI層 - コマンドライン引数の定義と処理
// ユーザーインターフェースとベンチマークロジックの橋渡し

pub mod args;

pub use args::Cli;

use crate::benchmarks::{format_duration, BenchmarkReport, ContainerBenchmarker};
use crate::factories::ContainerFactory;
use anyhow::Result;

/// ベンチマークCLIのエントリポイント
pub fn run(cli: &Cli) -> Result<()> {
    let container_name = cli.container.trim().to_lowercase();

    let factory = ContainerFactory::new();
    let mut container = factory.create(&container_name)?;

    println!("🚀 DIコンテナベンチマーク");
    println!("📦 対象コンテナ: {container_name}");
    if let Some(description) = factory.get_description(&container_name) {
        println!("   - {description}");
    }
    println!("   - 型ペア数: {}", cli.count);

    let mut benchmarker = ContainerBenchmarker::new();
    let result = benchmarker.run(container.as_mut(), cli.count)?;

    println!("\n✅ ベンチマーク完了");
    println!("📊 計測結果:");
    println!("   - コンテナ: {container_name}");
    println!(
        "   - {} 型のtransient登録時間 (インターフェース経由): {}",
        result.number_of_types_created,
        format_duration(result.time_to_register_transient_by_interface)
    );
    println!(
        "   - {} 型のインスタンス取得時間 (インターフェース経由): {}",
        result.number_of_types_created,
        format_duration(result.time_to_get_instances)
    );

    if let Some(report_path) = &cli.report {
        let report = BenchmarkReport::new(&container_name, result);
        report.export_json(report_path)?;
        println!("📄 詳細レポートを出力しました: {}", report_path.display());
    }

    Ok(())
}
