//! 計測結果の整形と出力
//!
//! 所要時間は HH:MM:SS:mmm 形式で表示する

use crate::core::types::BenchmarkResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Durationを HH:MM:SS:mmm 形式でフォーマットする
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    let milliseconds = duration.subsec_millis();

    format!("{hours:02}:{minutes:02}:{seconds:02}:{milliseconds:03}")
}

/// 1回の実行のレポート
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// ベンチマークしたコンテナ実装の名前
    pub container: String,
    /// レポート作成時刻 (RFC 3339)
    pub timestamp: String,
    /// 計測結果
    pub result: BenchmarkResult,
}

impl BenchmarkReport {
    pub fn new(container: impl Into<String>, result: BenchmarkResult) -> Self {
        Self {
            container: container.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            result,
        }
    }

    /// JSON形式でのレポート出力
    pub fn export_json(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
