// ベンチマーク実行専用のカスタムエラー型定義
// 全てのエラーは致命的であり、リトライや部分回復は行わない

use thiserror::Error;

/// ベンチマーク実行固有のエラー型
#[derive(Error, Debug)]
pub enum BenchmarkError {
    #[error("引数エラー: {message}")]
    InvalidArgument { message: String },

    #[error("型コンパイルエラー:\n{diagnostics}")]
    Compilation { diagnostics: String },

    #[error("型解決エラー: 生成された型 {type_name} がコンパイル済みモジュールのエクスポート型に見つかりません")]
    TypeResolution { type_name: String },

    #[error("操作解決エラー: {name} (型パラメータ数 {type_arity}) に一致する操作が {matches} 件見つかりました")]
    AmbiguousOrMissingOperation {
        name: String,
        type_arity: usize,
        matches: usize,
    },

    #[error("コンテナ操作エラー: {operation} - {source}")]
    ContainerOperation {
        operation: String,
        #[source]
        source: ContainerError,
    },

    #[error("不正な操作: {message}")]
    InvalidOperation { message: String },
}

impl BenchmarkError {
    /// 引数エラーの作成
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// 型コンパイルエラーの作成
    pub fn compilation(diagnostics: impl Into<String>) -> Self {
        Self::Compilation {
            diagnostics: diagnostics.into(),
        }
    }

    /// 型解決エラーの作成
    pub fn type_resolution(type_name: impl Into<String>) -> Self {
        Self::TypeResolution {
            type_name: type_name.into(),
        }
    }

    /// 操作解決エラーの作成
    pub fn operation_lookup(name: impl Into<String>, type_arity: usize, matches: usize) -> Self {
        Self::AmbiguousOrMissingOperation {
            name: name.into(),
            type_arity,
            matches,
        }
    }

    /// コンテナ操作エラーの作成
    pub fn container_operation(operation: impl Into<String>, source: ContainerError) -> Self {
        Self::ContainerOperation {
            operation: operation.into(),
            source,
        }
    }

    /// 不正操作エラーの作成
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }
}

/// ベンチマーク実行の結果型
pub type BenchResult<T> = std::result::Result<T, BenchmarkError>;

/// コンテナ抽象側で発生するエラー型
///
/// ディスパッチャ経由の呼び出しでは `BenchmarkError::ContainerOperation` に
/// ラップされて伝播する
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    #[error("CreateContainer は既にこのインスタンスで呼び出されています")]
    AlreadyCreated,

    #[error("この操作の前に CreateContainer を呼び出す必要があります")]
    NotCreated,

    #[error("登録するインスタンスが指定されていません")]
    MissingInstance,

    #[error("型 {type_name} は構築可能ではありません (コンストラクタ未定義)")]
    NotConstructible { type_name: String },

    #[error("型 {type_name} はコンテナに登録されていません")]
    NotRegistered { type_name: String },
}

impl ContainerError {
    /// 構築不可能エラーの作成
    pub fn not_constructible(type_name: impl Into<String>) -> Self {
        Self::NotConstructible {
            type_name: type_name.into(),
        }
    }

    /// 未登録エラーの作成
    pub fn not_registered(type_name: impl Into<String>) -> Self {
        Self::NotRegistered {
            type_name: type_name.into(),
        }
    }
}

/// コンテナ操作の結果型
pub type ContainerResult<T> = std::result::Result<T, ContainerError>;
