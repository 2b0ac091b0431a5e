// キューとパイプライン用のカスタムエラー型定義

use thiserror::Error;

/// キューの利用規約違反
///
/// どちらもコーディネーターのバグを示すため、捕捉して再試行するものではない。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("クローズ済みキューへのエンキュー")]
    Closed,

    #[error("キューが二重にクローズされました")]
    DoubleClose,
}

/// 非ブロッキングなデキューの失敗理由
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryDequeueError {
    #[error("キューが空です")]
    Empty,

    #[error("キューはクローズ済みで空です")]
    Closed,
}

/// パイプライン実行時のエラー型
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("キュー操作エラー: {source}")]
    QueueError {
        #[from]
        source: QueueError,
    },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("バリデーションエラー: {field} - {reason}")]
    ValidationError { field: String, reason: String },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl PipelineError {
    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// バリデーションエラーの作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::QueueError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationError { .. } | Self::ValidationError { .. } => ErrorSeverity::High,
            Self::TaskError { .. } => ErrorSeverity::Medium,
        }
    }

    /// エラーが回復可能かどうかを判定
    ///
    /// キューの規約違反は実行時に回復させない。
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::QueueError { .. } => false,
            Self::ConfigurationError { .. } | Self::ValidationError { .. } => false,
            Self::TaskError { .. } => true,
        }
    }
}

/// エラーの重要度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 中重要度 - 警告レベル
    Medium,
    /// 高重要度 - 要対応
    High,
    /// 致命的 - コーディネーターのバグ
    Critical,
}

impl ErrorSeverity {
    /// 重要度の文字列表現を取得
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl From<tokio::task::JoinError> for PipelineError {
    fn from(error: tokio::task::JoinError) -> Self {
        PipelineError::TaskError { source: error }
    }
}

/// パイプライン処理の結果型
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
