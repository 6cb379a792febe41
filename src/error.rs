use std::path::PathBuf;
use thiserror::Error;

pub type SheetsResult<T> = Result<T, SheetsError>;

/// Fixed remediation text shown when no xlsx writer is compiled in.
pub const REMEDIATION_MESSAGE: &str =
    "エラー: xlsx出力機能が必要です。\nインストール方法: cargo install --path . --features xlsx";

#[derive(Error, Debug)]
pub enum SheetsError {
    #[error("{backend} writer is not available in this build")]
    WriterUnavailable { backend: &'static str },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse failure classes callers can assert on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DependencyMissing,
    WriteFailure,
    Other,
}

impl SheetsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SheetsError::WriterUnavailable { .. } => ErrorKind::DependencyMissing,
            SheetsError::Write { .. } => ErrorKind::WriteFailure,
            SheetsError::Layout(_)
            | SheetsError::Render(_)
            | SheetsError::InvalidDate { .. }
            | SheetsError::Json(_) => ErrorKind::Other,
        }
    }

    /// Message printed to the user for this failure.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::DependencyMissing => REMEDIATION_MESSAGE.to_string(),
            _ => format!("エラーが発生しました: {}", self),
        }
    }

    /// Process exit code used by the `dx-sheets` front-end.
    ///
    /// 2 is left to clap for usage errors.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::DependencyMissing => 3,
            ErrorKind::WriteFailure | ErrorKind::Other => 1,
        }
    }
}
