//! # 统一错误处理模块
//!
//! 定义 stampname 的所有错误类型，使用 `thiserror` 派生。
//!
//! 单个条目的重命名失败不会中断批处理：执行器把 `RenameFailed` /
//! `TargetExists` 渲染为文本写入结果记录，其余变体才会终止命令。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// stampname 统一错误类型
#[derive(Error, Debug)]
pub enum StampError {
    // ─────────────────────────────────────────────────────────────
    // 路径错误
    // ─────────────────────────────────────────────────────────────
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Failed to read directory: {path}")]
    DirectoryReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 重命名错误（按条目记录，不中断批处理）
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to rename {from} -> {to}: {source}")]
    RenameFailed {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Target already exists: {path}")]
    TargetExists { path: String },

    // ─────────────────────────────────────────────────────────────
    // 模式错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid {kind} pattern '{pattern}'\nReason: {reason}")]
    InvalidPattern {
        kind: String,
        pattern: String,
        reason: String,
    },

    #[error("The {kind} pattern '{pattern}' has no named group '{group}'")]
    MissingCaptureGroup {
        kind: String,
        pattern: String,
        group: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, StampError>;
