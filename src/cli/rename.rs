//! # rename 子命令 CLI 定义
//!
//! 规范化目录中以 14 位时间戳开头的文件和文件夹名称
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rename.rs`

use super::patterns::PatternArgs;
use clap::Args;
use std::path::PathBuf;

/// rename 子命令参数
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Directory whose entries should be renamed
    pub dir: PathBuf,

    /// Recurse into subdirectories (deepest entries are renamed first)
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Glob for entry names to leave alone (repeatable)
    #[arg(short, long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Only print renames, collisions and failures
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Write one CSV row per processed entry to this file
    #[arg(long, value_name = "CSV")]
    pub report: Option<PathBuf>,

    #[command(flatten)]
    pub patterns: PatternArgs,
}
