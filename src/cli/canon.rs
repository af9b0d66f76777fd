//! # canon 子命令 CLI 定义
//!
//! 只计算规范名称，不访问文件系统
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/canon.rs`

use super::patterns::PatternArgs;
use clap::Args;

/// canon 子命令参数
#[derive(Args, Debug)]
pub struct CanonArgs {
    /// Names to canonicalize
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Treat the names as folder names instead of file names
    #[arg(long, default_value_t = false)]
    pub folder: bool,

    #[command(flatten)]
    pub patterns: PatternArgs,
}
