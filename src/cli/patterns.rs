//! # 共享的模式参数
//!
//! `rename` 与 `canon` 共用的模式覆盖参数，也可以从环境变量读取。
//!
//! ## 依赖关系
//! - 被 `cli/rename.rs`, `cli/canon.rs` 使用
//! - 由 `commands/` 转换为 `patterns::PatternSet`

use crate::error::Result;
use crate::patterns::{PatternSet, DEFAULT_FILE_PATTERN, DEFAULT_FOLDER_PATTERN};

use clap::Args;

/// 文件/文件夹名称模式
#[derive(Args, Debug, Clone)]
pub struct PatternArgs {
    /// Regex for file names; needs named groups `stamp` and `ext`
    #[arg(long, env = "STAMPNAME_FILE_PATTERN", default_value = DEFAULT_FILE_PATTERN)]
    pub file_pattern: String,

    /// Regex for folder names; needs `stamp` and `label`, optional `extra` is dropped
    #[arg(long, env = "STAMPNAME_FOLDER_PATTERN", default_value = DEFAULT_FOLDER_PATTERN)]
    pub folder_pattern: String,
}

impl PatternArgs {
    /// 编译为模式集合
    pub fn build(&self) -> Result<PatternSet> {
        PatternSet::new(&self.file_pattern, &self.folder_pattern)
    }
}
