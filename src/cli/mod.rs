//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `rename`: 批量规范化文件/文件夹名称
//! - `canon`: 计算给定名称的规范形式
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: rename, canon, patterns

pub mod canon;
pub mod patterns;
pub mod rename;

use clap::{Parser, Subcommand};

/// stampname - 时间戳文件名规范化工具
#[derive(Parser)]
#[command(name = "stampname")]
#[command(version)]
#[command(
    about = "Normalize names of files and folders that start with a 14-digit timestamp",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Rename entries under a directory to their canonical timestamp names
    Rename(rename::RenameArgs),

    /// Print the canonical form of the given names without touching the disk
    Canon(canon::CanonArgs),
}
