//! # 批量重命名模块
//!
//! 规范化以 14 位时间戳开头的文件和文件夹名称。
//!
//! ## 功能
//! - 收集待处理条目（可递归，最深的先处理）
//! - 计算规范名称并决定执行/跳过/忽略
//! - 执行重命名，单项失败不影响其余条目
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 使用 `patterns.rs`, `models/`
//! - 使用 `walkdir` 遍历目录

pub mod collector;
pub mod executor;
pub mod planner;
pub mod runner;

pub use collector::TreeCollector;
pub use runner::{BatchResult, BatchRunner};
