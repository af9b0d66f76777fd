//! # 数据模型模块
//!
//! 定义候选条目、重命名计划和处理结果。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 子模块: item, plan

pub mod item;
pub mod plan;

pub use item::{CandidateItem, ItemKind};
pub use plan::{Decision, IgnoreReason, OutcomeStatus, RenameOutcome, RenamePlan};
