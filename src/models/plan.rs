//! # 重命名计划与结果数据模型
//!
//! `RenamePlan` 由 `batch/planner.rs` 生成，`RenameOutcome` 由
//! `batch/executor.rs` 生成。两者都是一次性的，每个条目各一份。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 使用 `models/item.rs`

use super::item::CandidateItem;
use serde::Serialize;
use std::path::PathBuf;

/// 忽略原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// 名称不符合对应的模式
    NoMatch,
    /// 名称不是合法 UTF-8，无法匹配
    NonUtf8Name,
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IgnoreReason::NoMatch => write!(f, "no match"),
            IgnoreReason::NonUtf8Name => write!(f, "name is not valid UTF-8"),
        }
    }
}

/// 计划决策
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Apply,
    SkipUnchanged,
    SkipCollision,
    Ignore(IgnoreReason),
}

/// 单个条目的重命名计划
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub item: CandidateItem,
    /// 规范名称；被忽略时等于原始名称
    pub new_name: String,
    pub new_path: PathBuf,
    pub decision: Decision,
}

/// 结果分类（对应输出标签）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Applied,
    SkipUnchanged,
    SkipCollision,
    Ignored,
    Failed,
}

impl std::fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutcomeStatus::Applied => write!(f, "applied"),
            OutcomeStatus::SkipUnchanged => write!(f, "skip_unchanged"),
            OutcomeStatus::SkipCollision => write!(f, "skip_collision"),
            OutcomeStatus::Ignored => write!(f, "ignored"),
            OutcomeStatus::Failed => write!(f, "failed"),
        }
    }
}

/// 单个条目的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOutcome {
    pub plan: RenamePlan,
    /// 是否实际执行了重命名
    pub success: bool,
    /// 失败时的错误信息
    pub error: Option<String>,
}

impl RenameOutcome {
    /// 重命名成功
    pub fn applied(plan: RenamePlan) -> Self {
        Self {
            plan,
            success: true,
            error: None,
        }
    }

    /// 重命名失败
    pub fn failed(plan: RenamePlan, error: String) -> Self {
        Self {
            plan,
            success: false,
            error: Some(error),
        }
    }

    /// 未尝试重命名（跳过或忽略）
    pub fn untouched(plan: RenamePlan) -> Self {
        Self {
            plan,
            success: false,
            error: None,
        }
    }

    pub fn status(&self) -> OutcomeStatus {
        match self.plan.decision {
            Decision::Apply if self.success => OutcomeStatus::Applied,
            Decision::Apply => OutcomeStatus::Failed,
            Decision::SkipUnchanged => OutcomeStatus::SkipUnchanged,
            Decision::SkipCollision => OutcomeStatus::SkipCollision,
            Decision::Ignore(_) => OutcomeStatus::Ignored,
        }
    }
}
