//! # 重命名规划器
//!
//! 对每个候选条目计算规范名称，并决定执行、跳过或忽略。
//!
//! ## 决策顺序
//! 1. 名称不是 UTF-8 或不匹配模式 → 忽略
//! 2. 规范名与原名相同 → 跳过（已符合规则）
//! 3. 目标路径已存在 → 跳过（绝不覆盖）
//! 4. 否则执行
//!
//! 名称相同的检查在冲突检查之前，已规范的条目不会被误报为冲突。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `patterns.rs`, `models/`

use crate::models::{CandidateItem, Decision, IgnoreReason, RenamePlan};
use crate::patterns::PatternSet;

use std::fs;
use std::path::Path;

/// 重命名规划器
pub struct RenamePlanner<'a> {
    patterns: &'a PatternSet,
}

impl<'a> RenamePlanner<'a> {
    pub fn new(patterns: &'a PatternSet) -> Self {
        Self { patterns }
    }

    /// 生成单个条目的计划（只做一次存在性检查，不修改文件系统）
    pub fn plan(&self, item: CandidateItem) -> RenamePlan {
        if !item.has_utf8_name() {
            return Self::ignored(item, IgnoreReason::NonUtf8Name);
        }

        let matched = match self.patterns.match_name(item.kind, &item.original_name) {
            Some(m) => m,
            None => return Self::ignored(item, IgnoreReason::NoMatch),
        };

        let new_name = matched.canonical;
        let new_path = item.parent_dir.join(&new_name);

        let decision = if new_name == item.original_name {
            Decision::SkipUnchanged
        } else if path_taken(&new_path) {
            Decision::SkipCollision
        } else {
            Decision::Apply
        };

        RenamePlan {
            item,
            new_name,
            new_path,
            decision,
        }
    }

    fn ignored(item: CandidateItem, reason: IgnoreReason) -> RenamePlan {
        RenamePlan {
            new_name: item.original_name.clone(),
            new_path: item.full_path.clone(),
            item,
            decision: Decision::Ignore(reason),
        }
    }
}

/// 路径上是否已有条目（悬空的符号链接也算）
pub fn path_taken(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}
