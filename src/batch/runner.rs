//! # 批量执行器
//!
//! 串联收集、规划、执行三个阶段，逐个处理条目。
//!
//! ## 功能
//! - 严格按收集顺序处理：每个条目先规划再执行，后一个条目的冲突检查
//!   能看到前一个条目的改名结果
//! - 单个条目失败不中断批处理
//! - 结果统计与完整的结果列表
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `batch/collector.rs`, `batch/planner.rs`, `batch/executor.rs`

use super::collector::TreeCollector;
use super::executor;
use super::planner::RenamePlanner;
use crate::error::Result;
use crate::models::{CandidateItem, OutcomeStatus, RenameOutcome};
use crate::patterns::PatternSet;

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 已改名数量
    pub applied: usize,
    /// 已符合规则数量
    pub unchanged: usize,
    /// 目标冲突数量
    pub collisions: usize,
    /// 不匹配数量
    pub ignored: usize,
    /// 失败数量
    pub failed: usize,
    /// 按处理顺序排列的全部结果
    pub outcomes: Vec<RenameOutcome>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, outcome: RenameOutcome) {
        match outcome.status() {
            OutcomeStatus::Applied => self.applied += 1,
            OutcomeStatus::SkipUnchanged => self.unchanged += 1,
            OutcomeStatus::SkipCollision => self.collisions += 1,
            OutcomeStatus::Ignored => self.ignored += 1,
            OutcomeStatus::Failed => self.failed += 1,
        }
        self.outcomes.push(outcome);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.applied + self.unchanged + self.collisions + self.ignored + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// 批量执行器
pub struct BatchRunner {
    collector: TreeCollector,
    patterns: PatternSet,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(collector: TreeCollector, patterns: PatternSet) -> Self {
        Self {
            collector,
            patterns,
        }
    }

    /// 完整流程：校验根目录 → 收集 → 逐个处理
    ///
    /// 根目录不存在时立即返回错误，不处理任何条目。
    pub fn run<F>(&self, on_outcome: F) -> Result<BatchResult>
    where
        F: FnMut(&RenameOutcome),
    {
        // collect 会先校验根目录
        let items = self.collector.collect()?;
        Ok(self.process(items, on_outcome))
    }

    /// 处理已收集的条目列表
    pub fn process<F>(&self, items: Vec<CandidateItem>, mut on_outcome: F) -> BatchResult
    where
        F: FnMut(&RenameOutcome),
    {
        let planner = RenamePlanner::new(&self.patterns);
        let mut result = BatchResult::default();

        for item in items {
            let outcome = executor::execute(planner.plan(item));
            on_outcome(&outcome);
            result.merge(outcome);
        }

        result
    }
}
