//! # 重命名执行器
//!
//! 执行单个计划中的重命名，失败时返回带错误信息的结果而不中断批处理。
//!
//! `fs::rename` 在 POSIX 上会静默覆盖已存在的文件，因此改名前再检查一次
//! 目标路径；规划之后才出现的目标会被记为失败。两次检查之间仍有极短的
//! 竞态窗口，运行期间应独占目标目录。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `batch/planner.rs` 的存在性检查

use super::planner::path_taken;
use crate::error::{Result, StampError};
use crate::models::{Decision, RenameOutcome, RenamePlan};

use std::fs;

/// 执行计划；非 Apply 的计划原样返回，不触碰文件系统
pub fn execute(plan: RenamePlan) -> RenameOutcome {
    if plan.decision != Decision::Apply {
        return RenameOutcome::untouched(plan);
    }

    match rename(&plan) {
        Ok(()) => RenameOutcome::applied(plan),
        Err(e) => {
            let message = e.to_string();
            RenameOutcome::failed(plan, message)
        }
    }
}

fn rename(plan: &RenamePlan) -> Result<()> {
    if path_taken(&plan.new_path) {
        return Err(StampError::TargetExists {
            path: plan.new_path.display().to_string(),
        });
    }

    fs::rename(&plan.item.full_path, &plan.new_path).map_err(|e| StampError::RenameFailed {
        from: plan.item.full_path.display().to_string(),
        to: plan.new_path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CandidateItem, IgnoreReason, ItemKind, OutcomeStatus};
    use std::path::Path;
    use tempfile::TempDir;

    fn apply_plan(dir: &Path, from: &str, to: &str) -> RenamePlan {
        RenamePlan {
            item: CandidateItem::new(ItemKind::File, dir.join(from)),
            new_name: to.to_string(),
            new_path: dir.join(to),
            decision: Decision::Apply,
        }
    }

    #[test]
    fn test_execute_renames() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("20240115103000_a.jpg"), "a").unwrap();

        let outcome = execute(apply_plan(
            tmp.path(),
            "20240115103000_a.jpg",
            "20240115103000.jpg",
        ));

        assert!(outcome.success);
        assert_eq!(outcome.status(), OutcomeStatus::Applied);
        assert!(!tmp.path().join("20240115103000_a.jpg").exists());
        assert_eq!(
            fs::read_to_string(tmp.path().join("20240115103000.jpg")).unwrap(),
            "a"
        );
    }

    #[test]
    fn test_target_appeared_after_planning() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("20240115103000_a.jpg"), "a").unwrap();
        let plan = apply_plan(tmp.path(), "20240115103000_a.jpg", "20240115103000.jpg");

        // 规划之后由外部创建
        fs::write(tmp.path().join("20240115103000.jpg"), "other").unwrap();
        let outcome = execute(plan);

        assert_eq!(outcome.status(), OutcomeStatus::Failed);
        assert!(outcome.error.unwrap().contains("already exists"));
        assert_eq!(
            fs::read_to_string(tmp.path().join("20240115103000.jpg")).unwrap(),
            "other"
        );
        assert!(tmp.path().join("20240115103000_a.jpg").exists());
    }

    #[test]
    fn test_source_vanished() {
        let tmp = TempDir::new().unwrap();
        let outcome = execute(apply_plan(
            tmp.path(),
            "20240115103000_gone.jpg",
            "20240115103000.jpg",
        ));
        assert!(!outcome.success);
        assert!(outcome.error.unwrap().contains("Failed to rename"));
    }

    #[test]
    fn test_non_apply_untouched() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("notadate.jpg"), "").unwrap();
        let mut plan = apply_plan(tmp.path(), "notadate.jpg", "notadate.jpg");
        plan.decision = Decision::Ignore(IgnoreReason::NoMatch);

        let outcome = execute(plan);
        assert_eq!(outcome.status(), OutcomeStatus::Ignored);
        assert!(outcome.error.is_none());
        assert!(tmp.path().join("notadate.jpg").exists());
    }
}
