//! # rename 命令实现
//!
//! 批量规范化以 14 位时间戳开头的文件和文件夹名称。
//!
//! ## 功能
//! - 扫描目录（可递归）
//! - 逐项规划并执行重命名，实时输出每项结果
//! - 打印汇总表格，可选写出 CSV 报告
//!
//! ## 依赖关系
//! - 使用 `cli/rename.rs` 定义的参数
//! - 使用 `batch/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::{BatchResult, BatchRunner, TreeCollector};
use crate::cli::rename::RenameArgs;
use crate::error::{Result, StampError};
use crate::models::{Decision, ItemKind, OutcomeStatus, RenameOutcome};
use crate::utils::{output, progress};

use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled};

/// 汇总表格行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Count")]
    count: usize,
}

/// CSV 报告行
#[derive(Debug, Serialize)]
struct ReportRow {
    status: OutcomeStatus,
    kind: ItemKind,
    path: String,
    new_name: String,
    message: String,
}

/// CSV 报告表头，与 `ReportRow` 字段顺序一致
const REPORT_HEADER: [&str; 5] = ["status", "kind", "path", "new_name", "message"];

/// 执行 rename 命令
pub fn execute(args: RenameArgs) -> Result<()> {
    output::print_header("Normalizing Timestamp Names");

    let patterns = args.patterns.build()?;
    let collector = TreeCollector::new(args.dir.clone())
        .recursive(args.recursive)
        .exclude(&args.exclude)?;

    output::print_info(&format!(
        "Processing '{}' ({})",
        args.dir.display(),
        if args.recursive { "recursive" } else { "top level only" }
    ));

    let runner = BatchRunner::new(collector, patterns);
    let spinner = progress::create_spinner("Renaming...");

    let result = runner.run(|outcome| {
        spinner.suspend(|| print_outcome(outcome, &args.dir, args.quiet));
        spinner.inc(1);
    });

    spinner.finish_and_clear();
    let result = result?;

    // 目录为空时也写出报告（只有表头）
    if let Some(ref report) = args.report {
        write_report(&result, &args.dir, report)?;
        output::print_success(&format!("Report saved to '{}'", report.display()));
    }

    if result.total() == 0 {
        output::print_warning(&format!("No entries found under {}", args.dir.display()));
        return Ok(());
    }

    print_summary(&result);

    if result.has_failures() {
        output::print_warning(&format!(
            "{} entr{} could not be renamed. Please review errors above.",
            result.failed,
            if result.failed == 1 { "y" } else { "ies" }
        ));
    }

    output::print_done(&format!(
        "Renamed {} of {} entries",
        result.applied,
        result.total()
    ));

    Ok(())
}

/// 相对根目录的显示路径
fn display_path(outcome: &RenameOutcome, root: &Path) -> String {
    let path = &outcome.plan.item.full_path;
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// 结果说明：忽略原因、冲突目标或错误信息
fn describe(outcome: &RenameOutcome) -> String {
    match outcome.plan.decision {
        Decision::Ignore(reason) => reason.to_string(),
        Decision::SkipUnchanged => "already canonical".to_string(),
        Decision::SkipCollision => format!("{} already exists", outcome.plan.new_name),
        Decision::Apply => outcome.error.clone().unwrap_or_default(),
    }
}

/// 是否输出该结果：--quiet 只隐藏已符合规则和被忽略的条目
fn is_visible(status: OutcomeStatus, quiet: bool) -> bool {
    match status {
        OutcomeStatus::SkipUnchanged | OutcomeStatus::Ignored => !quiet,
        OutcomeStatus::Applied | OutcomeStatus::SkipCollision | OutcomeStatus::Failed => true,
    }
}

/// 输出单项结果
fn print_outcome(outcome: &RenameOutcome, root: &Path, quiet: bool) {
    let status = outcome.status();
    if !is_visible(status, quiet) {
        return;
    }

    let kind = outcome.plan.item.kind;
    let path = display_path(outcome, root);

    match status {
        OutcomeStatus::Applied => {
            output::print_rename(&format!("[{}] {}", kind, path), &outcome.plan.new_name)
        }
        OutcomeStatus::SkipCollision => {
            output::print_skip(&format!("[{}] {} -> {}", kind, path, describe(outcome)))
        }
        OutcomeStatus::Failed => {
            output::print_error(&format!("[{}] {}: {}", kind, path, describe(outcome)))
        }
        OutcomeStatus::SkipUnchanged => {
            output::print_skip(&format!("[{}] {} ({})", kind, path, describe(outcome)))
        }
        OutcomeStatus::Ignored => {
            output::print_ignore(&format!("[{}] {} ({})", kind, path, describe(outcome)))
        }
    }
}

/// 打印汇总表格
fn print_summary(result: &BatchResult) {
    let rows = vec![
        SummaryRow {
            status: "Renamed",
            count: result.applied,
        },
        SummaryRow {
            status: "Already canonical",
            count: result.unchanged,
        },
        SummaryRow {
            status: "Target exists",
            count: result.collisions,
        },
        SummaryRow {
            status: "Ignored",
            count: result.ignored,
        },
        SummaryRow {
            status: "Failed",
            count: result.failed,
        },
    ];

    println!();
    println!("{}", Table::new(&rows));
    println!();
}

/// 写出 CSV 报告
fn write_report(result: &BatchResult, root: &Path, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    // serialize 只在写第一行记录时附带表头
    if result.outcomes.is_empty() {
        wtr.write_record(REPORT_HEADER)?;
    }

    for outcome in &result.outcomes {
        wtr.serialize(ReportRow {
            status: outcome.status(),
            kind: outcome.plan.item.kind,
            path: display_path(outcome, root),
            new_name: outcome.plan.new_name.clone(),
            message: describe(outcome),
        })?;
    }

    wtr.flush().map_err(|e| StampError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
