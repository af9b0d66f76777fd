//! # canon 命令实现
//!
//! 打印给定名称的规范形式，不访问文件系统。
//!
//! ## 依赖关系
//! - 使用 `cli/canon.rs` 定义的参数
//! - 使用 `patterns.rs`
//! - 使用 `utils/output.rs`

use crate::cli::canon::CanonArgs;
use crate::error::Result;
use crate::models::ItemKind;
use crate::patterns::PatternSet;
use crate::utils::output;

/// 单个名称的规范化结果
#[derive(Debug, PartialEq, Eq)]
enum CanonResult {
    Changed(String),
    Unchanged,
    NoMatch,
}

/// 执行 canon 命令
pub fn execute(args: CanonArgs) -> Result<()> {
    let patterns = args.patterns.build()?;
    let kind = if args.folder {
        ItemKind::Folder
    } else {
        ItemKind::File
    };

    for name in &args.names {
        match canon(&patterns, kind, name) {
            CanonResult::Changed(canonical) => output::print_rename(name, &canonical),
            CanonResult::Unchanged => output::print_skip(&format!("{} (already canonical)", name)),
            CanonResult::NoMatch => output::print_ignore(&format!("{} (no match)", name)),
        }
    }

    Ok(())
}

fn canon(patterns: &PatternSet, kind: ItemKind, name: &str) -> CanonResult {
    match patterns.match_name(kind, name) {
        Some(m) if m.canonical == name => CanonResult::Unchanged,
        Some(m) => CanonResult::Changed(m.canonical),
        None => CanonResult::NoMatch,
    }
}
