//! # 待处理条目数据模型
//!
//! 由 `batch/collector.rs` 产出，每个条目只被 `batch/planner.rs` 消费一次。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 无外部模块依赖

use serde::Serialize;
use std::path::{Path, PathBuf};

/// 条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    File,
    Folder,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::File => write!(f, "file"),
            ItemKind::Folder => write!(f, "folder"),
        }
    }
}

/// 候选条目（扫描时的快照）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateItem {
    /// 文件或文件夹
    pub kind: ItemKind,
    /// 所在目录
    pub parent_dir: PathBuf,
    /// 原始名称（非 UTF-8 名称按 lossy 方式转换，仅用于显示）
    pub original_name: String,
    /// 完整路径
    pub full_path: PathBuf,
}

impl CandidateItem {
    /// 从完整路径创建条目，父目录和名称均取自路径本身
    pub fn new(kind: ItemKind, full_path: PathBuf) -> Self {
        let parent_dir = full_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let original_name = full_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            kind,
            parent_dir,
            original_name,
            full_path,
        }
    }

    /// 名称是否为合法 UTF-8
    pub fn has_utf8_name(&self) -> bool {
        self.full_path
            .file_name()
            .map(|n| n.to_str().is_some())
            .unwrap_or(false)
    }

    /// 路径深度（相对文件系统根的组件数）
    pub fn depth(&self) -> usize {
        self.full_path.components().count()
    }
}
