//! # 条目收集器
//!
//! 扫描根目录，收集待处理的文件和文件夹。
//!
//! ## 功能
//! - 非递归：只列出根目录的直接子项
//! - 递归：遍历整棵子树，按深度降序排列（最深的先处理），
//!   保证祖先目录改名时其后代已处理完毕
//! - 固定过滤系统元数据文件，另支持 glob 排除
//! - 同层按名称字典序排列，结果与平台的目录列举顺序无关
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 和 `commands/rename.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配排除规则

use crate::error::{Result, StampError};
use crate::models::{CandidateItem, ItemKind};

use std::cmp::Reverse;
use std::path::PathBuf;
use walkdir::WalkDir;

/// 始终跳过的系统元数据文件
pub const SYSTEM_ENTRIES: &[&str] = &[".DS_Store", "Thumbs.db", "desktop.ini"];

/// 条目收集器
#[derive(Debug, Clone)]
pub struct TreeCollector {
    /// 根目录
    root: PathBuf,
    /// 是否递归
    recursive: bool,
    /// 额外排除的名称模式
    excludes: Vec<glob::Pattern>,
}

impl TreeCollector {
    /// 创建新的收集器
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            recursive: false,
            excludes: Vec::new(),
        }
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 设置排除模式（匹配条目名称，不匹配路径）
    pub fn exclude(mut self, patterns: &[String]) -> Result<Self> {
        for pattern in patterns {
            let compiled = glob::Pattern::new(pattern).map_err(|e| {
                StampError::InvalidArgument(format!(
                    "Invalid exclude pattern '{}': {}",
                    pattern, e
                ))
            })?;
            self.excludes.push(compiled);
        }
        Ok(self)
    }

    /// 检查根目录是否存在且为目录
    pub fn validate(&self) -> Result<()> {
        if !self.root.exists() {
            return Err(StampError::DirectoryNotFound {
                path: self.root.display().to_string(),
            });
        }
        if !self.root.is_dir() {
            return Err(StampError::NotADirectory {
                path: self.root.display().to_string(),
            });
        }
        Ok(())
    }

    /// 收集所有候选条目（只读，不修改文件系统）
    pub fn collect(&self) -> Result<Vec<CandidateItem>> {
        self.validate()?;

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(&self.root).min_depth(1).max_depth(max_depth);

        let mut items = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // 根目录本身不可读时 depth 为 0，直接报错；更深的条目跳过
                Err(e) if e.depth() == 0 => {
                    return Err(StampError::DirectoryReadError {
                        path: self.root.display().to_string(),
                        source: e.into(),
                    });
                }
                Err(_) => continue,
            };

            if self.is_excluded(&entry.file_name().to_string_lossy()) {
                continue;
            }

            // 跟随符号链接判断类型，与 stat 语义一致
            let path = entry.into_path();
            let kind = if path.is_dir() {
                ItemKind::Folder
            } else {
                ItemKind::File
            };
            items.push(CandidateItem::new(kind, path));
        }

        if self.recursive {
            items.sort_by(|a, b| {
                (Reverse(a.depth()), &a.full_path).cmp(&(Reverse(b.depth()), &b.full_path))
            });
        } else {
            items.sort_by(|a, b| a.original_name.cmp(&b.original_name));
        }

        Ok(items)
    }

    fn is_excluded(&self, name: &str) -> bool {
        SYSTEM_ENTRIES.contains(&name) || self.excludes.iter().any(|p| p.matches(name))
    }
}
