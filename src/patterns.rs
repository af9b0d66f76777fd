//! # 名称模式匹配
//!
//! 判断名称是否以 14 位时间戳开头，并提取规范名称的组成部分。
//!
//! ## 模式约定
//! - 文件模式必须包含命名组 `stamp` 和 `ext`，规范名 = `stamp` + `ext`
//! - 文件夹模式必须包含命名组 `stamp` 和 `label`，规范名 = `stamp` + `label`；
//!   可选的 `extra` 组会被丢弃
//! - 所有模式都按 `^(?:…)$` 编译，两端锚定
//!
//! ## 依赖关系
//! - 被 `batch/planner.rs` 和 `commands/canon.rs` 使用
//! - 使用 `regex` crate

use crate::error::{Result, StampError};
use crate::models::ItemKind;

use regex::Regex;

/// 默认文件模式：14 位数字 + 任意内容 + 扩展名
pub const DEFAULT_FILE_PATTERN: &str = r"(?P<stamp>[0-9]{14}).*(?P<ext>\.[A-Za-z0-9]+)";

/// 默认文件夹模式：14 位数字 + 多余数字 + 非数字开头的标签
pub const DEFAULT_FOLDER_PATTERN: &str =
    r"(?P<stamp>[0-9]{14})(?P<extra>[0-9]*)(?P<label>[^0-9].*)";

/// 匹配结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    /// 时间戳部分
    pub stamp: String,
    /// 被丢弃的多余数字（仅文件夹模式）
    pub extra: String,
    /// 保留的后缀：文件为扩展名（含点），文件夹为标签
    pub suffix: String,
    /// 规范名称
    pub canonical: String,
}

/// 文件与文件夹两套模式
#[derive(Debug, Clone)]
pub struct PatternSet {
    file: Regex,
    folder: Regex,
}

impl Default for PatternSet {
    fn default() -> Self {
        // 内置模式为常量，编译失败只可能是代码错误
        Self::new(DEFAULT_FILE_PATTERN, DEFAULT_FOLDER_PATTERN)
            .expect("built-in patterns must compile")
    }
}

impl PatternSet {
    /// 编译并校验两套模式
    pub fn new(file_pattern: &str, folder_pattern: &str) -> Result<Self> {
        let file = compile(ItemKind::File, file_pattern, &["stamp", "ext"])?;
        let folder = compile(ItemKind::Folder, folder_pattern, &["stamp", "label"])?;
        Ok(Self { file, folder })
    }

    /// 按条目类型匹配名称
    pub fn match_name(&self, kind: ItemKind, name: &str) -> Option<NameMatch> {
        let (regex, suffix_group) = match kind {
            ItemKind::File => (&self.file, "ext"),
            ItemKind::Folder => (&self.folder, "label"),
        };

        let caps = regex.captures(name)?;
        let group = |g: &str| -> String {
            caps.name(g)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };

        // 自定义模式中的可选组可能未参与匹配：时间戳必须是 14 位数字，后缀不能为空
        let stamp = group("stamp");
        let suffix = group(suffix_group);
        if !is_stamp(&stamp) || suffix.is_empty() {
            return None;
        }

        Some(NameMatch {
            canonical: format!("{}{}", stamp, suffix),
            extra: group("extra"),
            stamp,
            suffix,
        })
    }

    /// 规范化名称；不匹配时原样返回
    pub fn canonicalize(&self, kind: ItemKind, name: &str) -> String {
        self.match_name(kind, name)
            .map(|m| m.canonical)
            .unwrap_or_else(|| name.to_string())
    }
}

fn is_stamp(s: &str) -> bool {
    s.len() == 14 && s.bytes().all(|b| b.is_ascii_digit())
}

/// 锚定编译并检查必需的命名组
fn compile(kind: ItemKind, pattern: &str, required: &[&str]) -> Result<Regex> {
    let regex =
        Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| StampError::InvalidPattern {
            kind: kind.to_string(),
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

    for group in required {
        if !regex.capture_names().flatten().any(|n| n == *group) {
            return Err(StampError::MissingCaptureGroup {
                kind: kind.to_string(),
                pattern: pattern.to_string(),
                group: group.to_string(),
            });
        }
    }

    Ok(regex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_strips_middle() {
        let p = PatternSet::default();
        assert_eq!(
            p.canonicalize(ItemKind::File, "20240115103000_IMG_extra.jpg"),
            "20240115103000.jpg"
        );
        assert_eq!(
            p.canonicalize(ItemKind::File, "20240115103000 (1).HEIC"),
            "20240115103000.HEIC"
        );
    }

    #[test]
    fn test_file_keeps_last_extension() {
        let p = PatternSet::default();
        assert_eq!(
            p.canonicalize(ItemKind::File, "20240115103000_backup.tar.gz"),
            "20240115103000.gz"
        );
    }

    #[test]
    fn test_file_canonicalize_is_idempotent() {
        let p = PatternSet::default();
        for name in [
            "20240115103000_IMG_extra.jpg",
            "20240115103000.jpg",
            "2024011510300099.mp4",
            "20240115103000-副本.png",
        ] {
            let once = p.canonicalize(ItemKind::File, name);
            assert_eq!(p.canonicalize(ItemKind::File, &once), once, "{}", name);
        }
    }

    #[test]
    fn test_file_no_match() {
        let p = PatternSet::default();
        assert!(p.match_name(ItemKind::File, "notadate.jpg").is_none());
        assert_eq!(p.canonicalize(ItemKind::File, "notadate.jpg"), "notadate.jpg");
        // 不足 14 位
        assert!(p.match_name(ItemKind::File, "2024011510300.jpg").is_none());
        // 没有扩展名
        assert!(p.match_name(ItemKind::File, "20240115103000_IMG").is_none());
        // 扩展名中含非字母数字字符
        assert!(p.match_name(ItemKind::File, "20240115103000.jp-g").is_none());
    }

    #[test]
    fn test_digits_are_ascii_only() {
        let p = PatternSet::default();
        // 全角数字不算时间戳
        assert!(p
            .match_name(ItemKind::File, "２０２４０１１５１０３０００.jpg")
            .is_none());
    }

    #[test]
    fn test_folder_drops_extra_digits() {
        let p = PatternSet::default();
        let m = p
            .match_name(ItemKind::Folder, "20240115103000999-假期照片")
            .unwrap();
        assert_eq!(m.stamp, "20240115103000");
        assert_eq!(m.extra, "999");
        assert_eq!(m.suffix, "-假期照片");
        assert_eq!(m.canonical, "20240115103000-假期照片");
    }

    #[test]
    fn test_folder_without_extra_digits_is_unchanged() {
        let p = PatternSet::default();
        assert_eq!(
            p.canonicalize(ItemKind::Folder, "20240115103000 trip"),
            "20240115103000 trip"
        );
    }

    #[test]
    fn test_folder_requires_label() {
        let p = PatternSet::default();
        assert!(p.match_name(ItemKind::Folder, "20240115103000").is_none());
        assert!(p.match_name(ItemKind::Folder, "20240115103000123").is_none());
        assert!(p.match_name(ItemKind::Folder, "holiday").is_none());
    }

    #[test]
    fn test_kind_selects_pattern() {
        let p = PatternSet::default();
        // 文件夹模式不要求扩展名，文件模式要求
        assert!(p.match_name(ItemKind::Folder, "20240115103000_raw").is_some());
        assert!(p.match_name(ItemKind::File, "20240115103000_raw").is_none());
    }

    #[test]
    fn test_custom_folder_boundary() {
        // 保留多余数字：把它们并入 stamp 之后的标签
        let p = PatternSet::new(
            DEFAULT_FILE_PATTERN,
            r"(?P<stamp>[0-9]{14})_*(?P<label>.+)",
        )
        .unwrap();
        assert_eq!(
            p.canonicalize(ItemKind::Folder, "20240115103000__999-trip"),
            "20240115103000999-trip"
        );
    }

    #[test]
    fn test_custom_patterns_are_anchored() {
        let p = PatternSet::new(r"(?P<stamp>[0-9]{14})(?P<ext>\.jpg)", DEFAULT_FOLDER_PATTERN)
            .unwrap();
        assert!(p.match_name(ItemKind::File, "20240115103000.jpg").is_some());
        assert!(p.match_name(ItemKind::File, "x20240115103000.jpg").is_none());
        assert!(p.match_name(ItemKind::File, "20240115103000.jpg.bak").is_none());
    }

    #[test]
    fn test_optional_stamp_group_must_match() {
        let p = PatternSet::new(r"(?P<stamp>[0-9]{14})?.*(?P<ext>\.jpg)", DEFAULT_FOLDER_PATTERN)
            .unwrap();
        assert!(p.match_name(ItemKind::File, "holiday.jpg").is_none());
        assert_eq!(p.canonicalize(ItemKind::File, "holiday.jpg"), "holiday.jpg");
        assert_eq!(
            p.canonicalize(ItemKind::File, "20240115103000_x.jpg"),
            "20240115103000.jpg"
        );
    }

    #[test]
    fn test_stamp_must_be_fourteen_digits() {
        // stamp 组捕获了非数字内容
        let p = PatternSet::new(r"(?P<stamp>[^_]+)_.*(?P<ext>\.jpg)", DEFAULT_FOLDER_PATTERN)
            .unwrap();
        assert!(p.match_name(ItemKind::File, "holiday_x.jpg").is_none());
        assert!(p.match_name(ItemKind::File, "20240115103000_x.jpg").is_some());
    }

    #[test]
    fn test_empty_label_rejected() {
        let p = PatternSet::new(DEFAULT_FILE_PATTERN, r"(?P<stamp>[0-9]{14})(?P<label>.*)")
            .unwrap();
        assert!(p.match_name(ItemKind::Folder, "20240115103000").is_none());
        assert!(p.match_name(ItemKind::Folder, "20240115103000-trip").is_some());
    }

    #[test]
    fn test_missing_group_rejected() {
        let err = PatternSet::new(r"(?P<stamp>[0-9]{14}).*", DEFAULT_FOLDER_PATTERN).unwrap_err();
        assert!(matches!(
            err,
            StampError::MissingCaptureGroup { ref group, .. } if group == "ext"
        ));
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let err = PatternSet::new(DEFAULT_FILE_PATTERN, r"(?P<stamp>[0-9").unwrap_err();
        assert!(matches!(err, StampError::InvalidPattern { .. }));
    }
}
