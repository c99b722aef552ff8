//! 文本拆分与行分类
//!
//! - `TextLines`: 按推断出的换行符把整段文本拆成逻辑行
//! - `classify`: 把单行识别为节标题、键值项或自由行

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::MAX_LINE_LENGTH;

static SECTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(.*?)\]$").unwrap());

static ITEM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)=(.*?)$").unwrap());

/// 按行遍历文本的迭代器
///
/// 全文最多只有一个 `\n` 时按 `\r` 拆分（旧式 Mac 换行），否则按 `\n` 拆分。
/// 每行中剩余的 `\r` 会被去掉。
#[derive(Debug, Clone)]
pub struct TextLines<'a> {
    inner: std::str::Split<'a, char>,
}

impl<'a> TextLines<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            inner: text.split(line_delimiter(text)),
        }
    }
}

impl<'a> Iterator for TextLines<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.inner.next()?;
        if line.contains('\r') {
            Some(Cow::Owned(line.replace('\r', "")))
        } else {
            Some(Cow::Borrowed(line))
        }
    }
}

/// 推断换行符
pub fn line_delimiter(text: &str) -> char {
    if text.matches('\n').count() <= 1 {
        '\r'
    } else {
        '\n'
    }
}

/// 已分类的行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// `[name]`，名称原样保留
    Section(&'a str),
    /// `key = value`，键和值已去除首尾空白
    Item { key: &'a str, value: &'a str },
    /// 不符合以上格式的行
    FreeForm(&'a str),
}

/// 是否应在分类前直接丢弃该行（空行、超长行、注释）
pub fn is_ignored(line: &str) -> bool {
    line.is_empty()
        || exceeds_max_length(line)
        || line.starts_with(';')
        || line.starts_with('#')
}

fn exceeds_max_length(line: &str) -> bool {
    line.len() > MAX_LINE_LENGTH && line.chars().count() > MAX_LINE_LENGTH
}

/// 对单行分类，被忽略的行返回 `None`
pub fn classify(line: &str) -> Option<Line<'_>> {
    if is_ignored(line) {
        if exceeds_max_length(line) {
            tracing::warn!(length = line.chars().count(), "丢弃超长行");
        }
        return None;
    }

    if let Some(caps) = SECTION_PATTERN.captures(line) {
        return caps.get(1).map(|name| Line::Section(name.as_str()));
    }

    if let Some(caps) = ITEM_PATTERN.captures(line) {
        let key = caps.get(1).map_or("", |m| m.as_str().trim());
        let value = caps.get(2).map_or("", |m| m.as_str().trim());
        return Some(Line::Item { key, value });
    }

    Some(Line::FreeForm(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<String> {
        TextLines::new(text).map(|l| l.into_owned()).collect()
    }

    #[test]
    fn test_split_on_newline() {
        assert_eq!(collect("[a]\nx=1\ny=2\n"), vec!["[a]", "x=1", "y=2", ""]);
    }

    #[test]
    fn test_split_crlf() {
        assert_eq!(collect("[a]\r\nx=1\r\ny=2"), vec!["[a]", "x=1", "y=2"]);
    }

    #[test]
    fn test_split_carriage_return_only() {
        assert_eq!(collect("[a]\rx=1\ry=2"), vec!["[a]", "x=1", "y=2"]);
        // 只有一个 \n 时仍按 \r 拆分，\n 保留在行内
        assert_eq!(line_delimiter("[a]\rx=1\n"), '\r');
    }

    #[test]
    fn test_classify_section() {
        assert_eq!(classify("[general]"), Some(Line::Section("general")));
        assert_eq!(classify("[ spaced ]"), Some(Line::Section(" spaced ")));
        assert_eq!(classify("[]"), Some(Line::Section("")));
    }

    #[test]
    fn test_classify_item() {
        assert_eq!(
            classify("  name = Iron Sword  "),
            Some(Line::Item { key: "name", value: "Iron Sword" })
        );
        // 第一个 = 分隔键值
        assert_eq!(
            classify("url=http://x/?a=b"),
            Some(Line::Item { key: "url", value: "http://x/?a=b" })
        );
        assert_eq!(classify("empty="), Some(Line::Item { key: "empty", value: "" }));
    }

    #[test]
    fn test_classify_free_form() {
        assert_eq!(classify("just some text"), Some(Line::FreeForm("just some text")));
        assert_eq!(classify("[unterminated"), Some(Line::FreeForm("[unterminated")));
    }

    #[test]
    fn test_ignored_lines() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("; comment"), None);
        assert_eq!(classify("# comment"), None);
        assert_eq!(classify(&"a".repeat(MAX_LINE_LENGTH + 1)), None);
        assert!(classify(&format!("k={}", "v".repeat(MAX_LINE_LENGTH - 2))).is_some());
    }
}
