use thiserror::Error;
use std::path::Path;

/// 自定义错误类型
#[derive(Error, Debug)]
pub enum IniError {
    #[error("Item outside any section at line {line}")]
    ItemOutsideSection { line: usize },

    #[error("Duplicate section: [{0}]")]
    DuplicateSection(String),

    #[error("Section not found: [{0}]")]
    SectionNotFound(String),

    #[error("No current section set")]
    NoCurrentSection,

    #[error("Document has not been parsed")]
    ParseNotYetRun,

    #[error("Item not found: [{section}] {key}")]
    ItemNotFound { section: String, key: String },

    #[error("Invalid number in item {key}: {token:?}")]
    InvalidNumber { key: String, token: String },

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 按分隔符拆分数组值
///
/// 空字符串返回空列表，各元素去除首尾空白
pub fn split_values<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    if text.is_empty() {
        return Vec::new();
    }
    if separator.is_empty() {
        return vec![text.trim()];
    }
    text.split(separator).map(str::trim).collect()
}

/// 用分隔符拼接数组值（末尾不带分隔符）
pub fn join_values<T: std::fmt::Display>(values: &[T], separator: &str) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// 创建文件备份
pub fn create_backup(file_path: &Path) -> Result<std::path::PathBuf, IniError> {
    if !file_path.exists() {
        return Err(IniError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "原文件不存在"
        )));
    }

    let timestamp = chrono::Local::now().format("%Y-%m-%d-%H-%M-%S");
    let backup_path = file_path.with_extension(format!("{}.bak", timestamp));

    std::fs::copy(file_path, &backup_path)?;

    Ok(backup_path)
}
