use std::fmt::Display;

use super::IniReader;
use crate::utils::{join_values, IniError};

impl IniReader {
    /// 添加一项
    ///
    /// 节已存在时追加到末尾（允许重复键），否则新建节。
    /// 未解析的读取器会被标记为已解析。节名为空时不做任何修改。
    pub fn set(&mut self, section: &str, key: impl Into<String>, value: impl Into<String>) {
        if section.is_empty() {
            tracing::warn!("忽略对空节名的写入");
            return;
        }
        self.parsed = true;
        self.document.get_or_insert(section).push(key, value);
    }

    pub fn set_bool(&mut self, section: &str, key: impl Into<String>, value: bool) {
        self.set(section, key, if value { "true" } else { "false" });
    }

    pub fn set_double(&mut self, section: &str, key: impl Into<String>, value: f64) {
        self.set(section, key, value.to_string());
    }

    pub fn set_long(&mut self, section: &str, key: impl Into<String>, value: i64) {
        self.set(section, key, value.to_string());
    }

    /// 用分隔符拼接数组后添加
    pub fn set_array<T: Display>(
        &mut self,
        section: &str,
        key: impl Into<String>,
        separator: &str,
        values: &[T],
    ) {
        self.set(section, key, join_values(values, separator));
    }

    /// 删除节中所有该键的项，返回删除数量
    pub fn erase(&mut self, section: &str, key: &str) -> Result<usize, IniError> {
        let group = self
            .document
            .get_mut(section)
            .ok_or_else(|| IniError::SectionNotFound(section.to_string()))?;

        let removed = group.remove_all(key);
        tracing::trace!(section, key, removed, "删除项");
        Ok(removed)
    }

    /// 只删除第一个该键的项
    pub fn erase_first(&mut self, section: &str, key: &str) -> Result<(), IniError> {
        let group = self
            .document
            .get_mut(section)
            .ok_or_else(|| IniError::SectionNotFound(section.to_string()))?;

        group
            .remove_first(key)
            .map(|_| ())
            .ok_or_else(|| IniError::ItemNotFound {
                section: section.to_string(),
                key: key.to_string(),
            })
    }
}
