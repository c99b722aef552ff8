use std::str::FromStr;

use super::IniReader;
use crate::document::ItemGroup;
use crate::utils::{split_values, IniError};

impl IniReader {
    /// 查找节（经过缓存）
    pub(super) fn lookup(&self, section: &str) -> Option<&ItemGroup> {
        self.cursor.resolve(&self.document, section)
    }

    /// 节中的项数，节不存在或未解析时为 0
    pub fn item_count(&self, section: &str) -> usize {
        if !self.parsed {
            return 0;
        }
        self.lookup(section).map_or(0, ItemGroup::len)
    }

    /// 检查节中是否存在指定键，节不存在时返回 false
    pub fn item_exists(&self, section: &str, key: &str) -> bool {
        self.lookup(section)
            .is_some_and(|group| group.contains_key(key))
    }

    /// 检查节中是否存在以指定前缀开头的键
    pub fn item_prefix_exists(&self, section: &str, prefix: &str) -> bool {
        self.lookup(section)
            .is_some_and(|group| group.contains_prefix(prefix))
    }

    /// 获取节中的所有项
    pub fn get_items(&self, section: &str) -> Result<&ItemGroup, IniError> {
        if !self.parsed {
            return Err(IniError::ParseNotYetRun);
        }
        self.lookup(section)
            .ok_or_else(|| IniError::SectionNotFound(section.to_string()))
    }

    /// 获取所有键以 `prefix` 开头的值
    ///
    /// 节不存在时返回错误；节存在但没有匹配项时返回空列表。
    pub fn get_all(&self, section: &str, prefix: &str) -> Result<Vec<&str>, IniError> {
        Ok(self.get_items(section)?.values_with_prefix(prefix))
    }

    /// 获取第一个键完全匹配的值
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        if !self.parsed {
            return None;
        }
        self.lookup(section)?.get(key)
    }

    /// 值恰好为 "true" 时返回 true
    pub fn get_bool(&self, section: &str, key: &str) -> bool {
        self.get(section, key) == Some("true")
    }

    /// 第一个键以 `prefix` 开头的值
    pub fn get_first(&self, section: &str, prefix: &str) -> Option<&str> {
        self.get_all(section, prefix).ok()?.first().copied()
    }

    /// 按分隔符拆分值并解析为数字，写入 `target`
    ///
    /// 最多写满 `target`，多余的位置填 `T::default()`。
    /// 项不存在时整个数组填默认值。
    pub fn get_int_array<T>(
        &self,
        section: &str,
        key: &str,
        separator: &str,
        target: &mut [T],
    ) -> Result<(), IniError>
    where
        T: FromStr + Default,
    {
        let tokens = split_values(self.get(section, key).unwrap_or(""), separator);

        for (slot, token) in target.iter_mut().zip(&tokens) {
            *slot = token.parse().map_err(|_| IniError::InvalidNumber {
                key: key.to_string(),
                token: token.to_string(),
            })?;
        }
        for slot in target.iter_mut().skip(tokens.len()) {
            *slot = T::default();
        }

        Ok(())
    }
}
