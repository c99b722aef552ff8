use serde::Serialize;
use std::collections::HashMap;

use crate::utils::IniError;

/// 键值项
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub key: String,
    pub value: String,
}

impl Item {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Item {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// 有序多值映射
///
/// 保持插入顺序，允许重复的键，可按完整键或键前缀查询。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ItemGroup {
    items: Vec<Item>,
}

impl ItemGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 追加一项（不检查重复）
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.items.push(Item::new(key, value));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// 第一个键完全匹配的值
    pub fn get(&self, key: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.key == key)
            .map(|item| item.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.iter().any(|item| item.key == key)
    }

    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.items.iter().any(|item| item.key.starts_with(prefix))
    }

    /// 所有键以 `prefix` 开头的值，按组内顺序
    pub fn values_with_prefix(&self, prefix: &str) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| item.key.starts_with(prefix))
            .map(|item| item.value.as_str())
            .collect()
    }

    /// 删除所有键完全匹配的项，返回删除数量
    pub fn remove_all(&mut self, key: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.key != key);
        before - self.items.len()
    }

    /// 删除第一个键完全匹配的项
    pub fn remove_first(&mut self, key: &str) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.key == key)?;
        Some(self.items.remove(pos))
    }
}

impl<'a> IntoIterator for &'a ItemGroup {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Item> for ItemGroup {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        ItemGroup {
            items: iter.into_iter().collect(),
        }
    }
}

/// 节
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
    pub items: ItemGroup,
}

/// 解析后的文档
///
/// 节按插入顺序保存，并维护名称到位置的索引。节只会追加或整体清空，
/// 所以位置在两次 `clear` 之间保持不变，可以作为缓存句柄使用。
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    sections: Vec<Section>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn section_at(&self, position: usize) -> Option<&Section> {
        self.sections.get(position)
    }

    pub fn get(&self, name: &str) -> Option<&ItemGroup> {
        self.position(name).map(|pos| &self.sections[pos].items)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ItemGroup> {
        let pos = self.position(name)?;
        Some(&mut self.sections[pos].items)
    }

    /// 插入新节，同名节已存在时报错
    pub fn insert(&mut self, name: impl Into<String>, items: ItemGroup) -> Result<(), IniError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(IniError::DuplicateSection(name));
        }
        self.push_section(name, items);
        Ok(())
    }

    /// 获取节的项组，不存在时创建空节
    pub fn get_or_insert(&mut self, name: &str) -> &mut ItemGroup {
        let pos = match self.position(name) {
            Some(pos) => pos,
            None => self.push_section(name.to_string(), ItemGroup::new()),
        };
        &mut self.sections[pos].items
    }

    fn push_section(&mut self, name: String, items: ItemGroup) -> usize {
        let pos = self.sections.len();
        self.index.insert(name.clone(), pos);
        self.sections.push(Section { name, items });
        pos
    }

    pub fn clear(&mut self) {
        self.sections.clear();
        self.index.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.sections == other.sections
    }
}

impl Eq for Document {}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
