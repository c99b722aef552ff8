use std::cell::Cell;

use crate::document::{Document, ItemGroup};

/// 当前节游标和节缓存
///
/// 缓存保存的是节在文档中的位置而不是节内容的副本，修改后的数据
/// 对后续读取立即可见。文档被清空时需要调用 `invalidate`。
#[derive(Debug, Default)]
pub struct SectionCursor {
    current: Option<String>,
    cached: Cell<Option<usize>>,
}

impl SectionCursor {
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref().filter(|name| !name.is_empty())
    }

    pub fn set_current(&mut self, section: String) {
        self.current = Some(section);
    }

    pub fn remember(&self, position: usize) {
        self.cached.set(Some(position));
    }

    pub fn invalidate(&self) {
        self.cached.set(None);
    }

    /// 缓存的节名
    pub fn cached_section<'d>(&self, document: &'d Document) -> Option<&'d str> {
        let pos = self.cached.get()?;
        document.section_at(pos).map(|s| s.name.as_str())
    }

    /// 查找节，命中缓存时不查索引；访问其他节时刷新缓存
    pub fn resolve<'d>(&self, document: &'d Document, section: &str) -> Option<&'d ItemGroup> {
        if let Some(cached) = self.cached.get().and_then(|pos| document.section_at(pos)) {
            if cached.name == section {
                return Some(&cached.items);
            }
        }

        let pos = document.position(section)?;
        tracing::trace!(section, "刷新节缓存");
        self.remember(pos);
        document.section_at(pos).map(|s| &s.items)
    }
}
