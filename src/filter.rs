use std::collections::HashSet;

/// 节过滤器
///
/// 只在解析时使用：被排除的节永远不会保存；设置了包含列表时只保存列表中的节。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionFilter {
    exclude: Vec<String>,
    include: Vec<String>,
}

impl SectionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 排除指定名称的节
    pub fn exclude(&mut self, section: impl Into<String>) {
        self.exclude.push(section.into());
    }

    /// 只包含指定名称的节（可多次调用）
    pub fn include(&mut self, section: impl Into<String>) {
        self.include.push(section.into());
    }

    pub fn excluded(&self) -> &[String] {
        &self.exclude
    }

    pub fn included(&self) -> &[String] {
        &self.include
    }

    /// 清空两个列表
    pub fn clear(&mut self) {
        self.exclude.clear();
        self.include.clear();
    }

    /// 该节是否应被跳过
    pub fn should_skip(&self, section: &str) -> bool {
        let excluded = self.exclude.iter().any(|s| s == section);
        let included = self.include.is_empty() || self.include.iter().any(|s| s == section);
        excluded || !included
    }

    /// 已读取的节是否恰好覆盖了包含列表（与顺序无关）
    ///
    /// 未设置包含列表时总是返回 false。
    pub fn is_satisfied_by(&self, read_sections: &[String]) -> bool {
        if self.include.is_empty() {
            return false;
        }
        let wanted: HashSet<&str> = self.include.iter().map(String::as_str).collect();
        let read: HashSet<&str> = read_sections.iter().map(String::as_str).collect();
        wanted == read
    }
}
