use super::IniReader;
use crate::NONAME_KEY;

/// 读取器统计信息
pub struct ReaderStats {
    pub parsed: bool,
    pub section_count: usize,
    pub item_count: usize,
    pub free_form_count: usize,
    pub current_section: Option<String>,
}

impl std::fmt::Display for ReaderStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== INI 统计信息 ===")?;
        writeln!(f, "已解析: {}", if self.parsed { "是" } else { "否" })?;
        writeln!(f, "节数量: {}", self.section_count)?;
        writeln!(f, "项数量: {}", self.item_count)?;
        writeln!(f, "自由行数量: {}", self.free_form_count)?;
        writeln!(f, "当前节: {}", self.current_section.as_deref().unwrap_or("(无)"))?;
        Ok(())
    }
}

impl IniReader {
    /// 获取统计信息
    pub fn get_stats(&self) -> ReaderStats {
        let items = self.document.iter().flat_map(|section| section.items.iter());
        let (free_form_count, item_count) = items.fold((0, 0), |(free, total), item| {
            (free + usize::from(item.key == NONAME_KEY), total + 1)
        });

        ReaderStats {
            parsed: self.parsed,
            section_count: self.document.len(),
            item_count,
            free_form_count,
            current_section: self.current_section().map(str::to_string),
        }
    }
}
