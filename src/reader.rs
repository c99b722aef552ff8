use crate::document::Document;
use crate::filter::SectionFilter;
use crate::io::{DefaultTextReader, TextReader};
use crate::parser::{parse_document, ParseOptions};
use crate::utils::IniError;
use std::path::Path;

mod accessors;
mod current;
mod cursor;
mod mutators;
mod stats;
mod writer;


pub use cursor::SectionCursor;
pub use stats::ReaderStats;

/// INI 读取器
///
/// 把 INI 文本解析为内存中的节/项结构，支持查询、修改和导出。
/// 内部持有"当前节"游标和最近访问节的缓存，只能在单线程中使用。
///
/// # 示例
/// ```rust,ignore
/// use ini_reader::IniReader;
///
/// let mut ini = IniReader::new();
/// ini.exclude_section("secret");
/// ini.parse("[general]\nname = test\n")?;
///
/// assert_eq!(ini.get("general", "name"), Some("test"));
///
/// ini.enter_section("general")?;
/// ini.current_set("enabled", "true")?;
/// println!("{}", ini.to_text()?);
/// ```
#[derive(Debug, Default)]
pub struct IniReader {
    /// 解析选项
    pub options: ParseOptions,
    filter: SectionFilter,
    document: Document,
    cursor: SectionCursor,
    parsed: bool,
}

impl IniReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定解析选项创建读取器
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// 创建读取器并立即解析文件
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, IniError> {
        let mut reader = Self::new();
        reader.parse_file(path)?;
        Ok(reader)
    }

    /// 解析时排除指定名称的节
    pub fn exclude_section(&mut self, section: impl Into<String>) {
        self.filter.exclude(section);
    }

    /// 解析时只保留指定名称的节
    pub fn include_section(&mut self, section: impl Into<String>) {
        self.filter.include(section);
    }

    pub fn filter(&self) -> &SectionFilter {
        &self.filter
    }

    /// 解析 INI 文本
    ///
    /// 先清空已有数据。失败时文档保持为空且处于未解析状态。
    pub fn parse(&mut self, content: &str) -> Result<(), IniError> {
        self.erase_all();

        match parse_document(content, &self.options, &self.filter) {
            Ok(document) => {
                tracing::debug!(sections = document.len(), "解析完成");
                self.document = document;
                self.parsed = true;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "解析失败");
                Err(e)
            }
        }
    }

    /// 解析 INI 文件（自动检测编码）
    pub fn parse_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), IniError> {
        self.parse_with(&DefaultTextReader::default(), path.as_ref())
    }

    /// 使用自定义 Reader 读取并解析文件
    pub fn parse_with(&mut self, reader: &dyn TextReader, path: &Path) -> Result<(), IniError> {
        let content = reader.read_text(path)?;
        self.parse(&content)
    }

    /// 是否已解析（或已通过 `set` 写入过数据）
    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// 检查节是否存在
    pub fn exists(&self, section: &str) -> bool {
        self.document.contains(section)
    }

    pub fn section_count(&self) -> usize {
        self.document.len()
    }

    /// 所有节名
    pub fn sections(&self) -> Vec<&str> {
        self.document.names().collect()
    }

    /// 清空所有数据并重置解析状态
    pub fn erase_all(&mut self) {
        self.document.clear();
        self.cursor.invalidate();
        self.parsed = false;
    }

    /// 设置当前节（不检查是否存在）
    pub fn set_current_section(&mut self, section: impl Into<String>) {
        self.cursor.set_current(section.into());
    }

    /// 进入已存在的节：设置当前节并缓存
    pub fn enter_section(&mut self, section: &str) -> Result<(), IniError> {
        let pos = self
            .document
            .position(section)
            .filter(|_| !section.is_empty())
            .ok_or_else(|| IniError::SectionNotFound(section.to_string()))?;
        self.cursor.set_current(section.to_string());
        self.cursor.remember(pos);
        Ok(())
    }

    pub fn current_section(&self) -> Option<&str> {
        self.cursor.current()
    }
}
