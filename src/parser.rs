//! 单遍解析：逐行累积当前节的项，遇到下一个节标题（或文本结束）时再写入文档。

use crate::document::{Document, ItemGroup};
use crate::encoding::Transcoder;
use crate::filter::SectionFilter;
use crate::lexer::{classify, Line, TextLines};
use crate::utils::IniError;
use crate::NONAME_KEY;

/// 解析选项
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// 保存节内不符合 `key=value` 格式的行，键为 `{NONAME}`
    pub store_any_line: bool,
    /// 解析前对整段文本进行转码
    pub transcoder: Option<Transcoder>,
}

/// 解析中的状态
struct ParseState {
    document: Document,
    current_section: String,
    pending: ItemGroup,
    skipping: bool,
    read_sections: Vec<String>,
}

impl ParseState {
    fn new() -> Self {
        Self {
            document: Document::new(),
            current_section: String::new(),
            pending: ItemGroup::new(),
            skipping: false,
            read_sections: Vec::new(),
        }
    }

    /// 把累积的项写入文档
    fn flush(&mut self) -> Result<(), IniError> {
        if self.current_section.is_empty() || self.pending.is_empty() {
            return Ok(());
        }

        let items = std::mem::take(&mut self.pending);
        self.document.insert(self.current_section.clone(), items)?;
        tracing::debug!(section = %self.current_section, "读取节完成");
        self.read_sections.push(self.current_section.clone());
        Ok(())
    }

    fn enter_section(&mut self, name: &str, filter: &SectionFilter) -> Result<(), IniError> {
        self.flush()?;
        self.pending = ItemGroup::new();
        self.current_section = name.to_string();
        self.skipping = filter.should_skip(name);
        if self.skipping {
            tracing::debug!(section = name, "跳过被过滤的节");
        }
        Ok(())
    }
}

/// 把文本解析为文档
///
/// 设置了 `transcoder` 时先对整段文本转码。
/// 同名节出现两次返回 `DuplicateSection`；第一个节标题之前出现键值项返回
/// `ItemOutsideSection`。
pub fn parse_document(
    content: &str,
    options: &ParseOptions,
    filter: &SectionFilter,
) -> Result<Document, IniError> {
    let transcoded;
    let content = match options.transcoder {
        Some(transcode) => {
            transcoded = transcode(content);
            transcoded.as_str()
        }
        None => content,
    };

    let mut state = ParseState::new();

    for (index, raw_line) in TextLines::new(content).enumerate() {
        let Some(line) = classify(&raw_line) else {
            continue;
        };

        match line {
            Line::Item { key, value } => {
                if state.skipping {
                    continue;
                }
                if state.current_section.is_empty() {
                    return Err(IniError::ItemOutsideSection { line: index + 1 });
                }
                state.pending.push(key, value);
            }
            Line::Section(name) => state.enter_section(name, filter)?,
            Line::FreeForm(text) => {
                if options.store_any_line && !state.skipping && !state.current_section.is_empty() {
                    state.pending.push(NONAME_KEY, text);
                }
            }
        }

        if filter.is_satisfied_by(&state.read_sections) {
            tracing::debug!("所有包含的节均已读取，提前结束");
            break;
        }
    }

    state.flush()?;
    Ok(state.document)
}
