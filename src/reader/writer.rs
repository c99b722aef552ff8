use super::IniReader;
use crate::io::{DefaultTextWriter, TextWriter};
use crate::utils::IniError;
use crate::NONAME_KEY;
use std::path::Path;

impl IniReader {
    /// 导出为 INI 文本
    ///
    /// 注释、空行位置不会保留；`{NONAME}` 项只输出值。
    /// 不做转义：以 `;` 或 `#` 开头的键会被写成注释，重新解析时丢失。
    pub fn to_text(&self) -> Result<String, IniError> {
        if !self.parsed {
            return Err(IniError::ParseNotYetRun);
        }

        let mut content = String::new();
        for section in &self.document {
            content.push('[');
            content.push_str(&section.name);
            content.push_str("]\n");

            for item in &section.items {
                if item.key != NONAME_KEY {
                    content.push_str(&item.key);
                    content.push_str(" = ");
                }
                content.push_str(&item.value);
                content.push('\n');
            }
            content.push('\n');
        }

        Ok(content)
    }

    /// 导出为 JSON
    pub fn to_json(&self) -> Result<String, IniError> {
        if !self.parsed {
            return Err(IniError::ParseNotYetRun);
        }
        Ok(serde_json::to_string_pretty(&self.document)?)
    }

    /// 写入文件（UTF-8）
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), IniError> {
        self.write_with(&DefaultTextWriter::default(), path.as_ref())
    }

    /// 使用自定义 Writer 写入文件
    pub fn write_with(&self, writer: &dyn TextWriter, path: &Path) -> Result<(), IniError> {
        let content = self.to_text()?;
        writer.write_text(path, &content)
    }
}
