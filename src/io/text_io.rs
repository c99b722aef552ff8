/// 文本文件 IO 实现
///
/// 提供基于文件系统的默认读写实现
use std::path::Path;
use encoding_rs::Encoding;

use super::traits::{TextReader, TextWriter};
use crate::encoding::{decode_text, encode_text, encoding_for_label};
use crate::utils::IniError;

/// 默认的文本读取器（基于 std::fs）
///
/// `encoding` 为 `None` 时自动检测编码
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTextReader {
    pub encoding: Option<&'static Encoding>,
}

impl DefaultTextReader {
    /// 使用指定编码名称创建读取器
    pub fn with_encoding(label: &str) -> Result<Self, IniError> {
        Ok(Self {
            encoding: Some(encoding_for_label(label)?),
        })
    }
}

impl TextReader for DefaultTextReader {
    fn read_text(&self, path: &Path) -> Result<String, IniError> {
        let bytes = std::fs::read(path)?;
        Ok(decode_text(&bytes, self.encoding))
    }
}

/// 默认的文本写入器（基于 std::fs）
///
/// `encoding` 为 `None` 时按 UTF-8 写入
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTextWriter {
    pub encoding: Option<&'static Encoding>,
}

impl DefaultTextWriter {
    /// 使用指定编码名称创建写入器
    pub fn with_encoding(label: &str) -> Result<Self, IniError> {
        Ok(Self {
            encoding: Some(encoding_for_label(label)?),
        })
    }
}

impl TextWriter for DefaultTextWriter {
    fn write_text(&self, path: &Path, text: &str) -> Result<(), IniError> {
        let bytes = encode_text(text, self.encoding)?;

        // 确保父目录存在
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_text_reader() {
        let temp_dir = TempDir::new().unwrap();
        let test_file = temp_dir.path().join("reader.ini");
        std::fs::write(&test_file, "[general]\nname = test\n").unwrap();

        let reader = DefaultTextReader::default();
        let text = reader.read_text(&test_file).unwrap();

        assert_eq!(text, "[general]\nname = test\n");
    }

    #[test]
    fn test_reader_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let reader = DefaultTextReader::default();

        let result = reader.read_text(&temp_dir.path().join("missing.ini"));
        assert!(matches!(result, Err(IniError::Io(_))));
    }

    #[test]
    fn test_default_text_writer() {
        let temp_dir = TempDir::new().unwrap();
        let test_file = temp_dir.path().join("writer.ini");

        let writer = DefaultTextWriter::default();
        writer.write_text(&test_file, "[a]\nx = 1\n\n").unwrap();

        assert_eq!(std::fs::read_to_string(&test_file).unwrap(), "[a]\nx = 1\n\n");
    }

    #[test]
    fn test_writer_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let test_file = temp_dir.path().join("nested").join("subdir").join("out.ini");

        let writer = DefaultTextWriter::default();
        writer.write_text(&test_file, "[a]\n").unwrap();

        assert!(test_file.exists());
    }

    #[test]
    fn test_gbk_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let test_file = temp_dir.path().join("gbk.ini");

        let writer = DefaultTextWriter::with_encoding("gbk").unwrap();
        writer.write_text(&test_file, "[物品]\n名称 = 铁剑\n").unwrap();

        let reader = DefaultTextReader::with_encoding("gbk").unwrap();
        assert_eq!(reader.read_text(&test_file).unwrap(), "[物品]\n名称 = 铁剑\n");
    }
}
