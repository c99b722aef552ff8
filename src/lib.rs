pub mod document;
pub mod encoding;
pub mod filter;
pub mod io;
pub mod lexer;
pub mod parser;
pub mod reader;
pub mod utils;

// 重新导出主要结构
pub use document::{Document, Item, ItemGroup, Section};
pub use encoding::{strip_bom, Transcoder};
pub use filter::SectionFilter;
pub use io::{DefaultTextReader, DefaultTextWriter, TextReader, TextWriter};
pub use parser::{parse_document, ParseOptions};
pub use reader::{IniReader, ReaderStats};
pub use utils::{create_backup, IniError};

// 常量定义
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SUPPORTED_EXTENSIONS: &[&str] = &["ini", "conf", "cfg"];

/// 超过该长度（字符数）的行会被丢弃
pub const MAX_LINE_LENGTH: usize = 4096;

/// 自由行使用的保留键
pub const NONAME_KEY: &str = "{NONAME}";

/// 检查文件扩展名是否受支持
pub fn is_supported_file<P: AsRef<std::path::Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}
