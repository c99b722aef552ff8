/// IO 抽象层模块
///
/// 该模块提供文本文件读写的抽象接口，解析核心只依赖这两个 trait。
/// 支持依赖注入、测试 mock 和替换 IO 实现（如内存 IO）。
///
/// # 架构设计
///
/// - **traits**: 定义 TextReader/TextWriter trait 接口
/// - **text_io**: 基于文件系统的默认实现（支持指定编码）
///
/// # 使用示例
///
/// ```rust,ignore
/// use ini_reader::io::{DefaultTextReader, TextReader};
///
/// let reader = DefaultTextReader::default();
/// let text = reader.read_text(Path::new("settings.ini"))?;
/// ```
pub mod traits;
pub mod text_io;

// === 导出 trait 定义 ===
pub use traits::{TextReader, TextWriter};

// === 导出默认实现 ===
pub use text_io::{DefaultTextReader, DefaultTextWriter};
