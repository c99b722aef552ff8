/// IO 抽象层 - trait 定义
///
/// 该模块定义了文本读写的抽象接口，支持依赖注入和测试 mock。

use std::path::Path;
use crate::utils::IniError;

/// 文本读取 trait
///
/// # 职责
/// - 从存储中读取整个文件并转为文本
/// - 不负责解析，仅负责 IO 和解码
pub trait TextReader {
    /// 读取文件的全部文本
    ///
    /// # 参数
    /// * `path` - 文件路径
    fn read_text(&self, path: &Path) -> Result<String, IniError>;
}

/// 文本写入 trait
///
/// # 职责
/// - 将序列化后的文本写入存储
/// - 不负责序列化，仅负责 IO 和编码
pub trait TextWriter {
    /// 写入文本
    ///
    /// # 参数
    /// * `path` - 目标文件路径
    /// * `text` - 要写入的文本
    fn write_text(&self, path: &Path, text: &str) -> Result<(), IniError>;
}
