use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

use crate::utils::IniError;

/// 文本转码函数（解析前对整段文本调用）
pub type Transcoder = fn(&str) -> String;

/// 根据名称查找编码（如 "gbk"、"shift_jis"、"utf-8"）
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding, IniError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| IniError::Encoding(format!("未知的编码: {}", label)))
}

/// 解码字节数据为 UTF-8 文本
///
/// 指定了编码时只使用该编码；否则先尝试 UTF-8，不合法时按 windows-1252 解码
/// （windows-1252 能解码任意字节）。开头的 BOM 会被去掉。
pub fn decode_text(data: &[u8], encoding: Option<&'static Encoding>) -> String {
    if let Some(encoding) = encoding {
        let (decoded, _, _) = encoding.decode(data);
        return decoded.into_owned();
    }

    let (decoded, _, had_errors) = UTF_8.decode(data);
    if !had_errors {
        return decoded.into_owned();
    }

    let (decoded, _, _) = WINDOWS_1252.decode(data);
    decoded.into_owned()
}

/// 把文本编码为目标编码的字节
pub fn encode_text(text: &str, encoding: Option<&'static Encoding>) -> Result<Vec<u8>, IniError> {
    let Some(encoding) = encoding else {
        return Ok(text.as_bytes().to_vec());
    };

    let (encoded, used, had_errors) = encoding.encode(text);
    if had_errors {
        return Err(IniError::Encoding(format!(
            "文本包含 {} 无法表示的字符",
            used.name()
        )));
    }
    Ok(encoded.into_owned())
}

/// 去掉开头的 BOM，可作为 `ParseOptions::transcoder` 使用
pub fn strip_bom(text: &str) -> String {
    text.strip_prefix('\u{feff}').unwrap_or(text).to_string()
}
