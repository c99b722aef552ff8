use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use ini_reader::{
    create_backup, is_supported_file, DefaultTextReader, DefaultTextWriter, IniReader,
    ParseOptions, TextWriter, SUPPORTED_EXTENSIONS,
};

#[derive(Parser)]
#[command(name = "ini_reader")]
#[command(about = "解析、查询和编辑INI配置文件")]
#[command(version)]
struct Cli {
    /// 输入INI文件路径
    #[arg(short, long)]
    input: PathBuf,

    /// 输出文件路径（默认输出到标准输出；有修改时默认写回输入文件，JSON 除外）
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 只读取指定的节(可多次使用)
    #[arg(long)]
    include: Vec<String>,

    /// 跳过指定的节(可多次使用)
    #[arg(long)]
    exclude: Vec<String>,

    /// 保存节内不符合 key=value 格式的行
    #[arg(long)]
    store_any_line: bool,

    /// 文件编码(如 gbk、shift_jis)，默认自动检测，写入时使用相同编码
    #[arg(long)]
    encoding: Option<String>,

    /// 查询一项：节名 键名
    #[arg(long, num_args = 2, value_names = ["SECTION", "KEY"])]
    get: Option<Vec<String>>,

    /// 添加一项：节名 键名 值
    #[arg(long, num_args = 3, value_names = ["SECTION", "KEY", "VALUE"])]
    set: Option<Vec<String>>,

    /// 删除一个键的所有项：节名 键名
    #[arg(long, num_args = 2, value_names = ["SECTION", "KEY"])]
    erase: Option<Vec<String>>,

    /// 以JSON格式输出
    #[arg(long)]
    json: bool,

    /// 显示统计信息
    #[arg(long)]
    stats: bool,

    /// 覆盖已有文件前创建备份
    #[arg(long)]
    backup: bool,

    /// 静默模式(仅输出错误)
    #[arg(long)]
    quiet: bool,

    /// 输出调试日志
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    validate_input(&cli.input)?;

    let mut reader = load_reader(&cli)?;

    if cli.stats {
        println!("{}", reader.get_stats());
        return Ok(());
    }

    if let Some(args) = &cli.get {
        return handle_get(&reader, &args[0], &args[1]);
    }

    let modified = apply_modifications(&cli, &mut reader)?;

    let content = if cli.json {
        reader.to_json()?
    } else {
        reader.to_text()?
    };

    match output_path(&cli, modified) {
        Some(path) => write_output(&cli, &path, &content)?,
        None => print!("{}", content),
    }

    Ok(())
}

/// 初始化日志（输出到标准错误）
fn init_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("初始化日志失败")?;

    Ok(())
}

/// 验证输入文件
fn validate_input(input: &Path) -> Result<()> {
    if !input.exists() {
        bail!("输入文件不存在: {:?}", input);
    }

    if !is_supported_file(input) {
        warn!("文件扩展名不在 {:?} 中，仍按INI格式解析", SUPPORTED_EXTENSIONS);
    }

    Ok(())
}

/// 按命令行参数创建读取器并解析输入文件
fn load_reader(cli: &Cli) -> Result<IniReader> {
    let mut reader = IniReader::with_options(ParseOptions {
        store_any_line: cli.store_any_line,
        ..Default::default()
    });

    for section in &cli.include {
        reader.include_section(section.as_str());
    }
    for section in &cli.exclude {
        reader.exclude_section(section.as_str());
    }

    let text_reader = match &cli.encoding {
        Some(label) => DefaultTextReader::with_encoding(label)?,
        None => DefaultTextReader::default(),
    };

    debug!("正在解析: {:?}", cli.input);
    reader
        .parse_with(&text_reader, &cli.input)
        .with_context(|| format!("解析文件失败: {:?}", cli.input))?;
    info!("读取到 {} 个节", reader.section_count());

    Ok(reader)
}

/// 处理查询，输出所有键完全匹配的值
fn handle_get(reader: &IniReader, section: &str, key: &str) -> Result<()> {
    let items = reader
        .get_items(section)
        .with_context(|| format!("查询失败: [{}] {}", section, key))?;

    let values: Vec<&str> = items
        .iter()
        .filter(|item| item.key == key)
        .map(|item| item.value.as_str())
        .collect();

    if values.is_empty() {
        bail!("项不存在: [{}] {}", section, key);
    }

    for value in values {
        println!("{}", value);
    }
    Ok(())
}

/// 应用 --set / --erase，返回是否有修改
fn apply_modifications(cli: &Cli, reader: &mut IniReader) -> Result<bool> {
    let mut modified = false;

    if let Some(args) = &cli.erase {
        let removed = reader
            .erase(&args[0], &args[1])
            .with_context(|| format!("删除失败: [{}] {}", args[0], args[1]))?;
        info!("删除了 {} 项", removed);
        modified = true;
    }

    if let Some(args) = &cli.set {
        reader.set(&args[0], args[1].as_str(), args[2].as_str());
        info!("已添加: [{}] {} = {}", args[0], args[1], args[2]);
        modified = true;
    }

    Ok(modified)
}

/// 确定输出路径：显式指定的路径优先，有修改时写回输入文件
///
/// JSON 输出永远不会写回输入文件，未指定 `--output` 时输出到标准输出。
fn output_path(cli: &Cli, modified: bool) -> Option<PathBuf> {
    cli.output
        .clone()
        .or_else(|| (modified && !cli.json).then(|| cli.input.clone()))
}

/// 写入输出文件
fn write_output(cli: &Cli, path: &Path, content: &str) -> Result<()> {
    if cli.backup && path.exists() {
        let backup_path = create_backup(path)?;
        info!("已创建备份文件: {:?}", backup_path);
    }

    let writer = match (&cli.encoding, cli.json) {
        (Some(label), false) => DefaultTextWriter::with_encoding(label)?,
        _ => DefaultTextWriter::default(),
    };

    writer
        .write_text(path, content)
        .with_context(|| format!("写入文件失败: {:?}", path))?;

    info!("结果已写入: {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("ini_reader").chain(args.iter().copied()))
    }

    #[test]
    fn test_output_path_writes_back_modified_text() {
        let cli = parse_args(&["--input", "a.ini", "--set", "s", "k", "v"]);
        assert_eq!(output_path(&cli, true), Some(PathBuf::from("a.ini")));
        assert_eq!(output_path(&cli, false), None);
    }

    #[test]
    fn test_output_path_json_never_overwrites_input() {
        let cli = parse_args(&["--input", "a.ini", "--set", "s", "k", "v", "--json"]);
        assert_eq!(output_path(&cli, true), None);

        let cli = parse_args(&["--input", "a.ini", "--erase", "s", "k", "--json", "--output", "a.json"]);
        assert_eq!(output_path(&cli, true), Some(PathBuf::from("a.json")));
    }
}
