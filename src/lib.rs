pub mod config;
pub mod dom;
pub mod error;
pub mod nav_tree;
pub mod page;
pub mod panel;

#[cfg(feature = "wasm")]
pub mod wasm_entry;

use std::env;

pub use config::PanelConfig;
pub use dom::{ElementLookup, MemoryDocument, MemoryElement, StyleTarget};
pub use error::{PanelError, Result};
pub use nav_tree::{NavNode, NavTree};
pub use page::{PageOptions, render_page};
pub use panel::{PanelState, SidePanel};

// ========================================
// コマンドライン引数構造体
// ========================================

/// コマンドライン引数の設定
#[derive(Debug)]
pub struct CliArgs {
    pub out_dir: String,
    pub config_path: Option<String>,
    pub title: Option<String>,
    pub module_path: Option<String>,
    /// サイドバーに並べるファイル
    pub in_files: Vec<String>,
    pub root_dir: String,
    pub quiet: bool, // panic以外のログを抑制
    pub log_level: LogLevel,
    pub show_help: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLevel {
    Off,   // ログを一切表示しない（panicは除く）
    Error, // エラーレベルのみ
    Warn,  // 警告レベル以上
    Info,  // 情報レベル以上
    Debug, // デバッグレベル以上
    Trace, // 全てのログ
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            out_dir: "pkg".to_string(),
            config_path: None,
            title: None,
            module_path: None,
            in_files: Vec::new(),
            root_dir: ".".to_string(),
            quiet: false,
            log_level: LogLevel::Info,
            show_help: false,
        }
    }
}

pub fn parse_args() -> CliArgs {
    parse_args_from(env::args().skip(1))
}

/// 引数リストから解析（先頭のプログラム名は含めない）
pub fn parse_args_from<I, S>(args: I) -> CliArgs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cli_args = CliArgs::default();

    for arg in args {
        let arg = arg.as_ref();
        match arg {
            "--quiet" | "-q" | "--silent" => {
                cli_args.quiet = true;
                cli_args.log_level = LogLevel::Off;
            }
            "--log-level=off" => cli_args.log_level = LogLevel::Off,
            "--log-level=error" => cli_args.log_level = LogLevel::Error,
            "--log-level=warn" => cli_args.log_level = LogLevel::Warn,
            "--log-level=info" => cli_args.log_level = LogLevel::Info,
            "--log-level=debug" => cli_args.log_level = LogLevel::Debug,
            "--log-level=trace" => cli_args.log_level = LogLevel::Trace,
            "--help" | "-h" => cli_args.show_help = true,
            _ => {
                if let Some(dir) = arg.strip_prefix("--out-dir=") {
                    cli_args.out_dir = dir.to_string();
                } else if let Some(path) = arg.strip_prefix("--config=") {
                    cli_args.config_path = Some(path.to_string());
                } else if let Some(title) = arg.strip_prefix("--title=") {
                    cli_args.title = Some(title.to_string());
                } else if let Some(module) = arg.strip_prefix("--module=") {
                    cli_args.module_path = Some(module.to_string());
                } else if let Some(file) = arg.strip_prefix("--in-file=") {
                    cli_args.in_files.push(file.to_string());
                } else if let Some(dir) = arg.strip_prefix("--root-dir=") {
                    cli_args.root_dir = dir.to_string();
                } else {
                    log::warn!("Unknown argument ignored: {}", arg);
                }
            }
        }
    }
    cli_args
}

pub fn help_text() -> &'static str {
    "sidenav page generator

USAGE:
    sidenav [OPTIONS]

OPTIONS:
    --out-dir=DIR            Directory to write index.html into (default: pkg)
    --config=FILE            Panel config JSON (ids, widths, start_open)
    --title=TEXT             Page title
    --in-file=PATH           Add a file to the sidebar tree (repeatable)
    --root-dir=DIR           Root the sidebar tree is relative to (default: .)
    --module=PATH            JS module emitted by wasm-pack (default: ./sidenav.js)
    --quiet, -q              Suppress all logs except panics
    --silent                 Same as --quiet
    --log-level=LEVEL        Set log level (off/error/warn/info/debug/trace)
    --help, -h               Show this help"
}

/// ログレベルを初期化する関数
pub fn init_logger(log_level: &LogLevel) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::sync::Once;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let level = match log_level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        };

        let mut builder = Builder::from_default_env();

        if matches!(log_level, LogLevel::Off) {
            // quietモードの場合、何も出力しない（panicは別途処理される）
            builder
                .filter_level(LevelFilter::Off)
                .format(|_, _| Ok(()))
                .try_init()
                .ok();
        } else {
            builder
                .filter_level(level)
                .format_timestamp_secs()
                .try_init()
                .ok(); // エラーを無視
        }
    });
}

/// CLI引数からページ設定を組み立てる
pub fn page_options_from_args(cli_args: &CliArgs) -> Result<PageOptions> {
    let panel = match &cli_args.config_path {
        Some(path) => PanelConfig::from_json_file(path)?,
        None => PanelConfig::default(),
    };

    let nav = if cli_args.in_files.is_empty() {
        None
    } else {
        Some(NavTree::from_paths(&cli_args.in_files, &cli_args.root_dir)?)
    };

    let mut options = PageOptions {
        panel,
        nav,
        ..Default::default()
    };
    if let Some(title) = &cli_args.title {
        options.title = title.clone();
    }
    if let Some(module) = &cli_args.module_path {
        options.module_path = module.clone();
    }
    Ok(options)
}

/// index.htmlを書き出し、そのパスを返す
pub fn write_page(cli_args: &CliArgs) -> Result<std::path::PathBuf> {
    let options = page_options_from_args(cli_args)?;
    write_page_to(&options, &cli_args.out_dir)
}

pub fn write_page_to<P: AsRef<std::path::Path>>(
    options: &PageOptions,
    out_dir: P,
) -> Result<std::path::PathBuf> {
    let out_dir = out_dir.as_ref();
    std::fs::create_dir_all(out_dir)?;

    let path = out_dir.join("index.html");
    std::fs::write(&path, render_page(options))?;
    log::info!("Wrote page shell to {}", path.display());
    Ok(path)
}
