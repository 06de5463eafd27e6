// ============================================================================
// Roosevelt Logger - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口定义和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 配置文件加载与日志器构建
//   - ✅ 命令路由分发
//   - ❌ 不应包含配置解析规则
//   - ❌ 不应包含格式化逻辑
//
// ============================================================================

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

use roosevelt_logger::models::config::load_raw_config;
use roosevelt_logger::{ConsoleSink, Logger, TracingSink};

/// Roosevelt Logger - configurable console logging
#[derive(Debug, Parser)]
#[command(name = "roosevelt-logger")]
#[command(about = "Configurable console logger with named methods, prefixes and colors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Logger config file (.json, .toml, .yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output backend
    #[arg(short, long, global = true, value_enum, default_value_t = Backend::Console)]
    pub backend: Backend,

    /// Disable prefixes for every method
    #[arg(long, global = true)]
    pub no_prefix: bool,

    /// Create an extra method from a JSON spec, e.g. '{"name":"success","prefix":"✅"}'
    #[arg(long = "create", global = true, value_name = "JSON")]
    pub create: Vec<String>,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Write to stdout/stderr
    Console,
    /// Forward to tracing events
    Tracing,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a message through a log method
    Log {
        /// Method name (log, info, warn, verbose, error or a custom one)
        method: String,
        /// Message parts; each is parsed as JSON when possible
        messages: Vec<String>,
    },
    /// Print the resolved configuration
    Config,
    /// List available log methods
    Methods,
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let logger = build_logger(&cli)?;

    match cli.command {
        Commands::Log { method, messages } => {
            let args: Vec<Value> = messages.iter().map(|m| parse_message(m)).collect();
            if method == "log" {
                logger.log(&args);
            } else {
                logger.call(&method, &args)?;
            }
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&logger.config().to_value())?);
        }
        Commands::Methods => {
            for name in logger.method_names() {
                println!("{}", name);
            }
        }
    }

    Ok(())
}

/// 按命令行参数构建日志器
fn build_logger(cli: &Cli) -> Result<Logger> {
    let raw = match &cli.config {
        Some(path) => load_raw_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Value::Null,
    };

    let builder = Logger::builder().config(raw);
    let mut logger = match cli.backend {
        Backend::Console => builder.sink(Arc::new(ConsoleSink::new())).build(),
        Backend::Tracing => builder.sink(Arc::new(TracingSink::new())).build(),
    };

    if cli.no_prefix {
        logger.disable_prefix();
    }

    for spec in &cli.create {
        let spec: Value = serde_json::from_str(spec)
            .with_context(|| format!("invalid method spec: {}", spec))?;
        logger.create_log_method(&spec)?;
    }

    Ok(logger)
}

/// JSON 能解析就按 JSON，否则当作字符串
fn parse_message(message: &str) -> Value {
    serde_json::from_str(message).unwrap_or_else(|_| Value::String(message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_message() {
        assert_eq!(parse_message("hello world"), json!("hello world"));
        assert_eq!(parse_message("123"), json!(123));
        assert_eq!(parse_message(r#"{"a":1}"#), json!({ "a": 1 }));
    }

    #[test]
    fn test_cli_parses_log_command() {
        let cli = Cli::parse_from(["roosevelt-logger", "--no-prefix", "log", "warn", "hello"]);
        assert!(cli.no_prefix);
        assert_eq!(cli.backend, Backend::Console);
        match cli.command {
            Commands::Log { method, messages } => {
                assert_eq!(method, "warn");
                assert_eq!(messages, vec!["hello".to_string()]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
