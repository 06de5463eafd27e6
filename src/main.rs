// ============================================================================
// Roosevelt Logger - 命令行入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 初始化 tracing 并运行 CLI
// 边界:
//   - ✅ tracing 订阅器初始化
//   - ✅ CLI 入口调用
//   - ❌ 不应包含命令实现
//
// ============================================================================

mod cli;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // RUST_LOG 未设置时只输出 info 及以上
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    cli::run_cli()
}
