// ============================================================================
// Roosevelt Logger - Core 核心模块
// ============================================================================
//
// 文件: src/core/mod.rs
// 职责: 核心逻辑模块入口和导出
// 边界:
//   - ✅ 核心子模块导出
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体实现
//   - ❌ 不应包含 CLI 相关逻辑
//
// ============================================================================

pub mod formatter;
pub mod inspect;
pub mod logger;
pub mod resolver;
pub mod sink;

// 重新导出常用类型
pub use formatter::format_args;
pub use inspect::inspect;
pub use logger::{LogMethod, Logger, LoggerBuilder};
pub use resolver::ConfigResolver;
pub use sink::{ConsoleSink, MemorySink, Sink, TracingSink};
