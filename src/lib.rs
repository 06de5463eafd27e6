// ============================================================================
// Roosevelt Logger - 库入口
// ============================================================================
//
// 文件: src/lib.rs
// 职责: 模块声明和公共 API 导出
// 边界:
//   - ✅ 子模块声明
//   - ✅ 常用类型重新导出
//   - ✅ 参数构造宏
//   - ❌ 不应包含配置解析逻辑
//   - ❌ 不应包含格式化逻辑
//   - ❌ 不应包含输出实现
//
// ============================================================================

pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use crate::core::logger::{LogMethod, Logger, LoggerBuilder};
pub use crate::core::sink::{ConsoleSink, MemorySink, Sink, TracingSink};
pub use crate::error::LoggerError;
pub use crate::models::config::{GlobalConfig, MethodConfig, MethodType, ResolvedConfig};
pub use crate::models::record::{Record, Severity, Stream};
pub use crate::utils::env::{Environment, FixedEnvironment, SystemEnvironment};

/// 构造日志参数列表，每个元素使用 `serde_json::json!` 语法
///
/// ```
/// use roosevelt_logger::log_args;
///
/// let args = log_args!["hello", { "a": 1 }, [1, 2]];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! log_args {
    () => {
        ::std::vec::Vec::<::serde_json::Value>::new()
    };
    ($($arg:tt),+ $(,)?) => {
        ::std::vec![$(::serde_json::json!($arg)),+]
    };
}
