// ============================================================================
// Roosevelt Logger - 错误类型
// ============================================================================
//
// 文件: src/error.rs
// 职责: 库级错误类型定义
// 边界:
//   - ✅ 错误枚举定义
//   - ✅ 错误信息文本
//   - ❌ 不应包含错误上报逻辑
//   - ❌ 不应包含配置回退逻辑
//
// ============================================================================

use thiserror::Error;

/// 日志库错误
///
/// 日志调用本身从不失败；这些错误只在动态创建方法或按名称调用时返回，
/// 调用方可以忽略它们继续执行。
#[derive(Debug, Error)]
pub enum LoggerError {
    /// `create_log_method` 的名称缺失或不是字符串
    #[error("method name invalid, must be type string")]
    InvalidMethodName,

    /// 按名称调用了不存在的日志方法
    #[error("unknown log method: {0}")]
    UnknownMethod(String),

    /// 配置文件读取失败
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// 配置文件解析失败
    #[error("failed to parse config: {0}")]
    Config(String),
}
