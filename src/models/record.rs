// ============================================================================
// Roosevelt Logger - 日志记录模型
// ============================================================================
//
// 文件: src/models/record.rs
// 职责: 交给输出端的日志记录定义
// 边界:
//   - ✅ 严重级别与输出流映射
//   - ✅ 日志记录结构
//   - ✅ 着色渲染
//   - ❌ 不应包含参数格式化逻辑
//   - ❌ 不应包含输出实现
//
// ============================================================================

use std::fmt;

use crate::utils::colors::Colors;

/// 严重级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

/// 输出流
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Severity {
    /// info 写标准输出，warn/error 写标准错误
    pub fn stream(&self) -> Stream {
        match self {
            Severity::Info => Stream::Stdout,
            Severity::Warn | Severity::Error => Stream::Stderr,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warn => write!(f, "warn"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// 一条待输出的日志
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub severity: Severity,
    /// 格式化后的纯文本
    pub text: String,
    /// 颜色名，`None` 时输出纯文本
    pub color: Option<String>,
}

impl Record {
    pub fn new(severity: Severity, text: String, color: Option<String>) -> Self {
        Self {
            severity,
            text,
            color,
        }
    }

    pub fn stream(&self) -> Stream {
        self.severity.stream()
    }

    /// 最终输出的字符串
    pub fn render(&self, colorize: bool) -> String {
        match (&self.color, colorize) {
            (Some(color), true) => Colors::paint(&self.text, color),
            _ => self.text.clone(),
        }
    }
}
