// ============================================================================
// Roosevelt Logger - 环境信息提供者
// ============================================================================
//
// 文件: src/utils/env.rs
// 职责: 环境变量与平台信息的抽象
// 边界:
//   - ✅ 环境变量读取接口
//   - ✅ 平台判断接口
//   - ✅ 测试用固定环境
//   - ❌ 不应包含配置解析逻辑
//   - ❌ 不应写入环境变量
//
// ============================================================================

use std::collections::HashMap;

use super::constants::MODE_ENV;

/// 配置解析时读取的环境信息
pub trait Environment: Send + Sync {
    /// 读取环境变量
    fn var(&self, name: &str) -> Option<String>;

    /// 是否运行在 Windows 上
    fn is_windows(&self) -> bool;

    /// 当前运行模式（`NODE_ENV`）
    fn mode(&self) -> Option<String> {
        self.var(MODE_ENV)
    }
}

/// 读取真实进程环境
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn is_windows(&self) -> bool {
        cfg!(windows)
    }
}

/// 固定的环境快照
#[derive(Debug, Clone, Default)]
pub struct FixedEnvironment {
    vars: HashMap<String, String>,
    windows: bool,
}

impl FixedEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置一个环境变量
    pub fn with_var<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// 设置运行模式
    pub fn with_mode<V: Into<String>>(self, mode: V) -> Self {
        self.with_var(MODE_ENV, mode)
    }

    /// 模拟 Windows 平台
    pub fn windows(mut self, windows: bool) -> Self {
        self.windows = windows;
        self
    }
}

impl Environment for FixedEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn is_windows(&self) -> bool {
        self.windows
    }
}
