// ============================================================================
// Roosevelt Logger - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 默认值和环境变量名常量
// 边界:
//   - ✅ 内置方法名定义
//   - ✅ 默认前缀与颜色定义
//   - ✅ 环境变量名定义
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含解析逻辑
//
// ============================================================================

/// 覆盖 enablePrefix 默认值的环境变量
pub const ENABLE_PREFIX_ENV: &str = "ROOSEVELT_LOGGER_ENABLE_PREFIX";

/// 当前运行模式所在的环境变量，disable 列表与其比较
pub const MODE_ENV: &str = "NODE_ENV";

/// 内置日志方法名
pub mod methods {
    pub const INFO: &str = "info";
    pub const WARN: &str = "warn";
    pub const VERBOSE: &str = "verbose";
    pub const ERROR: &str = "error";

    /// 按固定顺序列出全部内置方法
    pub const BUILT_IN: [&str; 4] = [INFO, WARN, VERBOSE, ERROR];
}

/// 默认前缀
pub mod prefixes {
    /// 警告前缀
    pub const WARN: &str = "⚠️ ";
    /// 错误前缀
    pub const ERROR: &str = "❌";
}

/// 默认颜色名
pub mod colors {
    pub const WARN: &str = "yellow";
    pub const ERROR: &str = "red";
}

/// 配置中的全局字段名
pub mod keys {
    pub const ENABLE_PREFIX: &str = "enablePrefix";
    pub const DISABLE: &str = "disable";
    pub const PARAMS: &str = "params";
    pub const METHODS: &str = "methods";
}

/// 前缀与正文之间的分隔
pub const PREFIX_SEPARATOR: &str = "  ";
