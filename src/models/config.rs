// ============================================================================
// Roosevelt Logger - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 已解析配置的数据结构定义
// 边界:
//   - ✅ 方法配置与全局配置结构定义
//   - ✅ 按类型的默认值
//   - ✅ 内置方法默认配置
//   - ✅ 配置序列化（回写为原始配置形状）
//   - ✅ 配置文件读取
//   - ❌ 不应包含原始配置解析逻辑
//   - ❌ 不应包含日志格式化逻辑
//
// ============================================================================

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::error::LoggerError;
use crate::models::record::Severity;
use crate::utils::constants::{colors, methods, prefixes};

/// 日志方法类型，决定路由到的严重级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodType {
    Info,
    Warn,
    Error,
}

impl MethodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MethodType::Info => "info",
            MethodType::Warn => "warn",
            MethodType::Error => "error",
        }
    }

    /// 从字符串解析方法类型，只接受小写的 info/warn/error
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "info" => Some(MethodType::Info),
            "warn" => Some(MethodType::Warn),
            "error" => Some(MethodType::Error),
            _ => None,
        }
    }

    /// 该类型的默认前缀
    pub fn default_prefix(&self) -> Option<String> {
        match self {
            MethodType::Warn => Some(prefixes::WARN.to_string()),
            MethodType::Error => Some(prefixes::ERROR.to_string()),
            MethodType::Info => None,
        }
    }

    /// 该类型的默认颜色
    pub fn default_color(&self) -> Option<String> {
        match self {
            MethodType::Warn => Some(colors::WARN.to_string()),
            MethodType::Error => Some(colors::ERROR.to_string()),
            MethodType::Info => None,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            MethodType::Info => Severity::Info,
            MethodType::Warn => Severity::Warn,
            MethodType::Error => Severity::Error,
        }
    }
}

impl Default for MethodType {
    fn default() -> Self {
        MethodType::Info
    }
}

impl fmt::Display for MethodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 单个日志方法的完整配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodConfig {
    #[serde(rename = "type")]
    pub method_type: MethodType,
    pub enable: bool,
    /// `None` 表示不加前缀
    #[serde(serialize_with = "string_or_false")]
    pub prefix: Option<String>,
    /// `None` 表示不着色
    #[serde(serialize_with = "string_or_false")]
    pub color: Option<String>,
}

impl MethodConfig {
    /// 某个类型的默认配置
    pub fn for_type(method_type: MethodType) -> Self {
        Self {
            method_type,
            enable: true,
            prefix: method_type.default_prefix(),
            color: method_type.default_color(),
        }
    }

    /// 内置方法的默认配置，非内置名称返回 `None`
    pub fn built_in(name: &str) -> Option<Self> {
        match name {
            methods::INFO => Some(Self::for_type(MethodType::Info)),
            methods::WARN => Some(Self::for_type(MethodType::Warn)),
            methods::VERBOSE => Some(Self {
                enable: false,
                ..Self::for_type(MethodType::Info)
            }),
            methods::ERROR => Some(Self::for_type(MethodType::Error)),
            _ => None,
        }
    }

    /// 前缀是否有效（非空）
    pub fn active_prefix(&self) -> Option<&str> {
        self.prefix.as_deref().filter(|p| !p.is_empty())
    }
}

impl Default for MethodConfig {
    fn default() -> Self {
        Self::for_type(MethodType::default())
    }
}

/// 全局配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalConfig {
    /// 总开关，为 false 时所有方法都不输出前缀
    pub enable_prefix: bool,
    /// 模式名或环境变量名，任一匹配即静默全部输出
    pub disable: Vec<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            enable_prefix: true,
            disable: Vec::new(),
        }
    }
}

/// 完整解析后的配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    #[serde(rename = "params")]
    pub global: GlobalConfig,
    pub methods: BTreeMap<String, MethodConfig>,
}

impl ResolvedConfig {
    pub fn method(&self, name: &str) -> Option<&MethodConfig> {
        self.methods.get(name)
    }

    /// 回写为嵌套形状的原始配置，可以再次交给解析器
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let methods = methods::BUILT_IN
            .iter()
            .filter_map(|name| MethodConfig::built_in(name).map(|c| (name.to_string(), c)))
            .collect();
        Self {
            global: GlobalConfig::default(),
            methods,
        }
    }
}

fn string_or_false<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(s) => serializer.serialize_str(s),
        None => serializer.serialize_bool(false),
    }
}

/// 读取配置文件为原始配置值，按扩展名选择 JSON、TOML 或 YAML
pub fn load_raw_config(path: &Path) -> Result<Value, LoggerError> {
    let content = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "toml" => toml::from_str::<Value>(&content).map_err(|e| LoggerError::Config(e.to_string())),
        "yaml" | "yml" => {
            serde_yaml::from_str::<Value>(&content).map_err(|e| LoggerError::Config(e.to_string()))
        }
        _ => serde_json::from_str::<Value>(&content).map_err(|e| LoggerError::Config(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_built_in_defaults() {
        let warn = MethodConfig::built_in("warn").unwrap();
        assert_eq!(warn.method_type, MethodType::Warn);
        assert_eq!(warn.prefix.as_deref(), Some("⚠️ "));
        assert_eq!(warn.color.as_deref(), Some("yellow"));

        let verbose = MethodConfig::built_in("verbose").unwrap();
        assert!(!verbose.enable);
        assert_eq!(verbose.prefix, None);

        assert!(MethodConfig::built_in("custom").is_none());
    }

    #[test]
    fn test_default_config_has_built_ins() {
        let config = ResolvedConfig::default();
        for name in methods::BUILT_IN {
            assert!(config.method(name).is_some(), "missing {name}");
        }
        assert!(config.global.enable_prefix);
    }

    #[test]
    fn test_to_value_shape() {
        let value = ResolvedConfig::default().to_value();
        assert_eq!(value["params"]["enablePrefix"], json!(true));
        assert_eq!(value["params"]["disable"], json!([]));
        assert_eq!(
            value["methods"]["error"],
            json!({ "type": "error", "enable": true, "prefix": "❌", "color": "red" })
        );
        assert_eq!(value["methods"]["info"]["prefix"], json!(false));
    }

    #[test]
    fn test_load_toml_config() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "enablePrefix = false\n\n[custom]\ntype = \"warn\"").unwrap();

        let value = load_raw_config(file.path()).unwrap();
        assert_eq!(value["enablePrefix"], json!(false));
        assert_eq!(value["custom"]["type"], json!("warn"));
    }

    #[test]
    fn test_load_invalid_json_config() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = load_raw_config(file.path()).unwrap_err();
        assert!(matches!(err, LoggerError::Config(_)));
    }
}
