// ============================================================================
// Roosevelt Logger - 配置解析器
// ============================================================================
//
// 文件: src/core/resolver.rs
// 职责: 将松散的原始配置解析为完整的 ResolvedConfig
// 边界:
//   - ✅ 全局选项与方法定义拆分
//   - ✅ 字段类型校验与按类型回退默认值
//   - ✅ 平台与环境变量覆盖 enablePrefix
//   - ✅ disable 列表匹配
//   - ❌ 不应返回错误（非法输入一律回退默认值）
//   - ❌ 不应包含日志格式化逻辑
//   - ❌ 不应直接读取进程环境
//
// ============================================================================

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::models::config::{GlobalConfig, MethodConfig, MethodType, ResolvedConfig};
use crate::utils::constants::{keys, ENABLE_PREFIX_ENV};
use crate::utils::env::Environment;

/// 配置解析器
pub struct ConfigResolver<'a> {
    env: &'a dyn Environment,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(env: &'a dyn Environment) -> Self {
        Self { env }
    }

    /// 解析原始配置，永不失败
    pub fn resolve(&self, raw: &Value) -> ResolvedConfig {
        let (params, method_specs) = split_raw(raw);

        let global = GlobalConfig {
            enable_prefix: self.resolve_enable_prefix(params.get(keys::ENABLE_PREFIX)),
            disable: resolve_disable(params.get(keys::DISABLE)),
        };

        let mut methods: BTreeMap<String, MethodConfig> = ResolvedConfig::default().methods;
        for (name, spec) in method_specs {
            methods.insert(name.clone(), resolve_method(name, spec));
        }

        ResolvedConfig { global, methods }
    }

    /// 解析 `createLogMethod` 的定义，名称之外的字段按同样的规则回退，enable 固定为 true
    pub fn resolve_created(&self, name: &str, spec: &Value) -> MethodConfig {
        MethodConfig {
            enable: true,
            ..resolve_method(name, spec)
        }
    }

    fn resolve_enable_prefix(&self, value: Option<&Value>) -> bool {
        let mut enable = match value {
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                tracing::debug!(value = %other, "invalid enablePrefix, using default");
                true
            }
            None => true,
        };

        if self.env.is_windows() {
            enable = false;
        }

        match self.env.var(ENABLE_PREFIX_ENV).as_deref() {
            Some("true") => enable = true,
            Some("false") => enable = false,
            _ => {}
        }

        enable
    }

    /// disable 列表中是否有匹配当前模式或为 "true" 的环境变量
    pub fn is_disabled(&self, global: &GlobalConfig) -> bool {
        let mode = self.env.mode();
        global.disable.iter().any(|token| {
            let matched = mode.as_deref() == Some(token.as_str())
                || self.env.var(token).as_deref() == Some("true");
            if matched {
                tracing::debug!(token = %token, "disable token matched, silencing output");
            }
            matched
        })
    }
}

/// 拆分全局选项和方法定义，支持扁平和 `{ params, methods }` 两种形状
fn split_raw(raw: &Value) -> (Map<String, Value>, Vec<(&String, &Value)>) {
    let Some(object) = raw.as_object() else {
        return (Map::new(), Vec::new());
    };

    if is_nested(object) {
        let params = object
            .get(keys::PARAMS)
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        let specs = object
            .get(keys::METHODS)
            .and_then(Value::as_object)
            .map(|m| m.iter().collect())
            .unwrap_or_default();
        return (params, specs);
    }

    let mut params = Map::new();
    let mut specs = Vec::new();
    for (key, value) in object {
        match key.as_str() {
            keys::ENABLE_PREFIX | keys::DISABLE => {
                params.insert(key.clone(), value.clone());
            }
            _ => specs.push((key, value)),
        }
    }
    (params, specs)
}

/// 方法定义对象允许的字段
const METHOD_FIELDS: [&str; 4] = ["type", "enable", "prefix", "color"];

/// 顶层只有 params/methods 两个键，且内容像全局选项和方法表时才按嵌套形状处理。
/// 形如 `{ "methods": { "type": "warn" } }` 的配置是名为 methods 的自定义方法。
fn is_nested(object: &Map<String, Value>) -> bool {
    let only_sections = object
        .keys()
        .all(|k| k == keys::PARAMS || k == keys::METHODS);
    if !only_sections {
        return false;
    }

    let params = object.get(keys::PARAMS).and_then(Value::as_object);
    let methods = object.get(keys::METHODS).and_then(Value::as_object);
    if params.is_none() && methods.is_none() {
        return false;
    }

    let params_ok = params.map_or(true, |p| {
        p.keys()
            .all(|k| k == keys::ENABLE_PREFIX || k == keys::DISABLE)
    });
    let methods_ok = methods.map_or(true, |m| !is_method_spec(m));
    params_ok && methods_ok
}

/// 只含方法字段且没有嵌套对象的映射视为单个方法定义
fn is_method_spec(fields: &Map<String, Value>) -> bool {
    !fields.is_empty()
        && fields
            .iter()
            .all(|(k, v)| METHOD_FIELDS.contains(&k.as_str()) && !v.is_object())
}

fn resolve_disable(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            tracing::debug!(value = %other, "invalid disable list, using default");
            Vec::new()
        }
    }
}

/// 布尔值或 "true"/"false" 字符串
fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s == "true" => Some(true),
        Value::String(s) if s == "false" => Some(false),
        _ => None,
    }
}

fn resolve_method(name: &str, spec: &Value) -> MethodConfig {
    let built_in = MethodConfig::built_in(name);

    if let Some(enable) = as_bool(spec) {
        let base = built_in.unwrap_or_default();
        return MethodConfig { enable, ..base };
    }

    let Some(fields) = spec.as_object() else {
        if !spec.is_null() {
            tracing::debug!(method = name, value = %spec, "invalid method definition, using defaults");
        }
        return built_in.unwrap_or_default();
    };

    let method_type = fields
        .get("type")
        .and_then(Value::as_str)
        .and_then(MethodType::parse)
        .or(built_in.as_ref().map(|b| b.method_type))
        .unwrap_or_default();

    // 类型被覆盖时前缀和颜色跟随新类型
    let base = match &built_in {
        Some(b) if b.method_type == method_type => b.clone(),
        Some(b) => MethodConfig {
            enable: b.enable,
            ..MethodConfig::for_type(method_type)
        },
        None => MethodConfig::for_type(method_type),
    };

    let enable = fields.get("enable").and_then(as_bool).unwrap_or(base.enable);
    let prefix = resolve_decoration(name, "prefix", fields.get("prefix"), &base.prefix);
    let color = resolve_decoration(name, "color", fields.get("color"), &base.color);

    MethodConfig {
        method_type,
        enable,
        prefix,
        color,
    }
}

/// prefix/color：字符串原样使用，true 取默认，false 关闭，其它回退默认
fn resolve_decoration(
    method: &str,
    field: &str,
    value: Option<&Value>,
    default: &Option<String>,
) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Bool(false)) => None,
        Some(Value::Bool(true)) | Some(Value::Null) | None => default.clone(),
        Some(other) => {
            tracing::debug!(method, field, value = %other, "invalid field, using default");
            default.clone()
        }
    }
}
