// ============================================================================
// Roosevelt Logger - 日志门面
// ============================================================================
//
// 文件: src/core/logger.rs
// 职责: 构建命名日志方法并在调用时分发到输出端
// 边界:
//   - ✅ 按解析后的配置为每个方法生成闭包
//   - ✅ 启用判断、格式化和严重级别路由
//   - ✅ 运行时开关（静默、前缀）
//   - ✅ 运行时动态创建方法
//   - ❌ 不应包含配置字段校验逻辑
//   - ❌ 不应包含参数渲染细节
//   - ❌ 不应直接写入 stdout/stderr
//
// ============================================================================

use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::formatter::format_args;
use super::resolver::ConfigResolver;
use super::sink::{ConsoleSink, Sink};
use crate::error::LoggerError;
use crate::models::config::{MethodConfig, ResolvedConfig};
use crate::models::record::{Record, Severity};
use crate::utils::constants::methods;
use crate::utils::env::{Environment, SystemEnvironment};

/// 一个可调用的日志方法
pub type LogMethod = Arc<dyn Fn(&[Value]) + Send + Sync>;

/// 所有方法闭包共享的运行时状态
#[derive(Debug)]
struct SharedState {
    enable_prefix: AtomicBool,
    silenced: AtomicBool,
}

impl SharedState {
    fn prefix_enabled(&self) -> bool {
        self.enable_prefix.load(Ordering::Relaxed)
    }

    fn is_silenced(&self) -> bool {
        self.silenced.load(Ordering::Relaxed)
    }
}

/// 可配置的控制台日志器
pub struct Logger {
    state: Arc<SharedState>,
    sink: Arc<dyn Sink>,
    env: Arc<dyn Environment>,
    config: ResolvedConfig,
    methods: HashMap<String, LogMethod>,
}

/// Logger 构建器
pub struct LoggerBuilder {
    config: Value,
    env: Option<Arc<dyn Environment>>,
    sink: Option<Arc<dyn Sink>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            config: Value::Null,
            env: None,
            sink: None,
        }
    }

    /// 原始配置
    pub fn config(mut self, config: Value) -> Self {
        self.config = config;
        self
    }

    /// 环境信息来源，默认读取真实进程环境
    pub fn environment<E: Environment + 'static>(mut self, env: E) -> Self {
        self.env = Some(Arc::new(env));
        self
    }

    /// 输出端，默认写控制台
    pub fn sink<S: Sink + 'static>(mut self, sink: Arc<S>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn build(self) -> Logger {
        let env: Arc<dyn Environment> = match self.env {
            Some(env) => env,
            None => Arc::new(SystemEnvironment),
        };
        let sink: Arc<dyn Sink> = match self.sink {
            Some(sink) => sink,
            None => Arc::new(ConsoleSink::new()),
        };
        Logger::with_parts(&self.config, env, sink)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// 用真实环境和控制台输出创建日志器
    ///
    /// 配置可以是扁平形状 `{ "enablePrefix": .., "disable": [..], "<方法名>": .. }`，
    /// 也可以是 `{ "params": {..}, "methods": {..} }`。顶层只有 `params`/`methods`
    /// 时，仅当 `params` 只含全局选项、`methods` 不像单个方法定义
    /// （只含 type/enable/prefix/color 且没有嵌套对象）时才按嵌套形状解析，
    /// 否则它们被当作同名的自定义方法。
    pub fn new(config: &Value) -> Self {
        Self::with_parts(config, Arc::new(SystemEnvironment), Arc::new(ConsoleSink::new()))
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn with_parts(raw: &Value, env: Arc<dyn Environment>, sink: Arc<dyn Sink>) -> Self {
        let resolver = ConfigResolver::new(env.as_ref());
        let config = resolver.resolve(raw);
        let silenced = resolver.is_disabled(&config.global);

        let state = Arc::new(SharedState {
            enable_prefix: AtomicBool::new(config.global.enable_prefix),
            silenced: AtomicBool::new(silenced),
        });

        let mut logger = Self {
            state,
            sink,
            env,
            config,
            methods: HashMap::new(),
        };
        let configs: Vec<(String, MethodConfig)> = logger
            .config
            .methods
            .iter()
            .map(|(name, config)| (name.clone(), config.clone()))
            .collect();
        for (name, config) in configs {
            let method = logger.bind(config);
            logger.methods.insert(name, method);
        }

        tracing::debug!(
            methods = logger.methods.len(),
            enable_prefix = logger.prefix_enabled(),
            silenced,
            "logger constructed"
        );
        logger
    }

    /// 生成绑定到方法配置的闭包，运行时开关从共享状态实时读取
    fn bind(&self, config: MethodConfig) -> LogMethod {
        let state = Arc::clone(&self.state);
        let sink = Arc::clone(&self.sink);
        Arc::new(move |args: &[Value]| {
            if !config.enable || state.is_silenced() {
                return;
            }
            let text = format_args(args, state.prefix_enabled(), config.active_prefix());
            let record = Record::new(config.method_type.severity(), text, config.color.clone());
            sink.write(&record);
        })
    }

    /// 按名称调用日志方法
    pub fn call(&self, name: &str, args: &[Value]) -> Result<(), LoggerError> {
        let method = self
            .methods
            .get(name)
            .ok_or_else(|| LoggerError::UnknownMethod(name.to_string()))?;
        method(args);
        Ok(())
    }

    /// 获取可单独持有的方法句柄
    pub fn method(&self, name: &str) -> Option<LogMethod> {
        self.methods.get(name).cloned()
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// 已注册的方法名（排序后）
    pub fn method_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.methods.keys().cloned().collect();
        names.sort();
        names
    }

    fn call_built_in(&self, name: &str, args: &[Value]) {
        if let Some(method) = self.methods.get(name) {
            method(args);
        }
    }

    /// `info` 的别名
    pub fn log(&self, args: &[Value]) {
        self.info(args);
    }

    pub fn info(&self, args: &[Value]) {
        self.call_built_in(methods::INFO, args);
    }

    pub fn warn(&self, args: &[Value]) {
        self.call_built_in(methods::WARN, args);
    }

    pub fn verbose(&self, args: &[Value]) {
        self.call_built_in(methods::VERBOSE, args);
    }

    pub fn error(&self, args: &[Value]) {
        self.call_built_in(methods::ERROR, args);
    }

    /// 静默全部输出
    pub fn disable_logging(&self) {
        self.state.silenced.store(true, Ordering::Relaxed);
    }

    pub fn enable_logging(&self) {
        self.state.silenced.store(false, Ordering::Relaxed);
    }

    /// 关闭所有方法的前缀
    pub fn disable_prefix(&self) {
        self.state.enable_prefix.store(false, Ordering::Relaxed);
    }

    pub fn enable_prefix(&self) {
        self.state.enable_prefix.store(true, Ordering::Relaxed);
    }

    pub fn is_silenced(&self) -> bool {
        self.state.is_silenced()
    }

    pub fn prefix_enabled(&self) -> bool {
        self.state.prefix_enabled()
    }

    /// 当前配置快照，enablePrefix 反映运行时开关
    pub fn config(&self) -> ResolvedConfig {
        let mut config = self.config.clone();
        config.global.enable_prefix = self.prefix_enabled();
        config
    }

    /// 运行时新增日志方法
    ///
    /// `spec` 形如 `{ "name": "success", "type": "info", "prefix": "✅", "color": "green" }`。
    /// 名称缺失或不是字符串时在错误流输出提示并返回 `InvalidMethodName`，不修改方法表。
    pub fn create_log_method(&mut self, spec: &Value) -> Result<(), LoggerError> {
        let name = match spec.get("name").and_then(Value::as_str) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                let err = LoggerError::InvalidMethodName;
                self.report(&err);
                return Err(err);
            }
        };

        let config = ConfigResolver::new(self.env.as_ref()).resolve_created(&name, spec);
        tracing::debug!(method = %name, method_type = %config.method_type, "log method created");

        let method = self.bind(config.clone());
        self.config.methods.insert(name.clone(), config);
        self.methods.insert(name, method);
        Ok(())
    }

    /// 在错误流输出库自身的错误
    fn report(&self, err: &LoggerError) {
        if self.state.is_silenced() {
            return;
        }
        let error = MethodConfig::built_in(methods::ERROR).unwrap_or_default();
        let text = format_args(
            &[Value::String(err.to_string())],
            self.prefix_enabled(),
            error.active_prefix(),
        );
        self.sink.write(&Record::new(Severity::Error, text, error.color));
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(&Value::Null)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config())
            .field("silenced", &self.is_silenced())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sink::MemorySink;
    use crate::utils::env::FixedEnvironment;
    use serde_json::json;

    fn logger_with(config: Value) -> (Logger, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::builder()
            .config(config)
            .environment(FixedEnvironment::new())
            .sink(Arc::clone(&sink))
            .build();
        (logger, sink)
    }

    #[test]
    fn test_defaults_route_by_type() {
        let (logger, sink) = logger_with(Value::Null);
        logger.log(&[json!("First Test")]);
        logger.verbose(&[json!("Verbose Log")]);
        logger.error(&[json!("Error Log")]);
        logger.warn(&[json!("Warning Log")]);

        assert_eq!(sink.stdout(), vec!["First Test ".to_string()]);
        assert_eq!(
            sink.stderr(),
            vec!["❌  Error Log ".to_string(), "⚠️   Warning Log ".to_string()]
        );
    }

    #[test]
    fn test_color_travels_with_record() {
        let (logger, sink) = logger_with(Value::Null);
        logger.error(&[json!("boom")]);
        logger.info(&[json!("plain")]);

        let records = sink.records();
        assert_eq!(records[0].color.as_deref(), Some("red"));
        assert_eq!(records[0].severity, Severity::Error);
        assert_eq!(records[1].color, None);
    }

    #[test]
    fn test_call_unknown_method() {
        let (logger, sink) = logger_with(Value::Null);
        let err = logger.call("nope", &[json!("x")]).unwrap_err();
        assert!(matches!(err, LoggerError::UnknownMethod(name) if name == "nope"));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_method_handle_sees_live_toggles() {
        let (logger, sink) = logger_with(Value::Null);
        let warn = logger.method("warn").unwrap();

        logger.disable_prefix();
        warn(&[json!("quiet")]);
        logger.disable_logging();
        warn(&[json!("silent")]);
        logger.enable_logging();
        logger.enable_prefix();
        warn(&[json!("loud")]);

        assert_eq!(sink.stderr(), vec!["quiet ".to_string(), "⚠️   loud ".to_string()]);
    }

    #[test]
    fn test_config_snapshot_tracks_prefix_toggle() {
        let (logger, _sink) = logger_with(Value::Null);
        assert!(logger.config().global.enable_prefix);
        logger.disable_prefix();
        assert!(!logger.config().global.enable_prefix);
    }

    #[test]
    fn test_create_log_method() {
        let (mut logger, sink) = logger_with(Value::Null);
        logger
            .create_log_method(&json!({ "name": "success", "prefix": "✅", "color": "green" }))
            .unwrap();

        assert!(logger.has_method("success"));
        logger.call("success", &[json!("done")]).unwrap();

        let records = sink.records();
        assert_eq!(records[0].text, "✅  done ");
        assert_eq!(records[0].severity, Severity::Info);
        assert_eq!(records[0].color.as_deref(), Some("green"));
        assert!(logger.config().method("success").unwrap().enable);
    }

    #[test]
    fn test_create_log_method_invalid_name() {
        let (mut logger, sink) = logger_with(Value::Null);
        let before = logger.method_names();

        let err = logger.create_log_method(&json!({ "name": 123 })).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidMethodName));
        assert!(logger.create_log_method(&json!({ "type": "warn" })).is_err());

        assert_eq!(logger.method_names(), before);
        let errors = sink.stderr();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("must be type string"));
        assert_eq!(sink.records()[0].severity, Severity::Error);
    }
}
