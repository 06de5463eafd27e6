// ============================================================================
// Roosevelt Logger - 输出端
// ============================================================================
//
// 文件: src/core/sink.rs
// 职责: 接收日志记录并写入目标
// 边界:
//   - ✅ 输出端 trait 定义
//   - ✅ 控制台输出（按严重级别选择 stdout/stderr）
//   - ✅ 内存捕获输出
//   - ✅ tracing 转发输出
//   - ❌ 不应包含格式化逻辑
//   - ❌ 不应包含启用/静默判断
//
// ============================================================================

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

use crate::models::record::{Record, Severity, Stream};

/// 日志输出端
pub trait Sink: Send + Sync {
    fn write(&self, record: &Record);
}

/// 控制台输出，仅在目标流是终端时着色
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }

    /// 写入一行，写失败（如管道已关闭）时丢弃该行
    fn write_to<W: Write>(out: &mut W, record: &Record, colorize: bool) {
        let _ = writeln!(out, "{}", record.render(colorize));
    }
}

impl Sink for ConsoleSink {
    fn write(&self, record: &Record) {
        match record.stream() {
            Stream::Stdout => Self::write_to(
                &mut io::stdout().lock(),
                record,
                atty::is(atty::Stream::Stdout),
            ),
            Stream::Stderr => Self::write_to(
                &mut io::stderr().lock(),
                record,
                atty::is(atty::Stream::Stderr),
            ),
        }
    }
}

/// 内存输出，保存全部记录
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        // 锁中毒时继续使用内部数据
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// 所有记录的副本
    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// 写入某个流的文本
    pub fn lines(&self, stream: Stream) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|r| r.stream() == stream)
            .map(|r| r.text.clone())
            .collect()
    }

    pub fn stdout(&self) -> Vec<String> {
        self.lines(Stream::Stdout)
    }

    pub fn stderr(&self) -> Vec<String> {
        self.lines(Stream::Stderr)
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, record: &Record) {
        self.lock().push(record.clone());
    }
}

/// 转发为 tracing 事件
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for TracingSink {
    fn write(&self, record: &Record) {
        let message = record.text.trim_end();
        match record.severity {
            Severity::Info => tracing::info!("{}", message),
            Severity::Warn => tracing::warn!("{}", message),
            Severity::Error => tracing::error!("{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 每次写入都失败的输出
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
        }
    }

    #[test]
    fn test_console_write_failure_does_not_panic() {
        let record = Record::new(Severity::Error, "boom ".into(), Some("red".into()));
        ConsoleSink::write_to(&mut BrokenPipe, &record, true);
        ConsoleSink::write_to(&mut BrokenPipe, &record, false);
    }

    #[test]
    fn test_console_writes_rendered_line() {
        let mut out = Vec::new();
        let record = Record::new(Severity::Info, "hello ".into(), None);
        ConsoleSink::write_to(&mut out, &record, false);
        assert_eq!(String::from_utf8(out).unwrap(), "hello \n");
    }

    #[test]
    fn test_memory_sink_splits_streams() {
        let sink = MemorySink::new();
        sink.write(&Record::new(Severity::Info, "a ".into(), None));
        sink.write(&Record::new(Severity::Warn, "b ".into(), Some("yellow".into())));
        sink.write(&Record::new(Severity::Error, "c ".into(), None));

        assert_eq!(sink.stdout(), vec!["a ".to_string()]);
        assert_eq!(sink.stderr(), vec!["b ".to_string(), "c ".to_string()]);
        assert_eq!(sink.records().len(), 3);

        sink.clear();
        assert!(sink.is_empty());
    }
}
