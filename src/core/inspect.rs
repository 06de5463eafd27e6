// ============================================================================
// Roosevelt Logger - 结构化值渲染
// ============================================================================
//
// 文件: src/core/inspect.rs
// 职责: 将非字符串参数渲染为便于终端阅读的文本
// 边界:
//   - ✅ 对象/数组的单行与多行布局
//   - ✅ 字符串引号与转义
//   - ✅ 对象键名的标识符判断
//   - ❌ 不应包含前缀处理
//   - ❌ 不应包含着色
//
// ============================================================================

use serde_json::{Map, Value};

/// 单行布局允许的最大宽度
const BREAK_LENGTH: usize = 80;

/// 数组最多展示的元素个数
const MAX_ARRAY_LENGTH: usize = 100;

/// 每层缩进
const INDENT: usize = 2;

/// 渲染任意值，形如 `{ a: 1, list: [ 'x', 'y' ] }`
pub fn inspect(value: &Value) -> String {
    render(value, 0)
}

fn render(value: &Value, indent: usize) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Array(items) => render_array(items, indent),
        Value::Object(map) => render_object(map, indent),
    }
}

fn render_array(items: &[Value], indent: usize) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }

    let mut entries: Vec<String> = items
        .iter()
        .take(MAX_ARRAY_LENGTH)
        .map(|item| render(item, indent + INDENT))
        .collect();
    if items.len() > MAX_ARRAY_LENGTH {
        let remaining = items.len() - MAX_ARRAY_LENGTH;
        let plural = if remaining > 1 { "s" } else { "" };
        entries.push(format!("... {remaining} more item{plural}"));
    }

    layout("[", "]", &entries, indent)
}

fn render_object(map: &Map<String, Value>, indent: usize) -> String {
    if map.is_empty() {
        return "{}".to_string();
    }

    let entries: Vec<String> = map
        .iter()
        .map(|(key, value)| format!("{}: {}", render_key(key), render(value, indent + INDENT)))
        .collect();

    layout("{", "}", &entries, indent)
}

/// 放得下就单行，否则每个条目一行
fn layout(open: &str, close: &str, entries: &[String], indent: usize) -> String {
    let entries_width: usize = entries.iter().map(|e| e.chars().count()).sum();
    let width = indent + open.len() + entries_width + entries.len() * 2 + 10;
    let multiline = entries.iter().any(|e| e.contains('\n'));

    if !multiline && width <= BREAK_LENGTH {
        return format!("{} {} {}", open, entries.join(", "), close);
    }

    let pad = " ".repeat(indent + INDENT);
    let body = entries
        .iter()
        .map(|e| format!("{pad}{e}"))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("{}\n{}\n{}{}", open, body, " ".repeat(indent), close)
}

fn render_key(key: &str) -> String {
    let mut chars = key.chars();
    let is_identifier = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if is_identifier {
        key.to_string()
    } else {
        quote(key)
    }
}

/// 单引号包裹；只含单引号时改用双引号
fn quote(s: &str) -> String {
    let delimiter = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(delimiter);
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(inspect(&json!(null)), "null");
        assert_eq!(inspect(&json!(true)), "true");
        assert_eq!(inspect(&json!(123)), "123");
        assert_eq!(inspect(&json!(1.5)), "1.5");
        assert_eq!(inspect(&json!("value")), "'value'");
    }

    #[test]
    fn test_flat_containers() {
        assert_eq!(inspect(&json!({ "a": 1 })), "{ a: 1 }");
        assert_eq!(inspect(&json!({ "key": "value" })), "{ key: 'value' }");
        assert_eq!(inspect(&json!({ "this": "is an object" })), "{ this: 'is an object' }");
        assert_eq!(inspect(&json!(["array"])), "[ 'array' ]");
        assert_eq!(inspect(&json!({})), "{}");
        assert_eq!(inspect(&json!([])), "[]");
    }

    #[test]
    fn test_nested_containers() {
        let value = json!({ "user": { "name": "ada", "tags": ["x", "y"] }, "n": null });
        assert_eq!(inspect(&value), "{ user: { name: 'ada', tags: [ 'x', 'y' ] }, n: null }");
    }

    #[test]
    fn test_keys_and_quotes() {
        assert_eq!(inspect(&json!({ "odd key": 1 })), "{ 'odd key': 1 }");
        assert_eq!(inspect(&json!({ "_ok1": 1 })), "{ _ok1: 1 }");
        assert_eq!(inspect(&json!({ "_ok$": 1 })), "{ '_ok$': 1 }");
        assert_eq!(inspect(&json!({ "1st": 1 })), "{ '1st': 1 }");
        assert_eq!(inspect(&json!("it's")), "\"it's\"");
        assert_eq!(inspect(&json!("a\nb")), "'a\\nb'");
    }

    #[test]
    fn test_long_object_breaks_lines() {
        let value = json!({
            "first": "aaaaaaaaaaaaaaaaaaaa",
            "second": "bbbbbbbbbbbbbbbbbbbb",
            "third": "cccccccccccccccccccc",
        });
        let expected = "{\n  first: 'aaaaaaaaaaaaaaaaaaaa',\n  second: 'bbbbbbbbbbbbbbbbbbbb',\n  third: 'cccccccccccccccccccc'\n}";
        assert_eq!(inspect(&value), expected);
    }

    #[test]
    fn test_break_threshold_is_71_columns() {
        let fits = inspect(&json!({ "k": "a".repeat(62) }));
        assert_eq!(fits.chars().count(), 71);
        assert!(!fits.contains('\n'));

        let breaks = inspect(&json!({ "k": "a".repeat(63) }));
        assert_eq!(breaks, format!("{{\n  k: '{}'\n}}", "a".repeat(63)));
    }

    #[test]
    fn test_long_array_is_truncated() {
        let items: Vec<u32> = (0..102).collect();
        let rendered = inspect(&json!(items));
        assert!(rendered.ends_with("  ... 2 more items\n]"));
    }
}
