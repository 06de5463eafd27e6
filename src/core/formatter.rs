// ============================================================================
// Roosevelt Logger - 参数格式化
// ============================================================================
//
// 文件: src/core/formatter.rs
// 职责: 将一次日志调用的参数列表拼接为单个字符串
// 边界:
//   - ✅ 前缀添加与重复前缀抑制
//   - ✅ 首参数 emoji 识别
//   - ✅ 非字符串参数渲染
//   - ❌ 不应移除消息中的 emoji
//   - ❌ 不应包含着色和输出逻辑
//
// ============================================================================

use serde_json::Value;

use super::inspect::inspect;
use crate::utils::constants::PREFIX_SEPARATOR;
use crate::utils::emoji::is_emoji;

/// 格式化参数列表
///
/// 首个参数按以下顺序处理：
/// 1. 与配置前缀相同（去空白后比较）的字符串视为调用方自带前缀；
/// 2. 单个 emoji 字符串同样视为自带前缀；
/// 3. 配置了前缀时在首参数前加上前缀；
/// 4. 否则原样渲染。
///
/// 自带前缀在 `enable_prefix` 为 false 时整体省略。其余参数逐个渲染，
/// 每个参数后跟一个空格。
pub fn format_args(args: &[Value], enable_prefix: bool, prefix: Option<&str>) -> String {
    let mut out = String::new();
    let Some((first, rest)) = args.split_first() else {
        return out;
    };

    let prefix = prefix.filter(|p| !p.is_empty());

    match first {
        Value::String(s) if is_supplied_prefix(s, prefix) => {
            if enable_prefix {
                out.push_str(s.trim());
                out.push_str(PREFIX_SEPARATOR);
            }
        }
        _ => {
            if let (Some(prefix), true) = (prefix, enable_prefix) {
                out.push_str(prefix);
                out.push_str(PREFIX_SEPARATOR);
            }
            push_arg(&mut out, first);
        }
    }

    for arg in rest {
        push_arg(&mut out, arg);
    }

    out
}

/// 首参数是否是调用方自带的前缀
fn is_supplied_prefix(arg: &str, prefix: Option<&str>) -> bool {
    let trimmed = arg.trim();
    let matches_prefix = prefix.map_or(false, |p| trimmed == p.trim());
    matches_prefix || is_emoji(trimmed)
}

fn push_arg(out: &mut String, arg: &Value) {
    match arg {
        Value::String(s) => out.push_str(s),
        other => out.push_str(&inspect(other)),
    }
    out.push(' ');
}
