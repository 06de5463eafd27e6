// ============================================================================
// Roosevelt Logger - emoji 检测
// ============================================================================
//
// 文件: src/utils/emoji.rs
// 职责: 判断字符串是否为单个 emoji 字形
// 边界:
//   - ✅ emoji 字形匹配（含变体选择符、肤色修饰、ZWJ 序列、国旗、键帽）
//   - ❌ 不应包含 emoji 移除逻辑
//   - ❌ 不应包含前缀判断逻辑
//
// ============================================================================

use regex::Regex;
use std::sync::OnceLock;

static EMOJI_PATTERN: OnceLock<Regex> = OnceLock::new();

fn pattern() -> &'static Regex {
    EMOJI_PATTERN.get_or_init(|| {
        // 单个字形：图形字符 + 可选修饰，ZWJ 连接的序列，两个区域指示符组成的国旗，或键帽
        let glyph = r"\p{Extended_Pictographic}(?:\x{FE0F}|\p{Emoji_Modifier})*";
        let source = format!(
            r"^(?:{glyph}(?:\x{{200D}}{glyph})*|\p{{Regional_Indicator}}{{2}}|[0-9#*]\x{{FE0F}}?\x{{20E3}})$"
        );
        Regex::new(&source).expect("emoji pattern is valid")
    })
}

/// 去掉首尾空白后，字符串是否恰好是一个 emoji
pub fn is_emoji(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && pattern().is_match(trimmed)
}
