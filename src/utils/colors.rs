// ============================================================================
// Roosevelt Logger - 颜色工具
// ============================================================================
//
// 文件: src/utils/colors.rs
// 职责: 按名称查找终端颜色并包装文本
// 边界:
//   - ✅ 颜色名解析
//   - ✅ 前景色包装（遵循 NO_COLOR/CLICOLOR_FORCE）
//   - ❌ 不应包含终端检测
//   - ❌ 不应包含日志格式化逻辑
//
// ============================================================================

use colored::{Color, Colorize};

/// 颜色工具函数
pub struct Colors;

impl Colors {
    /// 按名称查找颜色，支持 `red`、`bright_blue`、`bright blue` 等写法
    pub fn lookup(name: &str) -> Option<Color> {
        let normalized = name.trim().to_lowercase().replace('_', " ");
        normalized.parse::<Color>().ok()
    }

    /// 为文本添加颜色
    pub fn colorize(text: &str, color: Color) -> String {
        text.color(color).to_string()
    }

    /// 按颜色名包装文本，未知颜色名原样返回
    pub fn paint(text: &str, name: &str) -> String {
        match Self::lookup(name) {
            Some(color) => Self::colorize(text, color),
            None => {
                tracing::debug!(color = name, "unknown color name, writing plain text");
                text.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_names() {
        assert_eq!(Colors::lookup("red"), Some(Color::Red));
        assert_eq!(Colors::lookup("Yellow"), Some(Color::Yellow));
        assert_eq!(Colors::lookup("bright_blue"), Some(Color::BrightBlue));
    }

    #[test]
    fn test_unknown_color_is_plain() {
        assert_eq!(Colors::lookup("not-a-color"), None);
        assert_eq!(Colors::paint("hello", "not-a-color"), "hello");
    }

    #[test]
    fn test_paint_wraps_text() {
        colored::control::set_override(true);
        assert_eq!(Colors::paint("hello", "red"), "\x1b[31mhello\x1b[0m");
    }
}
