//! 日志工具模块
//!
//! 提供日志初始化、横幅输出和文本截断的辅助函数

use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志
///
/// 默认 info 级别，可用 RUST_LOG 覆盖。重复调用是安全的（测试里会多次调）。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 记录程序启动时的预测目标
///
/// # 参数
/// - `venue_name`: 場名（用户输入的原始值）
/// - `date`: 日期（ISO 形式）
/// - `race_number`: 场次
/// - `jcd`: 解析后的场代码
/// - `race_day`: 紧凑日期（YYYYMMDD）
pub fn log_startup(venue_name: &str, date: &str, race_number: u8, jcd: &str, race_day: &str) {
    info!("📍 競艇場: {}", venue_name);
    info!("📅 日付: {}", date);
    info!("🏁 レース: {}R", race_number);
    info!("🔧 コード: jcd={}, hd={}", jcd, race_day);
}

/// 以分隔横幅输出一个阶段的完整结果
///
/// # 参数
/// - `title`: 横幅标题
/// - `body`: 阶段产出的全文
pub fn log_stage_result(title: &str, body: &str) {
    info!("\n{}", "=".repeat(80));
    info!("【{}】", title);
    info!("{}", "=".repeat(80));
    info!("{}", body);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符数计）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_short_input_unchanged() {
        assert_eq!(truncate_text("江戸川", 10), "江戸川");
    }

    #[test]
    fn test_truncate_text_long_input_gets_ellipsis() {
        let text = "あ".repeat(20);
        let truncated = truncate_text(&text, 5);
        assert_eq!(truncated, format!("{}...", "あ".repeat(5)));
    }
}
