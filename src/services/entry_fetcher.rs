//! 出走表抓取服务 - 业务能力层
//!
//! 只负责「拿到一场比赛的出走表标记」这一件事：
//! 构造查询URL → 抓取页面 → 抽取目标节点 → 返回序列化标记。
//! 单次尝试、有界超时、不做重试。

use std::time::Duration;

use regex::Regex;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{EntryMarkup, Venue};
use crate::services::extractor::{EntryExtractor, RaceListExtractor};
use crate::utils::logging::truncate_text;

/// 浏览器风格的 User-Agent（避免被站点当作简单爬虫拦截）
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// 出走表抓取服务
pub struct EntryFetcher {
    client: reqwest::Client,
    entry_list_url: String,
    extractor: Box<dyn EntryExtractor>,
}

impl EntryFetcher {
    /// 创建新的抓取服务
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Other(format!("无法创建 HTTP 客户端: {}", e)))?;

        Ok(Self {
            client,
            entry_list_url: config.entry_list_url.clone(),
            extractor: Box::new(RaceListExtractor),
        })
    }

    /// 构造出走表查询URL
    ///
    /// 三个查询参数：rno=场次、jcd=场代码、hd=紧凑日期（YYYYMMDD）
    pub fn entry_url(&self, race_number: u8, venue: Venue, race_day: &str) -> String {
        format!(
            "{}?rno={}&jcd={}&hd={}",
            self.entry_list_url,
            race_number,
            venue.jcd(),
            race_day
        )
    }

    /// 抓取一场比赛的出走表标记
    ///
    /// # 参数
    /// - `race_number`: 场次（1-12R）
    /// - `venue`: 竞艇场
    /// - `race_day`: 紧凑日期（YYYYMMDD）
    ///
    /// # 返回
    /// - 非 200 响应 → `FetchError::Unavailable`
    /// - 页面中不存在出走表节点 → `FetchError::NotFound`（该场当日未开催的正常信号）
    pub async fn fetch(
        &self,
        race_number: u8,
        venue: Venue,
        race_day: &str,
    ) -> AppResult<EntryMarkup> {
        let url = self.entry_url(race_number, venue, race_day);
        info!("{}R URL: {}", race_number, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::request_failed(url.as_str(), e))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(AppError::unavailable(url.as_str(), status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::request_failed(url.as_str(), e))?;

        let markup = self
            .extractor
            .extract(&body)
            .ok_or_else(|| AppError::not_found(url.as_str()))?;

        info!("{}R ✓ 出走表节点抽取成功（{} 字符）", race_number, markup.chars().count());
        debug!("{}R 出走表文本预览: {}", race_number, text_preview(&markup, 120));

        Ok(EntryMarkup(markup))
    }
}

/// 去掉标签并压缩空白后截断，用于日志预览
fn text_preview(html: &str, max_len: usize) -> String {
    let text = match Regex::new(r"<[^>]+>") {
        Ok(re) => re.replace_all(html, " ").to_string(),
        Err(_) => html.to_string(),
    };
    let compact = text.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_text(&compact, max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_url_embeds_all_three_params() {
        let fetcher = EntryFetcher::new(&Config::default()).unwrap();
        let url = fetcher.entry_url(5, Venue::Edogawa, "20240803");

        assert_eq!(
            url,
            "https://www.boatrace.jp/owpc/pc/race/racelist?rno=5&jcd=03&hd=20240803"
        );
    }

    #[test]
    fn test_text_preview_strips_tags() {
        let preview = text_preview("<table><tr><td>選手A</td><td>4.50</td></tr></table>", 50);
        assert!(!preview.contains('<'));
        assert!(preview.contains("選手A"));
        assert!(preview.contains("4.50"));
    }

    #[test]
    fn test_text_preview_truncates() {
        let long = "あ".repeat(300);
        let preview = text_preview(&long, 10);
        assert!(preview.chars().count() <= 13); // 10 文字 + "..."
    }
}
