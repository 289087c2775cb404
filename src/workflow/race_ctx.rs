//! 单场比赛处理上下文
//!
//! 封装「我正在处理哪个场、哪一天、第几场」这一信息

use std::fmt::Display;

use tracing::warn;

use crate::models::{RaceQuery, Venue};

/// 单场比赛处理上下文
#[derive(Debug, Clone)]
pub struct RaceCtx {
    /// 解析后的竞艇场
    pub venue: Venue,

    /// 调用方传入的原始場名（仅用于日志与提示）
    pub venue_input: String,

    /// 场次（1-12R）
    pub race_number: u8,

    /// 紧凑形式的比赛日期（YYYYMMDD）
    pub race_day: String,
}

impl RaceCtx {
    /// 从请求构造上下文
    ///
    /// 場名未命中静态表时回退到江戸川（03）。这是对原系统行为的保留：
    /// 未知場名多半不是用户本意，所以回退时输出警告日志。
    pub fn from_query(query: &RaceQuery) -> Self {
        let venue = match Venue::find(&query.venue_name) {
            Some(venue) => venue,
            None => {
                warn!(
                    "⚠️ 未知的場名: {}，回退到默认场 {}",
                    query.venue_name,
                    Venue::DEFAULT
                );
                Venue::DEFAULT
            }
        };

        Self {
            venue,
            venue_input: query.venue_name.clone(),
            race_number: query.race_number,
            race_day: query.race_day(),
        }
    }
}

impl Display for RaceCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} {}R {}]", self.venue, self.race_number, self.race_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn query(venue_name: &str) -> RaceQuery {
        RaceQuery::new(
            venue_name,
            NaiveDate::from_ymd_opt(2024, 8, 3).unwrap(),
            5,
        )
    }

    #[test]
    fn test_known_venue_resolves() {
        let ctx = RaceCtx::from_query(&query("平和島"));
        assert_eq!(ctx.venue, Venue::Heiwajima);
        assert_eq!(ctx.race_day, "20240803");
    }

    #[test]
    fn test_unknown_venue_falls_back_to_default() {
        let ctx = RaceCtx::from_query(&query("常滑"));
        assert_eq!(ctx.venue, Venue::DEFAULT);
        assert_eq!(ctx.venue_input, "常滑");
    }

    #[test]
    fn test_display_format() {
        let ctx = RaceCtx::from_query(&query("江戸川"));
        assert_eq!(format!("{}", ctx), "[江戸川 5R 20240803]");
    }
}
