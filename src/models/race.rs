//! 预测请求模型

use chrono::{Duration, Local, NaiveDate};

use crate::error::{AppError, AppResult, ValidationError};

/// 一次预测请求（場名 + 日期 + 场次）
///
/// 构造后不可变；整个请求周期内作为只读值传递。
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RaceQuery {
    /// 場名（自由文本，经静态表解析）
    pub venue_name: String,
    /// 比赛日期
    pub date: NaiveDate,
    /// 场次（1-12R）
    pub race_number: u8,
}

impl RaceQuery {
    /// 创建新的预测请求
    pub fn new(venue_name: impl Into<String>, date: NaiveDate, race_number: u8) -> Self {
        Self {
            venue_name: venue_name.into(),
            date,
            race_number,
        }
    }

    /// 解析 YYYY-MM-DD 形式的日期字符串并构造请求
    pub fn parse(venue_name: &str, date_str: &str, race_number: u8) -> AppResult<Self> {
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
            AppError::Validation(ValidationError::DateParseFailed {
                input: date_str.to_string(),
            })
        })?;
        Ok(Self::new(venue_name, date, race_number))
    }

    /// 校验请求参数
    ///
    /// - 场次必须在 1-12 之间
    /// - 日期最多只能到明天（出走表只公开到次日）
    ///
    /// 校验必须发生在任何网络调用之前。
    pub fn validate(&self, today: NaiveDate) -> AppResult<()> {
        if self.race_number < 1 || self.race_number > 12 {
            return Err(AppError::Validation(ValidationError::RaceNumberOutOfRange {
                value: self.race_number as u32,
            }));
        }

        let limit = today + Duration::days(1);
        if self.date > limit {
            return Err(AppError::Validation(ValidationError::DateTooFar {
                date: self.date,
                limit,
            }));
        }

        Ok(())
    }

    /// 以当前本地日期校验
    pub fn validate_now(&self) -> AppResult<()> {
        self.validate(Local::now().date_naive())
    }

    /// 返回紧凑形式的比赛日期（YYYYMMDD）
    pub fn race_day(&self) -> String {
        self.date.format("%Y%m%d").to_string()
    }
}
