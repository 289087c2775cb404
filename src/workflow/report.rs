//! 面向调用方的结果层
//!
//! 把流水线的成功/失败转换为利用者可读的日文消息与结构化负载。
//!
//! 注意：「当日未开催」（NotFound）与「抓取异常」（Unavailable）被
//! 刻意合并为同一条提示——这是对原系统行为的保留，两者对最终用户
//! 呈现同一句「開催のレースはありません」外加诊断链接。

use serde_json::{json, Value as JsonValue};

use crate::error::{AppError, AppResult, FetchError, LlmError, ValidationError};
use crate::models::{PredictionFinal, RaceQuery};

/// 把一个失败渲染为利用者可读的日文消息
///
/// NotFound / Unavailable 携带的 URL 即出走表查询地址本身，
/// 其中内嵌了场代码（jcd）与紧凑日期（hd），可直接用于人工排查。
pub fn failure_message(query: &RaceQuery, err: &AppError) -> String {
    match err {
        // 未开催与抓取异常合并为同一条提示（沿用原系统行为）
        AppError::Fetch(FetchError::NotFound { url })
        | AppError::Fetch(FetchError::Unavailable { url, .. }) => format!(
            "{} {}競艇場の開催のレースはありません。\n詳細は以下をご確認ください\nURL：{}",
            query.date, query.venue_name, url
        ),
        AppError::Fetch(FetchError::RequestFailed { url, .. }) => {
            format!("出走表ページへの接続に失敗しました。\nURL：{}", url)
        }
        AppError::Validation(e) => validation_message(e),
        AppError::Llm(LlmError::GenerationFailed { .. }) => "予想生成に失敗しました".to_string(),
        AppError::Llm(LlmError::FormattingFailed { .. }) => "結果の整形に失敗しました".to_string(),
        other => format!("エラーが発生しました: {}", other),
    }
}

fn validation_message(err: &ValidationError) -> String {
    match err {
        ValidationError::DateTooFar { .. } => "明日までの日付のみ選択可能です".to_string(),
        ValidationError::DateParseFailed { .. } => "日付形式が不正です".to_string(),
        ValidationError::RaceNumberOutOfRange { .. } => {
            "レース番号は1〜12の範囲で指定してください".to_string()
        }
    }
}

/// 构造调用方最终收到的结构化负载
///
/// 成功：`{status, message, output}`；失败：`{status, message}`。
pub fn outcome(result: &AppResult<PredictionFinal>, query: &RaceQuery) -> JsonValue {
    match result {
        Ok(prediction) => json!({
            "status": "success",
            "message": "予想生成が完了しました",
            "output": prediction.as_str(),
        }),
        Err(e) => json!({
            "status": "error",
            "message": failure_message(query, e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn query() -> RaceQuery {
        RaceQuery::new(
            "江戸川",
            NaiveDate::from_ymd_opt(2024, 8, 3).unwrap(),
            5,
        )
    }

    const RACELIST_URL: &str =
        "https://www.boatrace.jp/owpc/pc/race/racelist?rno=5&jcd=03&hd=20240803";

    #[test]
    fn test_not_found_message_embeds_diagnostic_url() {
        let err = AppError::not_found(RACELIST_URL);
        let message = failure_message(&query(), &err);

        assert!(message.contains("開催のレースはありません"));
        assert!(message.contains("江戸川"));
        // 诊断链接必须内嵌场代码与紧凑日期
        assert!(message.contains("jcd=03"));
        assert!(message.contains("hd=20240803"));
    }

    #[test]
    fn test_unavailable_renders_same_no_race_message() {
        // 未开催与抓取异常刻意合并为同一条提示
        let not_found = failure_message(&query(), &AppError::not_found(RACELIST_URL));
        let unavailable = failure_message(&query(), &AppError::unavailable(RACELIST_URL, 503));

        assert_eq!(not_found, unavailable);
    }

    #[test]
    fn test_request_failed_is_distinguishable() {
        let err = AppError::request_failed(RACELIST_URL, std::io::Error::other("timeout"));
        let message = failure_message(&query(), &err);

        assert!(message.contains("接続に失敗しました"));
        assert!(!message.contains("開催のレースはありません"));
    }

    #[test]
    fn test_validation_messages() {
        let too_far = AppError::Validation(ValidationError::DateTooFar {
            date: NaiveDate::from_ymd_opt(2024, 8, 5).unwrap(),
            limit: NaiveDate::from_ymd_opt(2024, 8, 4).unwrap(),
        });
        assert_eq!(
            failure_message(&query(), &too_far),
            "明日までの日付のみ選択可能です"
        );

        let bad_date = AppError::Validation(ValidationError::DateParseFailed {
            input: "2024/08/03".to_string(),
        });
        assert_eq!(failure_message(&query(), &bad_date), "日付形式が不正です");
    }

    #[test]
    fn test_outcome_success_payload() {
        let result = Ok(PredictionFinal("◆ 1号艇が1着に来る確率\n65%".to_string()));
        let payload = outcome(&result, &query());

        assert_eq!(payload["status"], "success");
        assert_eq!(payload["output"], "◆ 1号艇が1着に来る確率\n65%");
    }

    #[test]
    fn test_outcome_error_payload() {
        let result = Err(AppError::not_found(RACELIST_URL));
        let payload = outcome(&result, &query());

        assert_eq!(payload["status"], "error");
        assert!(payload["message"]
            .as_str()
            .unwrap()
            .contains("開催のレースはありません"));
        assert!(payload.get("output").is_none());
    }
}
