//! 第2段階：结果整形 - 业务能力层
//!
//! 把第1段階的自由形式预想整形为严格的 7 字段模板。
//! 本阶段存在的唯一理由是强约束「1号艇が1着」与「1号艇以外が1着」
//! 两个分支互不渗透——模型第一遍并不可靠地遵守这条语义约束，
//! 所以提示词里用三种说法重复同一条规则。

use tracing::info;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{PredictionDraft, PredictionFinal};
use crate::services::llm_service::LlmService;

/// 第2段階采样温度（抽取保真优先，压低发散）
const TEMPERATURE: f32 = 0.3;
/// 第2段階输出长度上限（小于第1段階）
const MAX_TOKENS: u32 = 1000;

/// 第2段階系统消息
const SYSTEM_PROMPT: &str = "あなたは、データ整形の専門家です。\n与えられた予想情報から必要な情報を抽出して、指定されたフォーマットで出力してください。";

/// 第2段階结果整形服务
pub struct ResultFormatter {
    llm: LlmService,
    model_name: String,
}

impl ResultFormatter {
    /// 创建新的结果整形服务
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            llm: LlmService::new(config)?,
            model_name: config.stage2_model_name.clone(),
        })
    }

    /// 把第1段階的预想文本整形为最终模板
    ///
    /// 任何传输/模型错误都转换为 `LlmError::FormattingFailed`，不做重试。
    pub async fn format(
        &self,
        race_number: u8,
        draft: &PredictionDraft,
    ) -> AppResult<PredictionFinal> {
        info!("{}R: 第2段階プロンプト実行中（結果整形）...", race_number);

        let user_prompt = self.build_format_prompt(draft);

        let formatted = self
            .llm
            .chat(&self.model_name, SYSTEM_PROMPT, &user_prompt, TEMPERATURE, MAX_TOKENS)
            .await
            .map_err(|e| AppError::formatting_failed(&self.model_name, e))?;

        info!("{}R: 結果整形完了", race_number);

        Ok(PredictionFinal(formatted))
    }

    /// 构建第2段階用户提示词
    ///
    /// 三部分：互斥规则（同一条约束的三种表述）、7 字段输出模板、
    /// 第1段階预想全文（原样嵌入）。
    fn build_format_prompt(&self, draft: &PredictionDraft) -> String {
        format!(
            r#"下記の予想情報から出力フォーマットを参考に情報を全て抜き出して、出力フォーマットの形式で出力してください。

重要なルール:
- 「1号艇が1着に来る」セクションと「1号艇以外の選手が1着に来る」セクションは、完全に異なります。
- 「1号艇以外の選手の1着に来る3連単」には、絶対に1号艇(1)を含めてはいけません。
- 例：「2-3-4」「3-2-5」「4-3-6」など、最初の数字が2以上で始まる組み合わせのみを出力します。
- 「1-2-4」や「1-2-5」のように1が含まれている組み合わせは出力しないでください。
- ステップ6とステップ7は、1号艇が1着ではない場合の対抗馬の予想です。

出力フォーマット:
◆ 1号艇が1着に来る確率
{{##ステップ2で予想した1号艇が1着に来る確率}}

◆ 1号艇が1着に来る2連単
{{##ステップ3で予想した2連単}}

◆ 1号艇が1着に来る3連単
{{##ステップ4で予想した3連単}}

◆ 1号艇以外の選手の1着に来る2連単
{{##ステップ6で予想した2連単（1号艇が1着ではない場合の2連単。1は含めない）}}

◆ 1号艇以外の選手の1着に来る3連単
{{##ステップ7で予想した3連単（1号艇が1着ではない場合の3連単。最初の数字が2以上のみ。絶対に1を含めない）}}

◆ 予想理由
{{##予想理由}}

◆ 各艇の1着確率
{{##ステップ8で予想した各艇の1着に来る確率}}

予想情報:
{draft}"#,
            draft = draft.as_str(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_formatter() -> ResultFormatter {
        let config = Config {
            llm_api_key: "test-key".to_string(),
            ..Config::default()
        };
        ResultFormatter::new(&config).unwrap()
    }

    /// 含 1 号艇领头 3 连单的典型第1段階输出
    fn sample_draft() -> PredictionDraft {
        PredictionDraft(
            "## ステップ2で予想した1号艇が1着に来る確率\n65%\n\n\
             ## ステップ4で予想した3連単\n1-2-3\n\n\
             ## ステップ7で予想した3連単\n2-3-4\n\n\
             ## 予想理由:\n1号艇のSTが最も速く当地勝率も高い。"
                .to_string(),
        )
    }

    #[test]
    fn test_prompt_embeds_draft_verbatim() {
        let formatter = test_formatter();
        let draft = sample_draft();

        let prompt = formatter.build_format_prompt(&draft);

        assert!(prompt.contains(draft.as_str()));
    }

    #[test]
    fn test_prompt_states_disjointness_rule_redundantly() {
        let formatter = test_formatter();
        let prompt = formatter.build_format_prompt(&sample_draft());

        // 同一条互斥约束的三种表述都必须在场
        assert!(prompt.contains("絶対に1号艇(1)を含めてはいけません"));
        assert!(prompt.contains("最初の数字が2以上で始まる組み合わせのみ"));
        assert!(prompt.contains("1が含まれている組み合わせは出力しないでください"));
        assert!(prompt.contains("ステップ6とステップ7は、1号艇が1着ではない場合"));
    }

    #[test]
    fn test_prompt_template_has_seven_fields() {
        let formatter = test_formatter();
        let prompt = formatter.build_format_prompt(&sample_draft());

        assert_eq!(prompt.matches('◆').count(), 7);
    }
}
