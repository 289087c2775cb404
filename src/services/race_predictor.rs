//! 第1段階：预想生成 - 业务能力层
//!
//! 以出走表标记为素材发起一次「自由形式 step-by-step 预想」的 LLM 调用。
//! 提示词内嵌级别/成绩/ST 等领域说明、枠位优势衰减策略和 8 步输出模板。

use tracing::info;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{EntryMarkup, PredictionDraft, Venue};
use crate::services::llm_service::LlmService;

/// 第1段階采样温度（保留一定发散度）
const TEMPERATURE: f32 = 0.7;
/// 第1段階输出长度上限
const MAX_TOKENS: u32 = 2000;

/// 第1段階系统消息
const SYSTEM_PROMPT: &str = "あなたは、競艇予想の専門家です。\nステップバイステップで予想をしてください。";

/// 第1段階预想生成服务
pub struct RacePredictor {
    llm: LlmService,
    model_name: String,
    seat_weight: f64,
}

impl RacePredictor {
    /// 创建新的预想生成服务
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            llm: LlmService::new(config)?,
            model_name: config.stage1_model_name.clone(),
            seat_weight: config.seat_weight,
        })
    }

    /// 生成一场比赛的自由形式预想
    ///
    /// 任何传输/模型错误都转换为 `LlmError::GenerationFailed`，不做重试。
    pub async fn predict(
        &self,
        race_number: u8,
        venue: Venue,
        entry: &EntryMarkup,
    ) -> AppResult<PredictionDraft> {
        info!("{}R: 第1段階プロンプト実行中（予想生成）...", race_number);

        let user_prompt = self.build_prediction_prompt(race_number, venue, entry);

        let draft = self
            .llm
            .chat(&self.model_name, SYSTEM_PROMPT, &user_prompt, TEMPERATURE, MAX_TOKENS)
            .await
            .map_err(|e| AppError::generation_failed(&self.model_name, e))?;

        info!("{}R: 予想生成完了", race_number);

        Ok(PredictionDraft(draft))
    }

    /// 构建第1段階用户提示词
    ///
    /// 内容分四块：领域说明（级别/成绩/ST）、预想规则（枠位优势衰减、ST差加成）、
    /// 出走表标记、8 步输出模板。
    fn build_prediction_prompt(&self, race_number: u8, venue: Venue, entry: &EntryMarkup) -> String {
        let j_name = venue.name();
        format!(
            r#"あなたは、競艇予想の専門家です。
ステップバイステップで{j_name}競艇場の{race_number}Rの3連単の予想をしてください。

出走情報内容説明:
- 級別は、B2が最も弱く=>B1=>A2・A1の順に強くなります。
- 全国成績は、その選手の全ての競艇場でのこれまでの成績確率です。
- 当地成績は、その選手の{j_name}競艇場でのこれまでの成績確率です。
- モーターは、そのモーターのこれまでの成績確率です。
- ボートは、そのボートのこれまでの成績確率です。
- STは、スタートタイミングのことであり0に近いほどスタートが速い強い選手と言えます。
- 勝率は、その選手のこれまでの成績で1着になった確率です。
- 2連率は、その選手のこれまでの成績で1着、2着までに入った確率です。
- 3連率は、その選手のこれまでの成績で1着、2着、3着までに入った確率です。

ルール:
- 日本語で回答すること。
- 素早い回答よりも正確な回答を重視します。
- 級別と当地勝率とモーターの勝率、STを考慮して、専門家としての予想をすること。
- 枠の有利さは、1着にのみ考慮する。1が最も有利で=>2=>3=>4=>5=>6の順に有利さが{seat_weight}ずつ減少します。
- STの差が0.2以上大きい場合は、スタートの早い選手の有利さを増します。
- 出力フォーマットに従って回答すること。
- 予想理由を200文字程度で添える。

出走情報（HTMLテーブル）:
{entry_html}

出力フォーマット:
## ステップ1で確認した出走情報
[6選手の情報を出力]

## ステップ2で予想した1号艇が1着に来る確率
[確率を出力]

## ステップ3で予想した2連単
[2連単を出力]

## ステップ4で予想した3連単
[3連単を出力]

## ステップ5で予想した1着
[1着予想を出力]

## ステップ6で予想した2連単
[2連単を出力]

## ステップ7で予想した3連単
[3連単を出力]

## 予想理由:
[予想理由を出力]

## ステップ8で予想した各艇の1着に来る確率
[各艇の1着確率を出力]"#,
            j_name = j_name,
            race_number = race_number,
            seat_weight = self.seat_weight,
            entry_html = entry.as_str(),
        )
    }
}
