//! 预测处理流程 - 流程层
//!
//! 核心职责：定义「一场比赛」的完整处理流程
//!
//! 流程顺序：
//! 1. 参数校验（场次、日期）——任何网络调用之前
//! 2. 場名解析（未命中回退默认场）
//! 3. 抓取出走表 → 第1段階（予想生成）→ 固定等待 → 第2段階（結果整形）
//!
//! 任何一步失败都会短路后续步骤；各步骤之间没有共享可变状态，
//! 同一个流程实例可以安全地跨请求复用。

use std::time::Duration;

use tokio::time::sleep;
use tracing::info;

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{PredictionFinal, RaceQuery};
use crate::services::{EntryFetcher, RacePredictor, ResultFormatter};
use crate::utils::logging;
use crate::workflow::race_ctx::RaceCtx;

/// 预测处理流程
///
/// - 编排完整的单场预测流程
/// - 不持有任何请求状态
/// - 只依赖业务能力（services）
pub struct PredictionFlow {
    fetcher: EntryFetcher,
    predictor: RacePredictor,
    formatter: ResultFormatter,
    stage_pause: Duration,
}

impl PredictionFlow {
    /// 创建新的预测流程
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            fetcher: EntryFetcher::new(config)?,
            predictor: RacePredictor::new(config)?,
            formatter: ResultFormatter::new(config)?,
            stage_pause: Duration::from_secs(config.stage_pause_secs),
        })
    }

    /// 运行一场比赛的完整预测流程
    ///
    /// 每次请求最多一次抓取、两次模型调用，严格顺序执行。
    pub async fn run(&self, query: &RaceQuery) -> AppResult<PredictionFinal> {
        // 校验必须发生在任何网络调用之前
        query.validate_now()?;

        let ctx = RaceCtx::from_query(query);
        info!("{} 🔍 开始抓取出走表...（入力場名: {}）", ctx, ctx.venue_input);

        let entry = self
            .fetcher
            .fetch(ctx.race_number, ctx.venue, &ctx.race_day)
            .await?;

        // 第1段階：予想生成
        let draft = self
            .predictor
            .predict(ctx.race_number, ctx.venue, &entry)
            .await?;

        logging::log_stage_result(
            &format!("{}R 第1段階結果", ctx.race_number),
            draft.as_str(),
        );

        // 两次模型调用之间固定等待，缓和接口频率压力
        sleep(self.stage_pause).await;

        // 第2段階：結果整形
        let formatted = self.formatter.format(ctx.race_number, &draft).await?;

        info!("{} ✓ 预测流程完成", ctx);

        Ok(formatted)
    }
}
