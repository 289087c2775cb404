//! # Kyotei Predict
//!
//! 一个抓取竞艇出走表并用两段 LLM 提示词生成 3 连单预想的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的三层架构：
//!
//! ### ① 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单场比赛
//! - `EntryFetcher` - 出走表抓取与节点抽取能力
//! - `RacePredictor` - 第1段階（予想生成）LLM 能力
//! - `ResultFormatter` - 第2段階（結果整形）LLM 能力
//!
//! ### ② 流程层（Workflow）
//! - `workflow/` - 定义"一场比赛"的完整处理流程
//! - `RaceCtx` - 上下文封装（場 + 日期 + 场次）
//! - `PredictionFlow` - 流程编排（校验 → 抓取 → 第1段階 → 等待 → 第2段階）
//! - `report` - 面向调用方的失败消息与结果负载
//!
//! ### ③ 模型与基础设施
//! - `models/` - 请求作用域内的不可变实体（RaceQuery / Venue / 各阶段文本）
//! - `config` / `error` / `utils` - 配置、错误分类与日志工具
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{EntryMarkup, PredictionDraft, PredictionFinal, RaceQuery, Venue};
pub use services::{EntryFetcher, RacePredictor, ResultFormatter};
pub use workflow::{PredictionFlow, RaceCtx};
