//! 预测流水线中流转的文本实体
//!
//! 三者都是请求作用域内的一次性值：不解析、不缓存、不落盘。
//! 行列语义的正确性完全委托给模型，本地不做结构校验。

use std::fmt;

/// 出走表的序列化标记（fetcher 产出，第1段階消费一次）
#[derive(Debug, Clone)]
pub struct EntryMarkup(pub String);

impl EntryMarkup {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 第1段階产出的自由形式预想文本
///
/// 按约定含 8 个「ステップ」小节，但不做解析，原样传给第2段階。
#[derive(Debug, Clone)]
pub struct PredictionDraft(pub String);

impl PredictionDraft {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 第2段階产出的最终整形文本
///
/// 期望（但不保证）符合 7 字段模板；同样不做本地校验。
#[derive(Debug, Clone)]
pub struct PredictionFinal(pub String);

impl PredictionFinal {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PredictionFinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
