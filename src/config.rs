/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 出走表页面的基础URL
    pub entry_list_url: String,
    /// 页面抓取超时（秒）
    pub fetch_timeout_secs: u64,
    /// 两个 LLM 阶段之间的固定等待时间（秒）
    pub stage_pause_secs: u64,
    /// 枠位优势的逐位衰减系数
    pub seat_weight: f64,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    /// 第1段階（预想生成）使用的模型
    pub stage1_model_name: String,
    /// 第2段階（结果整形）使用的模型
    pub stage2_model_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entry_list_url: "https://www.boatrace.jp/owpc/pc/race/racelist".to_string(),
            fetch_timeout_secs: 10,
            stage_pause_secs: 2,
            seat_weight: 0.05,
            llm_api_key: String::new(),
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            stage1_model_name: "gpt-4o-mini".to_string(),
            stage2_model_name: "gpt-4o-mini".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            entry_list_url: std::env::var("ENTRY_LIST_URL").unwrap_or(default.entry_list_url),
            fetch_timeout_secs: std::env::var("FETCH_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.fetch_timeout_secs),
            stage_pause_secs: std::env::var("STAGE_PAUSE_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.stage_pause_secs),
            seat_weight: std::env::var("SEAT_WEIGHT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.seat_weight),
            llm_api_key: std::env::var("OPENAI_API_KEY").unwrap_or(default.llm_api_key),
            llm_api_base_url: std::env::var("OPENAI_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            stage1_model_name: std::env::var("STAGE1_MODEL_NAME").unwrap_or(default.stage1_model_name),
            stage2_model_name: std::env::var("STAGE2_MODEL_NAME").unwrap_or(default.stage2_model_name),
        }
    }
}
