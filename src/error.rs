use chrono::NaiveDate;
use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 出走表抓取相关错误
    Fetch(FetchError),
    /// LLM 调用错误
    Llm(LlmError),
    /// 请求参数校验错误
    Validation(ValidationError),
    /// 配置错误
    Config(ConfigError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Fetch(e) => write!(f, "抓取错误: {}", e),
            AppError::Llm(e) => write!(f, "LLM错误: {}", e),
            AppError::Validation(e) => write!(f, "校验错误: {}", e),
            AppError::Config(e) => write!(f, "配置错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Fetch(e) => Some(e),
            AppError::Llm(e) => Some(e),
            AppError::Validation(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 出走表抓取错误
#[derive(Debug)]
pub enum FetchError {
    /// 网络请求失败（含客户端超时）
    RequestFailed {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 页面返回非 200 状态码
    Unavailable { url: String, status: u16 },
    /// 页面中不存在出走表节点（该场当日未开催的正常信号，不是 bug）
    NotFound { url: String },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::RequestFailed { url, source } => {
                write!(f, "抓取请求失败 ({}): {}", url, source)
            }
            FetchError::Unavailable { url, status } => {
                write!(f, "出走表页面返回异常状态码 ({}): {}", url, status)
            }
            FetchError::NotFound { url } => {
                write!(f, "页面中不存在出走表节点: {}", url)
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::RequestFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// LLM 调用错误
#[derive(Debug)]
pub enum LlmError {
    /// 第1段階（预想生成）调用失败
    GenerationFailed {
        model: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 第2段階（结果整形）调用失败
    FormattingFailed {
        model: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmError::GenerationFailed { model, source } => {
                write!(f, "第1段階预想生成失败 (模型: {}): {}", model, source)
            }
            LlmError::FormattingFailed { model, source } => {
                write!(f, "第2段階结果整形失败 (模型: {}): {}", model, source)
            }
        }
    }
}

impl std::error::Error for LlmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LlmError::GenerationFailed { source, .. }
            | LlmError::FormattingFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 请求参数校验错误
#[derive(Debug)]
pub enum ValidationError {
    /// 日期超出可选范围（最晚只能选到明天）
    DateTooFar { date: NaiveDate, limit: NaiveDate },
    /// 日期字符串解析失败
    DateParseFailed { input: String },
    /// 场次超出范围
    RaceNumberOutOfRange { value: u32 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DateTooFar { date, limit } => {
                write!(f, "日期超出可选范围 (选择: {}, 最晚: {})", date, limit)
            }
            ValidationError::DateParseFailed { input } => {
                write!(f, "日期格式不正确: {}", input)
            }
            ValidationError::RaceNumberOutOfRange { value } => {
                write!(f, "场次 {} 超出范围 [1, 12]", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// 配置错误
#[derive(Debug)]
pub enum ConfigError {
    /// 环境变量解析失败
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 环境变量不存在
    EnvVarNotFound { var_name: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EnvVarParseFailed {
                var_name,
                value,
                expected_type,
            } => {
                write!(
                    f,
                    "环境变量 {} 解析失败: 值 '{}' 无法转换为 {}",
                    var_name, value, expected_type
                )
            }
            ConfigError::EnvVarNotFound { var_name } => {
                write!(f, "环境变量 {} 不存在", var_name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建网络请求失败错误
    pub fn request_failed(
        url: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        AppError::Fetch(FetchError::RequestFailed {
            url: url.into(),
            source: source.into(),
        })
    }

    /// 创建页面状态码异常错误
    pub fn unavailable(url: impl Into<String>, status: u16) -> Self {
        AppError::Fetch(FetchError::Unavailable {
            url: url.into(),
            status,
        })
    }

    /// 创建出走表节点缺失错误
    pub fn not_found(url: impl Into<String>) -> Self {
        AppError::Fetch(FetchError::NotFound { url: url.into() })
    }

    /// 创建第1段階预想生成失败错误
    pub fn generation_failed(
        model: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        AppError::Llm(LlmError::GenerationFailed {
            model: model.into(),
            source: source.into(),
        })
    }

    /// 创建第2段階结果整形失败错误
    pub fn formatting_failed(
        model: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        AppError::Llm(LlmError::FormattingFailed {
            model: model.into(),
            source: source.into(),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
