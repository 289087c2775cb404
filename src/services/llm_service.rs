//! LLM 服务 - 业务能力层
//!
//! 只负责「向 LLM 发送一次对话请求」这一能力，不关心提示词内容与流程
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务

use anyhow::Result;
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult, ConfigError};

/// LLM 服务
///
/// 职责：
/// - 构建 system/user 消息对并发起一次 chat completion
/// - 提取首个 choice 的消息内容
/// - 不持有任何阶段语义（温度、模型名由调用方传入）
pub struct LlmService {
    client: Client<OpenAIConfig>,
}

impl LlmService {
    /// 创建新的 LLM 服务
    ///
    /// API key 为空时直接返回配置错误，避免流水线跑到一半才失败。
    pub fn new(config: &Config) -> AppResult<Self> {
        if config.llm_api_key.is_empty() {
            return Err(AppError::Config(ConfigError::EnvVarNotFound {
                var_name: "OPENAI_API_KEY".to_string(),
            }));
        }

        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        Ok(Self {
            client: Client::with_config(openai_config),
        })
    }

    /// 发送一次对话请求
    ///
    /// # 参数
    /// - `model`: 模型名
    /// - `system_message`: 系统消息
    /// - `user_message`: 用户消息
    /// - `temperature`: 采样温度
    /// - `max_tokens`: 输出长度上限
    ///
    /// # 返回
    /// 返回首个 choice 的消息内容（字符串）
    pub async fn chat(
        &self,
        model: &str,
        system_message: &str,
        user_message: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String> {
        debug!("调用 LLM API，模型: {}", model);
        debug!("用户消息长度: {} 字符", user_message.chars().count());

        let system_msg = ChatCompletionRequestSystemMessageArgs::default()
            .content(system_message)
            .build()?;
        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()?;

        let messages = vec![
            ChatCompletionRequestMessage::System(system_msg),
            ChatCompletionRequestMessage::User(user_msg),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .temperature(temperature)
            .max_tokens(max_tokens)
            .build()?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            anyhow::anyhow!("LLM API 调用失败: {}", e)
        })?;

        debug!("LLM API 调用成功");

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| anyhow::anyhow!("LLM 返回内容为空"))?;

        Ok(content.trim().to_string())
    }
}
