//! 推理引擎抽象
//! 引擎以 trait 形式注入，可用本地 llama-server 后端或测试替身实现

use anyhow::{Error, Result};
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::time::Duration;

use crate::models::AiModel;

/// 推理引擎接口
/// 实现方只负责给定提示词生成文本，路由与回退由上层分发器处理
pub trait InferenceEngine: Send + Sync {
    /// 生成补全文本
    fn generate(&self, prompt: &str, max_tokens: u32) -> BoxFuture<'_, Result<String>>;

    /// 切换底层模型，失败或不支持时返回 false
    fn switch_model(&self, _model: AiModel) -> BoxFuture<'_, bool> {
        Box::pin(async { false })
    }

    /// 后端可用的模型清单，默认内置三款
    fn available_models(&self) -> Vec<AiModel> {
        vec![AiModel::Gemma3_1b, AiModel::Qwen25_05b, AiModel::TinyLlama]
    }

    /// 后端当前是否可服务
    fn is_healthy(&self) -> BoxFuture<'_, bool>;
}

/// llama-server 后端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub host: String,
    pub port: u16,
    pub temperature: f32,
    pub repeat_penalty: f32,
    /// 启动时等待后端就绪的秒数
    pub startup_wait_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            temperature: 0.7,
            repeat_penalty: 1.1,
            startup_wait_secs: 60,
        }
    }
}

impl EngineConfig {
    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Completion 请求
#[derive(Debug, Serialize)]
struct CompletionRequest {
    prompt: String,
    n_predict: u32,
    temperature: f32,
    stop: Vec<String>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    cache_prompt: Option<bool>,
}

/// Completion 响应
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    content: String,
}

/// 基于本地 llama-server HTTP 接口的推理引擎
#[derive(Clone)]
pub struct LlamaServerEngine {
    config: EngineConfig,
    http_client: Arc<reqwest::Client>,
}

impl LlamaServerEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            http_client: Arc::new(reqwest::Client::new()),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    async fn check_health(&self) -> bool {
        let url = format!("{}/health", self.config.server_url());
        match self.http_client.get(&url).send().await {
            Ok(resp) => resp.status() == 200,
            Err(_) => false,
        }
    }

    /// 等待后端就绪，超时报错
    pub async fn wait_for_healthy(&self) -> Result<()> {
        let start = std::time::Instant::now();
        let check_interval = Duration::from_millis(500);
        let max_wait = Duration::from_secs(self.config.startup_wait_secs);

        while start.elapsed() < max_wait {
            if self.check_health().await {
                return Ok(());
            }
            tokio::time::sleep(check_interval).await;
        }

        Err(Error::msg("engine health check timeout"))
    }

    async fn complete(&self, prompt: String, max_tokens: u32) -> Result<String> {
        let url = format!("{}/completion", self.config.server_url());

        let request = CompletionRequest {
            prompt,
            n_predict: max_tokens,
            temperature: self.config.temperature,
            stop: vec!["</s>".to_string(), "<|im_end|>".to_string()],
            stream: false,
            cache_prompt: Some(true),
        };

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await?
            .json::<CompletionResponse>()
            .await?;

        Ok(response.content)
    }
}

impl InferenceEngine for LlamaServerEngine {
    fn generate(&self, prompt: &str, max_tokens: u32) -> BoxFuture<'_, Result<String>> {
        let prompt = prompt.to_string();
        Box::pin(async move { self.complete(prompt, max_tokens).await })
    }

    fn is_healthy(&self) -> BoxFuture<'_, bool> {
        Box::pin(self.check_health())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::Mutex;

    /// 测试用引擎替身，记录收到的提示词并返回预设文本
    pub struct StubEngine {
        pub reply: String,
        pub healthy: bool,
        pub fail: bool,
        pub prompts: Mutex<Vec<String>>,
    }

    impl StubEngine {
        pub fn replying(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                healthy: true,
                fail: false,
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn failing() -> Self {
            Self {
                reply: String::new(),
                healthy: true,
                fail: true,
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    impl InferenceEngine for StubEngine {
        fn generate(&self, prompt: &str, _max_tokens: u32) -> BoxFuture<'_, Result<String>> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            let reply = self.reply.clone();
            let fail = self.fail;
            Box::pin(async move {
                if fail {
                    Err(Error::msg("engine failure"))
                } else {
                    Ok(reply)
                }
            })
        }

        fn is_healthy(&self) -> BoxFuture<'_, bool> {
            let healthy = self.healthy;
            Box::pin(async move { healthy })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_url() {
        let config = EngineConfig::default();
        assert_eq!(config.server_url(), "http://127.0.0.1:8080");

        let config = EngineConfig {
            port: 9090,
            ..Default::default()
        };
        assert_eq!(config.server_url(), "http://127.0.0.1:9090");
    }

    #[tokio::test]
    async fn test_stub_engine_records_prompts() {
        let engine = test_support::StubEngine::replying("hello from engine");
        let reply = engine.generate("Explain gravity", 512).await.unwrap();
        assert_eq!(reply, "hello from engine");
        assert_eq!(engine.prompts.lock().unwrap().as_slice(), ["Explain gravity"]);
    }

    #[tokio::test]
    async fn test_default_switch_model_unsupported() {
        let engine = test_support::StubEngine::replying("x");
        assert!(!engine.switch_model(AiModel::Gemma3_1b).await);
    }
}
