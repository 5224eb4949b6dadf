//! 推理分发服务
//! 引擎可用时优先调用外部推理，任何失败一律回落到本地确定性生成，不重试
//! 完整文本到手后按词重发并加固定延迟，模拟增量生成

use async_stream::stream;
use futures::stream::BoxStream;
use regex::Regex;
use std::sync::Arc;
use tokio::time::{sleep, Duration};

use crate::models::{AiModel, Difficulty, Quiz, QuizQuestion};
use crate::services::generator::{ContentGenerator, QUIZ_DEFAULT_COUNT};
use crate::services::inference::InferenceEngine;

/// 各调用点的 token 预算
const CHAT_TOKEN_BUDGET: u32 = 512;
const KIDS_TOKEN_BUDGET: u32 = 512;
const CONTENT_TOKEN_BUDGET: u32 = 1024;

/// 流式重发的逐词延迟
const ENGINE_STREAM_DELAY: Duration = Duration::from_millis(50);
const FALLBACK_STREAM_DELAY: Duration = Duration::from_millis(30);

/// 推理分发服务
/// 引擎可用性在构造时探测一次，整个会话内缓存为布尔值
pub struct AiService {
    engine: Option<Arc<dyn InferenceEngine>>,
    engine_available: bool,
    generator: ContentGenerator,
}

impl AiService {
    /// 创建服务并探测一次引擎健康状态
    pub async fn new(engine: Option<Arc<dyn InferenceEngine>>) -> Self {
        let engine_available = match &engine {
            Some(engine) => {
                let healthy = engine.is_healthy().await;
                if healthy {
                    log::info!("inference engine available, engine path enabled");
                } else {
                    log::warn!("inference engine unhealthy, using fallback mode");
                }
                healthy
            }
            None => {
                log::info!("no inference engine configured, using fallback mode");
                false
            }
        };

        Self {
            engine,
            engine_available,
            generator: ContentGenerator::new(),
        }
    }

    /// 无引擎的纯本地服务
    pub async fn fallback_only() -> Self {
        Self::new(None).await
    }

    pub fn is_engine_available(&self) -> bool {
        self.engine_available
    }

    pub fn status(&self) -> String {
        if self.engine_available {
            "Inference engine: active".to_string()
        } else {
            "Inference engine: fallback mode".to_string()
        }
    }

    /// 可用模型列表，回退模式下给出内置模型名
    pub fn available_models(&self) -> Vec<String> {
        let models = match self.active_engine() {
            Some(engine) => engine.available_models(),
            None => vec![AiModel::Gemma3_1b, AiModel::Qwen25_05b, AiModel::TinyLlama],
        };
        models.iter().map(|m| m.display_name().to_string()).collect()
    }

    /// 切换底层模型，回退模式下不支持
    pub async fn switch_model(&self, model: AiModel) -> bool {
        match self.active_engine() {
            Some(engine) => {
                let switched = engine.switch_model(model).await;
                if switched {
                    log::info!("switched engine model to {}", model.display_name());
                } else {
                    log::warn!("engine refused model switch to {}", model.display_name());
                }
                switched
            }
            None => {
                log::debug!("model switching unavailable in fallback mode");
                false
            }
        }
    }

    fn active_engine(&self) -> Option<&Arc<dyn InferenceEngine>> {
        if self.engine_available {
            self.engine.as_ref()
        } else {
            None
        }
    }

    // ==================== 聊天 ====================

    /// 流式聊天回复
    /// 词序固定从左到右，消费方只能通过丢弃流来取消
    pub fn chat(&self, prompt: &str) -> BoxStream<'static, String> {
        let prompt = prompt.to_string();
        let engine = self.active_engine().cloned();

        Box::pin(stream! {
            let mut delay = FALLBACK_STREAM_DELAY;
            let text = match &engine {
                Some(engine) => match engine.generate(&prompt, CHAT_TOKEN_BUDGET).await {
                    Ok(reply) if !reply.trim().is_empty() => {
                        delay = ENGINE_STREAM_DELAY;
                        reply
                    }
                    Ok(_) => {
                        log::warn!("engine chat returned empty reply, using fallback");
                        ContentGenerator::new().chat_response(&prompt)
                    }
                    Err(e) => {
                        log::warn!("engine chat failed, using fallback: {}", e);
                        ContentGenerator::new().chat_response(&prompt)
                    }
                },
                None => ContentGenerator::new().chat_response(&prompt),
            };

            if text.trim().is_empty() {
                // 两条路径都拿不到内容属于意外情况，以致歉消息收尾而不是报错
                yield "I apologize, but I'm having trouble processing your request.".to_string();
                return;
            }

            for word in text.split(' ') {
                yield format!("{} ", word);
                sleep(delay).await;
            }
        })
    }

    // ==================== 测验 ====================

    /// 生成测验，引擎输出解析失败时回落到本地题库
    pub async fn generate_quiz(&self, topic: &str, count: usize) -> Quiz {
        if let Some(engine) = self.active_engine() {
            let prompt = format!(
                "Generate exactly {} multiple choice questions about \"{}\".\n\
                 Format: 7 Easy questions, 7 Medium questions, 6 Hard questions.\n\
                 Number each question. Each question should have 4 options (A, B, C, D)\n\
                 followed by a line \"Answer: <letter>\".\n\
                 Make questions educational and appropriate for students.",
                count, topic
            );
            match engine.generate(&prompt, CONTENT_TOKEN_BUDGET).await {
                Ok(raw) => {
                    if let Some(quiz) = parse_engine_quiz(&raw, topic, count) {
                        return quiz;
                    }
                    log::warn!("engine quiz output not parseable, using fallback");
                }
                Err(e) => log::warn!("engine quiz generation failed, using fallback: {}", e),
            }
        }

        self.generator.generate_quiz(topic, count)
    }

    // ==================== 讲解 ====================

    pub async fn explain_topic(&self, topic: &str) -> String {
        if let Some(engine) = self.active_engine() {
            let prompt = format!(
                "Provide a comprehensive, educational explanation of \"{}\".\n\
                 Include a clear definition, key concepts, real-world examples and learning tips.\n\
                 Format the response in a structured, easy-to-understand way.",
                topic
            );
            match engine.generate(&prompt, CONTENT_TOKEN_BUDGET).await {
                Ok(text) if !text.trim().is_empty() => return text,
                Ok(_) => log::warn!("engine explanation empty, using fallback"),
                Err(e) => log::warn!("engine explanation failed, using fallback: {}", e),
            }
        }

        self.generator.explain_topic(topic)
    }

    // ==================== 练习题 ====================

    pub async fn generate_practice(&self, topic: &str) -> Vec<crate::models::PracticeProblem> {
        if let Some(engine) = self.active_engine() {
            let prompt = format!(
                "Generate 5 practice problems about \"{}\":\n\
                 - 3 multiple choice questions with 4 options each\n\
                 - 2 open-ended text input questions\n\
                 Include detailed solutions and explanations.",
                topic
            );
            // 引擎的自由文本无法可靠还原成结构化练习题，仅记录调用结果
            match engine.generate(&prompt, CONTENT_TOKEN_BUDGET).await {
                Ok(_) => log::debug!("engine practice reply received, using structured bank"),
                Err(e) => log::warn!("engine practice generation failed: {}", e),
            }
        }

        self.generator.generate_practice(topic)
    }

    // ==================== 少儿内容 ====================

    pub async fn generate_kids_content(&self, content_type: &str) -> String {
        if let Some(engine) = self.active_engine() {
            let prompt = format!(
                "Generate fun, educational content about \"{}\" for children aged 3-5.\n\
                 Use simple language and make it engaging and interactive.",
                content_type
            );
            match engine.generate(&prompt, KIDS_TOKEN_BUDGET).await {
                Ok(text) if !text.trim().is_empty() => return text,
                Ok(_) => log::warn!("engine kids content empty, using fallback"),
                Err(e) => log::warn!("engine kids content failed, using fallback: {}", e),
            }
        }

        self.generator.generate_kids_content(content_type)
    }
}

/// 解析引擎返回的测验文本
/// 期望编号题干、A-D 四个选项和 Answer 行，不满足即放弃整份输出
fn parse_engine_quiz(raw: &str, topic: &str, count: usize) -> Option<Quiz> {
    let question_re = Regex::new(r"^\s*\d+[.)]\s*(.+)$").unwrap();
    let option_re = Regex::new(r"^\s*([A-D])[.)]\s*(.+)$").unwrap();
    let answer_re = Regex::new(r"^\s*Answer:\s*([A-D])\s*$").unwrap();

    struct Partial {
        question: String,
        options: Vec<String>,
        answer: Option<usize>,
    }

    let mut parsed: Vec<Partial> = Vec::new();
    for line in raw.lines() {
        if let Some(caps) = question_re.captures(line) {
            parsed.push(Partial {
                question: caps[1].trim().to_string(),
                options: Vec::new(),
                answer: None,
            });
        } else if let Some(caps) = option_re.captures(line) {
            if let Some(current) = parsed.last_mut() {
                let letter = caps[1].chars().next().unwrap();
                // 选项必须按 A-D 顺序出现
                if (letter as usize - 'A' as usize) == current.options.len() {
                    current.options.push(caps[2].trim().to_string());
                }
            }
        } else if let Some(caps) = answer_re.captures(line) {
            if let Some(current) = parsed.last_mut() {
                current.answer = Some(caps[1].chars().next().unwrap() as usize - 'A' as usize);
            }
        }
    }

    let mut questions = Vec::new();
    for (i, p) in parsed.into_iter().enumerate() {
        let answer_index = match p.answer {
            Some(idx) if p.options.len() == 4 && idx < 4 => idx,
            _ => return None,
        };
        // 引擎按 7 易 7 中 6 难的顺序出题，难度按位置回推
        let difficulty = if i < 7 {
            Difficulty::Easy
        } else if i < 14 {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        };
        let answer = p.options[answer_index].clone();
        questions.push(QuizQuestion::new(p.question, p.options, answer, difficulty));
    }

    if questions.is_empty() || questions.len() < count.min(QUIZ_DEFAULT_COUNT) {
        return None;
    }
    questions.truncate(count);
    Some(Quiz::new(topic, questions))
}
