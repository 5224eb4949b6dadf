//! 离线 AI 学习伴侣核心库
//! 聊天、测验、讲解、练习与少儿内容生成，可选本地推理引擎加确定性回退内容，
//! 以及基于键值偏好存储的学习进度追踪

pub mod config;
pub mod logging;
pub mod models;
pub mod services;
pub mod store;

pub use config::{App, AppConfig};
pub use services::{AiService, ContentGenerator, EngineConfig, InferenceEngine, ProgressTracker};
pub use store::{KvStore, PreferencesManager};
