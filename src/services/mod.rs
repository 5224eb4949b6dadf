// 服务模块
// 内容生成、推理分发与学习进度追踪

pub(crate) mod banks;
pub mod dispatch;
pub mod generator;
pub mod inference;
pub mod progress;

pub use dispatch::AiService;
pub use generator::ContentGenerator;
pub use inference::{EngineConfig, InferenceEngine, LlamaServerEngine};
pub use progress::{format_time_ago, Achievement, ProgressTracker};
