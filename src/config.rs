//! 应用配置与组件装配
//! 推理引擎由配置显式注入，不做任何运行时符号探测

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

use crate::services::dispatch::AiService;
use crate::services::inference::{EngineConfig, InferenceEngine, LlamaServerEngine};
use crate::services::progress::ProgressTracker;
use crate::store::{KvStore, PreferencesManager};

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 偏好数据库路径，缺省使用内存库
    pub db_path: Option<PathBuf>,
    /// 推理引擎配置，缺省纯回退模式
    pub engine: Option<EngineConfig>,
}

impl AppConfig {
    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = Some(path.into());
        self
    }

    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = Some(engine);
        self
    }

    /// 按依赖顺序装配全部组件
    pub async fn build(self) -> Result<App> {
        let store = match &self.db_path {
            Some(path) => KvStore::open(path)?,
            None => KvStore::open_in_memory()?,
        };
        let preferences = PreferencesManager::new(store);
        let progress = ProgressTracker::new(preferences.clone());

        let engine: Option<Arc<dyn InferenceEngine>> = self
            .engine
            .map(|cfg| Arc::new(LlamaServerEngine::new(cfg)) as Arc<dyn InferenceEngine>);
        let ai = AiService::new(engine).await;

        Ok(App {
            preferences,
            progress,
            ai,
        })
    }
}

/// 装配完成的应用组件
pub struct App {
    pub preferences: PreferencesManager,
    pub progress: ProgressTracker,
    pub ai: AiService,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_without_engine() {
        let app = AppConfig::default().build().await.unwrap();
        assert!(!app.ai.is_engine_available());
        assert!(app.preferences.is_first_launch().unwrap());
    }

    #[tokio::test]
    async fn test_build_with_db_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.db");

        let app = AppConfig::default()
            .with_db_path(&path)
            .build()
            .await
            .unwrap();
        app.preferences.set_user_name("Asha").unwrap();
        drop(app);

        // 重新装配读到同一数据
        let app = AppConfig::default()
            .with_db_path(&path)
            .build()
            .await
            .unwrap();
        assert_eq!(app.preferences.user_name().unwrap(), "Asha");
    }
}
