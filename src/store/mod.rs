// 存储模块
// 键值偏好存储与类型化偏好管理

pub mod kv;
pub mod preferences;

pub use kv::KvStore;
pub use preferences::{PreferencesManager, StudyActivity};
