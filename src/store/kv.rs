// 键值存储服务
// 基于 SQLite 单表实现字符串键值对，集合值以 JSON 数组编码

use anyhow::Result;
use rusqlite::{Connection, OptionalExtension};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// 键值存储
/// 单连接串行访问，不同键的并发写入互不影响
#[derive(Clone)]
pub struct KvStore {
    conn: Arc<Mutex<Connection>>,
    db_path: Option<PathBuf>,
}

impl KvStore {
    /// 打开指定路径的存储，父目录不存在时自动创建
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
            db_path: Some(path.to_path_buf()),
        };
        store.initialize()?;
        Ok(store)
    }

    /// 打开内存存储，用于测试
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
            db_path: None,
        };
        store.initialize()?;
        Ok(store)
    }

    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    /// 初始化表结构
    fn initialize(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    pub fn get_string(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let value = conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?",
                rusqlite::params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn set_string(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT OR REPLACE INTO preferences (key, value) VALUES (?, ?)",
            rusqlite::params![key, value],
        )?;
        Ok(())
    }

    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        Ok(self
            .get_string(key)?
            .map(|v| v == "true")
            .unwrap_or(default))
    }

    pub fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        self.set_string(key, if value { "true" } else { "false" })
    }

    pub fn get_i64(&self, key: &str, default: i64) -> Result<i64> {
        Ok(self
            .get_string(key)?
            .and_then(|v| v.parse().ok())
            .unwrap_or(default))
    }

    pub fn set_i64(&self, key: &str, value: i64) -> Result<()> {
        self.set_string(key, &value.to_string())
    }

    pub fn get_i32(&self, key: &str, default: i32) -> Result<i32> {
        Ok(self
            .get_string(key)?
            .and_then(|v| v.parse().ok())
            .unwrap_or(default))
    }

    pub fn set_i32(&self, key: &str, value: i32) -> Result<()> {
        self.set_string(key, &value.to_string())
    }

    /// 读取字符串集合，缺失或损坏时返回空集
    pub fn get_string_set(&self, key: &str) -> Result<BTreeSet<String>> {
        let raw = match self.get_string(key)? {
            Some(v) => v,
            None => return Ok(BTreeSet::new()),
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(values) => Ok(values.into_iter().collect()),
            Err(e) => {
                log::warn!("corrupt string set at key {}: {}", key, e);
                Ok(BTreeSet::new())
            }
        }
    }

    pub fn set_string_set(&self, key: &str, values: &BTreeSet<String>) -> Result<()> {
        let encoded = serde_json::to_string(&values.iter().collect::<Vec<_>>())?;
        self.set_string(key, &encoded)
    }

    /// 向集合追加一个元素
    /// 读改写全程持有连接锁，并发追加不会丢失更新
    pub fn add_to_string_set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        let raw: Option<String> = conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?",
                rusqlite::params![key],
                |row| row.get(0),
            )
            .optional()?;

        let mut values: BTreeSet<String> = raw
            .and_then(|r| serde_json::from_str::<Vec<String>>(&r).ok())
            .map(|v| v.into_iter().collect())
            .unwrap_or_default();
        values.insert(value.to_string());

        let encoded = serde_json::to_string(&values.iter().collect::<Vec<_>>())?;
        conn.execute(
            "INSERT OR REPLACE INTO preferences (key, value) VALUES (?, ?)",
            rusqlite::params![key, encoded],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_round_trip() {
        let store = KvStore::open_in_memory().unwrap();
        assert_eq!(store.get_string("user_name").unwrap(), None);

        store.set_string("user_name", "Asha").unwrap();
        assert_eq!(store.get_string("user_name").unwrap().as_deref(), Some("Asha"));

        store.set_string("user_name", "Ravi").unwrap();
        assert_eq!(store.get_string("user_name").unwrap().as_deref(), Some("Ravi"));
    }

    #[test]
    fn test_typed_defaults() {
        let store = KvStore::open_in_memory().unwrap();
        assert!(store.get_bool("first_launch", true).unwrap());
        assert_eq!(store.get_i64("last_active_date", 0).unwrap(), 0);
        assert_eq!(store.get_i32("learning_streak", 0).unwrap(), 0);

        store.set_bool("first_launch", false).unwrap();
        store.set_i64("last_active_date", 1_700_000_000_000).unwrap();
        store.set_i32("learning_streak", 3).unwrap();

        assert!(!store.get_bool("first_launch", true).unwrap());
        assert_eq!(store.get_i64("last_active_date", 0).unwrap(), 1_700_000_000_000);
        assert_eq!(store.get_i32("learning_streak", 0).unwrap(), 3);
    }

    #[test]
    fn test_string_set_dedup() {
        let store = KvStore::open_in_memory().unwrap();
        store.add_to_string_set("subjects_studied", "primary|Math").unwrap();
        store.add_to_string_set("subjects_studied", "primary|Math").unwrap();
        store.add_to_string_set("subjects_studied", "middle|Science").unwrap();

        let set = store.get_string_set("subjects_studied").unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("primary|Math"));
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("aithink.db");
        let store = KvStore::open(&path).unwrap();
        store.set_string("k", "v").unwrap();
        assert!(path.exists());

        // 重新打开读到同一数据
        drop(store);
        let store = KvStore::open(&path).unwrap();
        assert_eq!(store.get_string("k").unwrap().as_deref(), Some("v"));
    }
}
