//! 类型化偏好管理
//! 封装首启标记、用户档案、连续学习天数与学习历史的读写

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::{now_ms, UserProfile};
use crate::store::kv::KvStore;

const KEY_FIRST_LAUNCH: &str = "first_launch";
const KEY_MODEL_DOWNLOADED: &str = "model_downloaded";
const KEY_USER_NAME: &str = "user_name";
const KEY_USER_EMAIL: &str = "user_email";
const KEY_USER_PROFILE: &str = "user_profile";
const KEY_LAST_ACTIVE: &str = "last_active_date";
const KEY_STREAK: &str = "learning_streak";
const KEY_LAST_STREAK_DATE: &str = "last_streak_date";
const KEY_STUDY_HISTORY: &str = "study_history";
const KEY_SUBJECTS_STUDIED: &str = "subjects_studied";
const KEY_QUESTIONS_ANSWERED: &str = "questions_answered";
const KEY_CORRECT_ANSWERS: &str = "correct_answers";
const KEY_TOPICS_MASTERED: &str = "topics_mastered";

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// 历史记录编码的当前版本前缀
const HISTORY_VERSION: &str = "1";

/// 落盘学习活动记录
/// 编码为 `1|<epochMs>|<level>|<subject>`，旧格式 `<epochMs>|<level>|<subject>` 仍可读取
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyActivity {
    pub timestamp: i64,
    pub level: String,
    pub subject: String,
}

impl StudyActivity {
    pub fn encode(&self) -> String {
        format!("{}|{}|{}|{}", HISTORY_VERSION, self.timestamp, self.level, self.subject)
    }

    /// 解码单条记录，字段数不符时返回 None
    pub fn decode(record: &str) -> Option<Self> {
        let parts: Vec<&str> = record.split('|').collect();
        let (ts, level, subject) = match parts.as_slice() {
            [version, ts, level, subject] if *version == HISTORY_VERSION => (ts, level, subject),
            // 旧版三字段记录
            [ts, level, subject] => (ts, level, subject),
            _ => return None,
        };
        Some(Self {
            timestamp: ts.parse().ok()?,
            level: level.to_string(),
            subject: subject.to_string(),
        })
    }
}

/// 偏好管理器，所有持久化实体的唯一拥有者
#[derive(Clone)]
pub struct PreferencesManager {
    store: KvStore,
}

impl PreferencesManager {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &KvStore {
        &self.store
    }

    // ==================== 标记位 ====================

    pub fn is_first_launch(&self) -> Result<bool> {
        self.store.get_bool(KEY_FIRST_LAUNCH, true)
    }

    pub fn set_first_launch_complete(&self) -> Result<()> {
        self.store.set_bool(KEY_FIRST_LAUNCH, false)
    }

    pub fn is_model_downloaded(&self) -> Result<bool> {
        self.store.get_bool(KEY_MODEL_DOWNLOADED, false)
    }

    pub fn set_model_downloaded(&self, downloaded: bool) -> Result<()> {
        self.store.set_bool(KEY_MODEL_DOWNLOADED, downloaded)
    }

    // ==================== 用户档案 ====================

    pub fn user_name(&self) -> Result<String> {
        Ok(self
            .store
            .get_string(KEY_USER_NAME)?
            .unwrap_or_else(|| "Student".to_string()))
    }

    pub fn set_user_name(&self, name: &str) -> Result<()> {
        self.store.set_string(KEY_USER_NAME, name)
    }

    /// 保存档案，重复登录直接覆盖
    pub fn save_user_profile(&self, profile: &UserProfile) -> Result<()> {
        self.store.set_string(KEY_USER_NAME, &profile.name)?;
        self.store.set_string(KEY_USER_EMAIL, &profile.email)?;
        self.store
            .set_string(KEY_USER_PROFILE, &serde_json::to_string(profile)?)
    }

    /// 读取档案，统计字段以各自独立键的最新值为准
    pub fn load_user_profile(&self) -> Result<Option<UserProfile>> {
        let raw = match self.store.get_string(KEY_USER_PROFILE)? {
            Some(v) => v,
            None => return Ok(None),
        };
        let mut profile: UserProfile = serde_json::from_str(&raw)?;
        profile.learning_streak = self.streak()?;
        profile.topics_mastered = self.topics_mastered()?;
        profile.questions_answered = self.questions_answered()?;
        profile.last_active = self.last_active()?;
        Ok(Some(profile))
    }

    // ==================== 活跃与连续天数 ====================

    pub fn update_last_active(&self) -> Result<()> {
        self.store.set_i64(KEY_LAST_ACTIVE, now_ms())
    }

    pub fn last_active(&self) -> Result<i64> {
        self.store.get_i64(KEY_LAST_ACTIVE, 0)
    }

    pub fn streak(&self) -> Result<i32> {
        self.store.get_i32(KEY_STREAK, 0)
    }

    /// 按日桶更新连续学习天数并返回新值
    /// 同日不变；恰好隔一日加一；间隔更久重置为 1
    pub fn update_streak(&self) -> Result<i32> {
        self.update_streak_at(now_ms())
    }

    pub(crate) fn update_streak_at(&self, now: i64) -> Result<i32> {
        let today = now / DAY_MS;
        let last_day = self.store.get_i64(KEY_LAST_STREAK_DATE, 0)? / DAY_MS;

        let current = self.store.get_i32(KEY_STREAK, 0)?;
        let new_streak = if last_day == today {
            current
        } else if last_day == today - 1 {
            current + 1
        } else {
            1
        };

        self.store.set_i32(KEY_STREAK, new_streak)?;
        self.store.set_i64(KEY_LAST_STREAK_DATE, now)?;
        Ok(new_streak)
    }

    // ==================== 学习历史 ====================

    /// 追加一条学习活动并更新连续天数
    /// 完全相同的 (时间戳, 学段, 学科) 会被集合去重，只保留一条
    pub fn add_study_activity(&self, subject: &str, level: &str) -> Result<()> {
        self.add_study_activity_at(subject, level, now_ms())
    }

    pub(crate) fn add_study_activity_at(&self, subject: &str, level: &str, timestamp: i64) -> Result<()> {
        let activity = StudyActivity {
            timestamp,
            level: level.to_string(),
            subject: subject.to_string(),
        };
        self.store.add_to_string_set(KEY_STUDY_HISTORY, &activity.encode())?;
        self.store
            .add_to_string_set(KEY_SUBJECTS_STUDIED, &format!("{}|{}", level, subject))?;
        self.update_streak_at(timestamp)?;
        Ok(())
    }

    /// 读取全部学习历史，按时间倒序
    /// 无法解码的记录被丢弃并记入告警日志
    pub fn study_history(&self) -> Result<Vec<StudyActivity>> {
        let records = self.store.get_string_set(KEY_STUDY_HISTORY)?;
        let total = records.len();

        let mut activities: Vec<StudyActivity> = records
            .iter()
            .filter_map(|r| StudyActivity::decode(r))
            .collect();
        let dropped = total - activities.len();
        if dropped > 0 {
            log::warn!("dropped {} malformed study history record(s) on read", dropped);
        }

        activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(activities)
    }

    pub fn subjects_studied_count(&self) -> Result<usize> {
        Ok(self.store.get_string_set(KEY_SUBJECTS_STUDIED)?.len())
    }

    // ==================== 统计计数 ====================

    pub fn questions_answered(&self) -> Result<i32> {
        self.store.get_i32(KEY_QUESTIONS_ANSWERED, 0)
    }

    pub fn add_questions_answered(&self, count: i32) -> Result<i32> {
        let new_total = self.questions_answered()? + count;
        self.store.set_i32(KEY_QUESTIONS_ANSWERED, new_total)?;
        Ok(new_total)
    }

    pub fn correct_answers(&self) -> Result<i32> {
        self.store.get_i32(KEY_CORRECT_ANSWERS, 0)
    }

    pub fn add_correct_answers(&self, count: i32) -> Result<i32> {
        let new_total = self.correct_answers()? + count;
        self.store.set_i32(KEY_CORRECT_ANSWERS, new_total)?;
        Ok(new_total)
    }

    pub fn topics_mastered(&self) -> Result<i32> {
        self.store.get_i32(KEY_TOPICS_MASTERED, 0)
    }

    pub fn increment_topics_mastered(&self) -> Result<i32> {
        let new_total = self.topics_mastered()? + 1;
        self.store.set_i32(KEY_TOPICS_MASTERED, new_total)?;
        Ok(new_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LearningPurpose, UserRole};

    fn manager() -> PreferencesManager {
        PreferencesManager::new(KvStore::open_in_memory().unwrap())
    }

    #[test]
    fn test_first_launch_flag() {
        let prefs = manager();
        assert!(prefs.is_first_launch().unwrap());
        prefs.set_first_launch_complete().unwrap();
        assert!(!prefs.is_first_launch().unwrap());
    }

    #[test]
    fn test_streak_same_day_unchanged() {
        let prefs = manager();
        let day_n = 19_000 * DAY_MS + 3600_000;

        assert_eq!(prefs.update_streak_at(day_n).unwrap(), 1);
        assert_eq!(prefs.update_streak_at(day_n + 60_000).unwrap(), 1);
        assert_eq!(prefs.streak().unwrap(), 1);
    }

    #[test]
    fn test_streak_consecutive_day_increments() {
        let prefs = manager();
        let day_n = 19_000 * DAY_MS;

        assert_eq!(prefs.update_streak_at(day_n).unwrap(), 1);
        assert_eq!(prefs.update_streak_at(day_n + DAY_MS).unwrap(), 2);
        assert_eq!(prefs.update_streak_at(day_n + 2 * DAY_MS).unwrap(), 3);
    }

    #[test]
    fn test_streak_gap_resets() {
        let prefs = manager();
        let day_n = 19_000 * DAY_MS;

        prefs.update_streak_at(day_n).unwrap();
        prefs.update_streak_at(day_n + DAY_MS).unwrap();
        assert_eq!(prefs.update_streak_at(day_n + 4 * DAY_MS).unwrap(), 1);
    }

    #[test]
    fn test_history_round_trip() {
        let prefs = manager();
        prefs.add_study_activity_at("Math", "primary", 1_700_000_000_000).unwrap();

        let history = prefs.study_history().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].subject, "Math");
        assert_eq!(history[0].level, "primary");
        assert_eq!(history[0].timestamp, 1_700_000_000_000);
    }

    #[test]
    fn test_history_identical_triples_dedup() {
        // 相同三元组只保留一条，记录在案的集合去重行为
        let prefs = manager();
        prefs.add_study_activity_at("Math", "primary", 1_700_000_000_000).unwrap();
        prefs.add_study_activity_at("Math", "primary", 1_700_000_000_000).unwrap();
        assert_eq!(prefs.study_history().unwrap().len(), 1);
    }

    #[test]
    fn test_history_sorted_most_recent_first() {
        let prefs = manager();
        prefs.add_study_activity_at("Math", "primary", 1_000).unwrap();
        prefs.add_study_activity_at("Science", "middle", 3_000).unwrap();
        prefs.add_study_activity_at("English", "primary", 2_000).unwrap();

        let history = prefs.study_history().unwrap();
        let subjects: Vec<&str> = history.iter().map(|a| a.subject.as_str()).collect();
        assert_eq!(subjects, vec!["Science", "English", "Math"]);
    }

    #[test]
    fn test_history_drops_malformed_records() {
        let prefs = manager();
        prefs.add_study_activity_at("Math", "primary", 1_000).unwrap();
        // 直接注入坏记录
        prefs.store().add_to_string_set("study_history", "garbage").unwrap();
        prefs.store().add_to_string_set("study_history", "1|a|b|c|d|e").unwrap();
        prefs.store().add_to_string_set("study_history", "not-a-ts|primary|Math").unwrap();

        let history = prefs.study_history().unwrap();
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_history_reads_legacy_records() {
        let prefs = manager();
        prefs
            .store()
            .add_to_string_set("study_history", "1700000000000|primary|Math")
            .unwrap();

        let history = prefs.study_history().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].level, "primary");
    }

    #[test]
    fn test_subjects_studied_count() {
        let prefs = manager();
        prefs.add_study_activity_at("Math", "primary", 1_000).unwrap();
        prefs.add_study_activity_at("Math", "primary", 2_000).unwrap();
        prefs.add_study_activity_at("Math", "middle", 3_000).unwrap();
        assert_eq!(prefs.subjects_studied_count().unwrap(), 2);
    }

    #[test]
    fn test_profile_overwritten_on_relogin() {
        let prefs = manager();
        let first = UserProfile::new(
            "Asha",
            "asha@example.com",
            UserRole::Student,
            LearningPurpose::AcademicLearning,
        );
        prefs.save_user_profile(&first).unwrap();

        let second = UserProfile::new(
            "Ravi",
            "ravi@example.com",
            UserRole::ItProfessional,
            LearningPurpose::SkillDevelopment,
        );
        prefs.save_user_profile(&second).unwrap();

        let loaded = prefs.load_user_profile().unwrap().unwrap();
        assert_eq!(loaded.name, "Ravi");
        assert_eq!(loaded.role, UserRole::ItProfessional);
        assert_eq!(prefs.user_name().unwrap(), "Ravi");
    }

    #[test]
    fn test_profile_reflects_counter_keys() {
        let prefs = manager();
        let profile = UserProfile::new(
            "Asha",
            "asha@example.com",
            UserRole::Student,
            LearningPurpose::Research,
        );
        prefs.save_user_profile(&profile).unwrap();

        prefs.add_questions_answered(20).unwrap();
        prefs.increment_topics_mastered().unwrap();

        let loaded = prefs.load_user_profile().unwrap().unwrap();
        assert_eq!(loaded.questions_answered, 20);
        assert_eq!(loaded.topics_mastered, 1);
    }
}
