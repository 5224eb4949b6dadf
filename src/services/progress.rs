//! 学习进度追踪
//! 连续天数、掌握主题数、答题数与活动历史的统一入口
//! 会话内历史与落盘历史是两份日志：前者带标题描述按会话存活，后者跨会话持久

use anyhow::Result;
use chrono::{TimeZone, Utc};
use std::sync::Mutex;

use crate::models::{now_ms, ActivityHistory, ActivityType, LearningStats};
use crate::store::{PreferencesManager, StudyActivity};

/// 成就徽章
#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub emoji: &'static str,
    pub title: &'static str,
    pub description: String,
}

/// 进度追踪器
/// 会话内活动列表由互斥锁保护，并发记录按到达顺序串行落入
pub struct ProgressTracker {
    prefs: PreferencesManager,
    session_history: Mutex<Vec<ActivityHistory>>,
}

impl ProgressTracker {
    pub fn new(prefs: PreferencesManager) -> Self {
        Self {
            prefs,
            session_history: Mutex::new(Vec::new()),
        }
    }

    pub fn preferences(&self) -> &PreferencesManager {
        &self.prefs
    }

    // ==================== 活动记录 ====================

    /// 在会话历史头部插入一条活动，最新在前
    fn push_session_activity(
        &self,
        kind: ActivityType,
        title: impl Into<String>,
        description: impl Into<String>,
    ) {
        let mut history = self.session_history.lock().unwrap();
        history.insert(0, ActivityHistory::new(kind, title, description));
    }

    /// 当前会话的活动列表，最新在前
    pub fn session_history(&self) -> Vec<ActivityHistory> {
        self.session_history.lock().unwrap().clone()
    }

    /// 记录一次学科学习，落盘历史并推进连续天数
    pub fn record_subject_study(&self, level: &str, subject: &str) -> Result<()> {
        self.prefs.add_study_activity(subject, level)?;
        self.prefs.update_last_active()?;
        self.push_session_activity(
            ActivityType::SubjectLearning,
            subject.to_string(),
            format!("Studied {} ({})", subject, level),
        );
        log::info!("recorded study activity: {} / {}", level, subject);
        Ok(())
    }

    /// 记录一次讲解请求
    pub fn record_explanation(&self, topic: &str) -> Result<()> {
        self.prefs.update_streak()?;
        self.prefs.update_last_active()?;
        self.push_session_activity(
            ActivityType::Explain,
            topic.to_string(),
            format!("Explained: {}", topic),
        );
        Ok(())
    }

    /// 记录一次练习生成
    pub fn record_practice(&self, topic: &str) -> Result<()> {
        self.prefs.update_streak()?;
        self.prefs.update_last_active()?;
        self.push_session_activity(
            ActivityType::Practice,
            topic.to_string(),
            format!("Generated practice for {}", topic),
        );
        Ok(())
    }

    /// 记录一次聊天
    pub fn record_chat(&self, prompt: &str) -> Result<()> {
        self.prefs.update_last_active()?;
        self.push_session_activity(ActivityType::Chat, "Chat", prompt.to_string());
        Ok(())
    }

    // ==================== 测验结算 ====================

    /// 提交测验成绩
    /// 答题数按整份测验题量累计；得分严格超过题量七成才计入掌握主题
    pub fn submit_quiz(&self, topic: &str, score: usize, total: usize) -> Result<LearningStats> {
        self.prefs.add_questions_answered(total as i32)?;
        self.prefs.add_correct_answers(score as i32)?;

        // 整数比较避免浮点阈值误差，14/20 不计掌握而 15/20 计入
        if score * 10 > total * 7 {
            self.prefs.increment_topics_mastered()?;
        }

        self.prefs.update_streak()?;
        self.prefs.update_last_active()?;
        self.push_session_activity(
            ActivityType::Quiz,
            topic.to_string(),
            format!("Score: {}/{}", score, total),
        );
        log::info!("quiz submitted: {} score {}/{}", topic, score, total);
        self.stats()
    }

    // ==================== 汇总视图 ====================

    pub fn stats(&self) -> Result<LearningStats> {
        let questions_answered = self.prefs.questions_answered()?;
        let correct_answers = self.prefs.correct_answers()?;
        let accuracy_rate = if questions_answered > 0 {
            correct_answers as f32 / questions_answered as f32
        } else {
            0.0
        };

        Ok(LearningStats {
            learning_streak: self.prefs.streak()?,
            topics_mastered: self.prefs.topics_mastered()?,
            questions_answered,
            accuracy_rate,
        })
    }

    /// 跨会话落盘历史，按时间倒序
    pub fn persisted_history(&self) -> Result<Vec<StudyActivity>> {
        self.prefs.study_history()
    }

    /// 学习者等级，由学习过的学科数划档
    pub fn level(&self) -> Result<i32> {
        let subjects = self.prefs.subjects_studied_count()?;
        Ok(match subjects {
            0..=4 => 1,
            5..=14 => 2,
            15..=29 => 3,
            30..=49 => 4,
            _ => 5,
        })
    }

    /// 当前成就徽章，没有任何成就时给一枚起步徽章
    pub fn achievements(&self) -> Result<Vec<Achievement>> {
        let streak = self.prefs.streak()?;
        let subjects = self.prefs.subjects_studied_count()?;

        let mut achievements = Vec::new();
        if streak >= 7 {
            achievements.push(Achievement {
                emoji: "🔥",
                title: "Week Warrior",
                description: format!("{}-day learning streak", streak),
            });
        } else if streak >= 3 {
            achievements.push(Achievement {
                emoji: "🔥",
                title: "Getting Started",
                description: format!("{}-day streak", streak),
            });
        }

        if subjects >= 10 {
            achievements.push(Achievement {
                emoji: "📚",
                title: "Subject Master",
                description: format!("Studied {} subjects", subjects),
            });
        } else if subjects >= 5 {
            achievements.push(Achievement {
                emoji: "📚",
                title: "Explorer",
                description: format!("Studied {} subjects", subjects),
            });
        }

        if subjects >= 3 && streak >= 3 {
            achievements.push(Achievement {
                emoji: "🎓",
                title: "Dedicated Learner",
                description: "Consistent progress".to_string(),
            });
        }

        if achievements.is_empty() {
            achievements.push(Achievement {
                emoji: "🌟",
                title: "Just Started",
                description: "Begin your learning journey!".to_string(),
            });
        }
        Ok(achievements)
    }
}

/// 时间戳的相对时间展示
pub fn format_time_ago(timestamp: i64) -> String {
    format_time_ago_at(timestamp, now_ms())
}

fn format_time_ago_at(timestamp: i64, now: i64) -> String {
    let diff = now - timestamp;
    if diff < 60_000 {
        "Just now".to_string()
    } else if diff < 3_600_000 {
        format!("{}m ago", diff / 60_000)
    } else if diff < 86_400_000 {
        format!("{}h ago", diff / 3_600_000)
    } else if diff < 604_800_000 {
        format!("{}d ago", diff / 86_400_000)
    } else {
        match Utc.timestamp_millis_opt(timestamp).single() {
            Some(dt) => dt.format("%b %d, %Y").to_string(),
            None => "Long ago".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::KvStore;

    fn tracker() -> ProgressTracker {
        ProgressTracker::new(PreferencesManager::new(KvStore::open_in_memory().unwrap()))
    }

    #[test]
    fn test_mastery_strict_threshold() {
        let t = tracker();

        // 14/20 恰好七成，不计掌握
        t.submit_quiz("python", 14, 20).unwrap();
        assert_eq!(t.preferences().topics_mastered().unwrap(), 0);

        // 15/20 超过七成，计入
        t.submit_quiz("python", 15, 20).unwrap();
        assert_eq!(t.preferences().topics_mastered().unwrap(), 1);
    }

    #[test]
    fn test_questions_answered_counts_full_quiz() {
        let t = tracker();
        t.submit_quiz("math", 3, 20).unwrap();
        t.submit_quiz("math", 10, 20).unwrap();
        assert_eq!(t.preferences().questions_answered().unwrap(), 40);
    }

    #[test]
    fn test_stats_accuracy() {
        let t = tracker();
        let stats = t.submit_quiz("math", 15, 20).unwrap();
        assert_eq!(stats.questions_answered, 20);
        assert!((stats.accuracy_rate - 0.75).abs() < f32::EPSILON);
        assert_eq!(stats.topics_mastered, 1);
    }

    #[test]
    fn test_session_history_most_recent_first() {
        let t = tracker();
        t.record_explanation("gravity").unwrap();
        t.record_practice("python").unwrap();
        t.submit_quiz("math", 12, 20).unwrap();

        let history = t.session_history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].kind, ActivityType::Quiz);
        assert_eq!(history[1].kind, ActivityType::Practice);
        assert_eq!(history[2].kind, ActivityType::Explain);
        assert_eq!(history[0].description, "Score: 12/20");
    }

    #[test]
    fn test_subject_study_persists_history() {
        let t = tracker();
        t.record_subject_study("primary", "Math").unwrap();
        t.record_subject_study("middle", "Science").unwrap();

        let persisted = t.persisted_history().unwrap();
        assert_eq!(persisted.len(), 2);
        assert_eq!(t.preferences().subjects_studied_count().unwrap(), 2);
        assert!(t.preferences().streak().unwrap() >= 1);
    }

    #[test]
    fn test_level_thresholds() {
        let t = tracker();
        assert_eq!(t.level().unwrap(), 1);

        for i in 0..5 {
            t.record_subject_study("primary", &format!("Subject {}", i)).unwrap();
        }
        assert_eq!(t.level().unwrap(), 2);

        for i in 5..15 {
            t.record_subject_study("primary", &format!("Subject {}", i)).unwrap();
        }
        assert_eq!(t.level().unwrap(), 3);
    }

    #[test]
    fn test_achievements_start_empty() {
        let t = tracker();
        let badges = t.achievements().unwrap();
        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].title, "Just Started");
    }

    #[test]
    fn test_achievements_for_subjects() {
        let t = tracker();
        for i in 0..5 {
            t.record_subject_study("primary", &format!("Subject {}", i)).unwrap();
        }
        let badges = t.achievements().unwrap();
        assert!(badges.iter().any(|a| a.title == "Explorer"));
    }

    #[test]
    fn test_format_time_ago_buckets() {
        let now = 1_700_000_000_000;
        assert_eq!(format_time_ago_at(now - 30_000, now), "Just now");
        assert_eq!(format_time_ago_at(now - 5 * 60_000, now), "5m ago");
        assert_eq!(format_time_ago_at(now - 3 * 3_600_000, now), "3h ago");
        assert_eq!(format_time_ago_at(now - 2 * 86_400_000, now), "2d ago");
        assert_eq!(format_time_ago_at(0, now), "Jan 01, 1970");
    }
}
