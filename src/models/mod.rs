// 数据模型模块
// 定义用户档案、测验、练习题与学习活动等核心结构

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 当前时间（epoch 毫秒）
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// 用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Student,
    ItProfessional,
}

/// 学习目的
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LearningPurpose {
    AcademicLearning,
    SkillDevelopment,
    ExamPreparation,
    Research,
}

/// 用户档案，由偏好存储独占持有
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub purpose: LearningPurpose,
    pub member_since: i64,
    pub learning_streak: i32,
    pub topics_mastered: i32,
    pub questions_answered: i32,
    pub last_active: i64,
}

impl UserProfile {
    pub fn new(name: &str, email: &str, role: UserRole, purpose: LearningPurpose) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            role,
            purpose,
            member_since: now_ms(),
            learning_streak: 0,
            topics_mastered: 0,
            questions_answered: 0,
            last_active: 0,
        }
    }
}

/// 可选推理模型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiModel {
    Gemma3_1b,
    Qwen25_05b,
    TinyLlama,
}

impl AiModel {
    pub fn display_name(&self) -> &'static str {
        match self {
            AiModel::Gemma3_1b => "Gemma 3 1B",
            AiModel::Qwen25_05b => "Qwen 2.5 0.5B",
            AiModel::TinyLlama => "TinyLlama",
        }
    }
}

/// 聊天消息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub is_user: bool,
    pub timestamp: i64,
}

impl ChatMessage {
    pub fn new(content: impl Into<String>, is_user: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            is_user,
            timestamp: now_ms(),
        }
    }
}

/// 难度档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// 测验题目
/// 不变式: 恰好 4 个选项，answer 必须与其中一个选项完全一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub difficulty: Difficulty,
    pub user_answer: Option<String>,
}

impl QuizQuestion {
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            question: question.into(),
            options,
            answer: answer.into(),
            difficulty,
            user_answer: None,
        }
    }

    /// 正确选项的下标（0 起），answer 未命中任何选项时为 None
    pub fn answer_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o == &self.answer)
    }
}

/// 测验，会话级临时数据，不落盘
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub topic: String,
    pub questions: Vec<QuizQuestion>,
    pub score: u32,
    pub created_at: i64,
}

impl Quiz {
    pub fn new(topic: impl Into<String>, questions: Vec<QuizQuestion>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            topic: topic.into(),
            questions,
            score: 0,
            created_at: now_ms(),
        }
    }
}

/// 练习题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProblemType {
    Mcq,
    TextInput,
}

/// 练习题，options 仅在选择题时存在
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeProblem {
    pub id: String,
    pub problem: String,
    pub kind: ProblemType,
    pub options: Option<Vec<String>>,
    pub answer: String,
    pub solution: Option<String>,
    pub user_answer: Option<String>,
    pub is_correct: Option<bool>,
}

impl PracticeProblem {
    pub fn mcq(
        problem: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
        solution: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            problem: problem.into(),
            kind: ProblemType::Mcq,
            options: Some(options),
            answer: answer.into(),
            solution: Some(solution.into()),
            user_answer: None,
            is_correct: None,
        }
    }

    pub fn open_ended(problem: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            problem: problem.into(),
            kind: ProblemType::TextInput,
            options: None,
            answer: answer.into(),
            solution: None,
            user_answer: None,
            is_correct: None,
        }
    }
}

/// 学习活动类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityType {
    SubjectLearning,
    Question,
    Quiz,
    Completed,
    Explain,
    Practice,
    Chat,
}

/// 会话内活动记录（最近优先），与落盘历史互不同步
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityHistory {
    pub id: String,
    pub kind: ActivityType,
    pub title: String,
    pub description: String,
    pub timestamp: i64,
}

impl ActivityHistory {
    pub fn new(kind: ActivityType, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            title: title.into(),
            description: description.into(),
            timestamp: now_ms(),
        }
    }
}

/// 学习统计汇总
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearningStats {
    pub learning_streak: i32,
    pub topics_mastered: i32,
    pub questions_answered: i32,
    pub accuracy_rate: f32,
}

/// 学段
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationLevel {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub age_range: &'static str,
}

/// 学科
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subject {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub level: &'static str,
}

/// 全部学段，从幼儿到博士
pub fn education_levels() -> Vec<EducationLevel> {
    vec![
        EducationLevel { id: "lkg-ukg", name: "LKG-UKG", emoji: "🧸", age_range: "3-5 years" },
        EducationLevel { id: "primary", name: "Primary (1-5)", emoji: "📚", age_range: "6-10 years" },
        EducationLevel { id: "middle", name: "Middle (6-8)", emoji: "📖", age_range: "11-13 years" },
        EducationLevel { id: "high", name: "High School (9-10)", emoji: "🎓", age_range: "14-15 years" },
        EducationLevel { id: "senior", name: "Senior (11-12)", emoji: "🎯", age_range: "16-17 years" },
        EducationLevel { id: "undergrad", name: "Undergraduate", emoji: "🎓", age_range: "18-22 years" },
        EducationLevel { id: "postgrad", name: "Postgraduate", emoji: "🎓", age_range: "22-25 years" },
        EducationLevel { id: "phd", name: "PhD/Research", emoji: "🔬", age_range: "25+ years" },
    ]
}

/// 指定学段下的学科列表，未知学段返回空
pub fn subjects_for_level(level_id: &str) -> Vec<Subject> {
    let s = |id, name, emoji, description, level| Subject { id, name, emoji, description, level };
    match level_id {
        "lkg-ukg" => vec![
            s("alphabets", "Alphabets", "🔤", "Learn A to Z", "lkg-ukg"),
            s("numbers", "Numbers", "🔢", "Count 1 to 100", "lkg-ukg"),
            s("colors", "Colors", "🎨", "Learn colors", "lkg-ukg"),
            s("shapes", "Shapes", "⭐", "Basic shapes", "lkg-ukg"),
            s("rhymes", "Rhymes", "🎵", "Fun songs", "lkg-ukg"),
        ],
        "primary" => vec![
            s("math", "Mathematics", "➕", "Basic arithmetic", "primary"),
            s("english", "English", "📝", "Reading & writing", "primary"),
            s("science", "Science", "🔬", "Nature & experiments", "primary"),
            s("social", "Social Studies", "🌍", "World around us", "primary"),
            s("art", "Art & Craft", "🎨", "Creative activities", "primary"),
        ],
        "middle" => vec![
            s("math", "Mathematics", "📐", "Algebra & geometry", "middle"),
            s("science", "Science", "🧪", "Physics, Chemistry, Biology", "middle"),
            s("english", "English", "📖", "Grammar & literature", "middle"),
            s("social", "Social Science", "🗺️", "History & geography", "middle"),
            s("computer", "Computer Science", "💻", "Basic programming", "middle"),
        ],
        "high" => vec![
            s("math", "Mathematics", "📊", "Advanced algebra & trigonometry", "high"),
            s("physics", "Physics", "⚡", "Mechanics & electricity", "high"),
            s("chemistry", "Chemistry", "⚗️", "Elements & reactions", "high"),
            s("biology", "Biology", "🧬", "Life sciences", "high"),
            s("english", "English", "📚", "Literature & composition", "high"),
            s("social", "Social Science", "🏛️", "Civics & economics", "high"),
        ],
        "senior" => vec![
            s("math", "Mathematics", "∫", "Calculus & statistics", "senior"),
            s("physics", "Physics", "🔭", "Modern physics", "senior"),
            s("chemistry", "Chemistry", "🧪", "Organic & inorganic", "senior"),
            s("biology", "Biology", "🦠", "Genetics & ecology", "senior"),
            s("cs", "Computer Science", "💾", "Programming & algorithms", "senior"),
            s("commerce", "Commerce", "💰", "Accounts & business", "senior"),
            s("economics", "Economics", "📈", "Micro & macro", "senior"),
            s("english", "English", "✍️", "Advanced literature", "senior"),
        ],
        "undergrad" => vec![
            s("engineering", "Engineering", "⚙️", "All branches", "undergrad"),
            s("medical", "Medical Sciences", "🏥", "MBBS & allied", "undergrad"),
            s("commerce", "Commerce & Business", "💼", "BBA, BCom", "undergrad"),
            s("science", "Pure Sciences", "🔬", "BSc programs", "undergrad"),
            s("arts", "Arts & Humanities", "🎭", "BA programs", "undergrad"),
            s("law", "Law", "⚖️", "LLB programs", "undergrad"),
            s("cs", "Computer Science", "💻", "Programming & AI", "undergrad"),
        ],
        "postgrad" => vec![
            s("mtech", "M.Tech/MS", "🔧", "Engineering specialization", "postgrad"),
            s("mba", "MBA", "📊", "Business management", "postgrad"),
            s("msc", "M.Sc", "🧬", "Science research", "postgrad"),
            s("ma", "M.A", "📜", "Arts & humanities", "postgrad"),
            s("mca", "MCA", "💻", "Computer applications", "postgrad"),
            s("md", "MD/MS", "🩺", "Medical specialization", "postgrad"),
        ],
        "phd" => vec![
            s("research", "Research Methodology", "📊", "Research design", "phd"),
            s("thesis", "Thesis Writing", "📝", "Academic writing", "phd"),
            s("publication", "Publications", "📄", "Journal papers", "phd"),
            s("teaching", "Teaching Methods", "👨‍🏫", "Pedagogy", "phd"),
            s("domain", "Domain Expertise", "🎯", "Specialized knowledge", "phd"),
        ],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_index() {
        let q = QuizQuestion::new(
            "What keyword is used to define a function in Python?",
            vec!["def".into(), "function".into(), "func".into(), "define".into()],
            "def",
            Difficulty::Easy,
        );
        assert_eq!(q.answer_index(), Some(0));

        let q = QuizQuestion::new(
            "Broken",
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            "e",
            Difficulty::Easy,
        );
        assert_eq!(q.answer_index(), None);
    }

    #[test]
    fn test_subjects_for_level() {
        assert_eq!(subjects_for_level("lkg-ukg").len(), 5);
        assert_eq!(subjects_for_level("senior").len(), 8);
        assert!(subjects_for_level("kindergarten").is_empty());
    }

    #[test]
    fn test_profile_new_defaults() {
        let p = UserProfile::new(
            "Asha",
            "asha@example.com",
            UserRole::Student,
            LearningPurpose::ExamPreparation,
        );
        assert_eq!(p.learning_streak, 0);
        assert_eq!(p.topics_mastered, 0);
        assert!(p.member_since > 0);
    }
}
