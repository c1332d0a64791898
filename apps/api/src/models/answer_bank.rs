use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Known application-question categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    WhyInterested,
    GreatestStrength,
    GreatestWeakness,
    LeadershipExample,
    TeamworkExample,
    ChallengeOvercome,
    WhyLeaving,
    SalaryExpectations,
    CareerGoals,
    TechnicalAchievement,
    WorkStyle,
    HandlePressure,
    ConflictResolution,
    DiversityContribution,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::WhyInterested => "why_interested",
            QuestionKind::GreatestStrength => "greatest_strength",
            QuestionKind::GreatestWeakness => "greatest_weakness",
            QuestionKind::LeadershipExample => "leadership_example",
            QuestionKind::TeamworkExample => "teamwork_example",
            QuestionKind::ChallengeOvercome => "challenge_overcome",
            QuestionKind::WhyLeaving => "why_leaving",
            QuestionKind::SalaryExpectations => "salary_expectations",
            QuestionKind::CareerGoals => "career_goals",
            QuestionKind::TechnicalAchievement => "technical_achievement",
            QuestionKind::WorkStyle => "work_style",
            QuestionKind::HandlePressure => "handle_pressure",
            QuestionKind::ConflictResolution => "conflict_resolution",
            QuestionKind::DiversityContribution => "diversity_contribution",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authoritative cached answer for one question kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedAnswer {
    pub kind: QuestionKind,
    pub question: String,
    pub answer: String,
    pub generated_at: DateTime<Utc>,
    pub usage_count: u32,
}

/// Serializable copy of one question category, stored with the bank so it
/// can be carried to another process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionPatternSnapshot {
    pub kind: QuestionKind,
    pub patterns: Vec<String>,
    pub keywords: Vec<String>,
}

/// A candidate's cache of categorized and free-form answers.
///
/// Owned by the caller. Engine functions take it by reference and return a
/// new value. `custom_answers` maps a case-insensitive match pattern to its
/// answer and is evaluated in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerBank {
    #[serde(default)]
    pub common_questions: Vec<CachedAnswer>,
    #[serde(default)]
    pub patterns: Vec<QuestionPatternSnapshot>,
    #[serde(default)]
    pub custom_answers: IndexMap<String, String>,
}

impl AnswerBank {
    pub fn cached(&self, kind: QuestionKind) -> Option<&CachedAnswer> {
        self.common_questions.iter().find(|c| c.kind == kind)
    }
}

/// Minimal candidate summary used to seed a starter answer bank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub years_experience: Option<u32>,
    #[serde(default)]
    pub skills: Vec<String>,
}
