//! Question pattern catalog.
//!
//! Category order is the tie-break for both classification passes: the first
//! category whose pattern matches wins, and among keyword scores the first
//! category to reach the threshold wins.

use regex::Regex;

use crate::errors::CatalogError;
use crate::models::answer_bank::{QuestionKind, QuestionPatternSnapshot};
use crate::text::case_insensitive_regex;

pub struct QuestionCategory {
    pub kind: QuestionKind,
    rules: Vec<Regex>,
    keywords: Vec<String>,
}

impl QuestionCategory {
    pub fn new(
        kind: QuestionKind,
        patterns: &[&str],
        keywords: &[&str],
    ) -> Result<Self, CatalogError> {
        let rules = patterns
            .iter()
            .map(|pattern| {
                case_insensitive_regex(pattern)
                    .map_err(|e| CatalogError::invalid_pattern(kind.as_str(), e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            kind,
            rules,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        })
    }

    pub fn matches_rule(&self, question: &str) -> bool {
        self.rules.iter().any(|rule| rule.is_match(question))
    }

    /// Number of keywords contained in the lower-cased question.
    pub fn keyword_hits(&self, normalized_question: &str) -> usize {
        self.keywords
            .iter()
            .filter(|k| normalized_question.contains(k.as_str()))
            .count()
    }

    fn snapshot(&self) -> QuestionPatternSnapshot {
        QuestionPatternSnapshot {
            kind: self.kind,
            patterns: self.rules.iter().map(|r| r.as_str().to_string()).collect(),
            keywords: self.keywords.clone(),
        }
    }
}

/// Ordered set of question categories.
pub struct QuestionCatalog {
    categories: Vec<QuestionCategory>,
}

impl QuestionCatalog {
    pub fn new(categories: Vec<QuestionCategory>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[QuestionCategory] {
        &self.categories
    }

    /// Serializable copy stored in `AnswerBank::patterns`.
    pub fn snapshot(&self) -> Vec<QuestionPatternSnapshot> {
        self.categories.iter().map(QuestionCategory::snapshot).collect()
    }

    /// The built-in catalog.
    pub fn standard() -> Result<Self, CatalogError> {
        use QuestionKind::*;

        let categories = vec![
            QuestionCategory::new(
                WhyInterested,
                &[
                    r"\bwhy\s+(?:are\s+you|do\s+you\s+want|would\s+you\s+like)\b.*\b(?:interested|join|apply|work\s+(?:here|for\s+us|with\s+us|at\s+(?:our|this)))",
                    r"\bwhat\s+(?:interests|excites|attracts|draws)\s+you\b.*\b(?:role|position|company|team|us)\b",
                    r"\bwhy\s+(?:this|our)\s+(?:company|role|position|team)\b",
                ],
                &["interested", "why", "join", "company", "excites", "attracted", "passionate"],
            )?,
            QuestionCategory::new(
                GreatestStrength,
                &[
                    r"\b(?:greatest|biggest|key|top|main)\s+strengths?\b",
                    r"\bwhat\s+are\s+you\s+(?:best|good|great)\s+at\b",
                ],
                &["strength", "best at", "excel", "good at", "strongest"],
            )?,
            QuestionCategory::new(
                GreatestWeakness,
                &[
                    r"\bweakness(?:es)?\b",
                    r"\bareas?\s+(?:for|of)\s+(?:improvement|growth|development)\b",
                ],
                &["weak", "improve", "improvement", "struggle", "development area"],
            )?,
            QuestionCategory::new(
                LeadershipExample,
                &[
                    r"\b(?:time|example|situation)\b.*\b(?:led|lead|leadership)\b",
                    r"\bleadership\s+(?:experience|style|example|skills)\b",
                ],
                &["lead", "led ", "leadership", "initiative", "managed", "mentor"],
            )?,
            QuestionCategory::new(
                TeamworkExample,
                &[
                    r"\bteamwork\b",
                    r"\bwork(?:ed)?\s+(?:on|in|with)\s+a\s+team\b",
                    r"\bcollaborat(?:e|ed|ion|ing)\b",
                ],
                &["team", "collaborate", "colleagues", "together", "cross-functional"],
            )?,
            QuestionCategory::new(
                ChallengeOvercome,
                &[
                    r"\b(?:challenge|obstacle|difficult\s+(?:situation|problem|project))\b.*\b(?:overc[oa]me|faced|handled|solved)\b",
                    r"\b(?:overc[oa]me|faced)\b.*\b(?:challenge|obstacle|difficult)",
                ],
                &["challenge", "obstacle", "overcome", "difficult", "setback", "problem"],
            )?,
            QuestionCategory::new(
                WhyLeaving,
                &[
                    r"\bwhy\s+(?:are\s+you|did\s+you)\s+(?:leaving|leave|looking)\b",
                    r"\breason\s+for\s+(?:leaving|change|changing)\b",
                ],
                &["leaving", "leave", "current job", "current role", "new opportunity"],
            )?,
            QuestionCategory::new(
                SalaryExpectations,
                &[
                    r"\bsalary\b",
                    r"\bcompensation\s+(?:expectations?|requirements?)\b",
                    r"\b(?:expected|desired)\s+(?:pay|compensation|rate)\b",
                ],
                &["salary", "compensation", "pay", "expectations", "range"],
            )?,
            QuestionCategory::new(
                CareerGoals,
                &[
                    r"\bwhere\s+do\s+you\s+see\s+yourself\b",
                    r"\bcareer\s+(?:goals?|aspirations?|plans?|objectives?)\b",
                    r"\b(?:five|5|ten|10)\s+years\b",
                ],
                &["career", "goals", "future", "aspirations", "long-term"],
            )?,
            QuestionCategory::new(
                TechnicalAchievement,
                &[
                    r"\b(?:technical|engineering)\s+(?:achievement|accomplishment|project|challenge)\b",
                    r"\b(?:proudest|most\s+proud)\b",
                ],
                &["technical", "project", "built", "achievement", "proud", "accomplishment"],
            )?,
            QuestionCategory::new(
                WorkStyle,
                &[
                    r"\bwork(?:ing)?\s+style\b",
                    r"\bdescribe\s+how\s+you\s+(?:work|approach)\b",
                    r"\b(?:ideal|preferred)\s+work(?:ing)?\s+environment\b",
                ],
                &["style", "environment", "prefer", "independently", "approach"],
            )?,
            QuestionCategory::new(
                HandlePressure,
                &[
                    r"\b(?:pressure|stressful|stress|tight\s+deadlines?)\b",
                ],
                &["pressure", "stress", "deadline", "workload", "handle"],
            )?,
            QuestionCategory::new(
                ConflictResolution,
                &[r"\bconflicts?\b", r"\bdisagree(?:d|ment|ments)?\b"],
                &["conflict", "disagree", "coworker", "resolve", "tension"],
            )?,
            QuestionCategory::new(
                DiversityContribution,
                &[r"\bdiversity\b", r"\binclusi(?:on|ve|vity)\b", r"\b(?:dei|d&i)\b"],
                &["diversity", "inclusion", "inclusive", "equity", "perspective", "background"],
            )?,
        ];

        Ok(Self::new(categories))
    }
}
