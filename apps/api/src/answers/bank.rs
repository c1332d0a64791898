//! Answer bank transforms. Every function takes the caller's bank by reference
//! and returns a new bank; nothing here mutates caller-owned state.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::answers::catalog::QuestionCatalog;
use crate::answers::classifier::QuestionClassifier;
use crate::models::answer_bank::{
    AnswerBank, CachedAnswer, ProfileSummary, QuestionKind,
};
use crate::text::significant_words;

/// Words kept when deriving a custom-answer key.
const MAX_KEY_WORDS: usize = 5;
/// Characters kept from the raw question when no significant word exists.
const MAX_RAW_KEY_CHARS: usize = 80;
/// Joins derived key words; anything may appear between them.
const KEY_SEPARATOR: &str = ".*";

/// Adds a question/answer pair, timestamped now.
pub fn add_answer_to_bank(
    classifier: &QuestionClassifier,
    question: &str,
    answer: &str,
    bank: &AnswerBank,
) -> AnswerBank {
    add_answer_to_bank_at(classifier, question, answer, bank, Utc::now())
}

/// Classified questions replace the cached answer for their kind (usage reset
/// to 1). Unclassified questions go to `custom_answers` under a derived key.
pub fn add_answer_to_bank_at(
    classifier: &QuestionClassifier,
    question: &str,
    answer: &str,
    bank: &AnswerBank,
    now: DateTime<Utc>,
) -> AnswerBank {
    let mut updated = bank.clone();

    if let Some(kind) = classifier.classify(question) {
        let entry = CachedAnswer {
            kind,
            question: question.to_string(),
            answer: answer.to_string(),
            generated_at: now,
            usage_count: 1,
        };
        match updated.common_questions.iter_mut().find(|c| c.kind == kind) {
            Some(existing) => *existing = entry,
            None => updated.common_questions.push(entry),
        }
        debug!(%kind, "cached classified answer");
        return updated;
    }

    let Some(pattern) = derive_custom_pattern(question) else {
        debug!("dropping answer for empty question");
        return updated;
    };

    // An existing key keeps its position; a new key goes last.
    updated.custom_answers.insert(pattern, answer.to_string());
    updated
}

/// Derives the custom-answer key for an unclassified question.
///
/// Normally the first five words longer than three characters, joined by
/// `.*`. A question with no such word falls back to its escaped, lower-cased
/// text so the answer is not lost. Only blank questions yield `None`.
pub fn derive_custom_pattern(question: &str) -> Option<String> {
    let words: Vec<String> = significant_words(question)
        .into_iter()
        .take(MAX_KEY_WORDS)
        .collect();
    if !words.is_empty() {
        return Some(words.join(KEY_SEPARATOR));
    }

    let raw = question.trim().to_lowercase();
    if raw.is_empty() {
        return None;
    }
    let truncated: String = raw.chars().take(MAX_RAW_KEY_CHARS).collect();
    Some(regex::escape(&truncated))
}

/// Increments the usage count of the cached answer for `kind`. Unknown kinds
/// leave the bank unchanged.
pub fn record_usage(bank: &AnswerBank, kind: QuestionKind) -> AnswerBank {
    let mut updated = bank.clone();
    if let Some(cached) = updated.common_questions.iter_mut().find(|c| c.kind == kind) {
        cached.usage_count = cached.usage_count.saturating_add(1);
    }
    updated
}

/// Starter bank seeded from the candidate summary, timestamped now.
pub fn generate_default_answer_bank(
    catalog: &QuestionCatalog,
    summary: &ProfileSummary,
) -> AnswerBank {
    generate_default_answer_bank_at(catalog, summary, Utc::now())
}

pub fn generate_default_answer_bank_at(
    catalog: &QuestionCatalog,
    summary: &ProfileSummary,
    now: DateTime<Utc>,
) -> AnswerBank {
    let title = summary
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or("professional");
    let years = match summary.years_experience {
        Some(1) => "1 year".to_string(),
        Some(n) => format!("{n} years"),
        None => "several years".to_string(),
    };
    let skills: Vec<&str> = summary
        .skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .take(3)
        .collect();
    let skill_list = if skills.is_empty() {
        "my core areas".to_string()
    } else {
        skills.join(", ")
    };
    let top_skill = skills.first().copied().unwrap_or("solving problems end to end");

    let seeded = [
        (
            QuestionKind::WhyInterested,
            "Why are you interested in this role?",
            format!(
                "I'm excited about this opportunity at {{company}} because it lets me apply \
                 my {years} of experience as a {title}, particularly in {skill_list}, to \
                 problems that matter to the team."
            ),
        ),
        (
            QuestionKind::GreatestStrength,
            "What is your greatest strength?",
            format!(
                "My greatest strength is {top_skill}. Over {years} as a {title} I've relied \
                 on it to deliver consistent results."
            ),
        ),
        (
            QuestionKind::CareerGoals,
            "Where do you see yourself in five years?",
            format!(
                "In five years I want to have grown as a {title}, deepening my expertise in \
                 {skill_list} and taking on broader ownership of the work."
            ),
        ),
        (
            QuestionKind::WorkStyle,
            "How would you describe your work style?",
            "I work independently and communicate early: I break problems down, share \
             progress openly, and ask for feedback before decisions get expensive."
                .to_string(),
        ),
    ];

    let common_questions = seeded
        .into_iter()
        .map(|(kind, question, answer)| CachedAnswer {
            kind,
            question: question.to_string(),
            answer,
            generated_at: now,
            usage_count: 0,
        })
        .collect();

    let custom_answers = [
        (
            r"anything\s+else|additional\s+information",
            "Thank you for considering my application. I'm excited about the chance to \
             contribute to {company} and happy to provide anything else you need.",
        ),
        (
            r"interview.*availab|availab.*interview",
            "I'm available for interviews on weekdays and can adjust my schedule as needed.",
        ),
        (
            r"how\s+did\s+you\s+hear|referr(?:al|ed)",
            "I found this position while researching opportunities at {company}.",
        ),
    ]
    .into_iter()
    .map(|(pattern, answer)| (pattern.to_string(), answer.to_string()))
    .collect();

    AnswerBank {
        common_questions,
        patterns: catalog.snapshot(),
        custom_answers,
    }
}
