//! Answer matcher: finds the best cached answer for a question.
//!
//! Resolution order, first success wins:
//! 1. Custom answers, in bank insertion order, pattern as a case-insensitive regex
//! 2. The cached answer for the question's classified kind
//! 3. Any cached answer whose question shares at least `FUZZY_MIN_SHARED_WORDS`
//!    significant words with the incoming question
//!
//! The company placeholder is replaced in whatever answer is returned.

use std::collections::HashSet;

use regex::NoExpand;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::answers::classifier::QuestionClassifier;
use crate::errors::CatalogError;
use crate::models::answer_bank::{AnswerBank, QuestionKind};
use crate::text::{caller_regex, case_insensitive_regex, significant_words};

pub const COMPANY_PLACEHOLDER: &str = "{company}";
pub const FUZZY_MIN_SHARED_WORDS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    Custom,
    Classified,
    Fuzzy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerMatch {
    pub answer: String,
    pub source: MatchSource,
    pub kind: Option<QuestionKind>,
}

pub struct AnswerMatcher {
    placeholder: regex::Regex,
}

impl AnswerMatcher {
    pub fn new() -> Result<Self, CatalogError> {
        let placeholder = case_insensitive_regex(&regex::escape(COMPANY_PLACEHOLDER))
            .map_err(|e| CatalogError::invalid_pattern("company_placeholder", e))?;
        Ok(Self { placeholder })
    }

    /// The matched answer text, or `None` when nothing in the bank fits.
    pub fn find_matching_answer(
        &self,
        classifier: &QuestionClassifier,
        question: &str,
        bank: &AnswerBank,
        company_name: Option<&str>,
    ) -> Option<String> {
        self.find_match(classifier, question, bank, company_name)
            .map(|m| m.answer)
    }

    /// Like `find_matching_answer`, but also reports which pass matched.
    pub fn find_match(
        &self,
        classifier: &QuestionClassifier,
        question: &str,
        bank: &AnswerBank,
        company_name: Option<&str>,
    ) -> Option<AnswerMatch> {
        let found = match_custom(question, bank)
            .or_else(|| match_classified(classifier, question, bank))
            .or_else(|| match_fuzzy(question, bank))?;

        debug!(source = ?found.source, kind = ?found.kind, "matched cached answer");

        Some(AnswerMatch {
            answer: self.fill_company(&found.answer, company_name),
            ..found
        })
    }

    /// Replaces every case-insensitive `{company}` with `company_name`. Without
    /// a company name the placeholder is left as written.
    pub fn fill_company(&self, answer: &str, company_name: Option<&str>) -> String {
        match company_name {
            Some(name) => self
                .placeholder
                .replace_all(answer, NoExpand(name))
                .into_owned(),
            None => answer.to_string(),
        }
    }
}

fn match_custom(question: &str, bank: &AnswerBank) -> Option<AnswerMatch> {
    bank.custom_answers.iter().find_map(|(source, answer)| {
        // One malformed pattern must not stop evaluation of the rest.
        let pattern = match caller_regex(source) {
            Ok(pattern) => pattern,
            Err(e) => {
                warn!(pattern = %source, "skipping invalid custom answer pattern: {e}");
                return None;
            }
        };

        pattern.is_match(question).then(|| AnswerMatch {
            answer: answer.clone(),
            source: MatchSource::Custom,
            kind: None,
        })
    })
}

fn match_classified(
    classifier: &QuestionClassifier,
    question: &str,
    bank: &AnswerBank,
) -> Option<AnswerMatch> {
    let kind = classifier.classify(question)?;
    bank.cached(kind).map(|cached| AnswerMatch {
        answer: cached.answer.clone(),
        source: MatchSource::Classified,
        kind: Some(kind),
    })
}

fn match_fuzzy(question: &str, bank: &AnswerBank) -> Option<AnswerMatch> {
    let incoming: HashSet<String> = significant_words(question).into_iter().collect();
    if incoming.is_empty() {
        return None;
    }

    bank.common_questions.iter().find_map(|cached| {
        let shared = significant_words(&cached.question)
            .into_iter()
            .collect::<HashSet<_>>()
            .intersection(&incoming)
            .count();

        (shared >= FUZZY_MIN_SHARED_WORDS).then(|| AnswerMatch {
            answer: cached.answer.clone(),
            source: MatchSource::Fuzzy,
            kind: Some(cached.kind),
        })
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::answers::catalog::QuestionCatalog;
    use indexmap::IndexMap;

    use crate::models::answer_bank::CachedAnswer;

    fn classifier() -> QuestionClassifier {
        QuestionClassifier::new(QuestionCatalog::standard().unwrap())
    }

    fn cached(kind: QuestionKind, question: &str, answer: &str) -> CachedAnswer {
        CachedAnswer {
            kind,
            question: question.to_string(),
            answer: answer.to_string(),
            generated_at: Utc::now(),
            usage_count: 1,
        }
    }

    fn custom(entries: &[(&str, &str)]) -> IndexMap<String, String> {
        entries
            .iter()
            .map(|(pattern, answer)| (pattern.to_string(), answer.to_string()))
            .collect()
    }

    #[test]
    fn test_custom_answer_beats_classified_cache() {
        let bank = AnswerBank {
            common_questions: vec![cached(
                QuestionKind::SalaryExpectations,
                "What are your salary expectations?",
                "Cached salary answer",
            )],
            custom_answers: custom(&[("salary.*expect", "Open to discussing at {Company}.")]),
            ..AnswerBank::default()
        };
        let matcher = AnswerMatcher::new().unwrap();

        let found = matcher
            .find_match(
                &classifier(),
                "What are your salary expectations?",
                &bank,
                Some("Acme"),
            )
            .unwrap();
        assert_eq!(found.source, MatchSource::Custom);
        assert_eq!(found.answer, "Open to discussing at Acme.");
    }

    #[test]
    fn test_invalid_custom_pattern_fails_closed() {
        let bank = AnswerBank {
            custom_answers: custom(&[
                ("(unclosed", "never returned"),
                ("favorite\\s+fruit", "Mango"),
            ]),
            ..AnswerBank::default()
        };
        let answer = AnswerMatcher::new().unwrap().find_matching_answer(
            &classifier(),
            "What is your favorite fruit?",
            &bank,
            None,
        );
        assert_eq!(answer.as_deref(), Some("Mango"));
    }

    #[test]
    fn test_oversized_custom_pattern_is_skipped() {
        let bank = AnswerBank {
            custom_answers: custom(&[
                (r"(?:\w{500}){20}", "never returned"),
                ("favorite\\s+fruit", "Mango"),
            ]),
            ..AnswerBank::default()
        };
        let answer = AnswerMatcher::new().unwrap().find_matching_answer(
            &classifier(),
            "What is your favorite fruit?",
            &bank,
            None,
        );
        assert_eq!(answer.as_deref(), Some("Mango"));
    }

    #[test]
    fn test_custom_answers_follow_insertion_order() {
        let bank = AnswerBank {
            custom_answers: custom(&[("start", "first"), ("start date", "second")]),
            ..AnswerBank::default()
        };
        let answer = AnswerMatcher::new().unwrap().find_matching_answer(
            &classifier(),
            "What is your earliest start date?",
            &bank,
            None,
        );
        assert_eq!(answer.as_deref(), Some("first"));
    }

    #[test]
    fn test_classified_cache_used_for_rephrased_question() {
        let bank = AnswerBank {
            common_questions: vec![cached(
                QuestionKind::GreatestWeakness,
                "What is your greatest weakness?",
                "I over-prepare.",
            )],
            ..AnswerBank::default()
        };
        let found = AnswerMatcher::new()
            .unwrap()
            .find_match(&classifier(), "Name one of your weaknesses", &bank, None)
            .unwrap();
        assert_eq!(found.source, MatchSource::Classified);
        assert_eq!(found.kind, Some(QuestionKind::GreatestWeakness));
    }

    #[test]
    fn test_fuzzy_fallback_needs_two_shared_words() {
        let bank = AnswerBank {
            common_questions: vec![cached(
                QuestionKind::TechnicalAchievement,
                "Describe the hardest migration project you delivered",
                "Moved billing to event sourcing.",
            )],
            ..AnswerBank::default()
        };
        let matcher = AnswerMatcher::new().unwrap();

        let found = matcher
            .find_match(
                &classifier(),
                "Which migration did you find hardest?",
                &bank,
                None,
            )
            .unwrap();
        assert_eq!(found.source, MatchSource::Fuzzy);

        assert!(matcher
            .find_match(&classifier(), "Which migration tools?", &bank, None)
            .is_none());
    }

    #[test]
    fn test_placeholder_left_verbatim_without_company() {
        let bank = AnswerBank {
            custom_answers: custom(&[("why.*here", "I admire {company} and {COMPANY}.")]),
            ..AnswerBank::default()
        };
        let matcher = AnswerMatcher::new().unwrap();
        assert_eq!(
            matcher
                .find_matching_answer(&classifier(), "Why here?", &bank, None)
                .as_deref(),
            Some("I admire {company} and {COMPANY}.")
        );
        assert_eq!(
            matcher
                .find_matching_answer(&classifier(), "Why here?", &bank, Some("$1 Corp"))
                .as_deref(),
            Some("I admire $1 Corp and $1 Corp.")
        );
    }

    #[test]
    fn test_no_match_returns_none() {
        let answer = AnswerMatcher::new().unwrap().find_matching_answer(
            &classifier(),
            "What color is your favorite fruit?",
            &AnswerBank::default(),
            Some("Acme"),
        );
        assert_eq!(answer, None);
    }
}
