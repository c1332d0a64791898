//! Question classifier: maps free-text application questions to a known kind.
//!
//! Pass 1 tests each category's patterns in catalog order. Pass 2, reached only
//! when no pattern matched, counts keyword hits per category; the first
//! category with at least `KEYWORD_THRESHOLD` hits wins.

use serde::{Deserialize, Serialize};

use crate::answers::catalog::QuestionCatalog;
use crate::models::answer_bank::QuestionKind;

pub const KEYWORD_THRESHOLD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClassificationMethod {
    Pattern,
    Keywords { hits: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub kind: QuestionKind,
    pub method: ClassificationMethod,
}

pub struct QuestionClassifier {
    catalog: QuestionCatalog,
}

impl QuestionClassifier {
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Returns the question's kind, or `None` for an uncategorized question.
    pub fn classify(&self, question: &str) -> Option<QuestionKind> {
        self.classify_detailed(question).map(|c| c.kind)
    }

    /// Like `classify`, but also reports which pass decided.
    pub fn classify_detailed(&self, question: &str) -> Option<Classification> {
        if question.trim().is_empty() {
            return None;
        }

        if let Some(category) = self
            .catalog
            .categories()
            .iter()
            .find(|c| c.matches_rule(question))
        {
            return Some(Classification {
                kind: category.kind,
                method: ClassificationMethod::Pattern,
            });
        }

        let normalized = question.to_lowercase();
        self.catalog.categories().iter().find_map(|category| {
            let hits = category.keyword_hits(&normalized);
            (hits >= KEYWORD_THRESHOLD).then_some(Classification {
                kind: category.kind,
                method: ClassificationMethod::Keywords { hits },
            })
        })
    }
}
