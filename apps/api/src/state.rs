use std::sync::Arc;

use anyhow::Result;

use crate::answers::catalog::QuestionCatalog;
use crate::answers::classifier::QuestionClassifier;
use crate::answers::matcher::AnswerMatcher;
use crate::config::Config;
use crate::requirements::catalog::RequirementCatalog;
use crate::requirements::scanner::RequirementScanner;

/// Shared application state injected into all route handlers via Axum extractors.
/// The engines are read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub scanner: Arc<RequirementScanner>,
    pub classifier: Arc<QuestionClassifier>,
    pub matcher: Arc<AnswerMatcher>,
}

impl AppState {
    /// Builds state around the built-in catalogs.
    pub fn standard(config: Config) -> Result<Self> {
        Ok(AppState {
            config,
            scanner: Arc::new(RequirementScanner::new(RequirementCatalog::standard()?)),
            classifier: Arc::new(QuestionClassifier::new(QuestionCatalog::standard()?)),
            matcher: Arc::new(AnswerMatcher::new()?),
        })
    }
}
