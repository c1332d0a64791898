//! Requirement pattern catalog.
//!
//! Categories are evaluated in declaration order, and within a category the
//! rules are tried in order until one matches. Put specific rules (the ones
//! with captures used for extraction) ahead of generic ones.

use regex::{Captures, Regex};

use crate::errors::CatalogError;
use crate::requirements::models::RequirementKind;
use crate::requirements::status::{infer_required_clearance, required_language};
use crate::text::case_insensitive_regex;

/// Builds the human-readable requirement text from the matching rule's
/// captures and the full posting text. `None` falls back to "{label} required".
pub type ExtractValue = fn(&Captures<'_>, &str) -> Option<String>;

pub struct RequirementCategory {
    pub kind: RequirementKind,
    pub label: String,
    rules: Vec<Regex>,
    extract_value: Option<ExtractValue>,
}

impl RequirementCategory {
    pub fn new(
        kind: RequirementKind,
        label: impl Into<String>,
        patterns: &[&str],
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
            label: label.into(),
            rules,
            extract_value: None,
        })
    }

    pub fn with_extractor(mut self, extract: ExtractValue) -> Self {
        self.extract_value = Some(extract);
        self
    }

    /// Captures of the first rule that matches `text`, if any.
    pub fn first_match<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.rules.iter().find_map(|rule| rule.captures(text))
    }

    /// Requirement text for a match: the extracted specifics when extraction
    /// succeeds, otherwise the generic label.
    pub fn requirement_text(&self, caps: &Captures<'_>, full_text: &str) -> String {
        self.extract_value
            .and_then(|extract| extract(caps, full_text))
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| format!("{} required", self.label))
    }
}

/// Ordered set of requirement categories.
pub struct RequirementCatalog {
    categories: Vec<RequirementCategory>,
}

impl RequirementCatalog {
    pub fn new(categories: Vec<RequirementCategory>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[RequirementCategory] {
        &self.categories
    }

    /// The built-in catalog.
    pub fn standard() -> Result<Self, CatalogError> {
        let categories = vec![
            RequirementCategory::new(
                RequirementKind::Citizenship,
                "US Citizenship",
                &[
                    r"\b(?:u\.?\s?s\.?|united\s+states)\s+citizen(?:s|ship)?\b",
                    r"\bcitizenship\s+(?:is\s+)?required\b",
                    r"\bmust\s+be\s+(?:a\s+)?citizen\b",
                ],
            )?,
            RequirementCategory::new(
                RequirementKind::SecurityClearance,
                "Security clearance",
                &[
                    r"\bts\s*/\s*sci\b",
                    r"\btop\s+secret\b",
                    r"\b(?:secret|security|public\s+trust)\s+clearance\b",
                    r"\bclearance\s+(?:is\s+)?required\b",
                    r"\b(?:active|current)\s+clearance\b",
                    r"\bpublic\s+trust\b",
                ],
            )?
            .with_extractor(extract_clearance),
            RequirementCategory::new(
                RequirementKind::BackgroundCheck,
                "Background check",
                &[
                    r"\bbackground\s+(?:check|investigation|screening)s?\b",
                    r"\bcriminal\s+(?:background|history|record)\b",
                ],
            )?,
            RequirementCategory::new(
                RequirementKind::Sponsorship,
                "Work authorization without sponsorship",
                &[
                    r"\b(?:no|not|unable\s+to|cannot|can't|will\s+not|won't|does\s+not|do\s+not)\s+(?:\w+\s+){0,2}sponsor(?:ship)?\b",
                    r"\bsponsorship\s+(?:is\s+)?(?:not|unavailable)\b",
                    r"\bwithout\s+(?:\w+\s+){0,4}sponsorship\b",
                ],
            )?,
            RequirementCategory::new(
                RequirementKind::Language,
                "Language fluency",
                &[
                    r"\b(?:fluent|fluency|proficient|proficiency|native|bilingual)\b[^.\n]{0,40}?\b(?:english|spanish|french|german|mandarin|cantonese|chinese|japanese|korean|portuguese|italian|russian|arabic|hindi|dutch|vietnamese|tagalog|polish)\b",
                    r"\b(?:english|spanish|french|german|mandarin|cantonese|chinese|japanese|korean|portuguese|italian|russian|arabic|hindi|dutch|vietnamese|tagalog|polish)\s+(?:fluency|proficiency|speaker|speaking|required|language\s+skills)\b",
                    r"\bbilingual\b",
                ],
            )?
            .with_extractor(extract_language),
            RequirementCategory::new(
                RequirementKind::OnsiteLocation,
                "On-site work",
                &[
                    r"\b(?P<days>[1-5])\s*\+?\s*days?\s*(?:a|per|/|each)\s*week\b[^.\n]{0,40}?\b(?:on[\s-]?site|in[\s-]?office|in\s+the\s+office|in[\s-]?person)",
                    r"\b(?:on[\s-]?site|in[\s-]?office|in\s+the\s+office|in[\s-]?person)\b[^.\n]{0,40}?\b(?P<days>[1-5])\s*\+?\s*days?\s*(?:a|per|/|each)\s*week\b",
                    r"\b(?:on[\s-]?site|in[\s-]?office|in[\s-]?person)\s+(?:only|required|role|position|work)\b",
                    r"\b(?:must|required\s+to|expected\s+to)\s+(?:work|be|report)\s+(?:on[\s-]?site|in[\s-]?office|in\s+(?:the|our)\s+office|in[\s-]?person)",
                    r"\b(?:not\s+(?:a\s+)?remote|no\s+remote)\b",
                ],
            )?
            .with_extractor(extract_onsite_days),
            RequirementCategory::new(
                RequirementKind::Relocation,
                "Relocation",
                &[
                    r"\brelocat(?:e|ion)\s+to\s+(?P<city>(?-i:[A-Z][\w.'-]*(?:\s+[A-Z][\w.'-]*)*(?:,\s*[A-Z]{2})?))",
                    r"\b(?:must|willing(?:ness)?\s+to|required\s+to|need\s+to)\s+relocate\b",
                    r"\brelocation\s+(?:is\s+)?(?:required|mandatory|expected)\b",
                ],
            )?
            .with_extractor(extract_relocation_city),
            RequirementCategory::new(
                RequirementKind::DrugTest,
                "Drug test",
                &[
                    r"\bdrug\s+(?:test|testing|screen|screening)s?\b",
                    r"\b(?:toxicology|substance\s+abuse)\s+screen(?:ing)?\b",
                ],
            )?,
        ];

        Ok(Self::new(categories))
    }
}

fn extract_clearance(_caps: &Captures<'_>, full_text: &str) -> Option<String> {
    let required = infer_required_clearance(&full_text.to_lowercase());
    required
        .explicit
        .then(|| format!("{} clearance required", required.level.display_name()))
}

fn extract_language(caps: &Captures<'_>, full_text: &str) -> Option<String> {
    let span = caps.get(0).map_or("", |m| m.as_str());
    let language = required_language(span, &full_text.to_lowercase())?;
    let mut chars = language.chars();
    let capitalized: String = chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default();
    Some(format!("{capitalized} fluency required"))
}

fn extract_onsite_days(caps: &Captures<'_>, _full_text: &str) -> Option<String> {
    caps.name("days")
        .map(|days| format!("{} days/week on-site", days.as_str()))
}

fn extract_relocation_city(caps: &Captures<'_>, _full_text: &str) -> Option<String> {
    caps.name("city").map(|city| {
        let city = city.as_str().trim().trim_end_matches('.');
        format!("Relocate to {city}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(catalog: &RequirementCatalog, kind: RequirementKind) -> &RequirementCategory {
        catalog
            .categories()
            .iter()
            .find(|c| c.kind == kind)
            .unwrap()
    }

    fn text_for(kind: RequirementKind, posting: &str) -> Option<String> {
        let catalog = RequirementCatalog::standard().unwrap();
        let category = category(&catalog, kind);
        category
            .first_match(posting)
            .map(|caps| category.requirement_text(&caps, posting))
    }

    #[test]
    fn test_standard_catalog_compiles_in_declared_order() {
        let catalog = RequirementCatalog::standard().unwrap();
        let kinds: Vec<_> = catalog.categories().iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RequirementKind::Citizenship,
                RequirementKind::SecurityClearance,
                RequirementKind::BackgroundCheck,
                RequirementKind::Sponsorship,
                RequirementKind::Language,
                RequirementKind::OnsiteLocation,
                RequirementKind::Relocation,
                RequirementKind::DrugTest,
            ]
        );
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let result = RequirementCategory::new(RequirementKind::DrugTest, "Drug test", &["(drug"]);
        assert!(matches!(result, Err(CatalogError::InvalidPattern { .. })));
    }

    #[test]
    fn test_citizenship_tolerates_formatting() {
        for posting in [
            "US Citizenship required",
            "Applicants must be U.S. citizens",
            "United States citizen only",
        ] {
            assert_eq!(
                text_for(RequirementKind::Citizenship, posting).as_deref(),
                Some("US Citizenship required"),
                "{posting}"
            );
        }
    }

    #[test]
    fn test_onsite_days_are_extracted() {
        assert_eq!(
            text_for(
                RequirementKind::OnsiteLocation,
                "Hybrid schedule: 3 days/week in the office."
            )
            .as_deref(),
            Some("3 days/week on-site")
        );
        assert_eq!(
            text_for(
                RequirementKind::OnsiteLocation,
                "Expect to be on-site 4 days per week"
            )
            .as_deref(),
            Some("4 days/week on-site")
        );
    }

    #[test]
    fn test_generic_onsite_falls_back_to_label() {
        assert_eq!(
            text_for(RequirementKind::OnsiteLocation, "This role is on-site only.").as_deref(),
            Some("On-site work required")
        );
    }

    #[test]
    fn test_fully_remote_has_no_onsite_match() {
        assert_eq!(
            text_for(RequirementKind::OnsiteLocation, "This is a fully remote position"),
            None
        );
    }

    #[test]
    fn test_relocation_city_is_extracted() {
        assert_eq!(
            text_for(
                RequirementKind::Relocation,
                "Candidates must relocate. Relocate to Austin, TX within 60 days."
            )
            .as_deref(),
            Some("Relocate to Austin, TX")
        );
    }

    #[test]
    fn test_relocation_city_drops_sentence_period() {
        assert_eq!(
            text_for(RequirementKind::Relocation, "Relocation to Denver.").as_deref(),
            Some("Relocate to Denver")
        );
    }

    #[test]
    fn test_relocation_without_city_uses_label() {
        assert_eq!(
            text_for(RequirementKind::Relocation, "You must relocate for this role").as_deref(),
            Some("Relocation required")
        );
    }

    #[test]
    fn test_clearance_text_names_level() {
        assert_eq!(
            text_for(
                RequirementKind::SecurityClearance,
                "Must have active TS/SCI clearance"
            )
            .as_deref(),
            Some("TS/SCI clearance required")
        );
        assert_eq!(
            text_for(RequirementKind::SecurityClearance, "Clearance required").as_deref(),
            Some("Security clearance required")
        );
    }

    #[test]
    fn test_language_text_names_language() {
        assert_eq!(
            text_for(RequirementKind::Language, "Must be fluent in Spanish").as_deref(),
            Some("Spanish fluency required")
        );
        assert_eq!(
            text_for(RequirementKind::Language, "Bilingual candidates preferred").as_deref(),
            Some("Language fluency required")
        );
    }

    #[test]
    fn test_sponsorship_phrasings() {
        for posting in [
            "We are unable to provide sponsorship",
            "The company will not sponsor visas",
            "Must be authorized to work without the need for visa sponsorship",
            "Sponsorship is not available for this role",
        ] {
            assert!(
                text_for(RequirementKind::Sponsorship, posting).is_some(),
                "{posting}"
            );
        }
    }

    #[test]
    fn test_drug_and_background_checks() {
        assert!(text_for(RequirementKind::DrugTest, "Offer contingent on a drug screen").is_some());
        assert!(text_for(
            RequirementKind::BackgroundCheck,
            "Subject to a background check"
        )
        .is_some());
    }

    #[test]
    fn test_language_text_prefers_matched_span() {
        assert_eq!(
            text_for(
                RequirementKind::Language,
                "Join our English-speaking support team. Fluency in Japanese required."
            )
            .as_deref(),
            Some("Japanese fluency required")
        );
    }
}
