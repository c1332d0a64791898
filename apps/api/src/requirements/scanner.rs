//! Requirement scanner: applies the requirement catalog to a posting and
//! reconciles every hit against the candidate profile.
//!
//! Algorithm:
//! 1. Walk the catalog in declaration order
//! 2. Per category, stop at the first matching rule (one hit per kind)
//! 3. Build the requirement text from the extractor, or "{label} required"
//! 4. Resolve the candidate's status; keep only non-`met` results

use tracing::debug;

use crate::models::profile::CandidateRequirementProfile;
use crate::requirements::catalog::RequirementCatalog;
use crate::requirements::models::{DetectedRequirement, RequirementGap, RequirementStatus};
use crate::requirements::status::resolve_status;

pub struct RequirementScanner {
    catalog: RequirementCatalog,
}

impl RequirementScanner {
    pub fn new(catalog: RequirementCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &RequirementCatalog {
        &self.catalog
    }

    /// Detects requirements in `job_text` without comparing them to a profile.
    pub fn detect(&self, job_text: &str) -> Vec<DetectedRequirement> {
        self.catalog
            .categories()
            .iter()
            .filter_map(|category| {
                let caps = category.first_match(job_text)?;
                Some(DetectedRequirement {
                    kind: category.kind,
                    label: category.label.clone(),
                    requirement_text: category.requirement_text(&caps, job_text),
                    matched_text: caps
                        .get(0)
                        .map_or_else(String::new, |m| m.as_str().to_string()),
                })
            })
            .collect()
    }

    /// Returns the gaps between the posting's requirements and the profile,
    /// in catalog order. Requirements the profile meets are dropped.
    pub fn scan(
        &self,
        job_text: &str,
        profile: &CandidateRequirementProfile,
    ) -> Vec<RequirementGap> {
        let normalized = job_text.to_lowercase();

        self.detect(job_text)
            .into_iter()
            .filter_map(|detected| {
                let resolution = resolve_status(
                    detected.kind,
                    profile,
                    &detected.matched_text,
                    &normalized,
                );
                debug!(
                    kind = %detected.kind,
                    status = ?resolution.status,
                    "resolved requirement"
                );

                if resolution.status == RequirementStatus::Met {
                    return None;
                }

                Some(RequirementGap {
                    kind: detected.kind,
                    label: detected.label,
                    requirement_text: detected.requirement_text,
                    status: resolution.status,
                    candidate_value: resolution.candidate_value,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{ClearanceLevel, RemotePreference, WorkAuthorization};
    use crate::requirements::catalog::RequirementCategory;
    use crate::requirements::models::RequirementKind;

    fn scanner() -> RequirementScanner {
        RequirementScanner::new(RequirementCatalog::standard().unwrap())
    }

    #[test]
    fn test_citizenship_visa_holder_yields_single_gap() {
        let profile = CandidateRequirementProfile {
            work_authorization: Some(WorkAuthorization::Visa),
            ..Default::default()
        };
        let gaps = scanner().scan("US Citizenship required", &profile);

        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].kind, RequirementKind::Citizenship);
        assert_eq!(gaps[0].status, RequirementStatus::AtRisk);
        assert_eq!(gaps[0].candidate_value.as_deref(), Some("Visa holder"));
        assert!(!gaps[0].requirement_text.is_empty());
    }

    #[test]
    fn test_ts_sci_against_secret_is_at_risk() {
        let profile = CandidateRequirementProfile {
            security_clearance: Some(ClearanceLevel::Secret),
            ..Default::default()
        };
        let gaps = scanner().scan("Must have active TS/SCI clearance", &profile);

        let clearance = gaps
            .iter()
            .find(|g| g.kind == RequirementKind::SecurityClearance)
            .expect("clearance gap");
        assert_eq!(clearance.status, RequirementStatus::AtRisk);
        assert_eq!(clearance.requirement_text, "TS/SCI clearance required");
    }

    #[test]
    fn test_ts_sci_against_ts_sci_is_filtered_as_met() {
        let profile = CandidateRequirementProfile {
            security_clearance: Some(ClearanceLevel::TsSci),
            ..Default::default()
        };
        let gaps = scanner().scan("Must have active TS/SCI clearance", &profile);
        assert!(gaps
            .iter()
            .all(|g| g.kind != RequirementKind::SecurityClearance));
    }

    #[test]
    fn test_fully_remote_posting_has_no_location_gap() {
        for profile in [
            CandidateRequirementProfile::default(),
            CandidateRequirementProfile {
                remote_preference: Some(RemotePreference::Remote),
                ..Default::default()
            },
        ] {
            let gaps = scanner().scan("This is a fully remote position", &profile);
            assert!(gaps
                .iter()
                .all(|g| g.kind != RequirementKind::OnsiteLocation));
        }
    }

    #[test]
    fn test_one_gap_per_kind_even_when_several_rules_match() {
        let posting = "Top Secret clearance required. Active TS/SCI clearance. Secret clearance a must.";
        let gaps = scanner().scan(posting, &CandidateRequirementProfile::default());
        let clearance_gaps = gaps
            .iter()
            .filter(|g| g.kind == RequirementKind::SecurityClearance)
            .count();
        assert_eq!(clearance_gaps, 1);
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(scanner()
            .scan("", &CandidateRequirementProfile::default())
            .is_empty());
        assert!(scanner().detect("   ").is_empty());
    }

    #[test]
    fn test_gaps_follow_catalog_order() {
        let posting = "Offer contingent on drug screening. Must relocate. US citizens only. \
                       Background check required.";
        let kinds: Vec<_> = scanner()
            .scan(posting, &CandidateRequirementProfile::default())
            .into_iter()
            .map(|g| g.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                RequirementKind::Citizenship,
                RequirementKind::BackgroundCheck,
                RequirementKind::Relocation,
                RequirementKind::DrugTest,
            ]
        );
    }

    #[test]
    fn test_specific_onsite_text_is_surfaced() {
        let profile = CandidateRequirementProfile {
            remote_preference: Some(RemotePreference::Remote),
            ..Default::default()
        };
        let gaps = scanner().scan("Hybrid role, 3 days a week in-office in Denver.", &profile);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].requirement_text, "3 days/week on-site");
        assert_eq!(gaps[0].status, RequirementStatus::AtRisk);
    }

    #[test]
    fn test_absent_profile_fields_surface_as_unknown() {
        let posting = "Must be fluent in German. Subject to background check.";
        let gaps = scanner().scan(posting, &CandidateRequirementProfile::default());
        assert_eq!(gaps.len(), 2);
        assert!(gaps.iter().all(|g| g.status == RequirementStatus::Unknown));
    }

    #[test]
    fn test_custom_catalog_substitution() {
        let catalog = RequirementCatalog::new(vec![RequirementCategory::new(
            RequirementKind::DrugTest,
            "Drug test",
            &[r"\bpee\s+test\b"],
        )
        .unwrap()]);
        let scanner = RequirementScanner::new(catalog);
        let detected = scanner.detect("Includes a pee test. Also a drug screening.");
        assert_eq!(detected.len(), 1);
        assert_eq!(detected[0].requirement_text, "Drug test required");
    }

    #[test]
    fn test_incidental_language_does_not_mask_required_one() {
        let profile = CandidateRequirementProfile {
            languages: Some(vec!["English".to_string()]),
            ..Default::default()
        };
        let posting = "Join our English-speaking support team. Fluency in Japanese required.";

        let detected = scanner().detect(posting);
        assert_eq!(detected.len(), 1);
        assert_eq!(detected[0].requirement_text, "Japanese fluency required");
        assert_eq!(detected[0].matched_text, "Fluency in Japanese");

        let gaps = scanner().scan(posting, &profile);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].kind, RequirementKind::Language);
        assert_eq!(gaps[0].status, RequirementStatus::AtRisk);
        assert_eq!(gaps[0].candidate_value.as_deref(), Some("English"));
    }
}
