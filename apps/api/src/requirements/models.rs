use std::fmt;

use serde::{Deserialize, Serialize};

/// Screening requirement categories recognized in job postings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementKind {
    Citizenship,
    SecurityClearance,
    BackgroundCheck,
    Sponsorship,
    Language,
    OnsiteLocation,
    Relocation,
    DrugTest,
}

impl RequirementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementKind::Citizenship => "citizenship",
            RequirementKind::SecurityClearance => "security_clearance",
            RequirementKind::BackgroundCheck => "background_check",
            RequirementKind::Sponsorship => "sponsorship",
            RequirementKind::Language => "language",
            RequirementKind::OnsiteLocation => "onsite_location",
            RequirementKind::Relocation => "relocation",
            RequirementKind::DrugTest => "drug_test",
        }
    }
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementStatus {
    Met,
    AtRisk,
    Unknown,
}

/// A requirement found in a posting, before it is compared to a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedRequirement {
    pub kind: RequirementKind,
    pub label: String,
    pub requirement_text: String,
    /// The posting span the category's rule matched.
    pub matched_text: String,
}

/// Outcome of comparing one requirement against the candidate profile.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusResolution {
    pub status: RequirementStatus,
    pub candidate_value: Option<String>,
}

impl StatusResolution {
    pub fn unknown() -> Self {
        Self {
            status: RequirementStatus::Unknown,
            candidate_value: None,
        }
    }

    pub fn new(status: RequirementStatus, candidate_value: impl Into<String>) -> Self {
        Self {
            status,
            candidate_value: Some(candidate_value.into()),
        }
    }
}

/// A requirement the profile does not clearly satisfy. `met` results never
/// leave the scanner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementGap {
    pub kind: RequirementKind,
    pub label: String,
    pub requirement_text: String,
    pub status: RequirementStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_value: Option<String>,
}
