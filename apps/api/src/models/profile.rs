use serde::{Deserialize, Serialize};

/// Work authorization category declared by the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkAuthorization {
    Citizen,
    PermanentResident,
    Visa,
    Other,
}

impl WorkAuthorization {
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkAuthorization::Citizen => "US Citizen",
            WorkAuthorization::PermanentResident => "Permanent resident",
            WorkAuthorization::Visa => "Visa holder",
            WorkAuthorization::Other => "Other authorization",
        }
    }
}

/// Security clearance levels, ranked. Comparisons go through `rank()`,
/// never through the serialized names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearanceLevel {
    None,
    PublicTrust,
    Secret,
    TopSecret,
    TsSci,
}

impl ClearanceLevel {
    pub fn rank(&self) -> u8 {
        match self {
            ClearanceLevel::None => 0,
            ClearanceLevel::PublicTrust => 1,
            ClearanceLevel::Secret => 2,
            ClearanceLevel::TopSecret => 3,
            ClearanceLevel::TsSci => 4,
        }
    }

    /// True when this level is at least as high as `required`.
    pub fn satisfies(&self, required: ClearanceLevel) -> bool {
        self.rank() >= required.rank()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ClearanceLevel::None => "No clearance",
            ClearanceLevel::PublicTrust => "Public Trust",
            ClearanceLevel::Secret => "Secret",
            ClearanceLevel::TopSecret => "Top Secret",
            ClearanceLevel::TsSci => "TS/SCI",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemotePreference {
    Remote,
    Hybrid,
    Onsite,
    Flexible,
}

impl RemotePreference {
    pub fn display_name(&self) -> &'static str {
        match self {
            RemotePreference::Remote => "Prefers remote",
            RemotePreference::Hybrid => "Open to hybrid",
            RemotePreference::Onsite => "Prefers on-site",
            RemotePreference::Flexible => "Flexible",
        }
    }
}

/// Sparse candidate record used to resolve screening requirements.
///
/// Every field is optional. A missing field always resolves to `unknown`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateRequirementProfile {
    #[serde(default)]
    pub work_authorization: Option<WorkAuthorization>,
    #[serde(default)]
    pub requires_sponsorship: Option<bool>,
    #[serde(default)]
    pub security_clearance: Option<ClearanceLevel>,
    #[serde(default)]
    pub can_pass_background_check: Option<bool>,
    #[serde(default)]
    pub can_pass_drug_test: Option<bool>,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub willing_to_relocate: Option<bool>,
    #[serde(default)]
    pub remote_preference: Option<RemotePreference>,
}
