//! Status resolution: compares one detected requirement against the candidate profile.
//!
//! Every branch resolves to `Unknown` when the deciding profile field is absent.
//! A missing field is never read as `Met`.

use crate::models::profile::{
    CandidateRequirementProfile, ClearanceLevel, RemotePreference, WorkAuthorization,
};
use crate::requirements::models::{RequirementKind, RequirementStatus, StatusResolution};
use crate::text::{contains_term, find_term};

/// Natural languages recognized in postings, lower-cased.
pub const NAMED_LANGUAGES: &[&str] = &[
    "english",
    "spanish",
    "french",
    "german",
    "mandarin",
    "cantonese",
    "chinese",
    "japanese",
    "korean",
    "portuguese",
    "italian",
    "russian",
    "arabic",
    "hindi",
    "dutch",
    "vietnamese",
    "tagalog",
    "polish",
];

/// Clearance level a posting asks for, and whether the posting named it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredClearance {
    pub level: ClearanceLevel,
    pub explicit: bool,
}

/// Infers the required clearance from lower-cased posting text. The most
/// specific keyword wins; with no keyword the requirement defaults to an
/// implicit public-trust level.
pub fn infer_required_clearance(normalized_text: &str) -> RequiredClearance {
    let explicit = |level| RequiredClearance {
        level,
        explicit: true,
    };

    if ["ts/sci", "ts / sci", "ts-sci", "ts sci", "top secret/sci"]
        .iter()
        .any(|term| contains_term(normalized_text, term))
    {
        explicit(ClearanceLevel::TsSci)
    } else if contains_term(normalized_text, "top secret") {
        explicit(ClearanceLevel::TopSecret)
    } else if contains_term(normalized_text, "secret") {
        explicit(ClearanceLevel::Secret)
    } else if contains_term(normalized_text, "public trust") {
        explicit(ClearanceLevel::PublicTrust)
    } else {
        RequiredClearance {
            level: ClearanceLevel::PublicTrust,
            explicit: false,
        }
    }
}

/// Returns the named language that appears earliest in the lower-cased text.
pub fn find_named_language(normalized_text: &str) -> Option<&'static str> {
    NAMED_LANGUAGES
        .iter()
        .filter_map(|lang| find_term(normalized_text, lang).map(|start| (start, *lang)))
        .min_by_key(|(start, _)| *start)
        .map(|(_, lang)| lang)
}

/// Language a requirement asks for: the one named inside the matched rule
/// span, else the earliest one named anywhere in the posting.
pub fn required_language(matched_text: &str, normalized_text: &str) -> Option<&'static str> {
    find_named_language(&matched_text.to_lowercase())
        .or_else(|| find_named_language(normalized_text))
}

/// Resolves the candidate's status for a requirement of `kind`.
///
/// `matched_text` is the span the catalog rule matched and `normalized_text`
/// the lower-cased posting. Clearance reads the required level from the
/// posting; language prefers the language named in the span.
pub fn resolve_status(
    kind: RequirementKind,
    profile: &CandidateRequirementProfile,
    matched_text: &str,
    normalized_text: &str,
) -> StatusResolution {
    match kind {
        RequirementKind::Citizenship => resolve_citizenship(profile.work_authorization),
        RequirementKind::SecurityClearance => {
            resolve_clearance(profile.security_clearance, normalized_text)
        }
        RequirementKind::BackgroundCheck => resolve_capability(
            profile.can_pass_background_check,
            "Can pass background check",
            "Background check concern",
        ),
        RequirementKind::DrugTest => resolve_capability(
            profile.can_pass_drug_test,
            "Can pass drug test",
            "Drug test concern",
        ),
        RequirementKind::Relocation => resolve_capability(
            profile.willing_to_relocate,
            "Willing to relocate",
            "Not willing to relocate",
        ),
        RequirementKind::Sponsorship => resolve_sponsorship(profile.requires_sponsorship),
        RequirementKind::Language => {
            resolve_language(profile.languages.as_deref(), matched_text, normalized_text)
        }
        RequirementKind::OnsiteLocation => resolve_onsite(profile.remote_preference),
    }
}

fn resolve_citizenship(authorization: Option<WorkAuthorization>) -> StatusResolution {
    match authorization {
        None => StatusResolution::unknown(),
        Some(auth @ WorkAuthorization::Citizen) => {
            StatusResolution::new(RequirementStatus::Met, auth.display_name())
        }
        Some(auth) => StatusResolution::new(RequirementStatus::AtRisk, auth.display_name()),
    }
}

fn resolve_clearance(held: Option<ClearanceLevel>, normalized_text: &str) -> StatusResolution {
    let Some(held) = held else {
        return StatusResolution::unknown();
    };

    let required = infer_required_clearance(normalized_text);
    let status = match held {
        // No clearance against an unnamed level is undecidable.
        ClearanceLevel::None if !required.explicit => RequirementStatus::Unknown,
        ClearanceLevel::None => RequirementStatus::AtRisk,
        level if level.satisfies(required.level) => RequirementStatus::Met,
        _ => RequirementStatus::AtRisk,
    };

    StatusResolution::new(status, held.display_name())
}

/// Yes/no capability where `true` satisfies the requirement.
fn resolve_capability(
    capable: Option<bool>,
    met_value: &str,
    at_risk_value: &str,
) -> StatusResolution {
    match capable {
        None => StatusResolution::unknown(),
        Some(true) => StatusResolution::new(RequirementStatus::Met, met_value),
        Some(false) => StatusResolution::new(RequirementStatus::AtRisk, at_risk_value),
    }
}

/// Sponsorship requirements are phrased negatively ("no sponsorship"), so
/// needing sponsorship is the risk.
fn resolve_sponsorship(requires_sponsorship: Option<bool>) -> StatusResolution {
    match requires_sponsorship {
        None => StatusResolution::unknown(),
        Some(true) => StatusResolution::new(RequirementStatus::AtRisk, "Requires sponsorship"),
        Some(false) => StatusResolution::new(RequirementStatus::Met, "No sponsorship needed"),
    }
}

fn resolve_language(
    languages: Option<&[String]>,
    matched_text: &str,
    normalized_text: &str,
) -> StatusResolution {
    let Some(languages) = languages else {
        return StatusResolution::unknown();
    };
    let spoken = languages.join(", ");

    let Some(required) = required_language(matched_text, normalized_text) else {
        return StatusResolution {
            status: RequirementStatus::Unknown,
            candidate_value: Some(spoken),
        };
    };

    let speaks = languages
        .iter()
        .any(|lang| lang.to_lowercase().contains(required));
    let status = if speaks {
        RequirementStatus::Met
    } else {
        RequirementStatus::AtRisk
    };

    StatusResolution::new(status, spoken)
}

fn resolve_onsite(preference: Option<RemotePreference>) -> StatusResolution {
    match preference {
        None => StatusResolution::unknown(),
        Some(pref @ RemotePreference::Remote) => {
            StatusResolution::new(RequirementStatus::AtRisk, pref.display_name())
        }
        Some(pref) => StatusResolution::new(RequirementStatus::Met, pref.display_name()),
    }
}
