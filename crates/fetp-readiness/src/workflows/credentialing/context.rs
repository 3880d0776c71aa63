use super::domain::AssessmentYear;
use serde::{Deserialize, Serialize};

/// Access profile chosen by the viewer. Only changes framing text, never what is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerRole {
    MinisterOfHealth,
    DonorPartner,
    Multilateral,
    NationalSecretariat,
    #[default]
    Visitor,
}

impl ViewerRole {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::MinisterOfHealth,
            Self::DonorPartner,
            Self::Multilateral,
            Self::NationalSecretariat,
            Self::Visitor,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::MinisterOfHealth => "Minister of Health",
            Self::DonorPartner => "Donor / Development Partner",
            Self::Multilateral => "WHO / CDC / Multilateral",
            Self::NationalSecretariat => "National Secretariat / Analyst",
            Self::Visitor => "Visitor",
        }
    }

    pub const fn mandate(self) -> &'static str {
        match self {
            Self::MinisterOfHealth => {
                "National system oversight, workforce investment, outbreak readiness."
            }
            Self::DonorPartner => {
                "Funding alignment, ROI tracking, sustainability intelligence."
            }
            Self::Multilateral => {
                "Global standards, credentialing, regional capacity coordination."
            }
            Self::NationalSecretariat => {
                "Operational monitoring, reporting, implementation support."
            }
            Self::Visitor => "General overview of field epidemiology training coverage.",
        }
    }

    /// Accepts snake_case keys or display labels; anything else is a visitor.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|role| {
                trimmed.eq_ignore_ascii_case(role.key()) || trimmed.eq_ignore_ascii_case(role.label())
            })
            .unwrap_or_default()
    }

    const fn key(self) -> &'static str {
        match self {
            Self::MinisterOfHealth => "minister_of_health",
            Self::DonorPartner => "donor_partner",
            Self::Multilateral => "multilateral",
            Self::NationalSecretariat => "national_secretariat",
            Self::Visitor => "visitor",
        }
    }
}

/// Per-request selection made by the viewer, passed explicitly to report builders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewContext {
    pub country: String,
    pub role: ViewerRole,
    pub year: AssessmentYear,
}

impl ReviewContext {
    pub fn new(country: impl Into<String>, role: ViewerRole, year: AssessmentYear) -> Self {
        Self {
            country: country.into(),
            role,
            year,
        }
    }
}
