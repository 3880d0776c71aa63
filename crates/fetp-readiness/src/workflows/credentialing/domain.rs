use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier linking a program row to its modality reference row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModalityId(pub String);

impl ModalityId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key used for reference lookups: surrounding whitespace and ASCII case are ignored.
    pub(crate) fn lookup_key(&self) -> String {
        self.0.trim().to_ascii_lowercase()
    }
}

impl fmt::Display for ModalityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Yes/No column value. Every source value other than a case-insensitive "yes" reads as `No`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YesNoFlag {
    Yes,
    #[default]
    No,
}

impl YesNoFlag {
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("yes") {
            Self::Yes
        } else {
            Self::No
        }
    }

    pub fn from_optional(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or_default()
    }

    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl From<bool> for YesNoFlag {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// One training program instance as loaded from the program table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub program_name: String,
    pub country: String,
    #[serde(default)]
    pub modality: Option<ModalityId>,
    #[serde(default)]
    pub accredited: YesNoFlag,
    #[serde(default)]
    pub host_institution: Option<String>,
    #[serde(default)]
    pub established: Option<i32>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub tephinet_member: YesNoFlag,
    #[serde(default)]
    pub who_region: Option<String>,
    #[serde(default)]
    pub discipline: Option<String>,
}

impl Program {
    /// A host that is absent or only whitespace cannot be held accountable.
    pub fn accountable_host(&self) -> Option<&str> {
        self.host_institution
            .as_deref()
            .map(str::trim)
            .filter(|host| !host.is_empty())
    }

    pub fn network_name(&self) -> Option<&str> {
        self.network
            .as_deref()
            .map(str::trim)
            .filter(|network| !network.is_empty())
    }
}

/// Training track reference row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modality {
    pub modality_id: ModalityId,
    pub name: String,
    pub duration_months: f64,
    pub field_based_percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Country reference row carrying the WHO region used for filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub country: String,
    pub who_region: String,
}

/// Calendar year that program maturity is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentYear(pub i32);

impl AssessmentYear {
    pub const EARLIEST: i32 = 1900;
    pub const LATEST: i32 = 9999;

    /// `None` outside `EARLIEST..=LATEST`.
    pub fn checked(year: i32) -> Option<Self> {
        (Self::EARLIEST..=Self::LATEST)
            .contains(&year)
            .then_some(Self(year))
    }

    pub fn current() -> Self {
        Self(chrono::Local::now().year())
    }

    /// Years elapsed since `established`, never negative.
    pub fn years_since(self, established: i32) -> u32 {
        u32::try_from(self.0.saturating_sub(established)).unwrap_or(0)
    }
}

impl fmt::Display for AssessmentYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityStatus {
    Eligible,
    ConditionallyEligible,
    NotEligible,
}

impl EligibilityStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Eligible, Self::ConditionallyEligible, Self::NotEligible]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Eligible => "Eligible",
            Self::ConditionallyEligible => "Conditionally Eligible",
            Self::NotEligible => "Not Eligible",
        }
    }
}

impl fmt::Display for EligibilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessTier {
    High,
    Moderate,
    Emerging,
}

impl ReadinessTier {
    pub const fn from_score(score: u8) -> Self {
        if score >= 75 {
            Self::High
        } else if score >= 50 {
            Self::Moderate
        } else {
            Self::Emerging
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High Readiness",
            Self::Moderate => "Moderate Readiness",
            Self::Emerging => "Emerging Readiness",
        }
    }
}

impl fmt::Display for ReadinessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
