use chrono::{DateTime, Local};
use fake::Dummy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reasons an applicant may borrow for.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanPurpose {
    Education,
    Medical,
    Business,
    Personal,
}

impl LoanPurpose {
    pub const ALL: [LoanPurpose; 4] = [
        LoanPurpose::Education,
        LoanPurpose::Medical,
        LoanPurpose::Business,
        LoanPurpose::Personal,
    ];

    /// Wire value understood by the eligibility service.
    ///
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanPurpose::Education => "education",
            LoanPurpose::Medical => "medical",
            LoanPurpose::Business => "business",
            LoanPurpose::Personal => "personal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoanPurpose::Education => "Education",
            LoanPurpose::Medical => "Medical",
            LoanPurpose::Business => "Business",
            LoanPurpose::Personal => "Personal",
        }
    }
}

impl fmt::Display for LoanPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoanPurpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LoanPurpose::ALL
            .iter()
            .copied()
            .find(|purpose| purpose.as_str() == s)
            .ok_or_else(|| format!("unknown loan purpose '{}'", s))
    }
}

/// Body of a new loan application.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub age: u8,
    pub monthly_income: f64,
    pub loan_amount: f64,
    pub loan_purpose: LoanPurpose,
}

/// Decision returned for a freshly submitted application.
///
#[derive(Clone, Debug, Dummy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationReceipt {
    pub application_id: String,
    pub eligible: bool,
    pub reason: String,
    pub timestamp: String,
}

/// One row of the applications listing.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSummary {
    pub id: String,
    pub status: String,
    pub purpose: String,
}

/// One page of the applications listing.
///
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPage {
    pub applications: Vec<ApplicationSummary>,
    pub total_pages: u32,
}

/// Optional constraints for the applications listing. `None` means no
/// constraint and is left out of the query entirely.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<LoanPurpose>,
}

impl ApplicationFilters {
    /// Rotate the eligibility filter through any, eligible, ineligible.
    ///
    pub fn cycle_eligible(&mut self) -> &mut Self {
        self.eligible = match self.eligible {
            None => Some(true),
            Some(true) => Some(false),
            Some(false) => None,
        };
        self
    }

    /// Rotate the purpose filter through any and each known purpose.
    ///
    pub fn cycle_purpose(&mut self) -> &mut Self {
        self.purpose = match self.purpose {
            None => Some(LoanPurpose::ALL[0]),
            Some(current) => LoanPurpose::ALL
                .iter()
                .position(|p| *p == current)
                .and_then(|i| LoanPurpose::ALL.get(i + 1))
                .copied(),
        };
        self
    }
}

/// Snapshot of a single application's decision and metadata.
///
#[derive(Clone, Debug, Dummy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    pub full_name: String,
    pub monthly_income: f64,
    pub loan_amount: f64,
    pub loan_purpose: String,
    pub age: u32,
    #[serde(alias = "phone")]
    pub phone_number: String,
    pub email: String,
    pub eligible: bool,
    pub reason: String,
    pub timestamp: String,
}

impl StatusRecord {
    /// Decision time in the local zone, if the service sent RFC 3339.
    ///
    pub fn decided_at(&self) -> Option<DateTime<Local>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|at| at.with_timezone(&Local))
    }
}
