//! The wizard's application store.
//!
//! A single owned aggregate holding the applicant's draft, the wizard
//! position and the cached service responses. It changes only through the
//! action methods below, each a synchronous whole-value transition.

use super::navigation::Step;
use crate::eligibility::{ApplicationSummary, LoanPurpose, StatusRecord};
use crate::validation::PersonalInfo;

/// Number of wizard steps.
///
pub const STEP_COUNT: usize = Step::ALL.len();

/// Applicant details collected so far. Absent fields have not been
/// provided yet.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PersonalInfoDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub monthly_income: Option<f64>,
    pub loan_amount: Option<f64>,
    pub loan_purpose: Option<LoanPurpose>,
    pub age: Option<u8>,
}

impl PersonalInfoDraft {
    /// Overlay the fields present in `patch`.
    ///
    fn merge(&mut self, patch: PersonalInfoDraft) {
        macro_rules! overlay {
            ($($field:ident),*) => {
                $(if patch.$field.is_some() { self.$field = patch.$field; })*
            };
        }
        overlay!(name, email, phone, monthly_income, loan_amount, loan_purpose, age);
    }
}

impl From<PersonalInfo> for PersonalInfoDraft {
    fn from(info: PersonalInfo) -> Self {
        PersonalInfoDraft {
            name: Some(info.name),
            email: Some(info.email),
            phone: Some(info.phone),
            monthly_income: Some(info.monthly_income),
            loan_amount: Some(info.loan_amount),
            loan_purpose: Some(info.loan_purpose),
            age: Some(info.age),
        }
    }
}

/// Position within the applications listing.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            page: 1,
            total_pages: 0,
        }
    }
}

/// Houses the data shared between wizard steps.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WizardStore {
    current_step: usize,
    is_submitted: bool,
    personal_info: PersonalInfoDraft,
    application_id: String,
    loan_status: Option<StatusRecord>,
    selected_applications: Vec<ApplicationSummary>,
    pagination: Pagination,
}

impl WizardStore {
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the active step.
    ///
    pub fn step(&self) -> Step {
        Step::from_index(self.current_step).unwrap_or(Step::PersonalInfo)
    }

    pub fn is_submitted(&self) -> bool {
        self.is_submitted
    }

    pub fn personal_info(&self) -> &PersonalInfoDraft {
        &self.personal_info
    }

    /// Returns the id of the most recently looked-up application, empty if
    /// none has been.
    ///
    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    pub fn loan_status(&self) -> Option<&StatusRecord> {
        self.loan_status.as_ref()
    }

    pub fn selected_applications(&self) -> &[ApplicationSummary] {
        &self.selected_applications
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Shallow-merge applicant details. Callers validate first.
    ///
    pub fn set_personal_info(&mut self, patch: PersonalInfoDraft) -> &mut Self {
        self.personal_info.merge(patch);
        self
    }

    /// Record a fetched status together with the id it was fetched for.
    ///
    pub fn set_loan_status(&mut self, application_id: String, status: StatusRecord) -> &mut Self {
        self.application_id = application_id;
        self.loan_status = Some(status);
        self
    }

    /// Replace the listing wholesale.
    ///
    pub fn set_selected_applications(
        &mut self,
        applications: Vec<ApplicationSummary>,
        pagination: Pagination,
    ) -> &mut Self {
        self.selected_applications = applications;
        self.pagination = pagination;
        self
    }

    /// Move forward `n` steps. A move past the last step is ignored.
    ///
    pub fn increase_step(&mut self, n: usize) -> &mut Self {
        match self.current_step.checked_add(n) {
            Some(next) if next < STEP_COUNT => self.current_step = next,
            _ => {}
        }
        self
    }

    /// Move back `n` steps. A move before the first step is ignored.
    ///
    pub fn decrease_step(&mut self, n: usize) -> &mut Self {
        if let Some(previous) = self.current_step.checked_sub(n) {
            self.current_step = previous;
        }
        self
    }

    /// Mark the application as confirmed. Ignored when `already_submitted`
    /// is set; once submitted the flag never clears.
    ///
    pub fn on_submit(&mut self, already_submitted: bool) -> &mut Self {
        if !already_submitted {
            self.is_submitted = true;
        }
        self
    }
}
