//! Step-local form state.
//!
//! Text buffers, focus, and per-call progress owned by individual steps.
//! None of this is shared between steps; the shared data lives in the store.

use super::navigation::FormField;
use super::store::PersonalInfoDraft;
use crate::eligibility::{ApplicationReceipt, LoanPurpose};
use crate::validation::{FieldErrors, PersonalInfoFields};

/// Inputs of the personal-info step.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonalInfoForm {
    inputs: PersonalInfoFields,
    focus: FormField,
    errors: FieldErrors,
}

impl Default for PersonalInfoForm {
    fn default() -> Self {
        PersonalInfoForm {
            inputs: PersonalInfoFields::default(),
            focus: FormField::Name,
            errors: FieldErrors::default(),
        }
    }
}

impl PersonalInfoForm {
    /// Return a form pre-filled from previously accepted details.
    ///
    pub fn from_draft(draft: &PersonalInfoDraft) -> Self {
        let number = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();
        PersonalInfoForm {
            inputs: PersonalInfoFields {
                name: draft.name.clone().unwrap_or_default(),
                email: draft.email.clone().unwrap_or_default(),
                phone: draft.phone.clone().unwrap_or_default(),
                monthly_income: number(draft.monthly_income),
                loan_amount: number(draft.loan_amount),
                loan_purpose: draft.loan_purpose.map(|p| p.as_str().to_string()),
                age: draft.age.map(|a| a.to_string()).unwrap_or_default(),
            },
            ..PersonalInfoForm::default()
        }
    }

    pub fn inputs(&self) -> &PersonalInfoFields {
        &self.inputs
    }

    #[cfg(test)]
    pub fn set_inputs(&mut self, inputs: PersonalInfoFields) -> &mut Self {
        self.inputs = inputs;
        self
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn focus_next(&mut self) -> &mut Self {
        self.focus = self.focus.next();
        self
    }

    pub fn focus_previous(&mut self) -> &mut Self {
        self.focus = self.focus.previous();
        self
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_errors(&mut self, errors: FieldErrors) -> &mut Self {
        self.errors = errors;
        self
    }

    /// Displayed text of an input.
    ///
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.inputs.name,
            FormField::Email => &self.inputs.email,
            FormField::Phone => &self.inputs.phone,
            FormField::MonthlyIncome => &self.inputs.monthly_income,
            FormField::LoanAmount => &self.inputs.loan_amount,
            FormField::LoanPurpose => self.inputs.loan_purpose.as_deref().unwrap_or(""),
            FormField::Age => &self.inputs.age,
        }
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.inputs.name),
            FormField::Email => Some(&mut self.inputs.email),
            FormField::Phone => Some(&mut self.inputs.phone),
            FormField::MonthlyIncome => Some(&mut self.inputs.monthly_income),
            FormField::LoanAmount => Some(&mut self.inputs.loan_amount),
            FormField::Age => Some(&mut self.inputs.age),
            FormField::LoanPurpose => None,
        }
    }

    /// Append a character to the focused text input.
    ///
    pub fn push_char(&mut self, c: char) -> &mut Self {
        if let Some(text) = self.text_mut() {
            text.push(c);
        }
        self
    }

    /// Remove the last character of the focused input.
    ///
    pub fn pop_char(&mut self) -> &mut Self {
        match self.text_mut() {
            Some(text) => {
                text.pop();
            }
            None => self.inputs.loan_purpose = None,
        }
        self
    }

    /// Step the purpose selector forward or back through the options,
    /// passing through "nothing selected".
    ///
    pub fn cycle_purpose(&mut self, forward: bool) -> &mut Self {
        let options: Vec<Option<LoanPurpose>> = std::iter::once(None)
            .chain(LoanPurpose::ALL.iter().copied().map(Some))
            .collect();
        let current = self
            .inputs
            .loan_purpose
            .as_deref()
            .and_then(|value| value.parse::<LoanPurpose>().ok());
        let position = options.iter().position(|o| *o == current).unwrap_or(0);
        let next = if forward {
            (position + 1) % options.len()
        } else {
            (position + options.len() - 1) % options.len()
        };
        self.inputs.loan_purpose = options[next].map(|p| p.as_str().to_string());
        self
    }
}

/// Progress of the outstanding calls a step has made.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RemoteCall {
    in_flight: usize,
    error: Option<String>,
}

impl RemoteCall {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Note a new request. Clears the previous error.
    ///
    pub fn begin(&mut self) -> &mut Self {
        self.in_flight += 1;
        self.error = None;
        self
    }

    /// Note a resolved request and its error, if any.
    ///
    pub fn finish(&mut self, error: Option<String>) -> &mut Self {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.error = error;
        self
    }

    pub fn clear_error(&mut self) -> &mut Self {
        self.error = None;
        self
    }

    /// Show an error without a request having been made.
    ///
    pub fn fail(&mut self, error: String) -> &mut Self {
        self.error = Some(error);
        self
    }
}

/// Progress of the personal-info submission.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Submission {
    pub call: RemoteCall,
    pub receipt: Option<ApplicationReceipt>,
}

/// Inputs of the status-lookup step.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusLookup {
    pub input: String,
    pub call: RemoteCall,
}
