//! Navigation-related state types.
//!
//! This module contains the wizard steps and the focusable inputs of the
//! personal-info form.

use crate::validation::Field;

/// Specifying the wizard steps, in order.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Step {
    PersonalInfo,
    Addons,
    Plan,
    Summary,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::PersonalInfo, Step::Addons, Step::Plan, Step::Summary];

    /// Position of the step within the wizard.
    ///
    pub fn index(&self) -> usize {
        match self {
            Step::PersonalInfo => 0,
            Step::Addons => 1,
            Step::Plan => 2,
            Step::Summary => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Step::ALL.get(index).copied()
    }

    /// Short label for the step list.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Step::PersonalInfo => "YOUR INFO",
            Step::Addons => "APPLICATIONS",
            Step::Plan => "STATUS",
            Step::Summary => "SUMMARY",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::PersonalInfo => "ArisePreQ Loan Pre-Qualification",
            Step::Addons => "Application Result",
            Step::Plan => "Check Loan Status",
            Step::Summary => "Finishing up",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Step::PersonalInfo => "Get instant loan pre-qualification",
            Step::Summary => "Double-check everything looks OK before confirming.",
            Step::Addons | Step::Plan => "",
        }
    }
}

/// Specifying the inputs of the personal-info form, in tab order.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormField {
    Name,
    Email,
    Phone,
    MonthlyIncome,
    LoanAmount,
    LoanPurpose,
    Age,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::MonthlyIncome,
        FormField::LoanAmount,
        FormField::LoanPurpose,
        FormField::Age,
    ];

    fn position(&self) -> usize {
        FormField::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    /// Next field in tab order, wrapping around.
    ///
    pub fn next(&self) -> FormField {
        FormField::ALL[(self.position() + 1) % FormField::ALL.len()]
    }

    /// Previous field in tab order, wrapping around.
    ///
    pub fn previous(&self) -> FormField {
        let len = FormField::ALL.len();
        FormField::ALL[(self.position() + len - 1) % len]
    }

    /// Validation field this input feeds.
    ///
    pub fn field(&self) -> Field {
        match self {
            FormField::Name => Field::Name,
            FormField::Email => Field::Email,
            FormField::Phone => Field::Phone,
            FormField::MonthlyIncome => Field::MonthlyIncome,
            FormField::LoanAmount => Field::LoanAmount,
            FormField::LoanPurpose => Field::LoanPurpose,
            FormField::Age => Field::Age,
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "e.g. George Russell",
            FormField::Email => "e.g. MadMaxVerstappen@redbull.com",
            FormField::Phone => "e.g. 0851234567",
            FormField::MonthlyIncome => "e.g 10,000",
            FormField::LoanAmount => "e.g 10,000",
            FormField::LoanPurpose => "Select Loan Purpose* (←/→)",
            FormField::Age => "e.g 25",
        }
    }
}
