//! Per-step validation.
//!
//! Each wizard step has an explicit input schema. Validation is pure and
//! synchronous: raw text goes in, canonical typed values or a message per
//! failing field come out. All failing fields are reported together.

mod rules;

use crate::eligibility::{LoanApplication, LoanPurpose};
use std::collections::BTreeMap;

/// Fields that can carry a validation message, in display order.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    MonthlyIncome,
    LoanAmount,
    LoanPurpose,
    Age,
    ApplicationId,
}

impl Field {
    /// Field name as used by the form schema.
    ///
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::MonthlyIncome => "monthlyIncome",
            Field::LoanAmount => "loanAmount",
            Field::LoanPurpose => "selectLoanPurpose",
            Field::Age => "age",
            Field::ApplicationId => "applicationId",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::MonthlyIncome => "Monthly Income",
            Field::LoanAmount => "Loan Amount",
            Field::LoanPurpose => "Select Loan Purpose",
            Field::Age => "Age",
            Field::ApplicationId => "Application ID",
        }
    }
}

/// Validation messages keyed by field.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Take the value of a rule, recording its message on failure.
    ///
    fn check<T>(&mut self, field: Field, outcome: Result<T, String>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(message) => {
                self.0.insert(field, message);
                None
            }
        }
    }
}

/// Raw text of the personal-info step, exactly as typed.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersonalInfoFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub monthly_income: String,
    pub loan_amount: String,
    pub loan_purpose: Option<String>,
    pub age: String,
}

/// Raw text of the status-lookup step.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlanFields {
    pub application_id: String,
}

/// Validated personal information in canonical form.
///
#[derive(Clone, Debug, PartialEq)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub monthly_income: f64,
    pub loan_amount: f64,
    pub loan_purpose: LoanPurpose,
    pub age: u8,
}

impl PersonalInfo {
    /// Return the service payload for this applicant.
    ///
    pub fn to_application(&self) -> LoanApplication {
        LoanApplication {
            full_name: self.name.clone(),
            email: self.email.clone(),
            phone_number: self.phone.clone(),
            age: self.age,
            monthly_income: self.monthly_income,
            loan_amount: self.loan_amount,
            loan_purpose: self.loan_purpose,
        }
    }
}

/// Input schema per wizard step.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepFields {
    PersonalInfo(PersonalInfoFields),
    Addons,
    Plan(PlanFields),
    Summary,
}

/// Canonical output per wizard step.
///
#[derive(Clone, Debug, PartialEq)]
pub enum StepValues {
    PersonalInfo(PersonalInfo),
    Addons,
    Plan { application_id: String },
    Summary,
}

/// Validate the fields of any step.
///
pub fn validate(fields: &StepFields) -> Result<StepValues, FieldErrors> {
    match fields {
        StepFields::PersonalInfo(fields) => validate_personal_info(fields).map(StepValues::PersonalInfo),
        StepFields::Addons => Ok(StepValues::Addons),
        StepFields::Plan(fields) => {
            validate_plan(fields).map(|application_id| StepValues::Plan { application_id })
        }
        StepFields::Summary => Ok(StepValues::Summary),
    }
}

pub fn validate_personal_info(fields: &PersonalInfoFields) -> Result<PersonalInfo, FieldErrors> {
    let mut errors = FieldErrors::default();
    let name = errors.check(Field::Name, rules::name(&fields.name));
    let email = errors.check(Field::Email, rules::email(&fields.email));
    let phone = errors.check(Field::Phone, rules::phone(&fields.phone));
    let monthly_income = errors.check(
        Field::MonthlyIncome,
        rules::amount(&fields.monthly_income, &rules::MONTHLY_INCOME),
    );
    let loan_amount = errors.check(
        Field::LoanAmount,
        rules::amount(&fields.loan_amount, &rules::LOAN_AMOUNT),
    );
    let loan_purpose = errors.check(
        Field::LoanPurpose,
        rules::loan_purpose(fields.loan_purpose.as_deref()),
    );
    let age = errors.check(Field::Age, rules::age(&fields.age));

    match (name, email, phone, monthly_income, loan_amount, loan_purpose, age) {
        (
            Some(name),
            Some(email),
            Some(phone),
            Some(monthly_income),
            Some(loan_amount),
            Some(loan_purpose),
            Some(age),
        ) => Ok(PersonalInfo {
            name,
            email,
            phone,
            monthly_income,
            loan_amount,
            loan_purpose,
            age,
        }),
        _ => Err(errors),
    }
}

pub fn validate_plan(fields: &PlanFields) -> Result<String, FieldErrors> {
    let mut errors = FieldErrors::default();
    errors
        .check(Field::ApplicationId, rules::application_id(&fields.application_id))
        .ok_or(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> PersonalInfoFields {
        PersonalInfoFields {
            name: "George Russell".to_string(),
            email: "george@example.com".to_string(),
            phone: "0851234567".to_string(),
            monthly_income: "5,000".to_string(),
            loan_amount: "250,000".to_string(),
            loan_purpose: Some("business".to_string()),
            age: "27".to_string(),
        }
    }

    #[test]
    fn valid_personal_info_is_normalized() {
        let info = validate_personal_info(&valid_fields()).unwrap();
        assert_eq!(info.monthly_income, 5000.0);
        assert_eq!(info.loan_amount, 250_000.0);
        assert_eq!(info.loan_purpose, LoanPurpose::Business);
        assert_eq!(info.age, 27);

        let application = info.to_application();
        assert_eq!(application.full_name, "George Russell");
        assert_eq!(application.phone_number, "0851234567");
    }

    #[test]
    fn every_failing_field_is_reported() {
        let errors = validate_personal_info(&PersonalInfoFields::default()).unwrap_err();
        assert_eq!(errors.len(), 7);
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::LoanPurpose), Some("Loan Purpose is required"));
        assert_eq!(errors.get(Field::ApplicationId), None);

        let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields.first(), Some(&Field::Name));
        assert_eq!(fields.last(), Some(&Field::Age));
    }

    #[test]
    fn income_boundaries() {
        let mut fields = valid_fields();
        fields.monthly_income = "4,999".to_string();
        let errors = validate_personal_info(&fields).unwrap_err();
        assert_eq!(
            errors.get(Field::MonthlyIncome),
            Some("Monthly income must be between 5,000 and 5,000,000")
        );
        assert_eq!(errors.len(), 1);

        fields.monthly_income = "abc".to_string();
        let errors = validate_personal_info(&fields).unwrap_err();
        assert_eq!(
            errors.get(Field::MonthlyIncome),
            Some("Monthly income must be a number")
        );
    }

    #[test]
    fn age_boundaries() {
        let mut fields = valid_fields();
        for (age, passes) in [("0", false), ("1", true), ("99", true), ("100", false)] {
            fields.age = age.to_string();
            assert_eq!(validate_personal_info(&fields).is_ok(), passes, "age {}", age);
        }
    }

    #[test]
    fn validation_is_idempotent() {
        let mut fields = valid_fields();
        fields.email = "nope".to_string();
        fields.phone = "123".to_string();
        let step = StepFields::PersonalInfo(fields);
        assert_eq!(validate(&step), validate(&step));

        let step = StepFields::PersonalInfo(valid_fields());
        assert_eq!(validate(&step), validate(&step));
    }

    #[test]
    fn display_only_steps_always_pass() {
        assert_eq!(validate(&StepFields::Addons), Ok(StepValues::Addons));
        assert_eq!(validate(&StepFields::Summary), Ok(StepValues::Summary));
    }

    #[test]
    fn plan_requires_an_application_id() {
        let step = StepFields::Plan(PlanFields {
            application_id: " A-42 ".to_string(),
        });
        assert_eq!(
            validate(&step),
            Ok(StepValues::Plan {
                application_id: "A-42".to_string()
            })
        );

        let errors = validate_plan(&PlanFields::default()).unwrap_err();
        assert_eq!(
            errors.get(Field::ApplicationId),
            Some("Please enter an application ID.")
        );
    }

    #[test]
    fn field_errors_display_counts_fields() {
        let errors = validate_personal_info(&PersonalInfoFields::default()).unwrap_err();
        assert_eq!(errors.to_string(), "7 field(s) failed validation");
    }
}
