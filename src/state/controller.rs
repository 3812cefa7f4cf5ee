//! Wizard transitions.
//!
//! Forward and backward moves are gated here: validation runs before a step
//! is left, network events are dispatched at step boundaries and every
//! resolved call is folded back into the store through one `resolve_*`
//! method.

use super::error::StateError;
use super::form::PersonalInfoForm;
use super::navigation::Step;
use super::state_impl::State;
use super::store::Pagination;
use crate::eligibility::{ApplicationPage, ApplicationReceipt, GatewayError, StatusRecord};
use crate::events::network::Event as NetworkEvent;
use crate::validation::{validate, Field, PersonalInfo, PlanFields, StepFields, StepValues};
use log::*;

/// Outcome of an accepted transition request.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Advanced(Step),
    Retreated(Step),
    /// A request was sent; the move happens when it resolves.
    Dispatched,
    Submitted,
    Unchanged,
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transition::Advanced(step) => write!(f, "advanced to {}", step.title()),
            Transition::Retreated(step) => write!(f, "returned to {}", step.title()),
            Transition::Dispatched => write!(f, "waiting on the eligibility service"),
            Transition::Submitted => write!(f, "submitted"),
            Transition::Unchanged => write!(f, "unchanged"),
        }
    }
}

impl State {
    /// Request a move to the next step.
    ///
    pub fn next_step(&mut self) -> Result<Transition, StateError> {
        if self.store.is_submitted() {
            return Err(StateError::AlreadySubmitted);
        }
        match self.store.step() {
            Step::PersonalInfo => {
                if self.is_submitting() {
                    return Err(StateError::SubmissionPending);
                }
                let fields = StepFields::PersonalInfo(self.form.inputs().clone());
                match validate(&fields) {
                    Ok(StepValues::PersonalInfo(info)) => Ok(self.submit_personal_info(info)),
                    Ok(_) => Ok(Transition::Unchanged),
                    Err(errors) => {
                        let keys: Vec<&str> = errors.iter().map(|(field, _)| field.key()).collect();
                        debug!("Personal info rejected: {} ({})", errors, keys.join(", "));
                        self.form.set_errors(errors.clone());
                        self.submission.call.clear_error();
                        Err(errors.into())
                    }
                }
            }
            Step::Addons | Step::Plan => {
                self.store.increase_step(1);
                Ok(Transition::Advanced(self.store.step()))
            }
            Step::Summary => {
                let already_submitted = self.store.is_submitted();
                self.store.on_submit(already_submitted);
                info!("Application confirmed.");
                Ok(Transition::Submitted)
            }
        }
    }

    /// Request a move to the previous step. Never triggers a request.
    ///
    pub fn previous_step(&mut self) -> Result<Transition, StateError> {
        if self.store.is_submitted() {
            return Err(StateError::AlreadySubmitted);
        }
        if self.store.current_step() == 0 {
            return Ok(Transition::Unchanged);
        }
        self.store.decrease_step(1);
        let step = self.store.step();
        if step == Step::PersonalInfo {
            self.form = PersonalInfoForm::from_draft(self.store.personal_info());
        }
        Ok(Transition::Retreated(step))
    }

    fn submit_personal_info(&mut self, info: PersonalInfo) -> Transition {
        let application = info.to_application();
        self.form.set_errors(Default::default());
        self.store.set_personal_info(info.into());
        self.submission.call.begin();
        info!("Submitting loan application...");
        self.dispatch(NetworkEvent::SubmitApplication { application });
        Transition::Dispatched
    }

    /// Validate the lookup id and request its status.
    ///
    pub fn check_status(&mut self) -> Result<(), StateError> {
        let fields = StepFields::Plan(PlanFields {
            application_id: self.lookup.input.clone(),
        });
        match validate(&fields) {
            Ok(StepValues::Plan { application_id }) => {
                self.lookup.call.begin();
                self.dispatch(NetworkEvent::FetchStatus { application_id });
                Ok(())
            }
            Ok(_) => Ok(()),
            Err(errors) => {
                if let Some(message) = errors.get(Field::ApplicationId) {
                    self.lookup.call.fail(message.to_string());
                }
                Err(errors.into())
            }
        }
    }

    fn fetch_applications(&mut self, page: u32) {
        self.listing.begin();
        self.dispatch(NetworkEvent::FetchApplications {
            page,
            limit: self.page_size,
            filters: self.filters.clone(),
        });
    }

    /// Request the following listing page, if there is one.
    ///
    pub fn next_applications_page(&mut self) -> &mut Self {
        let Pagination { page, total_pages } = self.store.pagination();
        if page < total_pages {
            self.fetch_applications(page + 1);
        }
        self
    }

    /// Request the preceding listing page, if there is one.
    ///
    pub fn previous_applications_page(&mut self) -> &mut Self {
        let page = self.store.pagination().page;
        if page > 1 {
            self.fetch_applications(page - 1);
        }
        self
    }

    /// Request the current listing page again.
    ///
    pub fn refresh_applications(&mut self) -> &mut Self {
        let page = self.store.pagination().page;
        self.fetch_applications(page);
        self
    }

    /// Cycle the eligibility filter and reload from the first page.
    ///
    pub fn cycle_eligible_filter(&mut self) -> &mut Self {
        self.filters.cycle_eligible();
        self.fetch_applications(1);
        self
    }

    /// Cycle the purpose filter and reload from the first page.
    ///
    pub fn cycle_purpose_filter(&mut self) -> &mut Self {
        self.filters.cycle_purpose();
        self.fetch_applications(1);
        self
    }

    /// Apply the outcome of the personal-info submission.
    ///
    pub fn resolve_submission(&mut self, result: Result<ApplicationReceipt, GatewayError>) -> &mut Self {
        if self.store.is_submitted() {
            warn!("Dropping submission result received after confirmation.");
            self.submission.call.finish(None);
            return self;
        }
        match result {
            Ok(receipt) => {
                info!("Application {} accepted.", receipt.application_id);
                self.submission.call.finish(None);
                self.store.increase_step(1);
                self.lookup.input = receipt.application_id.clone();
                self.submission.receipt = Some(receipt);
                let page = self.store.pagination().page;
                self.fetch_applications(page);
            }
            Err(err) => {
                error!("Failed to submit application (status {:?}): {}", err.status(), err);
                self.submission.call.finish(Some(err.to_string()));
            }
        }
        self
    }

    /// Apply a fetched listing page.
    ///
    pub fn resolve_applications(&mut self, page: u32, result: Result<ApplicationPage, GatewayError>) -> &mut Self {
        if self.store.is_submitted() {
            warn!("Dropping listing page {} received after confirmation.", page);
            self.listing.finish(None);
            return self;
        }
        match result {
            Ok(listing) => {
                debug!("Loaded {} applications for page {}.", listing.applications.len(), page);
                self.store.set_selected_applications(
                    listing.applications,
                    Pagination {
                        page,
                        total_pages: listing.total_pages,
                    },
                );
                self.listing.finish(None);
            }
            Err(err) => {
                error!("Failed to fetch applications (status {:?}): {}", err.status(), err);
                self.listing.finish(Some(err.to_string()));
            }
        }
        self
    }

    /// Apply a fetched status record.
    ///
    pub fn resolve_status(&mut self, application_id: String, result: Result<StatusRecord, GatewayError>) -> &mut Self {
        if self.store.is_submitted() {
            warn!("Dropping status of {} received after confirmation.", application_id);
            self.lookup.call.finish(None);
            return self;
        }
        match result {
            Ok(record) => {
                debug!("Loaded status of application {}.", application_id);
                self.store.set_loan_status(application_id, record);
                self.lookup.call.finish(None);
            }
            Err(err) => {
                error!(
                    "Failed to fetch status of {} (status {:?}): {}",
                    application_id,
                    err.status(),
                    err
                );
                self.lookup.call.finish(Some(err.to_string()));
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::{ApplicationFilters, ApplicationSummary, LoanPurpose};
    use crate::logger::LogBuffer;
    use crate::validation::PersonalInfoFields;
    use fake::{Fake, Faker};
    use std::sync::mpsc::{self, Receiver};

    fn wired_state() -> (State, Receiver<NetworkEvent>) {
        let (tx, rx) = mpsc::channel();
        let state = State::new(tx, 10, ApplicationFilters::default(), LogBuffer::default());
        (state, rx)
    }

    fn valid_inputs() -> PersonalInfoFields {
        PersonalInfoFields {
            name: "George Russell".to_string(),
            email: "george@example.com".to_string(),
            phone: "0851234567".to_string(),
            monthly_income: "5,000".to_string(),
            loan_amount: "20,000".to_string(),
            loan_purpose: Some("education".to_string()),
            age: "27".to_string(),
        }
    }

    fn receipt(id: &str) -> ApplicationReceipt {
        ApplicationReceipt {
            application_id: id.to_string(),
            ..Faker.fake()
        }
    }

    fn listing(count: usize, total_pages: u32) -> ApplicationPage {
        ApplicationPage {
            applications: (0..count).map(|_| Faker.fake::<ApplicationSummary>()).collect(),
            total_pages,
        }
    }

    #[test]
    fn invalid_personal_info_stays_and_records_errors() {
        let (mut state, rx) = wired_state();
        let result = state.next_step();
        assert!(matches!(result, Err(StateError::Validation(_))));
        assert_eq!(state.store().current_step(), 0);
        assert_eq!(state.personal_info_form().errors().len(), 7);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn valid_personal_info_dispatches_once() {
        let (mut state, rx) = wired_state();
        state.personal_info_form_mut().set_inputs(valid_inputs());

        assert_eq!(state.next_step().unwrap(), Transition::Dispatched);
        assert!(state.is_submitting());
        assert_eq!(state.store().current_step(), 0);
        assert_eq!(state.store().personal_info().monthly_income, Some(5000.0));

        match rx.try_recv().unwrap() {
            NetworkEvent::SubmitApplication { application } => {
                assert_eq!(application.full_name, "George Russell");
                assert_eq!(application.loan_purpose, LoanPurpose::Education);
            }
            event => panic!("unexpected event {:?}", event),
        }

        assert!(matches!(state.next_step(), Err(StateError::SubmissionPending)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn accepted_submission_advances_exactly_one_step() {
        let (mut state, rx) = wired_state();
        state.personal_info_form_mut().set_inputs(valid_inputs());
        state.next_step().unwrap();
        let _ = rx.try_recv();

        state.resolve_submission(Ok(receipt("A-1")));

        assert_eq!(state.store().step(), Step::Addons);
        assert!(state.store().loan_status().is_none());
        assert!(!state.is_submitting());
        assert_eq!(state.receipt().map(|r| r.application_id.as_str()), Some("A-1"));
        assert_eq!(state.status_lookup().input, "A-1");
        assert_eq!(
            rx.try_recv().unwrap(),
            NetworkEvent::FetchApplications {
                page: 1,
                limit: 10,
                filters: ApplicationFilters::default(),
            }
        );
    }

    #[test]
    fn failed_submission_keeps_step_and_details() {
        let (mut state, _rx) = wired_state();
        state.personal_info_form_mut().set_inputs(valid_inputs());
        state.next_step().unwrap();

        state.resolve_submission(Err(GatewayError::RequestFailed {
            status: 500,
            message: "Unknown error".to_string(),
        }));

        assert_eq!(state.store().current_step(), 0);
        assert_eq!(state.submission_error(), Some("Unknown error"));
        assert_eq!(state.store().personal_info().name.as_deref(), Some("George Russell"));
        assert!(state.receipt().is_none());
        assert!(state.next_step().is_ok());
    }

    #[test]
    fn rejected_input_replaces_earlier_server_error() {
        let (mut state, _rx) = wired_state();
        state.personal_info_form_mut().set_inputs(valid_inputs());
        state.next_step().unwrap();
        state.resolve_submission(Err(GatewayError::RequestFailed {
            status: 500,
            message: "Unknown error".to_string(),
        }));

        state.personal_info_form_mut().set_inputs(PersonalInfoFields::default());
        assert!(matches!(state.next_step(), Err(StateError::Validation(_))));
        assert_eq!(state.submission_error(), None);
        assert_eq!(state.personal_info_form().errors().len(), 7);
    }

    #[test]
    fn display_steps_always_advance() {
        let (mut state, rx) = wired_state();
        state.store_mut().increase_step(1);
        assert_eq!(state.next_step().unwrap(), Transition::Advanced(Step::Plan));
        assert_eq!(state.next_step().unwrap(), Transition::Advanced(Step::Summary));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn confirmation_is_terminal() {
        let (mut state, _rx) = wired_state();
        state.store_mut().increase_step(3);
        assert_eq!(state.next_step().unwrap(), Transition::Submitted);
        assert!(state.store().is_submitted());

        assert!(matches!(state.next_step(), Err(StateError::AlreadySubmitted)));
        assert!(matches!(state.previous_step(), Err(StateError::AlreadySubmitted)));
        assert_eq!(state.store().step(), Step::Summary);
    }

    #[test]
    fn previous_never_dispatches_or_clears() {
        let (mut state, rx) = wired_state();
        assert_eq!(state.previous_step().unwrap(), Transition::Unchanged);

        let record: StatusRecord = Faker.fake();
        state.store_mut().increase_step(2).set_loan_status("A-9".to_string(), record);
        assert_eq!(state.previous_step().unwrap(), Transition::Retreated(Step::Addons));
        assert_eq!(state.previous_step().unwrap(), Transition::Retreated(Step::PersonalInfo));

        assert!(state.store().loan_status().is_some());
        assert_eq!(state.store().application_id(), "A-9");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn returning_to_personal_info_prefills_form() {
        let (mut state, _rx) = wired_state();
        state.personal_info_form_mut().set_inputs(valid_inputs());
        state.next_step().unwrap();
        state.resolve_submission(Ok(receipt("A-1")));
        state.personal_info_form_mut().set_inputs(PersonalInfoFields::default());

        state.previous_step().unwrap();
        let form = state.personal_info_form();
        assert_eq!(form.inputs().name, "George Russell");
        assert_eq!(form.inputs().monthly_income, "5000");
    }

    #[test]
    fn status_not_found_leaves_store_untouched() {
        let (mut state, _rx) = wired_state();
        state.store_mut().increase_step(2);
        state.push_lookup_char('X');
        state.check_status().unwrap();

        state.resolve_status(
            "X123".to_string(),
            Err(GatewayError::NotFound {
                message: "not found".to_string(),
            }),
        );

        assert!(state.store().loan_status().is_none());
        assert_eq!(state.store().application_id(), "");
        assert_eq!(state.status_lookup().call.error(), Some("not found"));
        assert!(!state.status_lookup().call.is_loading());
    }

    #[test]
    fn status_found_sets_id_and_record() {
        let (mut state, _rx) = wired_state();
        let record: StatusRecord = Faker.fake();
        state.resolve_status("X123".to_string(), Ok(record.clone()));
        assert_eq!(state.store().application_id(), "X123");
        assert_eq!(state.store().loan_status(), Some(&record));
    }

    #[test]
    fn check_status_requires_an_id() {
        let (mut state, rx) = wired_state();
        assert!(state.check_status().is_err());
        assert_eq!(
            state.status_lookup().call.error(),
            Some("Please enter an application ID.")
        );
        assert!(rx.try_recv().is_err());

        for c in " A-42 ".chars() {
            state.push_lookup_char(c);
        }
        state.check_status().unwrap();
        assert_eq!(
            rx.try_recv().unwrap(),
            NetworkEvent::FetchStatus {
                application_id: "A-42".to_string()
            }
        );
        assert_eq!(state.status_lookup().call.error(), None);
    }

    #[test]
    fn last_listing_wins() {
        let (mut state, _rx) = wired_state();
        let first = listing(3, 4);
        let second = listing(2, 4);
        state.resolve_applications(1, Ok(first));
        state.resolve_applications(2, Ok(second.clone()));

        assert_eq!(state.store().selected_applications(), second.applications.as_slice());
        assert_eq!(state.store().pagination(), Pagination { page: 2, total_pages: 4 });
    }

    #[test]
    fn listing_failure_keeps_previous_page() {
        let (mut state, _rx) = wired_state();
        let first = listing(3, 1);
        state.resolve_applications(1, Ok(first.clone()));
        state.resolve_applications(
            1,
            Err(GatewayError::RequestFailed {
                status: 500,
                message: "Failed to fetch loan applications.".to_string(),
            }),
        );
        assert_eq!(state.store().selected_applications(), first.applications.as_slice());
        assert_eq!(state.listing().error(), Some("Failed to fetch loan applications."));
    }

    #[test]
    fn paging_stays_within_bounds() {
        let (mut state, rx) = wired_state();
        state.resolve_applications(1, Ok(listing(2, 2)));

        state.previous_applications_page();
        assert!(rx.try_recv().is_err());

        state.next_applications_page();
        assert!(matches!(
            rx.try_recv().unwrap(),
            NetworkEvent::FetchApplications { page: 2, .. }
        ));

        state.resolve_applications(2, Ok(listing(1, 2)));
        state.next_applications_page();
        assert!(rx.try_recv().is_err());

        state.refresh_applications();
        assert!(matches!(
            rx.try_recv().unwrap(),
            NetworkEvent::FetchApplications { page: 2, .. }
        ));
    }

    #[test]
    fn filter_cycling_reloads_first_page() {
        let (mut state, rx) = wired_state();
        state.resolve_applications(3, Ok(listing(1, 3)));

        state.cycle_eligible_filter();
        match rx.try_recv().unwrap() {
            NetworkEvent::FetchApplications { page, filters, .. } => {
                assert_eq!(page, 1);
                assert_eq!(filters.eligible, Some(true));
            }
            event => panic!("unexpected event {:?}", event),
        }

        state.cycle_purpose_filter();
        match rx.try_recv().unwrap() {
            NetworkEvent::FetchApplications { filters, .. } => {
                assert_eq!(filters.purpose, Some(LoanPurpose::Education));
            }
            event => panic!("unexpected event {:?}", event),
        }
        assert!(state.listing().is_loading());
    }

    #[test]
    fn results_after_confirmation_are_dropped() {
        let (mut state, _rx) = wired_state();
        state.store_mut().increase_step(3).on_submit(false);

        state.resolve_applications(1, Ok(listing(2, 1)));
        state.resolve_status("A-1".to_string(), Ok(Faker.fake()));

        assert!(state.store().selected_applications().is_empty());
        assert!(state.store().loan_status().is_none());
        assert_eq!(state.store().step(), Step::Summary);
    }
}
