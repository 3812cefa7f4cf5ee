use crate::eligibility::{ApplicationFilters, Eligibility, LoanApplication};
use crate::state::State;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SubmitApplication {
        application: LoanApplication,
    },
    FetchApplications {
        page: u32,
        limit: u32,
        filters: ApplicationFilters,
    },
    FetchStatus {
        application_id: String,
    },
}

/// Specify struct for managing state with network events.
///
/// Cheap to clone; each event is handled on its own task with its own copy.
#[derive(Clone)]
pub struct Handler {
    state: Arc<Mutex<State>>,
    eligibility: Eligibility,
}

impl Handler {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &Arc<Mutex<State>>, eligibility: Eligibility) -> Self {
        Handler {
            state: Arc::clone(state),
            eligibility,
        }
    }

    /// Handle network events by type. The request runs without holding the
    /// state lock; the lock is taken once to apply the result.
    ///
    pub async fn handle(&self, event: Event) {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::SubmitApplication { application } => self.submit_application(application).await,
            Event::FetchApplications {
                page,
                limit,
                filters,
            } => self.fetch_applications(page, limit, filters).await,
            Event::FetchStatus { application_id } => self.fetch_status(application_id).await,
        }
    }

    async fn submit_application(&self, application: LoanApplication) {
        let result = self.eligibility.submit_application(&application).await;
        let mut state = self.state.lock().await;
        state.resolve_submission(result);
    }

    async fn fetch_applications(&self, page: u32, limit: u32, filters: ApplicationFilters) {
        info!("Fetching applications page {}...", page);
        let result = self.eligibility.list_applications(page, limit, &filters).await;
        let mut state = self.state.lock().await;
        state.resolve_applications(page, result);
    }

    async fn fetch_status(&self, application_id: String) {
        info!("Fetching status for application {}...", application_id);
        let result = self.eligibility.get_application_status(&application_id).await;
        let mut state = self.state.lock().await;
        state.resolve_status(application_id, result);
    }
}
