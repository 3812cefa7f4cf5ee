use crate::app::NetworkEventSender;
use crate::eligibility::{ApplicationFilters, ApplicationReceipt};
use crate::events::network::Event as NetworkEvent;
use crate::logger::LogBuffer;
use crate::ui::SPINNER_FRAME_COUNT;
use log::*;

use super::form::{PersonalInfoForm, RemoteCall, StatusLookup, Submission};
use super::store::WizardStore;

/// Default number of listing rows requested per page.
///
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Houses data representative of application state.
///
/// The store holds what the steps share; everything else here belongs to a
/// single step or to the terminal shell around the wizard.
pub struct State {
    net_sender: Option<NetworkEventSender>,
    pub(super) store: WizardStore,
    pub(super) page_size: u32,
    pub(super) filters: ApplicationFilters,
    pub(super) form: PersonalInfoForm,
    pub(super) submission: Submission,
    pub(super) listing: RemoteCall,
    pub(super) lookup: StatusLookup,
    spinner_index: usize,
    log_visible: bool,
    log_buffer: LogBuffer,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            store: WizardStore::default(),
            page_size: DEFAULT_PAGE_SIZE,
            filters: ApplicationFilters::default(),
            form: PersonalInfoForm::default(),
            submission: Submission::default(),
            listing: RemoteCall::default(),
            lookup: StatusLookup::default(),
            spinner_index: 0,
            log_visible: false,
            log_buffer: LogBuffer::default(),
        }
    }
}

impl State {
    pub fn new(
        net_sender: NetworkEventSender,
        page_size: u32,
        filters: ApplicationFilters,
        log_buffer: LogBuffer,
    ) -> Self {
        State {
            net_sender: Some(net_sender),
            page_size: page_size.max(1),
            filters,
            log_buffer,
            ..State::default()
        }
    }

    /// Returns the shared wizard data.
    ///
    pub fn store(&self) -> &WizardStore {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut WizardStore {
        &mut self.store
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn filters(&self) -> &ApplicationFilters {
        &self.filters
    }

    /// Returns the personal-info form.
    ///
    pub fn personal_info_form(&self) -> &PersonalInfoForm {
        &self.form
    }

    /// Returns the personal-info form for editing.
    ///
    pub fn personal_info_form_mut(&mut self) -> &mut PersonalInfoForm {
        &mut self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.call.is_loading()
    }

    pub fn submission_error(&self) -> Option<&str> {
        self.submission.call.error()
    }

    /// Returns the receipt of the accepted application, if any.
    ///
    pub fn receipt(&self) -> Option<&ApplicationReceipt> {
        self.submission.receipt.as_ref()
    }

    pub fn listing(&self) -> &RemoteCall {
        &self.listing
    }

    pub fn status_lookup(&self) -> &StatusLookup {
        &self.lookup
    }

    /// Append a character to the application id input.
    ///
    pub fn push_lookup_char(&mut self, c: char) -> &mut Self {
        self.lookup.input.push(c);
        self
    }

    /// Remove the last character of the application id input.
    ///
    pub fn pop_lookup_char(&mut self) -> &mut Self {
        self.lookup.input.pop();
        self
    }

    /// True if any request is still outstanding.
    ///
    pub fn is_loading(&self) -> bool {
        self.is_submitting() || self.listing.is_loading() || self.lookup.call.is_loading()
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    /// Return the current spinner index.
    ///
    pub fn get_spinner_index(&self) -> &usize {
        &self.spinner_index
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    /// Show or hide the log panel.
    ///
    pub fn toggle_log(&mut self) -> &mut Self {
        self.log_visible = !self.log_visible;
        self
    }

    /// Return the most recent `count` log lines, oldest first.
    ///
    pub fn recent_log_lines(&self, count: usize) -> Vec<String> {
        match self.log_buffer.lock() {
            Ok(buffer) => {
                let skip = buffer.len().saturating_sub(count);
                buffer.iter().skip(skip).cloned().collect()
            }
            Err(_) => vec![],
        }
    }

    /// Send a network event if a network thread is attached.
    ///
    pub fn dispatch(&self, event: NetworkEvent) {
        if let Some(net_sender) = &self.net_sender {
            if let Err(err) = net_sender.send(event) {
                error!("Received error from network dispatch: {}", err);
            }
        }
    }
}
