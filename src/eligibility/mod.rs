//! Eligibility service gateway.
//!
//! Wraps the three calls the wizard makes against the loan eligibility
//! service and normalizes every outcome into a `Result` the state layer can
//! reconcile without further error handling.

mod client;
mod error;
mod resource;

pub use error::GatewayError;
pub use resource::*;

use anyhow::Result;
use client::{Client, Fallback};
use log::*;
use std::time::Duration;

const SUBMIT_FALLBACK: Fallback = Fallback {
    failed: "Unknown error",
    not_found: None,
};

const LIST_FALLBACK: Fallback = Fallback {
    failed: "Failed to fetch loan applications.",
    not_found: None,
};

const STATUS_FALLBACK: Fallback = Fallback {
    failed: "Something went wrong.",
    not_found: Some("Loan application not found."),
};

/// Responsible for asynchronous interaction with the eligibility service
/// including transformation of response data into explicitly-defined types.
///
#[derive(Clone, Debug)]
pub struct Eligibility {
    client: Client,
}

impl Eligibility {
    /// Returns a new instance for the service at the given base URL.
    ///
    pub fn new(base_url: &str, timeout: Duration) -> Result<Eligibility, GatewayError> {
        debug!("Initializing eligibility client for {}...", base_url);
        Ok(Eligibility {
            client: Client::new(base_url, timeout)?,
        })
    }

    /// Submit a new application and return the service's decision. Does not
    /// touch any cached status.
    ///
    pub async fn submit_application(
        &self,
        application: &LoanApplication,
    ) -> Result<ApplicationReceipt, GatewayError> {
        debug!("Submitting loan application for {}...", application.full_name);
        let receipt: ApplicationReceipt = self
            .client
            .post(&[], application, SUBMIT_FALLBACK)
            .await?;
        info!(
            "Application {} submitted (eligible: {}).",
            receipt.application_id, receipt.eligible
        );
        Ok(receipt)
    }

    /// Return one page of submitted applications. Pages longer than `limit`
    /// are cut down to `limit`.
    ///
    pub async fn list_applications(
        &self,
        page: u32,
        limit: u32,
        filters: &ApplicationFilters,
    ) -> Result<ApplicationPage, GatewayError> {
        debug!(
            "Requesting applications page {} (limit {}, filters {:?})...",
            page, limit, filters
        );
        let mut data: ApplicationPage = self
            .client
            .get(&[], &listing_query(page, limit, filters), LIST_FALLBACK)
            .await?;

        let limit = limit as usize;
        if data.applications.len() > limit {
            warn!(
                "Service returned {} applications for a page of {}; truncating.",
                data.applications.len(),
                limit
            );
            data.applications.truncate(limit);
        }

        debug!(
            "Retrieved {} applications ({} pages total)",
            data.applications.len(),
            data.total_pages
        );
        Ok(data)
    }

    /// Return the status record for the application with the given id.
    ///
    pub async fn get_application_status(&self, id: &str) -> Result<StatusRecord, GatewayError> {
        debug!("Requesting status for application {}...", id);
        self.client.get(&[id], &[], STATUS_FALLBACK).await
    }
}

/// Build the listing query. Absent filters are omitted rather than sent
/// empty.
///
fn listing_query(page: u32, limit: u32, filters: &ApplicationFilters) -> Vec<(&'static str, String)> {
    let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];
    if let Some(eligible) = filters.eligible {
        query.push(("eligible", eligible.to_string()));
    }
    if let Some(purpose) = filters.purpose {
        query.push(("purpose", purpose.as_str().to_string()));
    }
    query
}
