//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds all application data
//! - The wizard store shared by every step and its actions
//! - Step transitions and reconciliation of resolved requests
//! - Step-local form types and state error handling

mod controller;
mod error;
mod form;
mod navigation;
mod store;

pub use navigation::{FormField, Step};
#[cfg(test)]
pub use store::PersonalInfoDraft;

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::{State, DEFAULT_PAGE_SIZE};
