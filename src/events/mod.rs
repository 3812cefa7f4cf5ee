//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: eligibility service requests
//! - Terminal events: key presses and render ticks

pub mod network;
pub mod terminal;
