//! Reusable UI widget components.
//!
//! This module contains reusable widget components such as spinners, styling
//! utilities and display formatting.

pub mod format;
pub mod spinner;
pub mod styling;
