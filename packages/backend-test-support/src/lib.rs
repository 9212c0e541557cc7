//! Backend test support utilities
//!
//! This crate provides utilities specifically for backend testing: unified
//! logging initialization and helpers for generating unique test data.

pub mod logging;
pub mod unique_helpers;
