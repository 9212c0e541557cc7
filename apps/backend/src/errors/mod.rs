//! Error handling for the codebreak backend.

pub mod domain;

pub use domain::DomainError;
