//! Core types for the SHIRT host retrieval tool.
//!
//! This crate provides the foundational pieces shared by the client and the
//! CLI:
//!
//! - **Targets**: classification of lookup targets as IP literals or hostnames
//! - **Errors**: error handling with [`ShirtError`]

mod error;
mod target;

pub use error::{Result, ShirtError};
pub use target::Target;
