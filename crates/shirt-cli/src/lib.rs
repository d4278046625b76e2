//! # shirt-cli
//!
//! Command-line interface for the Shodan Host Information Retrieval Tool.
//!
//! ## Features
//!
//! - **Host lookup**: single domain, single IP, or a newline-delimited list
//! - **Three output layouts**: per-target files, one combined file, or both
//! - **Raw records**: responses are written exactly as Shodan returns them

pub mod cli;
pub mod config;
pub mod output;
pub mod processor;

pub use cli::run;
