//! github-activity library
//!
//! Fetches a GitHub user's public events and renders a short, grouped
//! summary. The binary in `main.rs` is a thin wrapper around [`runner`].

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod report;
pub mod runner;

pub use client::{ActivitySource, GithubClient};
pub use config::AppConfig;
pub use error::ActivityError;
