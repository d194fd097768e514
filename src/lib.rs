//! # InstaBiz
//!
//! A TUI application that audits the Instagram presence of a business using LLMs.
//!
//! ## Features
//!
//! - **Structured Intelligence**: Returns a typed `AnalysisDocument` with profile, content,
//!   competitor, diagnosis and proposal sections
//! - **Pure Core**: a reducer-driven status controller and a side-effect free report renderer
//! - **Printable Reports**: exports every tab as a Markdown file

pub mod agent;
pub mod analysis;
pub mod config;
pub mod controller;
pub mod export;
pub mod logging;
pub mod report;
pub mod runtime;
pub mod ui;

pub use agent::{AgentError, Analyst, GeminiAnalyst};
pub use analysis::AnalysisDocument;
pub use config::Config;
pub use controller::{normalize_handle, Status, Tab};
