//! Core logic for the NeuroGuide onboarding survey
//!
//! This crate provides the platform-independent pieces of the chat-style
//! survey: the fixed option catalog, the answer record collected from one
//! respondent, the forward-only stage sequencer, and the aggregation engine
//! that turns a pile of raw results into per-category statistics.
//!
//! Rendering, animation and the embedding container are deliberately not
//! here; the host UI drives [`SurveySession`] and hands completed records to
//! the store crate.

pub mod catalog;
pub mod config;
pub mod error;
pub mod host;
pub mod record;
pub mod stages;
pub mod stats;

// Re-export commonly used types
pub use catalog::{Category, OptionEntry};
pub use config::SurveyConfig;
pub use error::{SurveyError, SurveyResult};
pub use host::{BrowserFallback, HostContainer, readable_profile};
pub use record::{AnswerRecord, HostIdentity, MultiField, SingleField, TextField};
pub use stages::{Stage, SurveySession};
pub use stats::{SurveyStats, aggregate};
