//! Survey configuration
//!
//! There is no config file: a single build-time constant selects the remote
//! collector URL. Leaving it empty keeps the widget fully functional but
//! degrades everything remote-facing to generated demo data.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Remote collector webhook URL (Google Apps Script deployment or similar).
///
/// Empty means "not configured": statistics come from sample data and
/// completed records are only persisted locally.
pub const COLLECTOR_URL: &str = "";

/// Directory under the home dir holding local results
pub const STORAGE_DIR: &str = ".neuroguide";

/// File name of the local results blob
pub const STORAGE_FILE: &str = "results.json";

/// Tool id whose selection marks the respondent as an AI-music user
pub const SUNO_MARKER_ID: &str = "music";

/// Projected `sunoReason` value forwarded for respondents who already use
/// Suno/Udio (they are never asked for a reason)
pub const SUNO_USER_LABEL: &str = "Пользуется Suno/Udio";

/// Runtime configuration for the survey
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyConfig {
    /// Remote collector URL; empty disables the remote path
    pub collector_url: String,

    /// Override for the local results file (defaults to the home dir)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<PathBuf>,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            collector_url: COLLECTOR_URL.to_string(),
            storage_path: None,
        }
    }
}

impl SurveyConfig {
    /// Collector URL, or `None` when remote forwarding is not configured
    pub fn collector_url(&self) -> Option<&str> {
        let url = self.collector_url.trim();
        if url.is_empty() { None } else { Some(url) }
    }
}
