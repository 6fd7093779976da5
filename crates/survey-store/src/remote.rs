//! Remote collector client
//!
//! One URL, two operations: an unauthenticated GET returning the raw result
//! rows for statistics, and a POST of one label-projected completed record.
//! The POST is fire-and-forget: the cross-origin endpoint gives no readable
//! response, so the write is a best-effort notify with no retry and no
//! delivery guarantee.

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use survey_core::config::{SUNO_USER_LABEL, SurveyConfig};
use survey_core::{AnswerRecord, Category, SurveyError, SurveyResult};
use tracing::{debug, warn};

/// Client for the spreadsheet-backed collector webhook
#[derive(Debug, Clone)]
pub struct RemoteCollector {
    client: Client,
    url: String,
}

impl RemoteCollector {
    /// Create a collector client for the given webhook URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Collector from configuration; `None` when no URL is configured,
    /// which degrades all remote behavior to generated demo data
    pub fn from_config(config: &SurveyConfig) -> Option<Self> {
        config.collector_url().map(Self::new)
    }

    /// Webhook URL this client talks to
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the raw result rows for statistics
    pub async fn fetch_records(&self) -> SurveyResult<Vec<Value>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SurveyError::http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SurveyError::http(format!(
                "collector returned status {status}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| SurveyError::http(e.to_string()))
    }

    /// Send one completed record to the collector, projected to display
    /// labels for the spreadsheet.
    ///
    /// Best-effort: failures are logged and reported, but callers are free
    /// to discard the result; nothing here may surface to the respondent.
    pub async fn forward(&self, record: &AnswerRecord) -> SurveyResult<()> {
        let payload = ForwardPayload::from_record(record);

        match self.client.post(&self.url).json(&payload).send().await {
            Ok(_) => {
                debug!("Forwarded result for {} to collector", record.nickname);
                Ok(())
            }
            Err(e) => {
                warn!("Failed to forward result to collector: {e}");
                Err(SurveyError::http(e.to_string()))
            }
        }
    }
}

fn labels(category: Category, ids: &[String]) -> Vec<String> {
    ids.iter()
        .map(|id| category.label_or_raw(id).to_string())
        .collect()
}

fn single_label(category: Category, id: Option<&str>) -> String {
    id.map(|id| category.label_or_raw(id).to_string())
        .unwrap_or_default()
}

/// Completed record projected to display labels, as the spreadsheet stores it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardPayload {
    pub nickname: String,
    pub role: String,
    pub goals: Vec<String>,
    pub preferred_content: Vec<String>,
    pub tools: Vec<String>,
    pub suno_reason: String,
    pub motivation: String,
    pub formats: Vec<String>,
    pub courses: Vec<String>,
    pub ideal_channel: String,
    pub is_suno_user: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_username: Option<String>,
}

impl ForwardPayload {
    /// Project a record's option ids to their display labels. Suno users
    /// were never asked for a reason, so their `sunoReason` column gets the
    /// fixed "already a user" marker instead.
    pub fn from_record(record: &AnswerRecord) -> Self {
        let suno_reason = if record.is_suno_user {
            SUNO_USER_LABEL.to_string()
        } else {
            single_label(Category::SunoReason, record.suno_reason.as_deref())
        };

        Self {
            nickname: record.nickname.clone(),
            role: single_label(Category::Role, record.role.as_deref()),
            goals: labels(Category::Goals, &record.goals),
            preferred_content: labels(Category::Content, &record.preferred_content),
            tools: labels(Category::Tools, &record.tools),
            suno_reason,
            motivation: single_label(Category::Motivation, record.motivation.as_deref()),
            formats: labels(Category::Formats, &record.formats),
            courses: labels(Category::Courses, &record.courses),
            ideal_channel: record.ideal_channel.clone(),
            is_suno_user: record.is_suno_user,
            telegram_id: record.telegram_id,
            telegram_username: record.telegram_username.clone(),
        }
    }
}
