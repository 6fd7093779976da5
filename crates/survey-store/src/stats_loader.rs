//! Community statistics loading with demo fallback
//!
//! The statistics panel never fails: with no collector configured it runs on
//! generated demo data, and a failed fetch degrades to demo data with a
//! banner flag. A reopened panel simply calls this again; a prior in-flight
//! fetch is superseded, not cancelled.

use crate::remote::RemoteCollector;
use crate::sample::generate_sample_records;
use survey_core::{SurveyStats, aggregate};
use tracing::warn;

/// Number of synthetic rows backing demo mode
const SAMPLE_SIZE: usize = 50;

/// Where the displayed statistics came from; anything but `Live` shows the
/// demo-mode banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsSource {
    /// Real rows fetched from the collector
    Live,
    /// No collector URL configured
    DemoNoUrl,
    /// Collector fetch failed; showing generated data instead
    DemoFetchFailed,
}

impl StatsSource {
    /// Whether the demo-mode banner applies
    pub fn is_demo(self) -> bool {
        self != StatsSource::Live
    }
}

/// Load community statistics, falling back to generated demo data when the
/// collector is missing or unreachable. Never fails.
pub async fn load_community_stats(
    collector: Option<&RemoteCollector>,
) -> (SurveyStats, StatsSource) {
    let Some(collector) = collector else {
        return (
            aggregate(&generate_sample_records(SAMPLE_SIZE)),
            StatsSource::DemoNoUrl,
        );
    };

    match collector.fetch_records().await {
        Ok(rows) => (aggregate(&rows), StatsSource::Live),
        Err(e) => {
            warn!("Stats fetch failed, falling back to demo data: {e}");
            (
                aggregate(&generate_sample_records(SAMPLE_SIZE)),
                StatsSource::DemoFetchFailed,
            )
        }
    }
}
