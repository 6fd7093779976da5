//! Aggregation engine for community statistics
//!
//! Consumes raw result rows as loosely-typed JSON, because the remote sheet
//! may return either option ids (older rows written by the app) or display
//! labels (rows written through the label-projected forward). Values are
//! normalized back to ids before counting; unknown values are counted under
//! their raw form rather than dropped.

use crate::catalog::Category;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Per-category occurrence counts over a collection of result rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SurveyStats {
    /// Number of rows aggregated
    pub total: usize,
    /// Category -> normalized value -> occurrence count
    pub per_category: BTreeMap<Category, BTreeMap<String, usize>>,
}

impl SurveyStats {
    /// Occurrence count for one value of a category
    pub fn count(&self, category: Category, id: &str) -> usize {
        self.per_category
            .get(&category)
            .and_then(|counts| counts.get(id))
            .copied()
            .unwrap_or(0)
    }

    /// Share of respondents who picked the value, rounded to whole percent.
    /// An empty collection yields 0% everywhere.
    pub fn percent(&self, category: Category, id: &str) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.count(category, id) as f64 / self.total as f64 * 100.0).round() as u32
    }
}

fn count_value(counts: &mut BTreeMap<String, usize>, category: Category, raw: &str) {
    if raw.is_empty() {
        return;
    }
    *counts.entry(category.normalize(raw)).or_insert(0) += 1;
}

/// Aggregate raw result rows into per-category counts.
///
/// Pure and deterministic: array fields contribute one count per element,
/// non-empty scalar fields one count, missing or null fields nothing.
/// Non-object rows are skipped.
pub fn aggregate(records: &[Value]) -> SurveyStats {
    let mut stats = SurveyStats {
        total: records.len(),
        per_category: BTreeMap::new(),
    };

    for category in Category::ALL {
        let counts = stats.per_category.entry(category).or_default();
        for record in records {
            let Some(object) = record.as_object() else {
                continue;
            };
            match object.get(category.record_field()) {
                Some(Value::Array(items)) => {
                    for item in items {
                        if let Some(raw) = item.as_str() {
                            count_value(counts, category, raw);
                        }
                    }
                }
                Some(Value::String(raw)) => count_value(counts, category, raw),
                _ => {}
            }
        }
    }

    stats
}
