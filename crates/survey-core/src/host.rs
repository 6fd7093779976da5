//! Host embedding container capability
//!
//! When the survey runs inside the chat-platform mini-app container, the
//! host supplies the respondent's identity and an exit hook that hands a
//! payload back to the bot and closes the embedded view. In the plain
//! browser there is no host; the fallback implementation reports both as
//! unavailable and the UI shows an explanatory message instead.

use crate::catalog::Category;
use crate::record::{AnswerRecord, HostIdentity};
use serde_json::{Value, json};

/// Capability interface to the embedding container, injected at startup.
/// Core logic never reaches for the host as ambient global state.
pub trait HostContainer {
    /// Identity of the embedded user, if the host provides one
    fn identity(&self) -> Option<HostIdentity>;

    /// Hand a payload back to the host and close the embedded view.
    /// Returns whether the host accepted the exit.
    fn exit_with_payload(&self, payload: &str) -> bool;
}

/// No-op host used in the plain browser fallback
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFallback;

impl HostContainer for BrowserFallback {
    fn identity(&self) -> Option<HostIdentity> {
        None
    }

    fn exit_with_payload(&self, _payload: &str) -> bool {
        false
    }
}

fn labels(category: Category, ids: &[String]) -> Vec<&str> {
    ids.iter().map(|id| category.label_or_raw(id)).collect()
}

/// Label-projected profile of a completed record, as shown on the final
/// screen and handed to the host exit hook
pub fn readable_profile(record: &AnswerRecord) -> Value {
    json!({
        "Имя": record.nickname,
        "Роль": record
            .role
            .as_deref()
            .map(|id| Category::Role.label_or_raw(id))
            .unwrap_or(""),
        "Цели": labels(Category::Goals, &record.goals),
        "Контент": labels(Category::Content, &record.preferred_content),
        "Инструменты": labels(Category::Tools, &record.tools),
        "Курсы": labels(Category::Courses, &record.courses),
        "Идея канала": record.ideal_channel,
    })
}
