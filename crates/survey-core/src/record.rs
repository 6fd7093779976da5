//! Answer record and its typed mutation operations
//!
//! One [`AnswerRecord`] accumulates a single respondent's selections over a
//! session. All mutation goes through the operations here; they are the only
//! code path that writes selections, which is what keeps the "no id outside
//! its category" invariant true.

use crate::catalog::Category;
use crate::config::SUNO_MARKER_ID;
use serde::{Deserialize, Serialize};

/// Identity supplied by the host embedding container (absent in the plain
/// browser fallback)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostIdentity {
    /// Durable numeric id, used as the dedup key for stored results
    pub id: i64,
    /// Public handle, if the user has one
    pub handle: Option<String>,
    /// Display name fallback when no handle exists
    pub first_name: String,
}

impl HostIdentity {
    /// Nickname derived from the identity: `@handle` if present, else the
    /// first name
    pub fn display_name(&self) -> String {
        match &self.handle {
            Some(handle) => format!("@{handle}"),
            None => self.first_name.clone(),
        }
    }
}

/// Single-choice fields of the record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleField {
    Role,
    SunoReason,
    Motivation,
}

impl SingleField {
    /// Catalog category backing this field
    pub fn category(self) -> Category {
        match self {
            SingleField::Role => Category::Role,
            SingleField::SunoReason => Category::SunoReason,
            SingleField::Motivation => Category::Motivation,
        }
    }
}

/// Multi-choice fields of the record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiField {
    Goals,
    Content,
    Tools,
    Formats,
    Courses,
}

impl MultiField {
    /// Catalog category backing this field
    pub fn category(self) -> Category {
        match self {
            MultiField::Goals => Category::Goals,
            MultiField::Content => Category::Content,
            MultiField::Tools => Category::Tools,
            MultiField::Formats => Category::Formats,
            MultiField::Courses => Category::Courses,
        }
    }

    /// Maximum number of simultaneous selections
    pub fn cap(self) -> usize {
        match self {
            MultiField::Content => 3,
            _ => usize::MAX,
        }
    }
}

/// Free-text fields of the record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Nickname,
    IdealChannel,
}

/// One respondent's full set of answers.
///
/// Serializes with camelCase names so the local blob and the remote payload
/// keep the original wire format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerRecord {
    pub nickname: String,
    pub role: Option<String>,
    pub goals: Vec<String>,
    pub preferred_content: Vec<String>,
    pub tools: Vec<String>,
    pub suno_reason: Option<String>,
    pub motivation: Option<String>,
    pub formats: Vec<String>,
    pub courses: Vec<String>,
    pub ideal_channel: String,
    pub is_suno_user: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_username: Option<String>,
}

/// Dedup key of a stored record: host identity id when launched embedded,
/// else the free-text nickname
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DedupKey {
    Host(i64),
    Nickname(String),
}

impl AnswerRecord {
    /// Empty record, optionally pre-seeded from a host identity
    pub fn seeded(identity: Option<&HostIdentity>) -> Self {
        let mut record = Self::default();
        record.seed_identity(identity);
        record
    }

    fn seed_identity(&mut self, identity: Option<&HostIdentity>) {
        if let Some(identity) = identity {
            self.nickname = identity.display_name();
            self.telegram_id = Some(identity.id);
            self.telegram_username = identity.handle.clone();
        }
    }

    /// Restore all fields to empty, reseeding identity-derived fields when a
    /// host identity is supplied
    pub fn reset(&mut self, identity: Option<&HostIdentity>) {
        *self = Self::seeded(identity);
    }

    fn single_slot(&mut self, field: SingleField) -> &mut Option<String> {
        match field {
            SingleField::Role => &mut self.role,
            SingleField::SunoReason => &mut self.suno_reason,
            SingleField::Motivation => &mut self.motivation,
        }
    }

    /// Selections of a multi-choice field, in insertion order
    pub fn multi(&self, field: MultiField) -> &[String] {
        match field {
            MultiField::Goals => &self.goals,
            MultiField::Content => &self.preferred_content,
            MultiField::Tools => &self.tools,
            MultiField::Formats => &self.formats,
            MultiField::Courses => &self.courses,
        }
    }

    fn multi_slot(&mut self, field: MultiField) -> &mut Vec<String> {
        match field {
            MultiField::Goals => &mut self.goals,
            MultiField::Content => &mut self.preferred_content,
            MultiField::Tools => &mut self.tools,
            MultiField::Formats => &mut self.formats,
            MultiField::Courses => &mut self.courses,
        }
    }

    /// Current value of a single-choice field
    pub fn single(&self, field: SingleField) -> Option<&str> {
        match field {
            SingleField::Role => self.role.as_deref(),
            SingleField::SunoReason => self.suno_reason.as_deref(),
            SingleField::Motivation => self.motivation.as_deref(),
        }
    }

    /// Set a single-choice field. Ids missing from the field's catalog are
    /// ignored; returns whether the record changed.
    pub fn set_single(&mut self, field: SingleField, id: &str) -> bool {
        if !field.category().contains_id(id) {
            return false;
        }
        *self.single_slot(field) = Some(id.to_string());
        true
    }

    /// Toggle an id in a multi-choice field.
    ///
    /// Selecting an already-selected id removes it; selecting a new id adds
    /// it unless `max` selections are already present, in which case the
    /// action is silently ignored. Unknown ids are ignored too. Returns
    /// whether the record changed.
    pub fn toggle_multi(&mut self, field: MultiField, id: &str, max: usize) -> bool {
        if !field.category().contains_id(id) {
            return false;
        }
        let selections = self.multi_slot(field);
        if let Some(pos) = selections.iter().position(|v| v == id) {
            selections.remove(pos);
            return true;
        }
        if selections.len() >= max {
            return false;
        }
        selections.push(id.to_string());
        true
    }

    /// Set a free-text field
    pub fn set_text(&mut self, field: TextField, text: &str) {
        let slot = match field {
            TextField::Nickname => &mut self.nickname,
            TextField::IdealChannel => &mut self.ideal_channel,
        };
        *slot = text.to_string();
    }

    /// Derive the AI-music flag from the tools selection
    pub fn derive_suno_flag(&mut self) {
        self.is_suno_user = self.tools.iter().any(|t| t == SUNO_MARKER_ID);
    }

    /// Key deciding whether this record updates or appends in the stored
    /// collection
    pub fn dedup_key(&self) -> DedupKey {
        match self.telegram_id {
            Some(id) => DedupKey::Host(id),
            None => DedupKey::Nickname(self.nickname.clone()),
        }
    }

    /// Whether `stored` would be replaced by this record on upsert
    pub fn dedup_matches(&self, stored: &AnswerRecord) -> bool {
        match self.dedup_key() {
            DedupKey::Host(id) => stored.telegram_id == Some(id),
            DedupKey::Nickname(nickname) => stored.nickname == nickname,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_idempotent_under_double_invocation() {
        let mut record = AnswerRecord::default();

        assert!(record.toggle_multi(MultiField::Goals, "money", usize::MAX));
        assert!(record.toggle_multi(MultiField::Goals, "money", usize::MAX));
        assert!(record.goals.is_empty());

        assert!(record.toggle_multi(MultiField::Goals, "fun", usize::MAX));
        assert!(record.toggle_multi(MultiField::Goals, "fun", usize::MAX));
        assert!(record.toggle_multi(MultiField::Goals, "fun", usize::MAX));
        assert_eq!(record.goals, vec!["fun"]);
    }

    #[test]
    fn test_toggle_respects_cap() {
        let mut record = AnswerRecord::default();
        let cap = MultiField::Content.cap();
        assert_eq!(cap, 3);

        assert!(record.toggle_multi(MultiField::Content, "guides", cap));
        assert!(record.toggle_multi(MultiField::Content, "cases", cap));
        assert!(record.toggle_multi(MultiField::Content, "tools", cap));
        // Fourth selection is silently ignored.
        assert!(!record.toggle_multi(MultiField::Content, "memes", cap));
        assert_eq!(record.preferred_content.len(), 3);

        // Deselecting still works at the cap.
        assert!(record.toggle_multi(MultiField::Content, "cases", cap));
        assert_eq!(record.preferred_content, vec!["guides", "tools"]);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut record = AnswerRecord::default();
        assert!(!record.set_single(SingleField::Role, "astronaut"));
        assert!(record.role.is_none());
        assert!(!record.toggle_multi(MultiField::Tools, "abacus", usize::MAX));
        assert!(record.tools.is_empty());
    }

    #[test]
    fn test_derive_suno_flag() {
        let mut record = AnswerRecord::default();
        record.toggle_multi(MultiField::Tools, "chatgpt", usize::MAX);
        record.derive_suno_flag();
        assert!(!record.is_suno_user);

        record.toggle_multi(MultiField::Tools, "music", usize::MAX);
        record.derive_suno_flag();
        assert!(record.is_suno_user);
    }

    #[test]
    fn test_dedup_prefers_host_identity() {
        let identity = HostIdentity {
            id: 42,
            handle: Some("anna".to_string()),
            first_name: "Anna".to_string(),
        };
        let record = AnswerRecord::seeded(Some(&identity));
        assert_eq!(record.nickname, "@anna");
        assert_eq!(record.dedup_key(), DedupKey::Host(42));

        let mut stored = AnswerRecord::default();
        stored.telegram_id = Some(42);
        stored.nickname = "someone else".to_string();
        assert!(record.dedup_matches(&stored));
    }

    #[test]
    fn test_dedup_by_nickname_without_identity() {
        let mut record = AnswerRecord::default();
        record.nickname = "Anna".to_string();

        let mut stored = AnswerRecord::default();
        stored.nickname = "Anna".to_string();
        stored.telegram_id = Some(7);
        // A browser session matches a stored embedded session by nickname.
        assert!(record.dedup_matches(&stored));
    }

    #[test]
    fn test_reset_reseeds_identity() {
        let identity = HostIdentity {
            id: 1,
            handle: None,
            first_name: "Оля".to_string(),
        };
        let mut record = AnswerRecord::seeded(Some(&identity));
        record.set_single(SingleField::Role, "creative");
        record.toggle_multi(MultiField::Formats, "short", usize::MAX);

        record.reset(Some(&identity));
        assert_eq!(record.nickname, "Оля");
        assert_eq!(record.telegram_id, Some(1));
        assert!(record.role.is_none());
        assert!(record.formats.is_empty());
    }

    #[test]
    fn test_serializes_with_camel_case_wire_names() {
        let mut record = AnswerRecord::default();
        record.nickname = "Anna".to_string();
        record.toggle_multi(MultiField::Content, "guides", 3);
        record.is_suno_user = true;

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["preferredContent"][0], "guides");
        assert_eq!(value["isSunoUser"], true);
        assert_eq!(value["idealChannel"], "");
        // Absent identity fields stay off the wire entirely.
        assert!(value.get("telegramId").is_none());
    }
}
