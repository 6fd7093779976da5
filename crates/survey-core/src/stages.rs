//! Forward-only stage sequencer
//!
//! The survey is a fixed sequence of eleven stages with a single branch: the
//! Suno stage either asks for a confirmation (respondents who already use
//! AI music) or for one reason why not. Guard predicates never fail with an
//! error; a blocked transition simply returns `false` and the UI keeps its
//! action disabled.

use crate::record::{AnswerRecord, HostIdentity, MultiField, SingleField, TextField};
use serde::{Deserialize, Serialize};

/// One step of the survey dialog, in visiting order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Stage {
    Intro = 0,
    RoleSelection = 1,
    Goals = 2,
    ContentPreference = 3,
    ToolsUsage = 4,
    SunoLogic = 5,
    Motivation = 6,
    FormatPreference = 7,
    Courses = 8,
    IdealChannel = 9,
    Final = 10,
}

impl Stage {
    /// Zero-based position in the sequence
    pub fn index(self) -> u8 {
        self as u8
    }

    /// The following stage; `Final` is terminal and maps to itself
    pub fn next(self) -> Stage {
        match self {
            Stage::Intro => Stage::RoleSelection,
            Stage::RoleSelection => Stage::Goals,
            Stage::Goals => Stage::ContentPreference,
            Stage::ContentPreference => Stage::ToolsUsage,
            Stage::ToolsUsage => Stage::SunoLogic,
            Stage::SunoLogic => Stage::Motivation,
            Stage::Motivation => Stage::FormatPreference,
            Stage::FormatPreference => Stage::Courses,
            Stage::Courses => Stage::IdealChannel,
            Stage::IdealChannel | Stage::Final => Stage::Final,
        }
    }

    /// Whether this is the terminal stage
    pub fn is_final(self) -> bool {
        self == Stage::Final
    }

    /// Progress through the survey, for the progress bar
    pub fn progress_percent(self) -> u8 {
        (f64::from(self.index()) / f64::from(Stage::Final.index()) * 100.0).round() as u8
    }
}

impl Default for Stage {
    fn default() -> Self {
        Stage::Intro
    }
}

/// Stage a single-choice field is answered at
fn single_field_stage(field: SingleField) -> Stage {
    match field {
        SingleField::Role => Stage::RoleSelection,
        SingleField::SunoReason => Stage::SunoLogic,
        SingleField::Motivation => Stage::Motivation,
    }
}

/// Stage a multi-choice field is answered at
fn multi_field_stage(field: MultiField) -> Stage {
    match field {
        MultiField::Goals => Stage::Goals,
        MultiField::Content => Stage::ContentPreference,
        MultiField::Tools => Stage::ToolsUsage,
        MultiField::Formats => Stage::FormatPreference,
        MultiField::Courses => Stage::Courses,
    }
}

/// The single in-progress survey session.
///
/// Owns the stage pointer and the answer record; every mutation funnels
/// through the typed operations so stage guards and catalog validation stay
/// in one place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveySession {
    stage: Stage,
    record: AnswerRecord,
}

impl SurveySession {
    /// Fresh session at the intro stage
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh session pre-seeded with a host-container identity
    pub fn with_identity(identity: &HostIdentity) -> Self {
        Self {
            stage: Stage::Intro,
            record: AnswerRecord::seeded(Some(identity)),
        }
    }

    /// Current stage
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Read access to the accumulating record
    pub fn record(&self) -> &AnswerRecord {
        &self.record
    }

    /// Whether the session reached the terminal stage
    pub fn is_complete(&self) -> bool {
        self.stage.is_final()
    }

    fn advance(&mut self) {
        self.stage = self.stage.next();
    }

    /// Intro transition: requires non-empty nickname text
    pub fn submit_nickname(&mut self, text: &str) -> bool {
        if self.stage != Stage::Intro {
            return false;
        }
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.record.set_text(TextField::Nickname, text);
        self.advance();
        true
    }

    /// Select a single-choice option at its stage and auto-advance.
    ///
    /// The Suno-reason branch is only open to respondents who do not use AI
    /// music; suno users confirm via [`SurveySession::confirm`] instead.
    pub fn select_single(&mut self, field: SingleField, id: &str) -> bool {
        if self.stage != single_field_stage(field) {
            return false;
        }
        if field == SingleField::SunoReason && self.record.is_suno_user {
            return false;
        }
        if !self.record.set_single(field, id) {
            return false;
        }
        self.advance();
        true
    }

    /// Toggle a multi-choice option at its stage (no advance)
    pub fn toggle(&mut self, field: MultiField, id: &str) -> bool {
        if self.stage != multi_field_stage(field) {
            return false;
        }
        self.record.toggle_multi(field, id, field.cap())
    }

    /// Whether the explicit confirmation action is currently enabled
    pub fn can_advance(&self) -> bool {
        match self.stage {
            Stage::Goals => !self.record.goals.is_empty(),
            Stage::ContentPreference => !self.record.preferred_content.is_empty(),
            Stage::ToolsUsage => !self.record.tools.is_empty(),
            Stage::FormatPreference => !self.record.formats.is_empty(),
            Stage::Courses => !self.record.courses.is_empty(),
            // Suno users acknowledge and move on; non-users must pick a reason.
            Stage::SunoLogic => self.record.is_suno_user,
            _ => false,
        }
    }

    /// Explicit confirmation for multi-select stages and the Suno
    /// acknowledgement. Leaving the tools stage derives the AI-music flag
    /// before moving into the branch.
    pub fn confirm(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        if self.stage == Stage::ToolsUsage {
            self.record.derive_suno_flag();
        }
        self.advance();
        true
    }

    /// Terminal transition: requires the free-text channel idea. On success
    /// the completed record is returned exactly once for persistence; the
    /// caller hands it to the result store without blocking the transition.
    pub fn submit_ideal_channel(&mut self, text: &str) -> Option<AnswerRecord> {
        if self.stage != Stage::IdealChannel {
            return None;
        }
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.record.set_text(TextField::IdealChannel, text);
        self.advance();
        Some(self.record.clone())
    }

    /// Throw the current record away and start over
    pub fn restart(&mut self, identity: Option<&HostIdentity>) {
        self.record.reset(identity);
        self.stage = Stage::Intro;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_at_goals() -> SurveySession {
        let mut session = SurveySession::new();
        assert!(session.submit_nickname("Anna"));
        assert!(session.select_single(SingleField::Role, "freelance"));
        session
    }

    #[test]
    fn test_intro_requires_nickname() {
        let mut session = SurveySession::new();
        assert!(!session.submit_nickname(""));
        assert!(!session.submit_nickname("   "));
        assert_eq!(session.stage(), Stage::Intro);

        assert!(session.submit_nickname("  Anna  "));
        assert_eq!(session.record().nickname, "Anna");
        assert_eq!(session.stage(), Stage::RoleSelection);
    }

    #[test]
    fn test_single_select_auto_advances() {
        let mut session = SurveySession::new();
        session.submit_nickname("Anna");
        assert!(session.select_single(SingleField::Role, "business"));
        assert_eq!(session.stage(), Stage::Goals);
    }

    #[test]
    fn test_confirm_blocked_until_selection() {
        let mut session = session_at_goals();
        assert!(!session.can_advance());
        assert!(!session.confirm());
        assert_eq!(session.stage(), Stage::Goals);

        assert!(session.toggle(MultiField::Goals, "money"));
        assert!(session.confirm());
        assert_eq!(session.stage(), Stage::ContentPreference);
    }

    #[test]
    fn test_tools_confirm_derives_suno_flag() {
        let mut session = session_at_goals();
        session.toggle(MultiField::Goals, "money");
        session.confirm();
        session.toggle(MultiField::Content, "guides");
        session.confirm();

        session.toggle(MultiField::Tools, "chatgpt");
        session.toggle(MultiField::Tools, "music");
        assert!(session.confirm());
        assert_eq!(session.stage(), Stage::SunoLogic);
        assert!(session.record().is_suno_user);
    }

    #[test]
    fn test_suno_user_acknowledges_and_skips_reason() {
        let mut session = session_at_goals();
        session.toggle(MultiField::Goals, "money");
        session.confirm();
        session.toggle(MultiField::Content, "guides");
        session.confirm();
        session.toggle(MultiField::Tools, "music");
        session.confirm();

        // Reason options are closed to suno users.
        assert!(!session.select_single(SingleField::SunoReason, "expensive"));
        assert!(session.confirm());
        assert_eq!(session.stage(), Stage::Motivation);
        assert!(session.record().suno_reason.is_none());
    }

    #[test]
    fn test_non_suno_user_must_pick_a_reason() {
        let mut session = session_at_goals();
        session.toggle(MultiField::Goals, "money");
        session.confirm();
        session.toggle(MultiField::Content, "guides");
        session.confirm();
        session.toggle(MultiField::Tools, "chatgpt");
        session.confirm();
        assert_eq!(session.stage(), Stage::SunoLogic);
        assert!(!session.record().is_suno_user);

        // The acknowledgement path is closed; without a reason the session
        // stays here indefinitely.
        assert!(!session.confirm());
        assert_eq!(session.stage(), Stage::SunoLogic);

        assert!(session.select_single(SingleField::SunoReason, "hard"));
        assert_eq!(session.stage(), Stage::Motivation);
        assert_eq!(session.record().suno_reason.as_deref(), Some("hard"));
    }

    #[test]
    fn test_stages_visit_in_strictly_increasing_order() {
        let mut session = SurveySession::new();
        let mut visited = vec![session.stage()];

        session.submit_nickname("Anna");
        visited.push(session.stage());
        session.select_single(SingleField::Role, "freelance");
        visited.push(session.stage());
        session.toggle(MultiField::Goals, "money");
        session.confirm();
        visited.push(session.stage());
        session.toggle(MultiField::Content, "guides");
        session.confirm();
        visited.push(session.stage());
        session.toggle(MultiField::Tools, "chatgpt");
        session.confirm();
        visited.push(session.stage());
        session.select_single(SingleField::SunoReason, "missed");
        visited.push(session.stage());
        session.select_single(SingleField::Motivation, "earn");
        visited.push(session.stage());
        session.toggle(MultiField::Formats, "short");
        session.confirm();
        visited.push(session.stage());
        session.toggle(MultiField::Courses, "prompting");
        session.confirm();
        visited.push(session.stage());
        let completed = session.submit_ideal_channel("AI digest");
        visited.push(session.stage());

        assert!(completed.is_some());
        assert!(session.is_complete());
        assert!(visited.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_ideal_channel_requires_text_and_freezes_once() {
        let mut session = session_at_goals();
        session.toggle(MultiField::Goals, "fun");
        session.confirm();
        session.toggle(MultiField::Content, "memes");
        session.confirm();
        session.toggle(MultiField::Tools, "beginner");
        session.confirm();
        session.select_single(SingleField::SunoReason, "missed");
        session.select_single(SingleField::Motivation, "jokes");
        session.toggle(MultiField::Formats, "video");
        session.confirm();
        session.toggle(MultiField::Courses, "images");
        session.confirm();
        assert_eq!(session.stage(), Stage::IdealChannel);

        assert!(session.submit_ideal_channel("  ").is_none());
        assert_eq!(session.stage(), Stage::IdealChannel);

        let record = session.submit_ideal_channel("мемы и AI").unwrap();
        assert_eq!(record.ideal_channel, "мемы и AI");
        assert!(session.is_complete());

        // Terminal stage: no second completion.
        assert!(session.submit_ideal_channel("again").is_none());
    }

    #[test]
    fn test_out_of_stage_actions_are_blocked() {
        let mut session = SurveySession::new();
        assert!(!session.toggle(MultiField::Courses, "coding"));
        assert!(!session.select_single(SingleField::Motivation, "earn"));
        assert!(session.submit_ideal_channel("early").is_none());
        assert_eq!(session.stage(), Stage::Intro);
    }

    #[test]
    fn test_restart_returns_to_intro_with_fresh_record() {
        let identity = HostIdentity {
            id: 9,
            handle: Some("anna".to_string()),
            first_name: "Anna".to_string(),
        };
        let mut session = SurveySession::with_identity(&identity);
        session.submit_nickname("@anna");
        session.select_single(SingleField::Role, "creative");

        session.restart(Some(&identity));
        assert_eq!(session.stage(), Stage::Intro);
        assert_eq!(session.record().nickname, "@anna");
        assert!(session.record().role.is_none());
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(Stage::Intro.progress_percent(), 0);
        assert_eq!(Stage::SunoLogic.progress_percent(), 50);
        assert_eq!(Stage::Final.progress_percent(), 100);
    }
}
