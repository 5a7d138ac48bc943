//! `maturity-wizard` — the assessment wizard state machine.
//!
//! Deterministic domain logic only: commands in, events out, state evolved
//! through event application. Persistence and UI delays live in the session
//! driver, not here.

pub mod snapshot;
pub mod wizard;

pub use snapshot::{PersistedView, WizardSnapshot};
pub use wizard::{
    AdvanceToQuestion, AnalysisStarted, AnswerQuestion, AnswerRecorded, AssessmentStarted,
    JumpToQuestion, LeadCaptured, PresentResults, QuestionAdvanced, QuestionJumped, ResetWizard,
    ResultsReady, StartAssessment, SubmitLead, Wizard, WizardCommand, WizardEvent, WizardPhase,
    WizardReset,
};
