//! Wizard aggregate: intro → lead-capture → answering → analyzing → results.
//!
//! # Invariants
//! - Answers are only recorded while answering, and only with a score offered
//!   by the current question.
//! - Jumping is random access within bounds, restricted to questions already
//!   visited or already answered; it never mutates answers.
//! - Analysis starts only by answering on the last catalog question with the
//!   full catalog covered.
//! - Reset is allowed from any phase and erases every trace of the run.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use maturity_catalog::{AnswerSet, Question, QuestionCatalog, QuestionId};
use maturity_core::{Aggregate, AggregateRoot, AssessmentId, DomainError, DomainResult, Event};
use maturity_leads::LeadProfile;

use crate::snapshot::{PersistedView, WizardSnapshot};

// ─────────────────────────────────────────────────────────────────────────────
// Phase
// ─────────────────────────────────────────────────────────────────────────────

/// Wizard lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardPhase {
    Intro,
    LeadCapture,
    Answering,
    Analyzing,
    Results,
}

impl WizardPhase {
    /// The snapshot view for this phase. `None` for phases that are never
    /// persisted (intro, analyzing, results).
    pub fn persisted_view(&self) -> Option<PersistedView> {
        match self {
            WizardPhase::LeadCapture => Some(PersistedView::LeadForm),
            WizardPhase::Answering => Some(PersistedView::Assessment),
            WizardPhase::Intro | WizardPhase::Analyzing | WizardPhase::Results => None,
        }
    }
}

impl core::fmt::Display for WizardPhase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            WizardPhase::Intro => "intro",
            WizardPhase::LeadCapture => "lead-capture",
            WizardPhase::Answering => "answering",
            WizardPhase::Analyzing => "analyzing",
            WizardPhase::Results => "results",
        };
        f.write_str(name)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Aggregate
// ─────────────────────────────────────────────────────────────────────────────

/// The assessment wizard for one respondent run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    id: AssessmentId,
    catalog: Arc<QuestionCatalog>,
    phase: WizardPhase,
    answers: AnswerSet,
    lead: LeadProfile,
    current_index: usize,
    highest_visited: usize,
    completed_at: Option<DateTime<Utc>>,
    version: u64,
}

impl Wizard {
    /// Fresh wizard at the intro screen.
    pub fn new(id: AssessmentId, catalog: Arc<QuestionCatalog>) -> Self {
        Self {
            id,
            catalog,
            phase: WizardPhase::Intro,
            answers: AnswerSet::new(),
            lead: LeadProfile::default(),
            current_index: 0,
            highest_visited: 0,
            completed_at: None,
            version: 0,
        }
    }

    /// Rebuild a wizard from persisted progress.
    ///
    /// Positions at the first catalog question without an answer, or at the
    /// first question when everything was answered but completion was
    /// interrupted.
    pub fn from_snapshot(
        id: AssessmentId,
        catalog: Arc<QuestionCatalog>,
        snapshot: WizardSnapshot,
    ) -> Self {
        let phase = match snapshot.view {
            PersistedView::LeadForm => WizardPhase::LeadCapture,
            PersistedView::Assessment => WizardPhase::Answering,
        };
        let current_index = catalog.first_unanswered(&snapshot.answers).unwrap_or(0);

        Self {
            id,
            catalog,
            phase,
            answers: snapshot.answers,
            lead: snapshot.lead,
            current_index,
            highest_visited: current_index,
            completed_at: None,
            version: 0,
        }
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn lead(&self) -> &LeadProfile {
        &self.lead
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// When the run completed (the results became ready), if it has.
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// The question at the current index, falling back to the first catalog
    /// question when the index is somehow out of range.
    pub fn current_question(&self) -> Option<&Question> {
        self.catalog
            .get(self.current_index)
            .or_else(|| self.catalog.get(0))
    }

    /// `(answered, total)` over the catalog.
    pub fn progress(&self) -> (usize, usize) {
        let answered = self
            .catalog
            .iter()
            .filter(|q| self.answers.contains(&q.id))
            .count();
        (answered, self.catalog.len())
    }

    /// Resumable progress for the current phase; `None` when the phase is
    /// never persisted.
    pub fn snapshot(&self, saved_at: DateTime<Utc>) -> Option<WizardSnapshot> {
        let view = self.phase.persisted_view()?;
        Some(WizardSnapshot {
            view,
            answers: self.answers.clone(),
            lead: self.lead.clone(),
            saved_at,
        })
    }

    fn set_index(&mut self, index: usize) {
        self.current_index = index;
        if index > self.highest_visited {
            self.highest_visited = index;
        }
    }
}

impl AggregateRoot for Wizard {
    type Id = AssessmentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Command: leave the intro screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartAssessment {
    pub occurred_at: DateTime<Utc>,
}

/// Command: submit the lead form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitLead {
    pub lead: LeadProfile,
    pub occurred_at: DateTime<Utc>,
}

/// Command: answer the current question with one of its option scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerQuestion {
    pub score: u8,
    pub occurred_at: DateTime<Utc>,
}

/// Command: random access to a visited or answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JumpToQuestion {
    pub index: usize,
    pub occurred_at: DateTime<Utc>,
}

/// Command: move to the next question once the advance delay elapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceToQuestion {
    pub index: usize,
    pub occurred_at: DateTime<Utc>,
}

/// Command: reveal the results once the analysis delay elapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentResults {
    pub occurred_at: DateTime<Utc>,
}

/// Command: abandon the run, back to intro. Callers confirm with the user
/// first; the wizard itself asks no questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetWizard {
    pub occurred_at: DateTime<Utc>,
}

/// All wizard commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardCommand {
    StartAssessment(StartAssessment),
    SubmitLead(SubmitLead),
    AnswerQuestion(AnswerQuestion),
    JumpToQuestion(JumpToQuestion),
    AdvanceToQuestion(AdvanceToQuestion),
    PresentResults(PresentResults),
    ResetWizard(ResetWizard),
}

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

/// Event: the respondent left the intro screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentStarted {
    pub occurred_at: DateTime<Utc>,
}

/// Event: a valid lead was captured (already normalized).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadCaptured {
    pub lead: LeadProfile,
    pub occurred_at: DateTime<Utc>,
}

/// Event: an answer was recorded (overwriting any earlier one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecorded {
    pub question_id: QuestionId,
    pub score: u8,
    pub occurred_at: DateTime<Utc>,
}

/// Event: the current question moved forward after the advance delay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAdvanced {
    pub index: usize,
    pub occurred_at: DateTime<Utc>,
}

/// Event: the respondent jumped to an earlier-seen question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionJumped {
    pub index: usize,
    pub occurred_at: DateTime<Utc>,
}

/// Event: the full catalog is covered; analysis is underway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStarted {
    pub occurred_at: DateTime<Utc>,
}

/// Event: results are ready to show. `occurred_at` doubles as the stable
/// report timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsReady {
    pub occurred_at: DateTime<Utc>,
}

/// Event: the run was abandoned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardReset {
    pub occurred_at: DateTime<Utc>,
}

/// All wizard events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardEvent {
    AssessmentStarted(AssessmentStarted),
    LeadCaptured(LeadCaptured),
    AnswerRecorded(AnswerRecorded),
    QuestionAdvanced(QuestionAdvanced),
    QuestionJumped(QuestionJumped),
    AnalysisStarted(AnalysisStarted),
    ResultsReady(ResultsReady),
    WizardReset(WizardReset),
}

impl Event for WizardEvent {
    fn event_type(&self) -> &'static str {
        match self {
            WizardEvent::AssessmentStarted(_) => "assessment.wizard.started",
            WizardEvent::LeadCaptured(_) => "assessment.wizard.lead_captured",
            WizardEvent::AnswerRecorded(_) => "assessment.wizard.answer_recorded",
            WizardEvent::QuestionAdvanced(_) => "assessment.wizard.question_advanced",
            WizardEvent::QuestionJumped(_) => "assessment.wizard.question_jumped",
            WizardEvent::AnalysisStarted(_) => "assessment.wizard.analysis_started",
            WizardEvent::ResultsReady(_) => "assessment.wizard.results_ready",
            WizardEvent::WizardReset(_) => "assessment.wizard.reset",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            WizardEvent::AssessmentStarted(e) => e.occurred_at,
            WizardEvent::LeadCaptured(e) => e.occurred_at,
            WizardEvent::AnswerRecorded(e) => e.occurred_at,
            WizardEvent::QuestionAdvanced(e) => e.occurred_at,
            WizardEvent::QuestionJumped(e) => e.occurred_at,
            WizardEvent::AnalysisStarted(e) => e.occurred_at,
            WizardEvent::ResultsReady(e) => e.occurred_at,
            WizardEvent::WizardReset(e) => e.occurred_at,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Aggregate Implementation
// ─────────────────────────────────────────────────────────────────────────────

impl Aggregate for Wizard {
    type Command = WizardCommand;
    type Event = WizardEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            WizardEvent::AssessmentStarted(_) => {
                self.phase = WizardPhase::LeadCapture;
            }
            WizardEvent::LeadCaptured(e) => {
                self.lead = e.lead.clone();
                self.phase = WizardPhase::Answering;
                self.set_index(0);
            }
            WizardEvent::AnswerRecorded(e) => {
                self.answers.record(e.question_id.clone(), e.score);
            }
            WizardEvent::QuestionAdvanced(e) => {
                self.set_index(e.index);
            }
            WizardEvent::QuestionJumped(e) => {
                self.set_index(e.index);
            }
            WizardEvent::AnalysisStarted(_) => {
                self.phase = WizardPhase::Analyzing;
            }
            WizardEvent::ResultsReady(e) => {
                self.phase = WizardPhase::Results;
                self.completed_at = Some(e.occurred_at);
            }
            WizardEvent::WizardReset(_) => {
                self.phase = WizardPhase::Intro;
                self.answers.clear();
                self.lead = LeadProfile::default();
                self.current_index = 0;
                self.highest_visited = 0;
                self.completed_at = None;
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            WizardCommand::StartAssessment(cmd) => self.handle_start(cmd),
            WizardCommand::SubmitLead(cmd) => self.handle_submit_lead(cmd),
            WizardCommand::AnswerQuestion(cmd) => self.handle_answer(cmd),
            WizardCommand::JumpToQuestion(cmd) => self.handle_jump(cmd),
            WizardCommand::AdvanceToQuestion(cmd) => self.handle_advance(cmd),
            WizardCommand::PresentResults(cmd) => self.handle_present_results(cmd),
            WizardCommand::ResetWizard(cmd) => self.handle_reset(cmd),
        }
    }
}

impl Wizard {
    fn ensure_answering(&self) -> DomainResult<()> {
        if self.phase != WizardPhase::Answering {
            return Err(DomainError::conflict(format!(
                "not answering questions (phase: {})",
                self.phase
            )));
        }
        Ok(())
    }

    fn ensure_in_bounds(&self, index: usize) -> DomainResult<()> {
        if index >= self.catalog.len() {
            return Err(DomainError::validation(format!(
                "question index {index} is out of range"
            )));
        }
        Ok(())
    }

    fn handle_start(&self, cmd: &StartAssessment) -> DomainResult<Vec<WizardEvent>> {
        if self.phase != WizardPhase::Intro {
            return Err(DomainError::conflict("assessment already started"));
        }

        Ok(vec![WizardEvent::AssessmentStarted(AssessmentStarted {
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_submit_lead(&self, cmd: &SubmitLead) -> DomainResult<Vec<WizardEvent>> {
        if self.phase != WizardPhase::LeadCapture {
            return Err(DomainError::conflict(
                "lead can only be submitted from the lead form",
            ));
        }

        cmd.lead.validate()?;

        Ok(vec![WizardEvent::LeadCaptured(LeadCaptured {
            lead: cmd.lead.normalized(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_answer(&self, cmd: &AnswerQuestion) -> DomainResult<Vec<WizardEvent>> {
        self.ensure_answering()?;

        let Some(question) = self.catalog.get(self.current_index) else {
            return Err(DomainError::invariant("current index points past the catalog"));
        };

        if !question.accepts_score(cmd.score) {
            return Err(DomainError::validation(format!(
                "score {} is not an option for question {}",
                cmd.score, question.id
            )));
        }

        let mut events = vec![WizardEvent::AnswerRecorded(AnswerRecorded {
            question_id: question.id.clone(),
            score: cmd.score,
            occurred_at: cmd.occurred_at,
        })];

        // Completion requires answering on the last catalog question with the
        // full catalog covered afterwards.
        let on_last = self.current_index + 1 == self.catalog.len();
        if on_last {
            let mut answers_after = self.answers.clone();
            answers_after.record(question.id.clone(), cmd.score);
            if self.catalog.is_complete(&answers_after) {
                events.push(WizardEvent::AnalysisStarted(AnalysisStarted {
                    occurred_at: cmd.occurred_at,
                }));
            }
        }

        Ok(events)
    }

    fn handle_jump(&self, cmd: &JumpToQuestion) -> DomainResult<Vec<WizardEvent>> {
        self.ensure_answering()?;
        self.ensure_in_bounds(cmd.index)?;

        let visited = cmd.index <= self.highest_visited;
        let answered = self
            .catalog
            .get(cmd.index)
            .is_some_and(|q| self.answers.contains(&q.id));
        if !visited && !answered {
            return Err(DomainError::invariant(
                "can only jump to a visited or answered question",
            ));
        }

        Ok(vec![WizardEvent::QuestionJumped(QuestionJumped {
            index: cmd.index,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_advance(&self, cmd: &AdvanceToQuestion) -> DomainResult<Vec<WizardEvent>> {
        self.ensure_answering()?;
        self.ensure_in_bounds(cmd.index)?;

        Ok(vec![WizardEvent::QuestionAdvanced(QuestionAdvanced {
            index: cmd.index,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_present_results(&self, cmd: &PresentResults) -> DomainResult<Vec<WizardEvent>> {
        if self.phase != WizardPhase::Analyzing {
            return Err(DomainError::conflict(
                "results are only presented after analysis",
            ));
        }

        Ok(vec![WizardEvent::ResultsReady(ResultsReady {
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_reset(&self, cmd: &ResetWizard) -> DomainResult<Vec<WizardEvent>> {
        // Allowed from any phase, including intro.
        Ok(vec![WizardEvent::WizardReset(WizardReset {
            occurred_at: cmd.occurred_at,
        })])
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
