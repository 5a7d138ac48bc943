//! Assessment session driver.
//!
//! The single-threaded orchestration layer between the embedding UI and the
//! wizard aggregate: UI event in → command dispatched → events applied →
//! snapshot written or deleted. This module owns every side effect the
//! domain crates refuse to perform (persistence, logging, delayed
//! transitions); the aggregate itself stays pure.
//!
//! ## Delayed transitions
//!
//! The product shows the next question after a short pause and holds an
//! "analyzing" screen before the results. Those pauses are UX, not
//! computation, so the session never sleeps: it exposes the pending
//! transition as data (`pending()`) and the embedder calls `fire(token)`
//! once the delay has elapsed. Any command dispatched in between replaces
//! the pending transition and invalidates its token, so a reset mid-delay
//! can never fire a stale transition.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, warn};

use maturity_catalog::QuestionCatalog;
use maturity_core::{Aggregate, AssessmentId, DomainResult, Event};
use maturity_leads::LeadProfile;
use maturity_report::MaturityReport;
use maturity_scoring::{Recommendation, ScoreResult, recommended_actions};
use maturity_wizard::{
    AdvanceToQuestion, AnswerQuestion, JumpToQuestion, PresentResults, ResetWizard,
    StartAssessment, SubmitLead, Wizard, WizardCommand, WizardEvent, WizardPhase, WizardSnapshot,
};

use crate::store::{ProgressStore, SNAPSHOT_KEY};

/// Pause before the next question is shown after an answer.
pub const QUESTION_ADVANCE_DELAY: Duration = Duration::from_millis(400);

/// How long the analyzing screen is held before the results appear.
pub const ANALYSIS_DELAY: Duration = Duration::from_millis(2600);

/// What a pending transition will do once its delay elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// Move the wizard to the question at `index`.
    ShowQuestion { index: usize },
    /// Leave the analyzing screen and present the results.
    RevealResults,
}

/// Opaque handle tying a `fire` call to the dispatch that scheduled it.
/// Stale tokens are ignored, which is what makes the delays cancellable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionToken(u64);

/// A transition waiting for its UI delay to elapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransition {
    pub action: PendingAction,
    pub delay: Duration,
    pub token: TransitionToken,
}

/// One respondent's walk through the assessment.
///
/// Holds the wizard aggregate plus the injected progress store, and keeps
/// the two in sync: every event that changes resumable progress writes (or
/// deletes) the snapshot under [`SNAPSHOT_KEY`]. Store failures are logged
/// and swallowed; persistence is best-effort and the wizard stays usable.
#[derive(Debug)]
pub struct AssessmentSession<S> {
    store: S,
    wizard: Wizard,
    pending: Option<PendingTransition>,
    next_token: u64,
}

impl<S: ProgressStore> AssessmentSession<S> {
    /// Open a session, resuming persisted progress when any exists.
    ///
    /// Never fails. A missing key starts a fresh run at the intro; a corrupt
    /// or unreadable snapshot is deleted and also starts a fresh run; a
    /// store read failure is treated as "no snapshot".
    pub fn resume(store: S, catalog: Arc<QuestionCatalog>) -> Self {
        let id = AssessmentId::new();
        let wizard = match store.get(SNAPSHOT_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<WizardSnapshot>(&raw) {
                Ok(snapshot) => {
                    debug!(
                        assessment_id = %id,
                        view = ?snapshot.view,
                        answered = snapshot.answers.len(),
                        "resuming from persisted progress"
                    );
                    Wizard::from_snapshot(id, catalog, snapshot)
                }
                Err(error) => {
                    warn!(%error, "dropping unreadable progress snapshot");
                    if let Err(error) = store.delete(SNAPSHOT_KEY) {
                        warn!(%error, "failed to delete unreadable snapshot");
                    }
                    Wizard::new(id, catalog)
                }
            },
            Ok(None) => Wizard::new(id, catalog),
            Err(error) => {
                warn!(%error, "progress store read failed; starting fresh");
                Wizard::new(id, catalog)
            }
        };

        Self {
            store,
            wizard,
            pending: None,
            next_token: 0,
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn phase(&self) -> WizardPhase {
        self.wizard.phase()
    }

    /// The transition currently waiting for its UI delay, if any.
    pub fn pending(&self) -> Option<PendingTransition> {
        self.pending
    }

    /// Leave the intro screen and open the lead form.
    pub fn start(&mut self) -> DomainResult<()> {
        self.dispatch(WizardCommand::StartAssessment(StartAssessment {
            occurred_at: Utc::now(),
        }))
    }

    /// Submit the lead form. An invalid profile is rejected without any
    /// state change or snapshot write; the UI surfaces the error inline.
    pub fn submit_lead(&mut self, lead: LeadProfile) -> DomainResult<()> {
        self.dispatch(WizardCommand::SubmitLead(SubmitLead {
            lead,
            occurred_at: Utc::now(),
        }))
    }

    /// Answer the current question with one of its option scores.
    ///
    /// Schedules the advance to the next unanswered question, or starts the
    /// analysis when this was the last question and the catalog is now
    /// fully covered.
    pub fn answer(&mut self, score: u8) -> DomainResult<()> {
        self.dispatch(WizardCommand::AnswerQuestion(AnswerQuestion {
            score,
            occurred_at: Utc::now(),
        }))
    }

    /// Jump straight to a previously visited or answered question.
    pub fn jump(&mut self, index: usize) -> DomainResult<()> {
        self.dispatch(WizardCommand::JumpToQuestion(JumpToQuestion {
            index,
            occurred_at: Utc::now(),
        }))
    }

    /// Abandon the run: back to the intro, progress erased. The caller has
    /// already confirmed with the user; this is irreversible.
    pub fn reset(&mut self) -> DomainResult<()> {
        self.dispatch(WizardCommand::ResetWizard(ResetWizard {
            occurred_at: Utc::now(),
        }))
    }

    /// Fire a pending transition once its delay has elapsed.
    ///
    /// Returns `false` for a stale token: any command dispatched after the
    /// transition was scheduled (including a reset) invalidates it, so a
    /// timer racing a navigation can never act on stale state.
    pub fn fire(&mut self, token: TransitionToken) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if pending.token != token {
            debug!(?token, "ignoring stale transition token");
            return false;
        }
        self.pending = None;

        let command = match pending.action {
            PendingAction::ShowQuestion { index } => {
                WizardCommand::AdvanceToQuestion(AdvanceToQuestion {
                    index,
                    occurred_at: Utc::now(),
                })
            }
            PendingAction::RevealResults => WizardCommand::PresentResults(PresentResults {
                occurred_at: Utc::now(),
            }),
        };
        self.dispatch(command).is_ok()
    }

    /// The score for the finished run, recomputed from the raw answers on
    /// every call. `None` before the results phase.
    pub fn score(&self) -> Option<ScoreResult> {
        if self.wizard.phase() != WizardPhase::Results {
            return None;
        }
        Some(maturity_scoring::score(
            self.wizard.answers(),
            self.wizard.catalog(),
        ))
    }

    /// Recommendation cards for the finished run, one per category with a
    /// table entry. Empty before the results phase.
    pub fn recommendations(&self) -> Vec<&'static Recommendation> {
        self.score()
            .map(|result| recommended_actions(&result))
            .unwrap_or_default()
    }

    /// Assemble the display report for the finished run. The timestamp is
    /// the one captured when the results became ready, so the report date
    /// stays stable across re-renders.
    pub fn report(&self) -> Option<MaturityReport> {
        let result = self.score()?;
        let generated_at = self.wizard.completed_at()?;
        Some(maturity_report::assemble(
            result,
            self.wizard.lead().clone(),
            generated_at,
        ))
    }

    /// Run one command through the wizard, then apply events and their
    /// persistence side effects in order. Every successful dispatch cancels
    /// whatever transition was pending.
    fn dispatch(&mut self, command: WizardCommand) -> DomainResult<()> {
        let events = match self.wizard.handle(&command) {
            Ok(events) => events,
            Err(error) => {
                debug!(%error, ?command, "wizard command rejected");
                return Err(error);
            }
        };

        self.pending = None;
        for event in &events {
            self.wizard.apply(event);
            self.persist_for(event);
        }
        self.schedule_after(&events);
        Ok(())
    }

    /// Snapshot side effect for one applied event. Progress is written
    /// whenever the resumable state changed and deleted the moment the run
    /// stops being resumable.
    fn persist_for(&self, event: &WizardEvent) {
        match event {
            WizardEvent::AssessmentStarted(_)
            | WizardEvent::LeadCaptured(_)
            | WizardEvent::AnswerRecorded(_) => self.write_snapshot(event),
            WizardEvent::AnalysisStarted(_) | WizardEvent::WizardReset(_) => {
                if let Err(error) = self.store.delete(SNAPSHOT_KEY) {
                    warn!(%error, "failed to delete progress snapshot");
                }
            }
            WizardEvent::QuestionAdvanced(_)
            | WizardEvent::QuestionJumped(_)
            | WizardEvent::ResultsReady(_) => {}
        }
    }

    fn write_snapshot(&self, event: &WizardEvent) {
        let Some(snapshot) = self.wizard.snapshot(event.occurred_at()) else {
            return;
        };
        let raw = match serde_json::to_string(&snapshot) {
            Ok(raw) => raw,
            Err(error) => {
                warn!(%error, "failed to serialize progress snapshot");
                return;
            }
        };
        if let Err(error) = self.store.set(SNAPSHOT_KEY, &raw) {
            warn!(%error, "failed to write progress snapshot");
        }
    }

    /// Schedule the delayed transition implied by the applied batch, if any.
    fn schedule_after(&mut self, events: &[WizardEvent]) {
        let answered = events
            .iter()
            .any(|e| matches!(e, WizardEvent::AnswerRecorded(_)));

        match self.wizard.phase() {
            WizardPhase::Analyzing => {
                self.schedule(PendingAction::RevealResults, ANALYSIS_DELAY);
            }
            WizardPhase::Answering if answered => {
                let next = self
                    .wizard
                    .catalog()
                    .next_unanswered_after(self.wizard.current_index(), self.wizard.answers());
                if let Some(index) = next {
                    self.schedule(PendingAction::ShowQuestion { index }, QUESTION_ADVANCE_DELAY);
                }
            }
            _ => {}
        }
    }

    fn schedule(&mut self, action: PendingAction, delay: Duration) {
        self.next_token += 1;
        self.pending = Some(PendingTransition {
            action,
            delay,
            token: TransitionToken(self.next_token),
        });
    }
}
