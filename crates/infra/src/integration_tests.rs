//! Integration tests for the full assessment pipeline.
//!
//! Tests: UI event → session → wizard → progress store, plus the scoring
//! and report handoff after completion.
//!
//! Verifies:
//! - Progress round-trips through the store and resumes at the right question
//! - Corrupt or unreadable snapshots recover silently to a fresh run
//! - Delayed transitions are cancelled by navigation (reset, jump)
//! - The finished run hands off score, recommendations and report

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;

    use maturity_catalog::{
        AnswerOption, AnswerSet, Category, Question, QuestionCatalog, QuestionId,
    };
    use maturity_leads::LeadProfile;
    use maturity_wizard::{PersistedView, WizardPhase, WizardSnapshot};

    use crate::session::{
        ANALYSIS_DELAY, AssessmentSession, PendingAction, QUESTION_ADVANCE_DELAY,
    };
    use crate::store::{InMemoryProgressStore, ProgressStore, SNAPSHOT_KEY, StoreError};

    fn question(id: &str, category: Category) -> Question {
        Question {
            id: QuestionId::new(id),
            category,
            prompt: format!("prompt {id}"),
            options: (1..=5)
                .map(|score| AnswerOption {
                    label: format!("option {score}"),
                    score,
                })
                .collect(),
        }
    }

    /// Two categories, two questions each: the minimal complete catalog.
    fn test_catalog() -> Arc<QuestionCatalog> {
        Arc::new(QuestionCatalog::new(vec![
            question("q1", Category::Strategy),
            question("q2", Category::Strategy),
            question("q3", Category::Customer),
            question("q4", Category::Customer),
        ]))
    }

    fn valid_lead() -> LeadProfile {
        LeadProfile {
            name: "Alice Smith".to_string(),
            company: "Acme GmbH".to_string(),
            email: "alice@acme.example".to_string(),
            phone: None,
            role: None,
        }
    }

    fn setup() -> (
        AssessmentSession<Arc<InMemoryProgressStore>>,
        Arc<InMemoryProgressStore>,
    ) {
        maturity_observability::init();
        let store = Arc::new(InMemoryProgressStore::new());
        let session = AssessmentSession::resume(Arc::clone(&store), test_catalog());
        (session, store)
    }

    /// Helper: answer the current question, then fire the pending advance
    /// so the session moves on as the UI would after the delay.
    fn answer_and_advance(session: &mut AssessmentSession<Arc<InMemoryProgressStore>>, score: u8) {
        session.answer(score).unwrap();
        if let Some(pending) = session.pending() {
            assert!(session.fire(pending.token));
        }
    }

    #[test]
    fn fresh_store_opens_at_the_intro() {
        let (session, _store) = setup();
        assert_eq!(session.phase(), WizardPhase::Intro);
        assert!(session.wizard().answers().is_empty());
        assert!(session.pending().is_none());
    }

    #[test]
    fn progress_round_trips_through_the_store() {
        let (mut session, store) = setup();
        session.start().unwrap();
        session.submit_lead(valid_lead()).unwrap();
        session.answer(4).unwrap();

        let raw = store.get(SNAPSHOT_KEY).unwrap().expect("snapshot written");
        let snapshot: WizardSnapshot = serde_json::from_str(&raw).unwrap();
        assert_eq!(snapshot.view, PersistedView::Assessment);
        assert_eq!(snapshot.answers.get(&QuestionId::new("q1")), Some(4));
        assert_eq!(snapshot.lead.email, "alice@acme.example");

        let resumed = AssessmentSession::resume(Arc::clone(&store), test_catalog());
        assert_eq!(resumed.phase(), WizardPhase::Answering);
        assert_eq!(resumed.wizard().answers(), session.wizard().answers());
        assert_eq!(resumed.wizard().lead(), session.wizard().lead());
    }

    #[test]
    fn resume_positions_at_the_first_unanswered_question() {
        let store = Arc::new(InMemoryProgressStore::new());
        let mut answers = AnswerSet::new();
        answers.record(QuestionId::new("q1"), 4);
        answers.record(QuestionId::new("q3"), 2);
        let snapshot = WizardSnapshot {
            view: PersistedView::Assessment,
            answers,
            lead: valid_lead(),
            saved_at: Utc::now(),
        };
        store
            .set(SNAPSHOT_KEY, &serde_json::to_string(&snapshot).unwrap())
            .unwrap();

        let session = AssessmentSession::resume(Arc::clone(&store), test_catalog());
        assert_eq!(session.phase(), WizardPhase::Answering);
        assert_eq!(session.wizard().current_index(), 1);
        let q = session.wizard().current_question().expect("current");
        assert_eq!(q.id, QuestionId::new("q2"));
    }

    #[test]
    fn resume_from_the_lead_form_reopens_it() {
        let store = Arc::new(InMemoryProgressStore::new());
        let snapshot = WizardSnapshot {
            view: PersistedView::LeadForm,
            answers: AnswerSet::new(),
            lead: LeadProfile::default(),
            saved_at: Utc::now(),
        };
        store
            .set(SNAPSHOT_KEY, &serde_json::to_string(&snapshot).unwrap())
            .unwrap();

        let session = AssessmentSession::resume(store, test_catalog());
        assert_eq!(session.phase(), WizardPhase::LeadCapture);
    }

    #[test]
    fn corrupt_snapshot_recovers_to_a_fresh_run_and_is_deleted() {
        let store = Arc::new(InMemoryProgressStore::new());
        store.set(SNAPSHOT_KEY, "{\"view\": \"assessm").unwrap();

        let session = AssessmentSession::resume(Arc::clone(&store), test_catalog());
        assert_eq!(session.phase(), WizardPhase::Intro);
        assert!(store.get(SNAPSHOT_KEY).unwrap().is_none());
    }

    #[test]
    fn snapshot_with_an_unexpected_shape_is_also_dropped() {
        let store = Arc::new(InMemoryProgressStore::new());
        store
            .set(SNAPSHOT_KEY, "{\"view\":\"results\",\"answers\":{}}")
            .unwrap();

        let session = AssessmentSession::resume(Arc::clone(&store), test_catalog());
        assert_eq!(session.phase(), WizardPhase::Intro);
        assert!(store.get(SNAPSHOT_KEY).unwrap().is_none());
    }

    /// Store whose every operation fails, standing in for a storage backend
    /// the host has disabled.
    struct FailingStore;

    impl ProgressStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Backend("storage disabled".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Backend("storage disabled".to_string()))
        }

        fn delete(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Backend("storage disabled".to_string()))
        }
    }

    #[test]
    fn store_failures_never_block_the_wizard() {
        let mut session = AssessmentSession::resume(FailingStore, test_catalog());
        assert_eq!(session.phase(), WizardPhase::Intro);

        session.start().unwrap();
        session.submit_lead(valid_lead()).unwrap();
        session.answer(3).unwrap();
        assert_eq!(session.phase(), WizardPhase::Answering);
    }

    #[test]
    fn snapshot_is_written_when_leaving_the_intro() {
        let (mut session, store) = setup();
        assert!(store.get(SNAPSHOT_KEY).unwrap().is_none());

        session.start().unwrap();
        let raw = store.get(SNAPSHOT_KEY).unwrap().expect("snapshot written");
        let snapshot: WizardSnapshot = serde_json::from_str(&raw).unwrap();
        assert_eq!(snapshot.view, PersistedView::LeadForm);
        assert!(snapshot.answers.is_empty());
    }

    #[test]
    fn invalid_lead_leaves_the_lead_form_snapshot_untouched() {
        let (mut session, store) = setup();
        session.start().unwrap();
        let before = store.get(SNAPSHOT_KEY).unwrap();

        let mut lead = valid_lead();
        lead.email = "not-an-email".to_string();
        assert!(session.submit_lead(lead).is_err());

        assert_eq!(session.phase(), WizardPhase::LeadCapture);
        assert_eq!(store.get(SNAPSHOT_KEY).unwrap(), before);
    }

    #[test]
    fn completing_the_assessment_scores_and_reports() {
        let (mut session, store) = setup();
        session.start().unwrap();
        session.submit_lead(valid_lead()).unwrap();
        assert!(session.score().is_none());
        assert!(session.report().is_none());
        assert!(session.recommendations().is_empty());

        for score in [5, 5, 1] {
            answer_and_advance(&mut session, score);
        }
        session.answer(1).unwrap();

        // Full coverage on the last question: snapshot gone, analysis pending.
        assert_eq!(session.phase(), WizardPhase::Analyzing);
        assert!(store.get(SNAPSHOT_KEY).unwrap().is_none());
        let pending = session.pending().expect("reveal pending");
        assert_eq!(pending.action, PendingAction::RevealResults);
        assert_eq!(pending.delay, ANALYSIS_DELAY);

        assert!(session.fire(pending.token));
        assert_eq!(session.phase(), WizardPhase::Results);

        let result = session.score().expect("score available");
        assert_eq!(result.overall_average, 3.0);
        assert_eq!(result.category_average(Category::Strategy), 5.0);
        assert_eq!(result.category_average(Category::Customer), 1.0);
        assert_eq!(result.tier.key, "structured");

        let report = session.report().expect("report available");
        assert_eq!(report.generated_at, session.wizard().completed_at().unwrap());
        assert!(report.reference.starts_with("DMA-"));
        assert_eq!(report.lead.company, "Acme GmbH");

        // One card per category; the table has no gaps.
        let recommendations = session.recommendations();
        assert_eq!(recommendations.len(), Category::ALL.len());
    }

    #[test]
    fn the_report_date_is_stable_across_re_renders() {
        let (mut session, _store) = setup();
        session.start().unwrap();
        session.submit_lead(valid_lead()).unwrap();
        for score in [3, 3, 3] {
            answer_and_advance(&mut session, score);
        }
        session.answer(3).unwrap();
        let pending = session.pending().expect("reveal pending");
        assert!(session.fire(pending.token));

        let first = session.report().expect("report");
        let second = session.report().expect("report");
        assert_eq!(first.generated_at, second.generated_at);
        assert_eq!(first.score, second.score);
    }

    #[test]
    fn answering_schedules_the_advance_to_the_next_question() {
        let (mut session, _store) = setup();
        session.start().unwrap();
        session.submit_lead(valid_lead()).unwrap();

        session.answer(2).unwrap();
        let pending = session.pending().expect("advance pending");
        assert_eq!(pending.action, PendingAction::ShowQuestion { index: 1 });
        assert_eq!(pending.delay, QUESTION_ADVANCE_DELAY);

        assert!(session.fire(pending.token));
        assert_eq!(session.wizard().current_index(), 1);
        assert!(session.pending().is_none());
    }

    #[test]
    fn reset_mid_delay_cancels_the_pending_transition() {
        let (mut session, store) = setup();
        session.start().unwrap();
        session.submit_lead(valid_lead()).unwrap();
        session.answer(4).unwrap();
        let stale = session.pending().expect("advance pending").token;

        session.reset().unwrap();
        assert_eq!(session.phase(), WizardPhase::Intro);
        assert!(session.pending().is_none());
        assert!(store.get(SNAPSHOT_KEY).unwrap().is_none());
        assert!(session.wizard().answers().is_empty());

        // The timer fires after the reset: nothing happens.
        assert!(!session.fire(stale));
        assert_eq!(session.phase(), WizardPhase::Intro);
    }

    #[test]
    fn any_dispatch_invalidates_an_earlier_token() {
        let (mut session, _store) = setup();
        session.start().unwrap();
        session.submit_lead(valid_lead()).unwrap();
        session.answer(4).unwrap();
        let stale = session.pending().expect("advance pending").token;

        // The user navigates back before the delay elapses.
        session.jump(0).unwrap();
        assert!(session.pending().is_none());
        assert!(!session.fire(stale));
        assert_eq!(session.wizard().current_index(), 0);
    }

    #[test]
    fn rejected_commands_leave_state_and_store_alone() {
        let (mut session, store) = setup();
        session.start().unwrap();
        session.submit_lead(valid_lead()).unwrap();
        session.answer(4).unwrap();
        let before = store.get(SNAPSHOT_KEY).unwrap();
        let pending_before = session.pending();

        assert!(session.answer(9).is_err());
        assert!(session.jump(session.wizard().catalog().len()).is_err());

        assert_eq!(store.get(SNAPSHOT_KEY).unwrap(), before);
        assert_eq!(session.pending(), pending_before);
    }
}
