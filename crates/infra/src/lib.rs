//! Infrastructure layer: progress persistence and the session driver.
//!
//! Everything here composes the pure domain crates with the injected
//! progress store. The domain crates perform no IO and log nothing; this
//! crate owns both.

pub mod session;
pub mod store;

mod integration_tests;

pub use session::{
    ANALYSIS_DELAY, AssessmentSession, PendingAction, PendingTransition, QUESTION_ADVANCE_DELAY,
    TransitionToken,
};
pub use store::{InMemoryProgressStore, ProgressStore, SNAPSHOT_KEY, StoreError};
