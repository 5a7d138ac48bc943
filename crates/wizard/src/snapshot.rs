//! Persisted wizard progress.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use maturity_catalog::AnswerSet;
use maturity_leads::LeadProfile;

/// The only two views a snapshot may carry. Intro, analyzing and results are
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersistedView {
    LeadForm,
    Assessment,
}

/// Resumable progress record, stored as JSON under one fixed key.
///
/// At most one snapshot exists at a time (overwrite semantics). Field names
/// stay camelCase so snapshots written by earlier clients remain readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardSnapshot {
    pub view: PersistedView,
    pub answers: AnswerSet,
    pub lead: LeadProfile,
    pub saved_at: DateTime<Utc>,
}
