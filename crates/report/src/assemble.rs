//! Report record handed to display and print collaborators.

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;
use serde::Serialize;

use maturity_leads::LeadProfile;
use maturity_scoring::ScoreResult;

/// Immutable display record for the results screen and the printed report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaturityReport {
    pub score: ScoreResult,
    pub lead: LeadProfile,
    pub generated_at: DateTime<Utc>,
    /// Display reference like `DMA-2026-042`: report year plus a random
    /// 0–999 suffix. A cosmetic, not an identifier.
    pub reference: String,
}

/// Assemble the report record.
///
/// `generated_at` is captured once at the analyzing→results transition and
/// passed through unchanged, so the displayed report date stays stable
/// across re-renders. The reference suffix is freshly drawn per call.
pub fn assemble(
    score: ScoreResult,
    lead: LeadProfile,
    generated_at: DateTime<Utc>,
) -> MaturityReport {
    let suffix: u16 = rand::rng().random_range(0..1000);
    MaturityReport {
        reference: format!("DMA-{}-{suffix:03}", generated_at.year()),
        score,
        lead,
        generated_at,
    }
}
