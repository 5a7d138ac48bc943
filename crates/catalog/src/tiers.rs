//! Maturity tier table and classification.

use serde::Serialize;

/// One maturity tier: a closed score range plus display metadata for the
/// results gauge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaturityTier {
    pub key: &'static str,
    pub label: &'static str,
    /// Hex color used by the results gauge and the printed report.
    pub color: &'static str,
    pub min: f64,
    pub max: f64,
}

/// The five tiers, ordered lowest to highest. Adjacent ranges share their
/// boundary value; classification walks the table in order, so a shared
/// boundary belongs to the lower tier.
pub const MATURITY_TIERS: [MaturityTier; 5] = [
    MaturityTier {
        key: "incipient",
        label: "Incipient",
        color: "#d64545",
        min: 1.0,
        max: 1.8,
    },
    MaturityTier {
        key: "emerging",
        label: "Emerging",
        color: "#e8863a",
        min: 1.8,
        max: 2.6,
    },
    MaturityTier {
        key: "structured",
        label: "Structured",
        color: "#e3b53a",
        min: 2.6,
        max: 3.4,
    },
    MaturityTier {
        key: "managed",
        label: "Managed",
        color: "#7fb347",
        min: 3.4,
        max: 4.2,
    },
    MaturityTier {
        key: "optimized",
        label: "Optimized",
        color: "#3a9e5f",
        min: 4.2,
        max: 5.0,
    },
];

impl MaturityTier {
    /// Classify an overall average: first tier whose `[min, max]` contains it.
    ///
    /// Averages below 1.0 (partial answer sets) match no range and fall back
    /// to the lowest tier.
    pub fn classify(overall_average: f64) -> &'static MaturityTier {
        MATURITY_TIERS
            .iter()
            .find(|t| overall_average >= t.min && overall_average <= t.max)
            .unwrap_or(&MATURITY_TIERS[0])
    }
}
