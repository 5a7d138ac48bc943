//! Scoring engine: answer set + catalog in, score result out.

use std::collections::BTreeMap;

use serde::Serialize;

use maturity_catalog::{AnswerSet, Category, MaturityTier, QuestionCatalog};

/// Per-category running total: sum of answered scores and how many questions
/// in that category were answered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub total: u32,
    pub count: u32,
}

impl CategoryScore {
    /// Mean over answered questions only. 0.0 when nothing was answered.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            f64::from(self.total) / f64::from(self.count)
        }
    }
}

/// Outcome of scoring one answer set against one catalog.
///
/// Derived data: recomputed on demand from the raw answers, never persisted,
/// so catalog or tier-table changes always re-flow into fresh results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub overall_average: f64,
    /// Keyed in [`Category::ALL`] order; every category is present.
    pub category_averages: BTreeMap<Category, CategoryScore>,
    pub tier: &'static MaturityTier,
}

impl ScoreResult {
    /// Mean for one category (0.0 when nothing was answered there).
    pub fn category_average(&self, category: Category) -> f64 {
        self.category_averages
            .get(&category)
            .map(CategoryScore::average)
            .unwrap_or(0.0)
    }
}

/// Score `answers` against `catalog`.
///
/// The overall average divides by the **full catalog size** while each
/// category average divides by answered questions only. The asymmetry is
/// observable behavior and kept exactly: completion gating means the two
/// agree in practice, and a partial answer set yields a deliberately
/// depressed overall score. Answers for ids not in the catalog are ignored.
pub fn score(answers: &AnswerSet, catalog: &QuestionCatalog) -> ScoreResult {
    let mut category_averages: BTreeMap<Category, CategoryScore> = Category::ALL
        .into_iter()
        .map(|c| (c, CategoryScore::default()))
        .collect();

    let mut sum: u32 = 0;
    for question in catalog.iter() {
        let Some(chosen) = answers.get(&question.id) else {
            continue;
        };
        sum += u32::from(chosen);
        let entry = category_averages.entry(question.category).or_default();
        entry.total += u32::from(chosen);
        entry.count += 1;
    }

    let overall_average = if catalog.is_empty() {
        0.0
    } else {
        f64::from(sum) / catalog.len() as f64
    };

    ScoreResult {
        overall_average,
        category_averages,
        tier: MaturityTier::classify(overall_average),
    }
}
