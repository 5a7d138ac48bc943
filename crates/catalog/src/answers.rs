//! Collected answers, keyed by question id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::question::QuestionId;

/// Chosen scores keyed by question id. One entry per question; re-answering
/// overwrites the previous selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<QuestionId, u8>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, id: QuestionId, score: u8) {
        self.0.insert(id, score);
    }

    pub fn get(&self, id: &QuestionId) -> Option<u8> {
        self.0.get(id).copied()
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, u8)> {
        self.0.iter().map(|(id, score)| (id, *score))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
