//! Questionnaire data model: categories, questions, the ordered catalog.

use serde::{Deserialize, Serialize};

use crate::answers::AnswerSet;

/// Assessment dimension. Declaration order is the fixed rendering/report
/// order and the key order of per-category score maps.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Strategy,
    Customer,
    Operations,
    Technology,
    People,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Strategy,
        Category::Customer,
        Category::Operations,
        Category::Technology,
        Category::People,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Strategy => "strategy",
            Category::Customer => "customer",
            Category::Operations => "operations",
            Category::Technology => "technology",
            Category::People => "people",
        }
    }

    /// Human-readable name used on the results screen and the printed report.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Strategy => "Digital strategy",
            Category::Customer => "Customer experience",
            Category::Operations => "Operations & processes",
            Category::Technology => "Technology & data",
            Category::People => "People & culture",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Question identifier, unique within a catalog.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One selectable answer with its pre-assigned maturity score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    /// Score in [1, 5], fixed by the question author.
    pub score: u8,
}

/// One catalog question: prompt plus 3–5 scored answer options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub category: Category,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Whether `score` matches one of this question's answer options.
    pub fn accepts_score(&self, score: u8) -> bool {
        self.options.iter().any(|o| o.score == score)
    }
}

/// Ordered, immutable questionnaire. Catalog order is navigation order.
///
/// Supplied by an external data source at startup; well-formedness is the
/// supplier's responsibility, lookups here only bounds-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Index of the first question without an answer, in catalog order.
    pub fn first_unanswered(&self, answers: &AnswerSet) -> Option<usize> {
        self.questions.iter().position(|q| !answers.contains(&q.id))
    }

    /// Index of the next unanswered question strictly after `index`, wrapping
    /// around to the start of the catalog. `None` when every question is
    /// answered (or the catalog is empty).
    pub fn next_unanswered_after(&self, index: usize, answers: &AnswerSet) -> Option<usize> {
        let len = self.questions.len();
        if len == 0 {
            return None;
        }
        let start = if index < len { index } else { 0 };
        (1..=len)
            .map(|step| (start + step) % len)
            .find(|&i| !answers.contains(&self.questions[i].id))
    }

    /// Whether `answers` covers every catalog question. Answers for ids not
    /// in the catalog are ignored.
    pub fn is_complete(&self, answers: &AnswerSet) -> bool {
        self.questions.iter().all(|q| answers.contains(&q.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_option_question(id: &str, category: Category) -> Question {
        Question {
            id: QuestionId::new(id),
            category,
            prompt: format!("prompt for {id}"),
            options: vec![
                AnswerOption {
                    label: "low".to_string(),
                    score: 1,
                },
                AnswerOption {
                    label: "high".to_string(),
                    score: 5,
                },
            ],
        }
    }

    fn four_question_catalog() -> QuestionCatalog {
        QuestionCatalog::new(vec![
            two_option_question("q1", Category::Strategy),
            two_option_question("q2", Category::Strategy),
            two_option_question("q3", Category::Customer),
            two_option_question("q4", Category::Customer),
        ])
    }

    #[test]
    fn first_unanswered_skips_answered_questions() {
        let catalog = four_question_catalog();
        let mut answers = AnswerSet::new();
        answers.record(QuestionId::new("q1"), 5);
        answers.record(QuestionId::new("q3"), 1);

        assert_eq!(catalog.first_unanswered(&answers), Some(1));
    }

    #[test]
    fn first_unanswered_is_none_when_all_answered() {
        let catalog = four_question_catalog();
        let mut answers = AnswerSet::new();
        for q in catalog.iter() {
            answers.record(q.id.clone(), 1);
        }

        assert_eq!(catalog.first_unanswered(&answers), None);
        assert!(catalog.is_complete(&answers));
    }

    #[test]
    fn next_unanswered_wraps_around_the_catalog() {
        let catalog = four_question_catalog();
        let mut answers = AnswerSet::new();
        answers.record(QuestionId::new("q3"), 1);
        answers.record(QuestionId::new("q4"), 1);

        // From the last index the search wraps back to the front.
        assert_eq!(catalog.next_unanswered_after(3, &answers), Some(0));
        assert_eq!(catalog.next_unanswered_after(0, &answers), Some(1));
    }

    #[test]
    fn next_unanswered_is_none_when_complete() {
        let catalog = four_question_catalog();
        let mut answers = AnswerSet::new();
        for q in catalog.iter() {
            answers.record(q.id.clone(), 3);
        }

        assert_eq!(catalog.next_unanswered_after(0, &answers), None);
    }

    #[test]
    fn next_unanswered_on_empty_catalog_is_none() {
        let catalog = QuestionCatalog::new(Vec::new());
        assert_eq!(catalog.next_unanswered_after(0, &AnswerSet::new()), None);
    }

    #[test]
    fn completeness_ignores_answers_for_unknown_questions() {
        let catalog = four_question_catalog();
        let mut answers = AnswerSet::new();
        answers.record(QuestionId::new("stale-id"), 4);
        for q in catalog.iter() {
            answers.record(q.id.clone(), 2);
        }

        assert!(catalog.is_complete(&answers));
    }

    #[test]
    fn question_accepts_only_its_option_scores() {
        let q = two_option_question("q1", Category::People);
        assert!(q.accepts_score(1));
        assert!(q.accepts_score(5));
        assert!(!q.accepts_score(3));
    }

    #[test]
    fn categories_serialize_lowercase() {
        let json = serde_json::to_string(&Category::Technology).unwrap();
        assert_eq!(json, "\"technology\"");

        let back: Category = serde_json::from_str("\"people\"").unwrap();
        assert_eq!(back, Category::People);
    }

    #[test]
    fn question_ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&QuestionId::new("q07")).unwrap();
        assert_eq!(json, "\"q07\"");
    }
}
