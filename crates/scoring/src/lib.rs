//! `maturity-scoring` — scoring engine and recommendation mapper.
//!
//! Pure domain logic: no IO, no randomness, identical inputs always produce
//! identical results.

pub mod engine;
pub mod recommend;

pub use engine::{CategoryScore, ScoreResult, score};
pub use recommend::{
    RECOMMENDATIONS, Recommendation, RecommendationLevel, recommend, recommendation_for,
    recommended_actions,
};
