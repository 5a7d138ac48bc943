//! Question catalog for the digital maturity assessment.
//!
//! Pure data and lookups: the ordered questionnaire, the collected answers,
//! and the maturity tier table. No IO, no persistence concerns.

pub mod answers;
pub mod builtin;
pub mod question;
pub mod tiers;

pub use answers::AnswerSet;
pub use builtin::default_catalog;
pub use question::{AnswerOption, Category, Question, QuestionCatalog, QuestionId};
pub use tiers::{MATURITY_TIERS, MaturityTier};
