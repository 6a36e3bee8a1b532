pub mod engine;
pub mod validation;

pub use engine::{score, RankScore, ScoreError, ScoreReport};
pub use validation::{validate_definition, ValidationReport};
