use crate::game::GameDefinition;
use thiserror::Error;

/// A submitted order that cannot be resolved against the game definition.
/// Rejected up front rather than scored with missing lookups.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScoreError {
    #[error("unknown item '{0}' in submitted order")]
    UnknownItem(String),

    #[error("item '{0}' appears more than once in submitted order")]
    DuplicateItem(String),

    #[error("submitted order has {got} items, expected {expected}")]
    WrongLength { got: usize, expected: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankScore {
    pub label: String,
    pub points_earned: u32,
    /// Points the true item would have earned at this rank.
    pub max_points: u32,
    pub correct_label: String,
    pub correct: bool,
}

#[derive(Debug, Clone)]
pub struct ScoreReport {
    pub total: u32,
    pub per_rank: Vec<RankScore>,
}

/// Grade a submitted order against the definition.
///
/// For rank i the submitted item earns its points-table entry at i. The
/// submitted order must be a permutation of the definition's labels; anything
/// else is a `ScoreError`. Pure and O(N).
pub fn score(user_order: &[String], def: &GameDefinition) -> Result<ScoreReport, ScoreError> {
    if user_order.len() != def.len() {
        return Err(ScoreError::WrongLength {
            got: user_order.len(),
            expected: def.len(),
        });
    }

    let mut seen: Vec<&str> = Vec::with_capacity(user_order.len());
    let mut total = 0;
    let mut per_rank = Vec::with_capacity(user_order.len());

    for (rank, label) in user_order.iter().enumerate() {
        let points_earned = def
            .points_at(label, rank)
            .ok_or_else(|| ScoreError::UnknownItem(label.clone()))?;
        if seen.contains(&label.as_str()) {
            return Err(ScoreError::DuplicateItem(label.clone()));
        }
        seen.push(label);

        let correct_label = def.correct_label(rank).to_string();
        let max_points = def.points_at(&correct_label, rank).unwrap_or(0);
        total += points_earned;
        per_rank.push(RankScore {
            correct: *label == correct_label,
            label: label.clone(),
            points_earned,
            max_points,
            correct_label,
        });
    }

    Ok(ScoreReport { total, per_rank })
}
