use crate::game::GameDefinition;
use crate::scoring::ScoreReport;
use crate::session::SessionStats;
use anyhow::{Context, Result};

/// Human-readable share text: the session total followed by one
/// "earned/max" line per rank.
pub fn share_text(report: &ScoreReport, stats: &SessionStats, def: &GameDefinition) -> String {
    let header = format!(
        "Check out my score on today's listl: {}/{}",
        stats.cumulative_score,
        def.max_score()
    );

    let lines = report
        .per_rank
        .iter()
        .enumerate()
        .map(|(i, rank)| format!("{}. {}/{}", i + 1, rank.points_earned, rank.max_points))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n\n{}", header, lines)
}

/// Hand the share text to the system clipboard. Fails with a plain error when
/// no clipboard is available (e.g. headless session) or the copy is rejected.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().context("Share is not available: no system clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to share score to the clipboard")?;
    Ok(())
}
