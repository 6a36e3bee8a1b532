use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::game::GameDefinition;
use crate::scoring::ScoreReport;
use crate::session::SessionStats;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a finished round: one annotated line per rank, then the session
/// totals. Printed after the TUI exits so the result survives the restore.
pub fn format_report(
    report: &ScoreReport,
    stats: &SessionStats,
    def: &GameDefinition,
    use_colors: bool,
) -> String {
    let mut lines = Vec::with_capacity(report.per_rank.len() + 2);

    for (rank, entry) in report.per_rank.iter().enumerate() {
        let line = format!(
            "{}. {} ({} - {}) {}/{}",
            rank + 1,
            entry.label,
            entry.correct_label,
            def.fact(rank),
            entry.points_earned,
            entry.max_points
        );
        if use_colors {
            if entry.correct {
                lines.push(line.green().to_string());
            } else {
                lines.push(line.red().to_string());
            }
        } else {
            lines.push(line);
        }
    }

    let totals = format!(
        "Total Score {}/{} | games played: {} | high score: {}",
        stats.cumulative_score,
        def.max_score(),
        stats.games_played,
        stats.high_score
    );
    lines.push(String::new());
    if use_colors {
        lines.push(totals.bold().to_string());
    } else {
        lines.push(totals);
    }

    lines.join("\n")
}

/// Format the scoring rules: each item's points row, rank by rank.
pub fn format_rules(def: &GameDefinition, use_colors: bool) -> String {
    let mut lines = Vec::with_capacity(def.len() + 4);

    if use_colors {
        lines.push(def.title.bold().to_string());
    } else {
        lines.push(def.title.clone());
    }
    lines.push("Points awarded per position (left = placed first):".to_string());
    lines.push(String::new());

    let width = def
        .entries()
        .iter()
        .map(|e| e.label.len())
        .max()
        .unwrap_or(0);

    for entry in def.entries() {
        let row = entry
            .points
            .iter()
            .map(|p| format!("{:>3}", p))
            .collect::<Vec<_>>()
            .join(" ");
        if use_colors {
            lines.push(format!("{:width$}  {}", entry.label.cyan(), row, width = width));
        } else {
            lines.push(format!("{:width$}  {}", entry.label, row, width = width));
        }
    }

    lines.push(String::new());
    lines.push(format!("Maximum score: {}", def.max_score()));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::score;

    #[test]
    fn test_report_lines_show_guess_truth_and_points() {
        let def = GameDefinition::builtin();
        let mut submitted = def.labels();
        submitted.swap(0, 1); // Venus first, Mercury second
        let report = score(&submitted, &def).unwrap();
        let mut stats = SessionStats::default();
        stats.record_round(report.total);

        let text = format_report(&report, &stats, &def, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "1. Venus (Mercury - 57.9 million km) 16/20");
        assert_eq!(lines[1], "2. Mercury (Venus - 108.2 million km) 12/16");
        assert!(lines.last().unwrap().starts_with("Total Score"));
    }

    #[test]
    fn test_totals_line_reports_session_counters() {
        let def = GameDefinition::builtin();
        let report = score(&def.labels(), &def).unwrap();
        let mut stats = SessionStats::default();
        stats.record_round(70);
        stats.record_round(report.total);

        let text = format_report(&report, &stats, &def, false);
        assert!(text.contains("Total Score 170/100"));
        assert!(text.contains("games played: 2"));
        assert!(text.contains("high score: 100"));
    }

    #[test]
    fn test_rules_table_lists_every_item() {
        let def = GameDefinition::builtin();
        let text = format_rules(&def, false);
        for entry in def.entries() {
            assert!(text.contains(&entry.label));
        }
        assert!(text.contains("Maximum score: 100"));
        assert!(text.contains(" 20  12   8   6   4   3   2   0"));
    }
}
