use crate::game::GameDefinition;

/// Outcome of startup validation. Errors make the definition unplayable;
/// advisories flag a questionable points table but do not block play.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub advisories: Vec<String>,
}

/// Validate a game definition at startup.
/// Returns all problems at once (not just the first).
pub fn validate_definition(def: &GameDefinition) -> Result<ValidationReport, ValidationReport> {
    let mut report = ValidationReport::default();
    let n = def.len();

    if n < 2 {
        report
            .errors
            .push(format!("game: needs at least 2 entries, found {}", n));
    }

    for (i, entry) in def.entries().iter().enumerate() {
        if entry.label.trim().is_empty() {
            report.errors.push(format!("game.entries[{}]: empty label", i));
        }

        if def
            .entries()
            .iter()
            .skip(i + 1)
            .any(|other| other.label == entry.label)
        {
            report
                .errors
                .push(format!("game.entries[{}]: duplicate label '{}'", i, entry.label));
        }

        if entry.points.len() != n {
            report.errors.push(format!(
                "game.entries[{}] ('{}'): points row has {} values, expected {}",
                i,
                entry.label,
                entry.points.len(),
                n
            ));
            continue;
        }

        // Own-rank entry should be the best in the row. Designer-supplied
        // invariant, so a violation is advisory only.
        let own = entry.points[i];
        if entry.points.iter().any(|&p| p > own) {
            report.advisories.push(format!(
                "game.entries[{}] ('{}'): correct placement ({} pts) is not the row maximum",
                i, entry.label, own
            ));
        }
    }

    if report.errors.is_empty() {
        Ok(report)
    } else {
        Err(report)
    }
}
