mod schema;

pub use schema::{EntryConfig, GameFile};

use crate::game::{Entry, GameDefinition};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/listl/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("listl")
}

/// Get the default game file path (~/.config/listl/game.yaml)
pub fn get_game_path() -> PathBuf {
    get_config_dir().join("game.yaml")
}

/// Load the game definition.
///
/// With an explicit `path`, the file must exist and parse. Without one, a
/// missing default file falls back to the built-in planets game so there is
/// always something to play; only a present-but-broken file is an error.
pub fn load_definition(path: Option<PathBuf>) -> Result<GameDefinition> {
    let (game_path, explicit) = match path {
        Some(p) => (p, true),
        None => (get_game_path(), false),
    };

    if !game_path.exists() {
        if explicit {
            anyhow::bail!("Game file not found at {}", game_path.display());
        }
        return Ok(GameDefinition::builtin());
    }

    let content = fs::read_to_string(&game_path)
        .with_context(|| format!("Failed to read game file at {}", game_path.display()))?;

    let file: GameFile = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse game file: invalid YAML in {}", game_path.display()))?;

    Ok(definition_from_file(file))
}

fn definition_from_file(file: GameFile) -> GameDefinition {
    let entries = file
        .entries
        .into_iter()
        .map(|e| Entry {
            label: e.label,
            fact: e.fact,
            points: e.points,
        })
        .collect();

    GameDefinition::new(
        file.title.unwrap_or_else(|| "Custom list".to_string()),
        entries,
    )
}
