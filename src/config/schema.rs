use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct GameFile {
    pub title: Option<String>,
    /// Entries in correct order, top first.
    pub entries: Vec<EntryConfig>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct EntryConfig {
    pub label: String,
    pub fact: String,
    pub points: Vec<u32>,
}
