/// A single orderable entry: the label the player sees, the fact revealed
/// alongside the correct answer, and the points awarded per rank.
#[derive(Debug, Clone)]
pub struct Entry {
    pub label: String,
    pub fact: String,
    /// points[i] is awarded when this entry is placed at rank i (0-based).
    pub points: Vec<u32>,
}

/// The fixed answer key and points table for one game. Entries are stored in
/// correct order; immutable after load.
#[derive(Debug, Clone)]
pub struct GameDefinition {
    pub title: String,
    entries: Vec<Entry>,
}

impl GameDefinition {
    pub fn new(title: String, entries: Vec<Entry>) -> Self {
        Self { title, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Labels in correct order.
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.label.clone()).collect()
    }

    pub fn correct_label(&self, rank: usize) -> &str {
        &self.entries[rank].label
    }

    pub fn fact(&self, rank: usize) -> &str {
        &self.entries[rank].fact
    }

    /// Correct rank of a label, if it belongs to this game.
    pub fn rank_of(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.label == label)
    }

    /// Points awarded for placing `label` at `rank`. None if the label is
    /// unknown or the rank is out of range for its row.
    pub fn points_at(&self, label: &str, rank: usize) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.label == label)?
            .points
            .get(rank)
            .copied()
    }

    /// Maximum achievable total: each entry placed at its own rank.
    pub fn max_score(&self) -> u32 {
        self.entries
            .iter()
            .enumerate()
            .map(|(rank, e)| e.points.get(rank).copied().unwrap_or(0))
            .sum()
    }

    /// The built-in game: planets ordered by distance from the Sun.
    pub fn builtin() -> Self {
        let rows: [(&str, &str, [u32; 8]); 8] = [
            ("Mercury", "57.9 million km", [20, 12, 8, 6, 4, 3, 2, 0]),
            ("Venus", "108.2 million km", [16, 16, 11, 7, 5, 4, 2, 1]),
            ("Earth", "149.6 million km", [12, 12, 14, 9, 7, 5, 3, 2]),
            ("Mars", "227.9 million km", [10, 10, 11, 12, 8, 6, 4, 4]),
            ("Jupiter", "778.5 million km", [8, 8, 8, 9, 11, 8, 5, 5]),
            ("Saturn", "1,429 million km", [6, 6, 7, 7, 8, 10, 7, 5]),
            ("Uranus", "2,871 million km", [5, 5, 5, 6, 7, 9, 9, 7]),
            ("Neptune", "4,498 million km", [4, 4, 4, 4, 5, 6, 7, 8]),
        ];

        let entries = rows
            .into_iter()
            .map(|(label, fact, points)| Entry {
                label: label.to_string(),
                fact: fact.to_string(),
                points: points.to_vec(),
            })
            .collect();

        Self::new("Planets by distance from the Sun".to_string(), entries)
    }
}
