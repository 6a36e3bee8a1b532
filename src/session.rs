/// Counters that accumulate across rounds within one process. Owned by the
/// shell that runs the rounds; reset only by exiting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub games_played: u32,
    pub high_score: u32,
    pub cumulative_score: u32,
}

impl SessionStats {
    pub fn record_round(&mut self, total: u32) {
        self.games_played += 1;
        self.cumulative_score += total;
        self.high_score = self.high_score.max(total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let stats = SessionStats::default();
        assert_eq!(stats.games_played, 0);
        assert_eq!(stats.high_score, 0);
        assert_eq!(stats.cumulative_score, 0);
    }

    #[test]
    fn test_accumulates_across_rounds() {
        let mut stats = SessionStats::default();
        stats.record_round(60);
        stats.record_round(85);
        stats.record_round(40);

        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.cumulative_score, 185);
        assert_eq!(stats.high_score, 85);
    }

    #[test]
    fn test_high_score_is_a_running_max() {
        let mut stats = SessionStats::default();
        stats.record_round(50);
        stats.record_round(30);
        assert_eq!(stats.high_score, 50);
    }
}
