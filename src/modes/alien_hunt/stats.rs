use crate::record::{RecordStore, ScoreKeeper};

#[derive(Debug, Clone)]
pub struct AlienHuntStats {
    pub rocket_left: u32,
    pub level: u32,
    pub score: ScoreKeeper,
}

impl AlienHuntStats {
    pub fn new(rocket_limit: u32, record: u32) -> Self {
        AlienHuntStats {
            rocket_left: rocket_limit,
            level: 1,
            score: ScoreKeeper::new(record),
        }
    }

    /// Fresh game, with the record re-read from disk
    pub fn reset(&mut self, rocket_limit: u32, store: &RecordStore) {
        *self = AlienHuntStats::new(rocket_limit, store.load());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_with_missing_record() {
        let store = RecordStore::new(std::env::temp_dir().join("star_doom_no_such_dir/record.json"));
        let mut stats = AlienHuntStats::new(3, 500);
        stats.rocket_left = 1;
        stats.level = 4;
        stats.score.add(900);

        stats.reset(3, &store);
        assert_eq!(stats.rocket_left, 3);
        assert_eq!(stats.level, 1);
        assert_eq!(stats.score.score, 0);
        assert_eq!(stats.score.record, 0);
    }
}
