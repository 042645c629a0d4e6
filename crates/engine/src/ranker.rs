//! Ordering of scored candidates.

/// Sort `scored` by descending score and keep the first `limit` entries.
///
/// The sort is stable: entries with equal scores keep their input order,
/// which for the engine is catalog order.
pub fn rank<T>(mut scored: Vec<(T, f32)>, limit: usize) -> Vec<(T, f32)> {
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_descending() {
        let ranked = rank(vec![("low", 1.0), ("high", 3.0), ("mid", 2.0)], 10);
        let names: Vec<&str> = ranked.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let ranked = rank(vec![("first", 5.0), ("second", 5.0), ("top", 9.0), ("third", 5.0)], 10);
        let names: Vec<&str> = ranked.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_rank_truncates() {
        let scored: Vec<(usize, f32)> = (0..25).map(|i| (i, i as f32)).collect();
        let ranked = rank(scored, 10);
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].0, 24);
    }
}
