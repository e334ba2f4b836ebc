//! Scoring module - points for cleared regions
//!
//! A match of `n` cells scores `(n - 1)²`, so large regions are worth far more
//! than the same cells cleared in small pieces. The grid reports "no match" as
//! a count of `1`, which scores zero without a special case.

/// Points for a match that removed `cleared` cells.
pub fn match_score(cleared: u32) -> u32 {
    let n = cleared.saturating_sub(1);
    n.saturating_mul(n)
}

/// Add match points to a running score.
pub fn add_match(score: u32, cleared: u32) -> u32 {
    score.saturating_add(match_score(cleared))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_scores() {
        assert_eq!(match_score(2), 1);
        assert_eq!(match_score(3), 4);
        assert_eq!(match_score(5), 16);
        assert_eq!(match_score(11), 100);
    }

    #[test]
    fn test_no_match_scores_nothing() {
        assert_eq!(match_score(1), 0);
        assert_eq!(match_score(0), 0);
    }

    #[test]
    fn test_score_saturates() {
        assert_eq!(add_match(u32::MAX - 1, 3), u32::MAX);
        assert_eq!(match_score(u32::MAX), u32::MAX);
    }
}
