//! "Improve if better" rules for the two personal-best fields.

/// A stored score of `None` counts as 0.
pub fn is_better_score(stored: Option<i32>, candidate: i32) -> bool {
    candidate > stored.unwrap_or(0)
}

/// A stored time of `None` counts as +inf, so any finite candidate wins.
pub fn is_better_time(stored: Option<f64>, candidate: f64) -> bool {
    candidate < stored.unwrap_or(f64::INFINITY)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_must_be_strictly_higher() {
        assert!(is_better_score(Some(10), 11));
        assert!(!is_better_score(Some(10), 10));
        assert!(!is_better_score(Some(10), 3));
    }

    #[test]
    fn missing_score_is_a_zero_baseline() {
        assert!(is_better_score(None, 1));
        assert!(!is_better_score(None, 0));
        assert!(!is_better_score(None, -5));
    }

    #[test]
    fn time_must_be_strictly_lower() {
        assert!(is_better_time(Some(12.5), 12.4));
        assert!(!is_better_time(Some(12.5), 12.5));
        assert!(!is_better_time(Some(12.5), 20.0));
    }

    #[test]
    fn missing_time_accepts_any_finite_candidate() {
        assert!(is_better_time(None, 9_999_999.0));
        assert!(is_better_time(None, -1.0));
        assert!(!is_better_time(None, f64::NAN));
    }

    #[test]
    fn folding_updates_yields_max_score_and_min_time() {
        let scores = [5, 50, 30, 50, 51, -2];
        let stored = scores.iter().fold(None, |stored, &s| {
            if is_better_score(stored, s) { Some(s) } else { stored }
        });
        assert_eq!(stored, Some(51));

        let times = [30.0, 12.3, 15.0, 12.3, 11.9];
        let stored = times.iter().fold(None, |stored, &t| {
            if is_better_time(stored, t) { Some(t) } else { stored }
        });
        assert_eq!(stored, Some(11.9));
    }
}
