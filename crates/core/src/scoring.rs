//! Scoring module - line-clear points, levels and gravity speed
//!
//! - 1/2/3/4 lines score 100/300/500/800 times the current level.
//! - Level is `lines / 10 + 1`.
//! - Gravity interval is `max(100, 1000 - (level - 1) * 100)` ms.
//! - Hard drops earn 2 points per cell descended.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, HARD_DROP_POINTS_PER_CELL, LINES_PER_LEVEL,
    LINE_SCORES,
};

/// Points for clearing `lines` at once at `level` (1-based).
///
/// Anything outside 1..=4 scores nothing.
pub fn calculate_line_score(lines: u32, level: u32) -> u32 {
    match lines {
        1..=4 => LINE_SCORES[lines as usize].saturating_mul(level),
        _ => 0,
    }
}

/// Level reached after `total_lines` cleared lines.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Level-based gravity interval in milliseconds.
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Points for a hard drop of `cells` rows.
pub fn calculate_drop_score(cells: u32) -> u32 {
    cells.saturating_mul(HARD_DROP_POINTS_PER_CELL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores_level_one() {
        assert_eq!(calculate_line_score(0, 1), 0);
        assert_eq!(calculate_line_score(1, 1), 100);
        assert_eq!(calculate_line_score(2, 1), 300);
        assert_eq!(calculate_line_score(3, 1), 500);
        assert_eq!(calculate_line_score(4, 1), 800);
    }

    #[test]
    fn test_line_scores_scale_with_level() {
        for lines in 1..=4 {
            assert_eq!(
                calculate_line_score(lines, 2),
                2 * calculate_line_score(lines, 1)
            );
        }
        assert_eq!(calculate_line_score(4, 7), 5600);
    }

    #[test]
    fn test_out_of_range_lines() {
        assert_eq!(calculate_line_score(5, 3), 0);
    }

    #[test]
    fn test_level_for_lines() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(25), 3);
    }

    #[test]
    fn test_drop_interval() {
        assert_eq!(get_drop_interval_ms(1), 1000);
        assert_eq!(get_drop_interval_ms(2), 900);
        assert_eq!(get_drop_interval_ms(9), 200);
        assert_eq!(get_drop_interval_ms(10), 100);
        assert_eq!(get_drop_interval_ms(15), 100);
        // Level 0 never occurs; it clamps like level 1.
        assert_eq!(get_drop_interval_ms(0), 1000);
    }

    #[test]
    fn test_drop_score() {
        assert_eq!(calculate_drop_score(0), 0);
        assert_eq!(calculate_drop_score(17), 34);
    }
}
