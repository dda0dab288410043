//! Frame clock - turns host instants into tick deltas.
//!
//! The host calls [`FrameClock::advance`] once per frame and feeds the result
//! to `GameState::tick`. Re-anchoring on resume discards the paused interval
//! so no time debt builds up.

use std::time::Instant;

/// Largest delta handed out for a single frame.
pub const MAX_FRAME_MS: u32 = 250;

#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
    /// Sub-millisecond remainder carried into the next frame.
    carry_us: u32,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self {
            last: now,
            carry_us: 0,
        }
    }

    /// Reset the baseline to `now`, dropping any elapsed time.
    pub fn reanchor(&mut self, now: Instant) {
        self.last = now;
        self.carry_us = 0;
    }

    /// Whole milliseconds since the previous call, capped at [`MAX_FRAME_MS`].
    pub fn advance(&mut self, now: Instant) -> u32 {
        let elapsed_us = now
            .saturating_duration_since(self.last)
            .as_micros()
            .min(u32::MAX as u128) as u32;
        self.last = now;

        let total_us = elapsed_us.saturating_add(self.carry_us);
        self.carry_us = total_us % 1000;
        let ms = total_us / 1000;
        if ms > MAX_FRAME_MS {
            self.carry_us = 0;
            return MAX_FRAME_MS;
        }
        ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn advance_reports_elapsed_ms() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0);
        assert_eq!(clock.advance(t0 + Duration::from_millis(16)), 16);
        assert_eq!(clock.advance(t0 + Duration::from_millis(40)), 24);
    }

    #[test]
    fn sub_millisecond_remainders_accumulate() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0);
        let step = Duration::from_micros(16_600);
        let mut total = 0;
        for i in 1..=10 {
            total += clock.advance(t0 + step * i);
        }
        assert_eq!(total, 166);
    }

    #[test]
    fn reanchor_discards_paused_time() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0);
        clock.reanchor(t0 + Duration::from_secs(30));
        assert_eq!(clock.advance(t0 + Duration::from_millis(30_016)), 16);
    }

    #[test]
    fn large_gaps_are_capped() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0);
        assert_eq!(clock.advance(t0 + Duration::from_secs(5)), MAX_FRAME_MS);
    }

    #[test]
    fn going_backwards_is_zero() {
        let t0 = Instant::now() + Duration::from_secs(1);
        let mut clock = FrameClock::new(t0);
        assert_eq!(clock.advance(t0 - Duration::from_millis(10)), 0);
    }
}
