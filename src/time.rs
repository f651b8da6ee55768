//! Fixed-timestep clock.
//!
//! `draw_web()` fires at roughly 60fps with a variable delta. `TickClock`
//! turns wall-clock milliseconds into whole ticks so timers such as the reveal
//! delay count ticks instead of reading the clock, which keeps them testable.

pub struct TickClock {
    ms_per_tick: f64,
    /// Milliseconds not yet consumed as ticks.
    accumulator: f64,
    last_timestamp: Option<f64>,
}

/// A backgrounded tab can report a huge delta; never advance more than this per frame.
const MAX_FRAME_MS: f64 = 500.0;

impl TickClock {
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec as f64,
            accumulator: 0.0,
            last_timestamp: None,
        }
    }

    /// Feed the current timestamp (`performance.now()`); returns the ticks elapsed
    /// since the previous call. The first call only records the timestamp.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let delta = self
            .last_timestamp
            .map_or(0.0, |prev| (now_ms - prev).clamp(0.0, MAX_FRAME_MS));
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_zero() {
        let mut clock = TickClock::new(10);
        assert_eq!(clock.update(12_345.0), 0);
    }

    #[test]
    fn whole_ticks_and_remainder() {
        let mut clock = TickClock::new(10);
        clock.update(0.0);
        assert_eq!(clock.update(250.0), 2);
        // 50ms carried + 60ms = 110ms
        assert_eq!(clock.update(310.0), 1);
    }

    #[test]
    fn one_second_at_60fps_is_ten_ticks() {
        let mut clock = TickClock::new(10);
        clock.update(0.0);
        let total: u32 = (1..=60).map(|i| clock.update(i as f64 * 1000.0 / 60.0)).sum();
        assert!((9..=10).contains(&total), "got {}", total);
    }

    #[test]
    fn backgrounded_tab_is_clamped() {
        let mut clock = TickClock::new(10);
        clock.update(0.0);
        assert_eq!(clock.update(60_000.0), 5);
    }

    #[test]
    fn time_going_backwards_yields_nothing() {
        let mut clock = TickClock::new(10);
        clock.update(1_000.0);
        assert_eq!(clock.update(900.0), 0);
        assert_eq!(clock.update(1_000.0), 1);
    }

    #[test]
    fn drives_reveal_delay() {
        use crate::views::recommender::state::{REVEAL_DELAY_TICKS, TICKS_PER_SEC};

        let mut clock = TickClock::new(TICKS_PER_SEC);
        clock.update(0.0);
        let mut elapsed = 0;
        let mut frames = 0;
        while elapsed < REVEAL_DELAY_TICKS {
            frames += 1;
            elapsed += clock.update(frames as f64 * 16.0);
        }
        // 1 second at 16ms frames
        assert!((62..=63).contains(&frames), "took {} frames", frames);
    }
}
