use std::time::{Duration, Instant};

/// Converts wall time into discrete simulation ticks at
/// `base_interval / multiplier`, catching up on missed ticks in a
/// `while control.can_tick()` loop. Multiplier 0 is an explicit pause:
/// no ticks accrue and the current tick fraction is frozen.
pub struct TickControl {
    base_interval: Duration,
    multiplier: f64,
    last_update: Instant,

    // fraction of a tick that has elapsed but not yet been accounted for
    remainder: f64,

    // ticks that still need to run to catch up with the current time
    missed_updates: Option<usize>,

    // independent one-second timer for the elapsed-time counter
    last_second: Instant,
}

impl TickControl {
    pub fn new(base_interval: Duration, multiplier: f64) -> Self {
        let now = Instant::now();
        Self {
            base_interval,
            multiplier,
            last_update: now,
            remainder: 0.,
            missed_updates: None,
            last_second: now,
        }
    }

    fn tick_duration(&self) -> Option<Duration> {
        if self.multiplier <= 0. {
            None
        } else {
            Some(self.base_interval.div_f64(self.multiplier))
        }
    }

    // fraction of the current tick that has elapsed
    fn progress(&self) -> f64 {
        match self.tick_duration() {
            Some(duration) => {
                self.last_update.elapsed().as_secs_f64() / duration.as_secs_f64() + self.remainder
            }
            // paused, frozen at the last known fraction
            None => self.remainder,
        }
    }

    pub fn set_multiplier(&mut self, multiplier: f64) {
        if (self.multiplier - multiplier).abs() < f64::EPSILON {
            return;
        }

        // carry the current tick fraction across the rate change so
        // resuming doesn't fire a burst of catch-up ticks
        self.remainder = self.progress();
        self.last_update = Instant::now();
        self.missed_updates = None;
        self.multiplier = multiplier;
    }

    pub fn reset(&mut self) {
        let now = Instant::now();
        self.last_update = now;
        self.last_second = now;
        self.remainder = 0.;
        self.missed_updates = None;
    }

    // repeatedly called as a while loop condition
    pub fn can_tick(&mut self) -> bool {
        let tick_duration = match self.tick_duration() {
            Some(duration) => duration,
            None => return false,
        };

        match &mut self.missed_updates {
            Some(0) => {
                self.missed_updates = None;
                false
            }
            Some(n) => {
                *n -= 1;
                true
            }
            None => {
                // how many ticks should have occurred since the last call
                let ticks = self.last_update.elapsed().as_secs_f64()
                    / tick_duration.as_secs_f64()
                    + self.remainder;
                let missed_updates = ticks as usize;

                if missed_updates > 0 {
                    self.remainder = ticks % 1.;
                    self.last_update = Instant::now();
                    self.missed_updates = Some(missed_updates - 1);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Whole seconds elapsed since the last poll
    pub fn elapsed_seconds(&mut self) -> u64 {
        let secs = self.last_second.elapsed().as_secs();
        if secs > 0 {
            self.last_second += Duration::from_secs(secs);
        }
        secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    fn drain(control: &mut TickControl) -> usize {
        let mut ticks = 0;
        while control.can_tick() {
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn catches_up_on_missed_ticks() {
        let mut control = TickControl::new(Duration::from_millis(10), 1.);
        sleep(Duration::from_millis(35));
        let ticks = drain(&mut control);
        assert!((3..=12).contains(&ticks), "expected ~3 ticks, got {ticks}");
    }

    #[test]
    fn paused_control_never_ticks() {
        let mut control = TickControl::new(Duration::from_millis(5), 0.);
        sleep(Duration::from_millis(30));
        assert_eq!(drain(&mut control), 0);
    }

    #[test]
    fn resuming_does_not_burst() {
        let mut control = TickControl::new(Duration::from_millis(5), 0.);
        sleep(Duration::from_millis(50));
        control.set_multiplier(1.);
        // no time has passed at the new rate yet
        assert_eq!(drain(&mut control), 0);
    }

    #[test]
    fn multiplier_scales_the_interval() {
        let mut control = TickControl::new(Duration::from_millis(40), 4.);
        sleep(Duration::from_millis(35));
        let ticks = drain(&mut control);
        assert!((3..=12).contains(&ticks), "expected ~3 ticks, got {ticks}");
    }

    #[test]
    fn seconds_accumulate_independently() {
        let mut control = TickControl::new(Duration::from_millis(10), 0.);
        assert_eq!(control.elapsed_seconds(), 0);
        sleep(Duration::from_millis(1050));
        assert_eq!(control.elapsed_seconds(), 1);
        assert_eq!(control.elapsed_seconds(), 0);
    }
}
