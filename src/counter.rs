use std::collections::BTreeMap;
use std::time::Duration;

/// Interval between two animation steps (~60Hz).
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Intermediate value, more ticks will follow.
    Progress(u32),
    /// Final value, the animator is finished.
    Done(u32),
    /// The animator was already finished or cancelled.
    Stopped,
}

/// Interpolates a displayed integer from 0 to `target` in fixed-size steps.
///
/// The accumulator may run past the target on the last step, but the
/// published value never does: the final published value is always exactly
/// `target`.
#[derive(Debug, Clone)]
pub struct CounterAnimator {
    accumulated: f64,
    target: u32,
    increment: f64,
    value: u32,
    finished: bool,
}

impl CounterAnimator {
    pub fn new(target: u32, duration: Duration) -> Self {
        let steps = duration.as_millis() as f64 / TICK_INTERVAL.as_millis() as f64;
        // zero duration jumps straight to the target
        let finished = target == 0 || steps <= 0.0;
        let increment = if finished {
            0.0
        } else {
            f64::from(target) / steps
        };
        Self {
            accumulated: 0.0,
            target,
            increment,
            value: if finished { target } else { 0 },
            finished,
        }
    }

    /// Currently published value.
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn tick(&mut self) -> Tick {
        if self.finished {
            return Tick::Stopped;
        }
        self.accumulated += self.increment;
        if self.accumulated >= f64::from(self.target) {
            self.value = self.target;
            self.finished = true;
            Tick::Done(self.value)
        } else {
            // floor can't go backwards since the accumulator only grows
            self.value = (self.accumulated.floor() as u32).max(self.value);
            Tick::Progress(self.value)
        }
    }

    /// Stops the animation where it is. Later ticks publish nothing.
    pub fn cancel(&mut self) {
        self.finished = true;
    }
}

/// Current values of every animated metric, keyed by metric name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterState {
    values: BTreeMap<String, u32>,
}

impl CounterState {
    pub fn new<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            values: keys.into_iter().map(|k| (k.to_string(), 0)).collect(),
        }
    }

    pub fn get(&self, key: &str) -> u32 {
        self.values.get(key).copied().unwrap_or_default()
    }

    /// Records a published value. Values never move backwards.
    pub fn publish(&mut self, key: &str, value: u32) {
        let entry = self.values.entry(key.to_string()).or_default();
        *entry = (*entry).max(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(animator: &mut CounterAnimator) -> Vec<u32> {
        let mut published = vec![animator.value()];
        // bounded so a bug can't hang the test
        for _ in 0..100_000 {
            match animator.tick() {
                Tick::Progress(v) => published.push(v),
                Tick::Done(v) => {
                    published.push(v);
                    break;
                }
                Tick::Stopped => break,
            }
        }
        published
    }

    #[test]
    fn test_fifteen_over_600ms() {
        let mut animator = CounterAnimator::new(15, Duration::from_millis(600));
        for _ in 0..37 {
            assert!(matches!(animator.tick(), Tick::Progress(_)));
        }
        assert_eq!(animator.value(), 14);
        assert_eq!(animator.tick(), Tick::Done(15));
        assert!(animator.is_finished());
        assert_eq!(animator.tick(), Tick::Stopped);
        assert_eq!(animator.value(), 15);
    }

    #[test]
    fn test_zero_target_is_terminal() {
        let mut animator = CounterAnimator::new(0, Duration::from_millis(800));
        assert!(animator.is_finished());
        assert_eq!(run(&mut animator), vec![0]);
    }

    #[test]
    fn test_final_value_is_target_and_non_decreasing() {
        for target in [1, 2, 10, 15, 99, 1000] {
            for ms in [1, 15, 16, 17, 100, 600, 700, 799, 800, 3000] {
                let mut animator = CounterAnimator::new(target, Duration::from_millis(ms));
                let published = run(&mut animator);
                assert_eq!(*published.last().unwrap(), target, "target={target} ms={ms}");
                assert!(
                    published.windows(2).all(|w| w[0] <= w[1]),
                    "not monotonic for target={target} ms={ms}: {published:?}"
                );
                assert!(published.iter().all(|v| *v <= target));
            }
        }
    }

    #[test]
    fn test_uneven_duration_terminates() {
        // 700 / 16 = 43.75 steps
        let mut animator = CounterAnimator::new(10, Duration::from_millis(700));
        let published = run(&mut animator);
        assert!(animator.is_finished());
        assert_eq!(published.len(), 1 + 44);
        assert_eq!(*published.last().unwrap(), 10);
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let mut animator = CounterAnimator::new(7, Duration::ZERO);
        assert!(animator.is_finished());
        assert_eq!(run(&mut animator), vec![7]);
    }

    #[test]
    fn test_cancel_stops_publishing() {
        let mut animator = CounterAnimator::new(15, Duration::from_millis(600));
        animator.tick();
        animator.tick();
        let before = animator.value();
        animator.cancel();
        assert_eq!(animator.tick(), Tick::Stopped);
        assert_eq!(animator.value(), before);
    }

    #[test]
    fn test_counter_state() {
        let mut state = CounterState::new(["experience", "projects"]);
        assert_eq!(state.get("experience"), 0);
        assert_eq!(state.get("missing"), 0);
        state.publish("projects", 4);
        state.publish("projects", 2);
        assert_eq!(state.get("projects"), 4);
    }
}
