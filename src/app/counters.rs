use std::sync::{Arc, Mutex};
use std::time::Duration;

use leptos::prelude::*;

use crate::content::Metric;
use crate::counter::{CounterAnimator, CounterState, Tick, TICK_INTERVAL};

/// A running counter animation bound to one browser interval.
pub struct CounterTimer {
    animator: Arc<Mutex<CounterAnimator>>,
    handle: Arc<Mutex<Option<IntervalHandle>>>,
}

impl CounterTimer {
    /// Starts animating `metric` into `state`. Returns `None` when there is
    /// nothing to animate (the final value is published right away).
    pub fn start(metric: &Metric, state: RwSignal<CounterState>) -> Option<Self> {
        let key = metric.key.clone();
        let animator = CounterAnimator::new(
            metric.target,
            Duration::from_millis(metric.duration_ms),
        );
        if animator.is_finished() {
            state.update(|s| s.publish(&key, animator.value()));
            return None;
        }

        let animator = Arc::new(Mutex::new(animator));
        let handle = Arc::new(Mutex::new(None::<IntervalHandle>));
        let on_tick = {
            let animator = animator.clone();
            let handle = handle.clone();
            move || {
                let tick = animator
                    .lock()
                    .expect("should be able to lock counter")
                    .tick();
                match tick {
                    Tick::Progress(v) => {
                        state.try_update(|s| s.publish(&key, v));
                    }
                    Tick::Done(v) => {
                        state.try_update(|s| s.publish(&key, v));
                        clear(&handle);
                    }
                    Tick::Stopped => clear(&handle),
                }
            }
        };
        let interval = match set_interval_with_handle(on_tick, TICK_INTERVAL) {
            Ok(interval) => interval,
            Err(e) => {
                log::error!("couldn't start counter {}: {e:?}", metric.key);
                return None;
            }
        };
        *handle.lock().expect("should be able to lock interval") = Some(interval);

        Some(Self { animator, handle })
    }

    pub fn cancel(&self) {
        self.animator
            .lock()
            .expect("should be able to lock counter")
            .cancel();
        clear(&self.handle);
    }
}

fn clear(handle: &Mutex<Option<IntervalHandle>>) {
    if let Some(h) = handle.lock().expect("should be able to lock interval").take() {
        h.clear();
    }
}

/// Animates every metric from zero, concurrently, once mounted in the
/// browser. All intervals are cleared when the owning view goes away.
pub fn use_counters(metrics: &[Metric]) -> RwSignal<CounterState> {
    let state = RwSignal::new(CounterState::new(metrics.iter().map(|m| m.key.as_str())));
    let timers = StoredValue::new(Vec::<CounterTimer>::new());

    let metrics = metrics.to_vec();
    Effect::new(move |_| {
        let started = metrics
            .iter()
            .filter_map(|m| CounterTimer::start(m, state))
            .collect::<Vec<_>>();
        log::debug!("started {} counter animations", started.len());
        timers.set_value(started);
    });

    on_cleanup(move || {
        timers.try_with_value(|timers| timers.iter().for_each(CounterTimer::cancel));
    });

    state
}
