//! Per-provider sliding-window rate limiters.
//!
//! Each limiter tracks recent request timestamps behind a
//! `tokio::sync::Mutex`. The capacity check and the slot reservation (the
//! timestamp append) happen under a single lock acquisition, so two
//! concurrent callers can never both claim the last free slot. Waiting
//! happens with the lock released, after which the check is re-run from
//! scratch.
//!
//! `acquire` is the recording step: a request that later draws an HTTP
//! 429 keeps its timestamp, which keeps local accounting honest with the
//! upstream's view.

use std::collections::VecDeque;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::error::ApiError;

fn prune_window(stamps: &mut VecDeque<Instant>, now: Instant, period: Duration) {
    while let Some(&oldest) = stamps.front() {
        if now.duration_since(oldest) >= period {
            stamps.pop_front();
        } else {
            break;
        }
    }
}

/// Wait until the oldest in-window timestamp ages out.
fn wait_for_oldest(stamps: &VecDeque<Instant>, now: Instant, period: Duration) -> Duration {
    match stamps.front() {
        Some(&oldest) => period.saturating_sub(now.duration_since(oldest)),
        None => Duration::ZERO,
    }
}

/// Limiter for football-data.org: at most `capacity` requests per rolling
/// `period`. Never rejects a caller; excess acquisitions wait out the
/// window.
#[derive(Debug)]
pub struct SlidingWindowLimiter {
    provider: &'static str,
    capacity: usize,
    period: Duration,
    window: Mutex<VecDeque<Instant>>,
}

impl SlidingWindowLimiter {
    pub fn new(provider: &'static str, capacity: usize, period: Duration) -> Self {
        Self {
            provider,
            capacity,
            period,
            window: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Reserves one request slot, suspending the caller while the window
    /// is full. Must be called immediately before issuing the request.
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut stamps = self.window.lock().await;
                let now = Instant::now();
                prune_window(&mut stamps, now, self.period);

                if stamps.len() < self.capacity {
                    stamps.push_back(now);
                    debug!(
                        "Rate limit slot acquired: provider={}, in_window={}/{}",
                        self.provider,
                        stamps.len(),
                        self.capacity
                    );
                    return;
                }
                wait_for_oldest(&stamps, now, self.period)
            };

            warn!(
                "Rate limit reached for {}, waiting {:?} for window capacity",
                self.provider, wait
            );
            tokio::time::sleep(wait).await;
        }
    }

    /// Number of requests currently inside the observation window.
    pub async fn recorded_in_window(&self) -> usize {
        let mut stamps = self.window.lock().await;
        prune_window(&mut stamps, Instant::now(), self.period);
        stamps.len()
    }
}

#[derive(Debug)]
struct DualWindowState {
    minute: VecDeque<Instant>,
    day: NaiveDate,
    day_count: usize,
}

/// Limiter for api-football: two independent counters, a rolling
/// per-minute window and a provider-local calendar-day budget. The day
/// budget fails fast — waiting for a day rollover is impractical — while
/// minute pressure is waited out like [`SlidingWindowLimiter`].
#[derive(Debug)]
pub struct DualWindowLimiter {
    provider: &'static str,
    minute_capacity: usize,
    period: Duration,
    daily_capacity: usize,
    state: Mutex<DualWindowState>,
}

impl DualWindowLimiter {
    pub fn new(
        provider: &'static str,
        minute_capacity: usize,
        period: Duration,
        daily_capacity: usize,
    ) -> Self {
        Self {
            provider,
            minute_capacity,
            period,
            daily_capacity,
            state: Mutex::new(DualWindowState {
                minute: VecDeque::with_capacity(minute_capacity),
                day: Local::now().date_naive(),
                day_count: 0,
            }),
        }
    }

    /// Reserves one request slot against both counters.
    ///
    /// # Errors
    /// Returns [`ApiError::DailyLimitExceeded`] once the calendar-day
    /// budget is spent, regardless of the state of the minute window.
    pub async fn acquire(&self) -> Result<(), ApiError> {
        loop {
            let wait = {
                let mut state = self.state.lock().await;
                let today = Local::now().date_naive();
                if state.day != today {
                    debug!(
                        "Provider day rolled over for {}: {} -> {}",
                        self.provider, state.day, today
                    );
                    state.day = today;
                    state.day_count = 0;
                }

                if state.day_count >= self.daily_capacity {
                    warn!(
                        "Daily quota exhausted for {}: {}/{}",
                        self.provider, state.day_count, self.daily_capacity
                    );
                    return Err(ApiError::daily_limit_exceeded(self.provider));
                }

                let now = Instant::now();
                prune_window(&mut state.minute, now, self.period);

                if state.minute.len() < self.minute_capacity {
                    state.minute.push_back(now);
                    state.day_count += 1;
                    debug!(
                        "Rate limit slot acquired: provider={}, minute={}/{}, day={}/{}",
                        self.provider,
                        state.minute.len(),
                        self.minute_capacity,
                        state.day_count,
                        self.daily_capacity
                    );
                    return Ok(());
                }
                wait_for_oldest(&state.minute, now, self.period)
            };

            warn!(
                "Rate limit reached for {}, waiting {:?} for window capacity",
                self.provider, wait
            );
            tokio::time::sleep(wait).await;
        }
    }

    /// Requests recorded against the current provider day.
    pub async fn recorded_today(&self) -> usize {
        let state = self.state.lock().await;
        if state.day == Local::now().date_naive() {
            state.day_count
        } else {
            0
        }
    }

    /// Pre-loads the day counter, as if `count` requests had already been
    /// recorded today.
    #[cfg(test)]
    pub async fn seed_day_count(&self, count: usize) {
        let mut state = self.state.lock().await;
        state.day = Local::now().date_naive();
        state.day_count = count;
    }
}
