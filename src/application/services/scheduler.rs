use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use super::monitor::MonitorService;
use crate::application::config::MonitorSettings;

/// Lifecycle of the periodic monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Stopped,
    Running,
}

impl std::fmt::Display for SchedulerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stopped => write!(f, "stopped"),
            Self::Running => write!(f, "running"),
        }
    }
}

/// Drives [`MonitorService::run_tick`] on a fixed cadence.
///
/// After `start`, one tick fires once the warm-up delay has elapsed and then
/// one every `interval`, measured from the start instant. Each tick runs in
/// its own task, so a slow tick never delays the next one. `stop` only
/// cancels future ticks; ticks already in flight run to completion.
pub struct Scheduler {
    service: Arc<MonitorService>,
    interval: Duration,
    warmup: Duration,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Scheduler {
    #[must_use]
    pub fn new(service: Arc<MonitorService>, settings: &MonitorSettings) -> Self {
        Self::with_timing(service, settings.interval, settings.warmup)
    }

    /// A zero `interval` is raised to one second.
    #[must_use]
    pub fn with_timing(service: Arc<MonitorService>, interval: Duration, warmup: Duration) -> Self {
        Self {
            service,
            interval: interval.max(Duration::from_secs(1)),
            warmup,
            handle: Mutex::new(None),
        }
    }

    /// Start ticking. Returns `false` if the scheduler was already running.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(&self) -> bool {
        let mut handle = self.lock();
        if handle.as_ref().is_some_and(|h| !h.is_finished()) {
            tracing::debug!("Scheduler already running");
            return false;
        }
        *handle = Some(tokio::spawn(run_loop(
            Arc::clone(&self.service),
            self.interval,
            self.warmup,
        )));
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            warmup_secs = self.warmup.as_secs(),
            "Scheduler started"
        );
        true
    }

    /// Cancel future ticks. Returns `false` if the scheduler was not running.
    pub fn stop(&self) -> bool {
        match self.lock().take() {
            Some(handle) => {
                handle.abort();
                tracing::info!("Scheduler stopped");
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn state(&self) -> SchedulerState {
        if self.lock().as_ref().is_some_and(|h| !h.is_finished()) {
            SchedulerState::Running
        } else {
            SchedulerState::Stopped
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state() == SchedulerState::Running
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn service(&self) -> &Arc<MonitorService> {
        &self.service
    }

    fn lock(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.handle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        let handle = self
            .handle
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            handle.abort();
        }
    }
}

async fn run_loop(service: Arc<MonitorService>, interval: Duration, warmup: Duration) {
    let start = Instant::now();
    let mut ticker = tokio::time::interval_at(start + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let warmup_sleep = tokio::time::sleep_until(start + warmup);
    tokio::pin!(warmup_sleep);
    let mut warmed_up = false;

    loop {
        tokio::select! {
            () = &mut warmup_sleep, if !warmed_up => {
                warmed_up = true;
                spawn_tick(&service);
            }
            _ = ticker.tick() => spawn_tick(&service),
        }
    }
}

fn spawn_tick(service: &Arc<MonitorService>) {
    let service = Arc::clone(service);
    tokio::spawn(async move {
        service.run_tick().await;
    });
}
