use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::value_objects::health_state::HealthState;

/// Per-URL edge detector that decides whether an observation warrants an alert.
///
/// Only a Healthy → Unhealthy change fires a down alert and only an
/// Unhealthy → Healthy change fires a recovered alert. The first observation
/// for a URL seeds its state and never fires. Every read-modify-write runs
/// under one lock, so concurrent observations of the same URL are serialized.
#[derive(Debug, Default)]
pub struct NotificationStateMachine {
    states: Mutex<HashMap<String, HealthState>>,
}

impl NotificationStateMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` exactly on a Healthy → Unhealthy transition and moves the
    /// URL to Unhealthy.
    pub fn observe_down(&self, url: &str, is_healthy: bool) -> bool {
        self.observe(
            url,
            is_healthy,
            HealthState::Healthy,
            HealthState::Unhealthy,
        )
    }

    /// Returns `true` exactly on an Unhealthy → Healthy transition and moves the
    /// URL to Healthy.
    pub fn observe_recovered(&self, url: &str, is_healthy: bool) -> bool {
        self.observe(
            url,
            is_healthy,
            HealthState::Unhealthy,
            HealthState::Healthy,
        )
    }

    /// Forget the observation history of `url` and re-arm it: the next
    /// unhealthy observation fires a down alert whatever came before.
    pub fn reset(&self, url: &str) {
        self.lock().insert(url.to_owned(), HealthState::Healthy);
    }

    #[must_use]
    pub fn state(&self, url: &str) -> HealthState {
        self.lock().get(url).copied().unwrap_or_default()
    }

    /// Drop the state of every URL.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn observe(&self, url: &str, is_healthy: bool, from: HealthState, to: HealthState) -> bool {
        let observed = HealthState::from_healthy(is_healthy);
        let mut states = self.lock();
        match states.get(url).copied().unwrap_or_default() {
            HealthState::Unknown => {
                states.insert(url.to_owned(), observed);
                false
            }
            previous if previous == from && observed == to => {
                states.insert(url.to_owned(), to);
                true
            }
            _ => false,
        }
    }

    // Every mutation is a single insert, so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, HealthState>> {
        self.states.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
