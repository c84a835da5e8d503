use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::time::Instant;

use pulsewatch::application::config::MonitorSettings;
use pulsewatch::application::services::monitor::MonitorService;
use pulsewatch::application::services::scheduler::{Scheduler, SchedulerState};
use pulsewatch::domain::entities::health_record::HealthCheckRecord;
use pulsewatch::domain::ports::notifier::Notifier;
use pulsewatch::domain::ports::prober::Prober;
use pulsewatch::domain::value_objects::alert_kind::AlertKind;
use pulsewatch::infrastructure::persistence::{InMemoryResultLog, InMemoryTargetRegistry};

use crate::support::RecordingNotifier;

/// Unhealthy on every probe whose index is listed in `down_on`.
struct SequenceProber {
    calls: AtomicUsize,
    down_on: Vec<usize>,
}

#[async_trait]
impl Prober for SequenceProber {
    async fn probe(&self, url: &str) -> HealthCheckRecord {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let code = if self.down_on.contains(&call) { 503 } else { 200 };
        HealthCheckRecord::new(url, Utc::now(), code)
    }
}

fn scheduler(down_on: Vec<usize>, notifier: &Arc<RecordingNotifier>) -> Scheduler {
    let service = MonitorService::new(
        Arc::new(InMemoryTargetRegistry::new()),
        Arc::new(InMemoryResultLog::default()),
        Arc::new(SequenceProber {
            calls: AtomicUsize::new(0),
            down_on,
        }),
        Arc::clone(notifier) as Arc<dyn Notifier>,
    );
    service
        .register_target("https://api.example.com", Some("Example API"))
        .expect("register");
    Scheduler::new(Arc::new(service), &MonitorSettings::default())
}

async fn advance_to(start: Instant, secs: u64) {
    tokio::time::sleep_until(start + Duration::from_secs(secs)).await;
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn periodic_ticks_drive_edge_triggered_alerts() {
    let notifier = Arc::new(RecordingNotifier::default());
    // ticks at t=5, 60, 120, 180, 240: healthy, down, down, down, healthy
    let scheduler = scheduler(vec![1, 2, 3], &notifier);
    let start = Instant::now();
    assert!(scheduler.start());

    advance_to(start, 250).await;

    assert_eq!(notifier.kinds(), vec![AlertKind::Down, AlertKind::Recovered]);
    let logs = scheduler.service().list_logs(None).expect("logs");
    assert_eq!(logs.len(), 5);
}

#[tokio::test(start_paused = true)]
async fn stop_leaves_history_intact() {
    let notifier = Arc::new(RecordingNotifier::default());
    let scheduler = scheduler(vec![], &notifier);
    let start = Instant::now();
    scheduler.start();

    advance_to(start, 65).await;
    assert!(scheduler.stop());
    assert_eq!(scheduler.state(), SchedulerState::Stopped);

    advance_to(start, 600).await;
    assert_eq!(scheduler.service().list_logs(None).expect("logs").len(), 2);
    assert!(notifier.kinds().is_empty());
}
