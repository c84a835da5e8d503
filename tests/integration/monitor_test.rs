use std::sync::Arc;
use std::time::Duration;

use pulsewatch::application::services::monitor::MonitorService;
use pulsewatch::domain::ports::notifier::Notifier;
use pulsewatch::domain::ports::sink::RecordSink;
use pulsewatch::domain::value_objects::alert_kind::AlertKind;
use pulsewatch::infrastructure::http::HttpProber;
use pulsewatch::infrastructure::persistence::{
    InMemoryResultLog, InMemoryTargetRegistry, TextFileSink,
};

use crate::support::{RecordingNotifier, StubServer, settle};

fn service(notifier: &Arc<RecordingNotifier>) -> MonitorService {
    let prober = HttpProber::new(Duration::from_secs(2), "pulsewatch-tests").expect("client");
    MonitorService::new(
        Arc::new(InMemoryTargetRegistry::new()),
        Arc::new(InMemoryResultLog::default()),
        Arc::new(prober),
        Arc::clone(notifier) as Arc<dyn Notifier>,
    )
}

#[tokio::test]
async fn healthy_endpoint_reflected_in_latest_status() {
    let server = StubServer::start(200).await;
    let notifier = Arc::new(RecordingNotifier::default());
    let service = service(&notifier);

    service
        .register_target(&server.url, Some("Example API"))
        .expect("register");
    let record = service.check_now(&server.url).await;

    assert!(record.is_healthy());
    assert_eq!(record.status_code(), 200);
    let statuses = service.latest_statuses().expect("statuses");
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0].name, "Example API");
    assert_eq!(statuses[0].status_code, 200);
    assert!(statuses[0].is_healthy);
}

#[tokio::test]
async fn outage_and_recovery_alert_once_each() {
    let server = StubServer::start(200).await;
    let notifier = Arc::new(RecordingNotifier::default());
    let service = service(&notifier);
    service
        .register_target(&server.url, Some("Example API"))
        .expect("register");

    service.check_now(&server.url).await;
    server.set_status(503);
    for _ in 0..3 {
        service.check_now(&server.url).await;
    }
    settle().await;
    assert_eq!(notifier.kinds(), vec![AlertKind::Down]);

    server.set_status(200);
    service.check_now(&server.url).await;
    service.check_now(&server.url).await;
    settle().await;
    assert_eq!(notifier.kinds(), vec![AlertKind::Down, AlertKind::Recovered]);

    let alerts = notifier.alerts();
    assert_eq!(alerts[0].name, "Example API");
    assert_eq!(alerts[0].status_code, 503);
    assert_eq!(alerts[1].status_code, 200);

    let logs = service.list_logs(Some(&server.url)).expect("logs");
    assert_eq!(logs.len(), 6);
    assert!(logs[0].is_healthy());
    assert_eq!(logs[5].status_code(), 200);
}

#[tokio::test]
async fn tick_records_disabled_targets_as_never_checked() {
    let up = StubServer::start(201).await;
    let down = StubServer::start(500).await;
    let paused = StubServer::start(200).await;
    let notifier = Arc::new(RecordingNotifier::default());
    let service = service(&notifier);

    service.register_target(&up.url, Some("Up")).expect("up");
    service.register_target(&down.url, Some("Down")).expect("down");
    let skipped = service
        .register_target(&paused.url, Some("Paused"))
        .expect("paused");
    service.set_enabled(skipped.id, false).expect("disable");

    let report = service.run_tick().await;
    assert_eq!(report.checked, 2);
    assert_eq!(report.healthy, 1);
    assert_eq!(report.unhealthy, 1);

    let statuses = service.latest_statuses().expect("statuses");
    let names: Vec<&str> = statuses.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Up", "Down", "Paused"]);
    assert_eq!(statuses[0].status_code, 201);
    assert_eq!(statuses[1].status_code, 500);
    assert!(!statuses[2].has_been_checked());
    assert_eq!(statuses[2].status_code, 0);
}

#[tokio::test]
async fn text_sink_keeps_per_target_history() {
    let server = StubServer::start(200).await;
    let dir = tempfile::tempdir().expect("tempdir");
    let sink = Arc::new(TextFileSink::new(dir.path().to_str().expect("utf-8 path")));
    let notifier = Arc::new(RecordingNotifier::default());
    let service = service(&notifier).with_sink(Arc::clone(&sink) as Arc<dyn RecordSink>);

    service
        .register_target(&server.url, Some("Example API"))
        .expect("register");
    service.check_now(&server.url).await;
    server.set_status(404);
    service.check_now(&server.url).await;

    let contents = std::fs::read_to_string(sink.file_path("Example API")).expect("read log");
    assert!(contents.contains("Website Name: Example API"));
    assert!(contents.contains("Status Code: 200"));
    assert!(contents.contains("Status Code: 404"));
    assert!(contents.contains("Health Status: Unhealthy"));
}

#[tokio::test]
async fn unreachable_target_is_recorded_as_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let url = format!("http://{}/", listener.local_addr().expect("addr"));
    drop(listener);

    let notifier = Arc::new(RecordingNotifier::default());
    let service = service(&notifier);
    service.register_target(&url, None).expect("register");

    let record = service.check_now(&url).await;

    assert_eq!(record.status_code(), 0);
    assert!(!record.is_healthy());
    assert_eq!(service.list_logs(None).expect("logs").len(), 1);
}
