use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use pulsewatch::domain::entities::alert::HealthAlert;
use pulsewatch::domain::ports::notifier::{NotificationError, Notifier};
use pulsewatch::domain::value_objects::alert_kind::AlertKind;

// ---------------------------------------------------------------------------
// HTTP stub
// ---------------------------------------------------------------------------

/// Local HTTP server answering every GET with a switchable status code.
pub struct StubServer {
    pub url: String,
    status: Arc<AtomicU16>,
}

impl StubServer {
    pub async fn start(initial_status: u16) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let status = Arc::new(AtomicU16::new(initial_status));
        let served = Arc::clone(&status);
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let code = served.load(Ordering::SeqCst);
                tokio::spawn(async move {
                    let mut buf = vec![0_u8; 4096];
                    let mut request = Vec::new();
                    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut buf).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => request.extend_from_slice(&buf[..n]),
                        }
                    }
                    let response = format!(
                        "HTTP/1.1 {code} Stub\r\ncontent-length: 0\r\nconnection: close\r\n\r\n"
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                });
            }
        });
        Self {
            url: format!("http://{addr}/health"),
            status,
        }
    }

    pub fn set_status(&self, code: u16) {
        self.status.store(code, Ordering::SeqCst);
    }
}

// ---------------------------------------------------------------------------
// Recording notifier
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<HealthAlert>>,
}

impl RecordingNotifier {
    pub fn kinds(&self) -> Vec<AlertKind> {
        self.alerts
            .lock()
            .expect("lock")
            .iter()
            .map(|a| a.kind)
            .collect()
    }

    pub fn alerts(&self) -> Vec<HealthAlert> {
        self.alerts.lock().expect("lock").clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_down(&self, alert: &HealthAlert) -> Result<(), NotificationError> {
        self.alerts.lock().expect("lock").push(alert.clone());
        Ok(())
    }

    async fn notify_recovered(&self, alert: &HealthAlert) -> Result<(), NotificationError> {
        self.alerts.lock().expect("lock").push(alert.clone());
        Ok(())
    }
}

/// Let fire-and-forget dispatch tasks finish.
pub async fn settle() {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
}
