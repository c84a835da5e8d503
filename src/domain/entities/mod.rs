pub mod alert;
pub mod health_record;
pub mod health_status;
pub mod target;

pub use alert::HealthAlert;
pub use health_record::{HealthCheckRecord, RecordId};
pub use health_status::HealthStatus;
pub use target::{MonitoredTarget, TargetId};
