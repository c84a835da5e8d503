pub mod alert_kind;
pub mod health_state;
pub mod status_code;

pub use alert_kind::AlertKind;
pub use health_state::HealthState;
pub use status_code::{TIMEOUT_STATUS, TRANSPORT_FAILURE_STATUS, is_healthy_status};
