pub mod notifier;
pub mod prober;
pub mod registry;
pub mod result_log;
pub mod sink;

pub use notifier::{NotificationError, Notifier};
pub use prober::{DEFAULT_USER_AGENT, ProbeError, Prober};
pub use registry::{TargetError, TargetRegistry};
pub use result_log::{DEFAULT_LOG_CAPACITY, LogError, ResultLog};
pub use sink::{RecordSink, SinkError};
