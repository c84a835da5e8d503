pub mod monitor;
pub mod scheduler;

pub use monitor::{MonitorError, MonitorService, TickReport};
pub use scheduler::{Scheduler, SchedulerState};
